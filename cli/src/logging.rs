//! Diagnostics go to stderr so stdout stays valid JSON.
//!
//! `VKSC_JSON_LOG` selects what is shown, in `RUST_LOG` syntax, and wins
//! over `RUST_LOG` when both are set. Without either, only warnings (such as
//! lenient-mode recoveries) are printed.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "VKSC_JSON_LOG";

fn build_filter(verbose: bool) -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

pub fn init_tracing(verbose: bool) {
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
