mod logging;

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use vksc_json::types::{PipelineCreateInfo, RenderPassDescription};
use vksc_json::{
    is_pipeline_description, iter_chain, to_json_string, AnyStructure, BumpArena, JsonParser, ParseOptions,
    PipelineDescription, VkJsonError,
};

#[derive(Parser)]
#[command(name = "vkscjson")]
#[command(about = "Parse, normalize, and inspect Vulkan SC JSON documents", long_about = None)]
struct Cli {
    /// Treat unknown enumerants and count mismatches as errors
    #[arg(long, global = true)]
    strict: bool,

    /// Arena block size in bytes
    #[arg(long, global = true)]
    block_size: Option<usize>,

    /// Log parser activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a create info or pipeline description and print it as normalized JSON
    Parse {
        /// Input `.json` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the structure types of the document's `pNext` chain
    Chain {
        /// Input `.json` file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Summarize a pipeline description document
    Pipeline {
        /// Input pipeline `.json` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn read_document(path: &Path) -> Result<Value, VkJsonError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), VkJsonError> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let arena = match cli.block_size {
        Some(size) => BumpArena::with_block_size(size),
        None => BumpArena::new(),
    };
    let options = if cli.strict { ParseOptions::strict() } else { ParseOptions::lenient() };
    let parser = JsonParser::with_options(&arena, options);

    match &cli.command {
        Commands::Parse { input, output } => {
            let document = read_document(input)?;
            let json = if is_pipeline_description(&document) {
                let description: PipelineDescription = parser.parse_value(&document)?;
                to_json_string(&description)?
            } else {
                to_json_string(&parser.parse_any_value(&document)?)?
            };
            tracing::debug!(
                allocated = arena.allocated_bytes(),
                blocks = arena.block_count(),
                "parse finished"
            );
            if let Some(out_path) = output {
                fs::write(out_path, json)?;
                println!("Normalized {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Chain { input } => {
            let document = read_document(input)?;
            let root: AnyStructure = parser.parse_any_value(&document)?;
            println!("{:?}", root.s_type());
            for node in iter_chain(root.p_next()) {
                println!("  -> {:?}", node.s_type());
            }
            Ok(())
        }

        Commands::Pipeline { input } => {
            let document = read_document(input)?;
            let description: PipelineDescription = parser.parse_value(&document)?;
            print_summary(&description);
            Ok(())
        }
    }
}

fn print_summary(description: &PipelineDescription) {
    let kind = match description.pipeline {
        PipelineCreateInfo::Graphics(_) => "graphics",
        PipelineCreateInfo::Compute(_) => "compute",
    };
    println!("kind        = {}", kind);
    println!("stages      = {:?}", description.pipeline.stages());
    if let Some(ref render_pass) = description.render_pass {
        let suffix = match render_pass {
            RenderPassDescription::V1(_) => "",
            RenderPassDescription::V2(_) => " (RenderPass2)",
        };
        println!(
            "render pass = {} attachment(s), {} subpass(es){}",
            render_pass.attachment_count(),
            render_pass.subpass_count(),
            suffix
        );
    }
    println!("set layouts = {}", description.descriptor_set_layouts.len());
    for layout in description.descriptor_set_layouts {
        println!("  {} ({} binding(s))", layout.name, layout.create_info.p_bindings.len());
    }
    println!("samplers    = {}", description.immutable_samplers.len());
    for entry in description.shader_file_names {
        println!("  {:?} → {}", entry.stage, entry.filename);
    }
    if let Some(offline) = description.offline_info() {
        println!("pool entry  = {} byte(s)", offline.pool_entry_size);
        println!("identifier  = {:02x?}", offline.pipeline_identifier);
    }
    if !description.enabled_extensions.is_empty() {
        println!("extensions  = {}", description.enabled_extensions.join(", "));
    }
}
