//! vksc-json-parser
//!
//! Reads Vulkan SC API structures from their JSON representation:
//!  1) one parser per structure (`FromJson`), with enum and flag names
//!     resolved through generated tables,
//!  2) `pNext` chains dispatched on `sType`,
//!  3) pipeline description documents bundling a pipeline with the objects
//!     it references.
//!
//! Strings, arrays, and pointed-to structures are allocated in a
//! [`BumpArena`](vksc_json_arena::BumpArena); parsed structures borrow from it.

#[macro_use]
mod macros;

pub mod constants;
pub mod context;
pub mod error;
pub mod traits;
pub mod utils;
pub mod primitives;
pub mod enums;
pub mod flags;
pub mod handles;
pub mod geometry;
pub mod device;
pub mod sc;
pub mod sampler;
pub mod render_pass;
pub mod descriptor;
pub mod pipeline;
pub mod pnext;
pub mod pipeline_state;
pub mod parser;

pub use context::{Context, ParseOptions};
pub use error::VkJsonError;
pub use parser::{to_json_string, JsonParser};
pub use pnext::{find_in_chain, iter_chain, AnyStructure, ChainMember, PNext};
pub use pipeline_state::PipelineDescription;
pub use primitives::{Bool32, Bytes};
pub use traits::{FromJson, TaggedStructure};
