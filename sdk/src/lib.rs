//! vksc-json
//!
//! Reads Vulkan SC API structures from their JSON representation.
//!
//! - `JsonParser` and the `FromJson` trait (re-exported from the parser)
//! - `BumpArena`, which owns everything a parse returns
//! - Helpers that parse and re-emit normalized JSON in one call

use serde_json::Value;

pub use vksc_json_arena::{with_thread_arena, BumpArena};
pub use vksc_json_parser::{
    find_in_chain, iter_chain, to_json_string, AnyStructure, ChainMember, FromJson, JsonParser, PNext,
    ParseOptions, PipelineDescription, TaggedStructure, VkJsonError,
};

/// Parses a create info of any supported type and writes it back out with
/// every member present and every enum spelled by name.
pub fn normalize_json(text: &str, options: ParseOptions) -> Result<String, VkJsonError> {
    with_thread_arena(|arena| {
        let parser = JsonParser::with_options(arena, options);
        let structure = parser.parse_any(text)?;
        tracing::debug!(s_type = ?structure.s_type(), "normalizing structure");
        to_json_string(&structure)
    })
}

/// Like [`normalize_json`] for pipeline description documents.
pub fn normalize_pipeline_json(text: &str, options: ParseOptions) -> Result<String, VkJsonError> {
    with_thread_arena(|arena| {
        let parser = JsonParser::with_options(arena, options);
        let description = parser.parse_pipeline_description(text)?;
        to_json_string(&description)
    })
}

/// `true` if `value` looks like a pipeline description rather than a single
/// create info.
pub fn is_pipeline_description(value: &Value) -> bool {
    value.get("GraphicsPipelineState").is_some() || value.get("ComputePipelineState").is_some()
}

pub mod arena {
    pub use vksc_json_arena::*;
}

pub mod error {
    pub use vksc_json_parser::error::VkJsonError;
}

pub mod types {
    pub use vksc_json_parser::{
        descriptor::*, device::*, enums::*, flags::*, geometry::*, handles::*, pipeline::*,
        pipeline_state::*, primitives::*, render_pass::*, sampler::*, sc::*,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_fills_missing_members() {
        let text = normalize_json(
            r#"{ "sType": "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO", "magFilter": 1, "maxLod": 4 }"#,
            ParseOptions::default(),
        )
        .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["magFilter"], "VK_FILTER_LINEAR");
        assert_eq!(value["minFilter"], "VK_FILTER_NEAREST");
        assert_eq!(value["pNext"], Value::Null);
        assert_eq!(value["anisotropyEnable"], "VK_FALSE");
    }

    #[test]
    fn normalize_reports_errors() {
        let err = normalize_json(r#"{ "sType": "VK_STRUCTURE_TYPE_EVENT_CREATE_INFO" }"#, ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, VkJsonError::UnsupportedStructure { .. }));
        assert!(normalize_json("{", ParseOptions::default()).is_err());
    }

    #[test]
    fn detects_pipeline_descriptions() {
        assert!(is_pipeline_description(&json!({ "ComputePipelineState": {} })));
        assert!(!is_pipeline_description(&json!({ "sType": "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO" })));
    }
}
