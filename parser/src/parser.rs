use crate::{
    context::{Context, ParseOptions},
    error::VkJsonError,
    pipeline_state::PipelineDescription,
    pnext::{parse_p_next_chain, AnyStructure, PNext},
    traits::FromJson,
};
use serde::Serialize;
use serde_json::Value;
use std::{any::type_name, fs, io::Read, path::Path};
use vksc_json_arena::BumpArena;

/// Reads Vulkan SC structures from JSON text into an arena.
///
/// Everything a parse returns borrows from the arena, so results stay valid
/// until the arena is cleared or dropped.
pub struct JsonParser<'a> {
    ctx: Context<'a>,
}

impl<'a> JsonParser<'a> {
    pub fn new(arena: &'a BumpArena) -> JsonParser<'a> {
        JsonParser::with_options(arena, ParseOptions::default())
    }

    pub fn with_options(arena: &'a BumpArena, options: ParseOptions) -> JsonParser<'a> {
        JsonParser {
            ctx: Context::new(arena, options),
        }
    }

    pub fn arena(&self) -> &'a BumpArena {
        self.ctx.arena()
    }

    pub fn options(&self) -> ParseOptions {
        self.ctx.options()
    }

    /// Parses `text` as a `T`.
    pub fn parse<T: FromJson<'a>>(&self, text: &str) -> Result<T, VkJsonError> {
        tracing::debug!(ty = type_name::<T>(), bytes = text.len(), "parsing JSON document");
        let value: Value = serde_json::from_str(text)?;
        self.parse_value(&value)
    }

    pub fn parse_value<T: FromJson<'a>>(&self, value: &Value) -> Result<T, VkJsonError> {
        let parsed = T::from_json(&self.ctx, value);
        tracing::trace!(
            allocated = self.arena().allocated_bytes(),
            blocks = self.arena().block_count(),
            "arena usage after parse"
        );
        parsed
    }

    pub fn parse_reader<T: FromJson<'a>, R: Read>(&self, reader: R) -> Result<T, VkJsonError> {
        let value: Value = serde_json::from_reader(reader)?;
        self.parse_value(&value)
    }

    pub fn parse_file<T: FromJson<'a>>(&self, path: impl AsRef<Path>) -> Result<T, VkJsonError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading JSON file");
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Parses a document holding a `pNext` chain (or `null`).
    pub fn parse_p_next_chain(&self, text: &str) -> Result<Option<&'a PNext<'a>>, VkJsonError> {
        let value: Value = serde_json::from_str(text)?;
        parse_p_next_chain(&self.ctx, &value)
    }

    /// Parses a top-level create info of whichever type its `sType` names.
    pub fn parse_any(&self, text: &str) -> Result<AnyStructure<'a>, VkJsonError> {
        let value: Value = serde_json::from_str(text)?;
        self.parse_any_value(&value)
    }

    pub fn parse_any_value(&self, value: &Value) -> Result<AnyStructure<'a>, VkJsonError> {
        let ctx = &self.ctx;
        let obj = ctx.object(value)?;
        let s_type = ctx
            .read_structure_type(obj)?
            .ok_or_else(|| ctx.invalid("document has no sType"))?;
        tracing::debug!(?s_type, "dispatching on root structure type");
        AnyStructure::parse_as(ctx, s_type, value)?.ok_or_else(|| VkJsonError::UnsupportedStructure {
            path:   ctx.xpath(),
            s_type: format!("{:?}", s_type),
        })
    }

    /// Parses a `GraphicsPipelineState` / `ComputePipelineState` document.
    pub fn parse_pipeline_description(&self, text: &str) -> Result<PipelineDescription<'a>, VkJsonError> {
        self.parse(text)
    }
}

/// Writes a parsed structure back out as pretty-printed JSON.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, VkJsonError> {
    Ok(serde_json::to_string_pretty(value)?)
}
