use crate::{context::Context, enums::StructureType, error::VkJsonError};
use serde_json::Value;

/// Conversion from a JSON value to a Vulkan type whose borrowed data
/// (strings, arrays, pointed-to structures) lives in the parse arena `'a`.
///
/// A JSON `null` always converts to the type's zero value.
pub trait FromJson<'a>: Sized {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError>;
}

/// Structures that start with `sType` and `pNext`.
pub trait TaggedStructure {
    const STRUCTURE_TYPE: StructureType;
}
