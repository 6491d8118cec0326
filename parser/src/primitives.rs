//! Conversions for scalars, strings, arrays, and blobs.

use crate::{
    context::Context,
    error::VkJsonError,
    traits::FromJson,
    utils::{decode_base64, is_null_pointer, quote},
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{fmt, ops::Deref};

macro_rules! impl_from_json_for_integer {
    ($($ty:ty),*) => { $(
        impl<'a> FromJson<'a> for $ty {
            fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
                let wide = ctx.integer(value, stringify!($ty))?;
                <$ty>::try_from(wide).map_err(|_| ctx.out_of_range(wide, stringify!($ty)))
            }
        }
    )* };
}

impl_from_json_for_integer!(u8, u16, u32, i32, u64, i64, usize);

impl<'a> FromJson<'a> for f32 {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        match value {
            Value::Null => Ok(0.0),
            Value::Number(number) => number
                .as_f64()
                .map(|v| v as f32)
                .ok_or_else(|| ctx.out_of_range(number, "f32")),
            Value::String(text) => text
                .trim()
                .parse::<f32>()
                .map_err(|_| ctx.invalid(format!("{} is not a valid f32", quote(text)))),
            other => Err(ctx.type_mismatch("number", other)),
        }
    }
}

/// `VkBool32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bool32(pub u32);

impl Bool32 {
    pub const FALSE: Bool32 = Bool32(0);
    pub const TRUE: Bool32 = Bool32(1);

    pub fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool32 {
    fn from(value: bool) -> Bool32 {
        Bool32(u32::from(value))
    }
}

impl From<Bool32> for bool {
    fn from(value: Bool32) -> bool {
        value.as_bool()
    }
}

impl fmt::Debug for Bool32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0 => f.write_str("VK_FALSE"),
            1 => f.write_str("VK_TRUE"),
            other => write!(f, "Bool32({})", other),
        }
    }
}

impl Serialize for Bool32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            0 => serializer.serialize_str("VK_FALSE"),
            1 => serializer.serialize_str("VK_TRUE"),
            other => serializer.serialize_u32(other),
        }
    }
}

impl<'a> FromJson<'a> for Bool32 {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        if let Value::String(text) = value {
            match text.trim() {
                "true" => return Ok(Bool32::TRUE),
                "false" => return Ok(Bool32::FALSE),
                _ => {}
            }
        }
        u32::from_json(ctx, value).map(Bool32)
    }
}

impl<'a> FromJson<'a> for &'a str {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        match value {
            Value::Null => Ok(""),
            Value::String(text) => Ok(ctx.arena().alloc_str(text)),
            other => Err(ctx.type_mismatch("string", other)),
        }
    }
}

/// `null` and `"NULL"` are the null pointer.
impl<'a, T: FromJson<'a>> FromJson<'a> for Option<T> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        if is_null_pointer(value) {
            return Ok(None);
        }
        T::from_json(ctx, value).map(Some)
    }
}

impl<'a, T> FromJson<'a> for &'a [T]
where
    T: FromJson<'a> + Copy,
{
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        match value {
            Value::Array(items) => {
                let slice = ctx.arena().alloc_slice_try_fill_with(items.len(), |index| {
                    ctx.in_element(index, |ctx| T::from_json(ctx, &items[index]))
                })?;
                Ok(&*slice)
            }
            other if is_null_pointer(other) => Ok(&[]),
            other => Err(ctx.type_mismatch("array", other)),
        }
    }
}

/// Fixed-size arrays; missing trailing elements are zero.
impl<'a, T, const N: usize> FromJson<'a> for [T; N]
where
    T: FromJson<'a> + Copy + Default,
{
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let mut out = [T::default(); N];
        match value {
            Value::Null => {}
            Value::Array(items) => {
                if items.len() > N {
                    ctx.report(ctx.invalid(format!(
                        "expected at most {} elements but {} were given",
                        N,
                        items.len()
                    )))?;
                }
                for (index, item) in items.iter().take(N).enumerate() {
                    out[index] = ctx.in_element(index, |ctx| T::from_json(ctx, item))?;
                }
            }
            other => return Err(ctx.type_mismatch("array", other)),
        }
        Ok(out)
    }
}

/// An opaque byte blob, written either as an array of byte values or as a
/// base64 string.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Bytes<'a>(pub &'a [u8]);

impl<'a> Bytes<'a> {
    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> Deref for Bytes<'a> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bytes({} bytes)", self.0.len())
    }
}

impl Serialize for Bytes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

impl<'a> FromJson<'a> for Bytes<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        match value {
            Value::String(text) if !is_null_pointer(value) => {
                let bytes = decode_base64(text).ok_or_else(|| ctx.invalid("invalid base64 data"))?;
                Ok(Bytes(ctx.arena().alloc_slice_copy(&bytes)))
            }
            other => <&'a [u8]>::from_json(ctx, other).map(Bytes),
        }
    }
}

/// SPIR-V code: an array of 32-bit words, or a base64 string holding the
/// little-endian binary.
pub fn spirv_words<'a>(ctx: &Context<'a>, value: &Value) -> Result<&'a [u32], VkJsonError> {
    match value {
        Value::String(text) if !is_null_pointer(value) => {
            let bytes = decode_base64(text).ok_or_else(|| ctx.invalid("invalid base64 SPIR-V"))?;
            if bytes.len() % 4 != 0 {
                return Err(ctx.invalid(format!("SPIR-V size {} is not a multiple of 4", bytes.len())));
            }
            let words: Vec<u32> = bytes
                .chunks_exact(4)
                .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
                .collect();
            Ok(&*ctx.arena().alloc_slice_copy(&words))
        }
        other => <&'a [u32]>::from_json(ctx, other),
    }
}
