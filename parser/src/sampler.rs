use crate::{
    context::Context,
    enums::{
        BorderColor, ChromaLocation, CompareOp, Filter, Format, SamplerAddressMode, SamplerMipmapMode,
        SamplerReductionMode, SamplerYcbcrModelConversion, SamplerYcbcrRange,
    },
    error::VkJsonError,
    flags::{SamplerCreateFlags, SamplerYcbcrConversionCreateFlags},
    geometry::ComponentMapping,
    handles::SamplerYcbcrConversion,
    primitives::Bool32,
    traits::FromJson,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

vk_struct! {
    /// `VkSamplerYcbcrConversionCreateInfo`.
    pub struct SamplerYcbcrConversionCreateInfo<'a> : SAMPLER_YCBCR_CONVERSION_CREATE_INFO {
        format:                        Format                      => "format",
        ycbcr_model:                   SamplerYcbcrModelConversion => "ycbcrModel",
        ycbcr_range:                   SamplerYcbcrRange           => "ycbcrRange",
        components:                    ComponentMapping            => "components",
        x_chroma_offset:               ChromaLocation              => "xChromaOffset",
        y_chroma_offset:               ChromaLocation              => "yChromaOffset",
        chroma_filter:                 Filter                      => "chromaFilter",
        force_explicit_reconstruction: Bool32                      => "forceExplicitReconstruction",
    }
}

vk_struct! {
    /// `VkSamplerYcbcrConversionInfo`, chained to a sampler or image view.
    pub struct SamplerYcbcrConversionInfo<'a> : SAMPLER_YCBCR_CONVERSION_INFO {
        conversion: SamplerYcbcrConversion => "conversion",
    }
}

vk_struct! {
    /// `VkSamplerCreateInfo`.
    pub struct SamplerCreateInfo<'a> : SAMPLER_CREATE_INFO {
        flags:                   SamplerCreateFlags => "flags",
        mag_filter:              Filter             => "magFilter",
        min_filter:              Filter             => "minFilter",
        mipmap_mode:             SamplerMipmapMode  => "mipmapMode",
        address_mode_u:          SamplerAddressMode => "addressModeU",
        address_mode_v:          SamplerAddressMode => "addressModeV",
        address_mode_w:          SamplerAddressMode => "addressModeW",
        mip_lod_bias:            f32                => "mipLodBias",
        anisotropy_enable:       Bool32             => "anisotropyEnable",
        max_anisotropy:          f32                => "maxAnisotropy",
        compare_enable:          Bool32             => "compareEnable",
        compare_op:              CompareOp          => "compareOp",
        min_lod:                 f32                => "minLod",
        max_lod:                 f32                => "maxLod",
        border_color:            BorderColor        => "borderColor",
        unnormalized_coordinates: Bool32            => "unnormalizedCoordinates",
    }
}

vk_struct! {
    /// `VkSamplerReductionModeCreateInfo`.
    pub struct SamplerReductionModeCreateInfo<'a> : SAMPLER_REDUCTION_MODE_CREATE_INFO {
        reduction_mode: SamplerReductionMode => "reductionMode",
    }
}

/// `VkClearColorValue`, kept as the four raw words of the union. JSON may
/// spell it through any one of `uint32`, `int32`, or `float32`; when several
/// are present the first in that order wins.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearColorValue {
    pub uint32: [u32; 4],
}

impl ClearColorValue {
    pub fn from_float32(color: [f32; 4]) -> ClearColorValue {
        ClearColorValue { uint32: color.map(f32::to_bits) }
    }

    pub fn from_int32(color: [i32; 4]) -> ClearColorValue {
        ClearColorValue { uint32: color.map(|c| c as u32) }
    }

    pub fn float32(&self) -> [f32; 4] {
        self.uint32.map(f32::from_bits)
    }

    pub fn int32(&self) -> [i32; 4] {
        self.uint32.map(|w| w as i32)
    }
}

impl fmt::Debug for ClearColorValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ClearColorValue")
            .field("float32", &self.float32())
            .field("uint32", &self.uint32)
            .finish()
    }
}

impl Serialize for ClearColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClearColorValue", 2)?;
        state.serialize_field("float32", &self.float32())?;
        state.serialize_field("uint32", &self.uint32)?;
        state.end()
    }
}

impl<'a> FromJson<'a> for ClearColorValue {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let obj = ctx.object(value)?;
        if !ctx.member(obj, "uint32").is_null() {
            return ctx.field(obj, "uint32").map(|uint32| ClearColorValue { uint32 });
        }
        if !ctx.member(obj, "int32").is_null() {
            return ctx.field(obj, "int32").map(ClearColorValue::from_int32);
        }
        ctx.field(obj, "float32").map(ClearColorValue::from_float32)
    }
}

vk_struct! {
    /// `VkSamplerCustomBorderColorCreateInfoEXT`.
    pub struct SamplerCustomBorderColorCreateInfoEXT<'a> : SAMPLER_CUSTOM_BORDER_COLOR_CREATE_INFO_EXT {
        custom_border_color: ClearColorValue => "customBorderColor",
        format:              Format          => "format",
    }
}
