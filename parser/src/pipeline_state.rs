//! Per-pipeline description documents: one JSON file bundling a pipeline
//! create info with every object it references, as consumed by offline
//! pipeline cache compilers.
//!
//! ```json
//! {
//!     "GraphicsPipelineState": {
//!         "Renderpass": { ... },
//!         "YcbcrSamplers": [ { "ycbcr0": { ... } } ],
//!         "ImmutableSamplers": [ { "sampler0": { ... } } ],
//!         "DescriptorSetLayouts": [ { "layout0": { ... } } ],
//!         "PipelineLayout": { ... },
//!         "GraphicsPipeline": { ... },
//!         "ShaderFileNames": [ { "stage": "VK_SHADER_STAGE_VERTEX_BIT", "filename": "vert.spv" } ],
//!         "PhysicalDeviceFeatures": { ... }
//!     },
//!     "EnabledExtensions": [ "VK_KHR_sampler_ycbcr_conversion" ],
//!     "PipelineUUID": [ 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15 ]
//! }
//! ```

use crate::{
    constants::VK_UUID_SIZE,
    context::Context,
    descriptor::{DescriptorSetLayoutCreateInfo, PipelineLayoutCreateInfo},
    device::PhysicalDeviceFeatures2,
    enums::StructureType,
    error::VkJsonError,
    flags::ShaderStageFlags,
    pipeline::{ComputePipelineCreateInfo, GraphicsPipelineCreateInfo},
    pnext::{find_in_chain, PNext},
    render_pass::{RenderPassCreateInfo, RenderPassCreateInfo2},
    sampler::{SamplerCreateInfo, SamplerYcbcrConversionCreateInfo},
    sc::PipelineOfflineCreateInfo,
    traits::FromJson,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{Map, Value};

const GRAPHICS_STATE: &str = "GraphicsPipelineState";
const COMPUTE_STATE: &str = "ComputePipelineState";

/// A create info stored under a name, written `{ "name": { ... } }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedObject<'a, T> {
    pub name:        &'a str,
    pub create_info: T,
}

impl<'a, T: FromJson<'a>> FromJson<'a> for NamedObject<'a, T> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let obj = ctx.object(value)?;
        let mut entries = obj.iter();
        match (entries.next(), entries.next()) {
            (Some((name, inner)), None) => Ok(NamedObject {
                name:        ctx.arena().alloc_str(name),
                create_info: ctx.in_field(name, |ctx| T::from_json(ctx, inner))?,
            }),
            _ => Err(ctx.invalid(format!("expected an object with one named entry, found {} entries", obj.len()))),
        }
    }
}

impl<T: Serialize> Serialize for NamedObject<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, &self.create_info)?;
        map.end()
    }
}

/// A render pass in either flavor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderPassDescription<'a> {
    V1(RenderPassCreateInfo<'a>),
    V2(RenderPassCreateInfo2<'a>),
}

impl<'a> RenderPassDescription<'a> {
    pub fn attachment_count(&self) -> usize {
        match self {
            RenderPassDescription::V1(info) => info.p_attachments.len(),
            RenderPassDescription::V2(info) => info.p_attachments.len(),
        }
    }

    pub fn subpass_count(&self) -> usize {
        match self {
            RenderPassDescription::V1(info) => info.p_subpasses.len(),
            RenderPassDescription::V2(info) => info.p_subpasses.len(),
        }
    }
}

/// Picks the flavor from `sType`; without one the original flavor is assumed.
impl<'a> FromJson<'a> for RenderPassDescription<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let obj = ctx.object(value)?;
        let s_type = ctx.read_structure_type(obj)?.unwrap_or(StructureType::RENDER_PASS_CREATE_INFO);
        if s_type == StructureType::RENDER_PASS_CREATE_INFO_2 {
            RenderPassCreateInfo2::from_json(ctx, value).map(RenderPassDescription::V2)
        } else {
            RenderPassCreateInfo::from_json(ctx, value).map(RenderPassDescription::V1)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineCreateInfo<'a> {
    Graphics(GraphicsPipelineCreateInfo<'a>),
    Compute(ComputePipelineCreateInfo<'a>),
}

impl<'a> PipelineCreateInfo<'a> {
    pub fn s_type(&self) -> StructureType {
        match self {
            PipelineCreateInfo::Graphics(info) => info.s_type,
            PipelineCreateInfo::Compute(info) => info.s_type,
        }
    }

    pub fn p_next(&self) -> Option<&'a PNext<'a>> {
        match self {
            PipelineCreateInfo::Graphics(info) => info.p_next,
            PipelineCreateInfo::Compute(info) => info.p_next,
        }
    }

    /// Stages in declaration order.
    pub fn stages(&self) -> Vec<ShaderStageFlags> {
        match self {
            PipelineCreateInfo::Graphics(info) => info.p_stages.iter().map(|stage| stage.stage).collect(),
            PipelineCreateInfo::Compute(info) => vec![info.stage.stage],
        }
    }
}

vk_struct! {
    /// Where the SPIR-V for one stage was exported.
    pub struct ShaderFileName<'a> {
        stage:    ShaderStageFlags => "stage",
        filename: &'a str          => "filename",
    }
}

/// A parsed pipeline description document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineDescription<'a> {
    pub pipeline:                 PipelineCreateInfo<'a>,
    pub render_pass:              Option<RenderPassDescription<'a>>,
    pub ycbcr_samplers:           &'a [NamedObject<'a, SamplerYcbcrConversionCreateInfo<'a>>],
    pub immutable_samplers:       &'a [NamedObject<'a, SamplerCreateInfo<'a>>],
    pub descriptor_set_layouts:   &'a [NamedObject<'a, DescriptorSetLayoutCreateInfo<'a>>],
    pub pipeline_layout:          PipelineLayoutCreateInfo<'a>,
    pub shader_file_names:        &'a [ShaderFileName<'a>],
    pub physical_device_features: Option<PhysicalDeviceFeatures2<'a>>,
    pub enabled_extensions:       &'a [&'a str],
    pub pipeline_uuid:            [u8; VK_UUID_SIZE],
}

impl<'a> PipelineDescription<'a> {
    pub fn is_graphics(&self) -> bool {
        matches!(self.pipeline, PipelineCreateInfo::Graphics(_))
    }

    /// The exported SPIR-V file for `stage`.
    pub fn shader_file(&self, stage: ShaderStageFlags) -> Option<&'a str> {
        self.shader_file_names
            .iter()
            .find(|entry| entry.stage == stage)
            .map(|entry| entry.filename)
    }

    /// The offline pipeline info chained to the pipeline create info.
    pub fn offline_info(&self) -> Option<&'a PipelineOfflineCreateInfo<'a>> {
        find_in_chain(self.pipeline.p_next())
    }

    fn parse_state(ctx: &Context<'a>, state: &Map<String, Value>, graphics: bool) -> Result<Self, VkJsonError> {
        let (pipeline, render_pass) = if graphics {
            let render_pass = if !ctx.member(state, "Renderpass2").is_null() {
                let info: RenderPassCreateInfo2 = ctx.field(state, "Renderpass2")?;
                Some(RenderPassDescription::V2(info))
            } else {
                ctx.field(state, "Renderpass")?
            };
            (PipelineCreateInfo::Graphics(ctx.field(state, "GraphicsPipeline")?), render_pass)
        } else {
            (PipelineCreateInfo::Compute(ctx.field(state, "ComputePipeline")?), None)
        };

        Ok(PipelineDescription {
            pipeline,
            render_pass,
            ycbcr_samplers:           ctx.field(state, "YcbcrSamplers")?,
            immutable_samplers:       ctx.field(state, "ImmutableSamplers")?,
            descriptor_set_layouts:   ctx.field(state, "DescriptorSetLayouts")?,
            pipeline_layout:          ctx.field(state, "PipelineLayout")?,
            shader_file_names:        ctx.field(state, "ShaderFileNames")?,
            physical_device_features: ctx.field(state, "PhysicalDeviceFeatures")?,
            enabled_extensions:       &[],
            pipeline_uuid:            [0; VK_UUID_SIZE],
        })
    }
}

impl<'a> FromJson<'a> for PipelineDescription<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let root = ctx.object(value)?;
        let (key, graphics) = if root.contains_key(GRAPHICS_STATE) {
            (GRAPHICS_STATE, true)
        } else if root.contains_key(COMPUTE_STATE) {
            (COMPUTE_STATE, false)
        } else {
            return Err(ctx.invalid(format!("expected {} or {}", GRAPHICS_STATE, COMPUTE_STATE)));
        };

        let state = ctx.member(root, key);
        let mut description = ctx.in_field(key, |ctx| {
            let state = ctx.object(state)?;
            PipelineDescription::parse_state(ctx, state, graphics)
        })?;
        description.enabled_extensions = ctx.field(root, "EnabledExtensions")?;
        description.pipeline_uuid = ctx.field(root, "PipelineUUID")?;
        Ok(description)
    }
}

struct StateRef<'b, 'a>(&'b PipelineDescription<'a>);

impl Serialize for StateRef<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let description = self.0;
        let mut map = serializer.serialize_map(None)?;
        match description.render_pass {
            Some(RenderPassDescription::V1(ref info)) => map.serialize_entry("Renderpass", info)?,
            Some(RenderPassDescription::V2(ref info)) => map.serialize_entry("Renderpass2", info)?,
            None => {}
        }
        map.serialize_entry("YcbcrSamplers", description.ycbcr_samplers)?;
        map.serialize_entry("ImmutableSamplers", description.immutable_samplers)?;
        map.serialize_entry("DescriptorSetLayouts", description.descriptor_set_layouts)?;
        map.serialize_entry("PipelineLayout", &description.pipeline_layout)?;
        match description.pipeline {
            PipelineCreateInfo::Graphics(ref info) => map.serialize_entry("GraphicsPipeline", info)?,
            PipelineCreateInfo::Compute(ref info) => map.serialize_entry("ComputePipeline", info)?,
        }
        map.serialize_entry("ShaderFileNames", description.shader_file_names)?;
        if let Some(ref features) = description.physical_device_features {
            map.serialize_entry("PhysicalDeviceFeatures", features)?;
        }
        map.end()
    }
}

impl Serialize for PipelineDescription<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = if self.is_graphics() { GRAPHICS_STATE } else { COMPUTE_STATE };
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(key, &StateRef(self))?;
        map.serialize_entry("EnabledExtensions", self.enabled_extensions)?;
        map.serialize_entry("PipelineUUID", &self.pipeline_uuid)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseOptions;
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    fn compute_document() -> Value {
        json!({
            "ComputePipelineState": {
                "YcbcrSamplers": [],
                "ImmutableSamplers": [
                    { "sampler0": { "magFilter": "VK_FILTER_LINEAR", "maxLod": 1.0 } }
                ],
                "DescriptorSetLayouts": [
                    { "layout0": {
                        "bindingCount": 1,
                        "pBindings": [{
                            "binding": 0,
                            "descriptorType": "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER",
                            "descriptorCount": 1,
                            "stageFlags": "VK_SHADER_STAGE_COMPUTE_BIT"
                        }]
                    } }
                ],
                "PipelineLayout": { "setLayoutCount": 1, "pSetLayouts": [1] },
                "ComputePipeline": {
                    "pNext": {
                        "sType": "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
                        "pipelineIdentifier": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                        "poolEntrySize": 2048
                    },
                    "stage": { "stage": "VK_SHADER_STAGE_COMPUTE_BIT", "module": 1, "pName": "main" },
                    "layout": 1
                },
                "ShaderFileNames": [ { "stage": "VK_SHADER_STAGE_COMPUTE_BIT", "filename": "pipeline_0_comp.spv" } ],
                "PhysicalDeviceFeatures": {
                    "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
                    "features": { "shaderInt64": "VK_TRUE" }
                }
            },
            "EnabledExtensions": [],
            "PipelineUUID": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        })
    }

    #[test]
    fn compute_description() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::strict());
        let description = PipelineDescription::from_json(&ctx, &compute_document()).unwrap();
        assert!(!description.is_graphics());
        assert!(description.render_pass.is_none());
        assert_eq!(description.immutable_samplers[0].name, "sampler0");
        assert_eq!(description.descriptor_set_layouts[0].create_info.p_bindings.len(), 1);
        assert_eq!(description.shader_file(ShaderStageFlags::COMPUTE), Some("pipeline_0_comp.spv"));
        assert_eq!(description.shader_file(ShaderStageFlags::VERTEX), None);
        assert_eq!(description.offline_info().map(|info| info.pool_entry_size), Some(2048));
        assert_eq!(description.pipeline_uuid[15], 15);
        assert_eq!(description.pipeline.stages(), vec![ShaderStageFlags::COMPUTE]);
    }

    #[test]
    fn description_serializes_back_to_the_same_layout() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let description = PipelineDescription::from_json(&ctx, &compute_document()).unwrap();
        let written = serde_json::to_value(&description).unwrap();
        let state = &written["ComputePipelineState"];
        assert_eq!(state["ImmutableSamplers"][0]["sampler0"]["magFilter"], "VK_FILTER_LINEAR");
        assert_eq!(state["ShaderFileNames"][0]["filename"], "pipeline_0_comp.spv");
        assert_eq!(written["PipelineUUID"][3], 3);

        let reparsed = PipelineDescription::from_json(&ctx, &written).unwrap();
        assert_eq!(reparsed, description);
    }

    #[test]
    fn render_pass_flavor_follows_structure_type() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let v2 = RenderPassDescription::from_json(
            &ctx,
            &json!({ "sType": "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO_2", "subpassCount": 1, "pSubpasses": [{}] }),
        )
        .unwrap();
        assert!(matches!(v2, RenderPassDescription::V2(_)));
        assert_eq!(v2.subpass_count(), 1);
        let v1 = RenderPassDescription::from_json(&ctx, &json!({ "attachmentCount": 0 })).unwrap();
        assert!(matches!(v1, RenderPassDescription::V1(_)));
    }

    #[test]
    fn named_objects_need_exactly_one_entry() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let result = NamedObject::<SamplerCreateInfo>::from_json(&ctx, &json!({ "a": {}, "b": {} }));
        assert!(matches!(result, Err(VkJsonError::InvalidData { .. })));
        assert!(PipelineDescription::from_json(&ctx, &json!({ "PipelineUUID": [] })).is_err());
    }
}
