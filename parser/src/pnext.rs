//! `pNext` chains and dispatch on `sType`.

use crate::{
    context::Context,
    descriptor::*,
    device::*,
    enums::StructureType,
    error::VkJsonError,
    pipeline::*,
    render_pass::*,
    sampler::*,
    sc::*,
    traits::{FromJson, TaggedStructure},
};
use serde_json::Value;

macro_rules! structure_enum {
    (
        $(#[$meta:meta])*
        pub enum $enum:ident<$lt:lifetime> {
            $( $variant:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        pub enum $enum<$lt> {
            $( $variant($variant<$lt>), )*
        }

        impl<$lt> $enum<$lt> {
            /// Every structure type this enum can hold.
            pub const STRUCTURE_TYPES: &'static [StructureType] = &[
                $( <$variant<'static> as TaggedStructure>::STRUCTURE_TYPE, )*
            ];

            pub fn s_type(&self) -> StructureType {
                match self {
                    $( $enum::$variant(s) => s.s_type, )*
                }
            }

            pub fn p_next(&self) -> Option<&$lt PNext<$lt>> {
                match self {
                    $( $enum::$variant(s) => s.p_next, )*
                }
            }

            /// Parses `value` as the structure selected by `s_type`; `None`
            /// when this enum has no such structure.
            pub fn parse_as(
                ctx: &Context<$lt>,
                s_type: StructureType,
                value: &Value,
            ) -> Result<Option<Self>, VkJsonError> {
                $(
                    if s_type == <$variant<'static> as TaggedStructure>::STRUCTURE_TYPE {
                        return <$variant<$lt> as FromJson<$lt>>::from_json(ctx, value)
                            .map(|s| Some($enum::$variant(s)));
                    }
                )*
                Ok(None)
            }
        }

        $(
            impl<$lt> From<$variant<$lt>> for $enum<$lt> {
                fn from(s: $variant<$lt>) -> Self {
                    $enum::$variant(s)
                }
            }
        )*
    };
}

structure_enum! {
    /// A structure that can appear in a `pNext` chain.
    pub enum PNext<'a> {
        PhysicalDeviceFeatures2,
        PhysicalDeviceVulkan11Features,
        PhysicalDeviceVulkan12Features,
        PhysicalDeviceVulkanSC10Features,
        PhysicalDeviceVertexAttributeDivisorFeaturesEXT,
        DeviceObjectReservationCreateInfo,
        PipelineOfflineCreateInfo,
        SamplerYcbcrConversionInfo,
        SamplerReductionModeCreateInfo,
        DescriptorSetLayoutBindingFlagsCreateInfo,
        PipelineTessellationDomainOriginStateCreateInfo,
        PipelineVertexInputDivisorStateCreateInfoEXT,
        SubpassDescriptionDepthStencilResolve,
        AttachmentReferenceStencilLayout,
        AttachmentDescriptionStencilLayout,
        RenderPassMultiviewCreateInfo,
        RenderPassInputAttachmentAspectCreateInfo,
        PipelineDiscardRectangleStateCreateInfoEXT,
        PipelineRasterizationConservativeStateCreateInfoEXT,
        PipelineRasterizationLineStateCreateInfoEXT,
        PipelineSampleLocationsStateCreateInfoEXT,
        PipelineFragmentShadingRateStateCreateInfoKHR,
        PipelineColorWriteCreateInfoEXT,
        SamplerCustomBorderColorCreateInfoEXT,
        PhysicalDeviceMultiviewFeatures,
        PhysicalDeviceShaderDrawParametersFeatures,
        PhysicalDeviceShaderFloat16Int8Features,
        PhysicalDevice16BitStorageFeatures,
        PhysicalDeviceImagelessFramebufferFeatures,
        PhysicalDeviceVariablePointersFeatures,
        PhysicalDeviceProtectedMemoryFeatures,
        PhysicalDeviceSamplerYcbcrConversionFeatures,
        PhysicalDeviceShaderSubgroupExtendedTypesFeatures,
        PhysicalDevice8BitStorageFeatures,
        PhysicalDeviceShaderAtomicInt64Features,
        PhysicalDeviceTimelineSemaphoreFeatures,
        PhysicalDeviceVulkanMemoryModelFeatures,
        PhysicalDeviceScalarBlockLayoutFeatures,
        PhysicalDeviceSeparateDepthStencilLayoutsFeatures,
        PhysicalDeviceUniformBufferStandardLayoutFeatures,
        PhysicalDeviceBufferDeviceAddressFeatures,
        PhysicalDeviceLineRasterizationFeaturesEXT,
        PhysicalDeviceHostQueryResetFeatures,
        PhysicalDeviceCustomBorderColorFeaturesEXT,
        PhysicalDeviceColorWriteEnableFeaturesEXT,
    }
}

structure_enum! {
    /// A top-level create-info structure, as found at the root of a JSON
    /// document.
    pub enum AnyStructure<'a> {
        ApplicationInfo,
        InstanceCreateInfo,
        DeviceCreateInfo,
        PhysicalDeviceFeatures2,
        PipelineCacheCreateInfo,
        SamplerYcbcrConversionCreateInfo,
        SamplerCreateInfo,
        ShaderModuleCreateInfo,
        RenderPassCreateInfo,
        RenderPassCreateInfo2,
        DescriptorSetLayoutCreateInfo,
        PipelineLayoutCreateInfo,
        GraphicsPipelineCreateInfo,
        ComputePipelineCreateInfo,
    }
}

impl<'a> FromJson<'a> for PNext<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let obj = ctx.object(value)?;
        let s_type = ctx
            .read_structure_type(obj)?
            .ok_or_else(|| ctx.invalid("pNext structure has no sType"))?;
        tracing::debug!(?s_type, path = %ctx.xpath(), "parsing pNext structure");
        PNext::parse_as(ctx, s_type, value)?.ok_or_else(|| VkJsonError::UnsupportedStructure {
            path:   ctx.xpath(),
            s_type: format!("{:?}", s_type),
        })
    }
}

impl<'a> FromJson<'a> for &'a PNext<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let node = PNext::from_json(ctx, value)?;
        Ok(&*ctx.arena().alloc(node))
    }
}

/// Parses a whole chain; `null` and `"NULL"` are the empty chain.
pub fn parse_p_next_chain<'a>(ctx: &Context<'a>, value: &Value) -> Result<Option<&'a PNext<'a>>, VkJsonError> {
    Option::<&'a PNext<'a>>::from_json(ctx, value)
}

/// Iterator over the structures of a `pNext` chain.
#[derive(Clone, Debug)]
pub struct ChainIter<'a> {
    next: Option<&'a PNext<'a>>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a PNext<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.p_next();
        Some(node)
    }
}

pub fn iter_chain<'a>(head: Option<&'a PNext<'a>>) -> ChainIter<'a> {
    ChainIter { next: head }
}

/// Structures that [`find_in_chain`] can look for.
pub trait ChainMember<'a>: TaggedStructure + Sized {
    fn from_p_next(node: &'a PNext<'a>) -> Option<&'a Self>;
}

macro_rules! chain_members {
    ($($variant:ident),* $(,)?) => { $(
        impl<'a> ChainMember<'a> for $variant<'a> {
            fn from_p_next(node: &'a PNext<'a>) -> Option<&'a Self> {
                match node {
                    PNext::$variant(s) => Some(s),
                    _ => None,
                }
            }
        }
    )* };
}

chain_members!(
    PhysicalDeviceFeatures2,
    PhysicalDeviceVulkan11Features,
    PhysicalDeviceVulkan12Features,
    PhysicalDeviceVulkanSC10Features,
    PhysicalDeviceVertexAttributeDivisorFeaturesEXT,
    DeviceObjectReservationCreateInfo,
    PipelineOfflineCreateInfo,
    SamplerYcbcrConversionInfo,
    SamplerReductionModeCreateInfo,
    DescriptorSetLayoutBindingFlagsCreateInfo,
    PipelineTessellationDomainOriginStateCreateInfo,
    PipelineVertexInputDivisorStateCreateInfoEXT,
    SubpassDescriptionDepthStencilResolve,
    AttachmentReferenceStencilLayout,
    AttachmentDescriptionStencilLayout,
    RenderPassMultiviewCreateInfo,
    RenderPassInputAttachmentAspectCreateInfo,
    PipelineDiscardRectangleStateCreateInfoEXT,
    PipelineRasterizationConservativeStateCreateInfoEXT,
    PipelineRasterizationLineStateCreateInfoEXT,
    PipelineSampleLocationsStateCreateInfoEXT,
    PipelineFragmentShadingRateStateCreateInfoKHR,
    PipelineColorWriteCreateInfoEXT,
    SamplerCustomBorderColorCreateInfoEXT,
    PhysicalDeviceMultiviewFeatures,
    PhysicalDeviceShaderDrawParametersFeatures,
    PhysicalDeviceShaderFloat16Int8Features,
    PhysicalDevice16BitStorageFeatures,
    PhysicalDeviceImagelessFramebufferFeatures,
    PhysicalDeviceVariablePointersFeatures,
    PhysicalDeviceProtectedMemoryFeatures,
    PhysicalDeviceSamplerYcbcrConversionFeatures,
    PhysicalDeviceShaderSubgroupExtendedTypesFeatures,
    PhysicalDevice8BitStorageFeatures,
    PhysicalDeviceShaderAtomicInt64Features,
    PhysicalDeviceTimelineSemaphoreFeatures,
    PhysicalDeviceVulkanMemoryModelFeatures,
    PhysicalDeviceScalarBlockLayoutFeatures,
    PhysicalDeviceSeparateDepthStencilLayoutsFeatures,
    PhysicalDeviceUniformBufferStandardLayoutFeatures,
    PhysicalDeviceBufferDeviceAddressFeatures,
    PhysicalDeviceLineRasterizationFeaturesEXT,
    PhysicalDeviceHostQueryResetFeatures,
    PhysicalDeviceCustomBorderColorFeaturesEXT,
    PhysicalDeviceColorWriteEnableFeaturesEXT,
);

/// The first structure of type `T` in the chain starting at `head`.
pub fn find_in_chain<'a, T: ChainMember<'a>>(head: Option<&'a PNext<'a>>) -> Option<&'a T> {
    iter_chain(head).find_map(T::from_p_next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseOptions;
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    fn device_chain() -> Value {
        json!({
            "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
            "features": { "samplerAnisotropy": "VK_TRUE" },
            "pNext": {
                "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES",
                "shaderAtomicInstructions": "VK_TRUE",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
                    "graphicsPipelineRequestCount": 4,
                    "pNext": "NULL"
                }
            }
        })
    }

    #[test]
    fn chain_order_is_preserved() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let head = parse_p_next_chain(&ctx, &device_chain()).unwrap();
        let types: Vec<StructureType> = iter_chain(head).map(PNext::s_type).collect();
        assert_eq!(
            types,
            vec![
                StructureType::PHYSICAL_DEVICE_FEATURES_2,
                StructureType::PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES,
                StructureType::DEVICE_OBJECT_RESERVATION_CREATE_INFO,
            ]
        );
    }

    #[test]
    fn find_by_type() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let head = parse_p_next_chain(&ctx, &device_chain()).unwrap();
        let reservation: &DeviceObjectReservationCreateInfo = find_in_chain(head).unwrap();
        assert_eq!(reservation.graphics_pipeline_request_count, 4);
        let features: &PhysicalDeviceFeatures2 = find_in_chain(head).unwrap();
        assert!(features.features.sampler_anisotropy.as_bool());
        assert!(find_in_chain::<PipelineOfflineCreateInfo>(head).is_none());
    }

    #[test]
    fn empty_chain() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::strict());
        assert!(parse_p_next_chain(&ctx, &json!(null)).unwrap().is_none());
        assert!(parse_p_next_chain(&ctx, &json!("NULL")).unwrap().is_none());
    }

    #[test]
    fn unsupported_structure_type_is_an_error() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let err = parse_p_next_chain(
            &ctx,
            &json!({
                "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
                "pNext": { "sType": "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO" }
            }),
        )
        .unwrap_err();
        match err {
            VkJsonError::UnsupportedStructure { path, s_type } => {
                assert_eq!(path, "$.pNext");
                assert_eq!(s_type, "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(parse_p_next_chain(&ctx, &json!({ "features": {} })).is_err());
    }

    #[test]
    fn unknown_structure_name_keeps_its_spelling() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::lenient());
        let err = parse_p_next_chain(
            &ctx,
            &json!({
                "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
                "pNext": { "sType": "VK_STRUCTURE_TYPE_EXPORT_FENCE_WIN32_HANDLE_INFO_KHR" }
            }),
        )
        .unwrap_err();
        match err {
            VkJsonError::UnsupportedStructure { path, s_type } => {
                assert_eq!(path, "$.pNext");
                assert_eq!(s_type, "VK_STRUCTURE_TYPE_EXPORT_FENCE_WIN32_HANDLE_INFO_KHR");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn chains_serialize_in_place() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let node = SamplerReductionModeCreateInfo {
            reduction_mode: crate::enums::SamplerReductionMode::MAX,
            ..Default::default()
        };
        let value = serde_json::to_value(PNext::from(node)).unwrap();
        assert_eq!(value["sType"], "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO");
        assert_eq!(value["reductionMode"], "VK_SAMPLER_REDUCTION_MODE_MAX");
        assert_eq!(value["pNext"], Value::Null);
        let reparsed = parse_p_next_chain(&ctx, &value).unwrap().unwrap();
        assert_eq!(reparsed, &PNext::from(node));
    }
}
