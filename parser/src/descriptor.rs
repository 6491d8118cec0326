//! Descriptor set layouts and pipeline layouts.

use crate::{
    enums::DescriptorType,
    flags::{DescriptorBindingFlags, DescriptorSetLayoutCreateFlags, PipelineLayoutCreateFlags, ShaderStageFlags},
    handles::{DescriptorSetLayout, Sampler},
};

vk_struct! {
    /// `VkDescriptorSetLayoutBinding`. `pImmutableSamplers`, when present,
    /// holds `descriptorCount` handles.
    pub struct DescriptorSetLayoutBinding<'a> {
        binding:              u32              => "binding",
        descriptor_type:      DescriptorType   => "descriptorType",
        descriptor_count:     u32              => "descriptorCount",
        stage_flags:          ShaderStageFlags => "stageFlags",
        p_immutable_samplers: &'a [Sampler]    => "pImmutableSamplers" | descriptor_count,
    }
}

vk_struct! {
    /// `VkDescriptorSetLayoutCreateInfo`.
    pub struct DescriptorSetLayoutCreateInfo<'a> : DESCRIPTOR_SET_LAYOUT_CREATE_INFO {
        flags:         DescriptorSetLayoutCreateFlags       => "flags",
        binding_count: u32                                  => "bindingCount",
        p_bindings:    &'a [DescriptorSetLayoutBinding<'a>] => "pBindings" | binding_count,
    }
}

vk_struct! {
    /// `VkDescriptorSetLayoutBindingFlagsCreateInfo`.
    pub struct DescriptorSetLayoutBindingFlagsCreateInfo<'a> : DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO {
        binding_count:   u32                         => "bindingCount",
        p_binding_flags: &'a [DescriptorBindingFlags] => "pBindingFlags" | binding_count,
    }
}

vk_struct! {
    /// `VkPushConstantRange`.
    pub struct PushConstantRange {
        stage_flags: ShaderStageFlags => "stageFlags",
        offset:      u32              => "offset",
        size:        u32              => "size",
    }
}

vk_struct! {
    /// `VkPipelineLayoutCreateInfo`.
    pub struct PipelineLayoutCreateInfo<'a> : PIPELINE_LAYOUT_CREATE_INFO {
        flags:                     PipelineLayoutCreateFlags => "flags",
        set_layout_count:          u32                       => "setLayoutCount",
        p_set_layouts:             &'a [DescriptorSetLayout] => "pSetLayouts" | set_layout_count,
        push_constant_range_count: u32                       => "pushConstantRangeCount",
        p_push_constant_ranges:    &'a [PushConstantRange]   => "pPushConstantRanges" | push_constant_range_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::{Context, ParseOptions},
        pnext::PNext,
        traits::FromJson,
    };
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    #[test]
    fn layout_with_binding_flags() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::strict());
        let info = DescriptorSetLayoutCreateInfo::from_json(
            &ctx,
            &json!({
                "sType": "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO",
                    "bindingCount": 2,
                    "pBindingFlags": [0, "VK_DESCRIPTOR_BINDING_PARTIALLY_BOUND_BIT"]
                },
                "bindingCount": 2,
                "pBindings": [
                    {
                        "binding": 0,
                        "descriptorType": "VK_DESCRIPTOR_TYPE_COMBINED_IMAGE_SAMPLER",
                        "descriptorCount": 2,
                        "stageFlags": "VK_SHADER_STAGE_FRAGMENT_BIT",
                        "pImmutableSamplers": [7, 8]
                    },
                    {
                        "binding": 1,
                        "descriptorType": "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER",
                        "descriptorCount": 1,
                        "stageFlags": "VK_SHADER_STAGE_VERTEX_BIT | VK_SHADER_STAGE_FRAGMENT_BIT",
                        "pImmutableSamplers": "NULL"
                    }
                ]
            }),
        )
        .unwrap();
        assert_eq!(info.p_bindings[0].p_immutable_samplers, &[Sampler(7), Sampler(8)]);
        assert_eq!(info.p_bindings[1].descriptor_type, DescriptorType::UNIFORM_BUFFER);
        assert_eq!(info.p_bindings[1].stage_flags.as_raw(), 0x11);
        match info.p_next {
            Some(PNext::DescriptorSetLayoutBindingFlagsCreateInfo(flags)) => {
                assert_eq!(flags.p_binding_flags[1], DescriptorBindingFlags::PARTIALLY_BOUND);
            }
            other => panic!("unexpected chain {:?}", other),
        }
    }

    #[test]
    fn pipeline_layout() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let info = PipelineLayoutCreateInfo::from_json(
            &ctx,
            &json!({
                "setLayoutCount": 1,
                "pSetLayouts": ["0x10"],
                "pushConstantRangeCount": 1,
                "pPushConstantRanges": [{ "stageFlags": "VK_SHADER_STAGE_COMPUTE_BIT", "offset": 0, "size": 16 }]
            }),
        )
        .unwrap();
        assert_eq!(info.p_set_layouts, &[DescriptorSetLayout(16)]);
        assert_eq!(info.p_push_constant_ranges[0].size, 16);
        assert_eq!(info.p_push_constant_ranges[0].stage_flags, ShaderStageFlags::COMPUTE);
    }
}
