//! Shader modules and graphics/compute pipeline state.

use crate::{
    context::Context,
    enums::{
        BlendFactor, BlendOp, CompareOp, ConservativeRasterizationModeEXT, DiscardRectangleModeEXT, DynamicState,
        Format, FragmentShadingRateCombinerOpKHR, FrontFace, LineRasterizationModeEXT, LogicOp, PolygonMode,
        PrimitiveTopology, StencilOp, StructureType, TessellationDomainOrigin, VertexInputRate,
    },
    error::VkJsonError,
    flags::*,
    geometry::{Extent2D, Rect2D, Viewport},
    handles::{Pipeline, PipelineLayout, RenderPass, ShaderModule},
    pnext::PNext,
    primitives::{spirv_words, Bool32, Bytes},
    traits::{FromJson, TaggedStructure},
};
use serde::Serialize;
use serde_json::Value;

/// `VkShaderModuleCreateInfo`. `pCode` is read from an array of words or a
/// base64 string of the SPIR-V binary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShaderModuleCreateInfo<'a> {
    #[serde(rename = "sType")]
    pub s_type:    StructureType,
    #[serde(rename = "pNext")]
    pub p_next:    Option<&'a PNext<'a>>,
    #[serde(rename = "flags")]
    pub flags:     ShaderModuleCreateFlags,
    /// Size of `p_code` in bytes.
    #[serde(rename = "codeSize")]
    pub code_size: usize,
    #[serde(rename = "pCode")]
    pub p_code:    &'a [u32],
}

impl TaggedStructure for ShaderModuleCreateInfo<'_> {
    const STRUCTURE_TYPE: StructureType = StructureType::SHADER_MODULE_CREATE_INFO;
}

impl<'a> FromJson<'a> for ShaderModuleCreateInfo<'a> {
    fn from_json(ctx: &Context<'a>, value: &Value) -> Result<Self, VkJsonError> {
        let obj = ctx.object(value)?;
        let s_type = ctx.structure_type(obj, StructureType::SHADER_MODULE_CREATE_INFO)?;
        let p_next = ctx.field(obj, "pNext")?;
        let flags = ctx.field(obj, "flags")?;
        let code = ctx.member(obj, "pCode");
        let p_code = ctx.in_field("pCode", |ctx| spirv_words(ctx, code))?;

        let mut code_size: usize = ctx.field(obj, "codeSize")?;
        let actual = p_code.len() * 4;
        if code_size == 0 {
            code_size = actual;
        } else if !p_code.is_empty() && code_size != actual {
            ctx.in_field("codeSize", |ctx| {
                ctx.report(ctx.invalid(format!("codeSize is {} but pCode holds {} bytes", code_size, actual)))
            })?;
        }

        Ok(ShaderModuleCreateInfo { s_type, p_next, flags, code_size, p_code })
    }
}

vk_struct! {
    /// `VkSpecializationMapEntry`.
    pub struct SpecializationMapEntry {
        constant_id: u32   => "constantID",
        offset:      u32   => "offset",
        size:        usize => "size",
    }
}

vk_struct! {
    /// `VkSpecializationInfo`.
    pub struct SpecializationInfo<'a> {
        map_entry_count: u32                         => "mapEntryCount",
        p_map_entries:   &'a [SpecializationMapEntry] => "pMapEntries" | map_entry_count,
        data_size:       usize                       => "dataSize",
        p_data:          Bytes<'a>                   => "pData" | data_size,
    }
}

vk_struct! {
    /// `VkPipelineShaderStageCreateInfo`.
    pub struct PipelineShaderStageCreateInfo<'a> : PIPELINE_SHADER_STAGE_CREATE_INFO {
        flags:                 PipelineShaderStageCreateFlags => "flags",
        stage:                 ShaderStageFlags               => "stage",
        module:                ShaderModule                   => "module",
        p_name:                &'a str                        => "pName",
        p_specialization_info: Option<&'a SpecializationInfo<'a>> => "pSpecializationInfo",
    }
}

vk_struct! {
    /// `VkVertexInputBindingDescription`.
    pub struct VertexInputBindingDescription {
        binding:    u32             => "binding",
        stride:     u32             => "stride",
        input_rate: VertexInputRate => "inputRate",
    }
}

vk_struct! {
    /// `VkVertexInputAttributeDescription`.
    pub struct VertexInputAttributeDescription {
        location: u32    => "location",
        binding:  u32    => "binding",
        format:   Format => "format",
        offset:   u32    => "offset",
    }
}

vk_struct! {
    /// `VkPipelineVertexInputStateCreateInfo`.
    pub struct PipelineVertexInputStateCreateInfo<'a> : PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO {
        flags:                              PipelineVertexInputStateCreateFlags => "flags",
        vertex_binding_description_count:   u32                                 => "vertexBindingDescriptionCount",
        p_vertex_binding_descriptions:      &'a [VertexInputBindingDescription]   => "pVertexBindingDescriptions" | vertex_binding_description_count,
        vertex_attribute_description_count: u32                                 => "vertexAttributeDescriptionCount",
        p_vertex_attribute_descriptions:    &'a [VertexInputAttributeDescription] => "pVertexAttributeDescriptions" | vertex_attribute_description_count,
    }
}

vk_struct! {
    /// `VkVertexInputBindingDivisorDescriptionEXT`.
    pub struct VertexInputBindingDivisorDescriptionEXT {
        binding: u32 => "binding",
        divisor: u32 => "divisor",
    }
}

vk_struct! {
    /// `VkPipelineVertexInputDivisorStateCreateInfoEXT`.
    pub struct PipelineVertexInputDivisorStateCreateInfoEXT<'a> : PIPELINE_VERTEX_INPUT_DIVISOR_STATE_CREATE_INFO_EXT {
        vertex_binding_divisor_count: u32                                        => "vertexBindingDivisorCount",
        p_vertex_binding_divisors:    &'a [VertexInputBindingDivisorDescriptionEXT] => "pVertexBindingDivisors" | vertex_binding_divisor_count,
    }
}

vk_struct! {
    /// `VkPipelineInputAssemblyStateCreateInfo`.
    pub struct PipelineInputAssemblyStateCreateInfo<'a> : PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO {
        flags:                    PipelineInputAssemblyStateCreateFlags => "flags",
        topology:                 PrimitiveTopology                     => "topology",
        primitive_restart_enable: Bool32                                => "primitiveRestartEnable",
    }
}

vk_struct! {
    /// `VkPipelineTessellationStateCreateInfo`.
    pub struct PipelineTessellationStateCreateInfo<'a> : PIPELINE_TESSELLATION_STATE_CREATE_INFO {
        flags:                PipelineTessellationStateCreateFlags => "flags",
        patch_control_points: u32                                  => "patchControlPoints",
    }
}

vk_struct! {
    /// `VkPipelineTessellationDomainOriginStateCreateInfo`.
    pub struct PipelineTessellationDomainOriginStateCreateInfo<'a> : PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO {
        domain_origin: TessellationDomainOrigin => "domainOrigin",
    }
}

vk_struct! {
    /// `VkPipelineViewportStateCreateInfo`. Dynamic viewports and scissors
    /// leave the arrays empty while keeping their counts.
    pub struct PipelineViewportStateCreateInfo<'a> : PIPELINE_VIEWPORT_STATE_CREATE_INFO {
        flags:          PipelineViewportStateCreateFlags => "flags",
        viewport_count: u32                              => "viewportCount",
        p_viewports:    &'a [Viewport]                   => "pViewports" | viewport_count,
        scissor_count:  u32                              => "scissorCount",
        p_scissors:     &'a [Rect2D]                     => "pScissors" | scissor_count,
    }
}

vk_struct! {
    /// `VkPipelineRasterizationStateCreateInfo`.
    pub struct PipelineRasterizationStateCreateInfo<'a> : PIPELINE_RASTERIZATION_STATE_CREATE_INFO {
        flags:                      PipelineRasterizationStateCreateFlags => "flags",
        depth_clamp_enable:         Bool32                                => "depthClampEnable",
        rasterizer_discard_enable:  Bool32                                => "rasterizerDiscardEnable",
        polygon_mode:               PolygonMode                           => "polygonMode",
        cull_mode:                  CullModeFlags                         => "cullMode",
        front_face:                 FrontFace                             => "frontFace",
        depth_bias_enable:          Bool32                                => "depthBiasEnable",
        depth_bias_constant_factor: f32                                   => "depthBiasConstantFactor",
        depth_bias_clamp:           f32                                   => "depthBiasClamp",
        depth_bias_slope_factor:    f32                                   => "depthBiasSlopeFactor",
        line_width:                 f32                                   => "lineWidth",
    }
}

vk_struct! {
    /// `VkPipelineMultisampleStateCreateInfo`.
    pub struct PipelineMultisampleStateCreateInfo<'a> : PIPELINE_MULTISAMPLE_STATE_CREATE_INFO {
        flags:                    PipelineMultisampleStateCreateFlags => "flags",
        rasterization_samples:    SampleCountFlags                    => "rasterizationSamples",
        sample_shading_enable:    Bool32                              => "sampleShadingEnable",
        min_sample_shading:       f32                                 => "minSampleShading",
        p_sample_mask:            &'a [u32]                           => "pSampleMask",
        alpha_to_coverage_enable: Bool32                              => "alphaToCoverageEnable",
        alpha_to_one_enable:      Bool32                              => "alphaToOneEnable",
    }
}

vk_struct! {
    /// `VkStencilOpState`.
    pub struct StencilOpState {
        fail_op:       StencilOp => "failOp",
        pass_op:       StencilOp => "passOp",
        depth_fail_op: StencilOp => "depthFailOp",
        compare_op:    CompareOp => "compareOp",
        compare_mask:  u32       => "compareMask",
        write_mask:    u32       => "writeMask",
        reference:     u32       => "reference",
    }
}

vk_struct! {
    /// `VkPipelineDepthStencilStateCreateInfo`.
    pub struct PipelineDepthStencilStateCreateInfo<'a> : PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO {
        flags:                    PipelineDepthStencilStateCreateFlags => "flags",
        depth_test_enable:        Bool32                               => "depthTestEnable",
        depth_write_enable:       Bool32                               => "depthWriteEnable",
        depth_compare_op:         CompareOp                            => "depthCompareOp",
        depth_bounds_test_enable: Bool32                               => "depthBoundsTestEnable",
        stencil_test_enable:      Bool32                               => "stencilTestEnable",
        front:                    StencilOpState                       => "front",
        back:                     StencilOpState                       => "back",
        min_depth_bounds:         f32                                  => "minDepthBounds",
        max_depth_bounds:         f32                                  => "maxDepthBounds",
    }
}

vk_struct! {
    /// `VkPipelineColorBlendAttachmentState`.
    pub struct PipelineColorBlendAttachmentState {
        blend_enable:           Bool32              => "blendEnable",
        src_color_blend_factor: BlendFactor         => "srcColorBlendFactor",
        dst_color_blend_factor: BlendFactor         => "dstColorBlendFactor",
        color_blend_op:         BlendOp             => "colorBlendOp",
        src_alpha_blend_factor: BlendFactor         => "srcAlphaBlendFactor",
        dst_alpha_blend_factor: BlendFactor         => "dstAlphaBlendFactor",
        alpha_blend_op:         BlendOp             => "alphaBlendOp",
        color_write_mask:       ColorComponentFlags => "colorWriteMask",
    }
}

vk_struct! {
    /// `VkPipelineColorBlendStateCreateInfo`.
    pub struct PipelineColorBlendStateCreateInfo<'a> : PIPELINE_COLOR_BLEND_STATE_CREATE_INFO {
        flags:            PipelineColorBlendStateCreateFlags     => "flags",
        logic_op_enable:  Bool32                                 => "logicOpEnable",
        logic_op:         LogicOp                                => "logicOp",
        attachment_count: u32                                    => "attachmentCount",
        p_attachments:    &'a [PipelineColorBlendAttachmentState] => "pAttachments" | attachment_count,
        blend_constants:  [f32; 4]                               => "blendConstants",
    }
}

vk_struct! {
    /// `VkPipelineDynamicStateCreateInfo`.
    pub struct PipelineDynamicStateCreateInfo<'a> : PIPELINE_DYNAMIC_STATE_CREATE_INFO {
        flags:               PipelineDynamicStateCreateFlags => "flags",
        dynamic_state_count: u32                             => "dynamicStateCount",
        p_dynamic_states:    &'a [DynamicState]              => "pDynamicStates" | dynamic_state_count,
    }
}

vk_struct! {
    /// `VkGraphicsPipelineCreateInfo`.
    pub struct GraphicsPipelineCreateInfo<'a> : GRAPHICS_PIPELINE_CREATE_INFO {
        flags:                  PipelineCreateFlags                                  => "flags",
        stage_count:            u32                                                  => "stageCount",
        p_stages:               &'a [PipelineShaderStageCreateInfo<'a>]              => "pStages" | stage_count,
        p_vertex_input_state:   Option<&'a PipelineVertexInputStateCreateInfo<'a>>   => "pVertexInputState",
        p_input_assembly_state: Option<&'a PipelineInputAssemblyStateCreateInfo<'a>> => "pInputAssemblyState",
        p_tessellation_state:   Option<&'a PipelineTessellationStateCreateInfo<'a>>  => "pTessellationState",
        p_viewport_state:       Option<&'a PipelineViewportStateCreateInfo<'a>>      => "pViewportState",
        p_rasterization_state:  Option<&'a PipelineRasterizationStateCreateInfo<'a>> => "pRasterizationState",
        p_multisample_state:    Option<&'a PipelineMultisampleStateCreateInfo<'a>>   => "pMultisampleState",
        p_depth_stencil_state:  Option<&'a PipelineDepthStencilStateCreateInfo<'a>>  => "pDepthStencilState",
        p_color_blend_state:    Option<&'a PipelineColorBlendStateCreateInfo<'a>>    => "pColorBlendState",
        p_dynamic_state:        Option<&'a PipelineDynamicStateCreateInfo<'a>>       => "pDynamicState",
        layout:                 PipelineLayout                                       => "layout",
        render_pass:            RenderPass                                           => "renderPass",
        subpass:                u32                                                  => "subpass",
        base_pipeline_handle:   Pipeline                                             => "basePipelineHandle",
        base_pipeline_index:    i32                                                  => "basePipelineIndex",
    }
}

vk_struct! {
    /// `VkComputePipelineCreateInfo`.
    pub struct ComputePipelineCreateInfo<'a> : COMPUTE_PIPELINE_CREATE_INFO {
        flags:                PipelineCreateFlags               => "flags",
        stage:                PipelineShaderStageCreateInfo<'a> => "stage",
        layout:               PipelineLayout                    => "layout",
        base_pipeline_handle: Pipeline                          => "basePipelineHandle",
        base_pipeline_index:  i32                               => "basePipelineIndex",
    }
}

vk_struct! {
    /// `VkPipelineDiscardRectangleStateCreateInfoEXT`.
    pub struct PipelineDiscardRectangleStateCreateInfoEXT<'a> : PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT {
        flags:                   PipelineDiscardRectangleStateCreateFlagsEXT => "flags",
        discard_rectangle_mode:  DiscardRectangleModeEXT                     => "discardRectangleMode",
        discard_rectangle_count: u32                                         => "discardRectangleCount",
        p_discard_rectangles:    &'a [Rect2D]                                => "pDiscardRectangles" | discard_rectangle_count,
    }
}

vk_struct! {
    /// `VkPipelineRasterizationConservativeStateCreateInfoEXT`.
    pub struct PipelineRasterizationConservativeStateCreateInfoEXT<'a> : PIPELINE_RASTERIZATION_CONSERVATIVE_STATE_CREATE_INFO_EXT {
        flags:                                PipelineRasterizationConservativeStateCreateFlagsEXT => "flags",
        conservative_rasterization_mode:      ConservativeRasterizationModeEXT                     => "conservativeRasterizationMode",
        extra_primitive_overestimation_size: f32                                                  => "extraPrimitiveOverestimationSize",
    }
}

vk_struct! {
    /// `VkPipelineRasterizationLineStateCreateInfoEXT`.
    pub struct PipelineRasterizationLineStateCreateInfoEXT<'a> : PIPELINE_RASTERIZATION_LINE_STATE_CREATE_INFO_EXT {
        line_rasterization_mode: LineRasterizationModeEXT => "lineRasterizationMode",
        stippled_line_enable:    Bool32                   => "stippledLineEnable",
        line_stipple_factor:     u32                      => "lineStippleFactor",
        line_stipple_pattern:    u16                      => "lineStipplePattern",
    }
}

vk_struct! {
    /// `VkSampleLocationEXT`.
    pub struct SampleLocationEXT {
        x: f32 => "x",
        y: f32 => "y",
    }
}

vk_struct! {
    /// `VkSampleLocationsInfoEXT`, embedded by value in the sample locations state.
    pub struct SampleLocationsInfoEXT<'a> : SAMPLE_LOCATIONS_INFO_EXT {
        sample_locations_per_pixel: SampleCountFlags        => "sampleLocationsPerPixel",
        sample_location_grid_size:  Extent2D                => "sampleLocationGridSize",
        sample_locations_count:     u32                     => "sampleLocationsCount",
        p_sample_locations:         &'a [SampleLocationEXT] => "pSampleLocations" | sample_locations_count,
    }
}

vk_struct! {
    /// `VkPipelineSampleLocationsStateCreateInfoEXT`.
    pub struct PipelineSampleLocationsStateCreateInfoEXT<'a> : PIPELINE_SAMPLE_LOCATIONS_STATE_CREATE_INFO_EXT {
        sample_locations_enable: Bool32                     => "sampleLocationsEnable",
        sample_locations_info:   SampleLocationsInfoEXT<'a> => "sampleLocationsInfo",
    }
}

vk_struct! {
    /// `VkPipelineFragmentShadingRateStateCreateInfoKHR`.
    pub struct PipelineFragmentShadingRateStateCreateInfoKHR<'a> : PIPELINE_FRAGMENT_SHADING_RATE_STATE_CREATE_INFO_KHR {
        fragment_size: Extent2D                              => "fragmentSize",
        combiner_ops:  [FragmentShadingRateCombinerOpKHR; 2] => "combinerOps",
    }
}

vk_struct! {
    /// `VkPipelineColorWriteCreateInfoEXT`.
    pub struct PipelineColorWriteCreateInfoEXT<'a> : PIPELINE_COLOR_WRITE_CREATE_INFO_EXT {
        attachment_count:      u32          => "attachmentCount",
        p_color_write_enables: &'a [Bool32] => "pColorWriteEnables" | attachment_count,
    }
}
