#![cfg(test)]

use vksc_json_arena::{with_thread_arena, BumpArena};
use vksc_json_parser::{
    device::{DeviceCreateInfo, PhysicalDeviceFeatures2},
    enums::{Format, StructureType},
    find_in_chain, iter_chain,
    flags::ShaderStageFlags,
    pipeline::{GraphicsPipelineCreateInfo, PipelineColorWriteCreateInfoEXT, PipelineRasterizationLineStateCreateInfoEXT},
    pipeline_state::RenderPassDescription,
    render_pass::{RenderPassCreateInfo, RenderPassCreateInfo2, RenderPassMultiviewCreateInfo},
    sampler::{SamplerCreateInfo, SamplerCustomBorderColorCreateInfoEXT},
    sc::{DeviceObjectReservationCreateInfo, PhysicalDeviceVulkanSC10Features, PipelineOfflineCreateInfo},
    to_json_string, AnyStructure, JsonParser, ParseOptions, VkJsonError,
};

const GRAPHICS_PIPELINE: &str = r#"
{
    "sType" : "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
    "pNext" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
        "pNext" : "NULL",
        "pipelineIdentifier" : [ 80, 105, 112, 101, 108, 105, 110, 101, 0, 0, 0, 0, 0, 0, 0, 7 ],
        "matchControl" : "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
        "poolEntrySize" : 65536
    },
    "flags" : 0,
    "stageCount" : 2,
    "pStages" : [
        {
            "sType" : "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
            "pNext" : "NULL",
            "flags" : 0,
            "stage" : "VK_SHADER_STAGE_VERTEX_BIT",
            "module" : 0,
            "pName" : "main",
            "pSpecializationInfo" : "NULL"
        },
        {
            "sType" : "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
            "pNext" : "NULL",
            "flags" : 0,
            "stage" : "VK_SHADER_STAGE_FRAGMENT_BIT",
            "module" : 1,
            "pName" : "main",
            "pSpecializationInfo" : "NULL"
        }
    ],
    "pVertexInputState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "vertexBindingDescriptionCount" : 1,
        "pVertexBindingDescriptions" : [
            { "binding" : 0, "stride" : 16, "inputRate" : "VK_VERTEX_INPUT_RATE_VERTEX" }
        ],
        "vertexAttributeDescriptionCount" : 2,
        "pVertexAttributeDescriptions" : [
            { "location" : 0, "binding" : 0, "format" : "VK_FORMAT_R32G32_SFLOAT", "offset" : 0 },
            { "location" : 1, "binding" : 0, "format" : "VK_FORMAT_R8G8B8A8_UNORM", "offset" : 8 }
        ]
    },
    "pInputAssemblyState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "topology" : "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        "primitiveRestartEnable" : "VK_FALSE"
    },
    "pTessellationState" : "NULL",
    "pViewportState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "viewportCount" : 1,
        "pViewports" : [
            { "x" : 0, "y" : 0, "width" : 256, "height" : 256, "minDepth" : 0, "maxDepth" : 1 }
        ],
        "scissorCount" : 1,
        "pScissors" : [
            { "offset" : { "x" : 0, "y" : 0 }, "extent" : { "width" : 256, "height" : 256 } }
        ]
    },
    "pRasterizationState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "depthClampEnable" : "VK_FALSE",
        "rasterizerDiscardEnable" : "VK_FALSE",
        "polygonMode" : "VK_POLYGON_MODE_FILL",
        "cullMode" : "VK_CULL_MODE_NONE",
        "frontFace" : "VK_FRONT_FACE_COUNTER_CLOCKWISE",
        "depthBiasEnable" : "VK_FALSE",
        "depthBiasConstantFactor" : 0,
        "depthBiasClamp" : 0,
        "depthBiasSlopeFactor" : 0,
        "lineWidth" : 1
    },
    "pMultisampleState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "rasterizationSamples" : "VK_SAMPLE_COUNT_1_BIT",
        "sampleShadingEnable" : "VK_FALSE",
        "minSampleShading" : 0,
        "pSampleMask" : "NULL",
        "alphaToCoverageEnable" : "VK_FALSE",
        "alphaToOneEnable" : "VK_FALSE"
    },
    "pDepthStencilState" : "NULL",
    "pColorBlendState" : {
        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
        "pNext" : "NULL",
        "flags" : 0,
        "logicOpEnable" : "VK_FALSE",
        "logicOp" : "VK_LOGIC_OP_CLEAR",
        "attachmentCount" : 1,
        "pAttachments" : [
            {
                "blendEnable" : "VK_FALSE",
                "srcColorBlendFactor" : "VK_BLEND_FACTOR_ZERO",
                "dstColorBlendFactor" : "VK_BLEND_FACTOR_ZERO",
                "colorBlendOp" : "VK_BLEND_OP_ADD",
                "srcAlphaBlendFactor" : "VK_BLEND_FACTOR_ZERO",
                "dstAlphaBlendFactor" : "VK_BLEND_FACTOR_ZERO",
                "alphaBlendOp" : "VK_BLEND_OP_ADD",
                "colorWriteMask" : "VK_COLOR_COMPONENT_R_BIT | VK_COLOR_COMPONENT_G_BIT | VK_COLOR_COMPONENT_B_BIT | VK_COLOR_COMPONENT_A_BIT"
            }
        ],
        "blendConstants" : [ 0, 0, 0, 0 ]
    },
    "pDynamicState" : "NULL",
    "layout" : 3,
    "renderPass" : 4,
    "subpass" : 0,
    "basePipelineHandle" : "VK_NULL_HANDLE",
    "basePipelineIndex" : 0
}
"#;

const DEVICE_CREATE_INFO: &str = r#"
{
    "sType" : "VK_STRUCTURE_TYPE_DEVICE_CREATE_INFO",
    "pNext" : {
        "sType" : "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
        "pNext" : {
            "sType" : "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES",
            "pNext" : {
                "sType" : "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
                "pNext" : "NULL",
                "pipelineCacheCreateInfoCount" : 1,
                "pPipelineCacheCreateInfos" : [
                    {
                        "sType" : "VK_STRUCTURE_TYPE_PIPELINE_CACHE_CREATE_INFO",
                        "flags" : "VK_PIPELINE_CACHE_CREATE_READ_ONLY_BIT | VK_PIPELINE_CACHE_CREATE_USE_APPLICATION_STORAGE_BIT",
                        "initialDataSize" : 8,
                        "pInitialData" : "AAECAwQFBgc="
                    }
                ],
                "pipelinePoolSizeCount" : 1,
                "pPipelinePoolSizes" : [
                    { "sType" : "VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE", "poolEntrySize" : 65536, "poolEntryCount" : 2 }
                ],
                "graphicsPipelineRequestCount" : 2,
                "computePipelineRequestCount" : 0,
                "descriptorSetLayoutBindingLimit" : 32
            },
            "shaderAtomicInstructions" : "VK_TRUE"
        },
        "features" : {
            "robustBufferAccess" : "VK_TRUE",
            "samplerAnisotropy" : "VK_TRUE"
        }
    },
    "flags" : 0,
    "queueCreateInfoCount" : 1,
    "pQueueCreateInfos" : [
        {
            "sType" : "VK_STRUCTURE_TYPE_DEVICE_QUEUE_CREATE_INFO",
            "queueFamilyIndex" : 0,
            "queueCount" : 1,
            "pQueuePriorities" : [ 1.0 ]
        }
    ],
    "enabledLayerCount" : 0,
    "ppEnabledLayerNames" : "NULL",
    "enabledExtensionCount" : 0,
    "ppEnabledExtensionNames" : "NULL",
    "pEnabledFeatures" : "NULL"
}
"#;

#[test]
fn test_parse_graphics_pipeline() {
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::strict());
    let info: GraphicsPipelineCreateInfo = parser.parse(GRAPHICS_PIPELINE).expect("parse failed");

    assert_eq!(info.s_type, StructureType::GRAPHICS_PIPELINE_CREATE_INFO);
    assert_eq!(info.stage_count, 2);
    assert_eq!(info.p_stages[0].stage, ShaderStageFlags::VERTEX);
    assert_eq!(info.p_stages[1].p_name, "main");

    let vertex_input = info.p_vertex_input_state.expect("vertex input state");
    assert_eq!(vertex_input.p_vertex_attribute_descriptions[1].format, Format::R8G8B8A8_UNORM);
    assert_eq!(vertex_input.p_vertex_binding_descriptions[0].stride, 16);

    let viewport = info.p_viewport_state.expect("viewport state");
    assert_eq!(viewport.p_viewports[0].width, 256.0);
    assert_eq!(viewport.p_scissors[0].extent.height, 256);

    assert!(info.p_tessellation_state.is_none());
    assert!(info.p_depth_stencil_state.is_none());
    assert!(info.p_multisample_state.expect("multisample state").p_sample_mask.is_empty());
    assert_eq!(info.p_color_blend_state.expect("blend state").p_attachments[0].color_write_mask.as_raw(), 0xF);

    let offline: &PipelineOfflineCreateInfo = find_in_chain(info.p_next).expect("offline info");
    assert_eq!(&offline.pipeline_identifier[..8], b"Pipeline");
    assert_eq!(offline.pool_entry_size, 65536);
}

#[test]
fn test_parse_device_chain() {
    let arena = BumpArena::new();
    let parser = JsonParser::new(&arena);
    let info: DeviceCreateInfo = parser.parse(DEVICE_CREATE_INFO).expect("parse failed");

    let types: Vec<StructureType> = iter_chain(info.p_next).map(|node| node.s_type()).collect();
    assert_eq!(
        types,
        vec![
            StructureType::PHYSICAL_DEVICE_FEATURES_2,
            StructureType::PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES,
            StructureType::DEVICE_OBJECT_RESERVATION_CREATE_INFO,
        ]
    );

    let features: &PhysicalDeviceFeatures2 = find_in_chain(info.p_next).expect("features");
    assert!(features.features.robust_buffer_access.as_bool());
    assert!(!features.features.geometry_shader.as_bool());

    let sc_features: &PhysicalDeviceVulkanSC10Features = find_in_chain(info.p_next).expect("SC features");
    assert!(sc_features.shader_atomic_instructions.as_bool());

    let reservation: &DeviceObjectReservationCreateInfo = find_in_chain(info.p_next).expect("reservation");
    assert_eq!(reservation.p_pipeline_cache_create_infos[0].p_initial_data.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(reservation.p_pipeline_pool_sizes[0].pool_entry_count, 2);
    assert_eq!(reservation.descriptor_set_layout_binding_limit, 32);

    assert!(info.p_enabled_features.is_none());
    assert!(info.pp_enabled_extension_names.is_empty());
}

#[test]
fn test_parse_any_dispatches_on_root_type() {
    let arena = BumpArena::new();
    let parser = JsonParser::new(&arena);

    match parser.parse_any(GRAPHICS_PIPELINE).expect("parse_any failed") {
        AnyStructure::GraphicsPipelineCreateInfo(info) => assert_eq!(info.p_stages.len(), 2),
        other => panic!("unexpected structure {:?}", other.s_type()),
    }

    let sampler = parser
        .parse_any(r#"{ "sType": "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO", "maxAnisotropy": 16 }"#)
        .expect("parse_any failed");
    assert_eq!(sampler.s_type(), StructureType::SAMPLER_CREATE_INFO);

    let err = parser
        .parse_any(r#"{ "sType": "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO" }"#)
        .unwrap_err();
    assert!(matches!(err, VkJsonError::UnsupportedStructure { .. }));
    assert!(parser.parse_any(r#"{ "flags": 0 }"#).is_err());
}

#[test]
fn test_parse_render_pass_2() {
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::strict());
    let text = r#"
    {
        "sType" : "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO_2",
        "attachmentCount" : 1,
        "pAttachments" : [
            {
                "sType" : "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_2",
                "format" : "VK_FORMAT_R8G8B8A8_UNORM",
                "samples" : "VK_SAMPLE_COUNT_1_BIT",
                "loadOp" : "VK_ATTACHMENT_LOAD_OP_CLEAR",
                "storeOp" : "VK_ATTACHMENT_STORE_OP_STORE",
                "stencilLoadOp" : "VK_ATTACHMENT_LOAD_OP_DONT_CARE",
                "stencilStoreOp" : "VK_ATTACHMENT_STORE_OP_DONT_CARE",
                "initialLayout" : "VK_IMAGE_LAYOUT_UNDEFINED",
                "finalLayout" : "VK_IMAGE_LAYOUT_TRANSFER_SRC_OPTIMAL"
            }
        ],
        "subpassCount" : 1,
        "pSubpasses" : [
            {
                "sType" : "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_2",
                "pipelineBindPoint" : "VK_PIPELINE_BIND_POINT_GRAPHICS",
                "colorAttachmentCount" : 1,
                "pColorAttachments" : [
                    {
                        "sType" : "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_2",
                        "attachment" : 0,
                        "layout" : "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL",
                        "aspectMask" : "VK_IMAGE_ASPECT_COLOR_BIT"
                    }
                ]
            }
        ],
        "dependencyCount" : 0,
        "pDependencies" : []
    }
    "#;

    let info: RenderPassCreateInfo2 = parser.parse(text).expect("parse failed");
    assert_eq!(info.p_attachments[0].format, Format::R8G8B8A8_UNORM);
    assert_eq!(info.p_subpasses[0].p_color_attachments[0].aspect_mask.as_raw(), 1);

    let description: RenderPassDescription = parser.parse(text).expect("parse failed");
    assert!(matches!(description, RenderPassDescription::V2(_)));
    assert_eq!(description.attachment_count(), 1);
}

#[test]
fn test_strict_mode_errors_carry_paths() {
    let arena = BumpArena::new();
    let strict = JsonParser::with_options(&arena, ParseOptions::strict());
    let lenient = JsonParser::new(&arena);

    let text = r#"
    {
        "stageCount" : 1,
        "pStages" : [ { "stage" : "VK_SHADER_STAGE_VERTEX_BIT", "pName" : "main" },
                      { "stage" : "VK_SHADER_STAGE_GEOMETRY_SHADER_BIT", "pName" : "main" } ]
    }
    "#;
    let info: GraphicsPipelineCreateInfo = lenient.parse(text).expect("lenient parse failed");
    assert_eq!(info.p_stages.len(), 2);
    assert!(info.p_stages[1].stage.is_empty());

    let err = strict.parse::<GraphicsPipelineCreateInfo>(text).unwrap_err();
    assert_eq!(err.path(), Some("$.pStages[1].stage"));
    assert!(err.to_string().contains("VK_SHADER_STAGE_GEOMETRY_SHADER_BIT"));
}

#[test]
fn test_syntax_errors_are_reported() {
    let arena = BumpArena::new();
    let parser = JsonParser::new(&arena);
    let err = parser.parse::<SamplerCreateInfo>("{ \"magFilter\": ").unwrap_err();
    assert!(matches!(err, VkJsonError::Syntax(_)));
    assert!(err.path().is_none());

    let err = parser.parse::<SamplerCreateInfo>("[1, 2]").unwrap_err();
    assert!(matches!(err, VkJsonError::TypeMismatch { expected: "object", found: "array", .. }));
}

#[test]
fn test_parsed_structures_write_back_to_json() {
    let arena = BumpArena::new();
    let parser = JsonParser::new(&arena);
    let info: GraphicsPipelineCreateInfo = parser.parse(GRAPHICS_PIPELINE).expect("parse failed");

    let text = to_json_string(&info).expect("serialize failed");
    let reparsed: GraphicsPipelineCreateInfo = parser.parse(&text).expect("reparse failed");
    assert_eq!(reparsed, info);

    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["pStages"][1]["stage"], "VK_SHADER_STAGE_FRAGMENT_BIT");
    assert_eq!(value["pRasterizationState"]["cullMode"], "VK_CULL_MODE_NONE");
    assert_eq!(value["pTessellationState"], serde_json::Value::Null);
}

#[test]
fn test_arena_reuse_across_documents() {
    let mut arena = BumpArena::with_block_size(4096);
    for _ in 0..3 {
        {
            let parser = JsonParser::new(&arena);
            let info: DeviceCreateInfo = parser.parse(DEVICE_CREATE_INFO).expect("parse failed");
            assert_eq!(info.p_queue_create_infos.len(), 1);
        }
        assert!(arena.allocated_bytes() > 0);
        arena.clear();
        assert_eq!(arena.block_count(), 1);
    }
}

#[test]
fn test_parse_p_next_chain_text() {
    let arena = BumpArena::new();
    let parser = JsonParser::new(&arena);

    let chain = parser
        .parse_p_next_chain(
            r#"{
                "sType" : "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
                "reductionMode" : "VK_SAMPLER_REDUCTION_MODE_MIN",
                "pNext" : {
                    "sType" : "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
                    "conversion" : 5
                }
            }"#,
        )
        .expect("parse_p_next_chain failed");
    assert_eq!(iter_chain(chain).count(), 2);

    assert!(parser.parse_p_next_chain("null").expect("null chain").is_none());
    assert!(parser.parse_p_next_chain(r#""NULL""#).expect("NULL chain").is_none());

    let err = parser
        .parse_p_next_chain(r#"{ "pNext": { "sType": "VK_STRUCTURE_TYPE_MEMORY_ALLOCATE_INFO" }, "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2" }"#)
        .unwrap_err();
    assert!(matches!(err, VkJsonError::UnsupportedStructure { .. }));
    assert_eq!(err.path(), Some("$.pNext"));
}

#[test]
fn test_parse_compute_pipeline_description() {
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::strict());
    let text = r#"
    {
        "ComputePipelineState" : {
            "DescriptorSetLayouts" : [
                {
                    "layout0" : {
                        "sType" : "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
                        "bindingCount" : 2,
                        "pBindings" : [
                            { "binding" : 0, "descriptorType" : "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER", "descriptorCount" : 1, "stageFlags" : "VK_SHADER_STAGE_COMPUTE_BIT", "pImmutableSamplers" : "NULL" },
                            { "binding" : 1, "descriptorType" : "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER", "descriptorCount" : 1, "stageFlags" : "VK_SHADER_STAGE_COMPUTE_BIT", "pImmutableSamplers" : "NULL" }
                        ]
                    }
                }
            ],
            "PipelineLayout" : {
                "sType" : "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
                "setLayoutCount" : 1,
                "pSetLayouts" : [ 0 ],
                "pushConstantRangeCount" : 0,
                "pPushConstantRanges" : "NULL"
            },
            "ComputePipeline" : {
                "sType" : "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO",
                "pNext" : {
                    "sType" : "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
                    "pipelineIdentifier" : [ 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16 ],
                    "matchControl" : "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
                    "poolEntrySize" : 4096
                },
                "stage" : {
                    "sType" : "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
                    "stage" : "VK_SHADER_STAGE_COMPUTE_BIT",
                    "module" : 0,
                    "pName" : "main"
                },
                "layout" : 0,
                "basePipelineHandle" : "VK_NULL_HANDLE",
                "basePipelineIndex" : -1
            },
            "ShaderFileNames" : [
                { "stage" : "VK_SHADER_STAGE_COMPUTE_BIT", "filename" : "blur.comp.spv" }
            ]
        },
        "EnabledExtensions" : [],
        "PipelineUUID" : [ 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16 ]
    }
    "#;

    let description = parser.parse_pipeline_description(text).expect("parse_pipeline_description failed");
    assert!(!description.is_graphics());
    assert!(description.render_pass.is_none());
    assert_eq!(description.descriptor_set_layouts[0].name, "layout0");
    assert_eq!(description.descriptor_set_layouts[0].create_info.p_bindings.len(), 2);
    assert_eq!(description.shader_file(ShaderStageFlags::COMPUTE), Some("blur.comp.spv"));
    assert_eq!(description.shader_file(ShaderStageFlags::VERTEX), None);
    assert_eq!(description.offline_info().expect("offline info").pool_entry_size, 4096);
    assert_eq!(description.pipeline_uuid[15], 16);

    let reparsed = parser
        .parse_pipeline_description(&to_json_string(&description).expect("serialize failed"))
        .expect("reparse failed");
    assert_eq!(reparsed, description);
}

#[test]
fn test_thread_arena_parse() {
    let names = with_thread_arena(|arena| {
        let parser = JsonParser::new(arena);
        let info: DeviceCreateInfo = parser.parse(DEVICE_CREATE_INFO).expect("parse failed");
        iter_chain(info.p_next)
            .map(|node| format!("{:?}", node.s_type()))
            .collect::<Vec<_>>()
    });
    assert_eq!(names[0], "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2");
    assert_eq!(with_thread_arena(|arena| arena.allocated_bytes()), 0);
}

#[test]
fn test_unknown_structure_names_are_never_defaulted() {
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::lenient());

    let err = parser
        .parse_any(r#"{ "sType": "VK_STRUCTURE_TYPE_DISPLAY_SURFACE_CREATE_INFO_KHR", "flags": 0 }"#)
        .unwrap_err();
    match err {
        VkJsonError::UnsupportedStructure { ref s_type, .. } => {
            assert_eq!(s_type, "VK_STRUCTURE_TYPE_DISPLAY_SURFACE_CREATE_INFO_KHR")
        }
        ref other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.path(), Some("$"));

    let err = parser
        .parse::<GraphicsPipelineCreateInfo>(
            r#"{
                "sType": "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
                "pNext": { "sType": "VK_STRUCTURE_TYPE_PIPELINE_CREATION_FEEDBACK_CREATE_INFO" }
            }"#,
        )
        .unwrap_err();
    match err {
        VkJsonError::UnsupportedStructure { ref s_type, .. } => {
            assert_eq!(s_type, "VK_STRUCTURE_TYPE_PIPELINE_CREATION_FEEDBACK_CREATE_INFO")
        }
        ref other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.path(), Some("$.pNext"));

    let err = parser
        .parse::<SamplerCreateInfo>(r#"{ "sType": "VK_STRUCTURE_TYPE_NOT_A_REAL_TYPE" }"#)
        .unwrap_err();
    assert!(matches!(err, VkJsonError::UnsupportedStructure { .. }));
}

#[test]
fn test_extension_structures_in_chains() {
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::strict());

    let render_pass: RenderPassCreateInfo = parser
        .parse(
            r#"{
                "sType": "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_RENDER_PASS_MULTIVIEW_CREATE_INFO",
                    "subpassCount": 1,
                    "pViewMasks": [ 15 ]
                },
                "subpassCount": 1,
                "pSubpasses": [ { "pipelineBindPoint": "VK_PIPELINE_BIND_POINT_GRAPHICS" } ]
            }"#,
        )
        .expect("parse failed");
    let multiview: &RenderPassMultiviewCreateInfo = find_in_chain(render_pass.p_next).expect("multiview in chain");
    assert_eq!(multiview.p_view_masks, &[15]);

    let pipeline: GraphicsPipelineCreateInfo = parser
        .parse(
            r#"{
                "pRasterizationState": {
                    "lineWidth": 1.0,
                    "pNext": {
                        "sType": "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_LINE_STATE_CREATE_INFO_EXT",
                        "lineRasterizationMode": "VK_LINE_RASTERIZATION_MODE_RECTANGULAR_EXT"
                    }
                },
                "pColorBlendState": {
                    "attachmentCount": 1,
                    "pAttachments": [ { "colorWriteMask": 15 } ],
                    "pNext": {
                        "sType": "VK_STRUCTURE_TYPE_PIPELINE_COLOR_WRITE_CREATE_INFO_EXT",
                        "attachmentCount": 1,
                        "pColorWriteEnables": [ "VK_TRUE" ]
                    }
                }
            }"#,
        )
        .expect("parse failed");
    let rasterization = pipeline.p_rasterization_state.expect("rasterization state");
    let line: &PipelineRasterizationLineStateCreateInfoEXT = find_in_chain(rasterization.p_next).expect("line state");
    assert_eq!(line.s_type, StructureType::PIPELINE_RASTERIZATION_LINE_STATE_CREATE_INFO_EXT);
    let blend = pipeline.p_color_blend_state.expect("color blend state");
    let writes: &PipelineColorWriteCreateInfoEXT = find_in_chain(blend.p_next).expect("color write");
    assert!(writes.p_color_write_enables[0].as_bool());

    let sampler: SamplerCreateInfo = parser
        .parse(
            r#"{
                "borderColor": "VK_BORDER_COLOR_INT_CUSTOM_EXT",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_SAMPLER_CUSTOM_BORDER_COLOR_CREATE_INFO_EXT",
                    "customBorderColor": { "int32": [ 0, 0, 0, 1 ] }
                }
            }"#,
        )
        .expect("parse failed");
    let custom: &SamplerCustomBorderColorCreateInfoEXT = find_in_chain(sampler.p_next).expect("custom border color");
    assert_eq!(custom.custom_border_color.int32(), [0, 0, 0, 1]);
}
