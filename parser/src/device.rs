//! Instance and device creation, and the feature structures.

use crate::{
    flags::{DeviceCreateFlags, DeviceQueueCreateFlags, InstanceCreateFlags},
    primitives::Bool32,
};

vk_struct! {
    /// `VkApplicationInfo`.
    pub struct ApplicationInfo<'a> : APPLICATION_INFO {
        p_application_name:  Option<&'a str> => "pApplicationName",
        application_version: u32             => "applicationVersion",
        p_engine_name:       Option<&'a str> => "pEngineName",
        engine_version:      u32             => "engineVersion",
        api_version:         u32             => "apiVersion",
    }
}

vk_struct! {
    /// `VkInstanceCreateInfo`.
    pub struct InstanceCreateInfo<'a> : INSTANCE_CREATE_INFO {
        flags:                      InstanceCreateFlags             => "flags",
        p_application_info:         Option<&'a ApplicationInfo<'a>> => "pApplicationInfo",
        enabled_layer_count:        u32                             => "enabledLayerCount",
        pp_enabled_layer_names:     &'a [&'a str]                   => "ppEnabledLayerNames" | enabled_layer_count,
        enabled_extension_count:    u32                             => "enabledExtensionCount",
        pp_enabled_extension_names: &'a [&'a str]                   => "ppEnabledExtensionNames" | enabled_extension_count,
    }
}

vk_struct! {
    /// `VkDeviceQueueCreateInfo`.
    pub struct DeviceQueueCreateInfo<'a> : DEVICE_QUEUE_CREATE_INFO {
        flags:              DeviceQueueCreateFlags => "flags",
        queue_family_index: u32                    => "queueFamilyIndex",
        queue_count:        u32                    => "queueCount",
        p_queue_priorities: &'a [f32]              => "pQueuePriorities" | queue_count,
    }
}

vk_struct! {
    /// `VkDeviceCreateInfo`.
    pub struct DeviceCreateInfo<'a> : DEVICE_CREATE_INFO {
        flags:                      DeviceCreateFlags              => "flags",
        queue_create_info_count:    u32                            => "queueCreateInfoCount",
        p_queue_create_infos:       &'a [DeviceQueueCreateInfo<'a>] => "pQueueCreateInfos" | queue_create_info_count,
        enabled_layer_count:        u32                            => "enabledLayerCount",
        pp_enabled_layer_names:     &'a [&'a str]                  => "ppEnabledLayerNames" | enabled_layer_count,
        enabled_extension_count:    u32                            => "enabledExtensionCount",
        pp_enabled_extension_names: &'a [&'a str]                  => "ppEnabledExtensionNames" | enabled_extension_count,
        p_enabled_features:         Option<&'a PhysicalDeviceFeatures> => "pEnabledFeatures",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceFeatures`.
    pub struct PhysicalDeviceFeatures {
        robust_buffer_access:                         Bool32 => "robustBufferAccess",
        full_draw_index_uint32:                       Bool32 => "fullDrawIndexUint32",
        image_cube_array:                             Bool32 => "imageCubeArray",
        independent_blend:                            Bool32 => "independentBlend",
        geometry_shader:                              Bool32 => "geometryShader",
        tessellation_shader:                          Bool32 => "tessellationShader",
        sample_rate_shading:                          Bool32 => "sampleRateShading",
        dual_src_blend:                               Bool32 => "dualSrcBlend",
        logic_op:                                     Bool32 => "logicOp",
        multi_draw_indirect:                          Bool32 => "multiDrawIndirect",
        draw_indirect_first_instance:                 Bool32 => "drawIndirectFirstInstance",
        depth_clamp:                                  Bool32 => "depthClamp",
        depth_bias_clamp:                             Bool32 => "depthBiasClamp",
        fill_mode_non_solid:                          Bool32 => "fillModeNonSolid",
        depth_bounds:                                 Bool32 => "depthBounds",
        wide_lines:                                   Bool32 => "wideLines",
        large_points:                                 Bool32 => "largePoints",
        alpha_to_one:                                 Bool32 => "alphaToOne",
        multi_viewport:                               Bool32 => "multiViewport",
        sampler_anisotropy:                           Bool32 => "samplerAnisotropy",
        texture_compression_etc2:                     Bool32 => "textureCompressionETC2",
        texture_compression_astc_ldr:                 Bool32 => "textureCompressionASTC_LDR",
        texture_compression_bc:                       Bool32 => "textureCompressionBC",
        occlusion_query_precise:                      Bool32 => "occlusionQueryPrecise",
        pipeline_statistics_query:                    Bool32 => "pipelineStatisticsQuery",
        vertex_pipeline_stores_and_atomics:           Bool32 => "vertexPipelineStoresAndAtomics",
        fragment_stores_and_atomics:                  Bool32 => "fragmentStoresAndAtomics",
        shader_tessellation_and_geometry_point_size:  Bool32 => "shaderTessellationAndGeometryPointSize",
        shader_image_gather_extended:                 Bool32 => "shaderImageGatherExtended",
        shader_storage_image_extended_formats:        Bool32 => "shaderStorageImageExtendedFormats",
        shader_storage_image_multisample:             Bool32 => "shaderStorageImageMultisample",
        shader_storage_image_read_without_format:     Bool32 => "shaderStorageImageReadWithoutFormat",
        shader_storage_image_write_without_format:    Bool32 => "shaderStorageImageWriteWithoutFormat",
        shader_uniform_buffer_array_dynamic_indexing: Bool32 => "shaderUniformBufferArrayDynamicIndexing",
        shader_sampled_image_array_dynamic_indexing:  Bool32 => "shaderSampledImageArrayDynamicIndexing",
        shader_storage_buffer_array_dynamic_indexing: Bool32 => "shaderStorageBufferArrayDynamicIndexing",
        shader_storage_image_array_dynamic_indexing:  Bool32 => "shaderStorageImageArrayDynamicIndexing",
        shader_clip_distance:                         Bool32 => "shaderClipDistance",
        shader_cull_distance:                         Bool32 => "shaderCullDistance",
        shader_float64:                               Bool32 => "shaderFloat64",
        shader_int64:                                 Bool32 => "shaderInt64",
        shader_int16:                                 Bool32 => "shaderInt16",
        shader_resource_residency:                    Bool32 => "shaderResourceResidency",
        shader_resource_min_lod:                      Bool32 => "shaderResourceMinLod",
        sparse_binding:                               Bool32 => "sparseBinding",
        sparse_residency_buffer:                      Bool32 => "sparseResidencyBuffer",
        sparse_residency_image_2d:                    Bool32 => "sparseResidencyImage2D",
        sparse_residency_image_3d:                    Bool32 => "sparseResidencyImage3D",
        sparse_residency2_samples:                    Bool32 => "sparseResidency2Samples",
        sparse_residency4_samples:                    Bool32 => "sparseResidency4Samples",
        sparse_residency8_samples:                    Bool32 => "sparseResidency8Samples",
        sparse_residency16_samples:                   Bool32 => "sparseResidency16Samples",
        sparse_residency_aliased:                     Bool32 => "sparseResidencyAliased",
        variable_multisample_rate:                    Bool32 => "variableMultisampleRate",
        inherited_queries:                            Bool32 => "inheritedQueries",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceFeatures2`.
    pub struct PhysicalDeviceFeatures2<'a> : PHYSICAL_DEVICE_FEATURES_2 {
        features: PhysicalDeviceFeatures => "features",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceVulkan11Features`.
    pub struct PhysicalDeviceVulkan11Features<'a> : PHYSICAL_DEVICE_VULKAN_1_1_FEATURES {
        storage_buffer16_bit_access:             Bool32 => "storageBuffer16BitAccess",
        uniform_and_storage_buffer16_bit_access: Bool32 => "uniformAndStorageBuffer16BitAccess",
        storage_push_constant16:                 Bool32 => "storagePushConstant16",
        storage_input_output16:                  Bool32 => "storageInputOutput16",
        multiview:                               Bool32 => "multiview",
        multiview_geometry_shader:               Bool32 => "multiviewGeometryShader",
        multiview_tessellation_shader:           Bool32 => "multiviewTessellationShader",
        variable_pointers_storage_buffer:        Bool32 => "variablePointersStorageBuffer",
        variable_pointers:                       Bool32 => "variablePointers",
        protected_memory:                        Bool32 => "protectedMemory",
        sampler_ycbcr_conversion:                Bool32 => "samplerYcbcrConversion",
        shader_draw_parameters:                  Bool32 => "shaderDrawParameters",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceVulkan12Features`.
    pub struct PhysicalDeviceVulkan12Features<'a> : PHYSICAL_DEVICE_VULKAN_1_2_FEATURES {
        sampler_mirror_clamp_to_edge:                              Bool32 => "samplerMirrorClampToEdge",
        draw_indirect_count:                                       Bool32 => "drawIndirectCount",
        storage_buffer8_bit_access:                                Bool32 => "storageBuffer8BitAccess",
        uniform_and_storage_buffer8_bit_access:                    Bool32 => "uniformAndStorageBuffer8BitAccess",
        storage_push_constant8:                                    Bool32 => "storagePushConstant8",
        shader_buffer_int64_atomics:                               Bool32 => "shaderBufferInt64Atomics",
        shader_shared_int64_atomics:                               Bool32 => "shaderSharedInt64Atomics",
        shader_float16:                                            Bool32 => "shaderFloat16",
        shader_int8:                                               Bool32 => "shaderInt8",
        descriptor_indexing:                                       Bool32 => "descriptorIndexing",
        shader_input_attachment_array_dynamic_indexing:            Bool32 => "shaderInputAttachmentArrayDynamicIndexing",
        shader_uniform_texel_buffer_array_dynamic_indexing:        Bool32 => "shaderUniformTexelBufferArrayDynamicIndexing",
        shader_storage_texel_buffer_array_dynamic_indexing:        Bool32 => "shaderStorageTexelBufferArrayDynamicIndexing",
        shader_uniform_buffer_array_non_uniform_indexing:          Bool32 => "shaderUniformBufferArrayNonUniformIndexing",
        shader_sampled_image_array_non_uniform_indexing:           Bool32 => "shaderSampledImageArrayNonUniformIndexing",
        shader_storage_buffer_array_non_uniform_indexing:          Bool32 => "shaderStorageBufferArrayNonUniformIndexing",
        shader_storage_image_array_non_uniform_indexing:           Bool32 => "shaderStorageImageArrayNonUniformIndexing",
        shader_input_attachment_array_non_uniform_indexing:        Bool32 => "shaderInputAttachmentArrayNonUniformIndexing",
        shader_uniform_texel_buffer_array_non_uniform_indexing:    Bool32 => "shaderUniformTexelBufferArrayNonUniformIndexing",
        shader_storage_texel_buffer_array_non_uniform_indexing:    Bool32 => "shaderStorageTexelBufferArrayNonUniformIndexing",
        descriptor_binding_uniform_buffer_update_after_bind:       Bool32 => "descriptorBindingUniformBufferUpdateAfterBind",
        descriptor_binding_sampled_image_update_after_bind:        Bool32 => "descriptorBindingSampledImageUpdateAfterBind",
        descriptor_binding_storage_image_update_after_bind:        Bool32 => "descriptorBindingStorageImageUpdateAfterBind",
        descriptor_binding_storage_buffer_update_after_bind:       Bool32 => "descriptorBindingStorageBufferUpdateAfterBind",
        descriptor_binding_uniform_texel_buffer_update_after_bind: Bool32 => "descriptorBindingUniformTexelBufferUpdateAfterBind",
        descriptor_binding_storage_texel_buffer_update_after_bind: Bool32 => "descriptorBindingStorageTexelBufferUpdateAfterBind",
        descriptor_binding_update_unused_while_pending:            Bool32 => "descriptorBindingUpdateUnusedWhilePending",
        descriptor_binding_partially_bound:                        Bool32 => "descriptorBindingPartiallyBound",
        descriptor_binding_variable_descriptor_count:              Bool32 => "descriptorBindingVariableDescriptorCount",
        runtime_descriptor_array:                                  Bool32 => "runtimeDescriptorArray",
        sampler_filter_minmax:                                     Bool32 => "samplerFilterMinmax",
        scalar_block_layout:                                       Bool32 => "scalarBlockLayout",
        imageless_framebuffer:                                     Bool32 => "imagelessFramebuffer",
        uniform_buffer_standard_layout:                            Bool32 => "uniformBufferStandardLayout",
        shader_subgroup_extended_types:                            Bool32 => "shaderSubgroupExtendedTypes",
        separate_depth_stencil_layouts:                            Bool32 => "separateDepthStencilLayouts",
        host_query_reset:                                          Bool32 => "hostQueryReset",
        timeline_semaphore:                                        Bool32 => "timelineSemaphore",
        buffer_device_address:                                     Bool32 => "bufferDeviceAddress",
        buffer_device_address_capture_replay:                      Bool32 => "bufferDeviceAddressCaptureReplay",
        buffer_device_address_multi_device:                        Bool32 => "bufferDeviceAddressMultiDevice",
        vulkan_memory_model:                                       Bool32 => "vulkanMemoryModel",
        vulkan_memory_model_device_scope:                          Bool32 => "vulkanMemoryModelDeviceScope",
        vulkan_memory_model_availability_visibility_chains:        Bool32 => "vulkanMemoryModelAvailabilityVisibilityChains",
        shader_output_viewport_index:                              Bool32 => "shaderOutputViewportIndex",
        shader_output_layer:                                       Bool32 => "shaderOutputLayer",
        subgroup_broadcast_dynamic_id:                             Bool32 => "subgroupBroadcastDynamicId",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceVertexAttributeDivisorFeaturesEXT`.
    pub struct PhysicalDeviceVertexAttributeDivisorFeaturesEXT<'a> : PHYSICAL_DEVICE_VERTEX_ATTRIBUTE_DIVISOR_FEATURES_EXT {
        vertex_attribute_instance_rate_divisor:      Bool32 => "vertexAttributeInstanceRateDivisor",
        vertex_attribute_instance_rate_zero_divisor: Bool32 => "vertexAttributeInstanceRateZeroDivisor",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceMultiviewFeatures`.
    pub struct PhysicalDeviceMultiviewFeatures<'a> : PHYSICAL_DEVICE_MULTIVIEW_FEATURES {
        multiview:                     Bool32 => "multiview",
        multiview_geometry_shader:     Bool32 => "multiviewGeometryShader",
        multiview_tessellation_shader: Bool32 => "multiviewTessellationShader",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceShaderDrawParametersFeatures`.
    pub struct PhysicalDeviceShaderDrawParametersFeatures<'a> : PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES {
        shader_draw_parameters: Bool32 => "shaderDrawParameters",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceShaderFloat16Int8Features`.
    pub struct PhysicalDeviceShaderFloat16Int8Features<'a> : PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES {
        shader_float16: Bool32 => "shaderFloat16",
        shader_int8:    Bool32 => "shaderInt8",
    }
}

vk_struct! {
    /// `VkPhysicalDevice16BitStorageFeatures`.
    pub struct PhysicalDevice16BitStorageFeatures<'a> : PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES {
        storage_buffer16_bit_access:             Bool32 => "storageBuffer16BitAccess",
        uniform_and_storage_buffer16_bit_access: Bool32 => "uniformAndStorageBuffer16BitAccess",
        storage_push_constant16:                 Bool32 => "storagePushConstant16",
        storage_input_output16:                  Bool32 => "storageInputOutput16",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceImagelessFramebufferFeatures`.
    pub struct PhysicalDeviceImagelessFramebufferFeatures<'a> : PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES {
        imageless_framebuffer: Bool32 => "imagelessFramebuffer",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceVariablePointersFeatures`.
    pub struct PhysicalDeviceVariablePointersFeatures<'a> : PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES {
        variable_pointers_storage_buffer: Bool32 => "variablePointersStorageBuffer",
        variable_pointers:                Bool32 => "variablePointers",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceProtectedMemoryFeatures`.
    pub struct PhysicalDeviceProtectedMemoryFeatures<'a> : PHYSICAL_DEVICE_PROTECTED_MEMORY_FEATURES {
        protected_memory: Bool32 => "protectedMemory",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceSamplerYcbcrConversionFeatures`.
    pub struct PhysicalDeviceSamplerYcbcrConversionFeatures<'a> : PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES {
        sampler_ycbcr_conversion: Bool32 => "samplerYcbcrConversion",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceShaderSubgroupExtendedTypesFeatures`.
    pub struct PhysicalDeviceShaderSubgroupExtendedTypesFeatures<'a> : PHYSICAL_DEVICE_SHADER_SUBGROUP_EXTENDED_TYPES_FEATURES {
        shader_subgroup_extended_types: Bool32 => "shaderSubgroupExtendedTypes",
    }
}

vk_struct! {
    /// `VkPhysicalDevice8BitStorageFeatures`.
    pub struct PhysicalDevice8BitStorageFeatures<'a> : PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES {
        storage_buffer8_bit_access:             Bool32 => "storageBuffer8BitAccess",
        uniform_and_storage_buffer8_bit_access: Bool32 => "uniformAndStorageBuffer8BitAccess",
        storage_push_constant8:                 Bool32 => "storagePushConstant8",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceShaderAtomicInt64Features`.
    pub struct PhysicalDeviceShaderAtomicInt64Features<'a> : PHYSICAL_DEVICE_SHADER_ATOMIC_INT64_FEATURES {
        shader_buffer_int64_atomics: Bool32 => "shaderBufferInt64Atomics",
        shader_shared_int64_atomics: Bool32 => "shaderSharedInt64Atomics",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceTimelineSemaphoreFeatures`.
    pub struct PhysicalDeviceTimelineSemaphoreFeatures<'a> : PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES {
        timeline_semaphore: Bool32 => "timelineSemaphore",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceVulkanMemoryModelFeatures`.
    pub struct PhysicalDeviceVulkanMemoryModelFeatures<'a> : PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES {
        vulkan_memory_model:                                Bool32 => "vulkanMemoryModel",
        vulkan_memory_model_device_scope:                   Bool32 => "vulkanMemoryModelDeviceScope",
        vulkan_memory_model_availability_visibility_chains: Bool32 => "vulkanMemoryModelAvailabilityVisibilityChains",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceScalarBlockLayoutFeatures`.
    pub struct PhysicalDeviceScalarBlockLayoutFeatures<'a> : PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES {
        scalar_block_layout: Bool32 => "scalarBlockLayout",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceSeparateDepthStencilLayoutsFeatures`.
    pub struct PhysicalDeviceSeparateDepthStencilLayoutsFeatures<'a> : PHYSICAL_DEVICE_SEPARATE_DEPTH_STENCIL_LAYOUTS_FEATURES {
        separate_depth_stencil_layouts: Bool32 => "separateDepthStencilLayouts",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceUniformBufferStandardLayoutFeatures`.
    pub struct PhysicalDeviceUniformBufferStandardLayoutFeatures<'a> : PHYSICAL_DEVICE_UNIFORM_BUFFER_STANDARD_LAYOUT_FEATURES {
        uniform_buffer_standard_layout: Bool32 => "uniformBufferStandardLayout",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceBufferDeviceAddressFeatures`.
    pub struct PhysicalDeviceBufferDeviceAddressFeatures<'a> : PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES {
        buffer_device_address:                Bool32 => "bufferDeviceAddress",
        buffer_device_address_capture_replay: Bool32 => "bufferDeviceAddressCaptureReplay",
        buffer_device_address_multi_device:   Bool32 => "bufferDeviceAddressMultiDevice",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceLineRasterizationFeaturesEXT`.
    pub struct PhysicalDeviceLineRasterizationFeaturesEXT<'a> : PHYSICAL_DEVICE_LINE_RASTERIZATION_FEATURES_EXT {
        rectangular_lines:          Bool32 => "rectangularLines",
        bresenham_lines:            Bool32 => "bresenhamLines",
        smooth_lines:               Bool32 => "smoothLines",
        stippled_rectangular_lines: Bool32 => "stippledRectangularLines",
        stippled_bresenham_lines:   Bool32 => "stippledBresenhamLines",
        stippled_smooth_lines:      Bool32 => "stippledSmoothLines",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceHostQueryResetFeatures`.
    pub struct PhysicalDeviceHostQueryResetFeatures<'a> : PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES {
        host_query_reset: Bool32 => "hostQueryReset",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceCustomBorderColorFeaturesEXT`.
    pub struct PhysicalDeviceCustomBorderColorFeaturesEXT<'a> : PHYSICAL_DEVICE_CUSTOM_BORDER_COLOR_FEATURES_EXT {
        custom_border_colors:               Bool32 => "customBorderColors",
        custom_border_color_without_format: Bool32 => "customBorderColorWithoutFormat",
    }
}

vk_struct! {
    /// `VkPhysicalDeviceColorWriteEnableFeaturesEXT`.
    pub struct PhysicalDeviceColorWriteEnableFeaturesEXT<'a> : PHYSICAL_DEVICE_COLOR_WRITE_ENABLE_FEATURES_EXT {
        color_write_enable: Bool32 => "colorWriteEnable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::{Context, ParseOptions},
        enums::StructureType,
        error::VkJsonError,
        pnext::find_in_chain,
        traits::FromJson,
    };
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    #[test]
    fn device_create_info() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let value = json!({
            "sType": "VK_STRUCTURE_TYPE_DEVICE_CREATE_INFO",
            "pNext": "NULL",
            "flags": 0,
            "queueCreateInfoCount": 1,
            "pQueueCreateInfos": [{
                "sType": "VK_STRUCTURE_TYPE_DEVICE_QUEUE_CREATE_INFO",
                "queueFamilyIndex": 0,
                "queueCount": 2,
                "pQueuePriorities": [1.0, 0.5]
            }],
            "enabledExtensionCount": 1,
            "ppEnabledExtensionNames": ["VK_KHR_swapchain"],
            "pEnabledFeatures": { "robustBufferAccess": "VK_TRUE", "shaderInt64": true }
        });
        let info = DeviceCreateInfo::from_json(&ctx, &value).unwrap();
        assert_eq!(info.s_type, StructureType::DEVICE_CREATE_INFO);
        assert!(info.p_next.is_none());
        assert_eq!(info.p_queue_create_infos[0].p_queue_priorities, &[1.0, 0.5]);
        assert_eq!(info.pp_enabled_extension_names, &["VK_KHR_swapchain"]);
        assert!(info.pp_enabled_layer_names.is_empty());
        let features = info.p_enabled_features.unwrap();
        assert!(features.robust_buffer_access.as_bool());
        assert!(features.shader_int64.as_bool());
        assert!(!features.geometry_shader.as_bool());
    }

    #[test]
    fn count_mismatch_is_only_fatal_when_strict() {
        let arena = BumpArena::new();
        let value = json!({ "queueCount": 3, "pQueuePriorities": [1.0] });

        let lenient = Context::new(&arena, ParseOptions::default());
        let info = DeviceQueueCreateInfo::from_json(&lenient, &value).unwrap();
        assert_eq!(info.queue_count, 3);
        assert_eq!(info.p_queue_priorities.len(), 1);

        let strict = Context::new(&arena, ParseOptions::strict());
        let err = DeviceQueueCreateInfo::from_json(&strict, &value).unwrap_err();
        match err {
            VkJsonError::CountMismatch { path, count_field, declared, len } => {
                assert_eq!(path, "$.pQueuePriorities");
                assert_eq!(count_field, "queue_count");
                assert_eq!((declared, len), (3, 1));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn wrong_structure_type() {
        let arena = BumpArena::new();
        let value = json!({ "sType": "VK_STRUCTURE_TYPE_APPLICATION_INFO" });

        let lenient = Context::new(&arena, ParseOptions::default());
        let info = InstanceCreateInfo::from_json(&lenient, &value).unwrap();
        assert_eq!(info.s_type, StructureType::APPLICATION_INFO);

        let strict = Context::new(&arena, ParseOptions::strict());
        assert!(matches!(
            InstanceCreateInfo::from_json(&strict, &value),
            Err(VkJsonError::StructureTypeMismatch { .. })
        ));
    }

    #[test]
    fn null_application_name() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let info = InstanceCreateInfo::from_json(
            &ctx,
            &json!({ "pApplicationInfo": { "pApplicationName": "NULL", "pEngineName": "vksc", "apiVersion": 4202496 } }),
        )
        .unwrap();
        let app = info.p_application_info.unwrap();
        assert_eq!(app.p_application_name, None);
        assert_eq!(app.p_engine_name, Some("vksc"));
        assert_eq!(app.api_version, 4202496);
    }

    #[test]
    fn core_feature_structures_chain() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::strict());
        let features = PhysicalDeviceFeatures2::from_json(
            &ctx,
            &json!({
                "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES",
                    "storageBuffer16BitAccess": "VK_TRUE",
                    "pNext": {
                        "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_MULTIVIEW_FEATURES",
                        "multiview": "VK_TRUE",
                        "multiviewGeometryShader": "VK_FALSE",
                        "pNext": {
                            "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_LINE_RASTERIZATION_FEATURES_EXT",
                            "bresenhamLines": "VK_TRUE"
                        }
                    }
                }
            }),
        )
        .unwrap();
        let storage: &PhysicalDevice16BitStorageFeatures = find_in_chain(features.p_next).unwrap();
        assert!(storage.storage_buffer16_bit_access.as_bool());
        assert!(!storage.storage_push_constant16.as_bool());
        let multiview: &PhysicalDeviceMultiviewFeatures = find_in_chain(features.p_next).unwrap();
        assert!(multiview.multiview.as_bool());
        let lines: &PhysicalDeviceLineRasterizationFeaturesEXT = find_in_chain(features.p_next).unwrap();
        assert!(lines.bresenham_lines.as_bool());
        assert!(find_in_chain::<PhysicalDeviceHostQueryResetFeatures>(features.p_next).is_none());
    }
}
