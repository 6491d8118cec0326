//! Vulkan SC object reservation and offline pipeline structures.

use crate::{
    constants::VK_UUID_SIZE,
    enums::PipelineMatchControl,
    flags::PipelineCacheCreateFlags,
    primitives::{Bool32, Bytes},
};

vk_struct! {
    /// `VkPhysicalDeviceVulkanSC10Features`.
    pub struct PhysicalDeviceVulkanSC10Features<'a> : PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES {
        shader_atomic_instructions: Bool32 => "shaderAtomicInstructions",
    }
}

vk_struct! {
    /// `VkPipelinePoolSize`.
    pub struct PipelinePoolSize<'a> : PIPELINE_POOL_SIZE {
        pool_entry_size:  u64 => "poolEntrySize",
        pool_entry_count: u32 => "poolEntryCount",
    }
}

vk_struct! {
    /// `VkPipelineCacheCreateInfo`. `pInitialData` is the binary pipeline
    /// cache, usually written as base64.
    pub struct PipelineCacheCreateInfo<'a> : PIPELINE_CACHE_CREATE_INFO {
        flags:             PipelineCacheCreateFlags => "flags",
        initial_data_size: usize                    => "initialDataSize",
        p_initial_data:    Bytes<'a>                => "pInitialData" | initial_data_size,
    }
}

vk_struct! {
    /// `VkDeviceObjectReservationCreateInfo`.
    pub struct DeviceObjectReservationCreateInfo<'a> : DEVICE_OBJECT_RESERVATION_CREATE_INFO {
        pipeline_cache_create_info_count:                 u32                               => "pipelineCacheCreateInfoCount",
        p_pipeline_cache_create_infos:                    &'a [PipelineCacheCreateInfo<'a>] => "pPipelineCacheCreateInfos" | pipeline_cache_create_info_count,
        pipeline_pool_size_count:                         u32                               => "pipelinePoolSizeCount",
        p_pipeline_pool_sizes:                            &'a [PipelinePoolSize<'a>]        => "pPipelinePoolSizes" | pipeline_pool_size_count,
        semaphore_request_count:                          u32                               => "semaphoreRequestCount",
        command_buffer_request_count:                     u32                               => "commandBufferRequestCount",
        fence_request_count:                              u32                               => "fenceRequestCount",
        device_memory_request_count:                      u32                               => "deviceMemoryRequestCount",
        buffer_request_count:                             u32                               => "bufferRequestCount",
        image_request_count:                              u32                               => "imageRequestCount",
        event_request_count:                              u32                               => "eventRequestCount",
        query_pool_request_count:                         u32                               => "queryPoolRequestCount",
        buffer_view_request_count:                        u32                               => "bufferViewRequestCount",
        image_view_request_count:                         u32                               => "imageViewRequestCount",
        layered_image_view_request_count:                 u32                               => "layeredImageViewRequestCount",
        pipeline_cache_request_count:                     u32                               => "pipelineCacheRequestCount",
        pipeline_layout_request_count:                    u32                               => "pipelineLayoutRequestCount",
        render_pass_request_count:                        u32                               => "renderPassRequestCount",
        graphics_pipeline_request_count:                  u32                               => "graphicsPipelineRequestCount",
        compute_pipeline_request_count:                   u32                               => "computePipelineRequestCount",
        descriptor_set_layout_request_count:              u32                               => "descriptorSetLayoutRequestCount",
        sampler_request_count:                            u32                               => "samplerRequestCount",
        descriptor_pool_request_count:                    u32                               => "descriptorPoolRequestCount",
        descriptor_set_request_count:                     u32                               => "descriptorSetRequestCount",
        framebuffer_request_count:                        u32                               => "framebufferRequestCount",
        command_pool_request_count:                       u32                               => "commandPoolRequestCount",
        sampler_ycbcr_conversion_request_count:           u32                               => "samplerYcbcrConversionRequestCount",
        surface_request_count:                            u32                               => "surfaceRequestCount",
        swapchain_request_count:                          u32                               => "swapchainRequestCount",
        display_mode_request_count:                       u32                               => "displayModeRequestCount",
        subpass_description_request_count:                u32                               => "subpassDescriptionRequestCount",
        attachment_description_request_count:             u32                               => "attachmentDescriptionRequestCount",
        descriptor_set_layout_binding_request_count:      u32                               => "descriptorSetLayoutBindingRequestCount",
        descriptor_set_layout_binding_limit:              u32                               => "descriptorSetLayoutBindingLimit",
        max_image_view_mip_levels:                        u32                               => "maxImageViewMipLevels",
        max_image_view_array_layers:                      u32                               => "maxImageViewArrayLayers",
        max_layered_image_view_mip_levels:                u32                               => "maxLayeredImageViewMipLevels",
        max_occlusion_queries_per_pool:                   u32                               => "maxOcclusionQueriesPerPool",
        max_pipeline_statistics_queries_per_pool:         u32                               => "maxPipelineStatisticsQueriesPerPool",
        max_timestamp_queries_per_pool:                   u32                               => "maxTimestampQueriesPerPool",
        max_immutable_samplers_per_descriptor_set_layout: u32                               => "maxImmutableSamplersPerDescriptorSetLayout",
    }
}

vk_struct! {
    /// `VkPipelineOfflineCreateInfo`.
    pub struct PipelineOfflineCreateInfo<'a> : PIPELINE_OFFLINE_CREATE_INFO {
        pipeline_identifier: [u8; VK_UUID_SIZE]  => "pipelineIdentifier",
        match_control:       PipelineMatchControl => "matchControl",
        pool_entry_size:     u64                  => "poolEntrySize",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::{Context, ParseOptions}, traits::FromJson};
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    #[test]
    fn object_reservation() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::strict());
        let value = json!({
            "sType": "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
            "pipelineCacheCreateInfoCount": 1,
            "pPipelineCacheCreateInfos": [{
                "flags": "VK_PIPELINE_CACHE_CREATE_READ_ONLY_BIT | VK_PIPELINE_CACHE_CREATE_USE_APPLICATION_STORAGE_BIT",
                "initialDataSize": 4,
                "pInitialData": "3q2+7w=="
            }],
            "pipelinePoolSizeCount": 1,
            "pPipelinePoolSizes": [{ "poolEntrySize": 65536, "poolEntryCount": 8 }],
            "graphicsPipelineRequestCount": 8,
            "maxImageViewArrayLayers": "VK_REMAINING_ARRAY_LAYERS"
        });
        let info = DeviceObjectReservationCreateInfo::from_json(&ctx, &value).unwrap();
        let cache = &info.p_pipeline_cache_create_infos[0];
        assert_eq!(cache.flags.as_raw(), 0x6);
        assert_eq!(cache.p_initial_data.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(info.p_pipeline_pool_sizes[0].pool_entry_size, 65536);
        assert_eq!(info.graphics_pipeline_request_count, 8);
        assert_eq!(info.compute_pipeline_request_count, 0);
        assert_eq!(info.max_image_view_array_layers, u32::MAX);
    }

    #[test]
    fn offline_identifier_is_zero_padded() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        let info = PipelineOfflineCreateInfo::from_json(
            &ctx,
            &json!({
                "pipelineIdentifier": [1, 2, 3],
                "matchControl": "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
                "poolEntrySize": 1024
            }),
        )
        .unwrap();
        assert_eq!(&info.pipeline_identifier[..4], &[1, 2, 3, 0]);
        assert_eq!(info.match_control, PipelineMatchControl::APPLICATION_UUID_EXACT_MATCH);
    }
}
