//! Vulkan enums and their enumerant names.

#![allow(non_upper_case_globals)]

vk_enum! {
    /// `VkStructureType`.
    pub struct StructureType {
        APPLICATION_INFO                                          = 0 => "VK_STRUCTURE_TYPE_APPLICATION_INFO",
        INSTANCE_CREATE_INFO                                      = 1 => "VK_STRUCTURE_TYPE_INSTANCE_CREATE_INFO",
        DEVICE_QUEUE_CREATE_INFO                                  = 2 => "VK_STRUCTURE_TYPE_DEVICE_QUEUE_CREATE_INFO",
        DEVICE_CREATE_INFO                                        = 3 => "VK_STRUCTURE_TYPE_DEVICE_CREATE_INFO",
        SUBMIT_INFO                                               = 4 => "VK_STRUCTURE_TYPE_SUBMIT_INFO",
        MEMORY_ALLOCATE_INFO                                      = 5 => "VK_STRUCTURE_TYPE_MEMORY_ALLOCATE_INFO",
        MAPPED_MEMORY_RANGE                                       = 6 => "VK_STRUCTURE_TYPE_MAPPED_MEMORY_RANGE",
        BIND_SPARSE_INFO                                          = 7 => "VK_STRUCTURE_TYPE_BIND_SPARSE_INFO",
        FENCE_CREATE_INFO                                         = 8 => "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO",
        SEMAPHORE_CREATE_INFO                                     = 9 => "VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO",
        EVENT_CREATE_INFO                                         = 10 => "VK_STRUCTURE_TYPE_EVENT_CREATE_INFO",
        QUERY_POOL_CREATE_INFO                                    = 11 => "VK_STRUCTURE_TYPE_QUERY_POOL_CREATE_INFO",
        BUFFER_CREATE_INFO                                        = 12 => "VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO",
        BUFFER_VIEW_CREATE_INFO                                   = 13 => "VK_STRUCTURE_TYPE_BUFFER_VIEW_CREATE_INFO",
        IMAGE_CREATE_INFO                                         = 14 => "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO",
        IMAGE_VIEW_CREATE_INFO                                    = 15 => "VK_STRUCTURE_TYPE_IMAGE_VIEW_CREATE_INFO",
        SHADER_MODULE_CREATE_INFO                                 = 16 => "VK_STRUCTURE_TYPE_SHADER_MODULE_CREATE_INFO",
        PIPELINE_CACHE_CREATE_INFO                                = 17 => "VK_STRUCTURE_TYPE_PIPELINE_CACHE_CREATE_INFO",
        PIPELINE_SHADER_STAGE_CREATE_INFO                         = 18 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
        PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO                   = 19 => "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
        PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO                 = 20 => "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
        PIPELINE_TESSELLATION_STATE_CREATE_INFO                   = 21 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_STATE_CREATE_INFO",
        PIPELINE_VIEWPORT_STATE_CREATE_INFO                       = 22 => "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO",
        PIPELINE_RASTERIZATION_STATE_CREATE_INFO                  = 23 => "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_STATE_CREATE_INFO",
        PIPELINE_MULTISAMPLE_STATE_CREATE_INFO                    = 24 => "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
        PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO                  = 25 => "VK_STRUCTURE_TYPE_PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO",
        PIPELINE_COLOR_BLEND_STATE_CREATE_INFO                    = 26 => "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
        PIPELINE_DYNAMIC_STATE_CREATE_INFO                        = 27 => "VK_STRUCTURE_TYPE_PIPELINE_DYNAMIC_STATE_CREATE_INFO",
        GRAPHICS_PIPELINE_CREATE_INFO                             = 28 => "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
        COMPUTE_PIPELINE_CREATE_INFO                              = 29 => "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO",
        PIPELINE_LAYOUT_CREATE_INFO                               = 30 => "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
        SAMPLER_CREATE_INFO                                       = 31 => "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO",
        DESCRIPTOR_SET_LAYOUT_CREATE_INFO                         = 32 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
        DESCRIPTOR_POOL_CREATE_INFO                               = 33 => "VK_STRUCTURE_TYPE_DESCRIPTOR_POOL_CREATE_INFO",
        DESCRIPTOR_SET_ALLOCATE_INFO                              = 34 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_ALLOCATE_INFO",
        WRITE_DESCRIPTOR_SET                                      = 35 => "VK_STRUCTURE_TYPE_WRITE_DESCRIPTOR_SET",
        COPY_DESCRIPTOR_SET                                       = 36 => "VK_STRUCTURE_TYPE_COPY_DESCRIPTOR_SET",
        FRAMEBUFFER_CREATE_INFO                                   = 37 => "VK_STRUCTURE_TYPE_FRAMEBUFFER_CREATE_INFO",
        RENDER_PASS_CREATE_INFO                                   = 38 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO",
        COMMAND_POOL_CREATE_INFO                                  = 39 => "VK_STRUCTURE_TYPE_COMMAND_POOL_CREATE_INFO",
        COMMAND_BUFFER_ALLOCATE_INFO                              = 40 => "VK_STRUCTURE_TYPE_COMMAND_BUFFER_ALLOCATE_INFO",
        COMMAND_BUFFER_INHERITANCE_INFO                           = 41 => "VK_STRUCTURE_TYPE_COMMAND_BUFFER_INHERITANCE_INFO",
        COMMAND_BUFFER_BEGIN_INFO                                 = 42 => "VK_STRUCTURE_TYPE_COMMAND_BUFFER_BEGIN_INFO",
        RENDER_PASS_BEGIN_INFO                                    = 43 => "VK_STRUCTURE_TYPE_RENDER_PASS_BEGIN_INFO",
        BUFFER_MEMORY_BARRIER                                     = 44 => "VK_STRUCTURE_TYPE_BUFFER_MEMORY_BARRIER",
        IMAGE_MEMORY_BARRIER                                      = 45 => "VK_STRUCTURE_TYPE_IMAGE_MEMORY_BARRIER",
        MEMORY_BARRIER                                            = 46 => "VK_STRUCTURE_TYPE_MEMORY_BARRIER",
        LOADER_INSTANCE_CREATE_INFO                               = 47 => "VK_STRUCTURE_TYPE_LOADER_INSTANCE_CREATE_INFO",
        LOADER_DEVICE_CREATE_INFO                                 = 48 => "VK_STRUCTURE_TYPE_LOADER_DEVICE_CREATE_INFO",
        PHYSICAL_DEVICE_VULKAN_1_1_FEATURES                       = 49 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES",
        PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES                     = 50 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES",
        PHYSICAL_DEVICE_VULKAN_1_2_FEATURES                       = 51 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_2_FEATURES",
        PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES                     = 52 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES",
        RENDER_PASS_MULTIVIEW_CREATE_INFO                         = 1000053000 => "VK_STRUCTURE_TYPE_RENDER_PASS_MULTIVIEW_CREATE_INFO",
        PHYSICAL_DEVICE_MULTIVIEW_FEATURES                        = 1000053001 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_MULTIVIEW_FEATURES",
        PHYSICAL_DEVICE_FEATURES_2                                = 1000059000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
        PHYSICAL_DEVICE_PROPERTIES_2                              = 1000059001 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_PROPERTIES_2",
        PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES           = 1000063000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES",
        PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES              = 1000082000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES",
        PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES                    = 1000083000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES",
        PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT          = 1000099001 => "VK_STRUCTURE_TYPE_PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT",
        PIPELINE_RASTERIZATION_CONSERVATIVE_STATE_CREATE_INFO_EXT = 1000101001 => "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_CONSERVATIVE_STATE_CREATE_INFO_EXT",
        PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES            = 1000108000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES",
        ATTACHMENT_DESCRIPTION_2                                  = 1000109000 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_2",
        ATTACHMENT_REFERENCE_2                                    = 1000109001 => "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_2",
        SUBPASS_DESCRIPTION_2                                     = 1000109002 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_2",
        SUBPASS_DEPENDENCY_2                                      = 1000109003 => "VK_STRUCTURE_TYPE_SUBPASS_DEPENDENCY_2",
        RENDER_PASS_CREATE_INFO_2                                 = 1000109004 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO_2",
        SUBPASS_BEGIN_INFO                                        = 1000109005 => "VK_STRUCTURE_TYPE_SUBPASS_BEGIN_INFO",
        SUBPASS_END_INFO                                          = 1000109006 => "VK_STRUCTURE_TYPE_SUBPASS_END_INFO",
        RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO           = 1000117001 => "VK_STRUCTURE_TYPE_RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO",
        PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO     = 1000117003 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO",
        PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES                = 1000120000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES",
        SAMPLER_REDUCTION_MODE_CREATE_INFO                        = 1000130001 => "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
        SAMPLE_LOCATIONS_INFO_EXT                                 = 1000143000 => "VK_STRUCTURE_TYPE_SAMPLE_LOCATIONS_INFO_EXT",
        PIPELINE_SAMPLE_LOCATIONS_STATE_CREATE_INFO_EXT           = 1000143002 => "VK_STRUCTURE_TYPE_PIPELINE_SAMPLE_LOCATIONS_STATE_CREATE_INFO_EXT",
        PHYSICAL_DEVICE_PROTECTED_MEMORY_FEATURES                 = 1000145001 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_PROTECTED_MEMORY_FEATURES",
        SAMPLER_YCBCR_CONVERSION_CREATE_INFO                      = 1000156000 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_CREATE_INFO",
        SAMPLER_YCBCR_CONVERSION_INFO                             = 1000156001 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
        PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES         = 1000156004 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES",
        DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO           = 1000161000 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO",
        PHYSICAL_DEVICE_SHADER_SUBGROUP_EXTENDED_TYPES_FEATURES   = 1000175000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_SUBGROUP_EXTENDED_TYPES_FEATURES",
        PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES                     = 1000177000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES",
        PHYSICAL_DEVICE_SHADER_ATOMIC_INT64_FEATURES              = 1000180000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_ATOMIC_INT64_FEATURES",
        PIPELINE_VERTEX_INPUT_DIVISOR_STATE_CREATE_INFO_EXT       = 1000190001 => "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_DIVISOR_STATE_CREATE_INFO_EXT",
        PHYSICAL_DEVICE_VERTEX_ATTRIBUTE_DIVISOR_FEATURES_EXT     = 1000190002 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VERTEX_ATTRIBUTE_DIVISOR_FEATURES_EXT",
        SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE                 = 1000199005 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE",
        PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES               = 1000207000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES",
        PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES              = 1000211000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES",
        PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES              = 1000221000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES",
        PIPELINE_FRAGMENT_SHADING_RATE_STATE_CREATE_INFO_KHR      = 1000226001 => "VK_STRUCTURE_TYPE_PIPELINE_FRAGMENT_SHADING_RATE_STATE_CREATE_INFO_KHR",
        PHYSICAL_DEVICE_SEPARATE_DEPTH_STENCIL_LAYOUTS_FEATURES   = 1000241000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SEPARATE_DEPTH_STENCIL_LAYOUTS_FEATURES",
        ATTACHMENT_REFERENCE_STENCIL_LAYOUT                       = 1000241001 => "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_STENCIL_LAYOUT",
        ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT                     = 1000241002 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT",
        PHYSICAL_DEVICE_UNIFORM_BUFFER_STANDARD_LAYOUT_FEATURES   = 1000253000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_UNIFORM_BUFFER_STANDARD_LAYOUT_FEATURES",
        PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES            = 1000257000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES",
        PHYSICAL_DEVICE_LINE_RASTERIZATION_FEATURES_EXT           = 1000259000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_LINE_RASTERIZATION_FEATURES_EXT",
        PIPELINE_RASTERIZATION_LINE_STATE_CREATE_INFO_EXT         = 1000259001 => "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_LINE_STATE_CREATE_INFO_EXT",
        PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES                 = 1000261000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES",
        SAMPLER_CUSTOM_BORDER_COLOR_CREATE_INFO_EXT               = 1000287000 => "VK_STRUCTURE_TYPE_SAMPLER_CUSTOM_BORDER_COLOR_CREATE_INFO_EXT",
        PHYSICAL_DEVICE_CUSTOM_BORDER_COLOR_FEATURES_EXT          = 1000287002 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_CUSTOM_BORDER_COLOR_FEATURES_EXT",
        PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES                    = 1000298000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES",
        PHYSICAL_DEVICE_VULKAN_SC_1_0_PROPERTIES                  = 1000298001 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_PROPERTIES",
        DEVICE_OBJECT_RESERVATION_CREATE_INFO                     = 1000298002 => "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
        COMMAND_POOL_MEMORY_RESERVATION_CREATE_INFO               = 1000298003 => "VK_STRUCTURE_TYPE_COMMAND_POOL_MEMORY_RESERVATION_CREATE_INFO",
        COMMAND_POOL_MEMORY_CONSUMPTION                           = 1000298004 => "VK_STRUCTURE_TYPE_COMMAND_POOL_MEMORY_CONSUMPTION",
        PIPELINE_POOL_SIZE                                        = 1000298005 => "VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE",
        FAULT_DATA                                                = 1000298007 => "VK_STRUCTURE_TYPE_FAULT_DATA",
        FAULT_CALLBACK_INFO                                       = 1000298008 => "VK_STRUCTURE_TYPE_FAULT_CALLBACK_INFO",
        PIPELINE_OFFLINE_CREATE_INFO                              = 1000298010 => "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
        PHYSICAL_DEVICE_COLOR_WRITE_ENABLE_FEATURES_EXT           = 1000381000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_COLOR_WRITE_ENABLE_FEATURES_EXT",
        PIPELINE_COLOR_WRITE_CREATE_INFO_EXT                      = 1000381001 => "VK_STRUCTURE_TYPE_PIPELINE_COLOR_WRITE_CREATE_INFO_EXT",
    }

    /// `VkFormat`.
    pub struct Format {
        UNDEFINED                                  = 0 => "VK_FORMAT_UNDEFINED",
        R4G4_UNORM_PACK8                           = 1 => "VK_FORMAT_R4G4_UNORM_PACK8",
        R4G4B4A4_UNORM_PACK16                      = 2 => "VK_FORMAT_R4G4B4A4_UNORM_PACK16",
        B4G4R4A4_UNORM_PACK16                      = 3 => "VK_FORMAT_B4G4R4A4_UNORM_PACK16",
        R5G6B5_UNORM_PACK16                        = 4 => "VK_FORMAT_R5G6B5_UNORM_PACK16",
        B5G6R5_UNORM_PACK16                        = 5 => "VK_FORMAT_B5G6R5_UNORM_PACK16",
        R5G5B5A1_UNORM_PACK16                      = 6 => "VK_FORMAT_R5G5B5A1_UNORM_PACK16",
        B5G5R5A1_UNORM_PACK16                      = 7 => "VK_FORMAT_B5G5R5A1_UNORM_PACK16",
        A1R5G5B5_UNORM_PACK16                      = 8 => "VK_FORMAT_A1R5G5B5_UNORM_PACK16",
        R8_UNORM                                   = 9 => "VK_FORMAT_R8_UNORM",
        R8_SNORM                                   = 10 => "VK_FORMAT_R8_SNORM",
        R8_USCALED                                 = 11 => "VK_FORMAT_R8_USCALED",
        R8_SSCALED                                 = 12 => "VK_FORMAT_R8_SSCALED",
        R8_UINT                                    = 13 => "VK_FORMAT_R8_UINT",
        R8_SINT                                    = 14 => "VK_FORMAT_R8_SINT",
        R8_SRGB                                    = 15 => "VK_FORMAT_R8_SRGB",
        R8G8_UNORM                                 = 16 => "VK_FORMAT_R8G8_UNORM",
        R8G8_SNORM                                 = 17 => "VK_FORMAT_R8G8_SNORM",
        R8G8_USCALED                               = 18 => "VK_FORMAT_R8G8_USCALED",
        R8G8_SSCALED                               = 19 => "VK_FORMAT_R8G8_SSCALED",
        R8G8_UINT                                  = 20 => "VK_FORMAT_R8G8_UINT",
        R8G8_SINT                                  = 21 => "VK_FORMAT_R8G8_SINT",
        R8G8_SRGB                                  = 22 => "VK_FORMAT_R8G8_SRGB",
        R8G8B8_UNORM                               = 23 => "VK_FORMAT_R8G8B8_UNORM",
        R8G8B8_SNORM                               = 24 => "VK_FORMAT_R8G8B8_SNORM",
        R8G8B8_USCALED                             = 25 => "VK_FORMAT_R8G8B8_USCALED",
        R8G8B8_SSCALED                             = 26 => "VK_FORMAT_R8G8B8_SSCALED",
        R8G8B8_UINT                                = 27 => "VK_FORMAT_R8G8B8_UINT",
        R8G8B8_SINT                                = 28 => "VK_FORMAT_R8G8B8_SINT",
        R8G8B8_SRGB                                = 29 => "VK_FORMAT_R8G8B8_SRGB",
        B8G8R8_UNORM                               = 30 => "VK_FORMAT_B8G8R8_UNORM",
        B8G8R8_SNORM                               = 31 => "VK_FORMAT_B8G8R8_SNORM",
        B8G8R8_USCALED                             = 32 => "VK_FORMAT_B8G8R8_USCALED",
        B8G8R8_SSCALED                             = 33 => "VK_FORMAT_B8G8R8_SSCALED",
        B8G8R8_UINT                                = 34 => "VK_FORMAT_B8G8R8_UINT",
        B8G8R8_SINT                                = 35 => "VK_FORMAT_B8G8R8_SINT",
        B8G8R8_SRGB                                = 36 => "VK_FORMAT_B8G8R8_SRGB",
        R8G8B8A8_UNORM                             = 37 => "VK_FORMAT_R8G8B8A8_UNORM",
        R8G8B8A8_SNORM                             = 38 => "VK_FORMAT_R8G8B8A8_SNORM",
        R8G8B8A8_USCALED                           = 39 => "VK_FORMAT_R8G8B8A8_USCALED",
        R8G8B8A8_SSCALED                           = 40 => "VK_FORMAT_R8G8B8A8_SSCALED",
        R8G8B8A8_UINT                              = 41 => "VK_FORMAT_R8G8B8A8_UINT",
        R8G8B8A8_SINT                              = 42 => "VK_FORMAT_R8G8B8A8_SINT",
        R8G8B8A8_SRGB                              = 43 => "VK_FORMAT_R8G8B8A8_SRGB",
        B8G8R8A8_UNORM                             = 44 => "VK_FORMAT_B8G8R8A8_UNORM",
        B8G8R8A8_SNORM                             = 45 => "VK_FORMAT_B8G8R8A8_SNORM",
        B8G8R8A8_USCALED                           = 46 => "VK_FORMAT_B8G8R8A8_USCALED",
        B8G8R8A8_SSCALED                           = 47 => "VK_FORMAT_B8G8R8A8_SSCALED",
        B8G8R8A8_UINT                              = 48 => "VK_FORMAT_B8G8R8A8_UINT",
        B8G8R8A8_SINT                              = 49 => "VK_FORMAT_B8G8R8A8_SINT",
        B8G8R8A8_SRGB                              = 50 => "VK_FORMAT_B8G8R8A8_SRGB",
        A8B8G8R8_UNORM_PACK32                      = 51 => "VK_FORMAT_A8B8G8R8_UNORM_PACK32",
        A8B8G8R8_SNORM_PACK32                      = 52 => "VK_FORMAT_A8B8G8R8_SNORM_PACK32",
        A8B8G8R8_USCALED_PACK32                    = 53 => "VK_FORMAT_A8B8G8R8_USCALED_PACK32",
        A8B8G8R8_SSCALED_PACK32                    = 54 => "VK_FORMAT_A8B8G8R8_SSCALED_PACK32",
        A8B8G8R8_UINT_PACK32                       = 55 => "VK_FORMAT_A8B8G8R8_UINT_PACK32",
        A8B8G8R8_SINT_PACK32                       = 56 => "VK_FORMAT_A8B8G8R8_SINT_PACK32",
        A8B8G8R8_SRGB_PACK32                       = 57 => "VK_FORMAT_A8B8G8R8_SRGB_PACK32",
        A2R10G10B10_UNORM_PACK32                   = 58 => "VK_FORMAT_A2R10G10B10_UNORM_PACK32",
        A2R10G10B10_SNORM_PACK32                   = 59 => "VK_FORMAT_A2R10G10B10_SNORM_PACK32",
        A2R10G10B10_USCALED_PACK32                 = 60 => "VK_FORMAT_A2R10G10B10_USCALED_PACK32",
        A2R10G10B10_SSCALED_PACK32                 = 61 => "VK_FORMAT_A2R10G10B10_SSCALED_PACK32",
        A2R10G10B10_UINT_PACK32                    = 62 => "VK_FORMAT_A2R10G10B10_UINT_PACK32",
        A2R10G10B10_SINT_PACK32                    = 63 => "VK_FORMAT_A2R10G10B10_SINT_PACK32",
        A2B10G10R10_UNORM_PACK32                   = 64 => "VK_FORMAT_A2B10G10R10_UNORM_PACK32",
        A2B10G10R10_SNORM_PACK32                   = 65 => "VK_FORMAT_A2B10G10R10_SNORM_PACK32",
        A2B10G10R10_USCALED_PACK32                 = 66 => "VK_FORMAT_A2B10G10R10_USCALED_PACK32",
        A2B10G10R10_SSCALED_PACK32                 = 67 => "VK_FORMAT_A2B10G10R10_SSCALED_PACK32",
        A2B10G10R10_UINT_PACK32                    = 68 => "VK_FORMAT_A2B10G10R10_UINT_PACK32",
        A2B10G10R10_SINT_PACK32                    = 69 => "VK_FORMAT_A2B10G10R10_SINT_PACK32",
        R16_UNORM                                  = 70 => "VK_FORMAT_R16_UNORM",
        R16_SNORM                                  = 71 => "VK_FORMAT_R16_SNORM",
        R16_USCALED                                = 72 => "VK_FORMAT_R16_USCALED",
        R16_SSCALED                                = 73 => "VK_FORMAT_R16_SSCALED",
        R16_UINT                                   = 74 => "VK_FORMAT_R16_UINT",
        R16_SINT                                   = 75 => "VK_FORMAT_R16_SINT",
        R16_SFLOAT                                 = 76 => "VK_FORMAT_R16_SFLOAT",
        R16G16_UNORM                               = 77 => "VK_FORMAT_R16G16_UNORM",
        R16G16_SNORM                               = 78 => "VK_FORMAT_R16G16_SNORM",
        R16G16_USCALED                             = 79 => "VK_FORMAT_R16G16_USCALED",
        R16G16_SSCALED                             = 80 => "VK_FORMAT_R16G16_SSCALED",
        R16G16_UINT                                = 81 => "VK_FORMAT_R16G16_UINT",
        R16G16_SINT                                = 82 => "VK_FORMAT_R16G16_SINT",
        R16G16_SFLOAT                              = 83 => "VK_FORMAT_R16G16_SFLOAT",
        R16G16B16_UNORM                            = 84 => "VK_FORMAT_R16G16B16_UNORM",
        R16G16B16_SNORM                            = 85 => "VK_FORMAT_R16G16B16_SNORM",
        R16G16B16_USCALED                          = 86 => "VK_FORMAT_R16G16B16_USCALED",
        R16G16B16_SSCALED                          = 87 => "VK_FORMAT_R16G16B16_SSCALED",
        R16G16B16_UINT                             = 88 => "VK_FORMAT_R16G16B16_UINT",
        R16G16B16_SINT                             = 89 => "VK_FORMAT_R16G16B16_SINT",
        R16G16B16_SFLOAT                           = 90 => "VK_FORMAT_R16G16B16_SFLOAT",
        R16G16B16A16_UNORM                         = 91 => "VK_FORMAT_R16G16B16A16_UNORM",
        R16G16B16A16_SNORM                         = 92 => "VK_FORMAT_R16G16B16A16_SNORM",
        R16G16B16A16_USCALED                       = 93 => "VK_FORMAT_R16G16B16A16_USCALED",
        R16G16B16A16_SSCALED                       = 94 => "VK_FORMAT_R16G16B16A16_SSCALED",
        R16G16B16A16_UINT                          = 95 => "VK_FORMAT_R16G16B16A16_UINT",
        R16G16B16A16_SINT                          = 96 => "VK_FORMAT_R16G16B16A16_SINT",
        R16G16B16A16_SFLOAT                        = 97 => "VK_FORMAT_R16G16B16A16_SFLOAT",
        R32_UINT                                   = 98 => "VK_FORMAT_R32_UINT",
        R32_SINT                                   = 99 => "VK_FORMAT_R32_SINT",
        R32_SFLOAT                                 = 100 => "VK_FORMAT_R32_SFLOAT",
        R32G32_UINT                                = 101 => "VK_FORMAT_R32G32_UINT",
        R32G32_SINT                                = 102 => "VK_FORMAT_R32G32_SINT",
        R32G32_SFLOAT                              = 103 => "VK_FORMAT_R32G32_SFLOAT",
        R32G32B32_UINT                             = 104 => "VK_FORMAT_R32G32B32_UINT",
        R32G32B32_SINT                             = 105 => "VK_FORMAT_R32G32B32_SINT",
        R32G32B32_SFLOAT                           = 106 => "VK_FORMAT_R32G32B32_SFLOAT",
        R32G32B32A32_UINT                          = 107 => "VK_FORMAT_R32G32B32A32_UINT",
        R32G32B32A32_SINT                          = 108 => "VK_FORMAT_R32G32B32A32_SINT",
        R32G32B32A32_SFLOAT                        = 109 => "VK_FORMAT_R32G32B32A32_SFLOAT",
        R64_UINT                                   = 110 => "VK_FORMAT_R64_UINT",
        R64_SINT                                   = 111 => "VK_FORMAT_R64_SINT",
        R64_SFLOAT                                 = 112 => "VK_FORMAT_R64_SFLOAT",
        R64G64_UINT                                = 113 => "VK_FORMAT_R64G64_UINT",
        R64G64_SINT                                = 114 => "VK_FORMAT_R64G64_SINT",
        R64G64_SFLOAT                              = 115 => "VK_FORMAT_R64G64_SFLOAT",
        R64G64B64_UINT                             = 116 => "VK_FORMAT_R64G64B64_UINT",
        R64G64B64_SINT                             = 117 => "VK_FORMAT_R64G64B64_SINT",
        R64G64B64_SFLOAT                           = 118 => "VK_FORMAT_R64G64B64_SFLOAT",
        R64G64B64A64_UINT                          = 119 => "VK_FORMAT_R64G64B64A64_UINT",
        R64G64B64A64_SINT                          = 120 => "VK_FORMAT_R64G64B64A64_SINT",
        R64G64B64A64_SFLOAT                        = 121 => "VK_FORMAT_R64G64B64A64_SFLOAT",
        B10G11R11_UFLOAT_PACK32                    = 122 => "VK_FORMAT_B10G11R11_UFLOAT_PACK32",
        E5B9G9R9_UFLOAT_PACK32                     = 123 => "VK_FORMAT_E5B9G9R9_UFLOAT_PACK32",
        D16_UNORM                                  = 124 => "VK_FORMAT_D16_UNORM",
        X8_D24_UNORM_PACK32                        = 125 => "VK_FORMAT_X8_D24_UNORM_PACK32",
        D32_SFLOAT                                 = 126 => "VK_FORMAT_D32_SFLOAT",
        S8_UINT                                    = 127 => "VK_FORMAT_S8_UINT",
        D16_UNORM_S8_UINT                          = 128 => "VK_FORMAT_D16_UNORM_S8_UINT",
        D24_UNORM_S8_UINT                          = 129 => "VK_FORMAT_D24_UNORM_S8_UINT",
        D32_SFLOAT_S8_UINT                         = 130 => "VK_FORMAT_D32_SFLOAT_S8_UINT",
        BC1_RGB_UNORM_BLOCK                        = 131 => "VK_FORMAT_BC1_RGB_UNORM_BLOCK",
        BC1_RGB_SRGB_BLOCK                         = 132 => "VK_FORMAT_BC1_RGB_SRGB_BLOCK",
        BC1_RGBA_UNORM_BLOCK                       = 133 => "VK_FORMAT_BC1_RGBA_UNORM_BLOCK",
        BC1_RGBA_SRGB_BLOCK                        = 134 => "VK_FORMAT_BC1_RGBA_SRGB_BLOCK",
        BC2_UNORM_BLOCK                            = 135 => "VK_FORMAT_BC2_UNORM_BLOCK",
        BC2_SRGB_BLOCK                             = 136 => "VK_FORMAT_BC2_SRGB_BLOCK",
        BC3_UNORM_BLOCK                            = 137 => "VK_FORMAT_BC3_UNORM_BLOCK",
        BC3_SRGB_BLOCK                             = 138 => "VK_FORMAT_BC3_SRGB_BLOCK",
        BC4_UNORM_BLOCK                            = 139 => "VK_FORMAT_BC4_UNORM_BLOCK",
        BC4_SNORM_BLOCK                            = 140 => "VK_FORMAT_BC4_SNORM_BLOCK",
        BC5_UNORM_BLOCK                            = 141 => "VK_FORMAT_BC5_UNORM_BLOCK",
        BC5_SNORM_BLOCK                            = 142 => "VK_FORMAT_BC5_SNORM_BLOCK",
        BC6H_UFLOAT_BLOCK                          = 143 => "VK_FORMAT_BC6H_UFLOAT_BLOCK",
        BC6H_SFLOAT_BLOCK                          = 144 => "VK_FORMAT_BC6H_SFLOAT_BLOCK",
        BC7_UNORM_BLOCK                            = 145 => "VK_FORMAT_BC7_UNORM_BLOCK",
        BC7_SRGB_BLOCK                             = 146 => "VK_FORMAT_BC7_SRGB_BLOCK",
        ETC2_R8G8B8_UNORM_BLOCK                    = 147 => "VK_FORMAT_ETC2_R8G8B8_UNORM_BLOCK",
        ETC2_R8G8B8_SRGB_BLOCK                     = 148 => "VK_FORMAT_ETC2_R8G8B8_SRGB_BLOCK",
        ETC2_R8G8B8A1_UNORM_BLOCK                  = 149 => "VK_FORMAT_ETC2_R8G8B8A1_UNORM_BLOCK",
        ETC2_R8G8B8A1_SRGB_BLOCK                   = 150 => "VK_FORMAT_ETC2_R8G8B8A1_SRGB_BLOCK",
        ETC2_R8G8B8A8_UNORM_BLOCK                  = 151 => "VK_FORMAT_ETC2_R8G8B8A8_UNORM_BLOCK",
        ETC2_R8G8B8A8_SRGB_BLOCK                   = 152 => "VK_FORMAT_ETC2_R8G8B8A8_SRGB_BLOCK",
        EAC_R11_UNORM_BLOCK                        = 153 => "VK_FORMAT_EAC_R11_UNORM_BLOCK",
        EAC_R11_SNORM_BLOCK                        = 154 => "VK_FORMAT_EAC_R11_SNORM_BLOCK",
        EAC_R11G11_UNORM_BLOCK                     = 155 => "VK_FORMAT_EAC_R11G11_UNORM_BLOCK",
        EAC_R11G11_SNORM_BLOCK                     = 156 => "VK_FORMAT_EAC_R11G11_SNORM_BLOCK",
        ASTC_4x4_UNORM_BLOCK                       = 157 => "VK_FORMAT_ASTC_4x4_UNORM_BLOCK",
        ASTC_4x4_SRGB_BLOCK                        = 158 => "VK_FORMAT_ASTC_4x4_SRGB_BLOCK",
        ASTC_5x4_UNORM_BLOCK                       = 159 => "VK_FORMAT_ASTC_5x4_UNORM_BLOCK",
        ASTC_5x4_SRGB_BLOCK                        = 160 => "VK_FORMAT_ASTC_5x4_SRGB_BLOCK",
        ASTC_5x5_UNORM_BLOCK                       = 161 => "VK_FORMAT_ASTC_5x5_UNORM_BLOCK",
        ASTC_5x5_SRGB_BLOCK                        = 162 => "VK_FORMAT_ASTC_5x5_SRGB_BLOCK",
        ASTC_6x5_UNORM_BLOCK                       = 163 => "VK_FORMAT_ASTC_6x5_UNORM_BLOCK",
        ASTC_6x5_SRGB_BLOCK                        = 164 => "VK_FORMAT_ASTC_6x5_SRGB_BLOCK",
        ASTC_6x6_UNORM_BLOCK                       = 165 => "VK_FORMAT_ASTC_6x6_UNORM_BLOCK",
        ASTC_6x6_SRGB_BLOCK                        = 166 => "VK_FORMAT_ASTC_6x6_SRGB_BLOCK",
        ASTC_8x5_UNORM_BLOCK                       = 167 => "VK_FORMAT_ASTC_8x5_UNORM_BLOCK",
        ASTC_8x5_SRGB_BLOCK                        = 168 => "VK_FORMAT_ASTC_8x5_SRGB_BLOCK",
        ASTC_8x6_UNORM_BLOCK                       = 169 => "VK_FORMAT_ASTC_8x6_UNORM_BLOCK",
        ASTC_8x6_SRGB_BLOCK                        = 170 => "VK_FORMAT_ASTC_8x6_SRGB_BLOCK",
        ASTC_8x8_UNORM_BLOCK                       = 171 => "VK_FORMAT_ASTC_8x8_UNORM_BLOCK",
        ASTC_8x8_SRGB_BLOCK                        = 172 => "VK_FORMAT_ASTC_8x8_SRGB_BLOCK",
        ASTC_10x5_UNORM_BLOCK                      = 173 => "VK_FORMAT_ASTC_10x5_UNORM_BLOCK",
        ASTC_10x5_SRGB_BLOCK                       = 174 => "VK_FORMAT_ASTC_10x5_SRGB_BLOCK",
        ASTC_10x6_UNORM_BLOCK                      = 175 => "VK_FORMAT_ASTC_10x6_UNORM_BLOCK",
        ASTC_10x6_SRGB_BLOCK                       = 176 => "VK_FORMAT_ASTC_10x6_SRGB_BLOCK",
        ASTC_10x8_UNORM_BLOCK                      = 177 => "VK_FORMAT_ASTC_10x8_UNORM_BLOCK",
        ASTC_10x8_SRGB_BLOCK                       = 178 => "VK_FORMAT_ASTC_10x8_SRGB_BLOCK",
        ASTC_10x10_UNORM_BLOCK                     = 179 => "VK_FORMAT_ASTC_10x10_UNORM_BLOCK",
        ASTC_10x10_SRGB_BLOCK                      = 180 => "VK_FORMAT_ASTC_10x10_SRGB_BLOCK",
        ASTC_12x10_UNORM_BLOCK                     = 181 => "VK_FORMAT_ASTC_12x10_UNORM_BLOCK",
        ASTC_12x10_SRGB_BLOCK                      = 182 => "VK_FORMAT_ASTC_12x10_SRGB_BLOCK",
        ASTC_12x12_UNORM_BLOCK                     = 183 => "VK_FORMAT_ASTC_12x12_UNORM_BLOCK",
        ASTC_12x12_SRGB_BLOCK                      = 184 => "VK_FORMAT_ASTC_12x12_SRGB_BLOCK",
        G8B8G8R8_422_UNORM                         = 1000156000 => "VK_FORMAT_G8B8G8R8_422_UNORM",
        B8G8R8G8_422_UNORM                         = 1000156001 => "VK_FORMAT_B8G8R8G8_422_UNORM",
        G8_B8_R8_3PLANE_420_UNORM                  = 1000156002 => "VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM",
        G8_B8R8_2PLANE_420_UNORM                   = 1000156003 => "VK_FORMAT_G8_B8R8_2PLANE_420_UNORM",
        G8_B8_R8_3PLANE_422_UNORM                  = 1000156004 => "VK_FORMAT_G8_B8_R8_3PLANE_422_UNORM",
        G8_B8R8_2PLANE_422_UNORM                   = 1000156005 => "VK_FORMAT_G8_B8R8_2PLANE_422_UNORM",
        G8_B8_R8_3PLANE_444_UNORM                  = 1000156006 => "VK_FORMAT_G8_B8_R8_3PLANE_444_UNORM",
        R10X6_UNORM_PACK16                         = 1000156007 => "VK_FORMAT_R10X6_UNORM_PACK16",
        R10X6G10X6_UNORM_2PACK16                   = 1000156008 => "VK_FORMAT_R10X6G10X6_UNORM_2PACK16",
        R10X6G10X6B10X6A10X6_UNORM_4PACK16         = 1000156009 => "VK_FORMAT_R10X6G10X6B10X6A10X6_UNORM_4PACK16",
        G10X6B10X6G10X6R10X6_422_UNORM_4PACK16     = 1000156010 => "VK_FORMAT_G10X6B10X6G10X6R10X6_422_UNORM_4PACK16",
        B10X6G10X6R10X6G10X6_422_UNORM_4PACK16     = 1000156011 => "VK_FORMAT_B10X6G10X6R10X6G10X6_422_UNORM_4PACK16",
        G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16 = 1000156012 => "VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16",
        G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16  = 1000156013 => "VK_FORMAT_G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16",
        G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16 = 1000156014 => "VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16",
        G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16  = 1000156015 => "VK_FORMAT_G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16",
        G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16 = 1000156016 => "VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16",
        R12X4_UNORM_PACK16                         = 1000156017 => "VK_FORMAT_R12X4_UNORM_PACK16",
        R12X4G12X4_UNORM_2PACK16                   = 1000156018 => "VK_FORMAT_R12X4G12X4_UNORM_2PACK16",
        R12X4G12X4B12X4A12X4_UNORM_4PACK16         = 1000156019 => "VK_FORMAT_R12X4G12X4B12X4A12X4_UNORM_4PACK16",
        G12X4B12X4G12X4R12X4_422_UNORM_4PACK16     = 1000156020 => "VK_FORMAT_G12X4B12X4G12X4R12X4_422_UNORM_4PACK16",
        B12X4G12X4R12X4G12X4_422_UNORM_4PACK16     = 1000156021 => "VK_FORMAT_B12X4G12X4R12X4G12X4_422_UNORM_4PACK16",
        G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16 = 1000156022 => "VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16",
        G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16  = 1000156023 => "VK_FORMAT_G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16",
        G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16 = 1000156024 => "VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16",
        G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16  = 1000156025 => "VK_FORMAT_G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16",
        G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16 = 1000156026 => "VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16",
        G16B16G16R16_422_UNORM                     = 1000156027 => "VK_FORMAT_G16B16G16R16_422_UNORM",
        B16G16R16G16_422_UNORM                     = 1000156028 => "VK_FORMAT_B16G16R16G16_422_UNORM",
        G16_B16_R16_3PLANE_420_UNORM               = 1000156029 => "VK_FORMAT_G16_B16_R16_3PLANE_420_UNORM",
        G16_B16R16_2PLANE_420_UNORM                = 1000156030 => "VK_FORMAT_G16_B16R16_2PLANE_420_UNORM",
        G16_B16_R16_3PLANE_422_UNORM               = 1000156031 => "VK_FORMAT_G16_B16_R16_3PLANE_422_UNORM",
        G16_B16R16_2PLANE_422_UNORM                = 1000156032 => "VK_FORMAT_G16_B16R16_2PLANE_422_UNORM",
        G16_B16_R16_3PLANE_444_UNORM               = 1000156033 => "VK_FORMAT_G16_B16_R16_3PLANE_444_UNORM",
        A4R4G4B4_UNORM_PACK16_EXT                  = 1000340000 => "VK_FORMAT_A4R4G4B4_UNORM_PACK16_EXT",
        A4B4G4R4_UNORM_PACK16_EXT                  = 1000340001 => "VK_FORMAT_A4B4G4R4_UNORM_PACK16_EXT",
    }

    /// `VkImageLayout`.
    pub struct ImageLayout {
        UNDEFINED                                  = 0 => "VK_IMAGE_LAYOUT_UNDEFINED",
        GENERAL                                    = 1 => "VK_IMAGE_LAYOUT_GENERAL",
        COLOR_ATTACHMENT_OPTIMAL                   = 2 => "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_ATTACHMENT_OPTIMAL           = 3 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_READ_ONLY_OPTIMAL            = 4 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_READ_ONLY_OPTIMAL",
        SHADER_READ_ONLY_OPTIMAL                   = 5 => "VK_IMAGE_LAYOUT_SHADER_READ_ONLY_OPTIMAL",
        TRANSFER_SRC_OPTIMAL                       = 6 => "VK_IMAGE_LAYOUT_TRANSFER_SRC_OPTIMAL",
        TRANSFER_DST_OPTIMAL                       = 7 => "VK_IMAGE_LAYOUT_TRANSFER_DST_OPTIMAL",
        PREINITIALIZED                             = 8 => "VK_IMAGE_LAYOUT_PREINITIALIZED",
        PRESENT_SRC_KHR                            = 1000001002 => "VK_IMAGE_LAYOUT_PRESENT_SRC_KHR",
        SHARED_PRESENT_KHR                         = 1000111000 => "VK_IMAGE_LAYOUT_SHARED_PRESENT_KHR",
        DEPTH_READ_ONLY_STENCIL_ATTACHMENT_OPTIMAL = 1000117000 => "VK_IMAGE_LAYOUT_DEPTH_READ_ONLY_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_ATTACHMENT_STENCIL_READ_ONLY_OPTIMAL = 1000117001 => "VK_IMAGE_LAYOUT_DEPTH_ATTACHMENT_STENCIL_READ_ONLY_OPTIMAL",
        DEPTH_ATTACHMENT_OPTIMAL                   = 1000241000 => "VK_IMAGE_LAYOUT_DEPTH_ATTACHMENT_OPTIMAL",
        DEPTH_READ_ONLY_OPTIMAL                    = 1000241001 => "VK_IMAGE_LAYOUT_DEPTH_READ_ONLY_OPTIMAL",
        STENCIL_ATTACHMENT_OPTIMAL                 = 1000241002 => "VK_IMAGE_LAYOUT_STENCIL_ATTACHMENT_OPTIMAL",
        STENCIL_READ_ONLY_OPTIMAL                  = 1000241003 => "VK_IMAGE_LAYOUT_STENCIL_READ_ONLY_OPTIMAL",
    }

    /// `VkAttachmentLoadOp`.
    pub struct AttachmentLoadOp {
        LOAD      = 0 => "VK_ATTACHMENT_LOAD_OP_LOAD",
        CLEAR     = 1 => "VK_ATTACHMENT_LOAD_OP_CLEAR",
        DONT_CARE = 2 => "VK_ATTACHMENT_LOAD_OP_DONT_CARE",
    }

    /// `VkAttachmentStoreOp`.
    pub struct AttachmentStoreOp {
        STORE     = 0 => "VK_ATTACHMENT_STORE_OP_STORE",
        DONT_CARE = 1 => "VK_ATTACHMENT_STORE_OP_DONT_CARE",
    }

    /// `VkPipelineBindPoint`.
    pub struct PipelineBindPoint {
        GRAPHICS = 0 => "VK_PIPELINE_BIND_POINT_GRAPHICS",
        COMPUTE  = 1 => "VK_PIPELINE_BIND_POINT_COMPUTE",
    }

    /// `VkDescriptorType`.
    pub struct DescriptorType {
        SAMPLER                = 0 => "VK_DESCRIPTOR_TYPE_SAMPLER",
        COMBINED_IMAGE_SAMPLER = 1 => "VK_DESCRIPTOR_TYPE_COMBINED_IMAGE_SAMPLER",
        SAMPLED_IMAGE          = 2 => "VK_DESCRIPTOR_TYPE_SAMPLED_IMAGE",
        STORAGE_IMAGE          = 3 => "VK_DESCRIPTOR_TYPE_STORAGE_IMAGE",
        UNIFORM_TEXEL_BUFFER   = 4 => "VK_DESCRIPTOR_TYPE_UNIFORM_TEXEL_BUFFER",
        STORAGE_TEXEL_BUFFER   = 5 => "VK_DESCRIPTOR_TYPE_STORAGE_TEXEL_BUFFER",
        UNIFORM_BUFFER         = 6 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER",
        STORAGE_BUFFER         = 7 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER",
        UNIFORM_BUFFER_DYNAMIC = 8 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER_DYNAMIC",
        STORAGE_BUFFER_DYNAMIC = 9 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER_DYNAMIC",
        INPUT_ATTACHMENT       = 10 => "VK_DESCRIPTOR_TYPE_INPUT_ATTACHMENT",
    }

    /// `VkFilter`.
    pub struct Filter {
        NEAREST   = 0 => "VK_FILTER_NEAREST",
        LINEAR    = 1 => "VK_FILTER_LINEAR",
        CUBIC_EXT = 1000015000 => "VK_FILTER_CUBIC_EXT",
    }

    /// `VkSamplerMipmapMode`.
    pub struct SamplerMipmapMode {
        NEAREST = 0 => "VK_SAMPLER_MIPMAP_MODE_NEAREST",
        LINEAR  = 1 => "VK_SAMPLER_MIPMAP_MODE_LINEAR",
    }

    /// `VkSamplerAddressMode`.
    pub struct SamplerAddressMode {
        REPEAT               = 0 => "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        MIRRORED_REPEAT      = 1 => "VK_SAMPLER_ADDRESS_MODE_MIRRORED_REPEAT",
        CLAMP_TO_EDGE        = 2 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_EDGE",
        CLAMP_TO_BORDER      = 3 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_BORDER",
        MIRROR_CLAMP_TO_EDGE = 4 => "VK_SAMPLER_ADDRESS_MODE_MIRROR_CLAMP_TO_EDGE",
    }

    /// `VkBorderColor`.
    pub struct BorderColor {
        FLOAT_TRANSPARENT_BLACK = 0 => "VK_BORDER_COLOR_FLOAT_TRANSPARENT_BLACK",
        INT_TRANSPARENT_BLACK   = 1 => "VK_BORDER_COLOR_INT_TRANSPARENT_BLACK",
        FLOAT_OPAQUE_BLACK      = 2 => "VK_BORDER_COLOR_FLOAT_OPAQUE_BLACK",
        INT_OPAQUE_BLACK        = 3 => "VK_BORDER_COLOR_INT_OPAQUE_BLACK",
        FLOAT_OPAQUE_WHITE      = 4 => "VK_BORDER_COLOR_FLOAT_OPAQUE_WHITE",
        INT_OPAQUE_WHITE        = 5 => "VK_BORDER_COLOR_INT_OPAQUE_WHITE",
        FLOAT_CUSTOM_EXT        = 1000287003 => "VK_BORDER_COLOR_FLOAT_CUSTOM_EXT",
        INT_CUSTOM_EXT          = 1000287004 => "VK_BORDER_COLOR_INT_CUSTOM_EXT",
    }

    /// `VkCompareOp`.
    pub struct CompareOp {
        NEVER            = 0 => "VK_COMPARE_OP_NEVER",
        LESS             = 1 => "VK_COMPARE_OP_LESS",
        EQUAL            = 2 => "VK_COMPARE_OP_EQUAL",
        LESS_OR_EQUAL    = 3 => "VK_COMPARE_OP_LESS_OR_EQUAL",
        GREATER          = 4 => "VK_COMPARE_OP_GREATER",
        NOT_EQUAL        = 5 => "VK_COMPARE_OP_NOT_EQUAL",
        GREATER_OR_EQUAL = 6 => "VK_COMPARE_OP_GREATER_OR_EQUAL",
        ALWAYS           = 7 => "VK_COMPARE_OP_ALWAYS",
    }

    /// `VkSamplerYcbcrModelConversion`.
    pub struct SamplerYcbcrModelConversion {
        RGB_IDENTITY   = 0 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_RGB_IDENTITY",
        YCBCR_IDENTITY = 1 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_IDENTITY",
        YCBCR_709      = 2 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_709",
        YCBCR_601      = 3 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_601",
        YCBCR_2020     = 4 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_2020",
    }

    /// `VkSamplerYcbcrRange`.
    pub struct SamplerYcbcrRange {
        ITU_FULL   = 0 => "VK_SAMPLER_YCBCR_RANGE_ITU_FULL",
        ITU_NARROW = 1 => "VK_SAMPLER_YCBCR_RANGE_ITU_NARROW",
    }

    /// `VkChromaLocation`.
    pub struct ChromaLocation {
        COSITED_EVEN = 0 => "VK_CHROMA_LOCATION_COSITED_EVEN",
        MIDPOINT     = 1 => "VK_CHROMA_LOCATION_MIDPOINT",
    }

    /// `VkComponentSwizzle`.
    pub struct ComponentSwizzle {
        IDENTITY = 0 => "VK_COMPONENT_SWIZZLE_IDENTITY",
        ZERO     = 1 => "VK_COMPONENT_SWIZZLE_ZERO",
        ONE      = 2 => "VK_COMPONENT_SWIZZLE_ONE",
        R        = 3 => "VK_COMPONENT_SWIZZLE_R",
        G        = 4 => "VK_COMPONENT_SWIZZLE_G",
        B        = 5 => "VK_COMPONENT_SWIZZLE_B",
        A        = 6 => "VK_COMPONENT_SWIZZLE_A",
    }

    /// `VkVertexInputRate`.
    pub struct VertexInputRate {
        VERTEX   = 0 => "VK_VERTEX_INPUT_RATE_VERTEX",
        INSTANCE = 1 => "VK_VERTEX_INPUT_RATE_INSTANCE",
    }

    /// `VkPrimitiveTopology`.
    pub struct PrimitiveTopology {
        POINT_LIST                    = 0 => "VK_PRIMITIVE_TOPOLOGY_POINT_LIST",
        LINE_LIST                     = 1 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST",
        LINE_STRIP                    = 2 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP",
        TRIANGLE_LIST                 = 3 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        TRIANGLE_STRIP                = 4 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP",
        TRIANGLE_FAN                  = 5 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_FAN",
        LINE_LIST_WITH_ADJACENCY      = 6 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST_WITH_ADJACENCY",
        LINE_STRIP_WITH_ADJACENCY     = 7 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP_WITH_ADJACENCY",
        TRIANGLE_LIST_WITH_ADJACENCY  = 8 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST_WITH_ADJACENCY",
        TRIANGLE_STRIP_WITH_ADJACENCY = 9 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP_WITH_ADJACENCY",
        PATCH_LIST                    = 10 => "VK_PRIMITIVE_TOPOLOGY_PATCH_LIST",
    }

    /// `VkPolygonMode`.
    pub struct PolygonMode {
        FILL  = 0 => "VK_POLYGON_MODE_FILL",
        LINE  = 1 => "VK_POLYGON_MODE_LINE",
        POINT = 2 => "VK_POLYGON_MODE_POINT",
    }

    /// `VkFrontFace`.
    pub struct FrontFace {
        COUNTER_CLOCKWISE = 0 => "VK_FRONT_FACE_COUNTER_CLOCKWISE",
        CLOCKWISE         = 1 => "VK_FRONT_FACE_CLOCKWISE",
    }

    /// `VkStencilOp`.
    pub struct StencilOp {
        KEEP                = 0 => "VK_STENCIL_OP_KEEP",
        ZERO                = 1 => "VK_STENCIL_OP_ZERO",
        REPLACE             = 2 => "VK_STENCIL_OP_REPLACE",
        INCREMENT_AND_CLAMP = 3 => "VK_STENCIL_OP_INCREMENT_AND_CLAMP",
        DECREMENT_AND_CLAMP = 4 => "VK_STENCIL_OP_DECREMENT_AND_CLAMP",
        INVERT              = 5 => "VK_STENCIL_OP_INVERT",
        INCREMENT_AND_WRAP  = 6 => "VK_STENCIL_OP_INCREMENT_AND_WRAP",
        DECREMENT_AND_WRAP  = 7 => "VK_STENCIL_OP_DECREMENT_AND_WRAP",
    }

    /// `VkLogicOp`.
    pub struct LogicOp {
        CLEAR         = 0 => "VK_LOGIC_OP_CLEAR",
        AND           = 1 => "VK_LOGIC_OP_AND",
        AND_REVERSE   = 2 => "VK_LOGIC_OP_AND_REVERSE",
        COPY          = 3 => "VK_LOGIC_OP_COPY",
        AND_INVERTED  = 4 => "VK_LOGIC_OP_AND_INVERTED",
        NO_OP         = 5 => "VK_LOGIC_OP_NO_OP",
        XOR           = 6 => "VK_LOGIC_OP_XOR",
        OR            = 7 => "VK_LOGIC_OP_OR",
        NOR           = 8 => "VK_LOGIC_OP_NOR",
        EQUIVALENT    = 9 => "VK_LOGIC_OP_EQUIVALENT",
        INVERT        = 10 => "VK_LOGIC_OP_INVERT",
        OR_REVERSE    = 11 => "VK_LOGIC_OP_OR_REVERSE",
        COPY_INVERTED = 12 => "VK_LOGIC_OP_COPY_INVERTED",
        OR_INVERTED   = 13 => "VK_LOGIC_OP_OR_INVERTED",
        NAND          = 14 => "VK_LOGIC_OP_NAND",
        SET           = 15 => "VK_LOGIC_OP_SET",
    }

    /// `VkBlendFactor`.
    pub struct BlendFactor {
        ZERO                     = 0 => "VK_BLEND_FACTOR_ZERO",
        ONE                      = 1 => "VK_BLEND_FACTOR_ONE",
        SRC_COLOR                = 2 => "VK_BLEND_FACTOR_SRC_COLOR",
        ONE_MINUS_SRC_COLOR      = 3 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR",
        DST_COLOR                = 4 => "VK_BLEND_FACTOR_DST_COLOR",
        ONE_MINUS_DST_COLOR      = 5 => "VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR",
        SRC_ALPHA                = 6 => "VK_BLEND_FACTOR_SRC_ALPHA",
        ONE_MINUS_SRC_ALPHA      = 7 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA",
        DST_ALPHA                = 8 => "VK_BLEND_FACTOR_DST_ALPHA",
        ONE_MINUS_DST_ALPHA      = 9 => "VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA",
        CONSTANT_COLOR           = 10 => "VK_BLEND_FACTOR_CONSTANT_COLOR",
        ONE_MINUS_CONSTANT_COLOR = 11 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR",
        CONSTANT_ALPHA           = 12 => "VK_BLEND_FACTOR_CONSTANT_ALPHA",
        ONE_MINUS_CONSTANT_ALPHA = 13 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_ALPHA",
        SRC_ALPHA_SATURATE       = 14 => "VK_BLEND_FACTOR_SRC_ALPHA_SATURATE",
        SRC1_COLOR               = 15 => "VK_BLEND_FACTOR_SRC1_COLOR",
        ONE_MINUS_SRC1_COLOR     = 16 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_COLOR",
        SRC1_ALPHA               = 17 => "VK_BLEND_FACTOR_SRC1_ALPHA",
        ONE_MINUS_SRC1_ALPHA     = 18 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_ALPHA",
    }

    /// `VkBlendOp`.
    pub struct BlendOp {
        ADD              = 0 => "VK_BLEND_OP_ADD",
        SUBTRACT         = 1 => "VK_BLEND_OP_SUBTRACT",
        REVERSE_SUBTRACT = 2 => "VK_BLEND_OP_REVERSE_SUBTRACT",
        MIN              = 3 => "VK_BLEND_OP_MIN",
        MAX              = 4 => "VK_BLEND_OP_MAX",
    }

    /// `VkDynamicState`.
    pub struct DynamicState {
        VIEWPORT                        = 0 => "VK_DYNAMIC_STATE_VIEWPORT",
        SCISSOR                         = 1 => "VK_DYNAMIC_STATE_SCISSOR",
        LINE_WIDTH                      = 2 => "VK_DYNAMIC_STATE_LINE_WIDTH",
        DEPTH_BIAS                      = 3 => "VK_DYNAMIC_STATE_DEPTH_BIAS",
        BLEND_CONSTANTS                 = 4 => "VK_DYNAMIC_STATE_BLEND_CONSTANTS",
        DEPTH_BOUNDS                    = 5 => "VK_DYNAMIC_STATE_DEPTH_BOUNDS",
        STENCIL_COMPARE_MASK            = 6 => "VK_DYNAMIC_STATE_STENCIL_COMPARE_MASK",
        STENCIL_WRITE_MASK              = 7 => "VK_DYNAMIC_STATE_STENCIL_WRITE_MASK",
        STENCIL_REFERENCE               = 8 => "VK_DYNAMIC_STATE_STENCIL_REFERENCE",
        DISCARD_RECTANGLE_EXT           = 1000099000 => "VK_DYNAMIC_STATE_DISCARD_RECTANGLE_EXT",
        SAMPLE_LOCATIONS_EXT            = 1000143000 => "VK_DYNAMIC_STATE_SAMPLE_LOCATIONS_EXT",
        LINE_STIPPLE_EXT                = 1000259000 => "VK_DYNAMIC_STATE_LINE_STIPPLE_EXT",
        CULL_MODE_EXT                   = 1000267000 => "VK_DYNAMIC_STATE_CULL_MODE_EXT",
        FRONT_FACE_EXT                  = 1000267001 => "VK_DYNAMIC_STATE_FRONT_FACE_EXT",
        PRIMITIVE_TOPOLOGY_EXT          = 1000267002 => "VK_DYNAMIC_STATE_PRIMITIVE_TOPOLOGY_EXT",
        VIEWPORT_WITH_COUNT_EXT         = 1000267003 => "VK_DYNAMIC_STATE_VIEWPORT_WITH_COUNT_EXT",
        SCISSOR_WITH_COUNT_EXT          = 1000267004 => "VK_DYNAMIC_STATE_SCISSOR_WITH_COUNT_EXT",
        VERTEX_INPUT_BINDING_STRIDE_EXT = 1000267005 => "VK_DYNAMIC_STATE_VERTEX_INPUT_BINDING_STRIDE_EXT",
        DEPTH_TEST_ENABLE_EXT           = 1000267006 => "VK_DYNAMIC_STATE_DEPTH_TEST_ENABLE_EXT",
        DEPTH_WRITE_ENABLE_EXT          = 1000267007 => "VK_DYNAMIC_STATE_DEPTH_WRITE_ENABLE_EXT",
        DEPTH_COMPARE_OP_EXT            = 1000267008 => "VK_DYNAMIC_STATE_DEPTH_COMPARE_OP_EXT",
        DEPTH_BOUNDS_TEST_ENABLE_EXT    = 1000267009 => "VK_DYNAMIC_STATE_DEPTH_BOUNDS_TEST_ENABLE_EXT",
        STENCIL_TEST_ENABLE_EXT         = 1000267010 => "VK_DYNAMIC_STATE_STENCIL_TEST_ENABLE_EXT",
        STENCIL_OP_EXT                  = 1000267011 => "VK_DYNAMIC_STATE_STENCIL_OP_EXT",
    }

    /// `VkSamplerReductionMode`.
    pub struct SamplerReductionMode {
        WEIGHTED_AVERAGE = 0 => "VK_SAMPLER_REDUCTION_MODE_WEIGHTED_AVERAGE",
        MIN              = 1 => "VK_SAMPLER_REDUCTION_MODE_MIN",
        MAX              = 2 => "VK_SAMPLER_REDUCTION_MODE_MAX",
    }

    /// `VkTessellationDomainOrigin`.
    pub struct TessellationDomainOrigin {
        UPPER_LEFT = 0 => "VK_TESSELLATION_DOMAIN_ORIGIN_UPPER_LEFT",
        LOWER_LEFT = 1 => "VK_TESSELLATION_DOMAIN_ORIGIN_LOWER_LEFT",
    }

    /// `VkPipelineMatchControl`.
    pub struct PipelineMatchControl {
        APPLICATION_UUID_EXACT_MATCH = 0 => "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
    }

    /// `VkDiscardRectangleModeEXT`.
    pub struct DiscardRectangleModeEXT {
        INCLUSIVE = 0 => "VK_DISCARD_RECTANGLE_MODE_INCLUSIVE_EXT",
        EXCLUSIVE = 1 => "VK_DISCARD_RECTANGLE_MODE_EXCLUSIVE_EXT",
    }

    /// `VkConservativeRasterizationModeEXT`.
    pub struct ConservativeRasterizationModeEXT {
        DISABLED      = 0 => "VK_CONSERVATIVE_RASTERIZATION_MODE_DISABLED_EXT",
        OVERESTIMATE  = 1 => "VK_CONSERVATIVE_RASTERIZATION_MODE_OVERESTIMATE_EXT",
        UNDERESTIMATE = 2 => "VK_CONSERVATIVE_RASTERIZATION_MODE_UNDERESTIMATE_EXT",
    }

    /// `VkLineRasterizationModeEXT`.
    pub struct LineRasterizationModeEXT {
        DEFAULT            = 0 => "VK_LINE_RASTERIZATION_MODE_DEFAULT_EXT",
        RECTANGULAR        = 1 => "VK_LINE_RASTERIZATION_MODE_RECTANGULAR_EXT",
        BRESENHAM          = 2 => "VK_LINE_RASTERIZATION_MODE_BRESENHAM_EXT",
        RECTANGULAR_SMOOTH = 3 => "VK_LINE_RASTERIZATION_MODE_RECTANGULAR_SMOOTH_EXT",
    }

    /// `VkFragmentShadingRateCombinerOpKHR`.
    pub struct FragmentShadingRateCombinerOpKHR {
        KEEP    = 0 => "VK_FRAGMENT_SHADING_RATE_COMBINER_OP_KEEP_KHR",
        REPLACE = 1 => "VK_FRAGMENT_SHADING_RATE_COMBINER_OP_REPLACE_KHR",
        MIN     = 2 => "VK_FRAGMENT_SHADING_RATE_COMBINER_OP_MIN_KHR",
        MAX     = 3 => "VK_FRAGMENT_SHADING_RATE_COMBINER_OP_MAX_KHR",
        MUL     = 4 => "VK_FRAGMENT_SHADING_RATE_COMBINER_OP_MUL_KHR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::{Context, ParseOptions}, error::VkJsonError, traits::FromJson};
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    #[test]
    fn names_and_values_agree() {
        assert_eq!(Format::from_name("VK_FORMAT_R8G8B8A8_UNORM"), Some(Format::R8G8B8A8_UNORM));
        assert_eq!(Format::R8G8B8A8_UNORM.as_raw(), 37);
        assert_eq!(Format::ASTC_12x12_SRGB_BLOCK.as_raw(), 184);
        assert_eq!(Format::G8_B8R8_2PLANE_420_UNORM.as_raw(), 1000156003);
        assert_eq!(StructureType::PIPELINE_OFFLINE_CREATE_INFO.name(), Some("VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO"));
        assert_eq!(CompareOp::TYPE_NAME, "VkCompareOp");
        assert_eq!(format!("{:?}", BlendOp::MAX), "VK_BLEND_OP_MAX");
        assert_eq!(format!("{:?}", BlendOp(42)), "BlendOp(42)");
    }

    #[test]
    fn tables_have_unique_names() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in StructureType::ENUMERANTS.iter().chain(Format::ENUMERANTS) {
            assert!(seen.insert(*name), "duplicate enumerant {}", name);
        }
    }

    #[test]
    fn enumerants_from_json() {
        let arena = BumpArena::new();
        let ctx = Context::new(&arena, ParseOptions::default());
        assert_eq!(CompareOp::from_json(&ctx, &json!("VK_COMPARE_OP_LESS")).unwrap(), CompareOp::LESS);
        assert_eq!(CompareOp::from_json(&ctx, &json!(7)).unwrap(), CompareOp::ALWAYS);
        assert_eq!(CompareOp::from_json(&ctx, &json!("3")).unwrap(), CompareOp::LESS_OR_EQUAL);
        assert_eq!(CompareOp::from_json(&ctx, &json!("VK_COMPARE_OP_SOMETIMES")).unwrap(), CompareOp(0));

        let strict = Context::new(&arena, ParseOptions::strict());
        let err = CompareOp::from_json(&strict, &json!("VK_COMPARE_OP_SOMETIMES")).unwrap_err();
        assert!(matches!(err, VkJsonError::UnknownEnumerant { ty: "VkCompareOp", .. }));
    }

    #[test]
    fn enumerants_serialize_by_name() {
        assert_eq!(serde_json::to_value(PolygonMode::LINE).unwrap(), json!("VK_POLYGON_MODE_LINE"));
        assert_eq!(serde_json::to_value(PolygonMode(1000452000)).unwrap(), json!(1000452000));
    }
}
