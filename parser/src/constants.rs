//! Vulkan API constants that may appear by name where an integer is expected.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const VK_MAX_PHYSICAL_DEVICE_NAME_SIZE: u32 = 256;
pub const VK_UUID_SIZE: usize = 16;
pub const VK_LUID_SIZE: u32 = 8;
pub const VK_MAX_EXTENSION_NAME_SIZE: u32 = 256;
pub const VK_MAX_DESCRIPTION_SIZE: u32 = 256;
pub const VK_MAX_MEMORY_TYPES: u32 = 32;
pub const VK_MAX_MEMORY_HEAPS: u32 = 16;
pub const VK_REMAINING_MIP_LEVELS: u32 = !0;
pub const VK_REMAINING_ARRAY_LAYERS: u32 = !0;
pub const VK_WHOLE_SIZE: u64 = !0;
pub const VK_ATTACHMENT_UNUSED: u32 = !0;
pub const VK_TRUE: u32 = 1;
pub const VK_FALSE: u32 = 0;
pub const VK_QUEUE_FAMILY_IGNORED: u32 = !0;
pub const VK_QUEUE_FAMILY_EXTERNAL: u32 = !1;
pub const VK_QUEUE_FAMILY_FOREIGN_EXT: u32 = !2;
pub const VK_SUBPASS_EXTERNAL: u32 = !0;
pub const VK_MAX_DEVICE_GROUP_SIZE: u32 = 32;
pub const VK_MAX_DRIVER_NAME_SIZE: u32 = 256;
pub const VK_MAX_DRIVER_INFO_SIZE: u32 = 256;
pub const VK_SHADER_UNUSED_KHR: u32 = !0;
pub const VK_MAX_GLOBAL_PRIORITY_SIZE_EXT: u32 = 16;

lazy_static! {
    static ref API_CONSTANTS: HashMap<&'static str, u64> = {
        let mut map = HashMap::new();
        map.insert("VK_MAX_PHYSICAL_DEVICE_NAME_SIZE", u64::from(VK_MAX_PHYSICAL_DEVICE_NAME_SIZE));
        map.insert("VK_UUID_SIZE",                     VK_UUID_SIZE as u64);
        map.insert("VK_LUID_SIZE",                     u64::from(VK_LUID_SIZE));
        map.insert("VK_MAX_EXTENSION_NAME_SIZE",       u64::from(VK_MAX_EXTENSION_NAME_SIZE));
        map.insert("VK_MAX_DESCRIPTION_SIZE",          u64::from(VK_MAX_DESCRIPTION_SIZE));
        map.insert("VK_MAX_MEMORY_TYPES",              u64::from(VK_MAX_MEMORY_TYPES));
        map.insert("VK_MAX_MEMORY_HEAPS",              u64::from(VK_MAX_MEMORY_HEAPS));
        map.insert("VK_REMAINING_MIP_LEVELS",          u64::from(VK_REMAINING_MIP_LEVELS));
        map.insert("VK_REMAINING_ARRAY_LAYERS",        u64::from(VK_REMAINING_ARRAY_LAYERS));
        map.insert("VK_WHOLE_SIZE",                    VK_WHOLE_SIZE);
        map.insert("VK_ATTACHMENT_UNUSED",             u64::from(VK_ATTACHMENT_UNUSED));
        map.insert("VK_TRUE",                          u64::from(VK_TRUE));
        map.insert("VK_FALSE",                         u64::from(VK_FALSE));
        map.insert("VK_QUEUE_FAMILY_IGNORED",          u64::from(VK_QUEUE_FAMILY_IGNORED));
        map.insert("VK_QUEUE_FAMILY_EXTERNAL",         u64::from(VK_QUEUE_FAMILY_EXTERNAL));
        map.insert("VK_QUEUE_FAMILY_FOREIGN_EXT",      u64::from(VK_QUEUE_FAMILY_FOREIGN_EXT));
        map.insert("VK_SUBPASS_EXTERNAL",              u64::from(VK_SUBPASS_EXTERNAL));
        map.insert("VK_MAX_DEVICE_GROUP_SIZE",         u64::from(VK_MAX_DEVICE_GROUP_SIZE));
        map.insert("VK_MAX_DRIVER_NAME_SIZE",          u64::from(VK_MAX_DRIVER_NAME_SIZE));
        map.insert("VK_MAX_DRIVER_INFO_SIZE",          u64::from(VK_MAX_DRIVER_INFO_SIZE));
        map.insert("VK_SHADER_UNUSED_KHR",             u64::from(VK_SHADER_UNUSED_KHR));
        map.insert("VK_MAX_GLOBAL_PRIORITY_SIZE_EXT",  u64::from(VK_MAX_GLOBAL_PRIORITY_SIZE_EXT));
        map.insert("VK_NULL_HANDLE",                   0);
        map
    };
}

/// Looks up a named API constant.
pub fn api_constant(name: &str) -> Option<u64> {
    API_CONSTANTS.get(name).copied()
}
