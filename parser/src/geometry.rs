use crate::enums::ComponentSwizzle;

vk_struct! {
    /// `VkExtent2D`.
    pub struct Extent2D {
        width:  u32 => "width",
        height: u32 => "height",
    }
}

vk_struct! {
    /// `VkExtent3D`.
    pub struct Extent3D {
        width:  u32 => "width",
        height: u32 => "height",
        depth:  u32 => "depth",
    }
}

vk_struct! {
    /// `VkOffset2D`.
    pub struct Offset2D {
        x: i32 => "x",
        y: i32 => "y",
    }
}

vk_struct! {
    /// `VkOffset3D`.
    pub struct Offset3D {
        x: i32 => "x",
        y: i32 => "y",
        z: i32 => "z",
    }
}

vk_struct! {
    /// `VkRect2D`.
    pub struct Rect2D {
        offset: Offset2D => "offset",
        extent: Extent2D => "extent",
    }
}

vk_struct! {
    /// `VkViewport`.
    pub struct Viewport {
        x:         f32 => "x",
        y:         f32 => "y",
        width:     f32 => "width",
        height:    f32 => "height",
        min_depth: f32 => "minDepth",
        max_depth: f32 => "maxDepth",
    }
}

vk_struct! {
    /// `VkComponentMapping`.
    pub struct ComponentMapping {
        r: ComponentSwizzle => "r",
        g: ComponentSwizzle => "g",
        b: ComponentSwizzle => "b",
        a: ComponentSwizzle => "a",
    }
}
