//! Render passes, in both the original and the `2` flavor.

use crate::{
    enums::{AttachmentLoadOp, AttachmentStoreOp, Format, ImageLayout, PipelineBindPoint},
    flags::{
        AccessFlags, AttachmentDescriptionFlags, DependencyFlags, ImageAspectFlags, PipelineStageFlags,
        RenderPassCreateFlags, ResolveModeFlags, SampleCountFlags, SubpassDescriptionFlags,
    },
};

vk_struct! {
    /// `VkAttachmentDescription`.
    pub struct AttachmentDescription {
        flags:            AttachmentDescriptionFlags => "flags",
        format:           Format                     => "format",
        samples:          SampleCountFlags           => "samples",
        load_op:          AttachmentLoadOp           => "loadOp",
        store_op:         AttachmentStoreOp          => "storeOp",
        stencil_load_op:  AttachmentLoadOp           => "stencilLoadOp",
        stencil_store_op: AttachmentStoreOp          => "stencilStoreOp",
        initial_layout:   ImageLayout                => "initialLayout",
        final_layout:     ImageLayout                => "finalLayout",
    }
}

vk_struct! {
    /// `VkAttachmentReference`.
    pub struct AttachmentReference {
        attachment: u32         => "attachment",
        layout:     ImageLayout => "layout",
    }
}

vk_struct! {
    /// `VkSubpassDescription`.
    pub struct SubpassDescription<'a> {
        flags:                      SubpassDescriptionFlags         => "flags",
        pipeline_bind_point:        PipelineBindPoint               => "pipelineBindPoint",
        input_attachment_count:     u32                             => "inputAttachmentCount",
        p_input_attachments:        &'a [AttachmentReference]       => "pInputAttachments" | input_attachment_count,
        color_attachment_count:     u32                             => "colorAttachmentCount",
        p_color_attachments:        &'a [AttachmentReference]       => "pColorAttachments" | color_attachment_count,
        p_resolve_attachments:      &'a [AttachmentReference]       => "pResolveAttachments" | color_attachment_count,
        p_depth_stencil_attachment: Option<&'a AttachmentReference> => "pDepthStencilAttachment",
        preserve_attachment_count:  u32                             => "preserveAttachmentCount",
        p_preserve_attachments:     &'a [u32]                       => "pPreserveAttachments" | preserve_attachment_count,
    }
}

vk_struct! {
    /// `VkSubpassDependency`.
    pub struct SubpassDependency {
        src_subpass:      u32                => "srcSubpass",
        dst_subpass:      u32                => "dstSubpass",
        src_stage_mask:   PipelineStageFlags => "srcStageMask",
        dst_stage_mask:   PipelineStageFlags => "dstStageMask",
        src_access_mask:  AccessFlags        => "srcAccessMask",
        dst_access_mask:  AccessFlags        => "dstAccessMask",
        dependency_flags: DependencyFlags    => "dependencyFlags",
    }
}

vk_struct! {
    /// `VkRenderPassCreateInfo`.
    pub struct RenderPassCreateInfo<'a> : RENDER_PASS_CREATE_INFO {
        flags:            RenderPassCreateFlags       => "flags",
        attachment_count: u32                         => "attachmentCount",
        p_attachments:    &'a [AttachmentDescription] => "pAttachments" | attachment_count,
        subpass_count:    u32                         => "subpassCount",
        p_subpasses:      &'a [SubpassDescription<'a>] => "pSubpasses" | subpass_count,
        dependency_count: u32                         => "dependencyCount",
        p_dependencies:   &'a [SubpassDependency]     => "pDependencies" | dependency_count,
    }
}

vk_struct! {
    /// `VkAttachmentDescription2`.
    pub struct AttachmentDescription2<'a> : ATTACHMENT_DESCRIPTION_2 {
        flags:            AttachmentDescriptionFlags => "flags",
        format:           Format                     => "format",
        samples:          SampleCountFlags           => "samples",
        load_op:          AttachmentLoadOp           => "loadOp",
        store_op:         AttachmentStoreOp          => "storeOp",
        stencil_load_op:  AttachmentLoadOp           => "stencilLoadOp",
        stencil_store_op: AttachmentStoreOp          => "stencilStoreOp",
        initial_layout:   ImageLayout                => "initialLayout",
        final_layout:     ImageLayout                => "finalLayout",
    }
}

vk_struct! {
    /// `VkAttachmentReference2`.
    pub struct AttachmentReference2<'a> : ATTACHMENT_REFERENCE_2 {
        attachment:  u32              => "attachment",
        layout:      ImageLayout      => "layout",
        aspect_mask: ImageAspectFlags => "aspectMask",
    }
}

vk_struct! {
    /// `VkSubpassDescription2`.
    pub struct SubpassDescription2<'a> : SUBPASS_DESCRIPTION_2 {
        flags:                      SubpassDescriptionFlags              => "flags",
        pipeline_bind_point:        PipelineBindPoint                    => "pipelineBindPoint",
        view_mask:                  u32                                  => "viewMask",
        input_attachment_count:     u32                                  => "inputAttachmentCount",
        p_input_attachments:        &'a [AttachmentReference2<'a>]       => "pInputAttachments" | input_attachment_count,
        color_attachment_count:     u32                                  => "colorAttachmentCount",
        p_color_attachments:        &'a [AttachmentReference2<'a>]       => "pColorAttachments" | color_attachment_count,
        p_resolve_attachments:      &'a [AttachmentReference2<'a>]       => "pResolveAttachments" | color_attachment_count,
        p_depth_stencil_attachment: Option<&'a AttachmentReference2<'a>> => "pDepthStencilAttachment",
        preserve_attachment_count:  u32                                  => "preserveAttachmentCount",
        p_preserve_attachments:     &'a [u32]                            => "pPreserveAttachments" | preserve_attachment_count,
    }
}

vk_struct! {
    /// `VkSubpassDependency2`.
    pub struct SubpassDependency2<'a> : SUBPASS_DEPENDENCY_2 {
        src_subpass:      u32                => "srcSubpass",
        dst_subpass:      u32                => "dstSubpass",
        src_stage_mask:   PipelineStageFlags => "srcStageMask",
        dst_stage_mask:   PipelineStageFlags => "dstStageMask",
        src_access_mask:  AccessFlags        => "srcAccessMask",
        dst_access_mask:  AccessFlags        => "dstAccessMask",
        dependency_flags: DependencyFlags    => "dependencyFlags",
        view_offset:      i32                => "viewOffset",
    }
}

vk_struct! {
    /// `VkRenderPassCreateInfo2`.
    pub struct RenderPassCreateInfo2<'a> : RENDER_PASS_CREATE_INFO_2 {
        flags:                       RenderPassCreateFlags            => "flags",
        attachment_count:            u32                              => "attachmentCount",
        p_attachments:               &'a [AttachmentDescription2<'a>] => "pAttachments" | attachment_count,
        subpass_count:               u32                              => "subpassCount",
        p_subpasses:                 &'a [SubpassDescription2<'a>]    => "pSubpasses" | subpass_count,
        dependency_count:            u32                              => "dependencyCount",
        p_dependencies:              &'a [SubpassDependency2<'a>]     => "pDependencies" | dependency_count,
        correlated_view_mask_count:  u32                              => "correlatedViewMaskCount",
        p_correlated_view_masks:     &'a [u32]                        => "pCorrelatedViewMasks" | correlated_view_mask_count,
    }
}

vk_struct! {
    /// `VkSubpassDescriptionDepthStencilResolve`, chained to a
    /// `VkSubpassDescription2`.
    pub struct SubpassDescriptionDepthStencilResolve<'a> : SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE {
        depth_resolve_mode:                 ResolveModeFlags                     => "depthResolveMode",
        stencil_resolve_mode:               ResolveModeFlags                     => "stencilResolveMode",
        p_depth_stencil_resolve_attachment: Option<&'a AttachmentReference2<'a>> => "pDepthStencilResolveAttachment",
    }
}

vk_struct! {
    /// `VkAttachmentReferenceStencilLayout`.
    pub struct AttachmentReferenceStencilLayout<'a> : ATTACHMENT_REFERENCE_STENCIL_LAYOUT {
        stencil_layout: ImageLayout => "stencilLayout",
    }
}

vk_struct! {
    /// `VkAttachmentDescriptionStencilLayout`.
    pub struct AttachmentDescriptionStencilLayout<'a> : ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT {
        stencil_initial_layout: ImageLayout => "stencilInitialLayout",
        stencil_final_layout:   ImageLayout => "stencilFinalLayout",
    }
}

vk_struct! {
    /// `VkRenderPassMultiviewCreateInfo`.
    pub struct RenderPassMultiviewCreateInfo<'a> : RENDER_PASS_MULTIVIEW_CREATE_INFO {
        subpass_count:          u32       => "subpassCount",
        p_view_masks:           &'a [u32] => "pViewMasks" | subpass_count,
        dependency_count:       u32       => "dependencyCount",
        p_view_offsets:         &'a [i32] => "pViewOffsets" | dependency_count,
        correlation_mask_count: u32       => "correlationMaskCount",
        p_correlation_masks:    &'a [u32] => "pCorrelationMasks" | correlation_mask_count,
    }
}

vk_struct! {
    /// `VkInputAttachmentAspectReference`.
    pub struct InputAttachmentAspectReference {
        subpass:                u32              => "subpass",
        input_attachment_index: u32              => "inputAttachmentIndex",
        aspect_mask:            ImageAspectFlags => "aspectMask",
    }
}

vk_struct! {
    /// `VkRenderPassInputAttachmentAspectCreateInfo`.
    pub struct RenderPassInputAttachmentAspectCreateInfo<'a> : RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO {
        aspect_reference_count: u32                                  => "aspectReferenceCount",
        p_aspect_references:    &'a [InputAttachmentAspectReference] => "pAspectReferences" | aspect_reference_count,
    }
}
