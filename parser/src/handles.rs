//! Non-dispatchable object handles. In JSON documents these are the 64-bit
//! values the application recorded, or `"VK_NULL_HANDLE"`.

vk_handle! {
    ShaderModule,
    PipelineLayout,
    RenderPass,
    Pipeline,
    PipelineCache,
    Sampler,
    SamplerYcbcrConversion,
    DescriptorSetLayout,
}

#[test]
fn handles_accept_null_spellings() {
    use crate::{context::{Context, ParseOptions}, traits::FromJson};
    use serde_json::json;
    use vksc_json_arena::BumpArena;

    let arena = BumpArena::new();
    let ctx = Context::new(&arena, ParseOptions::default());
    assert!(Sampler::from_json(&ctx, &json!("VK_NULL_HANDLE")).unwrap().is_null());
    assert!(Sampler::from_json(&ctx, &json!("NULL")).unwrap().is_null());
    assert_eq!(RenderPass::from_json(&ctx, &json!("0x2a")).unwrap(), RenderPass(42));
    assert_eq!(format!("{:?}", Pipeline(255)), "Pipeline(0xff)");
}
