// example/src/main.rs

use vksc_json::types::{PipelineCreateInfo, PipelineOfflineCreateInfo, ShaderStageFlags};
use vksc_json::*;

const PIPELINE_JSON: &str = include_str!("../data/compute_pipeline.json");

fn main() -> Result<(), VkJsonError> {
    // Everything parsed below borrows from this arena.
    let arena = BumpArena::new();
    let parser = JsonParser::with_options(&arena, ParseOptions::strict());

    let description: PipelineDescription = parser.parse_pipeline_description(PIPELINE_JSON)?;

    let compute = match description.pipeline {
        PipelineCreateInfo::Compute(info) => info,
        PipelineCreateInfo::Graphics(_) => {
            return Err(VkJsonError::InvalidData {
                path: "$".to_owned(),
                msg:  "expected a compute pipeline".to_owned(),
            })
        }
    };

    println!("entry point  = {}", compute.stage.p_name);
    println!("shader file  = {}", description.shader_file(ShaderStageFlags::COMPUTE).unwrap_or("<none>"));

    if let Some(specialization) = compute.stage.p_specialization_info {
        for entry in specialization.p_map_entries {
            let start = entry.offset as usize;
            let value = start
                .checked_add(entry.size)
                .and_then(|end| specialization.p_data.get(start..end))
                .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
                .map(u32::from_le_bytes);
            println!("constant {}   = {:?}", entry.constant_id, value);
        }
    }

    for layout in description.descriptor_set_layouts {
        println!("layout {:?}:", layout.name);
        for binding in layout.create_info.p_bindings {
            println!("  binding {} = {:?} x{}", binding.binding, binding.descriptor_type, binding.descriptor_count);
        }
    }

    let offline: Option<&PipelineOfflineCreateInfo> = find_in_chain(compute.p_next);
    if let Some(offline) = offline {
        let name: Vec<u8> = offline.pipeline_identifier.iter().copied().take_while(|&b| b != 0).collect();
        println!("identifier   = {}", String::from_utf8_lossy(&name));
        println!("pool entry   = {} bytes", offline.pool_entry_size);
    }

    println!("arena usage  = {} bytes in {} block(s)", arena.allocated_bytes(), arena.block_count());

    // Normalized JSON spells every enum by name and fills omitted members.
    let normalized = to_json_string(&compute.stage)?;
    let value: serde_json::Value = serde_json::from_str(&normalized)?;
    println!("stage.stage  = {}", value["stage"]);

    Ok(())
}
