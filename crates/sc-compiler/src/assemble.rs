use std::collections::BTreeMap;

use sc_core::{SpellDocument, SpellcastError};
use tracing::{debug, info};

use crate::layout::{
    activation_path, manifest_text, point_path, ray_function_ref, ray_path, MANIFEST_PATH,
};
use crate::macro_scan::{contains_macro, macro_line, ray_macro_fields};
use crate::point_compile::{compile_point, PointContext};
use crate::ray_compile::{compile_ray, RAY_STEPS_OBJECTIVE};
use crate::safe_name::safe_name;
use crate::text_lines::command_lines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellPackage {
    pub spell_id: String,
    pub loaded_spell_id: String,
    /// Package-relative path to file text.
    pub files: BTreeMap<String, String>,
}

struct SpellIds {
    spell_id: String,
    loaded_spell_id: String,
}

fn resolve_ids(document: &SpellDocument) -> SpellIds {
    let spell_id = safe_name(&document.name);
    let loaded_spell_id = if document.loaded_spell.trim().is_empty() {
        spell_id.clone()
    } else {
        safe_name(&document.loaded_spell)
    };
    SpellIds {
        spell_id,
        loaded_spell_id,
    }
}

pub fn assemble(document: &SpellDocument) -> Result<SpellPackage, SpellcastError> {
    let name = document.name.trim();
    if name.is_empty() {
        return Err(SpellcastError::MissingSpellName);
    }

    let SpellIds {
        spell_id,
        loaded_spell_id,
    } = resolve_ids(document);
    let context = PointContext {
        spell_name: name,
        spell_delay: document.spell_delay,
        loaded_spell_id: &loaded_spell_id,
    };

    let mut files = BTreeMap::new();
    files.insert(MANIFEST_PATH.to_string(), manifest_text(&document.author));

    let last = document.points.len().saturating_sub(1);
    for (index, point) in document.points.iter().enumerate() {
        let text = compile_point(point, index, index == 0, index == last, &context);
        files.insert(point_path(&spell_id, index), with_trailing_newline(text));
    }
    debug!(spell_id = %spell_id, points = document.points.len(), "compiled pattern points");

    for (index, ray) in document.enabled_rays() {
        files.insert(
            ray_path(&spell_id, index),
            with_trailing_newline(compile_ray(ray, index, &spell_id)),
        );
        debug!(spell_id = %spell_id, ray = index, "compiled ray");
    }

    files.insert(
        activation_path(&loaded_spell_id),
        with_trailing_newline(activation_text(document, &spell_id)),
    );

    info!(
        spell_id = %spell_id,
        loaded_spell_id = %loaded_spell_id,
        files = files.len(),
        "assembled spell package"
    );

    Ok(SpellPackage {
        spell_id,
        loaded_spell_id,
        files,
    })
}

/// Text of a single point as the editor preview shows it. Unlike [`assemble`]
/// this does not require a spell name.
pub fn compile_point_preview(
    document: &SpellDocument,
    index: usize,
) -> Result<String, SpellcastError> {
    let point = document
        .points
        .get(index)
        .ok_or(SpellcastError::PointIndexOutOfRange {
            index,
            len: document.points.len(),
        })?;
    let ids = resolve_ids(document);
    let context = PointContext {
        spell_name: document.name.trim(),
        spell_delay: document.spell_delay,
        loaded_spell_id: &ids.loaded_spell_id,
    };
    let is_last = index + 1 == document.points.len();
    Ok(compile_point(point, index, index == 0, is_last, &context))
}

fn activation_text(document: &SpellDocument, spell_id: &str) -> String {
    let mut lines = command_lines(&document.finish_commands)
        .into_iter()
        .map(macro_line)
        .collect::<Vec<_>>();

    for (index, ray) in document.enabled_rays() {
        lines.push(format!(
            "scoreboard players set @s {} {}",
            RAY_STEPS_OBJECTIVE,
            ray.effective_max_steps()
        ));
        let function = ray_function_ref(spell_id, index);
        if ray_macro_fields(ray).iter().any(|field| contains_macro(field)) {
            lines.push(format!("function {} with entity @s", function));
        } else {
            lines.push(format!("function {}", function));
        }
    }

    lines.join("\n")
}

fn with_trailing_newline(mut text: String) -> String {
    while text.ends_with('\n') {
        text.pop();
    }
    text.push('\n');
    text
}
