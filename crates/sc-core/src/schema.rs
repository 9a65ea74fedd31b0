//! Persisted document schema.
//!
//! Import accepts the current schema and the older editor storage layout
//! (`spellName` / `settings` / `afterFunction`) and always produces a
//! normalized [`SpellDocument`]. Field decoding is lenient: malformed numbers
//! fall back to their defaults instead of failing the import.

use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::SpellcastError;
use crate::types::{
    Check, Particle, Point, Ray, SpellDocument, Vector3, DEFAULT_RAY_MAX_STEPS, DEFAULT_RAY_STEP,
    DEFAULT_SPELL_DELAY,
};

pub const CURRENT_SCHEMA_VERSION: u64 = 3;
pub const LEGACY_DEFAULT_LOADED_SPELL: &str = "incendio";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionedDocument<'a> {
    schema_version: u64,
    #[serde(flatten)]
    document: &'a SpellDocument,
}

pub fn export_document_json(document: &SpellDocument) -> Result<String, SpellcastError> {
    let json = serde_json::to_string_pretty(&VersionedDocument {
        schema_version: CURRENT_SCHEMA_VERSION,
        document,
    })?;
    Ok(json)
}

pub fn import_document_json(source: &str) -> Result<SpellDocument, SpellcastError> {
    let value = serde_json::from_str::<JsonValue>(source)
        .map_err(|error| SpellcastError::invalid_import(format!("not valid JSON: {}", error)))?;
    import_document_value(&value)
}

pub fn import_document_value(value: &JsonValue) -> Result<SpellDocument, SpellcastError> {
    let object = value
        .as_object()
        .ok_or_else(|| SpellcastError::invalid_import("top level must be an object"))?;

    match object.get("schemaVersion") {
        None if is_legacy_layout(object) => migrate_legacy(object),
        None => decode_current(object),
        Some(version) if is_current_version(version) => decode_current(object),
        Some(version) => Err(SpellcastError::invalid_import(format!(
            "unsupported schemaVersion {}",
            version
        ))),
    }
}

// Some writers emit integral numbers as floats, so `3.0` counts as `3`.
fn is_current_version(version: &JsonValue) -> bool {
    version.as_f64() == Some(CURRENT_SCHEMA_VERSION as f64)
}

fn is_legacy_layout(object: &JsonMap<String, JsonValue>) -> bool {
    ["spellName", "settings", "afterFunction"]
        .iter()
        .any(|key| object.contains_key(*key))
}

fn decode_current(object: &JsonMap<String, JsonValue>) -> Result<SpellDocument, SpellcastError> {
    let mut document = SpellDocument {
        name: string_field(object, "name"),
        author: string_field(object, "author"),
        spell_delay: int_field(object, "spellDelay").unwrap_or(DEFAULT_SPELL_DELAY),
        loaded_spell: string_field(object, "loadedSpell"),
        finish_commands: string_list(object.get("finishCommands")),
        points: decode_points(object.get("points"))?,
        rays: array_items(object.get("rays"))
            .iter()
            .filter_map(JsonValue::as_object)
            .map(decode_ray)
            .collect(),
        selected_index: index_field(object, "selectedIndex"),
    };
    document.normalize();
    Ok(document)
}

fn migrate_legacy(object: &JsonMap<String, JsonValue>) -> Result<SpellDocument, SpellcastError> {
    let settings = object.get("settings").and_then(JsonValue::as_object);
    // The old editor treated a zero delay as unset.
    let spell_delay = settings
        .and_then(|settings| int_field(settings, "delay"))
        .filter(|delay| *delay != 0)
        .unwrap_or(DEFAULT_SPELL_DELAY);
    let loaded_spell = settings
        .map(|settings| string_field(settings, "loadedSpell"))
        .filter(|loaded| !loaded.is_empty())
        .unwrap_or_else(|| LEGACY_DEFAULT_LOADED_SPELL.to_string());
    let finish_commands = string_field(object, "afterFunction")
        .lines()
        .map(str::to_string)
        .collect();

    let mut document = SpellDocument {
        name: string_field(object, "spellName"),
        author: String::new(),
        spell_delay,
        loaded_spell,
        finish_commands,
        points: decode_points(object.get("points"))?,
        rays: Vec::new(),
        selected_index: index_field(object, "selected"),
    };
    document.normalize();
    Ok(document)
}

fn decode_points(value: Option<&JsonValue>) -> Result<Vec<Point>, SpellcastError> {
    let Some(value) = value else {
        return Ok(vec![Point::default()]);
    };
    let items = value
        .as_array()
        .ok_or_else(|| SpellcastError::invalid_import("points must be an array"))?;
    Ok(items
        .iter()
        .map(|item| match item.as_object() {
            Some(point) => decode_point(point),
            None => Point::default(),
        })
        .collect())
}

fn decode_point(object: &JsonMap<String, JsonValue>) -> Point {
    let offset = object
        .get("offset")
        .and_then(JsonValue::as_object)
        .map(|offset| {
            Vector3::new(
                number_field(offset, "x").unwrap_or(0.0),
                number_field(offset, "y").unwrap_or(0.0),
                number_field(offset, "z").unwrap_or(0.0),
            )
        })
        .unwrap_or_default();
    Point {
        commands: string_list(object.get("commands")),
        offset,
    }
}

fn decode_ray(object: &JsonMap<String, JsonValue>) -> Ray {
    let step = number_field(object, "step")
        .filter(|step| *step > 0.0)
        .unwrap_or(DEFAULT_RAY_STEP);
    let max_steps = match object.get("maxSteps") {
        None => DEFAULT_RAY_MAX_STEPS,
        Some(value) => clamp_u32(lenient_number(value).unwrap_or(0.0)).max(1),
    };
    Ray {
        name: string_field(object, "name"),
        enabled: object
            .get("enabled")
            .and_then(JsonValue::as_bool)
            .unwrap_or(true),
        step,
        max_steps,
        particles: array_items(object.get("particles"))
            .iter()
            .filter_map(JsonValue::as_object)
            .map(decode_particle)
            .collect(),
        block_checks: decode_checks(object.get("blockChecks")),
        entity_checks: decode_checks(object.get("entityChecks")),
    }
}

fn decode_particle(object: &JsonMap<String, JsonValue>) -> Particle {
    Particle {
        name: string_field(object, "name"),
        dx: number_field(object, "dx").unwrap_or(0.0),
        dy: number_field(object, "dy").unwrap_or(0.0),
        dz: number_field(object, "dz").unwrap_or(0.0),
        speed: number_field(object, "speed").unwrap_or(0.0),
        count: clamp_u32(number_field(object, "count").unwrap_or(0.0)),
    }
}

fn decode_checks(value: Option<&JsonValue>) -> Vec<Check> {
    array_items(value)
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|object| Check {
            subject: string_field(object, "subject"),
            command: string_field(object, "command"),
            pass_through: bool_field(object, "passThrough"),
            invert: bool_field(object, "invert"),
        })
        .collect()
}

fn array_items(value: Option<&JsonValue>) -> &[JsonValue] {
    value
        .and_then(JsonValue::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_list(value: Option<&JsonValue>) -> Vec<String> {
    array_items(value).iter().map(stringify).collect()
}

fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_field(object: &JsonMap<String, JsonValue>, key: &str) -> String {
    object.get(key).map(stringify).unwrap_or_default()
}

fn bool_field(object: &JsonMap<String, JsonValue>, key: &str) -> bool {
    object
        .get(key)
        .and_then(JsonValue::as_bool)
        .unwrap_or(false)
}

fn number_field(object: &JsonMap<String, JsonValue>, key: &str) -> Option<f64> {
    object.get(key).and_then(lenient_number)
}

fn int_field(object: &JsonMap<String, JsonValue>, key: &str) -> Option<i64> {
    number_field(object, key).map(|value| value.trunc() as i64)
}

fn index_field(object: &JsonMap<String, JsonValue>, key: &str) -> usize {
    number_field(object, key)
        .filter(|value| *value > 0.0)
        .map(|value| value.trunc() as usize)
        .unwrap_or(0)
}

fn lenient_number(value: &JsonValue) -> Option<f64> {
    let number = match value {
        JsonValue::Number(number) => number.as_f64(),
        JsonValue::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn clamp_u32(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        value.floor().min(u32::MAX as f64) as u32
    }
}
