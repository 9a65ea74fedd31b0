pub const MANIFEST_PATH: &str = "pack.mcmeta";
pub const SPELLS_ROOT: &str = "data/spellcasting/function/spells";
const FUNCTION_NAMESPACE: &str = "spellcasting";
const FUNCTION_EXTENSION: &str = "mcfunction";
const PACK_FORMAT: u32 = 81;
const MIN_SUPPORTED_FORMAT: u32 = 45;
const PACK_DESCRIPTION: &str = "Spellcasting extension pack";

pub fn point_path(spell_id: &str, index: usize) -> String {
    format!(
        "{}/patterns/{}/{}.{}",
        SPELLS_ROOT, spell_id, index, FUNCTION_EXTENSION
    )
}

pub fn ray_path(spell_id: &str, index: usize) -> String {
    format!(
        "{}/{}/ray_tick_{}.{}",
        SPELLS_ROOT, spell_id, index, FUNCTION_EXTENSION
    )
}

pub fn activation_path(loaded_spell_id: &str) -> String {
    format!(
        "{}/activate/{}.{}",
        SPELLS_ROOT, loaded_spell_id, FUNCTION_EXTENSION
    )
}

/// Function id a ray's step file is invoked by.
pub fn ray_function_ref(spell_id: &str, index: usize) -> String {
    format!("{}:spells/{}/ray_tick_{}", FUNCTION_NAMESPACE, spell_id, index)
}

pub fn manifest_text(author: &str) -> String {
    let author = author.trim();
    let description = if author.is_empty() {
        PACK_DESCRIPTION.to_string()
    } else {
        format!("{} by {}", PACK_DESCRIPTION, author)
    };
    let description = serde_json::Value::String(description).to_string();

    format!(
        "{{\n  \"pack\": {{\n    \"pack_format\": {format},\n    \"description\": {description},\n    \"supported_formats\": {{\n      \"min_inclusive\": {min},\n      \"max_inclusive\": {format}\n    }}\n  }}\n}}\n",
        format = PACK_FORMAT,
        description = description,
        min = MIN_SUPPORTED_FORMAT,
    )
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn paths_follow_the_pack_layout() {
        assert_eq!(
            point_path("incendio", 2),
            "data/spellcasting/function/spells/patterns/incendio/2.mcfunction"
        );
        assert_eq!(
            ray_path("incendio", 0),
            "data/spellcasting/function/spells/incendio/ray_tick_0.mcfunction"
        );
        assert_eq!(
            activation_path("incendio"),
            "data/spellcasting/function/spells/activate/incendio.mcfunction"
        );
        assert_eq!(
            ray_function_ref("incendio", 3),
            "spellcasting:spells/incendio/ray_tick_3"
        );
    }

    #[test]
    fn manifest_without_author_matches_the_fixed_template() {
        assert_eq!(
            manifest_text("  "),
            r#"{
  "pack": {
    "pack_format": 81,
    "description": "Spellcasting extension pack",
    "supported_formats": {
      "min_inclusive": 45,
      "max_inclusive": 81
    }
  }
}
"#
        );
    }

    #[test]
    fn manifest_escapes_the_author() {
        let text = manifest_text("Ada \"the\" Mage");
        assert!(
            text.contains(r#""description": "Spellcasting extension pack by Ada \"the\" Mage","#)
        );
        let parsed = serde_json::from_str::<serde_json::Value>(&text).expect("manifest json");
        assert_eq!(parsed["pack"]["pack_format"], 81);
    }
}
