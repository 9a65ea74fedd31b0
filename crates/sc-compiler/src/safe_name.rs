pub const DEFAULT_SPELL_ID: &str = "spell";

/// Identifier-safe form of a display name: lowercase `[a-z0-9_-]`, no runs of
/// `_`, no leading or trailing `_`.
pub fn safe_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            ch
        } else {
            '_'
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        DEFAULT_SPELL_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod safe_name_tests {
    use super::*;

    #[test]
    fn normalizes_display_names() {
        assert_eq!(safe_name("Incendio"), "incendio");
        assert_eq!(safe_name("Wingardium Leviosa!"), "wingardium_leviosa");
        assert_eq!(safe_name("  __Fire--Ball__  "), "fire--ball");
        assert_eq!(safe_name("a  b\t\tc"), "a_b_c");
        assert_eq!(safe_name("Ünïcode"), "n_code");
    }

    #[test]
    fn empty_results_fall_back_to_default() {
        assert_eq!(safe_name(""), DEFAULT_SPELL_ID);
        assert_eq!(safe_name("!!!"), DEFAULT_SPELL_ID);
        assert_eq!(safe_name("___"), DEFAULT_SPELL_ID);
    }

    #[test]
    fn is_stable_under_reapplication() {
        for raw in [
            "Incendio",
            "Wingardium Leviosa!",
            "__x__y__",
            "-_-",
            "ÀÉÎ õ",
            "",
            "spell",
            "9 Lives",
        ] {
            let once = safe_name(raw);
            assert_eq!(safe_name(&once), once, "input {:?}", raw);
        }
    }
}
