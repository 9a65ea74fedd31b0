use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use sc_core::Ray;

const MACRO_LINE_MARKER: char = '$';

fn macro_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\$\(([A-Za-z0-9_]+)\)").expect("macro token regex"))
}

pub fn contains_macro(text: &str) -> bool {
    macro_token_regex().is_match(text)
}

/// Macro names in first-occurrence order, deduplicated.
pub fn scan(text: &str) -> Vec<String> {
    scan_fields([text])
}

/// Scans each field separately, in the order given, so a token never spans
/// two fields.
pub fn scan_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::new();
    for field in fields {
        for captures in macro_token_regex().captures_iter(field) {
            let name = &captures[1];
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// The fields of a ray that may carry macros: particle names, then each
/// block check's subject and command, then each entity check's.
pub fn ray_macro_fields(ray: &Ray) -> Vec<&str> {
    let mut fields = Vec::new();
    for particle in &ray.particles {
        fields.push(particle.name.as_str());
    }
    for check in ray.checks() {
        fields.push(check.subject.as_str());
        fields.push(check.command.as_str());
    }
    fields
}

/// Prefixes a line carrying a macro token with the macro marker, unless the
/// author already wrote it.
pub fn macro_line(line: String) -> String {
    if contains_macro(&line) && !line.starts_with(MACRO_LINE_MARKER) {
        format!("{}{}", MACRO_LINE_MARKER, line)
    } else {
        line
    }
}

#[cfg(test)]
mod macro_scan_tests {
    use super::*;
    use sc_core::{Check, Particle};

    #[test]
    fn scan_returns_names_in_first_seen_order() {
        assert_eq!(
            scan("say $(b) $(a) $(b) $(c_1)"),
            vec!["b".to_string(), "a".to_string(), "c_1".to_string()]
        );
        assert!(scan("say $(not closed").is_empty());
        assert!(scan("say $() $ (x)").is_empty());
    }

    #[test]
    fn contains_macro_matches_only_full_tokens() {
        assert!(contains_macro("@e[tag=$(UUID)]"));
        assert!(!contains_macro("$say hi"));
        assert!(!contains_macro("cost $5 (cheap)"));
    }

    #[test]
    fn tokens_do_not_form_across_fields() {
        assert!(scan_fields(["say $(", "x)"]).is_empty());
        assert_eq!(scan_fields(["$(x)", "$(y) $(x)"]), vec!["x", "y"]);
    }

    #[test]
    fn ray_fields_follow_particles_then_block_then_entity_checks() {
        let ray = Ray {
            particles: vec![Particle {
                name: "dust$(color)".to_string(),
                ..Particle::default()
            }],
            block_checks: vec![Check {
                subject: "block ^ ^ ^ $(block)".to_string(),
                command: "say $(msg)".to_string(),
                ..Check::default()
            }],
            entity_checks: vec![Check {
                subject: "entity @e[tag=$(UUID)]".to_string(),
                command: "say $(msg)".to_string(),
                ..Check::default()
            }],
            ..Ray::default()
        };
        assert_eq!(
            scan_fields(ray_macro_fields(&ray)),
            vec!["color", "block", "msg", "UUID"]
        );
    }

    #[test]
    fn macro_line_prefixes_once() {
        assert_eq!(macro_line("say $(x)".to_string()), "$say $(x)");
        assert_eq!(macro_line("$say $(x)".to_string()), "$say $(x)");
        assert_eq!(macro_line("say x".to_string()), "say x");
    }
}
