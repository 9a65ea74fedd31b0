use serde::{Deserialize, Serialize};

pub const DEFAULT_SPELL_DELAY: i64 = 50;
pub const DEFAULT_RAY_STEP: f64 = 0.5;
pub const DEFAULT_RAY_MAX_STEPS: u32 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub commands: Vec<String>,
    pub offset: Vector3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub name: String,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub speed: f64,
    pub count: u32,
}

/// Guarded command evaluated at every ray step. Shared by block and entity
/// checks; `subject` is a block pattern or an entity selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub subject: String,
    pub command: String,
    pub pass_through: bool,
    pub invert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ray {
    pub name: String,
    pub enabled: bool,
    pub step: f64,
    pub max_steps: u32,
    pub particles: Vec<Particle>,
    pub block_checks: Vec<Check>,
    pub entity_checks: Vec<Check>,
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            step: DEFAULT_RAY_STEP,
            max_steps: DEFAULT_RAY_MAX_STEPS,
            particles: Vec::new(),
            block_checks: Vec::new(),
            entity_checks: Vec::new(),
        }
    }
}

impl Ray {
    /// Step distance actually emitted; non-positive or non-finite steps fall
    /// back to the default.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            DEFAULT_RAY_STEP
        }
    }

    pub fn effective_max_steps(&self) -> u32 {
        self.max_steps.max(1)
    }

    /// Block checks first, then entity checks.
    pub fn checks(&self) -> impl Iterator<Item = &Check> {
        self.block_checks.iter().chain(self.entity_checks.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellDocument {
    pub name: String,
    pub author: String,
    pub spell_delay: i64,
    pub loaded_spell: String,
    pub finish_commands: Vec<String>,
    pub points: Vec<Point>,
    pub rays: Vec<Ray>,
    pub selected_index: usize,
}

impl Default for SpellDocument {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            spell_delay: DEFAULT_SPELL_DELAY,
            loaded_spell: String::new(),
            finish_commands: Vec::new(),
            points: vec![Point::default()],
            rays: Vec::new(),
            selected_index: 0,
        }
    }
}

impl SpellDocument {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn enabled_rays(&self) -> impl Iterator<Item = (usize, &Ray)> {
        self.rays.iter().enumerate().filter(|(_, ray)| ray.enabled)
    }
}

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn default_document_holds_one_empty_point() {
        let document = SpellDocument::default();
        assert_eq!(document.points, vec![Point::default()]);
        assert_eq!(document.selected_index, 0);
        assert_eq!(document.spell_delay, DEFAULT_SPELL_DELAY);
        assert!(document.rays.is_empty());
    }

    #[test]
    fn ray_effective_values_respect_minimums() {
        let ray = Ray {
            step: 0.0,
            max_steps: 0,
            ..Ray::default()
        };
        assert_eq!(ray.effective_step(), DEFAULT_RAY_STEP);
        assert_eq!(ray.effective_max_steps(), 1);

        let ray = Ray {
            step: f64::NAN,
            ..Ray::default()
        };
        assert_eq!(ray.effective_step(), DEFAULT_RAY_STEP);

        let ray = Ray {
            step: 1.25,
            max_steps: 8,
            ..Ray::default()
        };
        assert_eq!(ray.effective_step(), 1.25);
        assert_eq!(ray.effective_max_steps(), 8);
    }

    #[test]
    fn enabled_rays_keep_document_indices() {
        let mut document = SpellDocument::named("Lumos");
        document.rays = vec![
            Ray {
                name: "a".to_string(),
                ..Ray::default()
            },
            Ray {
                name: "b".to_string(),
                enabled: false,
                ..Ray::default()
            },
            Ray {
                name: "c".to_string(),
                ..Ray::default()
            },
        ];
        let indices = document
            .enabled_rays()
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn checks_iterate_block_before_entity() {
        let ray = Ray {
            block_checks: vec![Check {
                subject: "block".to_string(),
                ..Check::default()
            }],
            entity_checks: vec![Check {
                subject: "entity".to_string(),
                ..Check::default()
            }],
            ..Ray::default()
        };
        let subjects = ray
            .checks()
            .map(|check| check.subject.as_str())
            .collect::<Vec<_>>();
        assert_eq!(subjects, vec!["block", "entity"]);
    }
}
