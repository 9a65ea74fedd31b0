//! Step function of one ray.
//!
//! Each invocation of the generated file is one step: it refuses to run once
//! the caster's `spell_ray_steps` score is exhausted, decrements it, emits
//! particles, evaluates checks at the current position, and finally calls
//! itself again `step` blocks further along the caster's facing. An abort
//! check that fires returns before the recursive call.

use sc_core::{Check, Particle, Ray};

use crate::layout::ray_function_ref;
use crate::macro_scan::{contains_macro, macro_line, ray_macro_fields, scan_fields};
use crate::numeric::render_number;
use crate::text_lines::single_line;

pub const RAY_STEPS_OBJECTIVE: &str = "spell_ray_steps";

pub fn compile_ray(ray: &Ray, index: usize, spell_id: &str) -> String {
    let mut lines = Vec::new();

    let name = single_line(&ray.name);
    if name.is_empty() {
        lines.push(format!("# Ray {}", index));
    } else {
        lines.push(format!("# Ray: {}", name));
    }

    lines.push(format!(
        "execute if score @s {} matches ..0 run return fail",
        RAY_STEPS_OBJECTIVE
    ));
    lines.push(format!(
        "scoreboard players remove @s {} 1",
        RAY_STEPS_OBJECTIVE
    ));

    lines.extend(ray.particles.iter().filter_map(particle_line));
    lines.extend(ray.checks().filter_map(check_line));
    lines.push(step_line(ray, index, spell_id));

    lines.join("\n")
}

fn particle_line(particle: &Particle) -> Option<String> {
    let name = single_line(&particle.name);
    if name.is_empty() {
        return None;
    }
    Some(macro_line(format!(
        "particle {} ^ ^ ^ {} {} {} {} {}",
        name,
        render_number(particle.dx),
        render_number(particle.dy),
        render_number(particle.dz),
        render_number(particle.speed),
        particle.count
    )))
}

/// Guarded command for one check, or `None` when the subject or the command
/// is blank.
pub fn check_line(check: &Check) -> Option<String> {
    let subject = single_line(&check.subject);
    let command = single_line(&check.command);
    if subject.is_empty() || command.is_empty() {
        return None;
    }

    let polarity = if check.invert { "unless" } else { "if" };
    let line = if check.pass_through {
        format!("execute {} {} run {}", polarity, subject, command)
    } else {
        format!("execute {} {} run return {}", polarity, subject, command)
    };
    Some(macro_line(line))
}

fn step_line(ray: &Ray, index: usize, spell_id: &str) -> String {
    let line = format!(
        "execute positioned ^ ^ ^{} run function {}",
        render_number(ray.effective_step()),
        ray_function_ref(spell_id, index)
    );

    let fields = ray_macro_fields(ray);
    if !fields.iter().any(|field| contains_macro(field)) {
        return line;
    }

    let arguments = scan_fields(fields)
        .iter()
        .map(|name| format!("{}:$({})", name, name))
        .collect::<Vec<_>>()
        .join(",");
    format!("${} {{{}}}", line, arguments)
}
