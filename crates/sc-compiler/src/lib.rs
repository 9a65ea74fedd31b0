mod assemble;
mod layout;
mod macro_scan;
mod numeric;
mod point_compile;
mod ray_compile;
mod safe_name;
mod text_lines;

pub use assemble::{assemble, compile_point_preview, SpellPackage};
pub use layout::{
    activation_path, manifest_text, point_path, ray_function_ref, ray_path, MANIFEST_PATH,
    SPELLS_ROOT,
};
pub use macro_scan::{contains_macro, macro_line, ray_macro_fields, scan, scan_fields};
pub use numeric::render_number;
pub use point_compile::{compile_point, PointContext, SPELL_NAME_PLACEHOLDER};
pub use ray_compile::{check_line, compile_ray, RAY_STEPS_OBJECTIVE};
pub use safe_name::{safe_name, DEFAULT_SPELL_ID};
pub use text_lines::{command_lines, single_line};
