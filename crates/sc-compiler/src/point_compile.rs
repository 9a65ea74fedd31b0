use sc_core::Point;

use crate::numeric::render_number;
use crate::text_lines::{command_lines, single_line};

pub const SPELL_NAME_PLACEHOLDER: &str = "<spellName>";
const USER_DATA_ENTRY: &str = "$data modify storage spellcast:user_data \"$(UUID)\"";

/// Spell-wide values every point file may reference.
#[derive(Debug, Clone, Copy)]
pub struct PointContext<'a> {
    pub spell_name: &'a str,
    pub spell_delay: i64,
    pub loaded_spell_id: &'a str,
}

/// Compiles one pattern point. Lines are joined with `\n`; the caller adds the
/// trailing newline.
pub fn compile_point(
    point: &Point,
    index: usize,
    is_first: bool,
    is_last: bool,
    context: &PointContext<'_>,
) -> String {
    let mut lines = Vec::new();

    if is_first {
        let spell_name = single_line(context.spell_name);
        let spell_name = if spell_name.is_empty() {
            SPELL_NAME_PLACEHOLDER
        } else {
            spell_name.as_str()
        };
        lines.push(format!(
            "{}.current_point.spell_name set value {}",
            USER_DATA_ENTRY, spell_name
        ));
    }

    lines.extend(command_lines(&point.commands));

    if is_last {
        push_footer(&mut lines, context);
    } else {
        lines.push(format!(
            "$function spellcasting:spawn_spell_point {{UUID:$(UUID),ox:{},oy:{},oz:{}}}",
            render_number(point.offset.x),
            render_number(point.offset.y),
            render_number(point.offset.z)
        ));
    }

    lines.push(format!(
        "{}.current_point.next_func set value {}",
        USER_DATA_ENTRY,
        index + 1
    ));

    lines.join("\n")
}

// Downstream functions match on this block line by line; keep it verbatim.
fn push_footer(lines: &mut Vec<String>, context: &PointContext<'_>) {
    lines.push("# Set Spell Delay // add option to change on website".to_string());
    lines.push(format!(
        "scoreboard players set @s spell_delay {}",
        context.spell_delay
    ));
    lines.push(String::new());
    lines.push(
        "# Set function to run after delay // add option to change on website // this is what happens after the spell is completed"
            .to_string(),
    );
    lines.push(format!(
        "{}.loaded_spell set value {}",
        USER_DATA_ENTRY, context.loaded_spell_id
    ));
    lines.push(String::new());
    lines.push("# Keep this exact formatting".to_string());
    lines.push("$kill @e[tag=spell_pos,nbt={data:{owner:$(UUID)}}]".to_string());
    lines.push("$kill @e[tag=spell_point,nbt={data:{owner:$(UUID)}}]".to_string());
    lines.push(String::new());
    lines.push("# This is the same".to_string());
}
