/// Collapses a free-text field onto one line: line breaks and other control
/// characters become spaces, and the result is trimmed.
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits command entries on embedded line breaks, trims each piece and drops
/// blank ones.
pub fn command_lines<'a>(commands: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    commands
        .into_iter()
        .flat_map(|command| command.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
