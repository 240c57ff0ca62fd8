use crate::domain::{ParamValue, ScalarEntry};
use std::fs;
use std::path::Path;

pub fn format_deck_line(label: &str, value: &ParamValue) -> String {
    format!("{} = {}\n", label, value)
}

/// Renders scalar lines in insertion order, then the optional sweep line.
pub fn render_deck_text(scalars: &[ScalarEntry], sweep_line: Option<(&str, &ParamValue)>) -> String {
    let mut content = String::new();
    for entry in scalars {
        content.push_str(&format_deck_line(&entry.label, &entry.value));
    }
    if let Some((label, value)) = sweep_line {
        content.push_str(&format_deck_line(label, value));
    }
    content
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}
