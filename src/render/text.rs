//! Plain text rendering for comparison results.

use std::fmt::Write;

use serde_json::Value;

use crate::color;
use crate::compare::DiffResult;
use crate::diff::{ChangeKind, DeltaPath, StructuralDelta, ValueChange};

/// Report body for two identical documents.
pub const NO_DIFFERENCES: &str = "No differences found. The documents are identical.";

const COLOR_FIELDS: [&str; 2] = ["font_color", "background_color"];

/// Convert a comparison result to a human-readable report.
///
/// Each section lists its differences as `<kind> <path>: <detail>`.
/// Color values are followed by their nearest CSS color name.
pub fn to_text(result: &DiffResult) -> String {
    if result.is_identical() {
        return NO_DIFFERENCES.to_string();
    }

    let mut output = String::new();
    for (title, delta) in result.sections() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(title.len()));
        output.push('\n');

        if delta.is_empty() {
            output.push_str("  (none)\n");
            continue;
        }
        for (path, kind) in delta.entries() {
            let _ = writeln!(output, "  {}", describe(delta, path, kind));
        }
    }
    output
}

fn describe(delta: &StructuralDelta, path: &DeltaPath, kind: ChangeKind) -> String {
    match kind {
        ChangeKind::ValueChanged => {
            format!("changed {}: {}", path, change(path, &delta.values_changed[path]))
        }
        ChangeKind::TypeChanged => {
            format!("type changed {}: {}", path, change(path, &delta.type_changes[path]))
        }
        ChangeKind::ItemAdded => format!("added {}: {}", path, delta.iterable_item_added[path]),
        ChangeKind::ItemRemoved => {
            format!("removed {}: {}", path, delta.iterable_item_removed[path])
        }
    }
}

fn change(path: &DeltaPath, change: &ValueChange) -> String {
    format!(
        "{} -> {}",
        value(path, &change.old_value),
        value(path, &change.new_value)
    )
}

fn value(path: &DeltaPath, value: &Value) -> String {
    let is_color = path.field().is_some_and(|f| COLOR_FIELDS.contains(&f));
    match value {
        Value::String(hex) if is_color => match color::resolve(hex) {
            Ok(name) => format!("{} ({})", value, name),
            Err(_) => value.to_string(),
        },
        _ => value.to_string(),
    }
}
