//! Shared rendering helpers for command output

use graphq_core::graph::{Path, PathElement};

/// Render a path as `a -[ab]- b -[bc]- c`
pub fn format_path(path: &Path) -> String {
    path.elements()
        .iter()
        .map(|element| match element {
            PathElement::Node(id) => id.clone(),
            PathElement::Edge(id) => format!("-[{}]-", id),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human rendering of a distance; infinite means unreachable
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        format!("{}", distance)
    } else {
        "unreachable".to_string()
    }
}

/// JSON rendering of a distance: `null` when unreachable
pub fn distance_json(distance: f64) -> serde_json::Value {
    if distance.is_finite() {
        serde_json::json!(distance)
    } else {
        serde_json::Value::Null
    }
}

/// Print a JSON document to stdout
pub fn print_json(value: &serde_json::Value) -> graphq_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
