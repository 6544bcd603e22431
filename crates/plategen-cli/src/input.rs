use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read the layout text from a file, or stdin for `-`/no path.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Could not read layout {}", p.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Could not read layout from stdin")?;
            Ok(raw)
        }
    }
}

/// Parse either a full KLE JSON document or KLE raw data into a document array.
///
/// Raw data is a comma-separated list of rows without the enclosing brackets, written in JSON5
/// (bare property keys such as `{w:2}`, single-quoted legends, trailing commas). The text is
/// always parsed wrapped in one more array and unwrapped again when it turns out to have been a
/// complete document.
pub fn parse_document(text: &str) -> Result<Value> {
    let wrapped: Value = json5::from_str(&format!("[{}]", text.trim()))
        .context("Layout is neither KLE JSON nor KLE raw data")?;

    match wrapped {
        Value::Array(mut items) if items.len() == 1 && holds_rows(&items[0]) => {
            Ok(items.remove(0))
        }
        other => Ok(other),
    }
}

fn holds_rows(v: &Value) -> bool {
    matches!(v, Value::Array(items) if items.iter().any(Value::is_array))
}
