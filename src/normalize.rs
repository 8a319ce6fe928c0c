//! Input Normalizer
//!
//! Turns the raw JSON typed by the user into a ShoppingList. Every
//! array-valued key becomes a category of unchecked items; anything else
//! under a key is dropped without complaint.

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ShoppingList};

/// Parse raw user input such as `{"Frutta": ["Mela", "Banana"]}`
pub fn parse_raw_input(raw: &str) -> AppResult<ShoppingList> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| AppError::InputParse(e.to_string()))?;
    Ok(normalize_value(&value))
}

/// Build a list from an already parsed value
pub fn normalize_value(value: &Value) -> ShoppingList {
    let mut list = ShoppingList::new();
    let Value::Object(map) = value else {
        return list;
    };

    for (label, entries) in map {
        let Value::Array(entries) = entries else {
            log::debug!("[NORMALIZE] Dropping non-array category {:?}", label);
            continue;
        };
        let items = entries.iter().map(|e| Item::new(coerce_name(e))).collect();
        list.insert(label.as_str(), items);
    }
    list
}

/// Display string for an arbitrary JSON value
///
/// Matches browser string conversion: numbers switch to exponent form
/// outside [1e-6, 1e21), arrays join their elements with `,` (nulls become
/// empty), objects become `[object Object]`.
pub fn coerce_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            n.as_f64().map_or_else(|| n.to_string(), format_number)
        }
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => coerce_name(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Number text: exponent form below 1e-6 and from 1e21 up, plain otherwise
fn format_number(f: f64) -> String {
    let abs = f.abs();
    if f == 0.0 {
        return "0".to_string();
    }
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", f);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Loose truthiness used when reading flags from untrusted JSON
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
