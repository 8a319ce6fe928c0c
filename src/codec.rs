//! Persisted-State Codec
//!
//! A list is stored in the URL as `#data=<payload>`, where the payload is
//! the list's JSON, percent-encoded like `encodeURIComponent`, then base64
//! encoded with the standard alphabet. Everything in it is legal inside a
//! URL fragment.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::config::FRAGMENT_PREFIX;
use crate::error::{AppError, AppResult};
use crate::models::{Item, ShoppingList};
use crate::normalize::{coerce_name, is_truthy};

/// Characters `encodeURIComponent` escapes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet, padded on encode, padding optional on decode
const FRAGMENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a list into a fragment payload, `None` when there is nothing to store
pub fn encode_list(list: &ShoppingList) -> Option<String> {
    if list.is_empty() {
        return None;
    }
    let json = match serde_json::to_string(list) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[CODEC] Failed to serialize list: {}", e);
            return None;
        }
    };
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    Some(FRAGMENT_BASE64.encode(escaped))
}

/// Full hash to assign to `location.hash`; empty string clears it
pub fn fragment_for(list: &ShoppingList) -> String {
    encode_list(list)
        .map(|payload| format!("{}{}", FRAGMENT_PREFIX, payload))
        .unwrap_or_default()
}

/// Decode `location.hash`
///
/// `Ok(None)` means no list is stored. A stored but unreadable list is a
/// `PersistedState` error.
pub fn decode_fragment(hash: &str) -> AppResult<Option<ShoppingList>> {
    match hash.strip_prefix(FRAGMENT_PREFIX) {
        Some(payload) => decode_payload(payload).map(Some),
        None => Ok(None),
    }
}

/// Decode the part after `#data=`
pub fn decode_payload(payload: &str) -> AppResult<ShoppingList> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = FRAGMENT_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| corrupt(format!("invalid base64: {}", e)))?;
    let escaped = String::from_utf8(bytes).map_err(|_| corrupt("payload is not text"))?;
    let json = percent_decode_strict(&escaped)?;
    let value: Value =
        serde_json::from_str(&json).map_err(|e| corrupt(format!("invalid JSON: {}", e)))?;
    list_from_value(&value)
}

/// Rebuild a list from decoded JSON, accepting bare-string items
fn list_from_value(value: &Value) -> AppResult<ShoppingList> {
    let map = match value {
        Value::Object(map) if !map.is_empty() => map,
        Value::Object(_) => return Err(corrupt("empty object")),
        _ => return Err(corrupt("not an object")),
    };

    let mut list = ShoppingList::new();
    for (label, entries) in map {
        match entries {
            Value::Array(entries) => {
                list.insert(label.as_str(), entries.iter().map(decode_item).collect());
            }
            _ => log::debug!("[CODEC] Dropping non-array category {:?}", label),
        }
    }

    if list.is_empty() {
        return Err(corrupt("no categories"));
    }
    Ok(list)
}

fn decode_item(entry: &Value) -> Item {
    let name = match entry.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(name) if is_truthy(name) => coerce_name(name),
        _ => coerce_name(entry),
    };
    let checked = entry.get("checked").map_or(false, is_truthy);
    Item { name, checked }
}

/// Percent-decode, rejecting malformed escapes and non-UTF-8 results
fn percent_decode_strict(input: &str) -> AppResult<String> {
    let bytes = input.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(corrupt(format!("malformed escape at byte {}", i)));
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| corrupt("escaped bytes are not UTF-8"))
}

fn corrupt(detail: impl Into<String>) -> AppError {
    AppError::PersistedState(detail.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::parse_raw_input;

    /// Build a fragment from arbitrary JSON, the way an older page would have
    fn fragment_of(json: &str) -> String {
        let escaped = utf8_percent_encode(json, URI_COMPONENT).to_string();
        format!("{}{}", FRAGMENT_PREFIX, FRAGMENT_BASE64.encode(escaped))
    }

    #[test]
    fn test_round_trip_normalized() {
        let list = parse_raw_input(
            r#"{"Frutta": ["Mela", "Banana"], "Vuota": [], "Casa & Igiene": ["Sapone 100%", "Caffè ☕", ""]}"#,
        )
        .unwrap();

        let hash = fragment_for(&list);
        assert!(hash.starts_with("#data="));
        assert_eq!(decode_fragment(&hash).unwrap(), Some(list));
    }

    #[test]
    fn test_round_trip_after_toggles() {
        let mut list = parse_raw_input(r#"{"A": ["x", "y"], "B": ["z"]}"#).unwrap();
        list.toggle(0, 1);
        list.toggle(1, 0);

        let decoded = decode_fragment(&fragment_for(&list)).unwrap().unwrap();
        assert_eq!(decoded, list);

        // A second pass through the codec is stable as well
        assert_eq!(decode_fragment(&fragment_for(&decoded)).unwrap(), Some(list));
    }

    #[test]
    fn test_payload_is_fragment_safe() {
        let list = parse_raw_input(r#"{"Frutta?": ["Mela #1", "Pera/verde", "Ünïcödé"]}"#).unwrap();
        let payload = encode_list(&list).unwrap();
        assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
    }

    #[test]
    fn test_matches_browser_encoding() {
        // btoa(encodeURIComponent('{"a":[]}'))
        let list: ShoppingList = serde_json::from_str(r#"{"a":[]}"#).unwrap();
        assert_eq!(encode_list(&list).unwrap(), "JTdCJTIyYSUyMiUzQSU1QiU1RCU3RA==");
    }

    #[test]
    fn test_empty_list_clears_fragment() {
        let list = ShoppingList::new();
        assert_eq!(encode_list(&list), None);
        assert_eq!(fragment_for(&list), "");
    }

    #[test]
    fn test_no_fragment_is_not_an_error() {
        assert_eq!(decode_fragment("").unwrap(), None);
        assert_eq!(decode_fragment("#").unwrap(), None);
        assert_eq!(decode_fragment("#section-2").unwrap(), None);
    }

    #[test]
    fn test_legacy_bare_strings() {
        let hash = fragment_of(r#"{"Frutta":["Mela","Banana"]}"#);
        let list = decode_fragment(&hash).unwrap().unwrap();

        assert_eq!(list.categories()[0].items, vec![Item::new("Mela"), Item::new("Banana")]);
    }

    #[test]
    fn test_pre_checked_item() {
        let hash = fragment_of(r#"{"Fruit":[{"name":"Apple","checked":true}]}"#);
        let list = decode_fragment(&hash).unwrap().unwrap();

        let apple = list.item(0, 0).unwrap();
        assert_eq!(apple.name, "Apple");
        assert!(apple.checked);
    }

    #[test]
    fn test_loose_items_coerced() {
        let hash = fragment_of(
            r#"{"Mix":["Pane",{"name":"Latte","checked":1},{"name":"","checked":"si"},{"checked":true},{"name":7},42],"Nota":"x"}"#,
        );
        let list = decode_fragment(&hash).unwrap().unwrap();

        assert_eq!(list.categories().len(), 1);
        let items = &list.categories()[0].items;
        assert_eq!(items[0], Item { name: "Pane".into(), checked: false });
        assert_eq!(items[1], Item { name: "Latte".into(), checked: true });
        assert_eq!(items[2], Item { name: "".into(), checked: true });
        assert_eq!(items[3], Item { name: "[object Object]".into(), checked: true });
        assert_eq!(items[4], Item { name: "7".into(), checked: false });
        assert_eq!(items[5], Item { name: "42".into(), checked: false });
    }

    #[test]
    fn test_missing_padding_accepted() {
        let hash = fragment_for(&parse_raw_input(r#"{"a":["b"]}"#).unwrap());
        let trimmed = hash.trim_end_matches('=');
        assert!(decode_fragment(trimmed).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_fragments_are_errors() {
        let cases = [
            "#data=".to_string(),
            "#data=!!!not-base64!!!".to_string(),
            // valid base64 of "%ZZ"
            format!("#data={}", FRAGMENT_BASE64.encode("%ZZ")),
            // percent-encoded invalid UTF-8
            format!("#data={}", FRAGMENT_BASE64.encode("%FF%FE")),
            // raw bytes that are not text
            format!("#data={}", FRAGMENT_BASE64.encode([0xffu8, 0xfe, 0x00])),
            fragment_of(r#"{"a":["#),
            fragment_of(r#"["Mela"]"#),
            fragment_of(r#""Mela""#),
            fragment_of("null"),
            fragment_of("{}"),
        ];

        for hash in cases {
            let err = decode_fragment(&hash).unwrap_err();
            assert!(matches!(err, AppError::PersistedState(_)), "{} -> {:?}", hash, err);
        }
    }

    #[test]
    fn test_object_without_array_categories_rejected_as_corrupt() {
        // Stricter than "empty object": nothing renderable survives decoding
        let hash = fragment_of(r#"{"Nota":"solo testo","Conto":3}"#);
        let err = decode_fragment(&hash).unwrap_err();
        assert!(matches!(err, AppError::PersistedState(_)));
    }
}
