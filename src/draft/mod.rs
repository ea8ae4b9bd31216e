use serde_json::Value;
use std::path::Path;

use crate::ConverterError;

/// Key holding the caption fragments inside a CapCut draft
pub const FRAGMENT_LIST_KEY: &str = "subtitle_fragment_info_list";

/// Read and parse a draft document from disk
pub fn load_document(path: &Path) -> Result<Value, ConverterError> {
    let content = fs_err::read_to_string(path).map_err(|source| ConverterError::DocumentUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    parse_document(&content, path)
}

/// Parse draft content; `path` is only used for error reporting
pub fn parse_document(content: &str, path: &Path) -> Result<Value, ConverterError> {
    serde_json::from_str(content).map_err(|source| ConverterError::DocumentMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Depth-first search for the first value bound to `key`.
///
/// A mapping that holds `key` directly wins over anything nested inside it;
/// a `null` binding there is no match and the search resumes with the
/// mapping's siblings. Otherwise mapping values are visited in document order
/// (objects keep insertion order through serde_json's `preserve_order`), then
/// sequence elements by index. The first hit returns immediately.
pub fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => {
            if let Some(found) = map.get(key) {
                return (!found.is_null()).then_some(found);
            }
            map.values().find_map(|child| find_key(child, key))
        }
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}

/// Locate the caption fragment list anywhere in the draft
pub fn find_fragment_list(document: &Value) -> Result<&[Value], ConverterError> {
    let not_found = || ConverterError::StructureNotFound {
        key: FRAGMENT_LIST_KEY.to_string(),
    };

    match find_key(document, FRAGMENT_LIST_KEY) {
        Some(Value::Array(fragments)) => Ok(fragments.as_slice()),
        Some(other) => {
            tracing::warn!(
                "`{}` is bound to a non-array value ({})",
                FRAGMENT_LIST_KEY,
                value_kind(other)
            );
            Err(not_found())
        }
        None => Err(not_found()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
