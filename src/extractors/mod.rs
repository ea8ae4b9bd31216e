use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the JSON-encoded sentence data of a fragment
pub const CACHE_INFO_KEY: &str = "subtitle_cache_info";

/// Key of the sentence array inside the decoded cache info
pub const SENTENCE_LIST_KEY: &str = "sentence_list";

/// A caption extracted from one draft fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Start time in microseconds
    pub start_time: u64,

    /// End time in microseconds
    pub end_time: u64,

    /// Caption text, never blank
    pub text: String,
}

/// Why a fragment produced no caption
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("fragment is not an object")]
    NotAnObject,

    #[error("no subtitle_cache_info field")]
    MissingCacheInfo,

    #[error("subtitle_cache_info is not a string")]
    CacheInfoNotString,

    #[error("subtitle_cache_info is empty")]
    EmptyCacheInfo,

    #[error("subtitle_cache_info is not valid JSON")]
    InvalidCacheJson,

    #[error("no usable sentence_list")]
    NoSentences,

    #[error("sentence text is not a string")]
    NonStringText,

    #[error("caption text is blank")]
    BlankText,

    #[error("missing or invalid {0}")]
    InvalidTime(&'static str),
}

/// Turn one fragment record into a caption.
///
/// Every failure is local to the fragment; callers filter these out and keep going.
pub fn extract_caption(fragment: &Value) -> Result<Caption, SkipReason> {
    let record = fragment.as_object().ok_or(SkipReason::NotAnObject)?;

    let cache_info = match record.get(CACHE_INFO_KEY) {
        None | Some(Value::Null) => return Err(SkipReason::MissingCacheInfo),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(SkipReason::CacheInfoNotString),
    };

    let text = decode_cache_info(cache_info)?;
    if text.trim().is_empty() {
        return Err(SkipReason::BlankText);
    }

    Ok(Caption {
        start_time: read_time(record, "start_time")?,
        end_time: read_time(record, "end_time")?,
        text,
    })
}

/// Decode the nested cache info document and join its sentence texts with spaces
pub fn decode_cache_info(raw: &str) -> Result<String, SkipReason> {
    if raw.is_empty() {
        return Err(SkipReason::EmptyCacheInfo);
    }

    let cache: Value = serde_json::from_str(raw).map_err(|_| SkipReason::InvalidCacheJson)?;

    let sentences = match cache.get(SENTENCE_LIST_KEY) {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(SkipReason::NoSentences),
    };

    let mut parts = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        match sentence.get("text") {
            Some(Value::String(text)) => parts.push(text.as_str()),
            Some(_) => return Err(SkipReason::NonStringText),
            None => {}
        }
    }

    Ok(parts.join(" "))
}

/// Timestamps are integer microseconds; non-negative floats are truncated
fn read_time(record: &Map<String, Value>, field: &'static str) -> Result<u64, SkipReason> {
    let value = record.get(field).ok_or(SkipReason::InvalidTime(field))?;

    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|micros| micros.is_finite() && *micros >= 0.0)
                .map(|micros| micros as u64)
        })
        .ok_or(SkipReason::InvalidTime(field))
}
