//! Optional-scalar boxing and JSON string-list helpers.
//!
//! Wire records carry most scalars as nullable values. The service treats
//! the zero value of a scalar as "unset": an empty string, `0` or an absent
//! identifier all box to `None` on the way out. Booleans are the exception
//! and are always present.

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

pub fn box_string(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

pub fn unbox_string(opt: Option<&str>) -> String {
    opt.map(str::to_owned).unwrap_or_default()
}

pub fn box_i32(v: i32) -> Option<i32> {
    (v != 0).then_some(v)
}

pub fn unbox_i32(opt: Option<i32>) -> i32 {
    opt.unwrap_or(0)
}

/// Also used for optional timestamps, where `0` means "never".
pub fn box_i64(v: i64) -> Option<i64> {
    (v != 0).then_some(v)
}

pub fn unbox_i64(opt: Option<i64>) -> i64 {
    opt.unwrap_or(0)
}

pub fn box_bool(v: bool) -> Option<bool> {
    Some(v)
}

pub fn unbox_bool(opt: Option<bool>) -> bool {
    opt.unwrap_or(false)
}

/// Canonical hyphenated text of an optional identifier.
pub fn box_uuid(id: Option<Uuid>) -> Option<String> {
    id.map(|id| id.to_string())
}

/// Parse an optional textual identifier. Absent, empty and malformed
/// input all yield `None`.
pub fn parse_uuid(text: Option<&str>) -> Option<Uuid> {
    text.filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
}

pub fn trim_space(s: &str) -> &str {
    s.trim()
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Encode a list as a compact JSON array for persistence.
///
/// The empty list is persisted as `""`, not `"[]"`. Encoding failures
/// degrade to `""`.
pub fn encode_string_list<S: Serialize>(items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }
    match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to encode string list");
            String::new()
        }
    }
}

/// Decode a persisted JSON array of strings.
///
/// `""` and malformed JSON both decode to `None`.
pub fn decode_string_list(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => Some(items),
        Err(e) => {
            debug!(error = %e, "Ignoring malformed string list");
            None
        }
    }
}
