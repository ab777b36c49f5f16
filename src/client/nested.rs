//! Key-path access into untyped JSON payloads

use serde_json::Value;

use crate::error::{ApiError, Result};

/// Walk `path` through nested JSON objects.
///
/// Fails with [`ApiError::MissingField`] naming the first key that is absent,
/// or that is looked up on something other than an object.
pub fn access_nested_map<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| ApiError::MissingField((*key).to_string()))?;
    }
    Ok(current)
}
