// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection normalization for the backend's two response shapes.
//!
//! List endpoints return either a bare JSON array or a HAL envelope with
//! the items nested under `_embedded.<collection>`. The shape is resolved
//! by inspecting the payload, never by a caller-supplied flag.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract an entity collection from a parsed response body.
///
/// Recognized shapes:
/// - a bare array of entity objects
/// - an object with `_embedded.<embedded_key>` holding such an array
///
/// Anything else yields an empty vec. Individual elements that fail to
/// deserialize are skipped so one malformed record cannot take down the
/// whole list.
pub fn normalize_collection<T: DeserializeOwned>(value: Value, embedded_key: &str) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("_embedded") {
            Some(Value::Object(mut embedded)) => match embedded.remove(embedded_key) {
                Some(Value::Array(items)) => items,
                _ => {
                    tracing::debug!(embedded_key, "No embedded collection in response");
                    return Vec::new();
                }
            },
            _ => {
                tracing::debug!(embedded_key, "Response object has no _embedded envelope");
                return Vec::new();
            }
        },
        other => {
            tracing::warn!(
                embedded_key,
                shape = shape_name(&other),
                "Unrecognized response shape, treating as empty"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entity) => Some(entity),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping element that failed to deserialize");
                None
            }
        })
        .collect()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
