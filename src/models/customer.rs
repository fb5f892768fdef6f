// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Customer model and mutation draft.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::hal::Links;

/// Customer record as returned by the backend.
///
/// Every field is defaulted: the backend is free to omit any of them, or
/// to send explicit nulls, and deserialization must still succeed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Native identifier, when the endpoint includes one. HAL responses
    /// usually carry the identity in the self link instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub lastname: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub streetaddress: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub postcode: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub city: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Coalesce an explicit null into the empty string.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    /// Display name in `"firstname lastname"` form, trimmed.
    ///
    /// Empty string when both parts are missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }

    /// Identifier used to address this customer for update/delete.
    ///
    /// Preference order: self-link trailing segment, then the native `id`
    /// field. Position fallback is left to the row projection.
    pub fn identifier(&self) -> Option<String> {
        self.links
            .as_ref()
            .and_then(Links::self_id)
            .or_else(|| self.id.as_ref().map(id_to_string))
    }
}

/// Stringify a native id value, which may arrive as a JSON number or string.
pub(crate) fn id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fields submitted when creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct CustomerDraft {
    #[validate(length(min = 1, message = "firstname is required"))]
    pub firstname: String,
    #[validate(length(min = 1, message = "lastname is required"))]
    pub lastname: String,
    #[validate(email(message = "email is not valid"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub streetaddress: String,
    pub postcode: String,
    pub city: String,
}

impl CustomerDraft {
    /// Pre-fill a draft from an existing customer for editing.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            firstname: customer.firstname.clone(),
            lastname: customer.lastname.clone(),
            email: if customer.email.is_empty() {
                None
            } else {
                Some(customer.email.clone())
            },
            phone: customer.phone.clone(),
            streetaddress: customer.streetaddress.clone(),
            postcode: customer.postcode.clone(),
            city: customer.city.clone(),
        }
    }
}
