// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session model and mutation draft.
//!
//! The two list endpoints disagree about field names and about how the
//! related customer is expressed, so this model is deliberately lenient:
//! - activity:  `activity`, `activityType`
//! - date:      `date`, `datetime`, `timestamp`
//! - duration:  `duration`, `length`, `minutes` (number or numeric string)
//! - customer:  inline object, or a `_links.customer` reference

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::customer::{id_to_string, string_or_empty, Customer};
use crate::models::hal::Links;

/// Training session as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Training {
    /// Native identifier, when the endpoint includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    /// Activity label, verbatim.
    #[serde(default, alias = "activityType", deserialize_with = "string_or_empty")]
    pub activity: String,
    /// Start date/time as the raw ISO-8601 string the backend sent.
    #[serde(
        default,
        alias = "datetime",
        alias = "timestamp",
        deserialize_with = "string_or_empty"
    )]
    pub date: String,
    /// Duration in minutes. None when absent or not numeric.
    #[serde(
        default,
        alias = "length",
        alias = "minutes",
        deserialize_with = "lenient_minutes"
    )]
    pub duration: Option<i64>,
    /// Inline customer, when the endpoint embeds one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// How a training refers to its customer.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerRef {
    /// Customer object embedded in the training payload.
    Embedded(Customer),
    /// Customer only reachable through a link that must be fetched.
    LinkOnly(String),
    /// No customer attached at all.
    Missing,
}

impl Training {
    /// The customer relation in whichever form this payload carries it.
    pub fn customer_ref(&self) -> CustomerRef {
        if let Some(customer) = &self.customer {
            return CustomerRef::Embedded(customer.clone());
        }
        if let Some(href) = self.links.as_ref().and_then(Links::customer_href) {
            return CustomerRef::LinkOnly(href.to_string());
        }
        CustomerRef::Missing
    }

    /// Identifier used to address this training for delete.
    ///
    /// Preference order: native `id` field, then the self-link trailing
    /// segment. Position fallback is left to the row projection.
    pub fn identifier(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(id_to_string)
            .or_else(|| self.links.as_ref().and_then(Links::self_id))
    }
}

/// Accept a duration as a JSON number or a numeric string; anything else
/// (including null) becomes None rather than a deserialization error.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Fields submitted when creating a training.
///
/// The backend expects the customer as a link URL, not as an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct TrainingDraft {
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "activity is required"))]
    pub activity: String,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}
