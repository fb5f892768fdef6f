// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HAL navigational links as returned by the training backend.
//!
//! The backend addresses entities by their self link; the identifier used
//! for update/delete calls is the trailing path segment of that link.

use serde::{Deserialize, Serialize};

/// A single HAL link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
}

/// The `_links` object attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// Canonical link to the entity itself.
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    /// Link to the related customer (trainings only).
    #[serde(default)]
    pub customer: Option<Link>,
}

impl Links {
    /// The entity's self href, if present and non-empty.
    pub fn self_href(&self) -> Option<&str> {
        self.self_link
            .as_ref()
            .map(|l| l.href.as_str())
            .filter(|h| !h.is_empty())
    }

    /// Identifier derived from the self link (its trailing path segment).
    pub fn self_id(&self) -> Option<String> {
        self.self_href().and_then(trailing_segment)
    }

    /// Href of the related customer, if one is linked.
    pub fn customer_href(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .map(|l| l.href.as_str())
            .filter(|h| !h.is_empty())
    }
}

/// Extract the trailing non-empty path segment of an URL.
///
/// Query strings and fragments are ignored, as are trailing slashes:
/// `http://host/api/customers/5/` yields `5`.
pub fn trailing_segment(href: &str) -> Option<String> {
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or(href)
        .trim_end_matches('/');

    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
