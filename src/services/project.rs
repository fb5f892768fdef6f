// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Projection of normalized entities into display-ready rows and events.
//!
//! Rows carry every column independently defaulted so a display surface
//! never has to null-check. Date columns keep the raw ISO string; the
//! surface decides how to format it.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;

use crate::models::{Customer, CustomerRef, Training};
use crate::services::backend::BackendClient;
use crate::services::filter::Searchable;
use crate::time_utils;

/// Calendar end-time fallback when a training has no usable duration.
const DEFAULT_DURATION_MINUTES: i64 = 30;

/// Title placeholder for trainings without a resolvable customer.
const NO_CUSTOMER: &str = "No customer";

// ─── Customer rows ───────────────────────────────────────────────────────────

/// Display-ready customer record.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    /// Stable identifier for list keys and edit/delete addressing.
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub streetaddress: String,
    pub postcode: String,
    pub city: String,
}

/// Project one customer. `position` is the last-resort id fallback for
/// entities that expose no identifier at all.
pub fn customer_row(customer: &Customer, position: usize) -> CustomerRow {
    CustomerRow {
        id: customer
            .identifier()
            .unwrap_or_else(|| position.to_string()),
        firstname: customer.firstname.clone(),
        lastname: customer.lastname.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        streetaddress: customer.streetaddress.clone(),
        postcode: customer.postcode.clone(),
        city: customer.city.clone(),
    }
}

/// Project a full customer list.
pub fn customer_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .enumerate()
        .map(|(position, customer)| customer_row(customer, position))
        .collect()
}

impl Searchable for CustomerRow {
    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            self.id,
            self.firstname,
            self.lastname,
            self.email,
            self.phone,
            self.streetaddress,
            self.postcode,
            self.city
        )
    }
}

// ─── Training rows ───────────────────────────────────────────────────────────

/// Display-ready training record.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    /// Stable identifier for list keys and delete addressing.
    pub id: String,
    pub activity: String,
    /// Raw ISO date string, formatted downstream by the display surface.
    pub date_raw: String,
    /// Duration in minutes; None renders as an empty column.
    pub duration_minutes: Option<i64>,
    /// Resolved customer display name; empty until a link-only reference
    /// has been resolved, and empty for good when resolution failed.
    pub customer_name: String,
}

/// Project one training. `resolved` maps customer link hrefs to display
/// names for link-only references (see [`NameResolver`]).
pub fn training_row(
    training: &Training,
    position: usize,
    resolved: &HashMap<String, String>,
) -> TrainingRow {
    TrainingRow {
        id: training
            .identifier()
            .unwrap_or_else(|| position.to_string()),
        activity: training.activity.clone(),
        date_raw: training.date.clone(),
        duration_minutes: training.duration,
        customer_name: customer_name(training, resolved),
    }
}

/// Project a full training list.
pub fn training_rows(
    trainings: &[Training],
    resolved: &HashMap<String, String>,
) -> Vec<TrainingRow> {
    trainings
        .iter()
        .enumerate()
        .map(|(position, training)| training_row(training, position, resolved))
        .collect()
}

impl Searchable for TrainingRow {
    fn haystack(&self) -> String {
        // Formatted date is included so searches can use either form.
        format!(
            "{} {} {} {} {}",
            self.id,
            self.activity,
            self.customer_name,
            self.date_raw,
            time_utils::display_or_raw(&self.date_raw)
        )
    }
}

/// Customer display name for a training, empty when missing or unresolved.
fn customer_name(training: &Training, resolved: &HashMap<String, String>) -> String {
    match training.customer_ref() {
        CustomerRef::Embedded(customer) => customer.display_name(),
        CustomerRef::LinkOnly(href) => resolved.get(&href).cloned().unwrap_or_default(),
        CustomerRef::Missing => String::new(),
    }
}

// ─── Calendar events ─────────────────────────────────────────────────────────

/// One training as a calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: String,
    /// `"<activity> - <customer name>"`, with a placeholder when no
    /// customer could be resolved.
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Project one training into a calendar event.
///
/// Returns None when the date does not parse; an unparsable date drops the
/// event but never the rest of the batch.
pub fn calendar_event(
    training: &Training,
    position: usize,
    resolved: &HashMap<String, String>,
) -> Option<CalendarEvent> {
    let start = match time_utils::parse_iso(&training.date) {
        Some(start) => start,
        None => {
            tracing::warn!(date = %training.date, activity = %training.activity,
                "Skipping calendar event with unparsable date");
            return None;
        }
    };

    let minutes = match training.duration {
        Some(d) if d > 0 => d,
        _ => DEFAULT_DURATION_MINUTES,
    };

    let name = customer_name(training, resolved);
    let title = if name.is_empty() {
        format!("{} - {}", training.activity, NO_CUSTOMER)
    } else {
        format!("{} - {}", training.activity, name)
    };

    Some(CalendarEvent {
        id: training
            .identifier()
            .unwrap_or_else(|| position.to_string()),
        title,
        start,
        end: start + Duration::minutes(minutes),
    })
}

/// Project a full training list into calendar events, dropping only the
/// entries whose dates cannot be parsed.
pub fn calendar_events(
    trainings: &[Training],
    resolved: &HashMap<String, String>,
) -> Vec<CalendarEvent> {
    trainings
        .iter()
        .enumerate()
        .filter_map(|(position, training)| calendar_event(training, position, resolved))
        .collect()
}

// ─── Link-only customer resolution ───────────────────────────────────────────

/// Resolves link-only customer references to display names.
///
/// One lookup is issued per distinct link, all concurrently; a failed
/// lookup resolves to an empty name instead of failing the batch. The
/// href → name mapping is cached for the lifetime of the resolver, which
/// is one fetch cycle.
#[derive(Default)]
pub struct NameResolver {
    cache: HashMap<String, String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every link-only reference in `trainings` that is not cached
    /// yet. Returns when all outstanding lookups have settled.
    pub async fn resolve(&mut self, client: &BackendClient, trainings: &[Training]) {
        let pending: HashSet<String> = trainings
            .iter()
            .filter_map(|t| match t.customer_ref() {
                CustomerRef::LinkOnly(href) if !self.cache.contains_key(&href) => Some(href),
                _ => None,
            })
            .collect();

        if pending.is_empty() {
            return;
        }

        tracing::debug!(count = pending.len(), "Resolving customer links");

        let lookups = pending.into_iter().map(|href| async move {
            let name = match client.fetch_customer_by_link(&href).await {
                Ok(customer) => customer.display_name(),
                Err(err) => {
                    tracing::warn!(href = %href, error = %err, "Customer link resolution failed");
                    String::new()
                }
            };
            (href, name)
        });

        for (href, name) in join_all(lookups).await {
            self.cache.insert(href, name);
        }
    }

    /// The href → display-name mapping resolved so far.
    pub fn resolved(&self) -> &HashMap<String, String> {
        &self.cache
    }
}
