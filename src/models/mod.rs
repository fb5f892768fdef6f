// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod customer;
pub mod hal;
pub mod stats;
pub mod training;

pub use customer::{Customer, CustomerDraft};
pub use hal::{Link, Links};
pub use stats::{aggregate_by_activity, ActivityAggregate, ActivityStats};
pub use training::{CustomerRef, Training, TrainingDraft};
