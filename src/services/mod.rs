// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access and view-facing logic.

pub mod backend;
pub mod controller;
pub mod filter;
pub mod normalize;
pub mod project;

pub use backend::BackendClient;
pub use controller::{CustomerController, EditorState, TrainingController};
pub use filter::{apply_filter, Searchable};
pub use normalize::normalize_collection;
pub use project::{CalendarEvent, CustomerRow, NameResolver, TrainingRow};
