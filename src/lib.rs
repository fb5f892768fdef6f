// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trainer-Desk: terminal client for a personal-training backend
//!
//! This crate fetches customers and training sessions from a HAL-style
//! REST backend and projects them into table, calendar and statistics
//! views. All business logic lives in the backend; this side normalizes
//! payload shapes, projects display rows and drives create/update/delete
//! calls.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod time_utils;
