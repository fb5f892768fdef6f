// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the backend client and the controllers.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for a 404 from the backend or a local not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::Backend { status: 404, .. }
        )
    }

    /// True for failures of the request itself rather than of its payload,
    /// i.e. transport errors and non-success statuses.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Backend { .. })
    }
}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AppError>;
