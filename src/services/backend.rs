// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the training backend API.
//!
//! Handles:
//! - Customer and training list fetches (flat and HAL-shaped)
//! - Create/update/delete calls
//! - Customer resolution through arbitrary link URLs
//!
//! Responses are read as `serde_json::Value` and handed to the collection
//! normalizer, so shape tolerance lives in one place.

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Customer, CustomerDraft, Training, TrainingDraft};
use crate::services::normalize::normalize_collection;

/// Training backend API client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client from application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Create a client straight from a base URL (tests, ad hoc tooling).
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    // ─── Customers ───────────────────────────────────────────────────────────

    /// List all customers. The endpoint always answers with a HAL envelope,
    /// but the normalizer accepts a bare array too.
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        let value = self.get_value(&self.url("customers")).await?;
        Ok(normalize_collection(value, "customers"))
    }

    /// Create a new customer.
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<()> {
        let response = self
            .http
            .post(self.url("customers"))
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        self.check_response(response).await?;
        tracing::info!("Customer created");
        Ok(())
    }

    /// Replace an existing customer (full update).
    pub async fn update_customer(&self, id: &str, draft: &CustomerDraft) -> Result<()> {
        let url = format!("{}customers/{}", self.base_url, urlencoding::encode(id));
        let response = self
            .http
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        self.check_response(response).await?;
        tracing::info!(customer_id = id, "Customer updated");
        Ok(())
    }

    /// Delete a customer. The backend cascades the deletion to the
    /// customer's trainings.
    pub async fn delete_customer(&self, id: &str) -> Result<()> {
        let url = format!("{}customers/{}", self.base_url, urlencoding::encode(id));
        let response = self.http.delete(&url).send().await.map_err(transport_error)?;

        self.check_response(response).await?;
        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }

    /// Fetch a single customer through a link URL returned by a prior
    /// response. The href is absolute and used as-is.
    pub async fn fetch_customer_by_link(&self, href: &str) -> Result<Customer> {
        let value = self.get_value(href).await?;
        serde_json::from_value(value)
            .map_err(|e| AppError::Decode(format!("Customer at {}: {}", href, e)))
    }

    // ─── Trainings ───────────────────────────────────────────────────────────

    /// List trainings from the flat endpoint. Customers may arrive inlined;
    /// the response may be a bare array or a HAL envelope.
    pub async fn list_trainings(&self) -> Result<Vec<Training>> {
        let value = self.get_value(&self.url("gettrainings")).await?;
        Ok(normalize_collection(value, "trainings"))
    }

    /// List trainings from the HAL endpoint, where the customer is only
    /// reachable through its link.
    pub async fn list_trainings_linked(&self) -> Result<Vec<Training>> {
        let value = self.get_value(&self.url("trainings")).await?;
        Ok(normalize_collection(value, "trainings"))
    }

    /// Create a new training. The related customer is sent as a link URL.
    pub async fn create_training(&self, draft: &TrainingDraft) -> Result<()> {
        let response = self
            .http
            .post(self.url("trainings"))
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        self.check_response(response).await?;
        tracing::info!(activity = %draft.activity, "Training created");
        Ok(())
    }

    /// Delete a training.
    pub async fn delete_training(&self, id: &str) -> Result<()> {
        let url = format!("{}trainings/{}", self.base_url, urlencoding::encode(id));
        let response = self.http.delete(&url).send().await.map_err(transport_error)?;

        self.check_response(response).await?;
        tracing::info!(training_id = id, "Training deleted");
        Ok(())
    }

    // ─── Plumbing ────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a URL and parse the body as arbitrary JSON.
    async fn get_value(&self, url: &str) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let response = self.check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
    }

    /// Check response status, turning non-success into an error that keeps
    /// the status and a snippet of the body for reporting.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message: String = body.trim().chars().take(200).collect();

        tracing::warn!(status = status.as_u16(), "Backend request failed");
        Err(AppError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Transport(err.to_string())
}
