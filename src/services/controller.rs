// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-entity CRUD controllers.
//!
//! Each controller owns the fetched list for one view plus the editor
//! state machine:
//!
//! `Idle -> FormOpen -> Submitting -> Idle` for create/edit, and
//! `Idle -> ConfirmingDelete -> Deleting -> Idle` for delete. A delete is
//! never dispatched without the explicit confirmation step.

use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{aggregate_by_activity, ActivityStats, Customer, CustomerDraft};
use crate::models::{Training, TrainingDraft};
use crate::services::backend::BackendClient;
use crate::services::project::{
    calendar_events, customer_rows, training_rows, CalendarEvent, CustomerRow, NameResolver,
    TrainingRow,
};

/// Editor state shared by the controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<D> {
    /// List loaded (or empty), nothing in progress.
    Idle,
    /// A create or edit form is open. `existing_id` is None for create.
    FormOpen {
        draft: D,
        existing_id: Option<String>,
    },
    /// A create/update call is in flight.
    Submitting,
    /// Waiting for the user to confirm a delete.
    ConfirmingDelete { id: String },
    /// A delete call is in flight.
    Deleting,
}

impl<D> EditorState<D> {
    /// Explicit in-flight flag for the view layer.
    pub fn is_busy(&self) -> bool {
        matches!(self, EditorState::Submitting | EditorState::Deleting)
    }
}

// ─── Customers ───────────────────────────────────────────────────────────────

/// List state and editor state machine for the customers view.
pub struct CustomerController {
    client: BackendClient,
    customers: Vec<Customer>,
    rows: Vec<CustomerRow>,
    state: EditorState<CustomerDraft>,
}

impl CustomerController {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            customers: Vec::new(),
            rows: Vec::new(),
            state: EditorState::Idle,
        }
    }

    /// Fetch, normalize and project the customer list.
    ///
    /// On failure the previously loaded list is left intact.
    pub async fn load(&mut self) -> Result<()> {
        let customers = self.client.list_customers().await?;
        self.rows = customer_rows(&customers);
        self.customers = customers;
        Ok(())
    }

    pub fn rows(&self) -> &[CustomerRow] {
        &self.rows
    }

    pub fn state(&self) -> &EditorState<CustomerDraft> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Open an empty create form. Returns false when another interaction
    /// is already in progress.
    pub fn open_create(&mut self) -> bool {
        if !matches!(self.state, EditorState::Idle) {
            return false;
        }
        self.state = EditorState::FormOpen {
            draft: CustomerDraft::default(),
            existing_id: None,
        };
        true
    }

    /// Open an edit form pre-filled from the customer with the given
    /// projected id. A stale or unknown id is a safe no-op.
    pub fn open_edit(&mut self, id: &str) -> bool {
        if !matches!(self.state, EditorState::Idle) {
            return false;
        }
        let Some(position) = self.rows.iter().position(|row| row.id == id) else {
            tracing::debug!(id, "Edit requested for unknown customer id");
            return false;
        };

        self.state = EditorState::FormOpen {
            draft: CustomerDraft::from_customer(&self.customers[position]),
            existing_id: Some(id.to_string()),
        };
        true
    }

    /// Mutable access to the open draft, for the form to fill in.
    pub fn draft_mut(&mut self) -> Option<&mut CustomerDraft> {
        match &mut self.state {
            EditorState::FormOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Validate and dispatch the open form.
    ///
    /// Create when the form has no existing id, update otherwise. On
    /// success the list is reloaded and the editor returns to idle; on
    /// failure the form stays open with the draft intact.
    pub async fn submit(&mut self) -> Result<()> {
        let (draft, existing_id) = match &self.state {
            EditorState::FormOpen { draft, existing_id } => (draft.clone(), existing_id.clone()),
            _ => return Err(AppError::Validation("no form is open".to_string())),
        };

        if let Err(err) = draft.validate() {
            // State is still FormOpen; the user fixes the draft and retries.
            return Err(AppError::Validation(err.to_string()));
        }

        self.state = EditorState::Submitting;
        let result = match &existing_id {
            Some(id) => self.client.update_customer(id, &draft).await,
            None => self.client.create_customer(&draft).await,
        };

        match result {
            Ok(()) => {
                self.state = EditorState::Idle;
                if let Err(err) = self.load().await {
                    tracing::warn!(error = %err, "List refresh after submit failed");
                }
                Ok(())
            }
            Err(err) => {
                self.state = EditorState::FormOpen { draft, existing_id };
                Err(err)
            }
        }
    }

    /// Ask for confirmation before deleting. No-op for unknown ids.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if !matches!(self.state, EditorState::Idle) {
            return false;
        }
        if !self.rows.iter().any(|row| row.id == id) {
            tracing::debug!(id, "Delete requested for unknown customer id");
            return false;
        }
        self.state = EditorState::ConfirmingDelete { id: id.to_string() };
        true
    }

    /// Back out of a pending delete without any backend call.
    pub fn cancel_delete(&mut self) {
        if matches!(self.state, EditorState::ConfirmingDelete { .. }) {
            self.state = EditorState::Idle;
        }
    }

    /// Dispatch the confirmed delete. On failure the editor returns to
    /// idle without assuming the entity was removed.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let id = match &self.state {
            EditorState::ConfirmingDelete { id } => id.clone(),
            _ => return Err(AppError::Validation("no delete pending".to_string())),
        };

        self.state = EditorState::Deleting;
        let result = self.client.delete_customer(&id).await;
        self.state = EditorState::Idle;

        result?;
        if let Err(err) = self.load().await {
            tracing::warn!(error = %err, "List refresh after delete failed");
        }
        Ok(())
    }
}

// ─── Trainings ───────────────────────────────────────────────────────────────

/// List state and editor state machine for the trainings view.
///
/// The backend offers no training update endpoint, so the editor here only
/// creates and deletes.
pub struct TrainingController {
    client: BackendClient,
    trainings: Vec<Training>,
    resolver: NameResolver,
    rows: Vec<TrainingRow>,
    state: EditorState<TrainingDraft>,
}

impl TrainingController {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            trainings: Vec::new(),
            resolver: NameResolver::new(),
            rows: Vec::new(),
            state: EditorState::Idle,
        }
    }

    /// Fetch from the flat endpoint, where customers may arrive inline.
    pub async fn load(&mut self) -> Result<()> {
        let trainings = self.client.list_trainings().await?;
        self.replace_list(trainings).await;
        Ok(())
    }

    /// Fetch from the HAL endpoint, where every customer is link-only and
    /// gets resolved through its link.
    pub async fn load_linked(&mut self) -> Result<()> {
        let trainings = self.client.list_trainings_linked().await?;
        self.replace_list(trainings).await;
        Ok(())
    }

    /// Swap in a freshly fetched list: start a new resolution cycle, wait
    /// for all lookups to settle, then project the rows.
    async fn replace_list(&mut self, trainings: Vec<Training>) {
        let mut resolver = NameResolver::new();
        resolver.resolve(&self.client, &trainings).await;
        self.rows = training_rows(&trainings, resolver.resolved());
        self.trainings = trainings;
        self.resolver = resolver;
    }

    pub fn rows(&self) -> &[TrainingRow] {
        &self.rows
    }

    pub fn state(&self) -> &EditorState<TrainingDraft> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// The loaded list as calendar events.
    pub fn events(&self) -> Vec<CalendarEvent> {
        calendar_events(&self.trainings, self.resolver.resolved())
    }

    /// Per-activity statistics over the loaded list.
    pub fn stats(&self) -> ActivityStats {
        aggregate_by_activity(&self.trainings)
    }

    /// Open an empty create form. Returns false when another interaction
    /// is already in progress.
    pub fn open_create(&mut self) -> bool {
        if !matches!(self.state, EditorState::Idle) {
            return false;
        }
        self.state = EditorState::FormOpen {
            draft: TrainingDraft::default(),
            existing_id: None,
        };
        true
    }

    /// Mutable access to the open draft, for the form to fill in.
    pub fn draft_mut(&mut self) -> Option<&mut TrainingDraft> {
        match &mut self.state {
            EditorState::FormOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Validate and dispatch the open create form.
    pub async fn submit(&mut self) -> Result<()> {
        let draft = match &self.state {
            EditorState::FormOpen { draft, .. } => draft.clone(),
            _ => return Err(AppError::Validation("no form is open".to_string())),
        };

        if let Err(err) = draft.validate() {
            return Err(AppError::Validation(err.to_string()));
        }

        self.state = EditorState::Submitting;
        match self.client.create_training(&draft).await {
            Ok(()) => {
                self.state = EditorState::Idle;
                if let Err(err) = self.load().await {
                    tracing::warn!(error = %err, "List refresh after submit failed");
                }
                Ok(())
            }
            Err(err) => {
                self.state = EditorState::FormOpen {
                    draft,
                    existing_id: None,
                };
                Err(err)
            }
        }
    }

    /// Ask for confirmation before deleting. No-op for unknown ids.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if !matches!(self.state, EditorState::Idle) {
            return false;
        }
        if !self.rows.iter().any(|row| row.id == id) {
            tracing::debug!(id, "Delete requested for unknown training id");
            return false;
        }
        self.state = EditorState::ConfirmingDelete { id: id.to_string() };
        true
    }

    /// Back out of a pending delete without any backend call.
    pub fn cancel_delete(&mut self) {
        if matches!(self.state, EditorState::ConfirmingDelete { .. }) {
            self.state = EditorState::Idle;
        }
    }

    /// Dispatch the confirmed delete.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let id = match &self.state {
            EditorState::ConfirmingDelete { id } => id.clone(),
            _ => return Err(AppError::Validation("no delete pending".to_string())),
        };

        self.state = EditorState::Deleting;
        let result = self.client.delete_training(&id).await;
        self.state = EditorState::Idle;

        result?;
        if let Err(err) = self.load().await {
            tracing::warn!(error = %err, "List refresh after delete failed");
        }
        Ok(())
    }
}
