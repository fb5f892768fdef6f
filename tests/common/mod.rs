// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process stub of the training backend for integration tests.
//!
//! Serves the same shapes the real backend does: a HAL envelope for
//! `customers` and `trainings`, a flat array with inline customers for
//! `gettrainings`, and single-customer responses for link resolution.
//! Write failures can be injected, and delete calls are counted so tests
//! can assert that cancellation never reaches the backend.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Shared stub state, inspected and tweaked by tests.
pub struct StubState {
    pub base_url: Mutex<String>,
    pub customers: Mutex<Vec<Value>>,
    pub trainings: Mutex<Vec<Value>>,
    next_id: AtomicU64,
    /// When set, every write answers 500.
    pub fail_writes: AtomicBool,
    /// When set, every list read answers 500.
    pub fail_reads: AtomicBool,
    /// When set, list reads answer 200 with a number body instead of a
    /// collection, to exercise shape tolerance end to end.
    pub broken_lists: AtomicBool,
    pub customer_deletes: AtomicUsize,
    pub training_deletes: AtomicUsize,
}

impl StubState {
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn base(&self) -> String {
        self.base_url.lock().unwrap().clone()
    }

    /// Seed a customer; returns its id.
    #[allow(dead_code)]
    pub fn seed_customer(&self, fields: Value) -> u64 {
        let id = self.next_id();
        let mut customer = fields;
        customer["id"] = json!(id);
        self.customers.lock().unwrap().push(customer);
        id
    }

    /// Seed a training; `customer_id` may point at a missing customer to
    /// exercise failed link resolution.
    #[allow(dead_code)]
    pub fn seed_training(&self, mut fields: Value, customer_id: Option<u64>) -> u64 {
        let id = self.next_id();
        fields["id"] = json!(id);
        if let Some(cid) = customer_id {
            fields["customer_id"] = json!(cid);
        }
        self.trainings.lock().unwrap().push(fields);
        id
    }

    #[allow(dead_code)]
    pub fn delete_count(&self) -> usize {
        self.customer_deletes.load(Ordering::SeqCst) + self.training_deletes.load(Ordering::SeqCst)
    }
}

/// Running stub backend.
pub struct TestBackend {
    pub base_url: String,
    pub state: Arc<StubState>,
}

/// Bind a random port and serve the stub until the test process exits.
pub async fn spawn_backend() -> TestBackend {
    let state = Arc::new(StubState {
        base_url: Mutex::new(String::new()),
        customers: Mutex::new(Vec::new()),
        trainings: Mutex::new(Vec::new()),
        next_id: AtomicU64::new(1),
        fail_writes: AtomicBool::new(false),
        fail_reads: AtomicBool::new(false),
        broken_lists: AtomicBool::new(false),
        customer_deletes: AtomicUsize::new(0),
        training_deletes: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/api/gettrainings", get(list_trainings_flat))
        .route(
            "/api/trainings",
            get(list_trainings_hal).post(create_training),
        )
        .route(
            "/api/trainings/{id}",
            axum::routing::delete(delete_training),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind random port");
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/api", addr);
    *state.base_url.lock().unwrap() = base_url.clone();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend");
    });

    TestBackend { base_url, state }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

fn customer_with_links(customer: &Value, base: &str) -> Value {
    let id = customer["id"].as_u64().unwrap_or_default();
    let mut out = customer.clone();
    // HAL responses carry identity in the self link, not as a field.
    out.as_object_mut().unwrap().remove("id");
    out["_links"] = json!({
        "self": { "href": format!("{}/customers/{}", base, id) }
    });
    out
}

async fn list_customers(State(state): State<Arc<StubState>>) -> Result<Json<Value>, StatusCode> {
    if state.fail_reads.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if state.broken_lists.load(Ordering::SeqCst) {
        return Ok(Json(json!(42)));
    }
    let base = state.base();
    let customers: Vec<Value> = state
        .customers
        .lock()
        .unwrap()
        .iter()
        .map(|c| customer_with_links(c, &base))
        .collect();

    Ok(Json(json!({
        "_embedded": { "customers": customers },
        "_links": { "self": { "href": format!("{}/customers", base) } }
    })))
}

async fn get_customer(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let base = state.base();
    state
        .customers
        .lock()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_u64() == Some(id))
        .map(|c| Json(customer_with_links(c, &base)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_customer(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    state.seed_customer(body);
    Ok(StatusCode::CREATED)
}

async fn update_customer(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut customers = state.customers.lock().unwrap();
    let Some(existing) = customers.iter_mut().find(|c| c["id"].as_u64() == Some(id)) else {
        return Err(StatusCode::NOT_FOUND);
    };
    let mut replacement = body;
    replacement["id"] = json!(id);
    *existing = replacement;
    Ok(StatusCode::OK)
}

async fn delete_customer(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    state.customer_deletes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut customers = state.customers.lock().unwrap();
    let before = customers.len();
    customers.retain(|c| c["id"].as_u64() != Some(id));
    if customers.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    // The real backend cascades: the customer's trainings go too.
    state
        .trainings
        .lock()
        .unwrap()
        .retain(|t| t["customer_id"].as_u64() != Some(id));
    Ok(StatusCode::NO_CONTENT)
}

async fn list_trainings_flat(
    State(state): State<Arc<StubState>>,
) -> Result<Json<Value>, StatusCode> {
    if state.fail_reads.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if state.broken_lists.load(Ordering::SeqCst) {
        return Ok(Json(json!(42)));
    }
    let customers = state.customers.lock().unwrap();
    let trainings: Vec<Value> = state
        .trainings
        .lock()
        .unwrap()
        .iter()
        .map(|t| {
            let mut out = t.clone();
            out.as_object_mut().unwrap().remove("customer_id");
            if let Some(cid) = t["customer_id"].as_u64() {
                if let Some(customer) = customers.iter().find(|c| c["id"].as_u64() == Some(cid)) {
                    out["customer"] = customer.clone();
                }
            }
            out
        })
        .collect();

    Ok(Json(json!(trainings)))
}

async fn list_trainings_hal(
    State(state): State<Arc<StubState>>,
) -> Result<Json<Value>, StatusCode> {
    if state.fail_reads.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if state.broken_lists.load(Ordering::SeqCst) {
        return Ok(Json(json!(42)));
    }
    let base = state.base();
    let trainings: Vec<Value> = state
        .trainings
        .lock()
        .unwrap()
        .iter()
        .map(|t| {
            let id = t["id"].as_u64().unwrap_or_default();
            let mut out = t.clone();
            let fields = out.as_object_mut().unwrap();
            fields.remove("id");
            let customer_id = fields.remove("customer_id");
            let mut links = json!({
                "self": { "href": format!("{}/trainings/{}", base, id) }
            });
            if let Some(cid) = customer_id.and_then(|v| v.as_u64()) {
                links["customer"] = json!({ "href": format!("{}/customers/{}", base, cid) });
            }
            out["_links"] = links;
            out
        })
        .collect();

    Ok(Json(json!({ "_embedded": { "trainings": trainings } })))
}

async fn create_training(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let customer_id = body["customer"]
        .as_str()
        .and_then(|href| href.rsplit('/').next())
        .and_then(|segment| segment.parse().ok());

    let mut fields = body;
    fields.as_object_mut().unwrap().remove("customer");
    state.seed_training(fields, customer_id);
    Ok(StatusCode::CREATED)
}

async fn delete_training(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    state.training_deletes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut trainings = state.trainings.lock().unwrap();
    let before = trainings.len();
    trainings.retain(|t| t["id"].as_u64() != Some(id));
    if trainings.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

