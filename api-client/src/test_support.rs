//! Scripted transport and fixtures shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::storage::MemoryStore;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::types::{User, UserType};

pub(crate) const BASE_URL: &str = "http://api.test/api";

/// Transport that replays queued responses in order and records requests.
///
/// Responses are matched to requests in the order the requests are sent. A
/// request can be held in flight with [`StubTransport::hold_next`] so tests can
/// interleave session transitions before its response lands.
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl StubTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Hold the next request's response until the returned gate is notified.
    pub(crate) fn hold_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Yield until `count` requests have been sent.
    pub(crate) async fn wait_for_requests(&self, count: usize) {
        while self.requests.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())));
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }
}

pub(crate) fn client_with(stub: &Arc<StubTransport>) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = ClientConfig::new(BASE_URL).unwrap();
    let client = ApiClient::new(&config, stub.clone(), store.clone());
    (client, store)
}

pub(crate) fn user(email: &str, user_type: UserType) -> User {
    User {
        id: format!("id-{email}"),
        name: "Test".to_owned(),
        email: email.to_owned(),
        user_type,
        ..User::default()
    }
}

pub(crate) fn user_json(email: &str, user_type: &str) -> serde_json::Value {
    serde_json::json!({ "id": format!("id-{email}"), "name": "Test", "email": email, "userType": user_type })
}
