// tests/common/mod.rs
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use tokio::task::JoinHandle;

use crate::api::request_builder::RequestBuilder;
use crate::auth::executor::AuthenticatedRequestExecutor;
use crate::auth::token_service::{TokenAcquisition, TokenService};
use crate::error::{SdkError, TransportError};
use crate::helpers::time::ManualClock;
use crate::messages::security::CheckTokenResponse;
use crate::observability::metrics::Metrics;
use crate::transport::executor::HttpExecutor;
use crate::transport::request::{GenericResponse, SdkRequest};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Http executor answering from a script and recording every request.
#[derive(Default)]
pub struct ScriptedHttp {
    responses: Mutex<VecDeque<Result<GenericResponse, TransportError>>>,
    pub requests: Mutex<Vec<SdkRequest>>,
}

impl ScriptedHttp {
    pub fn new(responses: Vec<Result<GenericResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses.into()), requests: Mutex::new(Vec::new()) })
    }

    pub fn statuses(statuses: &[u16]) -> Arc<Self> {
        Self::new(
            statuses
                .iter()
                .map(|status| Ok(GenericResponse::new(*status, format!("{{\"status\":{}}}", status))))
                .collect(),
        )
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn authorization(&self, index: usize) -> Option<String> {
        self.requests.lock().unwrap()[index].header("Authorization").map(str::to_owned)
    }
}

impl HttpExecutor for ScriptedHttp {
    async fn execute(&self, request: &SdkRequest) -> Result<GenericResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(GenericResponse::new(500, "script exhausted")))
    }
}

/// Token service answering from a script and counting calls.
#[derive(Default)]
pub struct ScriptedTokens {
    acquisitions: Mutex<VecDeque<Result<TokenAcquisition, SdkError>>>,
    check_statuses: Mutex<VecDeque<Result<u16, SdkError>>>,
    pub acquire_calls: AtomicUsize,
    pub checked: Mutex<Vec<String>>,
}

impl ScriptedTokens {
    pub fn new(acquisitions: Vec<TokenAcquisition>, check_statuses: Vec<u16>) -> Self {
        Self::scripted(
            acquisitions.into_iter().map(Ok).collect(),
            check_statuses.into_iter().map(Ok).collect(),
        )
    }

    /// Like `new`, but any step may fail.
    pub fn scripted(
        acquisitions: Vec<Result<TokenAcquisition, SdkError>>,
        check_statuses: Vec<Result<u16, SdkError>>,
    ) -> Self {
        Self {
            acquisitions: Mutex::new(acquisitions.into()),
            check_statuses: Mutex::new(check_statuses.into()),
            ..Default::default()
        }
    }

    pub fn acquire_calls(&self) -> usize {
        self.acquire_calls.load(Ordering::SeqCst)
    }

    pub fn check_calls(&self) -> usize {
        self.checked.lock().unwrap().len()
    }
}

pub fn granted(value: &str, expires_in_ms: i64) -> TokenAcquisition {
    TokenAcquisition::Granted { value: value.to_owned(), expires_in_ms }
}

impl TokenService for Arc<ScriptedTokens> {
    async fn acquire_token(&self) -> Result<TokenAcquisition, SdkError> {
        self.acquire_calls.fetch_add(1, Ordering::SeqCst);
        self.acquisitions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(TokenAcquisition::Rejected { status: 500, body: "script exhausted".to_owned() }))
    }

    async fn check_token(&self, token: &str) -> Result<CheckTokenResponse, SdkError> {
        self.checked.lock().unwrap().push(token.to_owned());
        let status = self.check_statuses.lock().unwrap().pop_front().unwrap_or(Ok(500))?;
        Ok(CheckTokenResponse { status, body: format!("{{\"check\":{}}}", status) })
    }
}

pub type TestExecutor = AuthenticatedRequestExecutor<Arc<ScriptedTokens>, ScriptedHttp, Arc<ManualClock>>;

pub fn executor(tokens: &Arc<ScriptedTokens>, http: &Arc<ScriptedHttp>, clock: &Arc<ManualClock>) -> TestExecutor {
    AuthenticatedRequestExecutor::new(
        tokens.clone(),
        http.clone(),
        clock.clone(),
        RequestBuilder::new("localhost", false),
        Metrics::new(),
    )
}
