//! Authenticated request execution.
//!
//! Every call goes out with a live bearer token. A `401` is resolved with a
//! check-token call:
//!
//! ```text
//! START -> AUTH_READY -> REQUEST_SENT -> SUCCESS
//!                                     -> UNAUTHORIZED -> CHECK_TOKEN -> 200: UnauthorizedValidToken
//!                                                                    -> 400: REFRESH_AND_RETRY -> handled result
//!                                                                    -> other: UnexpectedTokenCheckStatus
//! ```
//!
//! The retried request is handed to the descriptor's handler whatever its
//! status; there is never a second retry.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::descriptor::ApiDescriptor;
use crate::api::request_builder::RequestBuilder;
use crate::auth::token_service::{TokenAcquisition, TokenService};
use crate::cache::token::Token;
use crate::cache::token_ledger::TokenLedger;
use crate::error::SdkError;
use crate::helpers::time::Clock;
use crate::observability::metrics::Metrics;
use crate::transport::executor::HttpExecutor;
use crate::transport::request::GenericResponse;

pub struct AuthenticatedRequestExecutor<S, H, C> {
    token_service: S,
    http: Arc<H>,
    clock: C,
    builder: RequestBuilder,
    ledger: Mutex<TokenLedger>,
    metrics: Arc<Metrics>,
}

impl<S, H, C> AuthenticatedRequestExecutor<S, H, C>
where
    S: TokenService,
    H: HttpExecutor,
    C: Clock,
{
    pub fn new(token_service: S, http: Arc<H>, clock: C, builder: RequestBuilder, metrics: Arc<Metrics>) -> Self {
        Self {
            token_service,
            http,
            clock,
            builder,
            ledger: Mutex::new(TokenLedger::new()),
            metrics,
        }
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Snapshot of the token ledger.
    pub async fn ledger(&self) -> TokenLedger {
        self.ledger.lock().await.clone()
    }

    /// Perform the call described by `descriptor` and return its handled
    /// result.
    pub async fn invoke<T>(&self, descriptor: &ApiDescriptor<T>) -> Result<T, SdkError> {
        let token = self.prepare_auth(None).await?;
        let response = self.send(descriptor, &token).await?;

        if !response.is_unauthorized() {
            return descriptor.handle(response);
        }

        warn!("{} answered 401, checking token", descriptor.api_endpoint());
        let check = self.token_service.check_token(&token).await?;
        let check_status = check.status.to_string();
        self.metrics.token_checks.with_label_values(&[check_status.as_str()]).inc();

        match check.status {
            200 => Err(SdkError::UnauthorizedValidToken { body: response.body }),
            400 => {
                info!("token rejected by {}, refreshing and retrying once", descriptor.api_endpoint());
                self.metrics.unauthorized_retries.with_label_values(&[descriptor.service.as_str()]).inc();
                let token = self.prepare_auth(Some(&token)).await?;
                let retried = self.send(descriptor, &token).await?;
                descriptor.handle(retried)
            }
            status => Err(SdkError::UnexpectedTokenCheckStatus { status, body: check.body }),
        }
    }

    /// Make sure the ledger holds a usable token and return its value.
    ///
    /// `rejected` forces a refresh unless the ledger has already moved on to
    /// a different ready token. The lock is held across the acquisition so
    /// concurrent callers never refresh twice.
    pub async fn prepare_auth(&self, rejected: Option<&str>) -> Result<String, SdkError> {
        let mut ledger = self.ledger.lock().await;
        let now = self.clock.now_ms();

        let force_refresh = rejected.is_some_and(|rejected| ledger.current() == rejected);
        if !force_refresh && ledger.is_ready(now) {
            return Ok(ledger.current().to_owned());
        }

        debug!("acquiring token (forced: {})", force_refresh);
        match self.token_service.acquire_token().await? {
            TokenAcquisition::Granted { value, expires_in_ms } => {
                let issued_at_ms = self.clock.now_ms();
                let token = Token::new(value, expires_in_ms, issued_at_ms);
                self.metrics.token_acquisitions.with_label_values(&["granted"]).inc();
                self.metrics.token_expiry_unix_ms.set(token.expires_at_ms());
                info!("token acquired, expires at {} ms", token.expires_at_ms());
                ledger.store(token);
                Ok(ledger.current().to_owned())
            }
            TokenAcquisition::Rejected { status: 401, .. } => {
                self.metrics.token_acquisitions.with_label_values(&["invalid_credentials"]).inc();
                Err(SdkError::InvalidOauthCredentials)
            }
            TokenAcquisition::Rejected { status, body } => {
                self.metrics.token_acquisitions.with_label_values(&["failed"]).inc();
                Err(SdkError::TokenAcquisition { status, body })
            }
        }
    }

    async fn send<T>(&self, descriptor: &ApiDescriptor<T>, token: &str) -> Result<GenericResponse, SdkError> {
        let request = self.builder.build(descriptor).with_bearer(token);
        let service = descriptor.service.as_str();
        let timer = self.metrics.request_duration.with_label_values(&[service]).start_timer();

        let response = self.http.execute(&request).await.inspect_err(|e| {
            warn!("{} {} failed: {}", request.method, request.url, e);
            self.metrics.transport_failures.with_label_values(&[service]).inc();
        })?;
        timer.observe_duration();

        let status = response.status.to_string();
        self.metrics
            .requests
            .with_label_values(&[service, request.method.as_str(), status.as_str()])
            .inc();
        Ok(response)
    }
}
