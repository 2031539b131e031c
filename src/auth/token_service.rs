use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::descriptor::ApiDescriptor;
use crate::api::request_builder::RequestBuilder;
use crate::api::security_api;
use crate::auth::credentials::Credentials;
use crate::config::settings::ExpiryUnit;
use crate::error::SdkError;
use crate::messages::security::{CheckTokenResponse, GetTokenResponse};
use crate::transport::executor::HttpExecutor;
use crate::transport::request::AUTH_HEADER_KEY;

/// Outcome of asking the security service for a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAcquisition {
    Granted { value: String, expires_in_ms: i64 },
    Rejected { status: u16, body: String },
}

/// Obtains and validates bearer tokens. Injected into the executor so the
/// token lifecycle can run against any backend.
pub trait TokenService: Send + Sync {
    fn acquire_token(&self) -> impl Future<Output = Result<TokenAcquisition, SdkError>> + Send;

    /// 200 means `token` is valid, 400 means it is not.
    fn check_token(&self, token: &str) -> impl Future<Output = Result<CheckTokenResponse, SdkError>> + Send;
}

/// `TokenService` talking to the security service's oauth endpoints with
/// basic auth.
pub struct SecurityTokenService<H> {
    credentials: Credentials,
    builder: RequestBuilder,
    http: Arc<H>,
    expiry_unit: ExpiryUnit,
}

impl<H: HttpExecutor> SecurityTokenService<H> {
    pub fn new(credentials: Credentials, builder: RequestBuilder, http: Arc<H>, expiry_unit: ExpiryUnit) -> Self {
        Self { credentials, builder, http, expiry_unit }
    }

    async fn invoke_with_basic_auth<T>(&self, descriptor: ApiDescriptor<T>) -> Result<T, SdkError> {
        let mut request = self.builder.build(&descriptor);
        request.add_header(AUTH_HEADER_KEY, self.credentials.basic_header_value());
        let response = self.http.execute(&request).await?;
        descriptor.handle(response)
    }
}

impl<H: HttpExecutor> TokenService for SecurityTokenService<H> {
    async fn acquire_token(&self) -> Result<TokenAcquisition, SdkError> {
        let response = self.invoke_with_basic_auth(security_api::get_token()).await?;
        if response.status != 200 {
            warn!("token endpoint answered {} {}", response.status, response.status_text);
            return Ok(TokenAcquisition::Rejected { status: response.status, body: response.body });
        }

        let parsed: GetTokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| SdkError::Decode(format!("token response: {}", e)))?;
        debug!("token granted, type {:?}, expires in {} {:?}", parsed.token_type, parsed.expires_in, self.expiry_unit);

        Ok(TokenAcquisition::Granted {
            value: parsed.access_token,
            expires_in_ms: self.expiry_unit.to_millis(parsed.expires_in),
        })
    }

    async fn check_token(&self, token: &str) -> Result<CheckTokenResponse, SdkError> {
        self.invoke_with_basic_auth(security_api::check_token(token)).await
    }
}
