use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::TransportError;
use crate::transport::request::{GenericResponse, RequestBody, SdkRequest};

/// Executes one wire-level request.
///
/// Implementations must return 4xx/5xx responses as `Ok` and reserve `Err`
/// for failures that produced no HTTP status at all.
pub trait HttpExecutor: Send + Sync {
    fn execute(
        &self,
        request: &SdkRequest,
    ) -> impl Future<Output = Result<GenericResponse, TransportError>> + Send;
}

/// `HttpExecutor` on top of a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: &SdkRequest) -> Result<GenericResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .query(&request.query_params);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Text(text) => builder.body(text.to_owned()),
        };

        debug!("{} {}", request.method, request.url);
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} {} -> {}", request.method, request.url, status.as_u16());

        Ok(GenericResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}
