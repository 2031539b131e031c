use http::Method;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::SdkError;
use crate::transport::request::{
    GenericResponse, RequestBody, CONTENT_TYPE_APP_JSON, CONTENT_TYPE_HEADER_KEY,
    USER_AGENT_HEADER_KEY,
};

pub const USER_AGENT: &str = concat!("graphgrid-sdk/", env!("CARGO_PKG_VERSION"));

/// Remote service an endpoint belongs to. Doubles as the first path segment
/// and, in a docker network, as the host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceBase {
    Config,
    Security,
    Nlp,
}

impl ServiceBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceBase::Config => "config",
            ServiceBase::Security => "security",
            ServiceBase::Nlp => "nlp",
        }
    }
}

impl fmt::Display for ServiceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ResponseHandler<T> = fn(GenericResponse) -> Result<T, SdkError>;

/// Everything needed to perform one api call, independent of transport:
/// where it goes, what it carries and how its response is parsed.
pub struct ApiDescriptor<T> {
    pub service: ServiceBase,
    pub endpoint: String,
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, String>,
    pub body: RequestBody,
    pub handler: ResponseHandler<T>,
}

impl<T> ApiDescriptor<T> {
    pub fn new(service: ServiceBase, method: Method, endpoint: impl Into<String>, handler: ResponseHandler<T>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER_KEY.to_owned(), CONTENT_TYPE_APP_JSON.to_owned());
        headers.insert(USER_AGENT_HEADER_KEY.to_owned(), USER_AGENT.to_owned());
        Self {
            service,
            endpoint: endpoint.into(),
            method,
            headers,
            query_params: BTreeMap::new(),
            body: RequestBody::Empty,
            handler,
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query_params.insert(key.to_owned(), value.into());
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.insert(key.to_owned(), value.into());
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// `service/endpoint`, e.g. `security/oauth/token`.
    pub fn api_endpoint(&self) -> String {
        format!("{}/{}", self.service, self.endpoint)
    }

    pub fn handle(&self, response: GenericResponse) -> Result<T, SdkError> {
        (self.handler)(response)
    }
}

impl<T> Clone for ApiDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service,
            endpoint: self.endpoint.clone(),
            method: self.method.clone(),
            headers: self.headers.clone(),
            query_params: self.query_params.clone(),
            body: self.body.clone(),
            handler: self.handler,
        }
    }
}

impl<T> fmt::Debug for ApiDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDescriptor")
            .field("service", &self.service)
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("headers", &self.headers)
            .field("query_params", &self.query_params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Handler returning the raw response untouched.
pub fn raw_response(response: GenericResponse) -> Result<GenericResponse, SdkError> {
    Ok(response)
}
