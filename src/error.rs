//! Error taxonomy of the SDK.
//!
//! Every variant raised by the token lifecycle carries the HTTP status and
//! the response body where one exists, so a failure can be diagnosed from
//! the error alone.

use thiserror::Error;

/// Transport-level failure: the request never produced an HTTP status.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {source} (is_connect={}, is_timeout={})", .source.is_connect(), .source.is_timeout())]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("connection failed: {0}")]
    Connection(String),
}

#[derive(Debug, Error)]
pub enum SdkError {
    /// The token endpoint answered 401: the access/secret key pair is wrong.
    #[error("unable to get security token: token endpoint returned \"401 Unauthorized\" using provided oauth credentials")]
    InvalidOauthCredentials,

    #[error("unable to get security token: status={status}, body={body}")]
    TokenAcquisition { status: u16, body: String },

    /// The request was rejected with 401 although the security service
    /// confirms the bearer token is valid.
    #[error("request unauthorized with a valid token: {body}")]
    UnauthorizedValidToken { body: String },

    #[error("unexpected check token status: status={status}, body={body}")]
    UnexpectedTokenCheckStatus { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A service call returned a non-success status.
    #[error("api error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("unable to decode response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("pipeline gave up after {polls} status polls, {pending} run(s) still pending")]
    PipelineTimeout { polls: u32, pending: usize },
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl SdkError {
    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidOauthCredentials => Some(401),
            Self::TokenAcquisition { status, .. }
            | Self::UnexpectedTokenCheckStatus { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::UnauthorizedValidToken { .. } => Some(401),
            Self::Transport(TransportError::Request { source }) => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
