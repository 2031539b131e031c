use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

use crate::transport::request::BASIC_HEADER_KEY;

/// OAuth client credentials used to obtain and check bearer tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self { access_key: access_key.into(), secret_key: secret_key.into() }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// `Basic base64(access_key:secret_key)`
    pub fn basic_header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.access_key, self.secret_key));
        format!("{} {}", BASIC_HEADER_KEY, encoded)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}
