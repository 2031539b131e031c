pub const TOKEN_VALUE_STUB: &str = "";

/// Bearer token issued by the security service.
///
/// Built once from a successful acquisition and never mutated; a later
/// acquisition replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub expires_in_ms: i64,
    pub issued_at_ms: i64, // UNIX TIMESTAMP, ms
}

impl Token {
    pub fn new(value: String, expires_in_ms: i64, issued_at_ms: i64) -> Self {
        Self { value, expires_in_ms, issued_at_ms }
    }

    pub fn expires_at_ms(&self) -> i64 {
        self.issued_at_ms.saturating_add(self.expires_in_ms)
    }
}
