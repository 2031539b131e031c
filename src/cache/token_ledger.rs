use crate::cache::token::{Token, TOKEN_VALUE_STUB};

/// Tokens are treated as stale this long before their real expiry so that a
/// request never leaves with a token that dies in flight.
pub const TIMEOUT_BUFFER_MS: i64 = 3000;

/// Holds the single live bearer token of an SDK session.
///
/// All times are unix milliseconds. The boundary is strict: a token is ready
/// while `now < expires_at - TIMEOUT_BUFFER_MS` and expired from
/// `now >= expires_at - TIMEOUT_BUFFER_MS` on.
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    token: Option<Token>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self { token: None }
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }

    /// An absent token is not expired; it is simply not ready.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.token
            .as_ref()
            .map(|token| now_ms >= token.expires_at_ms().saturating_sub(TIMEOUT_BUFFER_MS))
            .unwrap_or(false)
    }

    pub fn is_ready(&self, now_ms: i64) -> bool {
        self.is_present() && !self.is_expired(now_ms)
    }

    pub fn store(&mut self, token: Token) {
        self.token = Some(token);
    }

    /// Current token value, or an empty string when nothing was stored yet.
    pub fn current(&self) -> &str {
        self.token
            .as_ref()
            .map(|token| token.value.as_str())
            .unwrap_or(TOKEN_VALUE_STUB)
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
