#[cfg(test)]
mod test {
    use crate::cache::token::Token;
    use crate::cache::token_ledger::{TokenLedger, TIMEOUT_BUFFER_MS};

    #[test]
    fn fresh_ledger_is_neither_present_nor_ready() {
        let ledger = TokenLedger::new();
        for now in [i64::MIN, -1, 0, 1, 7_000, i64::MAX] {
            assert!(!ledger.is_present());
            assert!(!ledger.is_ready(now));
            assert!(!ledger.is_expired(now));
        }
        assert_eq!(ledger.current(), "");
    }

    #[test]
    fn readiness_ends_exactly_one_buffer_before_expiry() {
        let mut ledger = TokenLedger::new();
        let (issued, expires_in) = (1_000_000, 10_000);
        ledger.store(Token::new("tok".into(), expires_in, issued));

        let boundary = issued + expires_in - TIMEOUT_BUFFER_MS;
        assert!(ledger.is_ready(issued));
        assert!(ledger.is_ready(boundary - 1));
        assert!(!ledger.is_ready(boundary));
        assert!(ledger.is_expired(boundary));
        assert!(!ledger.is_ready(boundary + 1));
        assert!(ledger.is_present());
    }

    #[test]
    fn store_replaces_the_token_wholesale() {
        let mut ledger = TokenLedger::new();
        ledger.store(Token::new("old".into(), 1_000, 0));
        assert!(!ledger.is_ready(0));

        ledger.store(Token::new("new".into(), 60_000, 5_000));
        assert_eq!(ledger.current(), "new");
        assert_eq!(ledger.token().map(|t| t.expires_at_ms()), Some(65_000));
        assert!(ledger.is_ready(5_000));
    }

    #[test]
    fn token_shorter_than_the_buffer_is_never_ready() {
        let mut ledger = TokenLedger::new();
        ledger.store(Token::new("short".into(), TIMEOUT_BUFFER_MS, 0));
        assert!(ledger.is_present());
        assert!(!ledger.is_ready(0));
    }
}
