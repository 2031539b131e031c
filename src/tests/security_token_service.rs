#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    use crate::api::request_builder::RequestBuilder;
    use crate::auth::credentials::Credentials;
    use crate::auth::token_service::{SecurityTokenService, TokenAcquisition, TokenService};
    use crate::config::settings::ExpiryUnit;
    use crate::error::{SdkError, TransportError};
    use crate::transport::executor::ReqwestExecutor;

    const BASIC: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

    fn service(server: &MockServer, unit: ExpiryUnit) -> SecurityTokenService<ReqwestExecutor> {
        SecurityTokenService::new(
            Credentials::new("client-id", "client-secret"),
            RequestBuilder::new(server.address().to_string(), false),
            Arc::new(ReqwestExecutor::new(reqwest::Client::new())),
            unit,
        )
    }

    #[test]
    fn basic_header_encodes_access_and_secret_key() {
        let credentials = Credentials::new("client-id", "client-secret");
        assert_eq!(credentials.basic_header_value(), BASIC);
        assert!(!format!("{:?}", credentials).contains("client-secret"));
    }

    #[tokio::test]
    async fn acquire_token_posts_client_credentials_with_basic_auth() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/1.0/security/oauth/token")
                .query_param("grant_type", "client_credentials")
                .header("Authorization", BASIC);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "access_token": "tok-abc",
                    "expires_in": 3600,
                    "token_type": "bearer",
                    "createdAt": "2026-10-19T10:00:00Z"
                }));
        });

        let acquisition = service(&server, ExpiryUnit::Seconds).acquire_token().await.unwrap();

        mock.assert();
        assert_eq!(acquisition, TokenAcquisition::Granted { value: "tok-abc".into(), expires_in_ms: 3_600_000 });
    }

    #[tokio::test]
    async fn expires_in_is_milliseconds_by_default_and_may_be_a_string() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/1.0/security/oauth/token");
            then.status(200).json_body(json!({"access_token": "tok", "expires_in": "120000"}));
        });

        let acquisition = service(&server, ExpiryUnit::default()).acquire_token().await.unwrap();

        assert_eq!(acquisition, TokenAcquisition::Granted { value: "tok".into(), expires_in_ms: 120_000 });
    }

    #[tokio::test]
    async fn rejected_acquisition_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/1.0/security/oauth/token");
            then.status(401).body("{\"error\":\"unauthorized\"}");
        });

        let acquisition = service(&server, ExpiryUnit::Seconds).acquire_token().await.unwrap();

        assert_eq!(
            acquisition,
            TokenAcquisition::Rejected { status: 401, body: "{\"error\":\"unauthorized\"}".into() }
        );
    }

    #[tokio::test]
    async fn malformed_token_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/1.0/security/oauth/token");
            then.status(200).body("not json");
        });

        let err = service(&server, ExpiryUnit::Seconds).acquire_token().await.unwrap_err();

        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[tokio::test]
    async fn check_token_sends_the_token_and_reports_the_status() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/1.0/security/oauth/check_token")
                .query_param("grant_type", "client_credentials")
                .query_param("token", "tok-abc")
                .header("Authorization", BASIC);
            then.status(400).body("{\"error\":\"invalid_token\"}");
        });

        let check = service(&server, ExpiryUnit::Seconds).check_token("tok-abc").await.unwrap();

        mock.assert();
        assert_eq!(check.status, 400);
        assert_eq!(check.body, "{\"error\":\"invalid_token\"}");
    }

    #[tokio::test]
    async fn unreachable_security_service_is_a_transport_error() {
        let service = SecurityTokenService::new(
            Credentials::new("client-id", "client-secret"),
            RequestBuilder::new("127.0.0.1:1", false),
            Arc::new(ReqwestExecutor::new(reqwest::Client::new())),
            ExpiryUnit::Seconds,
        );

        let err = service.acquire_token().await.unwrap_err();

        assert!(matches!(err, SdkError::Transport(TransportError::Request { .. })), "{:?}", err);
        assert!(err.to_string().contains("is_connect=true"), "{}", err);
        assert_eq!(err.status(), None);
    }
}
