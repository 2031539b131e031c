#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;

    use crate::api::request_builder::RequestBuilder;
    use crate::api::{config_api, nlp_api, security_api};
    use crate::messages::nlp::TrainRequestBody;
    use crate::transport::request::RequestBody;

    #[test]
    fn native_url_uses_the_url_base() {
        let builder = RequestBuilder::new("localhost", false);
        let request = builder.build(&config_api::test_api(None));

        assert_eq!(request.url, "http://localhost/1.0/config/this/is/a/test");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.header("Content-type"), Some("application/json"));
        assert!(request.header("User-Agent").unwrap().starts_with("graphgrid-sdk/"));
        assert!(request.header("Authorization").is_none());
    }

    #[test]
    fn explicit_scheme_in_url_base_is_kept() {
        let builder = RequestBuilder::new("https://graphgrid.example.com/", false);
        let request = builder.build(&security_api::get_token());

        assert_eq!(request.url, "https://graphgrid.example.com/1.0/security/oauth/token");
    }

    #[test]
    fn docker_url_addresses_the_service_by_name() {
        let builder = RequestBuilder::new("localhost", true);

        assert_eq!(builder.build(&config_api::test_api(None)).url, "http://config:8080/1.0/config/this/is/a/test");
        assert_eq!(
            builder.build(&nlp_api::promote_model("m1", "ner", "default")).url,
            "http://nlp:8080/1.0/nlp/promoteModel/default/ner/m1"
        );
    }

    #[test]
    fn bearer_header_replaces_previous_authorization() {
        let request = RequestBuilder::new("localhost", false)
            .build(&config_api::test_api(Some("hi")))
            .with_bearer("tok1")
            .with_bearer("tok2");

        assert_eq!(request.header("Authorization"), Some("Bearer tok2"));
        assert_eq!(request.query_params.get("message").map(String::as_str), Some("hi"));
    }

    #[test]
    fn get_data_joins_profiles() {
        let descriptor = config_api::get_data("nlp", &["test", "docker"], "2.0");
        assert_eq!(descriptor.api_endpoint(), "config/data/nlp/test,docker/2.0");
    }

    #[test]
    fn save_dataset_endpoint_body_and_overwrite_flag() {
        let descriptor = nlp_api::save_dataset(vec!["{\"a\":1}", "{\"a\":2}"], Some("ds-1"), true);
        assert_eq!(descriptor.api_endpoint(), "nlp/dataset/ds-1/save");
        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.query_params.get("overwrite").map(String::as_str), Some("true"));
        assert_eq!(descriptor.body, RequestBody::Text("{\"a\":1}\n{\"a\":2}".into()));

        let anonymous = nlp_api::save_dataset(Vec::<String>::new(), None, false);
        assert_eq!(anonymous.api_endpoint(), "nlp/dataset/save");
        assert!(anonymous.query_params.is_empty());
    }

    #[test]
    fn nmt_train_wraps_the_body_as_dag_conf() {
        let body = TrainRequestBody::new("named-entity-recognition", json!("ds-1"));
        let descriptor = nlp_api::nmt_train(&body).unwrap();

        assert_eq!(descriptor.api_endpoint(), "nlp/dags/nlp_model_training/dagRuns");
        assert_eq!(
            descriptor.body,
            RequestBody::Json(json!({"conf": {
                "model": "named-entity-recognition",
                "datasets": "ds-1",
                "no_cache": false,
                "GPU": false
            }}))
        );
    }

    #[test]
    fn check_token_carries_token_and_grant_type() {
        let descriptor = security_api::check_token("tok-abc");
        assert_eq!(descriptor.api_endpoint(), "security/oauth/check_token");
        assert_eq!(descriptor.query_params.get("token").map(String::as_str), Some("tok-abc"));
        assert_eq!(descriptor.query_params.get("grant_type").map(String::as_str), Some("client_credentials"));
    }
}
