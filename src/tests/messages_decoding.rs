#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::messages::config::GetDataResponse;
    use crate::messages::nlp::{GetActiveModelResponse, NmtStatusResponse, SaveDatasetResponse};
    use crate::messages::security::GetTokenResponse;
    use crate::transport::request::GenericResponse;

    #[test]
    fn nmt_status_carries_run_model_and_metrics() {
        let status: NmtStatusResponse = serde_json::from_value(json!({
            "dagId": "nlp_model_training",
            "dagRunId": "manual__2026-10-19",
            "state": "success",
            "savedModelName": "ner-2026",
            "savedModelFilename": "ner-2026.tar.gz",
            "evalAccuracy": 0.91,
            "evalLoss": 0.12,
            "properties": {"labels": 9}
        }))
        .unwrap();

        assert!(status.run.is_finished());
        assert!(status.run.is_success());
        assert_eq!(status.run.dag_run_id, "manual__2026-10-19");
        assert_eq!(status.saved_model_name.as_deref(), Some("ner-2026"));
        assert_eq!(status.metrics.eval_accuracy, Some(0.91));
        assert_eq!(status.metrics.training_loss, None);
        assert_eq!(status.metrics.properties, Some(json!({"labels": 9})));
    }

    #[test]
    fn running_status_without_model_decodes() {
        let status: NmtStatusResponse =
            serde_json::from_value(json!({"dagRunId": "r1", "state": "running"})).unwrap();

        assert!(!status.run.is_finished());
        assert_eq!(status.saved_model_name, None);
    }

    #[test]
    fn active_model_metrics_decode() {
        let active: GetActiveModelResponse = serde_json::from_value(json!({
            "modelName": "ner-2025",
            "trainedModelData": {"savedModelName": "ner-2025", "trainingAccuracy": 0.8, "trainingLoss": 0.3}
        }))
        .unwrap();

        assert_eq!(active.trained_model_data.metrics.training_accuracy, Some(0.8));
    }

    #[test]
    fn token_expiry_accepts_floats() {
        let token: GetTokenResponse =
            serde_json::from_value(json!({"access_token": "t", "expires_in": 59999.7})).unwrap();
        assert_eq!(token.expires_in, 59999);

        assert!(serde_json::from_value::<GetTokenResponse>(json!({"access_token": "t", "expires_in": "soon"})).is_err());
    }

    #[test]
    fn property_lookup_follows_source_order() {
        let data: GetDataResponse = serde_json::from_value(json!({
            "name": "nlp",
            "profiles": ["docker"],
            "propertySources": [
                {"name": "nlp-docker.properties", "source": {"nlp.threads": 8}},
                {"name": "nlp.properties", "source": {"nlp.threads": 2, "nlp.gpu": false}}
            ]
        }))
        .unwrap();

        assert_eq!(data.property("nlp.threads"), Some(&json!(8)));
        assert_eq!(data.property("nlp.gpu"), Some(&json!(false)));
        assert_eq!(data.property("nlp.missing"), None);
    }

    #[test]
    fn non_success_response_is_an_api_error() {
        let response = GenericResponse::new(500, "boom");
        assert_eq!(response.status_text, "Internal Server Error");

        let err = response.json::<SaveDatasetResponse>().unwrap_err();
        assert_eq!(err.status(), Some(500));

        let ok = GenericResponse::new(200, r#"{"datasetId": "ds-1", "path": "datasets/ds-1"}"#);
        assert_eq!(ok.json::<SaveDatasetResponse>().unwrap().dataset_id, "ds-1");
    }
}
