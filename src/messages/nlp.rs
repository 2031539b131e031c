use serde::{Deserialize, Serialize};

pub const DAG_STATE_SUCCESS: &str = "success";
pub const DAG_STATE_FAILED: &str = "failed";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDatasetResponse {
    pub dataset_id: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoteModelResponse {
    pub model_name: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub param_key: Option<String>,
}

/// State of a single DAG run on the orchestration service.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DagRunResponse {
    pub dag_id: String,
    pub dag_run_id: String,
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub logical_date: Option<String>,
    pub external_trigger: bool,
    pub conf: Option<serde_json::Value>,
}

impl DagRunResponse {
    pub fn is_finished(&self) -> bool {
        self.state == DAG_STATE_SUCCESS || self.state == DAG_STATE_FAILED
    }

    pub fn is_success(&self) -> bool {
        self.state == DAG_STATE_SUCCESS
    }
}

/// Training and evaluation metrics of a model.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelMetrics {
    pub training_accuracy: Option<f64>,
    pub training_loss: Option<f64>,
    pub eval_accuracy: Option<f64>,
    pub eval_loss: Option<f64>,
    pub properties: Option<serde_json::Value>,
}

/// DAG run of the NMT training DAG, including the resulting model.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NmtStatusResponse {
    #[serde(flatten)]
    pub run: DagRunResponse,
    pub saved_model_name: Option<String>,
    pub saved_model_filename: Option<String>,
    pub saved_model_url: Option<String>,
    #[serde(flatten)]
    pub metrics: ModelMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainedModelData {
    pub saved_model_name: Option<String>,
    #[serde(flatten)]
    pub metrics: ModelMetrics,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetActiveModelResponse {
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub trained_model_data: TrainedModelData,
}

/// Configuration posted to the NMT training DAG.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrainRequestBody {
    pub model: String,
    pub datasets: serde_json::Value,
    #[serde(default)]
    pub no_cache: bool,
    #[serde(default, rename = "GPU")]
    pub gpu: bool,
}

impl TrainRequestBody {
    pub fn new(model: impl Into<String>, datasets: serde_json::Value) -> Self {
        Self { model: model.into(), datasets, no_cache: false, gpu: false }
    }
}

/// Outcome of a train-and-promote pipeline run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NmtTrainPipelineResponse {
    pub statuses: Vec<NmtStatusResponse>,
    pub promoted_models: Vec<String>,
}
