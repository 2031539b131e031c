use http::Method;
use serde_json::json;

use crate::api::descriptor::{ApiDescriptor, ServiceBase};
use crate::error::SdkError;
use crate::messages::nlp::{
    DagRunResponse, GetActiveModelResponse, NmtStatusResponse, PromoteModelResponse,
    SaveDatasetResponse, TrainRequestBody,
};
use crate::transport::request::{GenericResponse, RequestBody};

/// DAG that trains, evaluates and uploads NLP models.
pub const NMT_DAG_ID: &str = "nlp_model_training";

/// Upload a dataset, one record per line.
pub fn save_dataset<I, S>(lines: I, dataset_id: Option<&str>, overwrite: bool) -> ApiDescriptor<SaveDatasetResponse>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let endpoint = match dataset_id {
        Some(id) if !id.is_empty() => format!("dataset/{}/save", id),
        _ => "dataset/save".to_owned(),
    };
    let body = lines
        .into_iter()
        .map(|line| line.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n");

    let descriptor = ApiDescriptor::new(ServiceBase::Nlp, Method::POST, endpoint, json_handler::<SaveDatasetResponse>)
        .body(RequestBody::Text(body));
    if overwrite {
        descriptor.query("overwrite", "true")
    } else {
        descriptor
    }
}

pub fn promote_model(model_name: &str, nlp_task: &str, environment: &str) -> ApiDescriptor<PromoteModelResponse> {
    ApiDescriptor::new(
        ServiceBase::Nlp,
        Method::POST,
        format!("promoteModel/{}/{}/{}", environment, nlp_task, model_name),
        json_handler::<PromoteModelResponse>,
    )
}

pub fn get_active_model(nlp_task: &str) -> ApiDescriptor<GetActiveModelResponse> {
    ApiDescriptor::new(
        ServiceBase::Nlp,
        Method::GET,
        format!("activeModel/{}", nlp_task),
        json_handler::<GetActiveModelResponse>,
    )
}

pub fn dag_run_status(dag_id: &str, dag_run_id: &str) -> ApiDescriptor<DagRunResponse> {
    ApiDescriptor::new(
        ServiceBase::Nlp,
        Method::GET,
        format!("dags/{}/dagRuns/{}", dag_id, dag_run_id),
        json_handler::<DagRunResponse>,
    )
}

/// Start a run of `dag_id`; `conf` is handed to the DAG as its run config.
pub fn trigger_dag(dag_id: &str, conf: serde_json::Value) -> ApiDescriptor<DagRunResponse> {
    ApiDescriptor::new(
        ServiceBase::Nlp,
        Method::POST,
        format!("dags/{}/dagRuns", dag_id),
        json_handler::<DagRunResponse>,
    )
    .body(RequestBody::Json(json!({ "conf": conf })))
}

pub fn nmt_status(dag_run_id: &str) -> ApiDescriptor<NmtStatusResponse> {
    ApiDescriptor::new(
        ServiceBase::Nlp,
        Method::GET,
        format!("dags/{}/dagRuns/{}", NMT_DAG_ID, dag_run_id),
        json_handler::<NmtStatusResponse>,
    )
}

pub fn nmt_train(request_body: &TrainRequestBody) -> Result<ApiDescriptor<DagRunResponse>, SdkError> {
    let conf = serde_json::to_value(request_body)?;
    Ok(trigger_dag(NMT_DAG_ID, conf))
}

fn json_handler<T: serde::de::DeserializeOwned>(response: GenericResponse) -> Result<T, SdkError> {
    response.json()
}
