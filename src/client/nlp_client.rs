use std::future::Future;
use std::sync::Arc;

use crate::api::nlp_api;
use crate::auth::executor::AuthenticatedRequestExecutor;
use crate::auth::token_service::{SecurityTokenService, TokenService};
use crate::error::SdkError;
use crate::helpers::time::{Clock, SystemClock};
use crate::messages::nlp::{
    DagRunResponse, GetActiveModelResponse, NmtStatusResponse, PromoteModelResponse,
    SaveDatasetResponse, TrainRequestBody,
};
use crate::transport::executor::{HttpExecutor, ReqwestExecutor};

/// The part of the nlp service the train pipeline drives.
pub trait NmtService: Send + Sync {
    fn nmt_train(&self, body: &TrainRequestBody) -> impl Future<Output = Result<DagRunResponse, SdkError>> + Send;
    fn nmt_status(&self, dag_run_id: &str) -> impl Future<Output = Result<NmtStatusResponse, SdkError>> + Send;
    fn get_active_model(&self, nlp_task: &str) -> impl Future<Output = Result<GetActiveModelResponse, SdkError>> + Send;
    fn promote_model(
        &self,
        model_name: &str,
        nlp_task: &str,
        environment: &str,
    ) -> impl Future<Output = Result<PromoteModelResponse, SdkError>> + Send;
}

/// Calls of the nlp service.
pub struct NlpClient<S = SecurityTokenService<ReqwestExecutor>, H = ReqwestExecutor, C = SystemClock> {
    executor: Arc<AuthenticatedRequestExecutor<S, H, C>>,
}

impl<S, H, C> Clone for NlpClient<S, H, C> {
    fn clone(&self) -> Self {
        Self { executor: self.executor.clone() }
    }
}

impl<S: TokenService, H: HttpExecutor, C: Clock> NlpClient<S, H, C> {
    pub fn new(executor: Arc<AuthenticatedRequestExecutor<S, H, C>>) -> Self {
        Self { executor }
    }

    pub async fn save_dataset<I, L>(
        &self,
        lines: I,
        dataset_id: Option<&str>,
        overwrite: bool,
    ) -> Result<SaveDatasetResponse, SdkError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let descriptor = nlp_api::save_dataset(lines, dataset_id, overwrite);
        self.executor.invoke(&descriptor).await
    }

    pub async fn dag_run_status(&self, dag_id: &str, dag_run_id: &str) -> Result<DagRunResponse, SdkError> {
        self.executor.invoke(&nlp_api::dag_run_status(dag_id, dag_run_id)).await
    }

    pub async fn trigger_dag(&self, dag_id: &str, conf: serde_json::Value) -> Result<DagRunResponse, SdkError> {
        self.executor.invoke(&nlp_api::trigger_dag(dag_id, conf)).await
    }
}

impl<S: TokenService, H: HttpExecutor, C: Clock> NmtService for NlpClient<S, H, C> {
    async fn nmt_train(&self, body: &TrainRequestBody) -> Result<DagRunResponse, SdkError> {
        let descriptor = nlp_api::nmt_train(body)?;
        self.executor.invoke(&descriptor).await
    }

    async fn nmt_status(&self, dag_run_id: &str) -> Result<NmtStatusResponse, SdkError> {
        self.executor.invoke(&nlp_api::nmt_status(dag_run_id)).await
    }

    async fn get_active_model(&self, nlp_task: &str) -> Result<GetActiveModelResponse, SdkError> {
        self.executor.invoke(&nlp_api::get_active_model(nlp_task)).await
    }

    async fn promote_model(
        &self,
        model_name: &str,
        nlp_task: &str,
        environment: &str,
    ) -> Result<PromoteModelResponse, SdkError> {
        self.executor
            .invoke(&nlp_api::promote_model(model_name, nlp_task, environment))
            .await
    }
}
