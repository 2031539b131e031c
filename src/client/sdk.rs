use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api::request_builder::RequestBuilder;
use crate::auth::executor::AuthenticatedRequestExecutor;
use crate::auth::token_service::SecurityTokenService;
use crate::client::config_client::ConfigClient;
use crate::client::nlp_client::{NlpClient, NmtService};
use crate::config::settings::SdkConfig;
use crate::config::validator::validate_sdk_config;
use crate::error::SdkError;
use crate::helpers::time::SystemClock;
use crate::messages::config::{GetDataResponse, TestApiResponse};
use crate::messages::nlp::{
    DagRunResponse, GetActiveModelResponse, NmtStatusResponse, NmtTrainPipelineResponse,
    PromoteModelResponse, SaveDatasetResponse, TrainRequestBody,
};
use crate::observability::metrics::Metrics;
use crate::pipeline::nmt_train::{NmtTrainPipeline, PipelineHooks};
use crate::transport::executor::ReqwestExecutor;

pub type SdkExecutor = AuthenticatedRequestExecutor<SecurityTokenService<ReqwestExecutor>, ReqwestExecutor, SystemClock>;

/// One SDK session: a config, one token ledger and the clients sharing it.
///
/// Build it once and pass it (or clones of its clients) to whoever needs
/// to call the services.
pub struct GraphGridSdk {
    config: SdkConfig,
    executor: Arc<SdkExecutor>,
    config_client: ConfigClient,
    nlp_client: NlpClient,
}

impl GraphGridSdk {
    /// Validates `config` and wires the session. No call is made yet; the
    /// first token is fetched by the first request.
    pub fn new(config: SdkConfig) -> Result<Self, SdkError> {
        validate_sdk_config(&config).map_err(|errors| SdkError::Config(errors.join("; ")))?;

        let http = Arc::new(ReqwestExecutor::with_timeout(Duration::from_millis(config.http.timeout_ms))?);
        let builder = RequestBuilder::new(config.url_base.to_owned(), config.docker_context);
        let token_service = SecurityTokenService::new(
            config.credentials(),
            builder.clone(),
            http.clone(),
            config.token.expiry_unit,
        );
        let executor = Arc::new(AuthenticatedRequestExecutor::new(
            token_service,
            http,
            SystemClock,
            builder,
            Metrics::new(),
        ));

        info!(
            "SDK session for '{}' (docker context: {})",
            config.url_base, config.docker_context
        );
        Ok(Self {
            config_client: ConfigClient::new(executor.clone()),
            nlp_client: NlpClient::new(executor.clone()),
            executor,
            config,
        })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn executor(&self) -> &Arc<SdkExecutor> {
        &self.executor
    }

    pub fn config_client(&self) -> &ConfigClient {
        &self.config_client
    }

    pub fn nlp_client(&self) -> &NlpClient {
        &self.nlp_client
    }

    pub fn metrics_text(&self) -> String {
        self.executor.metrics().gather_text()
    }

    pub async fn test_api(&self, message: Option<&str>) -> Result<TestApiResponse, SdkError> {
        self.config_client.test_api(message).await
    }

    pub async fn get_data<P: AsRef<str>>(
        &self,
        module: &str,
        profiles: &[P],
        revision: &str,
    ) -> Result<GetDataResponse, SdkError> {
        self.config_client.get_data(module, profiles, revision).await
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
        self.nlp_client.save_dataset(lines, dataset_id, overwrite).await
    }

    pub async fn promote_model(
        &self,
        model_name: &str,
        nlp_task: &str,
        environment: &str,
    ) -> Result<PromoteModelResponse, SdkError> {
        self.nlp_client.promote_model(model_name, nlp_task, environment).await
    }

    pub async fn get_active_model(&self, nlp_task: &str) -> Result<GetActiveModelResponse, SdkError> {
        self.nlp_client.get_active_model(nlp_task).await
    }

    pub async fn job_status(&self, dag_id: &str, dag_run_id: &str) -> Result<DagRunResponse, SdkError> {
        self.nlp_client.dag_run_status(dag_id, dag_run_id).await
    }

    pub async fn job_run(&self, dag_id: &str, conf: serde_json::Value) -> Result<DagRunResponse, SdkError> {
        self.nlp_client.trigger_dag(dag_id, conf).await
    }

    pub async fn nmt_status(&self, dag_run_id: &str) -> Result<NmtStatusResponse, SdkError> {
        self.nlp_client.nmt_status(dag_run_id).await
    }

    pub async fn nmt_train(&self, request_body: &TrainRequestBody) -> Result<DagRunResponse, SdkError> {
        self.nlp_client.nmt_train(request_body).await
    }

    pub async fn nmt_train_pipeline(
        &self,
        models: &[String],
        datasets: serde_json::Value,
        no_cache: bool,
        gpu: bool,
        autopromote: bool,
        hooks: &PipelineHooks<'_>,
    ) -> Result<NmtTrainPipelineResponse, SdkError> {
        NmtTrainPipeline::new(&self.nlp_client, &self.config.pipeline)
            .run(models, datasets, no_cache, gpu, autopromote, hooks)
            .await
    }
}
