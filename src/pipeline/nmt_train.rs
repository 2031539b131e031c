//! Train-and-promote pipeline over the NMT training DAG.

use std::time::Duration;

use tracing::{info, warn};

use crate::client::nlp_client::NmtService;
use crate::config::settings::PipelineConfig;
use crate::error::SdkError;
use crate::messages::nlp::{
    ModelMetrics, NmtStatusResponse, NmtTrainPipelineResponse,
    TrainRequestBody,
};

pub const PROMOTION_ENVIRONMENT: &str = "default";

/// Callbacks run for every finished training run.
pub struct PipelineHooks<'a> {
    pub on_success: Option<Box<dyn Fn(&NmtStatusResponse) + Send + Sync + 'a>>,
    pub on_failure: Option<Box<dyn Fn(&NmtStatusResponse) + Send + Sync + 'a>>,
}

impl Default for PipelineHooks<'_> {
    fn default() -> Self {
        Self { on_success: None, on_failure: None }
    }
}

/// Which of two models should be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Active,
    New,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Positive when `new` is better: lower loss and higher accuracy win.
fn score_delta(active_loss: f64, active_acc: f64, new_loss: f64, new_acc: f64) -> f64 {
    let loss_delta = sigmoid(active_loss) - sigmoid(new_loss);
    let acc_delta = new_acc - active_acc;
    loss_delta + acc_delta
}

fn pick(delta: f64) -> ModelChoice {
    if delta >= 0.0 {
        ModelChoice::New
    } else {
        ModelChoice::Active
    }
}

/// Decide whether a freshly trained model should replace the active one.
///
/// Models trained with different properties are not comparable and the
/// newer one wins. Otherwise eval metrics are preferred over training
/// metrics, and without any comparable metric the newer model wins.
pub fn evaluate_models(active: &ModelMetrics, new: &ModelMetrics) -> ModelChoice {
    if active.properties != new.properties {
        return ModelChoice::New;
    }

    if let (Some(new_acc), Some(new_loss)) = (new.eval_accuracy, new.eval_loss) {
        return match (active.eval_accuracy, active.eval_loss) {
            (Some(active_acc), Some(active_loss)) => pick(score_delta(active_loss, active_acc, new_loss, new_acc)),
            _ => ModelChoice::New,
        };
    }

    if let (Some(active_acc), Some(active_loss), Some(new_acc), Some(new_loss)) = (
        active.training_accuracy,
        active.training_loss,
        new.training_accuracy,
        new.training_loss,
    ) {
        return pick(score_delta(active_loss, active_acc, new_loss, new_acc));
    }

    // translation models only report eval loss
    if let (Some(active_loss), Some(new_loss)) = (active.eval_loss, new.eval_loss) {
        return if new_loss <= active_loss { ModelChoice::New } else { ModelChoice::Active };
    }

    ModelChoice::New
}

pub struct NmtTrainPipeline<'n, N> {
    nlp: &'n N,
    poll_interval: Duration,
    max_polls: Option<u32>,
}

impl<'n, N: NmtService> NmtTrainPipeline<'n, N> {
    pub fn new(nlp: &'n N, config: &PipelineConfig) -> Self {
        Self {
            nlp,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: config.max_polls,
        }
    }

    /// Train every model on `datasets`, wait for all runs to finish and,
    /// with `autopromote`, promote each successful model that beats the
    /// currently active one for its task.
    pub async fn run(
        &self,
        models: &[String],
        datasets: serde_json::Value,
        no_cache: bool,
        gpu: bool,
        autopromote: bool,
        hooks: &PipelineHooks<'_>,
    ) -> Result<NmtTrainPipelineResponse, SdkError> {
        let mut run_ids = Vec::with_capacity(models.len());
        for model in models {
            let body = TrainRequestBody { model: model.to_owned(), datasets: datasets.clone(), no_cache, gpu };
            let run = self.nlp.nmt_train(&body).await?;
            info!("triggered training of '{}', dag run '{}'", model, run.dag_run_id);
            run_ids.push(run.dag_run_id);
        }

        let statuses = self.wait_for_runs(&run_ids).await?;

        for status in &statuses {
            if status.run.is_success() {
                if let Some(on_success) = &hooks.on_success {
                    on_success(status);
                }
            } else if let Some(on_failure) = &hooks.on_failure {
                on_failure(status);
            }
        }
        info!("dag training/eval/model upload has finished");

        let mut promoted_models = Vec::new();
        if autopromote {
            for (model, status) in models.iter().zip(&statuses) {
                if !status.run.is_success() {
                    continue;
                }
                if let Some(name) = self.promote_if_better(model, status).await? {
                    promoted_models.push(name);
                }
            }
            info!("model promotion is complete, promoted {:?}", promoted_models);
        }

        Ok(NmtTrainPipelineResponse { statuses, promoted_models })
    }

    async fn wait_for_runs(&self, run_ids: &[String]) -> Result<Vec<NmtStatusResponse>, SdkError> {
        let mut statuses = Vec::with_capacity(run_ids.len());
        for run_id in run_ids {
            statuses.push(self.nlp.nmt_status(run_id).await?);
        }

        let mut polls = 0u32;
        loop {
            let pending = statuses.iter().filter(|s| !s.run.is_finished()).count();
            if pending == 0 {
                return Ok(statuses);
            }
            if self.max_polls.is_some_and(|max| polls >= max) {
                return Err(SdkError::PipelineTimeout { polls, pending });
            }

            info!("...running dag, {} run(s) pending...", pending);
            tokio::time::sleep(self.poll_interval).await;
            polls += 1;

            for (status, run_id) in statuses.iter_mut().zip(run_ids) {
                if !status.run.is_finished() {
                    *status = self.nlp.nmt_status(run_id).await?;
                }
            }
        }
    }

    async fn promote_if_better(&self, nlp_task: &str, status: &NmtStatusResponse) -> Result<Option<String>, SdkError> {
        let Some(model_name) = status.saved_model_name.as_deref() else {
            warn!("run '{}' succeeded without a saved model", status.run.dag_run_id);
            return Ok(None);
        };

        let choice = match self.nlp.get_active_model(nlp_task).await {
            Ok(active) => evaluate_models(&active.trained_model_data.metrics, &status.metrics),
            // first model of the task
            Err(SdkError::Api { status: 404, .. }) => {
                info!("no active model for '{}'", nlp_task);
                ModelChoice::New
            }
            Err(e) => return Err(e),
        };
        if choice == ModelChoice::Active {
            info!("model '{}' not promoted; the active model scores better", model_name);
            return Ok(None);
        }

        match self.nlp.promote_model(model_name, nlp_task, PROMOTION_ENVIRONMENT).await {
            Ok(promoted) => {
                info!("model '{}' has been promoted", promoted.model_name);
                Ok(Some(promoted.model_name))
            }
            Err(SdkError::Api { status, body }) => {
                warn!("error promoting model '{}': {} {}", model_name, status, body);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
