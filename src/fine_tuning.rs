//! Manage fine-tuning jobs to tailor a model to your specific training data.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, graders::Grader, ApiResponseOrError, DeletionStatus,
    ListResponse, Metadata, OpenAiError,
};

/// The literal string `auto`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AutoLiteral;

impl Serialize for AutoLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("auto")
    }
}

impl<'de> Deserialize<'de> for AutoLiteral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s != "auto" {
            return Err(serde::de::Error::custom("expected auto"));
        }
        Ok(AutoLiteral)
    }
}

/// A hyperparameter that is either `"auto"` or an explicit value.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum AutoOr<T> {
    Auto(AutoLiteral),
    Value(T),
}

impl<T> Default for AutoOr<T> {
    fn default() -> Self {
        AutoOr::Auto(AutoLiteral)
    }
}

impl<T> From<T> for AutoOr<T> {
    fn from(value: T) -> Self {
        AutoOr::Value(value)
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Hyperparameters {
    #[serde(default)]
    pub batch_size: AutoOr<u32>,
    #[serde(default)]
    pub learning_rate_multiplier: AutoOr<f64>,
    #[serde(default)]
    pub n_epochs: AutoOr<u32>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DpoHyperparameters {
    /// Weight of the penalty between the policy and reference model.
    #[serde(default)]
    pub beta: AutoOr<f64>,
    #[serde(default)]
    pub batch_size: AutoOr<u32>,
    #[serde(default)]
    pub learning_rate_multiplier: AutoOr<f64>,
    #[serde(default)]
    pub n_epochs: AutoOr<u32>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SupervisedMethod {
    #[serde(default)]
    pub hyperparameters: Hyperparameters,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DpoMethod {
    #[serde(default)]
    pub hyperparameters: DpoHyperparameters,
}

/// Reinforcement fine-tuning rewards samples with a grader.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ReinforcementMethod {
    pub grader: Grader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<serde_json::Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FineTuneMethod {
    Supervised { supervised: SupervisedMethod },
    Dpo { dpo: DpoMethod },
    Reinforcement { reinforcement: ReinforcementMethod },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WandbIntegration {
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FineTuningIntegration {
    Wandb { wandb: WandbIntegration },
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "FineTuningJobBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateFineTuningJobRequest {
    pub model: String,
    /// A JSONL file uploaded with purpose `fine-tune`.
    pub training_file: String,
    /// Deprecated in favour of `method`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,
    /// Up to 64 characters added to the fine-tuned model name.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<FineTuningIntegration>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<FineTuneMethod>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FineTuningJobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Paused,
    Succeeded,
    Failed,
    Cancelled,
}

impl FineTuningJobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FineTuningJobStatus::Succeeded | FineTuningJobStatus::Failed | FineTuningJobStatus::Cancelled
        )
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FineTuningJobError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FineTuningJob {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FineTuningJobError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine_tuned_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,
    pub model: String,
    pub organization_id: String,
    #[serde(default)]
    pub result_files: Vec<String>,
    pub status: FineTuningJobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_tokens: Option<u64>,
    pub training_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<FineTuningIntegration>>,
    pub seed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_finish: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<FineTuneMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Warn,
    Error,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Message,
    Metrics,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FineTuningJobEvent {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub level: EventLevel,
    pub message: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FineTuningJobCheckpoint {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub fine_tuned_model_checkpoint: String,
    pub fine_tuning_job_id: String,
    pub step_number: u32,
    pub metrics: CheckpointMetrics,
}

/// Metrics at the step of a checkpoint. Validation metrics are absent without a validation file.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CheckpointMetrics {
    pub step: Option<f64>,
    pub train_loss: Option<f64>,
    pub train_mean_token_accuracy: Option<f64>,
    pub valid_loss: Option<f64>,
    pub valid_mean_token_accuracy: Option<f64>,
    pub full_valid_loss: Option<f64>,
    pub full_valid_mean_token_accuracy: Option<f64>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListFineTuningQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Grants another project access to a fine-tuned checkpoint.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FineTuningCheckpointPermission {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub project_id: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateFineTuningCheckpointPermissionRequest {
    pub project_ids: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionOrder {
    Ascending,
    Descending,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListCheckpointPermissionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<PermissionOrder>,
}

impl FineTuningJob {
    pub fn builder(model: &str, training_file: &str) -> FineTuningJobBuilder {
        FineTuningJobBuilder::create_empty()
            .model(model)
            .training_file(training_file)
    }
}

impl FineTuningJobBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<FineTuningJob> {
        client.create_fine_tuning_job(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_fine_tuning_job(
        &self,
        request: CreateFineTuningJobRequest,
    ) -> ApiResponseOrError<FineTuningJob> {
        self.post(endpoints::CREATE_FINE_TUNING_JOB.render(&[])?, request)
            .await
    }

    pub async fn list_paginated_fine_tuning_jobs(
        &self,
        query: &ListFineTuningQuery,
    ) -> ApiResponseOrError<ListResponse<FineTuningJob>> {
        self.get_with_query(endpoints::LIST_PAGINATED_FINE_TUNING_JOBS.render(&[])?, query)
            .await
    }

    pub async fn retrieve_fine_tuning_job(&self, job_id: &str) -> ApiResponseOrError<FineTuningJob> {
        self.get(endpoints::RETRIEVE_FINE_TUNING_JOB.render(&[job_id])?)
            .await
    }

    pub async fn cancel_fine_tuning_job(&self, job_id: &str) -> ApiResponseOrError<FineTuningJob> {
        self.post_empty(endpoints::CANCEL_FINE_TUNING_JOB.render(&[job_id])?)
            .await
    }

    pub async fn pause_fine_tuning_job(&self, job_id: &str) -> ApiResponseOrError<FineTuningJob> {
        self.post_empty(endpoints::PAUSE_FINE_TUNING_JOB.render(&[job_id])?)
            .await
    }

    pub async fn resume_fine_tuning_job(&self, job_id: &str) -> ApiResponseOrError<FineTuningJob> {
        self.post_empty(endpoints::RESUME_FINE_TUNING_JOB.render(&[job_id])?)
            .await
    }

    pub async fn list_fine_tuning_events(
        &self,
        job_id: &str,
        query: &ListFineTuningQuery,
    ) -> ApiResponseOrError<ListResponse<FineTuningJobEvent>> {
        self.get_with_query(endpoints::LIST_FINE_TUNING_EVENTS.render(&[job_id])?, query)
            .await
    }

    pub async fn list_fine_tuning_job_checkpoints(
        &self,
        job_id: &str,
        query: &ListFineTuningQuery,
    ) -> ApiResponseOrError<ListResponse<FineTuningJobCheckpoint>> {
        self.get_with_query(
            endpoints::LIST_FINE_TUNING_JOB_CHECKPOINTS.render(&[job_id])?,
            query,
        )
        .await
    }

    pub async fn list_fine_tuning_checkpoint_permissions(
        &self,
        checkpoint: &str,
        query: &ListCheckpointPermissionsQuery,
    ) -> ApiResponseOrError<ListResponse<FineTuningCheckpointPermission>> {
        self.get_with_query(
            endpoints::LIST_FINE_TUNING_CHECKPOINT_PERMISSIONS.render(&[checkpoint])?,
            query,
        )
        .await
    }

    /// Needs an admin key.
    pub async fn create_fine_tuning_checkpoint_permission(
        &self,
        checkpoint: &str,
        project_ids: Vec<String>,
    ) -> ApiResponseOrError<ListResponse<FineTuningCheckpointPermission>> {
        self.post(
            endpoints::CREATE_FINE_TUNING_CHECKPOINT_PERMISSION.render(&[checkpoint])?,
            CreateFineTuningCheckpointPermissionRequest { project_ids },
        )
        .await
    }

    pub async fn delete_fine_tuning_checkpoint_permission(
        &self,
        checkpoint: &str,
        permission_id: &str,
    ) -> ApiResponseOrError<DeletionStatus> {
        self.delete(
            endpoints::DELETE_FINE_TUNING_CHECKPOINT_PERMISSION.render(&[checkpoint, permission_id])?,
        )
        .await
    }
}
