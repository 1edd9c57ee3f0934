//! Graders score model output, both as eval testing criteria and as the reward
//! of reinforcement fine-tuning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EvalItemRole {
    User,
    Assistant,
    System,
    Developer,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvalContentPart {
    InputText { text: String },
    OutputText { text: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum EvalItemContent {
    Text(String),
    Part(EvalContentPart),
}

/// A templated message; `{{item.field}}` and `{{sample.output_text}}` are substituted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvalItem {
    pub role: EvalItemRole,
    pub content: EvalItemContent,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<MessageLiteral>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLiteral {
    Message,
}

impl EvalItem {
    pub fn new(role: EvalItemRole, content: impl Into<String>) -> Self {
        EvalItem {
            role,
            content: EvalItemContent::Text(content.into()),
            item_type: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StringCheckOperation {
    Eq,
    Ne,
    Like,
    Ilike,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMetric {
    Cosine,
    FuzzyMatch,
    Bleu,
    Gleu,
    Meteor,
    #[serde(rename = "rouge_1")]
    Rouge1,
    #[serde(rename = "rouge_2")]
    Rouge2,
    #[serde(rename = "rouge_3")]
    Rouge3,
    #[serde(rename = "rouge_4")]
    Rouge4,
    #[serde(rename = "rouge_5")]
    Rouge5,
    #[serde(rename = "rouge_l")]
    RougeL,
}

/// `pass_threshold` only applies when the grader is an eval testing criterion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Grader {
    StringCheck {
        name: String,
        input: String,
        reference: String,
        operation: StringCheckOperation,
    },
    TextSimilarity {
        name: String,
        input: String,
        reference: String,
        evaluation_metric: EvaluationMetric,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pass_threshold: Option<f64>,
    },
    Python {
        name: String,
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_tag: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pass_threshold: Option<f64>,
    },
    ScoreModel {
        name: String,
        model: String,
        input: Vec<EvalItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sampling_params: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<[f64; 2]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pass_threshold: Option<f64>,
    },
    LabelModel {
        name: String,
        model: String,
        input: Vec<EvalItem>,
        labels: Vec<String>,
        passing_labels: Vec<String>,
    },
    /// Combines named sub-graders with a formula over their scores.
    Multi {
        name: String,
        graders: HashMap<String, Grader>,
        calculate_output: String,
    },
}

impl Grader {
    pub fn name(&self) -> &str {
        match self {
            Grader::StringCheck { name, .. }
            | Grader::TextSimilarity { name, .. }
            | Grader::Python { name, .. }
            | Grader::ScoreModel { name, .. }
            | Grader::LabelModel { name, .. }
            | Grader::Multi { name, .. } => name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunGraderRequest {
    pub grader: Grader,
    /// Dataset item available to the grader as `item`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<serde_json::Value>,
    pub model_sample: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunGraderResponse {
    pub reward: f64,
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub sub_rewards: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub model_grader_token_usage_per_model: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ValidateGraderRequest {
    pub grader: Grader,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ValidateGraderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grader: Option<Grader>,
}

impl OpenAiClient {
    pub async fn run_grader(&self, request: RunGraderRequest) -> ApiResponseOrError<RunGraderResponse> {
        self.post(endpoints::RUN_GRADER.render(&[])?, request).await
    }

    pub async fn validate_grader(&self, grader: Grader) -> ApiResponseOrError<ValidateGraderResponse> {
        self.post(
            endpoints::VALIDATE_GRADER.render(&[])?,
            ValidateGraderRequest { grader },
        )
        .await
    }
}
