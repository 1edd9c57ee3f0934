//! Given text and/or image inputs, classifies if those inputs are potentially harmful.
use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, OpenAiError};
use derive_builder::Builder;
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Moderation {
    pub id: String,
    pub model: String,
    pub results: Vec<ModerationResult>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ModerationResult {
    pub flagged: bool,
    pub categories: Categories,
    pub category_scores: CategoryScores,
    /// Input types (`text`, `image`) each category was flagged for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_applied_input_types: Option<HashMap<String, Vec<String>>>,
}

macro_rules! categories {
    ($(#[$meta:meta])* $name:ident: $ty:ty) => {
        $(#[$meta])*
        #[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            pub hate: $ty,
            #[serde(rename = "hate/threatening")]
            pub hate_threatening: $ty,
            #[serde(default)]
            pub harassment: $ty,
            #[serde(default, rename = "harassment/threatening")]
            pub harassment_threatening: $ty,
            #[serde(default)]
            pub illicit: $ty,
            #[serde(default, rename = "illicit/violent")]
            pub illicit_violent: $ty,
            #[serde(rename = "self-harm")]
            pub self_harm: $ty,
            #[serde(default, rename = "self-harm/intent")]
            pub self_harm_intent: $ty,
            #[serde(default, rename = "self-harm/instructions")]
            pub self_harm_instructions: $ty,
            pub sexual: $ty,
            #[serde(rename = "sexual/minors")]
            pub sexual_minors: $ty,
            pub violence: $ty,
            #[serde(rename = "violence/graphic")]
            pub violence_graphic: $ty,
        }
    };
}

categories!(Categories: bool);
categories!(CategoryScores: f64);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModerationImageUrl {
    /// Either an image URL or a base64 encoded data URL.
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModerationInputPart {
    Text { text: String },
    ImageUrl { image_url: ModerationImageUrl },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, From)]
#[serde(untagged)]
pub enum ModerationInput {
    String(String),
    Strings(Vec<String>),
    Parts(Vec<ModerationInputPart>),
}

impl From<&str> for ModerationInput {
    fn from(value: &str) -> Self {
        ModerationInput::String(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "ModerationBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct ModerationRequest {
    pub input: ModerationInput,
    /// `omni-moderation-latest` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub model: Option<String>,
}

impl Moderation {
    pub fn builder(input: impl Into<ModerationInput>) -> ModerationBuilder {
        ModerationBuilder::create_empty().input(input)
    }
}

impl ModerationBuilder {
    pub async fn create(self, client: &OpenAiClient) -> ApiResponseOrError<Moderation> {
        client.create_moderation(self.build()?).await
    }
}

impl OpenAiClient {
    pub async fn create_moderation(
        &self,
        request: ModerationRequest,
    ) -> ApiResponseOrError<Moderation> {
        self.post(endpoints::CREATE_MODERATION.render(&[])?, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_result_without_new_categories() {
        let moderation: Moderation = serde_json::from_value(json!({
            "id": "modr-XXXXX",
            "model": "text-moderation-007",
            "results": [{
                "flagged": true,
                "categories": {
                    "hate": false, "hate/threatening": false, "self-harm": false,
                    "sexual": false, "sexual/minors": false,
                    "violence": true, "violence/graphic": false
                },
                "category_scores": {
                    "hate": 0.01, "hate/threatening": 0.0, "self-harm": 0.0,
                    "sexual": 0.0, "sexual/minors": 0.0,
                    "violence": 0.97, "violence/graphic": 0.01
                }
            }]
        }))
        .unwrap();
        let result = &moderation.results[0];
        assert!(result.flagged);
        assert!(result.categories.violence);
        assert!(!result.categories.illicit);
        assert_eq!(result.category_scores.violence, 0.97);
    }

    #[test]
    fn multimodal_input() {
        let request = Moderation::builder(vec![
            ModerationInputPart::Text {
                text: "...text to classify goes here...".to_string(),
            },
            ModerationInputPart::ImageUrl {
                image_url: ModerationImageUrl {
                    url: "https://example.com/image.png".to_string(),
                },
            },
        ])
        .model("omni-moderation-latest")
        .build()
        .unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "input": [
                    { "type": "text", "text": "...text to classify goes here..." },
                    { "type": "image_url", "image_url": { "url": "https://example.com/image.png" } }
                ],
                "model": "omni-moderation-latest"
            })
        );
    }
}
