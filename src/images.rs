//! Given a prompt and/or an input image, the model will generate a new image.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, files::FileUpload, ApiResponseOrError, OpenAiError};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImagesResponse {
    pub created: u64,
    pub data: Vec<Image>,
    /// Only reported for `gpt-image-1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ImagesUsage>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// Only for `dall-e-3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImagesUsage {
    pub total_tokens: u32,
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens_details: Option<ImagesInputTokensDetails>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImagesInputTokensDetails {
    pub text_tokens: u32,
    pub image_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    Natural,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateImageBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateImageRequest {
    pub prompt: String,
    /// `dall-e-2`, `dall-e-3` or `gpt-image-1`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Between 1 and 10; only 1 for `dall-e-3`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u8>,
    /// `auto`, `high`, `medium`, `low`, `hd` or `standard` depending on the model.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Not supported by `gpt-image-1`, which always returns base64.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,
    /// e.g. `1024x1024`, `1536x1024` or `auto`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
    /// `transparent`, `opaque` or `auto`; `gpt-image-1` only.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation: Option<String>,
    /// 0 to 100, for `webp` and `jpeg` outputs.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_compression: Option<u8>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// The text fields of an image edit; images and mask travel as file parts.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "CreateImageEditBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateImageEditRequest {
    pub prompt: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u8>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateImageVariationRequest {
    /// Only `dall-e-2` is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl OpenAiClient {
    pub async fn create_image(&self, request: CreateImageRequest) -> ApiResponseOrError<ImagesResponse> {
        self.post(endpoints::CREATE_IMAGE.render(&[])?, request).await
    }

    /// Edits one or more images. Several images are only accepted by `gpt-image-1`.
    pub async fn create_image_edit(
        &self,
        images: Vec<FileUpload>,
        mask: Option<FileUpload>,
        request: CreateImageEditRequest,
    ) -> ApiResponseOrError<ImagesResponse> {
        let field = if images.len() > 1 { "image[]" } else { "image" };
        let mut files: Vec<(String, FileUpload)> = images
            .into_iter()
            .map(|image| (field.to_string(), image))
            .collect();
        if let Some(mask) = mask {
            files.push(("mask".to_string(), mask));
        }
        self.post_multipart(endpoints::CREATE_IMAGE_EDIT.render(&[])?, &request, files)
            .await
    }

    pub async fn create_image_variation(
        &self,
        image: FileUpload,
        request: CreateImageVariationRequest,
    ) -> ApiResponseOrError<ImagesResponse> {
        self.post_multipart(
            endpoints::CREATE_IMAGE_VARIATION.render(&[])?,
            &request,
            vec![("image".to_string(), image)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_request() {
        let request = CreateImageBuilder::create_empty()
            .prompt("A cute baby sea otter")
            .model("dall-e-3")
            .size("1024x1024")
            .response_format(ImageResponseFormat::B64Json)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "prompt": "A cute baby sea otter",
                "model": "dall-e-3",
                "size": "1024x1024",
                "response_format": "b64_json"
            })
        );
    }

    #[test]
    fn images_response() {
        let response: ImagesResponse = serde_json::from_value(json!({
            "created": 1713833628,
            "data": [{ "b64_json": "iVBORw0KGgo=" }],
            "usage": {
                "total_tokens": 100,
                "input_tokens": 50,
                "output_tokens": 50,
                "input_tokens_details": { "text_tokens": 10, "image_tokens": 40 }
            }
        }))
        .unwrap();
        assert_eq!(response.data[0].url, None);
        assert_eq!(response.usage.unwrap().input_tokens_details.unwrap().image_tokens, 40);
    }
}
