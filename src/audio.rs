//! Turn text into speech, and audio into text.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, files::FileUpload, ApiResponseOrError, OpenAiError};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpeechResponseFormat {
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "SpeechBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateSpeechRequest {
    /// `tts-1`, `tts-1-hd` or `gpt-4o-mini-tts`.
    pub model: String,
    /// At most 4096 characters.
    pub input: String,
    /// e.g. `alloy`, `ash`, `coral` or `verse`.
    pub voice: String,
    /// Does not work with `tts-1` or `tts-1-hd`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<SpeechResponseFormat>,
    /// From 0.25 to 4.0, 1.0 by default.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudioResponseFormat {
    Json,
    Text,
    Srt,
    VerboseJson,
    Vtt,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimestampGranularity {
    Word,
    Segment,
}

/// The text fields of a transcription; the audio travels as the `file` part.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "TranscriptionBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateTranscriptionRequest {
    /// `whisper-1`, `gpt-4o-transcribe` or `gpt-4o-mini-transcribe`.
    pub model: String,
    /// ISO-639-1 code of the input audio.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Only `json` for the `gpt-4o` transcription models.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AudioResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Requires `response_format` set to `verbose_json`.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_granularities: Option<Vec<TimestampGranularity>>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, PartialEq)]
#[builder(pattern = "owned")]
#[builder(name = "TranslationBuilder")]
#[builder(setter(strip_option, into))]
#[builder(build_fn(error = "OpenAiError"))]
pub struct CreateTranslationRequest {
    /// Only `whisper-1` is available.
    pub model: String,
    /// Should be in English.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AudioResponseFormat>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A `json` or `verbose_json` transcription.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Transcription {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<TranscriptionWord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TranscriptionSegment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<Vec<TranscriptionLogprob>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TranscriptionSegment>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TranscriptionWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TranscriptionSegment {
    pub id: u32,
    pub seek: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Vec<u32>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TranscriptionLogprob {
    pub token: String,
    pub logprob: f64,
    pub bytes: Vec<u8>,
}

impl Transcription {
    pub fn builder(model: &str) -> TranscriptionBuilder {
        TranscriptionBuilder::create_empty().model(model)
    }
}

impl TranscriptionBuilder {
    pub async fn create(
        self,
        client: &OpenAiClient,
        file: FileUpload,
    ) -> ApiResponseOrError<Transcription> {
        client.create_transcription(file, self.build()?).await
    }
}

impl OpenAiClient {
    /// Returns the generated audio in the requested format.
    pub async fn create_speech(&self, request: CreateSpeechRequest) -> ApiResponseOrError<Vec<u8>> {
        self.post_bytes(endpoints::CREATE_SPEECH.render(&[])?, request)
            .await
    }

    /// Transcribes `file`. Only JSON response formats can be decoded as a [`Transcription`];
    /// use [`OpenAiClient::call`] for `text`, `srt` or `vtt`.
    pub async fn create_transcription(
        &self,
        file: FileUpload,
        request: CreateTranscriptionRequest,
    ) -> ApiResponseOrError<Transcription> {
        self.post_multipart(
            endpoints::CREATE_TRANSCRIPTION.render(&[])?,
            &request,
            vec![("file".to_string(), file)],
        )
        .await
    }

    /// Translates `file` into English.
    pub async fn create_translation(
        &self,
        file: FileUpload,
        request: CreateTranslationRequest,
    ) -> ApiResponseOrError<Translation> {
        self.post_multipart(
            endpoints::CREATE_TRANSLATION.render(&[])?,
            &request,
            vec![("file".to_string(), file)],
        )
        .await
    }
}
