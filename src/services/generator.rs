use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    constants::quiz_prompt::QUIZ_GENERATION_PROMPT,
    errors::{AppError, AppResult},
};

/// Quiz content as produced by the external collaborator, before any
/// invariant checking on our side.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuiz {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub question_title: String,
    pub question_options: Vec<String>,
    pub answer: String,
}

/// The external quiz-generation collaborator: given a video URL it either
/// returns structured quiz content or a `GenerationFailed` error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, video_url: &str) -> AppResult<GeneratedQuiz>;
}

static YOUTUBE_VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/watch\?(?:.*&)?v=|youtube\.com/shorts/|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("YOUTUBE_VIDEO_ID is a valid regex pattern")
});

pub fn extract_video_id(url: &str) -> Option<&str> {
    YOUTUBE_VIDEO_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Chat-completions backed generator speaking the OpenAI wire format.
pub struct OpenAiQuizGenerator {
    client: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiQuizGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.generator_api_base.clone(),
            api_key: config.generator_api_key.clone(),
            model: config.generator_model.clone(),
        }
    }
}

#[async_trait]
impl QuizGenerator for OpenAiQuizGenerator {
    async fn generate(&self, video_url: &str) -> AppResult<GeneratedQuiz> {
        let video_id = extract_video_id(video_url).ok_or_else(|| {
            AppError::GenerationFailed(format!("'{}' is not a YouTube video URL", video_url))
        })?;

        log::info!("Requesting quiz generation for video {}", video_id);

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_GENERATION_PROMPT },
                { "role": "user", "content": format!("Video URL: {}", video_url) }
            ],
            "response_format": { "type": "json_object" }
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Generator request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::GenerationFailed(format!("Failed to read generator response: {}", e))
        })?;

        if !status.is_success() {
            log::warn!("Generator returned {} for video {}", status, video_id);
            return Err(AppError::GenerationFailed(format!(
                "Generator returned {}: {}",
                status, body
            )));
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            AppError::GenerationFailed(format!("Malformed generator response: {}", e))
        })?;

        let content = value["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::GenerationFailed("No content in generator response".to_string())
            })?;

        parse_generated_quiz(content)
    }
}

/// Parses the collaborator's reply into quiz content. Failures come back as
/// `{"error": "<reason>"}`; the quiz itself may arrive bare or wrapped in a
/// `{"success": true, "quiz": {...}}` envelope.
pub fn parse_generated_quiz(content: &str) -> AppResult<GeneratedQuiz> {
    let payload = strip_code_fences(content);

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| AppError::GenerationFailed(format!("Malformed generator output: {}", e)))?;

    if let Some(error) = value.get("error").and_then(|v| v.as_str()) {
        return Err(AppError::GenerationFailed(error.to_string()));
    }
    if value.get("success").and_then(|v| v.as_bool()) == Some(false) {
        return Err(AppError::GenerationFailed(
            "Collaborator reported failure without a reason".to_string(),
        ));
    }

    let quiz_value = match value.get("quiz") {
        Some(wrapped) => wrapped.clone(),
        None => value,
    };

    serde_json::from_value::<GeneratedQuiz>(quiz_value)
        .map_err(|e| AppError::GenerationFailed(format!("Malformed generator output: {}", e)))
}

// Models occasionally wrap JSON output in a markdown fence despite the
// response_format hint.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
