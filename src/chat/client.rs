use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ChatMessage;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Errors from the upstream generative-language API. The assistant folds
/// every variant into a friendly reply; nothing here reaches clients as an
/// error status.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No completion text in upstream response")]
    EmptyCompletion,
}

/// Minimal client for `models/{model}:generateContent`.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct UpstreamTurn {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at an alternative endpoint, used by tests.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Request a single completion for the transcript under the given system
    /// instruction. Returns the concatenated text parts of the first
    /// candidate.
    pub async fn generate(
        &self,
        system_instruction: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "system_instruction": { "parts": [{ "text": system_instruction }] },
            "contents": to_upstream_turns(messages),
            "generationConfig": { "temperature": temperature },
        });

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body_text));
        }

        let completion: GenerateContentResponse = response.json().await?;
        completion_text(&completion).ok_or(GeminiError::EmptyCompletion)
    }
}

/// Map a transcript to the upstream turn format: the `assistant` role becomes
/// the upstream's `model` label, everything else is passed as `user`.
fn to_upstream_turns(messages: &[ChatMessage]) -> Vec<UpstreamTurn> {
    messages
        .iter()
        .map(|message| UpstreamTurn {
            role: if message.role == "assistant" {
                "model"
            } else {
                "user"
            },
            parts: vec![TextPart {
                text: message.content.clone(),
            }],
        })
        .collect()
}

fn completion_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    if text.is_empty() { None } else { Some(text) }
}

/// HTTP 429 and quota-exhaustion statuses are rate limits; everything else
/// non-success is a plain API error.
fn classify_api_error(status: u16, body: &str) -> GeminiError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    match detail {
        Some(detail) => {
            if status == 429 || detail.status == "RESOURCE_EXHAUSTED" {
                GeminiError::RateLimited(detail.message)
            } else {
                GeminiError::Api {
                    status,
                    message: detail.message,
                }
            }
        }
        None => {
            if status == 429 {
                GeminiError::RateLimited(body.to_string())
            } else {
                GeminiError::Api {
                    status,
                    message: body.to_string(),
                }
            }
        }
    }
}
