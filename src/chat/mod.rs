// HelloFlint chat proxy: upstream Gemini client, mode selection, and the
// degraded-mode reply table behind POST /api/chat.
pub mod assistant;
pub mod client;
pub mod knowledge;

pub use assistant::ChatAssistant;
pub use client::{GeminiClient, GeminiError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn of a conversation transcript. Ephemeral: held only for the
/// request/response cycle, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    /// Lenient extraction from a raw transcript array. Entries that are not
    /// objects, or whose fields are not strings, degrade to empty strings
    /// rather than erroring.
    pub fn from_values(values: &[Value]) -> Vec<ChatMessage> {
        values
            .iter()
            .map(|entry| ChatMessage {
                role: entry
                    .get("role")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                content: entry
                    .get("content")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }
}
