use log::{error, info};

use super::{ChatMessage, GeminiClient, GeminiError, knowledge};
use crate::config::GeminiConfig;

const CHAT_TEMPERATURE: f32 = 0.7;

/// Ordered keyword rules for degraded mode, evaluated in a single pass over
/// the lowercased content of the most recent message. First rule with any
/// matching keyword wins.
struct CannedRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const CANNED_RULES: &[CannedRule] = &[
    CannedRule {
        keywords: &["package", "pricing"],
        reply: "Ah, you're asking about our elite packages. Our Managed Sprints offer a fixed \
                setup fee and scalable monthly support. It's built for founders who value \
                outcomes over hours. (Note: Neural link disconnected. Awaiting GEMINI_API_KEY \
                to access full package matrices.)",
    },
    CannedRule {
        keywords: &["hello"],
        reply: "Greetings. I am HelloFlint. I am currently running on a constrained neural \
                pathway (Mock Mode), but my aesthetic and function are undeniable. How can I \
                streamline your digital systems today?",
    },
];

const OFFLINE_REPLY: &str =
    "I am operating in highly secured mock mode without an active neural link (API key). But \
     make no mistake, my core protocols are fully intact. Once Chris connects my Gemini brain, \
     I will synthesize your enquiries at lightspeed. What else would you like to know about \
     Bright Loop's architecture?";

const RATE_LIMITED_REPLY: &str =
    "My quantum core is currently recharging (Google API Rate Limit Exceeded). Please try \
     again in about 60 seconds, or connect a billing account to my neural link for unlimited \
     processing.";

enum AssistantMode {
    Degraded,
    Live(GeminiClient),
}

/// Converts a conversation transcript into a single reply. Mode is a pure
/// function of the configuration: without a usable credential the assistant
/// answers from the canned-reply table; with one it proxies to Gemini and
/// folds every upstream fault into a friendly reply.
pub struct ChatAssistant {
    mode: AssistantMode,
}

impl ChatAssistant {
    pub fn new(client: reqwest::Client, config: GeminiConfig) -> Self {
        let mode = if config.is_live() {
            let api_key = config.api_key.clone().unwrap_or_default();
            AssistantMode::Live(GeminiClient::new(client, api_key, config.model.clone()))
        } else {
            info!("No usable Gemini credential; chat assistant in degraded mode");
            AssistantMode::Degraded
        };
        Self { mode }
    }

    /// Point the live client at an alternative endpoint, used by tests.
    /// No-op in degraded mode.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.mode = match self.mode {
            AssistantMode::Live(client) => AssistantMode::Live(client.with_base_url(base_url)),
            AssistantMode::Degraded => AssistantMode::Degraded,
        };
        self
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, AssistantMode::Live(_))
    }

    /// Produce the reply for one transcript. Infallible: both modes always
    /// answer with text.
    pub async fn reply(&self, messages: &[ChatMessage]) -> String {
        match &self.mode {
            AssistantMode::Degraded => degraded_reply(messages).to_string(),
            AssistantMode::Live(client) => {
                let prompt = knowledge::system_prompt();
                match client.generate(&prompt, messages, CHAT_TEMPERATURE).await {
                    Ok(text) => text,
                    Err(GeminiError::RateLimited(detail)) => {
                        error!("Gemini rate limited: {}", detail);
                        RATE_LIMITED_REPLY.to_string()
                    }
                    Err(e) => {
                        error!("Gemini error: {}", e);
                        format!(
                            "System Error Detected: My quantum core specifically rejected that \
                             request ({}). Please ensure my GEMINI_API_KEY is correctly \
                             configured in my environment.",
                            e
                        )
                    }
                }
            }
        }
    }
}

/// Keyword-match the last message against the canned-reply table; an empty
/// transcript or no match falls through to the generic offline reply.
fn degraded_reply(messages: &[ChatMessage]) -> &'static str {
    let Some(last) = messages.last() else {
        return OFFLINE_REPLY;
    };
    let content = last.content.to_lowercase();
    for rule in CANNED_RULES {
        if rule.keywords.iter().any(|k| content.contains(k)) {
            return rule.reply;
        }
    }
    OFFLINE_REPLY
}
