//! Prompt shaping for the hosted text-generation relay.

use serde::Serialize;
use serde_json::Value;

use crate::{ChatChoice, ChatMessage, ChatResponse};

pub const DEFAULT_CHAT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";
pub const MISSING_KEY_MESSAGE: &str = "API key no configurada";
const EMPTY_REPLY: &str = "Sin respuesta de HuggingFace.";

#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

/// One `Usuario:`/`Asistente:` line per message, ending with an open assistant turn.
pub fn build_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = messages
        .iter()
        .map(|message| {
            let speaker = if message.role == "user" {
                "Usuario"
            } else {
                "Asistente"
            };
            format!("{}: {}", speaker, message.content)
        })
        .collect::<Vec<_>>()
        .join("\n");
    prompt.push_str("\nAsistente:");
    prompt
}

/// Accepts either `[{ generated_text }]` or `{ generated_text }` from the upstream.
pub fn reply_from_inference(body: &Value) -> ChatResponse {
    let text = body
        .get(0)
        .and_then(|first| first.get("generated_text"))
        .or_else(|| body.get("generated_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(EMPTY_REPLY);
    ChatResponse {
        choices: vec![ChatChoice {
            message: ChatMessage {
                role: "assistant".to_string(),
                content: text.to_string(),
            },
        }],
    }
}
