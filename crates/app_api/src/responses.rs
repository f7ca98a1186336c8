use fleet_app::SettingsSnapshot;
use serde::Serialize;

use crate::ChatMessage;

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

#[derive(Serialize)]
pub struct RemovedResponse {
    pub removed: usize,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: SettingsSnapshot,
    pub db_path: String,
    pub storage_dir: String,
    pub app_data_dir: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// OpenAI-style envelope the chat widget expects.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
}
