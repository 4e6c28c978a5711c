use crate::modules::chat::core::conversation::HistoryEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessage {
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub session_id: String,
}
