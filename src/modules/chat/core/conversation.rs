use crate::modules::chat::core::ports::{ChatTurn, TurnRole};
use crate::modules::chat::core::system_prompt::MAX_SYSTEM_PROMPT_CHARS;
use serde::Deserialize;

/// Character budget for everything sent in one request. The system prompt
/// and the new message always go out; replayed history fills what is left.
pub const MAX_CONTEXT_CHARS: usize = MAX_SYSTEM_PROMPT_CHARS;

pub const PRIMING_REPLY: &str =
    "I understand. I'll help you find information from the portfolio data.";

/// One entry of the client-held chat history. Only `user` is treated as the
/// visitor; any other role is replayed as the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Drops the oldest turns until the remainder fits `budget`, then any
/// leading model turns so the replay still opens with the visitor.
fn fit_history(mut replayed: Vec<ChatTurn>, budget: usize) -> Vec<ChatTurn> {
    let mut used: usize = replayed.iter().map(|turn| char_len(&turn.text)).sum();
    let mut skip = 0;
    while skip < replayed.len() && used > budget {
        used -= char_len(&replayed[skip].text);
        skip += 1;
    }
    while skip < replayed.len() && replayed[skip].role == TurnRole::Model {
        skip += 1;
    }
    replayed.drain(..skip);
    replayed
}

pub fn build_turns(system_prompt: &str, history: &[HistoryEntry], message: &str) -> Vec<ChatTurn> {
    let replayed: Vec<ChatTurn> = history
        .iter()
        .filter(|entry| !entry.role.is_empty() && !entry.content.is_empty())
        .map(|entry| match entry.role.as_str() {
            "user" => ChatTurn::user(entry.content.clone()),
            _ => ChatTurn::model(entry.content.clone()),
        })
        .collect();
    let fixed = char_len(system_prompt) + char_len(PRIMING_REPLY) + char_len(message);
    let replayed = fit_history(replayed, MAX_CONTEXT_CHARS.saturating_sub(fixed));

    if replayed.is_empty() {
        return vec![ChatTurn::user(format!(
            "{system_prompt}\n\nUser question: {message}"
        ))];
    }

    let mut turns = Vec::with_capacity(replayed.len() + 3);
    turns.push(ChatTurn::user(system_prompt));
    turns.push(ChatTurn::model(PRIMING_REPLY));
    turns.extend(replayed);
    turns.push(ChatTurn::user(message));
    turns
}
