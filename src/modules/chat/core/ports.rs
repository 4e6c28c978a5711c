use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatBackendError {
    #[error("request to the language model failed: {0}")]
    Transport(String),
    #[error("language model responded with {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("unreadable language model response: {0}")]
    Malformed(String),
}

/// A hosted language model. `Ok(None)` means the model answered without any
/// candidate text.
#[async_trait]
pub trait GenerativeChat: Send + Sync {
    async fn generate(
        &self,
        turns: &[ChatTurn],
        params: &GenerationParams,
    ) -> Result<Option<String>, ChatBackendError>;
}

#[async_trait]
pub trait PortfolioContextSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Value>;
}

/// True when the context has no sections to talk about.
pub fn is_empty_portfolio(context: &Value) -> bool {
    context
        .get("sections")
        .and_then(Value::as_array)
        .is_none_or(|sections| sections.is_empty())
}
