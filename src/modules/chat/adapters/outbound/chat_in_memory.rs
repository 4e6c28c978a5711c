// In memory implementations of the chat ports, for tests and offline development.

use crate::modules::chat::core::ports::{
    ChatBackendError, ChatTurn, GenerationParams, GenerativeChat, PortfolioContextSource,
};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

enum Script {
    Reply(String),
    Silent,
    Reject { status: u16, body: String },
}

/// Answers every prompt the same way and remembers the last conversation it saw.
pub struct ScriptedChat {
    script: Script,
    received: Mutex<Vec<ChatTurn>>,
}

impl ScriptedChat {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(text.into()))
    }

    pub fn silent() -> Self {
        Self::with_script(Script::Silent)
    }

    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::with_script(Script::Reject {
            status,
            body: body.into(),
        })
    }

    pub async fn received(&self) -> Vec<ChatTurn> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl GenerativeChat for ScriptedChat {
    async fn generate(
        &self,
        turns: &[ChatTurn],
        _params: &GenerationParams,
    ) -> Result<Option<String>, ChatBackendError> {
        *self.received.lock().await = turns.to_vec();
        match &self.script {
            Script::Reply(text) => Ok(Some(text.clone())),
            Script::Silent => Ok(None),
            Script::Reject { status, body } => Err(ChatBackendError::Rejected {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct StaticPortfolioContext {
    context: Value,
    is_offline: bool,
}

impl StaticPortfolioContext {
    pub fn new(context: Value) -> Self {
        Self {
            context,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl PortfolioContextSource for StaticPortfolioContext {
    async fn load(&self) -> anyhow::Result<Value> {
        if self.is_offline {
            anyhow::bail!("Portfolio context offline");
        }
        Ok(self.context.clone())
    }
}
