use crate::modules::chat::core::ports::{PortfolioContextSource, is_empty_portfolio};
use crate::modules::chat::use_cases::send_chat_message::handler::ChatSettings;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatChecks {
    pub portfolio_data: bool,
    pub prompts: bool,
    pub api_key: bool,
    pub ai_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatStatus {
    pub message: String,
    pub status: String,
    pub checks: ChatChecks,
}

pub struct ReportChatStatusHandler {
    context: Arc<dyn PortfolioContextSource>,
    settings: ChatSettings,
    has_backend: bool,
}

impl ReportChatStatusHandler {
    pub fn new(
        context: Arc<dyn PortfolioContextSource>,
        settings: ChatSettings,
        has_backend: bool,
    ) -> Self {
        Self {
            context,
            settings,
            has_backend,
        }
    }

    /// Readiness never fails; an unreadable portfolio shows up as a false check.
    pub async fn handle(&self) -> ChatStatus {
        let portfolio_data = match self.context.load().await {
            Ok(context) => !is_empty_portfolio(&context),
            Err(err) => {
                tracing::warn!(error = %err, "portfolio context unavailable");
                false
            }
        };

        ChatStatus {
            message: "Chat API is working".into(),
            status: "ok".into(),
            checks: ChatChecks {
                portfolio_data,
                prompts: !self.settings.persona.trim().is_empty(),
                api_key: self.has_backend,
                ai_disabled: self.settings.disabled,
            },
        }
    }
}
