use crate::modules::chat::core::conversation::build_turns;
use crate::modules::chat::core::ports::{
    ChatBackendError, GenerationParams, GenerativeChat, PortfolioContextSource,
    is_empty_portfolio,
};
use crate::modules::chat::core::system_prompt::{DEFAULT_PERSONA, build_system_prompt};
use crate::modules::chat::use_cases::send_chat_message::command::{ChatReply, SendChatMessage};
use std::sync::Arc;
use uuid::Uuid;

pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub persona: String,
    pub disabled: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,
    #[error("AI assistant is temporarily disabled")]
    Disabled,
    #[error("AI assistant is not configured")]
    NotConfigured,
    #[error("Portfolio data not available")]
    PortfolioUnavailable,
    #[error("Failed to load portfolio data")]
    PortfolioLoad(#[source] anyhow::Error),
    #[error("Failed to get response from AI")]
    Upstream(#[from] ChatBackendError),
}

pub struct SendChatMessageHandler {
    backend: Option<Arc<dyn GenerativeChat>>,
    context: Arc<dyn PortfolioContextSource>,
    settings: ChatSettings,
    params: GenerationParams,
}

impl SendChatMessageHandler {
    pub fn new(
        backend: Option<Arc<dyn GenerativeChat>>,
        context: Arc<dyn PortfolioContextSource>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            backend,
            context,
            settings,
            params: GenerationParams::default(),
        }
    }

    pub async fn handle(&self, command: SendChatMessage) -> Result<ChatReply, ChatError> {
        let message = command
            .message
            .filter(|message| !message.trim().is_empty())
            .ok_or(ChatError::MissingMessage)?;
        if self.settings.disabled {
            return Err(ChatError::Disabled);
        }
        let backend = self.backend.as_ref().ok_or(ChatError::NotConfigured)?;

        let portfolio = self
            .context
            .load()
            .await
            .map_err(ChatError::PortfolioLoad)?;
        if is_empty_portfolio(&portfolio) {
            return Err(ChatError::PortfolioUnavailable);
        }

        let system_prompt = build_system_prompt(&self.settings.persona, &portfolio);
        let turns = build_turns(&system_prompt, &command.history, &message);
        tracing::debug!(turns = turns.len(), "relaying chat message");

        let reply = backend
            .generate(&turns, &self.params)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "language model call failed"))?
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        let session_id = command
            .session_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("session-{}", Uuid::now_v7()));

        Ok(ChatReply {
            message: reply,
            session_id,
        })
    }
}

#[cfg(test)]
mod send_chat_message_handler_tests {
    use super::*;
    use crate::modules::chat::adapters::outbound::chat_in_memory::{
        ScriptedChat, StaticPortfolioContext,
    };
    use crate::modules::chat::core::conversation::HistoryEntry;
    use crate::modules::chat::core::ports::TurnRole;
    use rstest::{fixture, rstest};
    use serde_json::json;

    struct Harness {
        chat: Arc<ScriptedChat>,
        context: Arc<StaticPortfolioContext>,
    }

    impl Harness {
        fn handler(&self, settings: ChatSettings) -> SendChatMessageHandler {
            SendChatMessageHandler::new(Some(self.chat.clone()), self.context.clone(), settings)
        }
    }

    #[fixture]
    fn before_each() -> Harness {
        Harness {
            chat: Arc::new(ScriptedChat::replying("I build web services.")),
            context: Arc::new(StaticPortfolioContext::new(json!({
                "sections": [{"section_id": "skill", "records": [{"contentName": "Rust"}]}]
            }))),
        }
    }

    fn ask(message: &str) -> SendChatMessage {
        SendChatMessage {
            message: Some(message.into()),
            ..SendChatMessage::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_relay_a_first_question_as_one_grounded_turn(before_each: Harness) {
        let reply = before_each
            .handler(ChatSettings::default())
            .handle(ask("What do you do?"))
            .await
            .unwrap();

        assert_eq!(reply.message, "I build web services.");
        assert!(reply.session_id.starts_with("session-"));
        let sent = before_each.chat.received().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].role, TurnRole::User);
        assert!(sent[0].text.starts_with(DEFAULT_PERSONA));
        assert!(sent[0].text.contains("\"contentName\": \"Rust\""));
        assert!(sent[0].text.ends_with("User question: What do you do?"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_callers_session_and_replay_history(before_each: Harness) {
        let command = SendChatMessage {
            message: Some("And Rust?".into()),
            history: vec![HistoryEntry {
                role: "user".into(),
                content: "Hi".into(),
            }],
            session_id: Some("session-42".into()),
        };

        let reply = before_each
            .handler(ChatSettings::default())
            .handle(command)
            .await
            .unwrap();

        assert_eq!(reply.session_id, "session-42");
        assert_eq!(before_each.chat.received().await.len(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_when_the_model_returns_nothing() {
        let handler = SendChatMessageHandler::new(
            Some(Arc::new(ScriptedChat::silent())),
            Arc::new(StaticPortfolioContext::new(json!({"sections": [{"section_id": "x"}]}))),
            ChatSettings::default(),
        );
        let reply = handler.handle(ask("Hello")).await.unwrap();
        assert_eq!(reply.message, FALLBACK_REPLY);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[tokio::test]
    async fn it_should_require_a_message(before_each: Harness, #[case] message: Option<&str>) {
        let command = SendChatMessage {
            message: message.map(String::from),
            ..SendChatMessage::default()
        };
        let result = before_each.handler(ChatSettings::default()).handle(command).await;
        assert!(matches!(result, Err(ChatError::MissingMessage)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_while_disabled(before_each: Harness) {
        let settings = ChatSettings {
            disabled: true,
            ..ChatSettings::default()
        };
        let result = before_each.handler(settings).handle(ask("Hi")).await;
        assert!(matches!(result, Err(ChatError::Disabled)));
        assert!(before_each.chat.received().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_backend(before_each: Harness) {
        let handler =
            SendChatMessageHandler::new(None, before_each.context.clone(), ChatSettings::default());
        let result = handler.handle(ask("Hi")).await;
        assert!(matches!(result, Err(ChatError::NotConfigured)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_without_portfolio_data(before_each: Harness) {
        let mut context = StaticPortfolioContext::new(json!({"sections": []}));
        let empty = SendChatMessageHandler::new(
            Some(before_each.chat.clone()),
            Arc::new(context.clone()),
            ChatSettings::default(),
        );
        assert!(matches!(
            empty.handle(ask("Hi")).await,
            Err(ChatError::PortfolioUnavailable)
        ));

        context.toggle_offline();
        let offline = SendChatMessageHandler::new(
            Some(before_each.chat.clone()),
            Arc::new(context),
            ChatSettings::default(),
        );
        assert!(matches!(
            offline.handle(ask("Hi")).await,
            Err(ChatError::PortfolioLoad(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_upstream_rejections(before_each: Harness) {
        let handler = SendChatMessageHandler::new(
            Some(Arc::new(ScriptedChat::rejecting(429, "quota exceeded"))),
            before_each.context.clone(),
            ChatSettings::default(),
        );
        let result = handler.handle(ask("Hi")).await;
        assert!(matches!(
            result,
            Err(ChatError::Upstream(ChatBackendError::Rejected { status: 429, .. }))
        ));
    }
}
