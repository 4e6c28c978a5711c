use crate::modules::chat::adapters::outbound::content_records_context::ActiveRecordsContext;
use crate::modules::chat::adapters::outbound::gemini::GeminiChat;
use crate::modules::chat::core::ports::{GenerativeChat, PortfolioContextSource};
use crate::modules::chat::use_cases::report_chat_status::handler::ReportChatStatusHandler;
use crate::modules::chat::use_cases::send_chat_message::handler::{
    ChatSettings, SendChatMessageHandler,
};
use crate::modules::contact::adapters::outbound::smtp::SmtpNotificationSender;
use crate::modules::contact::core::ports::NotificationSender;
use crate::modules::contact::use_cases::send_contact_message::handler::SendContactMessageHandler;
use crate::modules::content_records::adapters::outbound::google_sheets::GoogleSheetsBackend;
use crate::modules::content_records::core::ports::TabularBackend;
use crate::modules::content_records::core::sheet_layout::SheetLayout;
use crate::modules::content_records::use_cases::create_content_record::handler::CreateContentRecordHandler;
use crate::modules::content_records::use_cases::delete_content_record::handler::DeleteContentRecordHandler;
use crate::modules::content_records::use_cases::list_content_records::handler::ListContentRecordsHandler;
use crate::modules::content_records::use_cases::update_content_record::handler::UpdateContentRecordHandler;
use crate::shell::config::AppConfig;
use std::sync::Arc;

fn chat_handlers(
    list_records: &Arc<ListContentRecordsHandler>,
    backend: Option<Arc<dyn GenerativeChat>>,
    settings: ChatSettings,
) -> (Arc<SendChatMessageHandler>, Arc<ReportChatStatusHandler>) {
    let context: Arc<dyn PortfolioContextSource> =
        Arc::new(ActiveRecordsContext::new(list_records.clone()));
    let status = ReportChatStatusHandler::new(context.clone(), settings.clone(), backend.is_some());
    let send = SendChatMessageHandler::new(backend, context, settings);
    (Arc::new(send), Arc::new(status))
}

#[derive(Clone)]
pub struct AppState {
    pub list_records: Arc<ListContentRecordsHandler>,
    pub create_record: Arc<CreateContentRecordHandler>,
    pub update_record: Arc<UpdateContentRecordHandler>,
    pub delete_record: Arc<DeleteContentRecordHandler>,
    pub send_chat: Arc<SendChatMessageHandler>,
    pub chat_status: Arc<ReportChatStatusHandler>,
    pub send_contact: Arc<SendContactMessageHandler>,
}

impl AppState {
    /// Record handlers over `backend`. Chat has no model and the contact form
    /// no sender until configured with [`AppState::with_chat`] and
    /// [`AppState::with_notifier`].
    pub fn new(backend: Arc<dyn TabularBackend>, layout: SheetLayout) -> Self {
        let list_records = Arc::new(ListContentRecordsHandler::new(backend.clone(), layout.clone()));
        let (send_chat, chat_status) = chat_handlers(&list_records, None, ChatSettings::default());
        Self {
            create_record: Arc::new(CreateContentRecordHandler::new(backend.clone(), layout.clone())),
            update_record: Arc::new(UpdateContentRecordHandler::new(backend.clone(), layout.clone())),
            delete_record: Arc::new(DeleteContentRecordHandler::new(backend, layout)),
            list_records,
            send_chat,
            chat_status,
            send_contact: Arc::new(SendContactMessageHandler::new(None)),
        }
    }

    /// Rebuilds the chat handlers around `backend`, grounded in the active records.
    pub fn with_chat(mut self, backend: Option<Arc<dyn GenerativeChat>>, settings: ChatSettings) -> Self {
        (self.send_chat, self.chat_status) = chat_handlers(&self.list_records, backend, settings);
        self
    }

    pub fn with_notifier(mut self, sender: Arc<dyn NotificationSender>) -> Self {
        self.send_contact = Arc::new(SendContactMessageHandler::new(Some(sender)));
        self
    }

    /// Production wiring: Google Sheets, Gemini when an API key is present,
    /// SMTP when the contact form is configured.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let backend = GoogleSheetsBackend::new(config.sheets.clone())?;
        let layout = SheetLayout::new(config.sheet_name.clone());
        let mut state = Self::new(Arc::new(backend), layout);

        let settings = ChatSettings {
            persona: config.chat.load_persona().await,
            disabled: config.chat.disabled,
        };
        let chat = config
            .chat
            .gemini
            .clone()
            .map(|gemini| Arc::new(GeminiChat::new(gemini)) as Arc<dyn GenerativeChat>);
        if chat.is_none() {
            tracing::warn!("GOOGLE_API_KEY not set, chat is unavailable");
        }
        state = state.with_chat(chat, settings);

        match &config.contact {
            Some(smtp) => {
                state = state.with_notifier(Arc::new(SmtpNotificationSender::new(smtp)?));
            }
            None => tracing::warn!("SMTP_HOST or CONTACT_RECEIVER not set, contact form is disabled"),
        }
        Ok(state)
    }
}
