use crate::modules::contact::core::notification::compose;
use crate::modules::contact::core::ports::{NotificationError, NotificationSender};
use crate::modules::contact::use_cases::send_contact_message::command::SendContactMessage;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Contact form is not configured")]
    NotConfigured,
    #[error("Failed to send message")]
    Delivery(#[from] NotificationError),
}

pub struct SendContactMessageHandler {
    sender: Option<Arc<dyn NotificationSender>>,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

impl SendContactMessageHandler {
    pub fn new(sender: Option<Arc<dyn NotificationSender>>) -> Self {
        Self { sender }
    }

    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    pub async fn handle(&self, command: SendContactMessage) -> Result<(), ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            required(command.name),
            required(command.email),
            required(command.message),
        ) else {
            return Err(ContactError::MissingFields);
        };
        let sender = self.sender.as_ref().ok_or(ContactError::NotConfigured)?;

        sender
            .send(&compose(&name, &email, &message))
            .await
            .inspect_err(|err| tracing::error!(error = %err, "contact message not delivered"))?;

        tracing::info!("contact message delivered");
        Ok(())
    }
}
