use crate::modules::contact::core::notification::Notification;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("invalid mail address: {0}")]
    Address(String),
    #[error("could not build message: {0}")]
    Build(String),
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

/// Delivers a rendered notification to the site owner.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}
