// In memory NotificationSender that records what would have been mailed.

use crate::modules::contact::core::notification::Notification;
use crate::modules::contact::core::ports::{NotificationError, NotificationSender};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryOutbox {
    sent: Mutex<Vec<Notification>>,
    is_offline: bool,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSender for InMemoryOutbox {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        if self.is_offline {
            return Err(NotificationError::Delivery("Mail relay offline".into()));
        }
        self.sent.lock().await.push(notification.clone());
        Ok(())
    }
}
