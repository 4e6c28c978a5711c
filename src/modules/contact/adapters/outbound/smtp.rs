//! SMTP delivery of contact notifications through `lettre`.
//!
//! The transport speaks STARTTLS to the relay and is built once at startup.
//! Sender and receiver addresses are parsed up front so a bad configuration
//! fails at boot rather than on the first visitor message.

use crate::modules::contact::core::notification::Notification;
use crate::modules::contact::core::ports::{NotificationError, NotificationSender};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub const DEFAULT_SMTP_PORT: u16 = 587;
const SENDER_DISPLAY_NAME: &str = "Contact Form";

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_address: String,
    pub receiver: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("from_address", &self.from_address)
            .field("receiver", &self.receiver)
            .finish()
    }
}

pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

fn parse_address(raw: &str) -> Result<Address, NotificationError> {
    raw.trim()
        .parse()
        .map_err(|err: lettre::address::AddressError| {
            NotificationError::Address(format!("{raw}: {err}"))
        })
}

impl SmtpNotificationSender {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotificationError> {
        let from = Mailbox::new(
            Some(SENDER_DISPLAY_NAME.to_string()),
            parse_address(&config.from_address)?,
        );
        let to = Mailbox::new(None, parse_address(&config.receiver)?);

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| NotificationError::Delivery(err.to_string()))?
            .port(config.port);
        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
        })
    }

    fn message(&self, notification: &Notification) -> Result<Message, NotificationError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(Mailbox::new(None, parse_address(&notification.reply_to)?))
            .subject(notification.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(notification.html_body.clone())
            .map_err(|err| NotificationError::Build(err.to_string()))
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        let message = self.message(notification)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| NotificationError::Delivery(err.to_string()))?;
        tracing::info!(to = %self.to, "contact notification sent");
        Ok(())
    }
}
