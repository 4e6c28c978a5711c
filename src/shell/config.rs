//! Environment configuration.
//!
//! Everything is read through a lookup closure so tests can feed a map
//! instead of touching the process environment.

use crate::modules::chat::adapters::outbound::gemini::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiConfig,
};
use crate::modules::chat::core::system_prompt::DEFAULT_PERSONA;
use crate::modules::contact::adapters::outbound::smtp::{DEFAULT_SMTP_PORT, SmtpConfig};
use crate::modules::content_records::adapters::outbound::google_sheets::GoogleSheetsConfig;
use crate::modules::content_records::core::sheet_layout::DEFAULT_SHEET_NAME;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub gemini: Option<GeminiConfig>,
    pub disabled: bool,
    pub prompt_path: Option<PathBuf>,
}

impl ChatConfig {
    /// The persona prompt; falls back to the default when the file is absent or unreadable.
    pub async fn load_persona(&self) -> String {
        let Some(path) = &self.prompt_path else {
            return DEFAULT_PERSONA.to_string();
        };
        match tokio::fs::read_to_string(path).await {
            Ok(persona) if !persona.trim().is_empty() => persona,
            Ok(_) => DEFAULT_PERSONA.to_string(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not read AI prompt, using default");
                DEFAULT_PERSONA.to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sheets: GoogleSheetsConfig,
    pub sheet_name: String,
    pub chat: ChatConfig,
    pub contact: Option<SmtpConfig>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn is_true(value: Option<String>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Keys pasted from a JSON credential file keep their `\n` escapes.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| non_empty(lookup(key));
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = match get("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                reason: format!("{raw} is not an IP address"),
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{raw} is not a port number"),
            })?,
            None => 3000,
        };
        let cors_origins = get("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let sheets = GoogleSheetsConfig {
            client_email: require("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
            private_key: unescape_private_key(&require("GOOGLE_PRIVATE_KEY")?),
            spreadsheet_id: require("GOOGLE_SHEET_ID")?,
        };

        let chat = ChatConfig {
            gemini: get("GOOGLE_API_KEY").map(|api_key| GeminiConfig {
                api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            }),
            disabled: is_true(lookup("AI_DISABLED")) || is_true(lookup("DISABLE_AI")),
            prompt_path: get("AI_PROMPT_PATH").map(PathBuf::from),
        };

        let contact = match (get("SMTP_HOST"), get("CONTACT_RECEIVER")) {
            (Some(host), Some(receiver)) => {
                let username = get("SMTP_USER");
                let port = match get("SMTP_PORT") {
                    Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                        key: "SMTP_PORT",
                        reason: format!("{raw} is not a port number"),
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };
                let from_address = get("SMTP_FROM")
                    .or_else(|| username.clone())
                    .ok_or(ConfigError::Missing("SMTP_FROM"))?;
                Some(SmtpConfig {
                    host,
                    port,
                    password: lookup("SMTP_PASS"),
                    username,
                    from_address,
                    receiver,
                })
            }
            _ => None,
        };

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                cors_origins,
            },
            sheets,
            sheet_name: get("GOOGLE_SHEET_NAME").unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            chat,
            contact,
        })
    }
}
