//! Service-account access tokens for Google APIs.
//!
//! Signs an RS256 JWT assertion with the account's private key and trades it
//! at the OAuth token endpoint (JWT-bearer grant). The token is memoized until
//! shortly before it expires.

use crate::modules::content_records::core::ports::BackendError;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tokio::time::Instant;

pub const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const ASSERTION_LIFETIME_SECS: u64 = 3600;
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

pub struct ServiceAccountAuth {
    client: reqwest::Client,
    client_email: String,
    key: EncodingKey,
    token_uri: String,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for ServiceAccountAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountAuth")
            .field("client_email", &self.client_email)
            .field("key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountAuth {
    /// Fails when the PEM cannot be read as an RSA private key.
    pub fn new(
        client: reqwest::Client,
        client_email: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, BackendError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(|err| {
            BackendError::Configuration(format!("GOOGLE_PRIVATE_KEY is not a valid RSA key: {err}"))
        })?;
        Ok(Self {
            client,
            client_email: client_email.into(),
            key,
            token_uri: TOKEN_URI.to_string(),
            cached: Mutex::new(None),
        })
    }

    fn assertion(&self) -> Result<String, BackendError> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| BackendError::Configuration(err.to_string()))?
            .as_secs();
        let claims = Claims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|err| BackendError::Configuration(format!("could not sign assertion: {err}")))
    }

    pub async fn access_token(&self) -> Result<String, BackendError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.expires_at > Instant::now()) {
            return Ok(token.value.clone());
        }

        let assertion = self.assertion()?;
        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "token exchange rejected");
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| BackendError::Malformed(err.without_url().to_string()))?;
        let lifetime = Duration::from_secs(token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS));
        let value = token.access_token;
        *cached = Some(CachedToken {
            value: value.clone(),
            expires_at: Instant::now() + lifetime.saturating_sub(EXPIRY_MARGIN),
        });
        tracing::debug!("refreshed service account token");
        Ok(value)
    }
}
