//! Google Sheets v4 `values` API as a [`TabularBackend`].
//!
//! Reads use the default formatted rendering, so every cell comes back as a
//! string. Writes are sent with `valueInputOption=USER_ENTERED`, which means
//! the spreadsheet may reinterpret `true` as a boolean `TRUE`.

use crate::modules::content_records::adapters::outbound::google_auth::ServiceAccountAuth;
use crate::modules::content_records::core::a1::A1Range;
use crate::modules::content_records::core::ports::{BackendError, Rows, TabularBackend};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Clone)]
pub struct GoogleSheetsConfig {
    pub client_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
}

impl std::fmt::Debug for GoogleSheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSheetsConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish()
    }
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: String,
    major_dimension: &'static str,
    values: &'a Rows,
}

pub struct GoogleSheetsBackend {
    client: reqwest::Client,
    auth: ServiceAccountAuth,
    spreadsheet_id: String,
    api_base: String,
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn to_rows(range: ValueRange) -> Rows {
    range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect()
}

impl GoogleSheetsBackend {
    pub fn new(config: GoogleSheetsConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::new();
        let auth = ServiceAccountAuth::new(client.clone(), config.client_email, &config.private_key)?;
        Ok(Self {
            client,
            auth,
            spreadsheet_id: config.spreadsheet_id,
            api_base: SHEETS_API_BASE.to_string(),
        })
    }

    fn values_url(&self, range: &A1Range) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|err| BackendError::Configuration(format!("bad Sheets API base: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::Configuration("Sheets API base cannot hold a path".into()))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&range.to_string());
        Ok(url)
    }

    async fn rejected(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        BackendError::Rejected { status, body }
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.without_url().to_string())
}

#[async_trait]
impl TabularBackend for GoogleSheetsBackend {
    async fn get_range(&self, range: &A1Range) -> Result<Rows, BackendError> {
        let token = self.auth.access_token().await?;
        let response = self
            .client
            .get(self.values_url(range)?)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            let err = Self::rejected(response).await;
            tracing::error!(range = %range, error = %err, "sheet read failed");
            return Err(err);
        }

        let values: ValueRange = response
            .json()
            .await
            .map_err(|err| BackendError::Malformed(err.without_url().to_string()))?;
        let rows = to_rows(values);
        tracing::debug!(range = %range, rows = rows.len(), "sheet read");
        Ok(rows)
    }

    async fn update_range(&self, range: &A1Range, values: Rows) -> Result<(), BackendError> {
        let token = self.auth.access_token().await?;
        let mut url = self.values_url(range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");

        let body = ValueRangeBody {
            range: range.to_string(),
            major_dimension: "ROWS",
            values: &values,
        };
        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            let err = Self::rejected(response).await;
            tracing::error!(range = %range, error = %err, "sheet write failed");
            return Err(err);
        }

        tracing::debug!(range = %range, rows = values.len(), "sheet write");
        Ok(())
    }
}
