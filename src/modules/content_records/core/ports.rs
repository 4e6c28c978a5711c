// Ports define what the record store needs from the outside world, without implementing it.
//
// Purpose
// - Describe the row/column tabular backend as a trait so the use cases never
//   depend on a concrete spreadsheet client.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory table implements the same trait and can be toggled offline.

use crate::modules::content_records::core::a1::A1Range;
use async_trait::async_trait;
use thiserror::Error;

/// Raw cell values, row-major, as the backend returns them.
pub type Rows = Vec<Vec<String>>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend configuration error: {0}")]
    Configuration(String),

    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed backend response: {0}")]
    Malformed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TabularBackend: Send + Sync {
    /// Values in `range`. Trailing empty rows and trailing empty cells may be omitted.
    async fn get_range(&self, range: &A1Range) -> Result<Rows, BackendError>;

    /// Overwrite the cells covered by `range`, starting at its top-left corner.
    async fn update_range(&self, range: &A1Range, rows: Rows) -> Result<(), BackendError>;
}
