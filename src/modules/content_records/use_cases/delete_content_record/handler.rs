use crate::modules::content_records::application::errors::ApplicationError;
use crate::modules::content_records::application::sheet_snapshot::{
    SheetSnapshot, parse_row_id,
};
use crate::modules::content_records::application::timestamp::now_timestamp;
use crate::modules::content_records::core::ports::TabularBackend;
use crate::modules::content_records::core::sheet_layout::{STATUS_DELETED, SheetLayout};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAcknowledgement {
    pub success: bool,
    pub id: String,
    pub message: String,
}

pub struct DeleteContentRecordHandler {
    backend: Arc<dyn TabularBackend>,
    layout: SheetLayout,
}

impl DeleteContentRecordHandler {
    pub fn new(backend: Arc<dyn TabularBackend>, layout: SheetLayout) -> Self {
        Self { backend, layout }
    }

    /// Soft delete: flips the status cell to `false` and refreshes updateAt.
    /// The row itself is never removed.
    pub async fn handle(&self, id: Option<&str>) -> Result<DeleteAcknowledgement, ApplicationError> {
        let id = id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApplicationError::Validation("ID is required".into()))?;
        let row_number = parse_row_id(id)?;

        let snapshot = SheetSnapshot::load(&*self.backend, &self.layout).await?;
        snapshot.resolve(row_number)?;

        self.backend
            .update_range(
                &self.layout.soft_delete_range(row_number),
                vec![vec![now_timestamp(), STATUS_DELETED.to_string()]],
            )
            .await?;

        tracing::info!(row = row_number, "soft deleted content record");
        Ok(DeleteAcknowledgement {
            success: true,
            id: row_number.to_string(),
            message: "Record soft deleted".into(),
        })
    }
}
