use crate::modules::content_records::application::errors::ApplicationError;
use crate::modules::content_records::application::sheet_snapshot::SheetSnapshot;
use crate::modules::content_records::core::content_record::ContentRecord;
use crate::modules::content_records::core::ports::TabularBackend;
use crate::modules::content_records::core::sheet_layout::{SheetLayout, record_from_row};
use std::sync::Arc;

pub struct ListContentRecordsHandler {
    backend: Arc<dyn TabularBackend>,
    layout: SheetLayout,
}

impl ListContentRecordsHandler {
    pub fn new(backend: Arc<dyn TabularBackend>, layout: SheetLayout) -> Self {
        Self { backend, layout }
    }

    /// Records whose status equals `status`, in sheet order. `None` lists active records only.
    pub async fn handle(&self, status: Option<bool>) -> Result<Vec<ContentRecord>, ApplicationError> {
        let wanted = status.unwrap_or(true);
        let snapshot = SheetSnapshot::load(&*self.backend, &self.layout).await?;

        let records: Vec<ContentRecord> = snapshot
            .data_rows()
            .map(|(row_number, row)| record_from_row(row_number, row))
            .filter(|record| record.status == wanted)
            .collect();

        tracing::debug!(
            status = wanted,
            count = records.len(),
            header = snapshot.has_header(),
            "listed content records"
        );
        Ok(records)
    }
}
