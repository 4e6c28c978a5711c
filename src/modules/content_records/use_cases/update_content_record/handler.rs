use crate::modules::content_records::application::errors::ApplicationError;
use crate::modules::content_records::application::sheet_snapshot::{
    SheetSnapshot, parse_row_id,
};
use crate::modules::content_records::application::timestamp::now_timestamp;
use crate::modules::content_records::core::content_record::{ContentRecord, ContentType};
use crate::modules::content_records::core::ports::TabularBackend;
use crate::modules::content_records::core::sheet_layout::{
    SheetLayout, cell, column, record_from_row,
};
use crate::modules::content_records::use_cases::update_content_record::command::UpdateContentRecord;
use std::sync::Arc;

pub struct UpdateContentRecordHandler {
    backend: Arc<dyn TabularBackend>,
    layout: SheetLayout,
}

fn coalesce(input: Option<String>, existing: &[String], index: usize) -> String {
    input.unwrap_or_else(|| cell(existing, index).to_string())
}

impl UpdateContentRecordHandler {
    pub fn new(backend: Arc<dyn TabularBackend>, layout: SheetLayout) -> Self {
        Self { backend, layout }
    }

    pub async fn handle(
        &self,
        command: UpdateContentRecord,
    ) -> Result<ContentRecord, ApplicationError> {
        let (Some(id), Some(content_name)) = (
            command.id.as_ref().map(|id| id.as_text()),
            command
                .content_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
        ) else {
            return Err(ApplicationError::Validation(
                "ID and Content Name are required".into(),
            ));
        };
        let row_number = parse_row_id(&id)?;

        let snapshot = SheetSnapshot::load(&*self.backend, &self.layout).await?;
        let existing = snapshot.resolve(row_number)?;

        let create_at = match cell(existing, column::CREATE_AT) {
            "" => now_timestamp(),
            stored => stored.to_string(),
        };
        let content_type = match command.content_type {
            Some(content_type) => content_type.as_str().to_string(),
            None => match cell(existing, column::CONTENT_TYPE) {
                "" => ContentType::Other.as_str().to_string(),
                stored => stored.to_string(),
            },
        };
        let content_tags = command
            .content_tags
            .map(|tags| tags.to_cell())
            .unwrap_or_else(|| cell(existing, column::CONTENT_TAGS).to_string());

        let cells = vec![
            content_name,
            coalesce(command.content_title, existing, column::CONTENT_TITLE),
            coalesce(command.content_description, existing, column::CONTENT_DESCRIPTION),
            coalesce(command.content_image, existing, column::CONTENT_IMAGE),
            coalesce(command.content_link, existing, column::CONTENT_LINK),
            content_tags,
            coalesce(command.content_date_start, existing, column::CONTENT_DATE_START),
            coalesce(command.content_date_end, existing, column::CONTENT_DATE_END),
            content_type,
            create_at,
            now_timestamp(),
            // Status is carried over verbatim; only a soft delete changes it.
            cell(existing, column::STATUS).to_string(),
            coalesce(command.content_subtitle, existing, column::CONTENT_SUBTITLE),
        ];

        self.backend
            .update_range(&self.layout.row_range(row_number), vec![cells.clone()])
            .await?;

        tracing::info!(row = row_number, "updated content record");
        let mut record = record_from_row(row_number, &cells);
        record.status = is_stored_active(&cells[column::STATUS]);
        Ok(record)
    }
}

/// The returned status is read back from the carried-over cell by exact
/// match, unlike the lenient parse used when listing.
fn is_stored_active(stored: &str) -> bool {
    matches!(stored, "true" | "1")
}
