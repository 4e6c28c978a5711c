use crate::modules::content_records::application::errors::ApplicationError;
use crate::modules::content_records::application::sheet_snapshot::SheetSnapshot;
use crate::modules::content_records::application::timestamp::now_timestamp;
use crate::modules::content_records::core::content_record::{ContentRecord, ContentType};
use crate::modules::content_records::core::ports::TabularBackend;
use crate::modules::content_records::core::sheet_layout::{
    STATUS_ACTIVE, SheetLayout, header_cells, record_from_row,
};
use crate::modules::content_records::use_cases::create_content_record::command::CreateContentRecord;
use std::sync::Arc;

pub struct CreateContentRecordHandler {
    backend: Arc<dyn TabularBackend>,
    layout: SheetLayout,
}

impl CreateContentRecordHandler {
    pub fn new(backend: Arc<dyn TabularBackend>, layout: SheetLayout) -> Self {
        Self { backend, layout }
    }

    pub async fn handle(
        &self,
        command: CreateContentRecord,
    ) -> Result<ContentRecord, ApplicationError> {
        let content_name = command
            .content_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ApplicationError::Validation("Content Name is required".into()))?;

        // No lock or version check: concurrent creates can pick the same row.
        let snapshot = SheetSnapshot::load(&*self.backend, &self.layout).await?;
        let row_number = if snapshot.is_empty() {
            self.backend
                .update_range(&self.layout.row_range(1), vec![header_cells()])
                .await?;
            tracing::info!("wrote header row to empty sheet");
            2
        } else {
            snapshot.physical_row_count() + 1
        };

        let now = now_timestamp();
        let cells = vec![
            content_name,
            command.content_title.unwrap_or_default(),
            command.content_description.unwrap_or_default(),
            command.content_image.unwrap_or_default(),
            command.content_link.unwrap_or_default(),
            command
                .content_tags
                .map(|tags| tags.to_cell())
                .unwrap_or_default(),
            command.content_date_start.unwrap_or_default(),
            command.content_date_end.unwrap_or_default(),
            command
                .content_type
                .unwrap_or(ContentType::Other)
                .as_str()
                .to_string(),
            now.clone(),
            now,
            STATUS_ACTIVE.to_string(),
            command.content_subtitle.unwrap_or_default(),
        ];

        self.backend
            .update_range(&self.layout.row_range(row_number), vec![cells.clone()])
            .await?;

        tracing::info!(row = row_number, "created content record");
        Ok(record_from_row(row_number, &cells))
    }
}

#[cfg(test)]
mod create_content_record_handler_tests {
    use super::*;
    use crate::modules::content_records::adapters::outbound::tabular_in_memory::InMemoryTable;
    use crate::modules::content_records::core::content_record::TagsInput;
    use crate::modules::content_records::core::ports::BackendError;
    use crate::modules::content_records::core::sheet_layout::{HEADER_ROW, column};
    use crate::test_support::fixtures::{CreateContentRecordBuilder, data_row};
    use rstest::rstest;

    fn handler(table: Arc<InMemoryTable>) -> CreateContentRecordHandler {
        CreateContentRecordHandler::new(table, SheetLayout::default())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_the_header_first_on_an_empty_sheet() {
        let table = Arc::new(InMemoryTable::new());
        let command = CreateContentRecordBuilder::new().content_name("Demo").build();

        let record = handler(table.clone()).handle(command).await.expect("create failed");

        assert_eq!(record.id, "2");
        assert!(record.status);
        assert_eq!(record.create_at, record.update_at);
        let rows = table.snapshot().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER_ROW.map(String::from).to_vec());
        assert_eq!(rows[1][column::STATUS], "true");
        assert_eq!(table.write_count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_after_the_last_physical_row() {
        let table = Arc::new(InMemoryTable::with_rows(vec![
            header_cells(),
            data_row("First", "true"),
            data_row("Deleted", "false"),
        ]));
        let record = handler(table.clone())
            .handle(CreateContentRecordBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(record.id, "4");
        assert_eq!(table.write_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_default_optional_fields() {
        let table = Arc::new(InMemoryTable::new());
        let record = handler(table.clone())
            .handle(CreateContentRecord {
                content_name: Some("Bare".into()),
                ..CreateContentRecord::default()
            })
            .await
            .unwrap();
        assert_eq!(record.content_type, ContentType::Other);
        assert_eq!(record.content_title, "");
        assert!(record.content_tags.is_empty());
        assert_eq!(table.snapshot().await[1][column::CONTENT_TYPE], "other");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_tags_comma_joined() {
        let table = Arc::new(InMemoryTable::new());
        let record = handler(table.clone())
            .handle(
                CreateContentRecordBuilder::new()
                    .content_tags(TagsInput::List(vec!["a".into(), "b".into()]))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(record.content_tags, vec!["a", "b"]);
        assert_eq!(table.snapshot().await[1][column::CONTENT_TAGS], "a, b");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_raw_tag_strings_as_given() {
        let table = Arc::new(InMemoryTable::new());
        handler(table.clone())
            .handle(
                CreateContentRecordBuilder::new()
                    .content_tags(TagsInput::Raw("x,y".into()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(table.snapshot().await[1][column::CONTENT_TAGS], "x,y");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[tokio::test]
    async fn it_should_reject_a_missing_content_name(#[case] name: Option<&str>) {
        let table = Arc::new(InMemoryTable::new());
        let command = CreateContentRecord {
            content_name: name.map(String::from),
            ..CreateContentRecord::default()
        };
        let result = handler(table.clone()).handle(command).await;
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert_eq!(table.write_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_backend_failures() {
        let mut table = InMemoryTable::new();
        table.toggle_offline();
        let result = handler(Arc::new(table))
            .handle(CreateContentRecordBuilder::new().build())
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Backend(BackendError::Backend(_)))
        ));
    }
}
