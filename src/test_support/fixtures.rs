// Shared test fixtures for content records.
// Compiled only for unit tests, exposed as `crate::test_support::fixtures`.

use crate::modules::content_records::core::content_record::{ContentType, TagsInput};
use crate::modules::content_records::core::sheet_layout::{COLUMN_COUNT, column};
use crate::modules::content_records::use_cases::create_content_record::command::CreateContentRecord;

const FIXED_CREATE_AT: &str = "2024-01-01T00:00:00.000Z";
const FIXED_UPDATE_AT: &str = "2024-01-02T00:00:00.000Z";

/// A complete 13 column row with the given name and raw status cell.
pub fn data_row(name: &str, status: &str) -> Vec<String> {
    let mut row = vec![String::new(); COLUMN_COUNT];
    row[column::CONTENT_NAME] = name.to_string();
    row[column::CONTENT_TYPE] = "skill".to_string();
    row[column::CREATE_AT] = FIXED_CREATE_AT.to_string();
    row[column::UPDATE_AT] = FIXED_UPDATE_AT.to_string();
    row[column::STATUS] = status.to_string();
    row
}

pub struct CreateContentRecordBuilder {
    inner: CreateContentRecord,
}

impl Default for CreateContentRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateContentRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateContentRecord {
                content_name: Some("Rust".to_string()),
                content_title: Some("Systems programming".to_string()),
                content_description: Some("Services, parsers and CLIs".to_string()),
                content_image: Some("https://example.com/rust.png".to_string()),
                content_link: Some("https://www.rust-lang.org".to_string()),
                content_tags: Some(TagsInput::List(vec![
                    "backend".to_string(),
                    "systems".to_string(),
                ])),
                content_date_start: Some("2021-03-01".to_string()),
                content_date_end: None,
                content_type: Some(ContentType::Skill),
                content_subtitle: Some("Daily driver".to_string()),
            },
        }
    }

    pub fn content_name(mut self, v: impl Into<String>) -> Self {
        self.inner.content_name = Some(v.into());
        self
    }

    pub fn content_title(mut self, v: impl Into<String>) -> Self {
        self.inner.content_title = Some(v.into());
        self
    }

    pub fn content_tags(mut self, v: TagsInput) -> Self {
        self.inner.content_tags = Some(v);
        self
    }

    pub fn content_type(mut self, v: ContentType) -> Self {
        self.inner.content_type = Some(v);
        self
    }

    pub fn build(self) -> CreateContentRecord {
        self.inner
    }
}
