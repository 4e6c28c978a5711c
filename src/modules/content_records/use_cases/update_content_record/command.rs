use crate::modules::content_records::core::content_record::{
    ContentType, RecordIdInput, TagsInput,
};
use serde::Deserialize;

/// A partial record. Every `Some` field replaces the stored value, including
/// an explicit empty string; `None` keeps what the row already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRecord {
    pub id: Option<RecordIdInput>,
    pub content_name: Option<String>,
    pub content_title: Option<String>,
    pub content_description: Option<String>,
    pub content_image: Option<String>,
    pub content_link: Option<String>,
    pub content_tags: Option<TagsInput>,
    pub content_date_start: Option<String>,
    pub content_date_end: Option<String>,
    pub content_type: Option<ContentType>,
    pub content_subtitle: Option<String>,
}
