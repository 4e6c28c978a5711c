use crate::modules::content_records::core::content_record::{ContentType, TagsInput};
use serde::Deserialize;

/// A new record as submitted by the admin panel. Adapter-assigned fields
/// (id, timestamps, status) are ignored if a client sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRecord {
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
