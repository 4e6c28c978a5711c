// The content record as the admin panel and the public site see it.
//
// Purpose
// - Describe the single entity persisted in the backing sheet.
// - Own the lenient cell parsing rules (status flag, tags, content type).
//
// Boundaries
// - No knowledge of row positions or ranges; see sheet_layout for that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Skill,
    AboutMe,
    Project,
    Experience,
    Research,
    Learning,
    Blog,
    Education,
    #[default]
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        ContentType::Skill,
        ContentType::AboutMe,
        ContentType::Project,
        ContentType::Experience,
        ContentType::Research,
        ContentType::Learning,
        ContentType::Blog,
        ContentType::Education,
        ContentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Skill => "skill",
            ContentType::AboutMe => "aboutMe",
            ContentType::Project => "project",
            ContentType::Experience => "experience",
            ContentType::Research => "research",
            ContentType::Learning => "learning",
            ContentType::Blog => "blog",
            ContentType::Education => "education",
            ContentType::Other => "other",
        }
    }

    /// Reads a stored cell. Blank or unrecognised values fall back to `Other`.
    pub fn from_cell(cell: &str) -> Self {
        cell.parse().unwrap_or_default()
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownContentType(trimmed.to_string()))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub content_name: String,
    pub content_title: String,
    pub content_description: String,
    pub content_image: String,
    pub content_link: String,
    pub content_tags: Vec<String>,
    pub content_date_start: String,
    pub content_date_end: String,
    pub content_type: ContentType,
    pub create_at: String,
    pub update_at: String,
    pub status: bool,
    pub content_subtitle: String,
}

/// Tags as submitted by a client: either a proper list or a raw,
/// already comma-separated string that is stored untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Raw(String),
}

impl TagsInput {
    pub fn to_cell(&self) -> String {
        match self {
            TagsInput::List(tags) => join_tags(tags),
            TagsInput::Raw(raw) => raw.clone(),
        }
    }
}

/// Record ids arrive as strings from the REST surface, but numeric JSON is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordIdInput {
    Text(String),
    Number(i64),
}

impl RecordIdInput {
    pub fn as_text(&self) -> String {
        match self {
            RecordIdInput::Text(text) => text.clone(),
            RecordIdInput::Number(number) => number.to_string(),
        }
    }
}

pub fn parse_status(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

pub fn parse_tags(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod content_record_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true")]
    #[case("TRUE")]
    #[case("True ")]
    #[case(" 1")]
    #[case("yes")]
    #[case("YES")]
    fn it_should_parse_truthy_status_cells(#[case] cell: &str) {
        assert!(parse_status(cell));
    }

    #[rstest]
    #[case("false")]
    #[case("")]
    #[case("0")]
    #[case("no")]
    #[case("Status")]
    fn it_should_parse_everything_else_as_inactive(#[case] cell: &str) {
        assert!(!parse_status(cell));
    }

    #[rstest]
    fn it_should_split_trim_and_drop_empty_tags() {
        assert_eq!(
            parse_tags(" rust, axum ,, ,sheets"),
            vec!["rust", "axum", "sheets"]
        );
        assert!(parse_tags("").is_empty());
    }

    #[rstest]
    fn it_should_preserve_tag_order_through_the_cell_representation() {
        let tags = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(join_tags(&tags), "b, a, c");
        assert_eq!(parse_tags(&join_tags(&tags)), tags);
    }

    #[rstest]
    fn it_should_store_raw_tag_strings_untouched() {
        let raw = TagsInput::Raw("one,two".into());
        assert_eq!(raw.to_cell(), "one,two");
    }

    #[rstest]
    fn it_should_deserialize_tags_from_either_shape() {
        let list: TagsInput = serde_json::from_str(r#"["a","b"]"#).unwrap();
        let raw: TagsInput = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(list, TagsInput::List(vec!["a".into(), "b".into()]));
        assert_eq!(raw, TagsInput::Raw("a, b".into()));
    }

    #[rstest]
    #[case("aboutMe", ContentType::AboutMe)]
    #[case("ABOUTME", ContentType::AboutMe)]
    #[case(" project ", ContentType::Project)]
    #[case("", ContentType::Other)]
    #[case("podcast", ContentType::Other)]
    fn it_should_read_content_type_cells_leniently(#[case] cell: &str, #[case] expected: ContentType) {
        assert_eq!(ContentType::from_cell(cell), expected);
    }

    #[rstest]
    fn it_should_reject_unknown_content_types_when_parsed_strictly() {
        assert_eq!(
            "podcast".parse::<ContentType>(),
            Err(UnknownContentType("podcast".into()))
        );
    }

    #[rstest]
    fn it_should_serialize_records_with_camel_case_fields() {
        let record = ContentRecord {
            id: "2".into(),
            content_name: "Demo".into(),
            content_title: String::new(),
            content_description: String::new(),
            content_image: String::new(),
            content_link: String::new(),
            content_tags: vec!["a".into()],
            content_date_start: String::new(),
            content_date_end: String::new(),
            content_type: ContentType::AboutMe,
            create_at: String::new(),
            update_at: String::new(),
            status: true,
            content_subtitle: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["contentName"], "Demo");
        assert_eq!(json["contentType"], "aboutMe");
        assert_eq!(json["contentTags"], serde_json::json!(["a"]));
        assert_eq!(json["status"], true);
    }

    #[rstest]
    fn it_should_accept_numeric_and_textual_ids() {
        let text: RecordIdInput = serde_json::from_str(r#""7""#).unwrap();
        let number: RecordIdInput = serde_json::from_str("7").unwrap();
        assert_eq!(text.as_text(), "7");
        assert_eq!(number.as_text(), "7");
    }
}
