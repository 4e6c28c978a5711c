// Positional column contract between content records and the backing sheet.
//
// Responsibilities
// - Fix the 13 columns (A..M) and their header labels.
// - Detect a header row and blank rows.
// - Map raw rows to records with explicit per-column defaults.
// - Build the A1 ranges the use cases read and write.

use crate::modules::content_records::core::a1::A1Range;
use crate::modules::content_records::core::content_record::{
    ContentRecord, ContentType, parse_status, parse_tags,
};

pub const COLUMN_COUNT: usize = 13;

pub mod column {
    pub const CONTENT_NAME: usize = 0;
    pub const CONTENT_TITLE: usize = 1;
    pub const CONTENT_DESCRIPTION: usize = 2;
    pub const CONTENT_IMAGE: usize = 3;
    pub const CONTENT_LINK: usize = 4;
    pub const CONTENT_TAGS: usize = 5;
    pub const CONTENT_DATE_START: usize = 6;
    pub const CONTENT_DATE_END: usize = 7;
    pub const CONTENT_TYPE: usize = 8;
    pub const CREATE_AT: usize = 9;
    pub const UPDATE_AT: usize = 10;
    pub const STATUS: usize = 11;
    pub const CONTENT_SUBTITLE: usize = 12;
}

pub const HEADER_ROW: [&str; COLUMN_COUNT] = [
    "Content Name",
    "Content Title",
    "Content Description",
    "Content Image",
    "Content Link",
    "Content Tags",
    "Content Date Start",
    "Content Date End",
    "Content Type",
    "Create At",
    "Update At",
    "Status",
    "Content Subtitle",
];

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Literal written to the status cell of active and soft-deleted rows.
pub const STATUS_ACTIVE: &str = "true";
pub const STATUS_DELETED: &str = "false";

pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

pub fn is_header_row(row: &[String]) -> bool {
    let contains = |index: usize, label: &str| cell(row, index).to_lowercase().contains(label);
    contains(column::CONTENT_NAME, "content name")
        || contains(column::CONTENT_TITLE, "content title")
        || contains(column::CONTENT_TYPE, "content type")
}

pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

pub fn header_cells() -> Vec<String> {
    HEADER_ROW.iter().map(|label| label.to_string()).collect()
}

pub fn record_from_row(row_number: usize, row: &[String]) -> ContentRecord {
    let text = |index: usize| cell(row, index).to_string();
    ContentRecord {
        id: row_number.to_string(),
        content_name: text(column::CONTENT_NAME),
        content_title: text(column::CONTENT_TITLE),
        content_description: text(column::CONTENT_DESCRIPTION),
        content_image: text(column::CONTENT_IMAGE),
        content_link: text(column::CONTENT_LINK),
        content_tags: parse_tags(cell(row, column::CONTENT_TAGS)),
        content_date_start: text(column::CONTENT_DATE_START),
        content_date_end: text(column::CONTENT_DATE_END),
        content_type: ContentType::from_cell(cell(row, column::CONTENT_TYPE)),
        create_at: text(column::CREATE_AT),
        update_at: text(column::UPDATE_AT),
        status: parse_status(cell(row, column::STATUS)),
        content_subtitle: text(column::CONTENT_SUBTITLE),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    sheet_name: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl SheetLayout {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// `Sheet!A:M`
    pub fn full_range(&self) -> A1Range {
        A1Range::columns(&self.sheet_name, 0, COLUMN_COUNT - 1)
    }

    /// `Sheet!A{row}:M{row}`
    pub fn row_range(&self, row_number: usize) -> A1Range {
        A1Range::row_span(&self.sheet_name, 0, COLUMN_COUNT - 1, row_number)
    }

    /// `Sheet!K{row}:L{row}`, the cells touched by a soft delete.
    pub fn soft_delete_range(&self, row_number: usize) -> A1Range {
        A1Range::row_span(
            &self.sheet_name,
            column::UPDATE_AT,
            column::STATUS,
            row_number,
        )
    }
}
