// One full read of the backing sheet, shared by every use case.
//
// Responsibilities
// - Fetch `A:M` once per operation and remember whether row 1 is a header.
// - Resolve a record id (the physical row number) to its stored row.
//
// Addressing
// - Ids are physical row numbers for every operation. When a header is present
//   the first data row is row 2, and row 1 can never be resolved as a record.

use crate::modules::content_records::application::errors::ApplicationError;
use crate::modules::content_records::core::ports::{BackendError, Rows, TabularBackend};
use crate::modules::content_records::core::sheet_layout::{
    SheetLayout, is_blank_row, is_header_row,
};

#[derive(Debug, Clone)]
pub struct SheetSnapshot {
    rows: Rows,
    has_header: bool,
}

impl SheetSnapshot {
    pub async fn load(
        backend: &dyn TabularBackend,
        layout: &SheetLayout,
    ) -> Result<Self, BackendError> {
        let rows = backend.get_range(&layout.full_range()).await?;
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Rows) -> Self {
        let has_header = rows.first().is_some_and(|first| is_header_row(first));
        Self { rows, has_header }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn physical_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Non-blank data rows with their physical row numbers, in sheet order.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        let skip = usize::from(self.has_header);
        self.rows
            .iter()
            .enumerate()
            .skip(skip)
            .filter(|(_, row)| !is_blank_row(row))
            .map(|(index, row)| (index + 1, row.as_slice()))
    }

    pub fn resolve(&self, row_number: usize) -> Result<&[String], ApplicationError> {
        if self.rows.is_empty() {
            return Err(ApplicationError::NotFound("Sheet is empty".into()));
        }
        if self.has_header && row_number == 1 {
            return Err(ApplicationError::NotFound(
                "Row 1 not found (header row)".into(),
            ));
        }
        let Some(row) = row_number
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
        else {
            tracing::warn!(
                row = row_number,
                total_rows = self.rows.len(),
                "row is out of bounds"
            );
            return Err(ApplicationError::NotFound(format!(
                "Row {row_number} not found (out of bounds)"
            )));
        };
        if is_blank_row(row) {
            tracing::warn!(row = row_number, "row is empty");
            return Err(ApplicationError::NotFound(format!(
                "Row {row_number} not found (empty row)"
            )));
        }
        Ok(row)
    }
}

/// Parse a client supplied id into a physical row number (>= 1).
pub fn parse_row_id(id: &str) -> Result<usize, ApplicationError> {
    match id.trim().parse::<usize>() {
        Ok(row_number) if row_number >= 1 => Ok(row_number),
        _ => Err(ApplicationError::Validation("Invalid row ID".into())),
    }
}

#[cfg(test)]
mod sheet_snapshot_tests {
    use super::*;
    use crate::modules::content_records::core::sheet_layout::header_cells;
    use crate::test_support::fixtures::data_row;
    use rstest::rstest;

    #[rstest]
    fn it_should_number_data_rows_after_the_header() {
        let snapshot = SheetSnapshot::from_rows(vec![
            header_cells(),
            data_row("First", "true"),
            data_row("Second", "true"),
        ]);
        let numbers: Vec<usize> = snapshot.data_rows().map(|(n, _)| n).collect();
        assert!(snapshot.has_header());
        assert_eq!(numbers, vec![2, 3]);
    }

    #[rstest]
    fn it_should_number_from_one_without_a_header() {
        let snapshot =
            SheetSnapshot::from_rows(vec![data_row("First", "true"), data_row("Second", "")]);
        let numbers: Vec<usize> = snapshot.data_rows().map(|(n, _)| n).collect();
        assert!(!snapshot.has_header());
        assert_eq!(numbers, vec![1, 2]);
    }

    #[rstest]
    fn it_should_skip_blank_rows_without_renumbering() {
        let snapshot = SheetSnapshot::from_rows(vec![
            header_cells(),
            data_row("First", "true"),
            vec![],
            data_row("Third", "true"),
        ]);
        let numbers: Vec<usize> = snapshot.data_rows().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[rstest]
    fn it_should_resolve_physical_row_numbers() {
        let snapshot = SheetSnapshot::from_rows(vec![header_cells(), data_row("First", "true")]);
        let row = snapshot.resolve(2).unwrap();
        assert_eq!(row[0], "First");
    }

    #[rstest]
    #[case(1, "Row 1 not found (header row)")]
    #[case(3, "Row 3 not found (empty row)")]
    #[case(4, "Row 4 not found (out of bounds)")]
    fn it_should_refuse_rows_that_are_not_records(#[case] row_number: usize, #[case] message: &str) {
        let snapshot = SheetSnapshot::from_rows(vec![
            header_cells(),
            data_row("First", "true"),
            vec!["  ".into()],
        ]);
        match snapshot.resolve(row_number) {
            Err(ApplicationError::NotFound(msg)) => assert_eq!(msg, message),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    fn it_should_report_an_empty_sheet_as_not_found() {
        let snapshot = SheetSnapshot::from_rows(vec![]);
        assert!(matches!(
            snapshot.resolve(1),
            Err(ApplicationError::NotFound(msg)) if msg == "Sheet is empty"
        ));
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("")]
    fn it_should_reject_ids_that_are_not_positive_integers(#[case] id: &str) {
        assert!(matches!(
            parse_row_id(id),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[rstest]
    fn it_should_accept_padded_numeric_ids() {
        assert_eq!(parse_row_id(" 12 ").unwrap(), 12);
    }
}
