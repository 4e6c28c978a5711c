// A1 notation for addressing rectangular ranges on a named sheet,
// e.g. `Sheet1!A:M` (whole columns) or `Sheet1!K5:L5` (cells on one row).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum A1ParseError {
    #[error("range `{0}` has no sheet name")]
    MissingSheet(String),

    #[error("invalid cell reference `{0}`")]
    InvalidReference(String),

    #[error("range `{0}` mixes whole-column and cell references")]
    MixedReferences(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Range {
    pub sheet: String,
    /// Zero-based, inclusive.
    pub start_column: usize,
    /// Zero-based, inclusive.
    pub end_column: usize,
    /// One-based, inclusive. `None` addresses whole columns.
    pub rows: Option<(usize, usize)>,
}

impl A1Range {
    pub fn columns(sheet: impl Into<String>, start_column: usize, end_column: usize) -> Self {
        Self {
            sheet: sheet.into(),
            start_column,
            end_column,
            rows: None,
        }
    }

    pub fn row_span(
        sheet: impl Into<String>,
        start_column: usize,
        end_column: usize,
        row: usize,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            start_column,
            end_column,
            rows: Some((row, row)),
        }
    }

    pub fn width(&self) -> usize {
        self.end_column - self.start_column + 1
    }
}

pub fn column_letters(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

fn needs_quoting(sheet: &str) -> bool {
    !sheet.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for A1Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_quoting(&self.sheet) {
            write!(f, "'{}'!", self.sheet.replace('\'', "''"))?;
        } else {
            write!(f, "{}!", self.sheet)?;
        }
        let start = column_letters(self.start_column);
        let end = column_letters(self.end_column);
        match self.rows {
            Some((first, last)) => write!(f, "{start}{first}:{end}{last}"),
            None => write!(f, "{start}:{end}"),
        }
    }
}

fn parse_reference(reference: &str) -> Result<(usize, Option<usize>), A1ParseError> {
    let split = reference
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(reference.len());
    let (letters, digits) = reference.split_at(split);
    let column = column_index(letters)
        .ok_or_else(|| A1ParseError::InvalidReference(reference.to_string()))?;
    if digits.is_empty() {
        return Ok((column, None));
    }
    let row: usize = digits
        .parse()
        .map_err(|_| A1ParseError::InvalidReference(reference.to_string()))?;
    if row == 0 {
        return Err(A1ParseError::InvalidReference(reference.to_string()));
    }
    Ok((column, Some(row)))
}

impl FromStr for A1Range {
    type Err = A1ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sheet, refs) = s
            .rsplit_once('!')
            .ok_or_else(|| A1ParseError::MissingSheet(s.to_string()))?;
        let sheet = match sheet.strip_prefix('\'').and_then(|q| q.strip_suffix('\'')) {
            Some(quoted) => quoted.replace("''", "'"),
            None => sheet.to_string(),
        };
        if sheet.is_empty() {
            return Err(A1ParseError::MissingSheet(s.to_string()));
        }

        let (start, end) = refs.split_once(':').unwrap_or((refs, refs));
        let (start_column, start_row) = parse_reference(start)?;
        let (end_column, end_row) = parse_reference(end)?;

        let rows = match (start_row, end_row) {
            (None, None) => None,
            (Some(first), Some(last)) => Some((first.min(last), first.max(last))),
            _ => return Err(A1ParseError::MixedReferences(s.to_string())),
        };

        Ok(Self {
            sheet,
            start_column: start_column.min(end_column),
            end_column: start_column.max(end_column),
            rows,
        })
    }
}
