// In memory implementation of the TabularBackend port.
//
// Purpose
// - Support use case tests and local development without a spreadsheet.
//
// Responsibilities
// - Store a single grid of string cells.
// - Answer reads the way the Sheets API does: trailing empty rows and cells are omitted.
// - Apply writes at the range's top-left corner, growing the grid as needed.

use crate::modules::content_records::core::a1::A1Range;
use crate::modules::content_records::core::ports::{BackendError, Rows, TabularBackend};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTable {
    rows: RwLock<Rows>,
    writes: AtomicUsize,
    is_offline: bool,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Rows) -> Self {
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// The raw grid, untrimmed.
    pub async fn snapshot(&self) -> Rows {
        self.rows.read().await.clone()
    }

    /// Number of `update_range` calls applied so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), BackendError> {
        if self.is_offline {
            return Err(BackendError::Backend("Tabular backend offline".into()));
        }
        Ok(())
    }
}

fn trim_trailing_empty(mut cells: Vec<String>) -> Vec<String> {
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

#[async_trait::async_trait]
impl TabularBackend for InMemoryTable {
    async fn get_range(&self, range: &A1Range) -> Result<Rows, BackendError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;

        let (first, last) = range.rows.unwrap_or((1, guard.len()));
        let mut window: Rows = guard
            .iter()
            .enumerate()
            .filter(|(index, _)| *index + 1 >= first && *index + 1 <= last)
            .map(|(_, row)| {
                let cells = row
                    .iter()
                    .skip(range.start_column)
                    .take(range.width())
                    .cloned()
                    .collect();
                trim_trailing_empty(cells)
            })
            .collect();

        while window.last().is_some_and(|row| row.is_empty()) {
            window.pop();
        }
        Ok(window)
    }

    async fn update_range(&self, range: &A1Range, rows: Rows) -> Result<(), BackendError> {
        self.ensure_online()?;
        let Some((first, last)) = range.rows else {
            return Err(BackendError::Rejected {
                status: 400,
                body: format!("range {range} must address explicit rows"),
            });
        };
        if rows.len() > last - first + 1 || rows.iter().any(|r| r.len() > range.width()) {
            return Err(BackendError::Rejected {
                status: 400,
                body: format!("values do not fit inside {range}"),
            });
        }

        let mut guard = self.rows.write().await;
        for (offset, values) in rows.into_iter().enumerate() {
            let index = first - 1 + offset;
            if guard.len() <= index {
                guard.resize_with(index + 1, Vec::new);
            }
            let row = &mut guard[index];
            let needed = range.start_column + values.len();
            if row.len() < needed {
                row.resize(needed, String::new());
            }
            for (column, value) in values.into_iter().enumerate() {
                row[range.start_column + column] = value;
            }
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
