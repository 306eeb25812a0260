//! One named sheet: a header row plus data rows of [`Cell`]s.

use crate::cell::Cell;

static EMPTY: Cell = Cell::Empty;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    headers: Vec<String>,
    rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, PartialEq)]
struct SheetRow {
    /// 1-based row number in the source sheet, for log messages.
    number: usize,
    cells: Vec<Cell>,
}

impl Sheet {
    /// Build a sheet from a raw grid.
    ///
    /// The first row with any non-empty cell is the header row. Data rows
    /// that are entirely empty are dropped.
    #[must_use]
    pub fn from_grid(name: impl Into<String>, grid: Vec<Vec<Cell>>) -> Self {
        let mut rows = grid
            .into_iter()
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|cell| !cell.is_empty()));

        let headers = rows
            .next()
            .map(|(_, cells)| {
                cells
                    .iter()
                    .map(|cell| cell.as_text().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();

        let rows = rows
            .map(|(index, cells)| SheetRow {
                number: index + 1,
                cells,
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of non-empty data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header matching any candidate, case-insensitively.
    ///
    /// Candidates are tried in order, so earlier names win when a sheet
    /// carries several of them.
    #[must_use]
    pub fn column(&self, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|candidate| {
            self.headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(candidate.trim()))
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|row| Row {
            number: row.number,
            cells: &row.cells,
        })
    }
}

/// Borrowed view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    number: usize,
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Cell at `index`; a missing column or short row reads as empty.
    #[must_use]
    pub fn get(&self, index: Option<usize>) -> &'a Cell {
        index
            .and_then(|index| self.cells.get(index))
            .unwrap_or(&EMPTY)
    }
}
