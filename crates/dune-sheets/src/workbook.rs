//! Opening survey workbooks from spreadsheet files or CSV directories.

use std::fs;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::cell::{Cell, parse_date};
use crate::error::SheetError;
use crate::sheet::Sheet;

/// Spreadsheet extensions handed to calamine.
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// All sheets of one input, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    source: String,
    sheets: Vec<Sheet>,
}

impl Workbook {
    #[must_use]
    pub fn new(source: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            source: source.into(),
            sheets,
        }
    }

    /// Open a spreadsheet file, or a directory of per-sheet CSV files.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::UnsupportedFormat`] for unknown extensions and
    /// [`SheetError::Spreadsheet`], [`SheetError::Csv`], or [`SheetError::Io`]
    /// when reading fails.
    pub fn open(path: &Path) -> Result<Self, SheetError> {
        if path.is_dir() {
            return Self::from_csv_dir(path);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            Self::from_spreadsheet(path)
        } else {
            Err(SheetError::UnsupportedFormat(format!(
                "{} (expected one of {} or a directory of CSV sheets)",
                path.display(),
                SPREADSHEET_EXTENSIONS.join(", ")
            )))
        }
    }

    /// Read every worksheet of a spreadsheet file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Spreadsheet`] if calamine cannot open the file or
    /// a worksheet.
    pub fn from_spreadsheet(path: &Path) -> Result<Self, SheetError> {
        let mut book = open_workbook_auto(path)?;
        let mut sheets = Vec::new();

        for name in book.sheet_names() {
            let range = book.worksheet_range(&name)?;
            let grid: Vec<Vec<Cell>> = range
                .rows()
                .map(|row| row.iter().map(cell_from_data).collect())
                .collect();
            let sheet = Sheet::from_grid(name, grid);
            debug!(sheet = sheet.name(), rows = sheet.len(), "read worksheet");
            sheets.push(sheet);
        }

        Ok(Self::new(path.display().to_string(), sheets))
    }

    /// Read a directory where each `<SheetName>.csv` file is one sheet.
    ///
    /// Files are read in name order; non-CSV files are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Io`] if the directory cannot be listed and
    /// [`SheetError::Csv`] if a file fails to parse.
    pub fn from_csv_dir(dir: &Path) -> Result<Self, SheetError> {
        let mut paths = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        let mut sheets = Vec::new();
        for path in paths {
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !path.is_file() || !is_csv {
                continue;
            }

            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&path)?;
            let mut grid: Vec<Vec<Cell>> = Vec::new();
            for record in reader.records() {
                let record = record?;
                grid.push(record.iter().map(Cell::from_text).collect());
            }

            let sheet = Sheet::from_grid(stem, grid);
            debug!(sheet = sheet.name(), rows = sheet.len(), "read csv sheet");
            sheets.push(sheet);
        }

        Ok(Self::new(dir.display().to_string(), sheets))
    }

    /// Where the workbook was read from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name().to_string()).collect()
    }

    /// Sheet by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        let wanted = name.trim();
        self.sheets
            .iter()
            .find(|sheet| sheet.name().trim().eq_ignore_ascii_case(wanted))
    }

    /// Sheet by name, or [`SheetError::MissingSheet`].
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::MissingSheet`] listing the sheets that do exist.
    pub fn require(&self, name: &str) -> Result<&Sheet, SheetError> {
        self.sheet(name).ok_or_else(|| SheetError::MissingSheet {
            sheet: name.to_string(),
            available: self.sheet_names(),
        })
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) | Data::DurationIso(s) => Cell::from_text(s),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or_else(|| Cell::Number(dt.as_f64()), |value| Cell::Date(value.date())),
        Data::DateTimeIso(s) => parse_date(s).map_or_else(|| Cell::from_text(s), Cell::Date),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn csv_directory_reads_one_sheet_per_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("ReadMe.csv"), "name,native,codetype\nABMA,1,Terrestrial Plant\n")
            .expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let workbook = Workbook::open(dir.path()).expect("open");
        assert_eq!(workbook.sheet_names(), vec!["ReadMe".to_string()]);
        let sheet = workbook.sheet("readme").expect("case-insensitive lookup");
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn missing_sheet_lists_available() {
        let workbook = Workbook::new("mem", vec![Sheet::from_grid("Transects", Vec::new())]);
        let error = workbook.require("ReadMe").expect_err("missing");
        match error {
            SheetError::MissingSheet { sheet, available } => {
                assert_eq!(sheet, "ReadMe");
                assert_eq!(available, vec!["Transects".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("survey.txt");
        fs::write(&path, "x").expect("write");
        assert!(matches!(
            Workbook::open(&path),
            Err(SheetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn calamine_cells_convert() {
        assert_eq!(cell_from_data(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(cell_from_data(&Data::String("  ".into())), Cell::Empty);
        assert_eq!(
            cell_from_data(&Data::DateTimeIso("2023-06-01T00:00:00".into())),
            Cell::Date(chrono::NaiveDate::from_ymd_opt(2023, 6, 1).expect("date"))
        );
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
    }
}
