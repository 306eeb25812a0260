//! # dune-sheets
//!
//! Survey workbook ingestion for dunecover.
//!
//! Reads a workbook into named [`Sheet`]s of loosely typed [`Cell`]s, checks
//! it against the static survey [`SheetLayout`], and decodes the positional,
//! observation, and reference sheets into [`dune_core::entities::SurveyTables`].
//!
//! Two sources are supported:
//! - Spreadsheet files (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) via `calamine`
//! - A directory holding one `<SheetName>.csv` per sheet via `csv`
//!
//! This crate isolates the `calamine` dependency from the rest of the
//! workspace.

pub mod cell;
pub mod decode;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod workbook;

pub use cell::Cell;
pub use decode::decode;
pub use error::SheetError;
pub use layout::{SheetLayout, SheetRole, layout};
pub use sheet::Sheet;
pub use workbook::Workbook;
