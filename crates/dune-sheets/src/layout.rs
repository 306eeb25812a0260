//! The static survey workbook layout: which sheets and columns are read.
//!
//! The layout is built once per process and shared read-only. Sheet names
//! come from [`SheetsConfig`]; column names are fixed by the field template.

use std::sync::OnceLock;

use dune_config::SheetsConfig;
use dune_core::responses::SheetSummary;

use crate::error::SheetError;
use crate::sheet::Sheet;
use crate::workbook::Workbook;

static LAYOUT: OnceLock<SheetLayout> = OnceLock::new();

/// The survey workbook layout.
#[must_use]
pub fn layout() -> &'static SheetLayout {
    LAYOUT.get_or_init(SheetLayout::survey)
}

/// Purpose of a sheet within the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetRole {
    Positional,
    Transects,
    ReadMe,
    Elevation,
}

impl SheetRole {
    pub const ALL: [Self; 4] = [
        Self::Positional,
        Self::Transects,
        Self::ReadMe,
        Self::Elevation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Transects => "transects",
            Self::ReadMe => "readme",
            Self::Elevation => "elevation",
        }
    }

    /// Configured sheet name for this role.
    #[must_use]
    pub fn sheet_name(self, config: &SheetsConfig) -> &str {
        match self {
            Self::Positional => &config.positional,
            Self::Transects => &config.transects,
            Self::ReadMe => &config.readme,
            Self::Elevation => &config.elevation,
        }
    }

    /// The elevation sheet only appears in later template versions.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Elevation)
    }
}

/// One column the decoder reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Alternative headers accepted for this column, after `name`.
    pub aliases: &'static [&'static str],
    pub required: bool,
}

impl ColumnSpec {
    const fn required(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            required: true,
        }
    }

    const fn optional(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            required: false,
        }
    }

    /// Header candidates in lookup order.
    #[must_use]
    pub fn candidates(&self) -> Vec<&'static str> {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .collect()
    }
}

/// Columns read from one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpec {
    pub role: SheetRole,
    pub columns: Vec<ColumnSpec>,
}

impl SheetSpec {
    /// Index of `column` in `sheet`, trying its aliases.
    ///
    /// Columns not declared in this spec never resolve.
    #[must_use]
    pub fn resolve(&self, sheet: &Sheet, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|spec| spec.name == column)
            .and_then(|spec| sheet.column(&spec.candidates()))
    }

    /// Required columns absent from `sheet`.
    #[must_use]
    pub fn missing_columns(&self, sheet: &Sheet) -> Vec<String> {
        self.columns
            .iter()
            .filter(|spec| spec.required && sheet.column(&spec.candidates()).is_none())
            .map(|spec| spec.name.to_string())
            .collect()
    }
}

/// Required and optional sheets with their columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    sheets: Vec<SheetSpec>,
}

impl SheetLayout {
    fn survey() -> Self {
        const KEY: [ColumnSpec; 3] = [
            ColumnSpec::required("sitename", &["site"]),
            ColumnSpec::required("date", &["survey_date"]),
            ColumnSpec::required("transect", &[]),
        ];

        let positional = KEY
            .into_iter()
            .chain([
                ColumnSpec::required("HTS", &[]),
                ColumnSpec::optional("eastend", &[]),
                ColumnSpec::required("toe_sea", &[]),
                ColumnSpec::required("toe_in", &[]),
                ColumnSpec::required("lowest_veg", &[]),
            ])
            .collect();

        let transects = KEY
            .into_iter()
            .chain([
                ColumnSpec::required("type", &["code"]),
                ColumnSpec::required("start", &[]),
                ColumnSpec::required("end", &[]),
                ColumnSpec::required("cor_length", &[]),
            ])
            .collect();

        let readme = vec![
            ColumnSpec::required("name", &["code"]),
            ColumnSpec::required("native", &[]),
            ColumnSpec::required("codetype", &["cover_type"]),
            ColumnSpec::optional("common_name", &["description", "species"]),
        ];

        Self {
            sheets: vec![
                SheetSpec {
                    role: SheetRole::Positional,
                    columns: positional,
                },
                SheetSpec {
                    role: SheetRole::Transects,
                    columns: transects,
                },
                SheetSpec {
                    role: SheetRole::ReadMe,
                    columns: readme,
                },
                SheetSpec {
                    role: SheetRole::Elevation,
                    columns: Vec::new(),
                },
            ],
        }
    }

    /// Spec for `role`.
    ///
    /// # Panics
    ///
    /// Never: every role is present in the survey layout.
    #[must_use]
    pub fn spec(&self, role: SheetRole) -> &SheetSpec {
        self.sheets
            .iter()
            .find(|spec| spec.role == role)
            .unwrap_or_else(|| unreachable!("survey layout declares every sheet role"))
    }

    /// Check every required sheet and column.
    ///
    /// # Errors
    ///
    /// Returns the first [`SheetError::MissingSheet`] or
    /// [`SheetError::MissingColumn`] found, in layout order.
    pub fn validate(&self, workbook: &Workbook, config: &SheetsConfig) -> Result<(), SheetError> {
        for spec in &self.sheets {
            if !spec.role.is_required() {
                continue;
            }
            let sheet = workbook.require(spec.role.sheet_name(config))?;
            if let Some(column) = spec.missing_columns(sheet).into_iter().next() {
                return Err(SheetError::MissingColumn {
                    sheet: sheet.name().to_string(),
                    column,
                });
            }
        }
        Ok(())
    }

    /// Per-sheet presence report used by `dune check`.
    #[must_use]
    pub fn summarize(&self, workbook: &Workbook, config: &SheetsConfig) -> Vec<SheetSummary> {
        self.sheets
            .iter()
            .map(|spec| {
                let name = spec.role.sheet_name(config);
                let sheet = workbook.sheet(name);
                SheetSummary {
                    role: spec.role.as_str().to_string(),
                    name: sheet.map_or_else(|| name.to_string(), |s| s.name().to_string()),
                    present: sheet.is_some(),
                    required: spec.role.is_required(),
                    rows: sheet.map_or(0, Sheet::len),
                    missing_columns: sheet.map(|s| spec.missing_columns(s)).unwrap_or_default(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cell::Cell;

    fn header_sheet(name: &str, headers: &[&str]) -> Sheet {
        Sheet::from_grid(
            name,
            vec![headers.iter().map(|h| Cell::from_text(h)).collect()],
        )
    }

    fn complete_workbook() -> Workbook {
        Workbook::new(
            "mem",
            vec![
                header_sheet(
                    "PositionalCharacteristics",
                    &["sitename", "date", "transect", "HTS", "toe_sea", "toe_in", "lowest_veg"],
                ),
                header_sheet(
                    "Transects",
                    &["sitename", "date", "transect", "type", "start", "end", "cor_length"],
                ),
                header_sheet("ReadMe", &["name", "native", "codetype"]),
            ],
        )
    }

    #[test]
    fn layout_is_shared() {
        assert!(std::ptr::eq(layout(), layout()));
    }

    #[test]
    fn complete_workbook_validates_without_elevation() {
        let config = SheetsConfig::default();
        assert!(layout().validate(&complete_workbook(), &config).is_ok());
    }

    #[test]
    fn missing_column_is_reported() {
        let workbook = Workbook::new(
            "mem",
            vec![
                header_sheet(
                    "PositionalCharacteristics",
                    &["sitename", "date", "transect", "HTS", "toe_sea", "toe_in", "lowest_veg"],
                ),
                header_sheet(
                    "Transects",
                    &["sitename", "date", "transect", "code", "start", "end"],
                ),
                header_sheet("ReadMe", &["name", "native", "codetype"]),
            ],
        );
        let error = layout()
            .validate(&workbook, &SheetsConfig::default())
            .expect_err("cor_length missing");
        assert!(matches!(
            error,
            SheetError::MissingColumn { ref column, .. } if column == "cor_length"
        ));
    }

    #[test]
    fn summary_reports_optional_elevation() {
        let summaries = layout().summarize(&complete_workbook(), &SheetsConfig::default());
        let roles: Vec<&str> = summaries.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["positional", "transects", "readme", "elevation"]);
        let elevation = &summaries[3];
        assert!(!elevation.present);
        assert!(!elevation.required);
        assert!(summaries[..3].iter().all(|s| s.present && s.missing_columns.is_empty()));
    }

    #[test]
    fn aliases_resolve() {
        let sheet = header_sheet("Transects", &["Code", "start"]);
        let spec = layout().spec(SheetRole::Transects);
        assert_eq!(spec.resolve(&sheet, "type"), Some(0));
        assert_eq!(spec.resolve(&sheet, "cor_length"), None);
    }
}
