//! The cover result table.
//!
//! The set of percent-cover columns depends on the codes and cover types
//! present in the input, so rows carry a dense `values` vector aligned with
//! the table's ordered column list instead of a fixed record type. Columns
//! are appended through [`CoverTableBuilder`] in a caller-defined order and
//! never reordered afterwards.
//!
//! Serialized rows are JSON objects keyed by column name, in column order.
//! Undefined values (NaN) serialize as `null`.

use std::borrow::Cow;
use std::collections::HashSet;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

use crate::axes::Axis;
use crate::entities::Transect;
use crate::keys::TransectKey;
use crate::zones::Zone;

/// Fixed columns that precede the generated percent-cover columns.
pub const BASE_COLUMNS: [&str; 7] = [
    "transect_key",
    "sitename",
    "date",
    "transect",
    "tran_length",
    "dune_length",
    "veg_length",
];

/// Description of one generated percent-cover column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CoverColumn {
    pub name: String,
    pub axis: Axis,
    pub zone: Zone,
}

/// One output row: a transect, its zone lengths, and one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverRow {
    pub key: TransectKey,
    pub tran_length: f64,
    pub dune_length: f64,
    pub veg_length: f64,
    pub values: Vec<f64>,
}

impl CoverRow {
    #[must_use]
    pub fn from_transect(transect: &Transect) -> Self {
        Self {
            key: transect.key.clone(),
            tran_length: transect.tran_length(),
            dune_length: transect.dune_length(),
            veg_length: transect.veg_length(),
            values: Vec::new(),
        }
    }

    /// Denominator for percent cover over `zone`.
    #[must_use]
    pub const fn zone_length(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Whole => self.tran_length,
            Zone::Dune => self.dune_length,
            Zone::Veg => self.veg_length,
        }
    }
}

/// Percent-cover results, one row per transect.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverTable {
    columns: Vec<CoverColumn>,
    rows: Vec<CoverRow>,
}

impl CoverTable {
    #[must_use]
    pub fn columns(&self) -> &[CoverColumn] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[CoverRow] {
        &self.rows
    }

    /// Every header, base columns first.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        BASE_COLUMNS
            .iter()
            .copied()
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Names of the generated percent-cover columns only.
    #[must_use]
    pub fn cover_column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    #[must_use]
    pub fn row(&self, key: &TransectKey) -> Option<&CoverRow> {
        self.rows.iter().find(|row| &row.key == key)
    }

    /// Value of a generated column for one transect.
    #[must_use]
    pub fn value(&self, key: &TransectKey, column: &str) -> Option<f64> {
        let index = self.column_index(column)?;
        self.row(key).and_then(|row| row.values.get(index).copied())
    }

    /// Copy of the table keeping only the generated columns matching `keep`.
    #[must_use]
    pub fn select(&self, keep: impl Fn(&CoverColumn) -> bool) -> Self {
        let kept: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| keep(column))
            .map(|(index, _)| index)
            .collect();

        let columns = kept.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| CoverRow {
                values: kept.iter().map(|&i| row.values[i]).collect(),
                ..row.clone()
            })
            .collect();

        Self { columns, rows }
    }

    /// Flatten rows into text records aligned with [`Self::headers`].
    ///
    /// `format_number` renders every numeric cell, including NaN.
    pub fn records(&self, format_number: impl Fn(f64) -> String) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = Vec::with_capacity(BASE_COLUMNS.len() + row.values.len());
                record.push(row.key.id());
                record.push(row.key.site.clone());
                record.push(row.key.date.clone());
                record.push(row.key.transect.clone());
                record.push(format_number(row.tran_length));
                record.push(format_number(row.dune_length));
                record.push(format_number(row.veg_length));
                record.extend(row.values.iter().map(|v| format_number(*v)));
                record
            })
            .collect()
    }
}

impl Serialize for CoverTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<RowView<'_>> = self
            .rows
            .iter()
            .map(|row| RowView {
                row,
                columns: &self.columns,
            })
            .collect();

        let mut state = serializer.serialize_struct("CoverTable", 2)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

struct RowView<'a> {
    row: &'a CoverRow,
    columns: &'a [CoverColumn],
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let row = self.row;
        let mut map = serializer.serialize_map(Some(BASE_COLUMNS.len() + self.columns.len()))?;
        map.serialize_entry("transect_key", &row.key.id())?;
        map.serialize_entry("sitename", &row.key.site)?;
        map.serialize_entry("date", &row.key.date)?;
        map.serialize_entry("transect", &row.key.transect)?;
        map.serialize_entry("tran_length", &finite(row.tran_length))?;
        map.serialize_entry("dune_length", &finite(row.dune_length))?;
        map.serialize_entry("veg_length", &finite(row.veg_length))?;
        for (column, value) in self.columns.iter().zip(&row.values) {
            map.serialize_entry(&column.name, &finite(*value))?;
        }
        map.end()
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl JsonSchema for CoverTable {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("CoverTable")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let column = generator.subschema_for::<CoverColumn>();
        json_schema!({
            "type": "object",
            "required": ["columns", "rows"],
            "properties": {
                "columns": { "type": "array", "items": column },
                "rows": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": BASE_COLUMNS,
                        "properties": {
                            "transect_key": { "type": "string" },
                            "sitename": { "type": "string" },
                            "date": { "type": "string" },
                            "transect": { "type": "string" },
                            "tran_length": { "type": ["number", "null"] },
                            "dune_length": { "type": ["number", "null"] },
                            "veg_length": { "type": ["number", "null"] }
                        },
                        "additionalProperties": { "type": ["number", "null"] }
                    }
                }
            }
        })
    }
}

/// Incremental builder: rows are fixed up front, columns are appended.
#[derive(Debug, Clone)]
pub struct CoverTableBuilder {
    columns: Vec<CoverColumn>,
    rows: Vec<CoverRow>,
    names: HashSet<String>,
}

impl CoverTableBuilder {
    /// Start a table with one row per transect, in the given order.
    #[must_use]
    pub fn new(transects: &[Transect]) -> Self {
        Self {
            columns: Vec::new(),
            rows: transects.iter().map(CoverRow::from_transect).collect(),
            names: HashSet::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[CoverRow] {
        &self.rows
    }

    /// Append the `(axis, zone)` column, computing one value per row.
    ///
    /// Returns `false` and leaves the table unchanged when a column with the
    /// same generated name already exists.
    pub fn push_column(
        &mut self,
        axis: Axis,
        zone: Zone,
        value: impl FnMut(&CoverRow) -> f64,
    ) -> bool {
        let name = axis.column_name(zone);
        if !self.names.insert(name.clone()) {
            return false;
        }

        let values: Vec<f64> = self.rows.iter().map(value).collect();
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.values.push(value);
        }
        self.columns.push(CoverColumn { name, axis, zone });
        true
    }

    #[must_use]
    pub fn build(self) -> CoverTable {
        CoverTable {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::Boundaries;

    fn transect(label: &str, hts: f64) -> Transect {
        Transect {
            key: TransectKey::from_parts("Site", "2023-06-01", label).expect("key"),
            boundaries: Boundaries {
                hts: Some(hts),
                toe_sea: Some(8.0),
                toe_in: Some(8.0),
                lowest_veg: Some(5.0),
                ..Boundaries::default()
            },
        }
    }

    fn sample() -> CoverTable {
        let mut builder = CoverTableBuilder::new(&[transect("1", 10.0), transect("2", 20.0)]);
        builder.push_column(Axis::All, Zone::Whole, |row| 5.0 / row.tran_length);
        builder.push_column(Axis::All, Zone::Dune, |row| 1.0 / row.dune_length);
        builder.build()
    }

    #[test]
    fn builder_keeps_row_and_column_order() {
        let table = sample();
        assert_eq!(
            table.cover_column_names(),
            vec!["pctcov_all_whole", "pctcov_all_dune"]
        );
        let key = TransectKey::from_parts("Site", "2023-06-01", "2").expect("key");
        assert_eq!(table.value(&key, "pctcov_all_whole"), Some(0.25));
        assert_eq!(table.rows()[0].key.transect, "1");
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let mut builder = CoverTableBuilder::new(&[transect("1", 10.0)]);
        assert!(builder.push_column(Axis::All, Zone::Whole, |_| 1.0));
        assert!(!builder.push_column(Axis::All, Zone::Whole, |_| 2.0));
        let table = builder.build();
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.rows()[0].values, vec![1.0]);
    }

    #[test]
    fn serialized_rows_follow_column_order_and_null_nan() {
        let json = serde_json::to_string(&sample()).expect("json");
        let first_row = json.find("\"rows\"").expect("rows key");
        let row_json = &json[first_row..];
        let whole = row_json.find("pctcov_all_whole").expect("whole");
        let dune = row_json.find("pctcov_all_dune").expect("dune");
        assert!(whole < dune);

        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert!(value["rows"][0]["pctcov_all_dune"].is_null());
        assert_eq!(value["rows"][0]["transect_key"], "Site_2023-06-01_1");
    }

    #[test]
    fn select_keeps_matching_columns() {
        let table = sample().select(|c| c.zone == Zone::Dune);
        assert_eq!(table.cover_column_names(), vec!["pctcov_all_dune"]);
        assert_eq!(table.rows()[1].values.len(), 1);
    }

    #[test]
    fn records_align_with_headers() {
        let table = sample();
        let records = table.records(|v| if v.is_finite() { v.to_string() } else { String::new() });
        assert_eq!(records[0].len(), table.headers().len());
        assert_eq!(records[0][0], "Site_2023-06-01_1");
        assert_eq!(records[0][4], "10");
        assert_eq!(records[0][8], "");
    }

    #[test]
    fn every_row_carries_one_value_per_column() {
        let mut builder = CoverTableBuilder::new(&[transect("1", 10.0), transect("2", 20.0)]);
        builder.push_column(Axis::All, Zone::Whole, |_| 1.0);
        builder.push_column(Axis::All, Zone::Whole, |_| 2.0);
        builder.push_column(Axis::All, Zone::Veg, |_| 3.0);
        let table = builder.build();
        assert_eq!(table.columns().len(), 2);
        for row in table.rows() {
            assert_eq!(row.values, vec![1.0, 3.0]);
        }
    }
}
