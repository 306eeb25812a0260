use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table and CSV output flatten the JSON value: an array of objects becomes
/// one row per element, an object becomes key/value rows.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table | OutputFormat::Csv => {
            let (headers, rows) = tabulate(serde_json::to_value(value)?);
            let headers = headers.iter().map(String::as_str).collect::<Vec<_>>();
            render_rows(&headers, &rows, format)
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render pre-flattened rows as an aligned table or CSV.
///
/// JSON formats fall back to an array of header-keyed objects.
pub fn render_rows(
    headers: &[&str],
    rows: &[Vec<String>],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render_aligned(headers, rows, options))
        }
        OutputFormat::Csv => rows_to_csv(headers, rows),
        OutputFormat::Json | OutputFormat::Raw => {
            let objects = rows
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .zip(row)
                        .map(|(header, cell)| ((*header).to_string(), Value::String(cell.clone())))
                        .collect::<serde_json::Map<_, _>>()
                })
                .collect::<Vec<_>>();
            render(&objects, format)
        }
    }
}

fn rows_to_csv(headers: &[&str], rows: &[Vec<String>]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|error| error.into_error())?;
    let text = String::from_utf8(bytes)?;
    Ok(text.trim_end_matches('\n').to_string())
}

fn tabulate(value: Value) -> (Vec<String>, Vec<Vec<String>>) {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers = Vec::<String>::new();
            for map in items.iter().filter_map(Value::as_object) {
                for key in map.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(String::new, value_to_cell))
                        .collect()
                })
                .collect();
            (headers, rows)
        }
        Value::Array(items) => (
            vec![String::from("value")],
            items.iter().map(|item| vec![value_to_cell(item)]).collect(),
        ),
        Value::Object(map) => (
            vec![String::from("key"), String::from("value")],
            map.iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect(),
        ),
        scalar => (vec![String::from("value")], vec![vec![value_to_cell(&scalar)]]),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|item| !item.is_object() && !item.is_array()) => {
            items.iter().map(value_to_cell).collect::<Vec<_>>().join(", ")
        }
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_rows};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
        codes: Vec<&'static str>,
    }

    fn example() -> Example {
        Example {
            id: "x",
            value: 7,
            codes: vec!["ABMA", "SAND"],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("ABMA, SAND"));
    }

    #[test]
    fn csv_render_for_array_uses_union_of_keys() {
        let out = render(&vec![example(), example()], OutputFormat::Csv).expect("csv render");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let mut headers: Vec<&str> = lines[0].split(',').collect();
        headers.sort_unstable();
        assert_eq!(headers, vec!["codes", "id", "value"]);
        assert!(lines[1].contains("\"ABMA, SAND\""));
    }

    #[test]
    fn rows_render_as_json_objects() {
        let rows = vec![vec!["1".to_string(), "0.5".to_string()]];
        let out = render_rows(&["transect", "pctcov_all_whole"], &rows, OutputFormat::Raw)
            .expect("raw rows");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["transect"], "1");
        assert_eq!(parsed[0]["pctcov_all_whole"], "0.5");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn empty_rows_table_is_labelled() {
        let out = render_rows(&["a"], &[], OutputFormat::Table).expect("table");
        assert_eq!(out, "(no rows)");
    }
}
