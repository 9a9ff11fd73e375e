use lens_core::entities::FrameworkResults;
use lens_core::enums::ComplianceStatus;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let style = table::TableStyle {
                width: prefs.width,
                color: prefs.color,
            };
            Ok(render_table(serde_json::to_value(value)?, style))
        }
    }
}

/// Print `value` to stdout in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a report document. Tables show one row per framework instead of
/// the nested document.
pub fn output_report<T: Serialize>(
    report: &T,
    results: &FrameworkResults,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        output(&framework_rows(results), format)
    } else {
        output(report, format)
    }
}

#[derive(Debug, Serialize)]
pub struct FrameworkRow<'a> {
    pub framework: &'a str,
    pub score: f64,
    pub status: ComplianceStatus,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

#[must_use]
pub fn framework_rows(results: &FrameworkResults) -> Vec<FrameworkRow<'_>> {
    results
        .values()
        .map(|result| FrameworkRow {
            framework: &result.framework,
            score: result.score,
            status: result.status,
            passed: result.passed_count(),
            failed: result.failed_count(),
            warnings: result.warning_count(),
        })
        .collect()
}

fn render_table(value: Value, style: table::TableStyle) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            // Columns in first-seen field order.
            let mut headers: Vec<String> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| "-".to_string(), cell))
                        .collect()
                })
                .collect::<Vec<_>>();
            let refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            table::render(&refs, &rows, style)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            table::render(&["value"], &rows, style)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render(&["field", "value"], &rows, style)
        }
        scalar => table::render(&["value"], &[vec![cell(&scalar)]], style),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
