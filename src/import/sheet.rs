use super::RawRow;
use crate::error::{Result, ScorerError};
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Reads the first sheet of a workbook (or a CSV file) into header-keyed rows.
///
/// The first row supplies the keys. Empty cells are left out of a row,
/// rows with no cells at all are skipped, and columns whose header is blank
/// are ignored. Any failure to decode the file is a `Parse` error naming it.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let rows = if is_csv {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };
    tracing::info!(file = %path.display(), rows = rows.len(), "read input rows");
    Ok(rows)
}

fn read_workbook(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| parse_error(path, e))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| parse_error(path, e))?,
        None => return Err(parse_error(path, "workbook has no sheets")),
    };

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    Ok(rows
        .filter_map(|cells| {
            let row: RawRow = headers
                .iter()
                .zip(cells)
                .filter(|(header, _)| !header.is_empty())
                .filter_map(|(header, cell)| cell_value(cell).map(|value| (header.clone(), value)))
                .collect();
            (!row.is_empty()).then_some(row)
        })
        .collect())
}

fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| parse_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(|e| parse_error(path, e))?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, cell)| !header.is_empty() && !cell.is_empty())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(text) => Some(Value::String(text.clone())),
        Data::Bool(flag) => Some(Value::Bool(*flag)),
        Data::Int(int) => Some(Value::from(*int)),
        Data::Float(float) => Some(
            serde_json::Number::from_f64(*float)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        ),
        other => Some(Value::String(other.to_string())),
    }
}

fn parse_error(path: &Path, reason: impl std::fmt::Display) -> ScorerError {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ScorerError::Parse {
        file,
        reason: reason.to_string(),
    }
}
