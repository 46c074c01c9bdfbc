//! Dataset loading from CSV and JSON records.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use outlier_spi::{Column, Dataset, OutlierError, Result};
use serde_json::{Map, Value as JsonValue};

const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none"];

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}

/// Build a column from raw text cells, numeric if every present cell parses.
fn infer_column(name: &str, cells: Vec<Option<String>>) -> Column {
    let parsed: Option<Vec<Option<f64>>> = cells
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(text) => text.trim().parse::<f64>().ok().map(Some),
        })
        .collect();

    match parsed {
        Some(values) => Column::numeric(name, values),
        None => Column::categorical(name, cells),
    }
}

// ============================================================================
// CSV
// ============================================================================

/// Load a dataset from CSV with a header row.
///
/// Empty cells and `NA`-style markers are missing values. A column is
/// numeric when all of its present cells parse as numbers.
pub fn load_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| OutlierError::Load(format!("Failed to read headers: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for (line, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| OutlierError::Load(format!("Failed to read record {}: {}", line + 1, e)))?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let cell = record.get(idx).filter(|c| !is_missing(c)).map(str::to_string);
            column.push(cell);
        }
    }

    let columns = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| infer_column(name, values))
        .collect();
    Dataset::new(columns)
}

// ============================================================================
// JSON
// ============================================================================

/// Build a dataset from flat JSON objects.
///
/// Columns appear in first-seen key order. Keys absent from a record and
/// `null` values are missing. A column is numeric when every present value
/// is a number or boolean; otherwise every value is kept as text.
pub fn dataset_from_records(records: &[Map<String, JsonValue>]) -> Result<Dataset> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.contains(key) {
                names.push(key.clone());
            }
        }
    }

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        let cells: Vec<Option<&JsonValue>> = records
            .iter()
            .map(|r| r.get(name).filter(|v| !v.is_null()))
            .collect();

        if let Some(bad) = cells
            .iter()
            .flatten()
            .find(|v| v.is_array() || v.is_object())
        {
            return Err(OutlierError::Load(format!(
                "Column '{}' holds a nested value: {}",
                name, bad
            )));
        }

        let numeric = cells
            .iter()
            .flatten()
            .all(|v| v.is_number() || v.is_boolean());

        let column = if numeric {
            Column::numeric(
                name.as_str(),
                cells.iter().map(|c| c.and_then(json_number)).collect(),
            )
        } else {
            Column::categorical(
                name.as_str(),
                cells.iter().map(|c| c.map(json_text)).collect(),
            )
        };
        columns.push(column);
    }

    Dataset::new(columns)
}

fn json_number(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => other.as_f64(),
    }
}

fn json_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Load a dataset from a JSON document.
///
/// Accepts an array of records, or an object holding the array under
/// `records`, `data` or `rows`.
pub fn load_json_value(json: &JsonValue) -> Result<Dataset> {
    let array = match json {
        JsonValue::Array(arr) => arr,
        JsonValue::Object(obj) => ["records", "data", "rows"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(|v| v.as_array()))
            .ok_or_else(|| OutlierError::Load("Could not find a records array in JSON".to_string()))?,
        _ => return Err(OutlierError::Load("Expected a JSON array of records".to_string())),
    };

    let records = array
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_object()
                .cloned()
                .ok_or_else(|| OutlierError::Load(format!("Record {} is not a JSON object", i)))
        })
        .collect::<Result<Vec<_>>>()?;

    dataset_from_records(&records)
}

/// Load a dataset from a JSON reader.
pub fn load_json<R: Read>(reader: R) -> Result<Dataset> {
    let json: JsonValue = serde_json::from_reader(reader)
        .map_err(|e| OutlierError::Load(format!("Failed to parse JSON: {}", e)))?;
    load_json_value(&json)
}

// ============================================================================
// Files
// ============================================================================

/// Load a dataset from a file, choosing the format by extension.
///
/// Other extensions are read as JSON when the first non-whitespace byte
/// opens an array or object, and as CSV otherwise.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let open = || {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| OutlierError::Load(format!("Failed to open {}: {}", path.display(), e)))
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(open()?)?,
        "json" => load_json(open()?)?,
        _ => {
            let bytes = std::fs::read(path).map_err(|e| {
                OutlierError::Load(format!("Failed to open {}: {}", path.display(), e))
            })?;
            if looks_like_json(&bytes) {
                load_json(bytes.as_slice())?
            } else {
                load_csv(bytes.as_slice())?
            }
        }
    };

    tracing::debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// A one-line JSON document is also a valid CSV header, so sniff first.
fn looks_like_json(bytes: &[u8]) -> bool {
    matches!(
        bytes.iter().find(|b| !b.is_ascii_whitespace()),
        Some(b'[') | Some(b'{')
    )
}
