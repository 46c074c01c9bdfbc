//! Detection-mode result types.

use serde::{Deserialize, Serialize};

use super::column::Value;

/// A dataset row found anomalous in at least one scanned feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Index of the row in the source dataset.
    pub row: usize,
    /// Cells of the row, aligned with `AnomalyTable::columns`.
    pub values: Vec<Value>,
}

/// Anomalous rows restricted to the scanned feature columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyTable {
    pub columns: Vec<String>,
    pub records: Vec<AnomalyRecord>,
}

impl AnomalyTable {
    /// Table with the given schema and no rows.
    pub fn empty<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Source row indices, in table order.
    pub fn row_indices(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.row).collect()
    }

    /// All cells of one column, or `None` if the column is not in the table.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.records.iter().map(|r| &r.values[idx]).collect())
    }
}
