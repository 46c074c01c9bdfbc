//! Column-major tabular dataset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::column::{Column, Value};
use crate::error::{OutlierError, Result};

/// An immutable table of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create a dataset, checking that every column has the same length
    /// and that column names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(OutlierError::DuplicateColumn(column.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns[1..] {
                if column.len() != expected {
                    return Err(OutlierError::ColumnLengthMismatch {
                        column: column.name.clone(),
                        expected,
                        got: column.len(),
                    });
                }
            }
        }

        Ok(Self { columns })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Look up a numeric column.
    ///
    /// Fails with `FeatureNotFound` when the column is absent and with
    /// `NonNumericFeature` when it is categorical.
    pub fn numeric_column(&self, name: &str) -> Result<&[Option<f64>]> {
        let column = self
            .column(name)
            .ok_or_else(|| OutlierError::FeatureNotFound {
                feature: name.to_string(),
            })?;
        column
            .as_numeric()
            .ok_or_else(|| OutlierError::NonNumericFeature {
                feature: name.to_string(),
            })
    }

    /// Cell at (`row`, `column`). Absent columns and rows read as missing.
    pub fn value(&self, row: usize, column: &str) -> Value {
        self.column(column)
            .map(|c| c.value(row))
            .unwrap_or(Value::Missing)
    }

    /// Row `row` projected onto `columns`, in the given order.
    pub fn project_row<S: AsRef<str>>(&self, row: usize, columns: &[S]) -> Vec<Value> {
        columns
            .iter()
            .map(|name| self.value(row, name.as_ref()))
            .collect()
    }

    /// Full row as (name, value) pairs, or `None` past the end.
    pub fn row(&self, row: usize) -> Option<Vec<(&str, Value)>> {
        if row >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), c.value(row)))
                .collect(),
        )
    }
}
