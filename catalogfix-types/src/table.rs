use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row has {found} values but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),
}

/// An in-memory table: ordered column names plus rows of cells.
///
/// Every row holds exactly one [`Value`] per column; missing cells are
/// [`Value::Null`]. Row indices are zero-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

#[derive(Serialize, Deserialize)]
struct TableRepr {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl TryFrom<TableRepr> for Table {
    type Error = TableError;

    fn try_from(repr: TableRepr) -> Result<Self, Self::Error> {
        let mut table = Table::new(repr.columns);
        for row in repr.rows {
            table.push_row(row)?;
        }
        Ok(table)
    }
}

impl From<Table> for TableRepr {
    fn from(t: Table) -> Self {
        Self {
            columns: t.columns,
            rows: t.rows,
        }
    }
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from name → value records. Names absent from a record
    /// become `Null`.
    pub fn from_records<I, S>(
        columns: I,
        records: impl IntoIterator<Item = BTreeMap<String, Value>>,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new(columns);
        for mut record in records {
            let row: Vec<Value> = table
                .columns
                .iter()
                .map(|c| record.remove(c).unwrap_or_default())
                .collect();
            if let Some(extra) = record.into_keys().next() {
                return Err(TableError::UnknownColumn(extra));
            }
            table.rows.push(row);
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: impl IntoIterator<Item = Value>) -> Result<(), TableError> {
        let row: Vec<Value> = row.into_iter().collect();
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact (case-sensitive) lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Cell lookup by exact column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.get(row, self.column_index(column)?)
    }

    /// Replace a cell and return the previous value. Out-of-range positions
    /// leave the table untouched and return `None`.
    pub fn set(&mut self, row: usize, column: usize, value: Value) -> Option<Value> {
        let cell = self.rows.get_mut(row)?.get_mut(column)?;
        Some(std::mem::replace(cell, value))
    }

    /// `(row index, cell)` pairs for one column, in row order.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(move |(i, r)| r.get(column).map(|v| (i, v)))
    }

    pub fn rename_columns(&mut self, mut f: impl FnMut(&str) -> String) {
        for c in self.columns.iter_mut() {
            *c = f(c);
        }
    }
}
