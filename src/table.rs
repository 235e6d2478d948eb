//! Column-named tabular results.
//!
//! Every endpoint returns a [`Table`]. Its column set depends only on the
//! endpoint's column map and the rename flag, so an empty result from a failed
//! call has exactly the same columns as a successful call with zero rows.

use serde::Serialize;
use serde_json::{Map, Value};

/// Pairs of (API field name, display name), in display order.
pub type ColumnMap = [(&'static str, &'static str)];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given columns and no rows.
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

    /// Empty table shaped by a column map.
    pub fn empty(map: &ColumnMap, rename: bool) -> Self {
        Self::new(map.iter().map(|(key, display)| if rename { *display } else { *key }))
    }

    /// Builds a table from JSON objects.
    ///
    /// Mapped fields come first in map order. Fields missing from the map are
    /// appended under their API names so no data is dropped.
    pub fn from_records(records: &[Map<String, Value>], map: &ColumnMap, rename: bool) -> Self {
        let mut table = Self::empty(map, rename);
        let mut keys: Vec<String> = map.iter().map(|(key, _)| key.to_string()).collect();

        for record in records {
            for key in record.keys() {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.clone());
                    table.columns.push(key.clone());
                }
            }
        }

        for record in records {
            let row = keys
                .iter()
                .map(|key| record.get(key).map(cell_text).unwrap_or_default())
                .collect();
            table.rows.push(row);
        }

        table
    }

    /// Appends a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (`row`, `column`), if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|r| r[index].as_str())
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[index].as_str()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<String>> {
        self.rows.iter()
    }

    /// Concatenates `other` below `self`.
    ///
    /// Columns are unioned: new columns from `other` are added at the end and
    /// cells that a side does not have are left empty.
    pub fn append(&mut self, other: Table) {
        for column in &other.columns {
            if self.column_index(column).is_none() {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }

        let positions: Vec<usize> = other
            .columns
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();

        for other_row in other.rows {
            let mut row = vec![String::new(); self.columns.len()];
            for (value, &index) in other_row.into_iter().zip(positions.iter()) {
                row[index] = value;
            }
            self.rows.push(row);
        }
    }

    /// Stable ascending sort on a column's text. Unknown columns leave the order untouched.
    pub fn sort_by_column(&mut self, name: &str) {
        if let Some(index) = self.column_index(name) {
            self.rows.sort_by(|a, b| a[index].cmp(&b[index]));
        }
    }

    /// Rows for which `predicate` holds, with the same columns.
    pub fn filter<F>(&self, mut predicate: F) -> Table
    where
        F: FnMut(&[String]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
