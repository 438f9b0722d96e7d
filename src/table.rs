//! Tabular result values.
//!
//! Every query returns typed records; this module is the presentation
//! contract on top of them: ordered columns, a flattened key→value view for
//! the summary-text generator, and the radar-style min–max normalization.
//! The `NA` sentinel stays non-numeric end to end — it renders and
//! serializes as the string "NA", never as zero.

use serde::ser::{Serialize, Serializer};
use std::fmt;

/// One cell of a result table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    /// Undefined ratio (zero denominator). Distinct from zero.
    Na,
}

impl Value {
    /// Numeric view of the cell; `Text` and `Na` have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) | Value::Na => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Na => f.write_str("NA"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Text(v) => serializer.serialize_str(v),
            Value::Na => serializer.serialize_str("NA"),
        }
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// `None` is the NA sentinel.
impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Value::Float(v),
            None => Value::Na,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// A result type with a fixed column order.
pub trait Tabular {
    fn columns(&self) -> Vec<String>;
    fn row(&self) -> Vec<Value>;

    /// Flattened key→value view, for single-row consumers (e.g. the
    /// summary-text prompt builder).
    fn fields(&self) -> Vec<(String, Value)> {
        self.columns().into_iter().zip(self.row()).collect()
    }
}

/// An ordered-column table of [`Value`] cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a slice of records; empty input yields a table
    /// with no columns.
    pub fn from_tabular<T: Tabular>(items: &[T]) -> Self {
        let mut table = match items.first() {
            Some(first) => Table::new(first.columns()),
            None => Table::new(Vec::new()),
        };
        for item in items {
            table.push_row(item.row());
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        assert_eq!(row.len(), self.columns.len(), "row width mismatch");
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Min–max normalize each fully numeric column onto [0, 1]: the column
    /// minimum maps to 0, the maximum to 1, and a zero-variance column maps
    /// uniformly to 0. Columns containing any text or NA cell pass through
    /// untouched.
    pub fn min_max_normalized(&self) -> Table {
        let mut out = self.clone();
        for col in 0..self.columns.len() {
            let numeric: Option<Vec<f64>> =
                self.rows.iter().map(|r| r[col].as_f64()).collect();
            let Some(values) = numeric else { continue };
            if values.is_empty() {
                continue;
            }
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for (row, v) in out.rows.iter_mut().zip(&values) {
                row[col] = if max > min {
                    Value::Float((v - min) / (max - min))
                } else {
                    Value::Float(0.0)
                };
            }
        }
        out
    }

    /// JSON array of objects keyed by column name.
    pub fn to_json_records(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.clone(), serde_json::to_value(v).unwrap_or_default()))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect();
        serde_json::Value::Array(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Table {
        let mut t = Table::new(vec!["Player".into(), "Runs".into(), "Average".into()]);
        t.push_row(vec!["A".into(), Value::Int(10), Value::Float(25.0)]);
        t.push_row(vec!["B".into(), Value::Int(30), Value::Float(25.0)]);
        t.push_row(vec!["C".into(), Value::Int(20), Value::Float(25.0)]);
        t
    }

    #[test]
    fn normalization_maps_min_to_zero_and_max_to_one() {
        let n = sample().min_max_normalized();
        let runs: Vec<f64> = n.rows().iter().map(|r| r[1].as_f64().unwrap()).collect();
        assert_relative_eq!(runs[0], 0.0);
        assert_relative_eq!(runs[1], 1.0);
        assert_relative_eq!(runs[2], 0.5);
        for v in runs {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn zero_variance_column_normalizes_to_zero() {
        let n = sample().min_max_normalized();
        for row in n.rows() {
            assert_eq!(row[2], Value::Float(0.0));
        }
    }

    #[test]
    fn text_column_passes_through() {
        let n = sample().min_max_normalized();
        assert_eq!(n.rows()[0][0], Value::Text("A".into()));
    }

    #[test]
    fn na_cell_keeps_its_column_untouched() {
        let mut t = Table::new(vec!["Average".into()]);
        t.push_row(vec![Value::Na]);
        t.push_row(vec![Value::Float(12.5)]);
        let n = t.min_max_normalized();
        assert_eq!(n.rows()[0][0], Value::Na);
        assert_eq!(n.rows()[1][0], Value::Float(12.5));
    }

    #[test]
    fn na_renders_and_serializes_as_string_not_zero() {
        assert_eq!(Value::Na.to_string(), "NA");
        assert_eq!(serde_json::to_value(Value::Na).unwrap(), "NA");
        assert_eq!(Value::Na.as_f64(), None);
    }

    #[test]
    fn json_records_are_keyed_by_column() {
        let json = sample().to_json_records();
        assert_eq!(json[0]["Player"], "A");
        assert_eq!(json[1]["Runs"], 30);
    }
}
