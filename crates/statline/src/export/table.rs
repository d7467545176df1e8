//! Tabular data model for export
//!
//! An [`ExportTable`] is an ordered list of [`ExportRecord`]s that all share the
//! same columns in the same order. The invariant is checked by
//! [`ExportTable::validate`] rather than at construction so that callers can
//! build tables incrementally.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Scalar cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl CellValue {
    /// Convert a JSON scalar. Nested arrays and objects are rejected.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Self::Text(String::new())),
            JsonValue::Bool(b) => Ok(Self::Text(b.to_string())),
            JsonValue::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| Error::Encoding(format!("number out of range: {}", n))),
            JsonValue::String(s) => Ok(Self::Text(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => Err(Error::Encoding(
                "cell values must be scalars, found nested array or object".to_string(),
            )),
        }
    }
}

/// Ordered mapping from column name to cell value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRecord {
    cells: Vec<(String, CellValue)>,
}

impl ExportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (builder style)
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((column.into(), value.into()));
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().map(|(_, v)| v)
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Build a record from a JSON object, keeping key order
    pub fn from_json_object(object: &Map<String, JsonValue>) -> Result<Self> {
        let mut record = Self::new();
        for (key, value) in object {
            record.push(key.as_str(), CellValue::from_json(value)?);
        }
        Ok(record)
    }
}

impl<K, V> FromIterator<(K, V)> for ExportRecord
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered sequence of uniform records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportTable {
    records: Vec<ExportRecord>,
}

impl ExportTable {
    pub fn new(records: Vec<ExportRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: ExportRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names taken from the first record's key order
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.columns().collect())
            .unwrap_or_default()
    }

    /// Check that every record has the same columns in the same order and
    /// that every number is finite
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.records.first() else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for column in first.columns() {
            if column.is_empty() {
                return Err(Error::Encoding("empty column name".to_string()));
            }
            if !seen.insert(column) {
                return Err(Error::Encoding(format!("duplicate column: {}", column)));
            }
        }

        for (index, record) in self.records.iter().enumerate() {
            if index > 0 && !record.columns().eq(first.columns()) {
                return Err(Error::Encoding(format!(
                    "record {} has columns [{}], expected [{}]",
                    index,
                    record.columns().collect::<Vec<_>>().join(", "),
                    first.columns().collect::<Vec<_>>().join(", "),
                )));
            }
            if let Some((column, value)) = record
                .cells
                .iter()
                .find(|(_, v)| matches!(v, CellValue::Number(n) if !n.is_finite()))
            {
                return Err(Error::Encoding(format!(
                    "record {} has non-finite number {} in column {}",
                    index, value, column
                )));
            }
        }

        Ok(())
    }

    /// Parse a JSON array of flat objects
    pub fn from_json(input: &str) -> Result<Self> {
        let value: JsonValue =
            serde_json::from_str(input).map_err(|e| Error::Encoding(e.to_string()))?;

        let JsonValue::Array(items) = value else {
            return Err(Error::Encoding(
                "expected a JSON array of objects".to_string(),
            ));
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                JsonValue::Object(object) => ExportRecord::from_json_object(object),
                _ => Err(Error::Encoding(format!("record {} is not an object", index))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(records))
    }
}

impl FromIterator<ExportRecord> for ExportTable {
    fn from_iter<I: IntoIterator<Item = ExportRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> ExportTable {
        ExportTable::new(vec![
            ExportRecord::new().with("name", "John").with("city", "Seattle"),
            ExportRecord::new().with("name", "Mike").with("city", "Los Angeles"),
        ])
    }

    #[test]
    fn test_columns_follow_first_record() {
        let table = people();
        assert_eq!(table.columns(), vec!["name", "city"]);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = ExportTable::default();
        assert!(table.columns().is_empty());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_mismatched_columns_rejected() {
        let mut table = people();
        table.push(ExportRecord::new().with("name", "Ana").with("team", "Storm"));
        let err = table.validate().unwrap_err();
        assert!(err.is_encoding());
        assert!(err.to_string().contains("record 2"));
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let mut table = people();
        table.push(ExportRecord::new().with("city", "Boston").with("name", "Ana"));
        assert!(table.validate().unwrap_err().is_encoding());
    }

    #[test]
    fn test_duplicate_and_empty_columns_rejected() {
        let dup = ExportTable::new(vec![ExportRecord::new().with("a", 1u32).with("a", 2u32)]);
        assert!(dup.validate().unwrap_err().is_encoding());

        let empty = ExportTable::new(vec![ExportRecord::new().with("", "x")]);
        assert!(empty.validate().unwrap_err().is_encoding());
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut table = people();
            table.push(ExportRecord::new().with("name", "Ana").with("city", bad));
            let err = table.validate().unwrap_err();
            assert!(err.is_encoding());
            assert!(err.to_string().contains("record 2"));
        }

        let first = ExportTable::new(vec![ExportRecord::new().with("pts", f64::NAN)]);
        assert!(first.validate().unwrap_err().is_encoding());
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let table =
            ExportTable::from_json(r#"[{"name":"John","city":"Seattle","age":31}]"#).unwrap();
        assert_eq!(table.columns(), vec!["name", "city", "age"]);
        assert_eq!(
            table.records()[0].get("age"),
            Some(&CellValue::Number(31.0))
        );
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = ExportTable::from_json(r#"[{"name":{"first":"John"}}]"#).unwrap_err();
        assert!(err.is_encoding());

        let err = ExportTable::from_json(r#"{"name":"John"}"#).unwrap_err();
        assert!(err.is_encoding());
    }
}
