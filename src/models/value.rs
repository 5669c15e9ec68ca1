//! Cell values and raw CSV rows.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single type-inferred CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Cell could be read as a number
    Number(f64),
    /// Any other non-empty cell
    Text(String),
    /// Empty cell
    Null,
}

impl CellValue {
    /// Returns the numeric value, if this cell holds one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true for empty cells.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text written to an exported CSV cell. Null cells become empty strings.
    #[must_use]
    pub fn to_csv_field(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Null => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Null => serializer.serialize_none(),
        }
    }
}

/// One named cell of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name from the header
    pub name: String,
    /// Inferred cell value
    pub value: CellValue,
}

/// Mapping from column name to value for one CSV line.
///
/// Columns keep header order. Inserting a name that already exists replaces
/// the value in place, so a duplicated header behaves like a repeated object key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: Vec<Field>,
}

impl RawRow {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.value = value;
        } else {
            self.fields.push(Field { name, value });
        }
    }

    /// Looks up a field value by column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// Iterates fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of columns present in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of columns holding a non-null value.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.value.is_null()).count()
    }
}

impl<N: Into<String>> FromIterator<(N, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (N, CellValue)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_column_order() {
        let row: RawRow = [
            ("timestamp", CellValue::Number(1.0)),
            ("b", CellValue::Text("x".to_string())),
            ("a", CellValue::Null),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = row.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["timestamp", "b", "a"]);
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut row = RawRow::new();
        row.insert("a", CellValue::Number(1.0));
        row.insert("b", CellValue::Number(2.0));
        row.insert("a", CellValue::Number(3.0));

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a"), Some(&CellValue::Number(3.0)));
        assert_eq!(row.iter().next().map(|f| f.name.as_str()), Some("a"));
    }

    #[test]
    fn test_populated_count_ignores_nulls() {
        let row: RawRow = [
            ("timestamp", CellValue::Text("2024-01-01".to_string())),
            ("a", CellValue::Null),
            ("b", CellValue::Null),
        ]
        .into_iter()
        .collect();
        assert_eq!(row.populated_count(), 1);
    }

    #[test]
    fn test_csv_field_formatting() {
        assert_eq!(CellValue::Number(10.0).to_csv_field(), "10");
        assert_eq!(CellValue::Number(0.25).to_csv_field(), "0.25");
        assert_eq!(CellValue::Null.to_csv_field(), "");
        assert_eq!(CellValue::Text("T-cue".to_string()).to_csv_field(), "T-cue");
    }

    #[test]
    fn test_serialize_row_as_ordered_json_object() {
        let row: RawRow = [
            ("z", CellValue::Number(1.5)),
            ("a", CellValue::Null),
            ("m", CellValue::Text("hi".to_string())),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"z":1.5,"a":null,"m":"hi"}"#);
    }
}
