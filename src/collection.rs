//! Cursor-based record collections.
//!
//! This module defines the [`RecordCollection`] trait (the black-box cursor
//! contract the option adapter consumes) and [`MemoryCollection`], the
//! standard in-memory implementation backing plain-array option sources and
//! tests.
//!
//! A collection has one active row and a cursor shared by everything holding
//! a reference to it. Traversal is single-threaded and forward-only;
//! iterating one collection from two places at once corrupts both passes, so
//! a collection is assumed to be exclusively owned by one adapter for the
//! duration of any pass.
//!
//! # Examples
//!
//! ```
//! use optlist::{MemoryCollection, RecordCollection, Row, Value};
//!
//! let mut collection = MemoryCollection::from_rows(vec![
//!     Row::new().with("id", 1).with("name", "News"),
//!     Row::new().with("id", 2).with("name", "Events"),
//! ]);
//!
//! assert_eq!(collection.len(), 2);
//! assert_eq!(collection.field("name"), &Value::Text("News".to_string()));
//!
//! collection.advance();
//! assert_eq!(collection.field("id"), &Value::Int(2));
//! ```

use crate::error::Result;
use crate::value::{Row, Value, NULL};

/// Cursor contract over a sequential record collection.
///
/// The adapter layer drives this interface and nothing else: total count for
/// termination checks, cursor movement, named field access on the active
/// row, and a field-mapping snapshot of the active row. Note that
/// exhaustion is determined by the caller comparing its own counter against
/// [`len`](RecordCollection::len): there is no end-of-data sentinel, so
/// callers must keep their counter and the cursor in lockstep.
pub trait RecordCollection {
    /// Total number of records in the collection.
    fn len(&self) -> usize;

    /// Whether the collection has no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the cursor to the next record.
    fn advance(&mut self);

    /// Rewind the cursor to the first record.
    fn reset(&mut self);

    /// Named field of the active row.
    ///
    /// Reads as [`Value::Null`] when the field is absent or the cursor has
    /// moved past the last record.
    fn field(&self, name: &str) -> &Value;

    /// Field-mapping snapshot of the active row.
    ///
    /// The snapshot is detached from the cursor: it stays consistent however
    /// often it is re-read and however the cursor moves afterwards. An
    /// exhausted collection snapshots as an empty row.
    fn row(&self) -> Row;
}

/// In-memory record collection over a list of [`Row`]s.
///
/// # Examples
///
/// Collections are usually built from rows or parsed from a JSON array of
/// flat objects:
///
/// ```
/// use optlist::{MemoryCollection, RecordCollection};
///
/// let collection = MemoryCollection::from_json(
///     r#"[{"id": 1, "name": "News"}, {"id": 2, "name": "Events"}]"#,
/// ).unwrap();
/// assert_eq!(collection.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    rows: Vec<Row>,
    cursor: usize,
}

impl MemoryCollection {
    /// Create a collection from a list of rows, cursor at the first record.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        MemoryCollection { rows, cursor: 0 }
    }

    /// Parse a collection from a JSON array of flat objects.
    ///
    /// Each object becomes one row. Values must be scalars: strings,
    /// integers, booleans, or null.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`](crate::OptionsError::Parse) for
    /// malformed JSON and
    /// [`OptionsError::InvalidValue`](crate::OptionsError::InvalidValue)
    /// when the document is not an array of objects or a field holds a
    /// float, array, or nested object.
    pub fn from_json(data: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(data)?;
        let serde_json::Value::Array(items) = parsed else {
            return Err(crate::OptionsError::InvalidValue(
                "expected a JSON array of row objects".to_string(),
            ));
        };

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let serde_json::Value::Object(fields) = item else {
                return Err(crate::OptionsError::InvalidValue(
                    "expected a JSON object per row".to_string(),
                ));
            };
            let mut row = Row::new();
            for (name, value) in fields {
                row.set(name, Value::try_from(value)?);
            }
            rows.push(row);
        }

        Ok(MemoryCollection::from_rows(rows))
    }

    /// Append a row at the end of the collection.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// The rows backing this collection, in traversal order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl RecordCollection for MemoryCollection {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn field(&self, name: &str) -> &Value {
        self.rows
            .get(self.cursor)
            .map_or(&NULL, |row| row.field(name))
    }

    fn row(&self) -> Row {
        self.rows.get(self.cursor).cloned().unwrap_or_default()
    }
}

impl FromIterator<Row> for MemoryCollection {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        MemoryCollection::from_rows(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionsError;

    fn sample() -> MemoryCollection {
        MemoryCollection::from_rows(vec![
            Row::new().with("id", 1).with("name", "a"),
            Row::new().with("id", 2).with("name", "b"),
        ])
    }

    #[test]
    fn test_cursor_advances_and_resets() {
        let mut collection = sample();
        assert_eq!(collection.field("id"), &Value::Int(1));

        collection.advance();
        assert_eq!(collection.field("id"), &Value::Int(2));

        collection.reset();
        assert_eq!(collection.field("id"), &Value::Int(1));
    }

    #[test]
    fn test_exhausted_cursor_reads_null() {
        let mut collection = sample();
        collection.advance();
        collection.advance();
        assert_eq!(collection.field("id"), &Value::Null);
        assert!(collection.row().is_empty());
    }

    #[test]
    fn test_row_snapshot_is_detached() {
        let mut collection = sample();
        let snapshot = collection.row();
        collection.advance();
        assert_eq!(snapshot.field("id"), &Value::Int(1));
        assert_eq!(collection.row().field("id"), &Value::Int(2));
    }

    #[test]
    fn test_from_json() {
        let collection = MemoryCollection::from_json(
            r#"[{"id": 1, "name": "a", "active": true}, {"id": 2, "name": null}]"#,
        )
        .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.rows()[0].field("active"), &Value::Bool(true));
        assert_eq!(collection.rows()[1].field("name"), &Value::Null);
    }

    #[test]
    fn test_from_json_rejects_non_arrays() {
        let err = MemoryCollection::from_json(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue(_)));
    }

    #[test]
    fn test_from_json_rejects_floats() {
        let err = MemoryCollection::from_json(r#"[{"id": 1.5}]"#).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = MemoryCollection::from_json("not json").unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
    }
}
