//! Option-list adaptation of record collections.
//!
//! This module provides [`CollectionOptions`], which adapts any
//! [`RecordCollection`] into the ordered `(key, label)` entries a selection
//! widget renders, plus the two capability traits it implements:
//!
//! - [`OptionSequence`] — a restartable, forward-only entry sequence with an
//!   ordered snapshot export
//! - [`OptionLookup`] — read-only point lookup by key
//!
//! # Examples
//!
//! ```
//! use optlist::{CollectionOptions, MemoryCollection, OptionSequence, Row, Value};
//!
//! let collection = MemoryCollection::from_rows(vec![
//!     Row::new().with("id", 1).with("name", "News"),
//!     Row::new().with("id", 2).with("name", "Events"),
//! ]);
//!
//! let mut options = CollectionOptions::new(collection).label_field("name");
//!
//! let entries: Vec<_> = options.entries().collect();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].key, Value::Int(1));
//! assert_eq!(entries[0].label, Value::Text("News".to_string()));
//! ```
//!
//! Deriving labels with a function instead of a field:
//!
//! ```
//! use optlist::{CollectionOptions, MemoryCollection, OptionSequence, Row, Value};
//!
//! # let collection = MemoryCollection::from_rows(vec![
//! #     Row::new().with("id", 1).with("name", "News"),
//! # ]);
//! let mut options = CollectionOptions::new(collection)
//!     .label_with(|row| Value::Text(format!("#{} {}", row.field("id"), row.field("name"))));
//!
//! let entry = options.entries().next().unwrap();
//! assert_eq!(entry.label, Value::Text("#1 News".to_string()));
//! ```

use crate::collection::RecordCollection;
use crate::value::{Row, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default value field: the identifier column.
const DEFAULT_VALUE_FIELD: &str = "id";

/// One `(key, label)` pair of an option list.
///
/// Key uniqueness is assumed but not enforced: duplicate keys in the source
/// collection yield duplicate entries in the produced sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// The submitted value of the option.
    pub key: Value,
    /// The rendered label of the option.
    pub label: Value,
}

/// How the label of an entry is produced from the current record.
enum LabelSpec {
    /// Read a named field of the active row.
    Field(String),
    /// Apply a derivation function to a snapshot of the active row.
    Derived(Box<dyn Fn(&Row) -> Value + Send + Sync>),
}

impl fmt::Debug for LabelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
            LabelSpec::Derived(_) => f.debug_tuple("Derived").field(&"<fn>").finish(),
        }
    }
}

/// A restartable, forward-only sequence of option entries.
///
/// One pass yields exactly as many entries as the underlying source has
/// records; [`rewind`](OptionSequence::rewind) restarts the pass from the
/// first record. Termination is count-based, so implementations must keep
/// their own counter and the source cursor in lockstep.
pub trait OptionSequence {
    /// Rewind the sequence to its first entry.
    fn rewind(&mut self);

    /// Yield the entry at the cursor and advance, or `None` once the pass
    /// is exhausted.
    fn next_entry(&mut self) -> Option<OptionEntry>;

    /// Iterate a full pass from the start.
    ///
    /// Rewinds first, then yields every entry in traversal order. The
    /// borrow ends with the iterator, after which the sequence is left in
    /// the exhausted state (or wherever a partial iteration stopped).
    fn entries(&mut self) -> Entries<'_, Self>
    where
        Self: Sized,
    {
        self.rewind();
        Entries { sequence: self }
    }

    /// Materialize a full pass into an ordered `key → label` mapping.
    ///
    /// Restarts and consumes the traversal, leaving the cursor exhausted.
    /// Duplicate keys keep their first position and take their last label,
    /// matching plain keyed-array assignment semantics.
    fn to_map(&mut self) -> IndexMap<Value, Value>
    where
        Self: Sized,
    {
        let mut map = IndexMap::new();
        for entry in self.entries() {
            map.insert(entry.key, entry.label);
        }
        map
    }
}

/// Borrowing iterator over the entries of an [`OptionSequence`].
///
/// Returned by [`OptionSequence::entries`].
#[derive(Debug)]
pub struct Entries<'a, S> {
    sequence: &'a mut S,
}

impl<S: OptionSequence> Iterator for Entries<'_, S> {
    type Item = OptionEntry;

    fn next(&mut self) -> Option<OptionEntry> {
        self.sequence.next_entry()
    }
}

/// Read-only point lookup of records by option key.
///
/// Lookups scan the full source linearly: O(n) per call, no caching. A key
/// present on several records resolves to the first match in traversal
/// order; an absent key is signalled with `None`, never an error.
pub trait OptionLookup {
    /// Find the first record whose value field equals `key`.
    ///
    /// Returns a detached field-mapping snapshot of the record, or `None`
    /// when no record matches.
    fn get(&mut self, key: &Value) -> Option<Row>;

    /// Whether any record's value field equals `key`.
    fn contains_key(&mut self, key: &Value) -> bool {
        self.get(key).is_some()
    }
}

/// Adapts a record collection to the option format.
///
/// The value field (the option key) defaults to `"id"`; the label strategy
/// defaults to the same identifier field until a label field or derivation
/// function is configured. Construction is fluent:
///
/// ```
/// use optlist::{CollectionOptions, MemoryCollection};
///
/// let options = CollectionOptions::new(MemoryCollection::default())
///     .value_field("uuid")
///     .label_field("title");
/// ```
///
/// # Cursor ownership
///
/// The adapter drives the collection's cursor and keeps its own pass
/// counter in lockstep with it; the termination check depends on that.
/// Anything else moving the same cursor mid-pass corrupts the traversal,
/// so the adapter takes the collection by value.
///
/// # Read-only contract
///
/// [`insert`](CollectionOptions::insert) and
/// [`remove`](CollectionOptions::remove) are documented no-ops kept for
/// drop-in compatibility with keyed-container call sites. They never fail
/// and never mutate the backing collection.
#[derive(Debug)]
pub struct CollectionOptions<C> {
    collection: C,
    label: LabelSpec,
    value_field: String,
    position: usize,
}

impl<C: RecordCollection> CollectionOptions<C> {
    /// Wrap a collection with default field configuration.
    #[must_use]
    pub fn new(collection: C) -> Self {
        CollectionOptions {
            collection,
            label: LabelSpec::Field(DEFAULT_VALUE_FIELD.to_string()),
            value_field: DEFAULT_VALUE_FIELD.to_string(),
            position: 0,
        }
    }

    /// Use a named field of each record as the label.
    ///
    /// Has no effect once a derivation function is registered: a function
    /// always takes precedence, regardless of configuration order.
    #[must_use]
    pub fn label_field(mut self, name: impl Into<String>) -> Self {
        if !matches!(self.label, LabelSpec::Derived(_)) {
            self.label = LabelSpec::Field(name.into());
        }
        self
    }

    /// Use a derivation function as the label strategy.
    ///
    /// The function receives a detached field-mapping snapshot of the
    /// current record, so repeated calls at one cursor position are
    /// referentially consistent. Once registered, the function is used for
    /// all reads no matter which label field is configured before or after.
    #[must_use]
    pub fn label_with<F>(mut self, derive: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        self.label = LabelSpec::Derived(Box::new(derive));
        self
    }

    /// Use a named field of each record as the option key.
    #[must_use]
    pub fn value_field(mut self, name: impl Into<String>) -> Self {
        self.value_field = name.into();
        self
    }

    /// The configured label field, or `None` once a derivation function is
    /// registered.
    #[must_use]
    pub fn label_field_name(&self) -> Option<&str> {
        match &self.label {
            LabelSpec::Field(name) => Some(name.as_str()),
            LabelSpec::Derived(_) => None,
        }
    }

    /// The configured value field.
    #[must_use]
    pub fn value_field_name(&self) -> &str {
        &self.value_field
    }

    /// Register a key under the option list.
    ///
    /// **No-op.** The adapter is read-only over its backing collection;
    /// the write is silently discarded.
    pub fn insert(&mut self, _key: Value, _label: Value) {
        // unsupported: read-only adapter
    }

    /// Remove a key from the option list.
    ///
    /// **No-op.** The adapter is read-only over its backing collection;
    /// always returns `None` and leaves the collection unchanged.
    pub fn remove(&mut self, _key: &Value) -> Option<Row> {
        // unsupported: read-only adapter
        None
    }

    /// Key of the active record.
    fn current_key(&self) -> Value {
        self.collection.field(&self.value_field).clone()
    }

    /// Label of the active record per the configured strategy.
    fn current_label(&self) -> Value {
        match &self.label {
            LabelSpec::Field(name) => self.collection.field(name).clone(),
            LabelSpec::Derived(derive) => derive(&self.collection.row()),
        }
    }

    /// Advance the pass counter and the collection cursor together.
    fn step(&mut self) {
        self.position += 1;
        self.collection.advance();
    }
}

impl<C: RecordCollection> OptionSequence for CollectionOptions<C> {
    fn rewind(&mut self) {
        self.position = 0;
        self.collection.reset();
    }

    fn next_entry(&mut self) -> Option<OptionEntry> {
        if self.position >= self.collection.len() {
            return None;
        }
        let entry = OptionEntry {
            key: self.current_key(),
            label: self.current_label(),
        };
        self.step();
        Some(entry)
    }
}

impl<C: RecordCollection> OptionLookup for CollectionOptions<C> {
    /// Linear scan against the configured value field.
    ///
    /// The scan drives the shared cursor, so the adapter is rewound before
    /// and after: any in-progress traversal is invalidated, but counter and
    /// cursor stay in lockstep.
    fn get(&mut self, key: &Value) -> Option<Row> {
        self.rewind();
        let mut found = None;
        while self.position < self.collection.len() {
            if self.collection.field(&self.value_field) == key {
                found = Some(self.collection.row());
                break;
            }
            self.step();
        }
        self.rewind();
        found
    }
}
