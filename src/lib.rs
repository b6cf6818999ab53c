#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # optlist
//!
//! Adapters between record collections and the option lists rendered by
//! selection widgets, plus a host-callback-shaped entry point for alias
//! (slug) generation.
//!
//! ## Quick Start
//!
//! ### Building an option list
//!
//! ```
//! use optlist::{CollectionOptions, MemoryCollection, OptionSequence, Row};
//!
//! let collection = MemoryCollection::from_rows(vec![
//!     Row::new().with("id", 1).with("name", "News"),
//!     Row::new().with("id", 2).with("name", "Events"),
//! ]);
//!
//! let mut options = CollectionOptions::new(collection).label_field("name");
//! for entry in options.entries() {
//!     println!("{} => {}", entry.key, entry.label);
//! }
//! ```
//!
//! ### Generating an alias
//!
//! ```
//! use optlist::{GenerateAliasCallback, Row, SlugGenerator, Value};
//!
//! let callback = GenerateAliasCallback::new(SlugGenerator::new());
//! let record = Row::new().with("title", "Hello World");
//!
//! let alias = callback.invoke(&Value::Null, &record).unwrap();
//! assert_eq!(alias, Value::Text("hello-world".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — Scalar [`Value`]s and ordered [`Row`] field mappings
//! - [`collection`] — The [`RecordCollection`] cursor contract and the
//!   in-memory [`MemoryCollection`]
//! - [`options`] — [`CollectionOptions`] with the [`OptionSequence`] and
//!   [`OptionLookup`] capability traits
//! - [`alias`] — The [`AliasGenerator`] seam and [`GenerateAliasCallback`]
//! - [`slug`] — The field-based [`SlugGenerator`]
//! - [`error`] — Error types and the crate [`Result`] alias

pub mod alias;
pub mod collection;
pub mod error;
pub mod options;
pub mod slug;
/// Scalar field values and ordered row mappings.
pub mod value;

pub use alias::{AliasGenerator, GenerateAliasCallback, RecordContext};
pub use collection::{MemoryCollection, RecordCollection};
pub use error::{OptionsError, Result};
pub use options::{CollectionOptions, Entries, OptionEntry, OptionLookup, OptionSequence};
pub use slug::SlugGenerator;
pub use value::{Row, Value};
