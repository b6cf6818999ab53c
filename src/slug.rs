//! Slug-based alias generation.

use crate::alias::AliasGenerator;
use crate::error::{OptionsError, Result};
use crate::value::{Row, Value};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Runs of characters that cannot appear in a slug.
    static ref NON_SLUG: Regex = Regex::new("[^a-z0-9]+").expect("static pattern");
}

/// Default source field for slug derivation.
const DEFAULT_SOURCE_FIELD: &str = "title";

/// Alias generator deriving a URL-safe slug from a source field.
///
/// A non-empty current value is returned unchanged; aliases are only
/// generated when the field is still unset. Otherwise the source field's
/// text is folded to NFKD with combining marks stripped, lowercased, and
/// runs of anything outside `a-z0-9` collapsed to the separator.
///
/// Uniqueness against already-stored aliases is out of scope here; hosts
/// that need it wrap this generator with their own storage check.
///
/// # Examples
///
/// ```
/// use optlist::{AliasGenerator, Row, SlugGenerator, Value};
///
/// let generator = SlugGenerator::new();
/// let record = Row::new().with("title", "Über uns");
///
/// let alias = generator.generate(&record, &Value::Null).unwrap();
/// assert_eq!(alias, Value::Text("uber-uns".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct SlugGenerator {
    source_field: String,
    separator: char,
}

impl SlugGenerator {
    /// Create a generator reading from the `"title"` field with `-` as
    /// separator.
    #[must_use]
    pub fn new() -> Self {
        SlugGenerator {
            source_field: DEFAULT_SOURCE_FIELD.to_string(),
            separator: '-',
        }
    }

    /// Derive the slug from a different source field.
    #[must_use]
    pub fn with_source_field(mut self, name: impl Into<String>) -> Self {
        self.source_field = name.into();
        self
    }

    /// Use a different separator between slug words.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// The configured source field.
    #[must_use]
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    fn slugify(&self, text: &str) -> String {
        let folded: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
        let lowered = folded.to_lowercase();
        let separator = self.separator.to_string();
        let slug = NON_SLUG.replace_all(&lowered, regex::NoExpand(&separator));
        slug.trim_matches(self.separator).to_string()
    }
}

impl Default for SlugGenerator {
    fn default() -> Self {
        SlugGenerator::new()
    }
}

impl AliasGenerator for SlugGenerator {
    /// Keep a non-empty current value; otherwise slugify the source field.
    ///
    /// # Errors
    ///
    /// [`OptionsError::EmptyAlias`] when the source field is unset or
    /// nothing of it survives normalization.
    fn generate(&self, record: &Row, current: &Value) -> Result<Value> {
        if !current.is_empty() {
            return Ok(current.clone());
        }

        let source = record.field(&self.source_field).to_string();
        let slug = self.slugify(&source);
        if slug.is_empty() {
            return Err(OptionsError::EmptyAlias(self.source_field.clone()));
        }

        Ok(Value::Text(slug))
    }
}
