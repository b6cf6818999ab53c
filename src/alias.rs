//! Alias generation behind a host-callback-shaped entry point.
//!
//! Backend form layers invoke field callbacks with `(value, record context)`
//! and expect the returned value to be stored back into the field. This
//! module provides [`GenerateAliasCallback`], which adapts that invocation
//! shape onto a pluggable [`AliasGenerator`] collaborator, passing the
//! generator's result (or failure) through unchanged.
//!
//! # Examples
//!
//! ```
//! use optlist::{GenerateAliasCallback, Row, SlugGenerator, Value};
//!
//! let callback = GenerateAliasCallback::new(SlugGenerator::new());
//! let record = Row::new().with("id", 5).with("title", "Annual Report 2024");
//!
//! let alias = callback.invoke(&Value::Null, &record).unwrap();
//! assert_eq!(alias, Value::Text("annual-report-2024".to_string()));
//! ```

use crate::error::Result;
use crate::value::{Row, Value};

/// Produces an alias value for a record.
///
/// `record` is the field mapping of the record being saved and `current`
/// the value the field currently holds. Implementations decide whether to
/// keep the current value or derive a new one; failures propagate to the
/// caller unmodified.
///
/// Functions and closures with the matching signature implement this trait,
/// which keeps ad-hoc generators and test stubs free of newtypes:
///
/// ```
/// use optlist::{AliasGenerator, Row, Value};
///
/// fn fixed(_record: &Row, _current: &Value) -> optlist::Result<Value> {
///     Ok(Value::Text("fixed".to_string()))
/// }
///
/// let alias = fixed.generate(&Row::new(), &Value::Null).unwrap();
/// assert_eq!(alias, Value::Text("fixed".to_string()));
/// ```
pub trait AliasGenerator {
    /// Generate the alias for `record`, given the field's current value.
    ///
    /// # Errors
    ///
    /// Implementation-defined; errors are passed through to the invoking
    /// host unchanged.
    fn generate(&self, record: &Row, current: &Value) -> Result<Value>;
}

impl<F> AliasGenerator for F
where
    F: Fn(&Row, &Value) -> Result<Value>,
{
    fn generate(&self, record: &Row, current: &Value) -> Result<Value> {
        self(record, current)
    }
}

/// The record context a host passes into field callbacks.
///
/// The only thing the alias path needs from it is the active record: the
/// field mapping of the row currently being edited.
pub trait RecordContext {
    /// Field mapping of the currently loaded row.
    fn active_record(&self) -> &Row;
}

/// A bare row can stand in as its own invocation context.
impl RecordContext for Row {
    fn active_record(&self) -> &Row {
        self
    }
}

/// Save-callback adapter that generates an alias value.
///
/// The invocation delegates straight to the wrapped [`AliasGenerator`] and
/// returns its result unchanged: no error translation, no fallback value,
/// no side effects beyond the delegated call.
#[derive(Debug, Clone)]
pub struct GenerateAliasCallback<G> {
    generator: G,
}

impl<G: AliasGenerator> GenerateAliasCallback<G> {
    /// Wrap an alias generator.
    pub fn new(generator: G) -> Self {
        GenerateAliasCallback { generator }
    }

    /// The wrapped generator, for composition and testing.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Invoke the callback with the field's current value and the host's
    /// record context.
    ///
    /// # Errors
    ///
    /// Whatever the wrapped generator reports, unmodified.
    pub fn invoke<X: RecordContext>(&self, value: &Value, context: &X) -> Result<Value> {
        self.generator.generate(context.active_record(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionsError;

    #[test]
    fn test_invoke_delegates_to_generator() {
        let callback = GenerateAliasCallback::new(|_: &Row, _: &Value| -> Result<Value> {
            Ok(Value::Text("bar".to_string()))
        });

        let alias = callback
            .invoke(&Value::Text("foo".to_string()), &Row::new())
            .unwrap();
        assert_eq!(alias, Value::Text("bar".to_string()));
    }

    #[test]
    fn test_invoke_passes_record_and_value_through() {
        let callback =
            GenerateAliasCallback::new(|record: &Row, current: &Value| -> Result<Value> {
                assert_eq!(record.field("id"), &Value::Int(9));
                assert_eq!(current, &Value::Text("kept".to_string()));
                Ok(current.clone())
            });

        let record = Row::new().with("id", 9);
        let alias = callback
            .invoke(&Value::Text("kept".to_string()), &record)
            .unwrap();
        assert_eq!(alias, Value::Text("kept".to_string()));
    }

    #[test]
    fn test_generator_failure_propagates_unchanged() {
        let callback = GenerateAliasCallback::new(|_: &Row, _: &Value| -> Result<Value> {
            Err(OptionsError::Generator("backend unavailable".into()))
        });

        let err = callback.invoke(&Value::Null, &Row::new()).unwrap_err();
        assert!(matches!(err, OptionsError::Generator(_)));
    }

    #[test]
    fn test_generator_accessor() {
        let callback = GenerateAliasCallback::new(|_: &Row, current: &Value| -> Result<Value> {
            Ok(current.clone())
        });

        let direct = callback
            .generator()
            .generate(&Row::new(), &Value::Int(3))
            .unwrap();
        assert_eq!(direct, Value::Int(3));
    }
}
