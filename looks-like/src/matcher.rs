use crate::accessor;
use crate::error::InvalidAccessorError;
use crate::properties::{Properties, Property};
use crate::value::{Rendered, Value};
use std::fmt;
use tracing::{debug, trace};

#[cfg(windows)]
const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const NEWLINE: &str = "\n";

/// Creates a matcher that accepts values which look like `expected`.
///
/// ```
/// use looks_like::{like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct User {
///     pub name: String,
///     pub age: u32,
///     session: u64,
/// }
///
/// let expected = User { name: "Alice".to_string(), age: 30, session: 1 };
/// let actual = User { name: "Alice".to_string(), age: 30, session: 2 };
///
/// // `session` is private, so only `name` and `age` are compared.
/// assert!(like(expected).matches(&actual));
/// ```
pub fn like<T: Properties>(expected: T) -> LikeMatcher<T> {
    LikeMatcher::new(expected)
}

/// Structural "looks like" comparison of an expected value against any
/// actual value.
///
/// Two values look alike when every property they have in common (same name
/// on both sides, after exclusions) holds an equal value. Properties present
/// on only one side are ignored, so values of unrelated types can be compared.
/// The comparison is shallow: each property uses its own equality.
///
/// Configuration consumes and returns the matcher. Comparing requires
/// `&mut self` because a failed comparison stores its message, so a matcher
/// can never be reconfigured while a comparison is in progress.
#[derive(Debug)]
pub struct LikeMatcher<T> {
    expected: T,
    excluded: Vec<String>,
    exclude_reference_types: bool,
    message: Option<String>,
}

/// A property whose expected and actual values differ.
#[derive(Debug, Clone, Copy)]
pub struct Mismatch<'a> {
    pub property: &'static str,
    pub expected: &'a dyn Value,
    pub actual: &'a dyn Value,
}

impl fmt::Display for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : expected: {}, but was {}",
            self.property,
            Rendered(self.expected),
            Rendered(self.actual)
        )
    }
}

impl<T: Properties> LikeMatcher<T> {
    pub fn new(expected: T) -> LikeMatcher<T> {
        LikeMatcher {
            expected,
            excluded: Vec::new(),
            exclude_reference_types: false,
            message: None,
        }
    }

    /// Skips the property called `name`.
    ///
    /// Names that no property carries are ignored.
    pub fn exclude_property(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    /// Skips the property exposed by the field `field`, read by `selector`.
    ///
    /// `selector` is never called; it only proves that `T` has a field of
    /// that name. A renamed field is excluded under its property name. Prefer
    /// the [`exclude!`](crate::exclude) macro, which fills in `field` and
    /// rejects anything but a direct field read.
    pub fn exclude_field<V, F>(self, field: &'static str, _selector: F) -> Self
    where
        V: ?Sized,
        F: Fn(&T) -> &V,
    {
        let name = T::property_name(field).unwrap_or(field);
        self.exclude_property(name)
    }

    /// Skips the property read by the accessor source text, e.g. `"|p| p.foo"`.
    ///
    /// ```
    /// use looks_like::like;
    ///
    /// assert!(like(1u32).exclude_accessor("|p| p.count").is_ok());
    /// assert!(like(1u32).exclude_accessor("|p| p.count()").is_err());
    /// ```
    pub fn exclude_accessor(self, accessor: &str) -> Result<Self, InvalidAccessorError> {
        let field = accessor::field_name(accessor)?;
        let name = match T::property_name(&field) {
            Some(name) => name.to_string(),
            None => field,
        };
        Ok(self.exclude_property(name))
    }

    /// Skips every property whose declared type is not a value type.
    pub fn exclude_reference_typed_properties(mut self) -> Self {
        self.exclude_reference_types = true;
        self
    }

    pub fn expected(&self) -> &T {
        &self.expected
    }

    /// The excluded property names, in the order they were added.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// The failure message of the last comparison, if it failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if `actual` looks like the expected value.
    ///
    /// On `false`, [`message`](Self::message) describes every mismatched
    /// property, one per line.
    pub fn matches(&mut self, actual: &dyn Properties) -> bool {
        self.message = None;

        if self.expected.is_none() {
            return actual.is_none();
        }

        if self.expected.value_eq(actual.as_value()) {
            return true;
        }

        let mismatches = self.mismatches(actual);
        if mismatches.is_empty() {
            return true;
        }

        debug!(
            mismatches = mismatches.len(),
            "value does not look like the expected value"
        );
        let message = format_message(&mismatches);
        self.message = Some(message);
        false
    }

    /// Compares the common properties of the expected value and `actual`.
    ///
    /// Unlike [`matches`](Self::matches) this always inspects properties,
    /// even when the two values are equal as a whole.
    pub fn mismatches<'a>(&'a self, actual: &'a dyn Properties) -> Vec<Mismatch<'a>> {
        let actual_properties = self.filter(actual.properties());

        self.filter(self.expected.properties())
            .into_iter()
            .filter_map(|expected| {
                let actual = actual_properties
                    .iter()
                    .find(|actual| actual.name() == expected.name())?;
                (!looks_equal(expected.value(), actual.value())).then(|| {
                    trace!(property = expected.name(), "property mismatch");
                    Mismatch {
                        property: expected.name(),
                        expected: expected.value(),
                        actual: actual.value(),
                    }
                })
            })
            .collect()
    }

    fn filter<'a>(&self, properties: Vec<Property<'a>>) -> Vec<Property<'a>> {
        properties
            .into_iter()
            .filter(|property| {
                !(self.exclude_reference_types && !property.kind().is_value())
                    && !self.excluded.iter().any(|name| name == property.name())
            })
            .collect()
    }
}

fn looks_equal(expected: &dyn Value, actual: &dyn Value) -> bool {
    if expected.is_none() {
        return actual.is_none();
    }
    expected.value_eq(actual)
}

/// Joins mismatches with the platform's line separator.
pub fn format_message(mismatches: &[Mismatch<'_>]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(NEWLINE)
}
