use crate::matcher::LikeMatcher;
use crate::properties::Properties;
use std::fmt;

/// A predicate over an actual value that can explain its failures.
///
/// This is the shape assertion entry points such as [`assert_that!`] consume.
/// `matches` is called first; the message is only meaningful after it
/// returned `false`.
///
/// [`assert_that!`]: crate::assert_that
pub trait Constraint {
    fn matches(&mut self, actual: &dyn Properties) -> bool;

    /// Writes why the last call to `matches` failed.
    fn write_message_to(&self, writer: &mut dyn fmt::Write) -> fmt::Result;

    /// Writes what the constraint accepts.
    fn write_description_to(&self, _writer: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}

impl<T: Properties> Constraint for LikeMatcher<T> {
    fn matches(&mut self, actual: &dyn Properties) -> bool {
        LikeMatcher::matches(self, actual)
    }

    fn write_message_to(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        writer.write_str(self.message().unwrap_or_default())
    }

    fn write_description_to(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        write!(writer, "looks like {:?}", self.expected())
    }
}

/// Asserts that `actual` satisfies `constraint`, panicking with the
/// constraint's message otherwise.
///
/// ```
/// use looks_like::{assert_that, like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// assert_that!(Point { x: 1, y: 2 }, like(Point { x: 1, y: 2 }));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $constraint:expr $(,)?) => {{
        let mut __constraint = $constraint;
        let __actual = &$actual;
        if !$crate::Constraint::matches(&mut __constraint, __actual) {
            ::std::panic!(
                "{}",
                $crate::__macro_support::failure_message("assert_that!", &__constraint)
            );
        }
    }};
}

/// Asserts that `actual` looks like `expected`.
///
/// Shorthand for `assert_that!(actual, like(expected))`.
///
/// ```should_panic
/// use looks_like::{assert_like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// assert_like!(Point { x: 1, y: 3 }, Point { x: 1, y: 2 });
/// // assert_like! failed:
/// //
/// // y : expected: 2, but was 3
/// ```
#[macro_export]
macro_rules! assert_like {
    ($actual:expr, $expected:expr $(,)?) => {{
        let mut __matcher = $crate::like($expected);
        let __actual = &$actual;
        if !__matcher.matches(__actual) {
            ::std::panic!(
                "{}",
                $crate::__macro_support::failure_message("assert_like!", &__matcher)
            );
        }
    }};
}

#[doc(hidden)]
pub fn failure_message(macro_name: &str, constraint: &dyn Constraint) -> String {
    let mut message = format!("{macro_name} failed:\n\n");
    // Writing into a `String` cannot fail.
    let _ = constraint.write_message_to(&mut message);
    message
}
