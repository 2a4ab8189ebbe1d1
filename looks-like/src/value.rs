//! Type-erased property values.
//!
//! A [`Value`] is what a property read yields: something that knows its own
//! equality, whether it represents "no value", and how to render itself in a
//! failure message.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Whether a property's declared type behaves like a plain value or like a
/// reference to shared, heap-allocated data.
///
/// [`LikeMatcher::exclude_reference_typed_properties`] drops every property
/// whose kind is [`Kind::Reference`].
///
/// [`LikeMatcher::exclude_reference_typed_properties`]: crate::LikeMatcher::exclude_reference_typed_properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Primitives and structs marked `#[looks_like(value)]`.
    Value,
    /// Strings, collections, smart pointers and derived structs.
    Reference,
}

impl Kind {
    /// Returns `true` for [`Kind::Value`].
    pub fn is_value(self) -> bool {
        matches!(self, Kind::Value)
    }
}

/// A property value that can be compared against a value of any other type.
///
/// Equality is asymmetric: `expected.value_eq(actual)` uses the expected
/// value's notion of equality, and a value of a different type is simply not
/// equal.
///
/// Implemented for primitives, strings, `Option`, `Vec` and the common smart
/// pointers. `#[derive(Properties)]` implements it for user structs.
pub trait Value: fmt::Debug + 'static {
    /// The kind of the declared type.
    fn kind() -> Kind
    where
        Self: Sized;

    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if this is the "no value" representation.
    fn is_none(&self) -> bool {
        false
    }

    /// Compares `self` with `other` using `self`'s equality.
    ///
    /// Values of different types are unequal, with two exceptions: an
    /// expected `Some(v)` compares `v` against a bare actual value, and owned
    /// and borrowed strings compare by content. The reverse of the first does
    /// not hold: an expected bare `1` is not equal to an actual `Some(1)`.
    fn value_eq(&self, other: &dyn Value) -> bool;

    /// Writes the value as it should appear in a failure message.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// `Display` adapter over [`Value::render`].
pub struct Rendered<'a>(pub &'a dyn Value);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

macro_rules! leaf_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                fn kind() -> Kind {
                    Kind::Value
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn value_eq(&self, other: &dyn Value) -> bool {
                    other
                        .as_any()
                        .downcast_ref::<Self>()
                        .is_some_and(|other| self == other)
                }

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

leaf_values!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `NaN` equals `NaN`, so a value always looks like itself.
macro_rules! float_values {
    ($($ty:ty),*) => {
        $(
            impl Value for $ty {
                fn kind() -> Kind {
                    Kind::Value
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn value_eq(&self, other: &dyn Value) -> bool {
                    other
                        .as_any()
                        .downcast_ref::<Self>()
                        .is_some_and(|other| self == other || (self.is_nan() && other.is_nan()))
                }

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

float_values!(f32, f64);

/// Reads an owned or borrowed string.
fn as_str(value: &dyn Value) -> Option<&str> {
    let any = value.as_any();
    any.downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| any.downcast_ref::<&'static str>().copied())
}

// Owned and borrowed strings compare by content.
macro_rules! string_values {
    ($($ty:ty),*) => {
        $(
            impl Value for $ty {
                fn kind() -> Kind {
                    Kind::Reference
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn value_eq(&self, other: &dyn Value) -> bool {
                    as_str(other).is_some_and(|other| AsRef::<str>::as_ref(self) == other)
                }

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

string_values!(String, &'static str);

impl Value for () {
    fn kind() -> Kind {
        Kind::Value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        other.as_any().is::<()>()
    }
}

impl<T: Value> Value for Option<T> {
    fn kind() -> Kind {
        T::kind()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_none(&self) -> bool {
        Option::is_none(self)
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        let Some(value) = self else {
            return other.is_none();
        };

        match other.as_any().downcast_ref::<Self>() {
            Some(Some(other)) => value.value_eq(other),
            Some(None) => false,
            // Not an `Option<T>`: compare the wrapped value directly.
            None => value.value_eq(other),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => Ok(()),
        }
    }
}

impl<T: Value> Value for Vec<T> {
    fn kind() -> Kind {
        Kind::Reference
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        other.as_any().downcast_ref::<Self>().is_some_and(|other| {
            self.len() == other.len()
                && self
                    .iter()
                    .zip(other)
                    .all(|(expected, actual)| expected.value_eq(actual))
        })
    }
}

macro_rules! pointer_values {
    ($($ptr:ident),*) => {
        $(
            impl<T: Value> Value for $ptr<T> {
                fn kind() -> Kind {
                    Kind::Reference
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn is_none(&self) -> bool {
                    (**self).is_none()
                }

                fn value_eq(&self, other: &dyn Value) -> bool {
                    match other.as_any().downcast_ref::<Self>() {
                        Some(other) => (**self).value_eq(&**other),
                        None => (**self).value_eq(other),
                    }
                }

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )*
    };
}

pointer_values!(Box, Rc, Arc);
