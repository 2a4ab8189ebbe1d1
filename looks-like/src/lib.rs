//! # looks-like: Structural "Looks Like" Assertions
//!
//! `looks-like` compares two values by their public properties instead of by
//! full equality. A value *looks like* an expected value when every property
//! the two have in common holds an equal value. When it does not, the failure
//! message lists each property that diverged, with both values.
//!
//! # Table of Contents
//!
//! - [Quick Start](#quick-start)
//! - [Core Concepts](#core-concepts)
//!   - [Properties](#properties)
//!   - [Common Properties](#common-properties)
//!   - [Missing Values](#missing-values)
//! - [Excluding Properties](#excluding-properties)
//! - [Error Messages](#error-messages)
//! - [Framework Integration](#framework-integration)
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! looks-like = "0.1"
//! ```
//!
//! Basic example:
//!
//! ```rust
//! use looks_like::{assert_like, Properties};
//!
//! #[derive(Debug, PartialEq, Properties)]
//! struct User {
//!     pub name: String,
//!     pub age: u32,
//!     id: u64,
//! }
//!
//! let stored = User { name: "Alice".to_string(), age: 30, id: 7 };
//! let fresh = User { name: "Alice".to_string(), age: 30, id: 8 };
//!
//! // `id` is private, so it is not part of the comparison.
//! assert_like!(stored, fresh);
//! ```
//!
//! # Core Concepts
//!
//! ## Properties
//!
//! A property is a public field exposed through the [`Properties`] trait.
//! `#[derive(Properties)]` exposes every `pub` field in declaration order.
//! Each property value implements [`Value`], which carries its own equality;
//! the comparison never recurses into a property.
//!
//! ## Common Properties
//!
//! Only properties whose names exist on both sides are compared. The actual
//! value may be of a completely different type:
//!
//! ```rust
//! use looks_like::{like, Properties};
//!
//! #[derive(Debug, PartialEq, Properties)]
//! struct Order {
//!     pub number: u32,
//!     pub total: u64,
//!     pub note: String,
//! }
//!
//! #[derive(Debug, PartialEq, Properties)]
//! struct OrderSummary {
//!     pub number: u32,
//!     pub total: u64,
//! }
//!
//! let order = Order { number: 1, total: 250, note: "gift".to_string() };
//! let summary = OrderSummary { number: 1, total: 250 };
//!
//! assert!(like(order).matches(&summary));
//! ```
//!
//! ## Missing Values
//!
//! `None` is the "no value" representation. An expected `None` property only
//! matches an actual `None`, and an expected `None` value only matches an
//! actual `None` value, whatever its type.
//!
//! # Excluding Properties
//!
//! Properties can be skipped by name, by a checked field accessor, or by
//! kind:
//!
//! ```rust
//! use looks_like::{exclude, like, Properties};
//!
//! #[derive(Debug, PartialEq, Properties)]
//! struct Record {
//!     pub key: u32,
//!     pub updated_at: u64,
//!     pub payload: Vec<u8>,
//! }
//!
//! let a = Record { key: 1, updated_at: 100, payload: vec![1] };
//! let b = Record { key: 1, updated_at: 200, payload: vec![2] };
//!
//! let mut matcher = like(a).exclude_property("updated_at");
//! assert!(!matcher.matches(&b));
//!
//! let mut matcher = exclude!(matcher, |r| r.payload);
//! assert!(matcher.matches(&b));
//! ```
//!
//! [`LikeMatcher::exclude_reference_typed_properties`] skips every property
//! whose declared type is not a value type (see [`Kind`]).
//!
//! # Error Messages
//!
//! Each mismatched property produces one line, in the expected type's
//! declaration order:
//!
//! ```text
//! number : expected: 1, but was 2
//! text : expected: guru, but was guru2
//! ```
//!
//! A `None` renders as nothing, so an expected `None` reads
//! `foo : expected: , but was ...`.
//!
//! # Framework Integration
//!
//! [`LikeMatcher`] implements [`Constraint`], the predicate-with-message
//! shape consumed by [`assert_that!`]. [`assert_like!`] is the shorthand for
//! the common case.

// Lets the derive output refer to `::looks_like` from inside this crate.
extern crate self as looks_like;

mod accessor;
mod constraint;
mod error;
mod matcher;
mod properties;
mod value;

pub use constraint::Constraint;
pub use error::InvalidAccessorError;
pub use matcher::{LikeMatcher, Mismatch, format_message, like};
pub use properties::{Properties, Property};
pub use value::{Kind, Rendered, Value};

#[cfg(feature = "derive")]
pub use looks_like_macros::{Properties, exclude};

// Hidden module for macro support functions
#[doc(hidden)]
pub mod __macro_support {
    pub use crate::constraint::failure_message;
}
