//! Procedural macro implementation for looks-like.
//!
//! This crate provides the procedural macros for the `looks-like` crate.
//! Users should use the main `looks-like` crate which re-exports them.
//!
//! # Overview
//!
//! - **`#[derive(Properties)]`** (`derive.rs`): generates the `Value` and
//!   `Properties` impls that expose a struct's public fields by name.
//! - **`exclude!`** (`exclude.rs`): validates a field accessor at compile time
//!   and expands to `LikeMatcher::exclude_field`.
//!
//! See the main `looks-like` crate for documentation and examples.

use proc_macro::TokenStream;
use syn::DeriveInput;

mod derive;
mod exclude;

/// Exposes a struct's public fields as properties.
///
/// Every `pub` field becomes a property named after the field, in declaration
/// order. Tuple struct fields are named by index. The struct must implement
/// `Debug`, and `PartialEq` unless `#[looks_like(identity)]` is used.
///
/// # Attributes
///
/// On the struct:
/// - `#[looks_like(value)]`: the struct is a value type, so it survives
///   `exclude_reference_typed_properties`.
/// - `#[looks_like(identity)]`: equality is object identity rather than
///   `PartialEq`.
///
/// On a field:
/// - `#[looks_like(skip)]`: the field is not a property.
/// - `#[looks_like(rename = "Name")]`: the property is called `Name`.
///
/// # Example
///
/// ```rust
/// use looks_like::{like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Account {
///     #[looks_like(rename = "owner")]
///     pub holder: String,
///     pub balance: i64,
/// }
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct AccountRow {
///     pub owner: String,
///     pub balance: i64,
/// }
///
/// let account = Account { holder: "Ada".to_string(), balance: 10 };
/// let row = AccountRow { owner: "Ada".to_string(), balance: 10 };
/// assert!(like(account).matches(&row));
/// ```
#[proc_macro_derive(Properties, attributes(looks_like))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = match syn::parse::<DeriveInput>(input) {
        Ok(input) => input,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    match derive::expand(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

/// Excludes the field read by an accessor closure from a matcher.
///
/// The accessor must be a one-parameter closure whose body reads a single
/// field of that parameter. Method calls, nested reads and other expressions
/// are rejected at compile time, and a field that does not exist on the
/// matcher's expected type is a type error.
///
/// ```rust
/// use looks_like::{exclude, like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Event {
///     pub kind: String,
///     pub at: u64,
/// }
///
/// let expected = Event { kind: "login".to_string(), at: 1 };
/// let actual = Event { kind: "login".to_string(), at: 2 };
///
/// let mut matcher = exclude!(like(expected), |e| e.at);
/// assert!(matcher.matches(&actual));
/// ```
///
/// ```compile_fail
/// use looks_like::{exclude, like, Properties};
///
/// #[derive(Debug, PartialEq, Properties)]
/// struct Event {
///     pub kind: String,
/// }
///
/// let expected = Event { kind: "login".to_string() };
/// let _ = exclude!(like(expected), |e| e.kind.len());
/// ```
#[proc_macro]
pub fn exclude(input: TokenStream) -> TokenStream {
    let exclude = match syn::parse::<exclude::Exclude>(input) {
        Ok(exclude) => exclude,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    match exclude::expand(&exclude) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(exclude::expand_invalid(&exclude, err)),
    }
}
