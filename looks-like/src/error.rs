use thiserror::Error;

/// Returned when a property accessor is not a single, direct field read.
///
/// Raised by [`LikeMatcher::exclude_accessor`](crate::LikeMatcher::exclude_accessor)
/// at configuration time, before any comparison runs. The `exclude!` macro
/// reports the same problems as compile errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAccessorError {
    #[error("invalid accessor `{accessor}`: not a closure expression ({reason})")]
    Syntax { accessor: String, reason: String },

    #[error("invalid accessor `{accessor}`: expected exactly one parameter, found {found}")]
    Arity { accessor: String, found: usize },

    #[error("invalid accessor `{accessor}`: the parameter must be a plain identifier")]
    Parameter { accessor: String },

    #[error("invalid accessor `{accessor}`: expected a direct field read like `|p| p.field`")]
    NotFieldAccess { accessor: String },

    #[error("invalid accessor `{accessor}`: nested field reads are not supported")]
    NestedAccess { accessor: String },

    #[error("invalid accessor `{accessor}`: the field must be read from the parameter `{param}`")]
    ForeignReceiver { accessor: String, param: String },
}

impl InvalidAccessorError {
    /// The accessor source text that was rejected.
    pub fn accessor(&self) -> &str {
        match self {
            InvalidAccessorError::Syntax { accessor, .. }
            | InvalidAccessorError::Arity { accessor, .. }
            | InvalidAccessorError::Parameter { accessor }
            | InvalidAccessorError::NotFieldAccess { accessor }
            | InvalidAccessorError::NestedAccess { accessor }
            | InvalidAccessorError::ForeignReceiver { accessor, .. } => accessor,
        }
    }
}
