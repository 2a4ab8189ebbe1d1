//! Resolution of accessor source text such as `|p| p.foo` to a field name.

use crate::error::InvalidAccessorError;
use syn::ext::IdentExt;
use syn::{Expr, ExprClosure, Member, Pat};

/// Resolves `accessor` to the name of the single field it reads.
///
/// Accepted forms are a one-parameter closure whose body is a field of that
/// parameter, optionally borrowed or parenthesized:
///
/// ```text
/// |p| p.foo
/// |p: User| &p.foo
/// |t| (t.0)
/// ```
pub(crate) fn field_name(accessor: &str) -> Result<String, InvalidAccessorError> {
    let closure: ExprClosure =
        syn::parse_str(accessor).map_err(|err| InvalidAccessorError::Syntax {
            accessor: accessor.to_string(),
            reason: err.to_string(),
        })?;

    if closure.inputs.len() != 1 {
        return Err(InvalidAccessorError::Arity {
            accessor: accessor.to_string(),
            found: closure.inputs.len(),
        });
    }

    let param = match &closure.inputs[0] {
        Pat::Ident(pat) => &pat.ident,
        Pat::Type(typed) => match &*typed.pat {
            Pat::Ident(pat) => &pat.ident,
            _ => {
                return Err(InvalidAccessorError::Parameter {
                    accessor: accessor.to_string(),
                });
            }
        },
        _ => {
            return Err(InvalidAccessorError::Parameter {
                accessor: accessor.to_string(),
            });
        }
    };

    let Expr::Field(field) = strip(&closure.body) else {
        return Err(InvalidAccessorError::NotFieldAccess {
            accessor: accessor.to_string(),
        });
    };

    match strip(&field.base) {
        Expr::Path(path) if path.qself.is_none() && path.path.is_ident(param) => {}
        Expr::Path(_) => {
            return Err(InvalidAccessorError::ForeignReceiver {
                accessor: accessor.to_string(),
                param: param.to_string(),
            });
        }
        Expr::Field(_) => {
            return Err(InvalidAccessorError::NestedAccess {
                accessor: accessor.to_string(),
            });
        }
        _ => {
            return Err(InvalidAccessorError::NotFieldAccess {
                accessor: accessor.to_string(),
            });
        }
    }

    Ok(match &field.member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    })
}

// Peel off `(..)` and a leading `&`.
fn strip(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => strip(&paren.expr),
        Expr::Group(group) => strip(&group.expr),
        Expr::Reference(reference) if reference.mutability.is_none() => strip(&reference.expr),
        _ => expr,
    }
}
