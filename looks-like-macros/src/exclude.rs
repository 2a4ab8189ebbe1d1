//! `exclude!(matcher, |p| p.field)` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, ExprClosure, Member, Pat, Token, Type};

pub(crate) struct Exclude {
    matcher: Expr,
    accessor: ExprClosure,
}

impl Parse for Exclude {
    /// Parses the macro invocation.
    ///
    /// # Example Input
    /// ```text
    /// exclude!(like(expected), |p| p.updated_at)
    /// exclude!(matcher, |p: &User| &p.session)
    /// ```
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let matcher = input.parse()?;
        let _: Token![,] = input.parse()?;
        let accessor = input.parse()?;
        if input.peek(Token![,]) {
            let _: Token![,] = input.parse()?;
        }

        Ok(Exclude { matcher, accessor })
    }
}

pub(crate) fn expand(exclude: &Exclude) -> syn::Result<TokenStream> {
    let closure = &exclude.accessor;

    if closure.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            closure,
            format!(
                "accessor must take exactly one parameter, found {}",
                closure.inputs.len()
            ),
        ));
    }

    let (param, ty) = match &closure.inputs[0] {
        Pat::Ident(pat) => (&pat.ident, None),
        Pat::Type(typed) => match &*typed.pat {
            Pat::Ident(pat) => (&pat.ident, Some(&*typed.ty)),
            other => return Err(parameter_error(other)),
        },
        other => return Err(parameter_error(other)),
    };

    let Expr::Field(field) = strip(&closure.body) else {
        return Err(syn::Error::new_spanned(
            &closure.body,
            "expected a direct field read like `|p| p.field`",
        ));
    };

    match strip(&field.base) {
        Expr::Path(path) if path.qself.is_none() && path.path.is_ident(param) => {}
        Expr::Path(path) => {
            return Err(syn::Error::new_spanned(
                path,
                format!("the field must be read from the parameter `{param}`"),
            ));
        }
        Expr::Field(nested) => {
            return Err(syn::Error::new_spanned(
                nested,
                "nested field reads are not supported",
            ));
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "expected a direct field read like `|p| p.field`",
            ));
        }
    }

    let member = &field.member;
    let name = match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    };

    // A reference-typed parameter is used as written; a bare type is borrowed.
    let param_ty = ty.map(|ty| match ty {
        Type::Reference(_) => quote!(: #ty),
        _ => quote!(: &#ty),
    });

    let matcher = &exclude.matcher;
    Ok(quote! {
        (#matcher).exclude_field(#name, |#param #param_ty| &#param.#member)
    })
}

/// Reports `err` while still emitting the matcher expression, so that the
/// matcher is type-checked and the bindings it uses count as used.
pub(crate) fn expand_invalid(exclude: &Exclude, err: syn::Error) -> TokenStream {
    let matcher = &exclude.matcher;
    let err = err.to_compile_error();
    quote! {{
        let _ = #matcher;
        #err
    }}
}

fn parameter_error(pat: &Pat) -> syn::Error {
    syn::Error::new_spanned(pat, "the accessor parameter must be a plain identifier")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: &str) -> syn::Result<String> {
        let exclude: Exclude = syn::parse_str(input)?;
        expand(&exclude).map(|tokens| tokens.to_string())
    }

    #[test]
    fn expands_to_exclude_field() {
        let output = expand_str("matcher, |p| p.updated_at").unwrap();
        assert!(output.contains("exclude_field (\"updated_at\""));
        assert!(output.contains("& p . updated_at"));
    }

    #[test]
    fn typed_parameters_are_borrowed() {
        let output = expand_str("matcher, |p: User| p.name").unwrap();
        assert!(output.contains("p : & User"));

        let output = expand_str("matcher, |p: &User| &p.name,").unwrap();
        assert!(output.contains("p : & User"));
    }

    #[test]
    fn tuple_and_raw_fields() {
        assert!(expand_str("m, |t| t.1").unwrap().contains("\"1\""));
        assert!(expand_str("m, |p| p.r#type").unwrap().contains("\"type\""));
    }

    #[test]
    fn invalid_accessors_keep_the_matcher() {
        let exclude: Exclude = syn::parse_str("like(expected), |p| p.a.b").unwrap();
        let err = expand(&exclude).unwrap_err();
        let output = expand_invalid(&exclude, err).to_string();

        assert!(output.contains("let _ = like (expected) ;"));
        assert!(output.contains("compile_error"));
        assert!(output.contains("nested field reads are not supported"));
    }

    #[test]
    fn rejects_anything_but_a_direct_field_read() {
        let cases = [
            ("m, |p| p.name()", "expected a direct field read like `|p| p.field`"),
            ("m, |p| p.a + p.b", "expected a direct field read like `|p| p.field`"),
            ("m, |p| p.items().len", "expected a direct field read like `|p| p.field`"),
            ("m, |p| p.address.city", "nested field reads are not supported"),
            ("m, |p| other.name", "the field must be read from the parameter `p`"),
            ("m, |a, b| a.name", "accessor must take exactly one parameter, found 2"),
            ("m, |(a, b)| a.name", "the accessor parameter must be a plain identifier"),
        ];

        for (input, expected) in cases {
            let err = expand_str(input).unwrap_err();
            assert_eq!(err.to_string(), expected, "input: {input}");
        }
    }
}
