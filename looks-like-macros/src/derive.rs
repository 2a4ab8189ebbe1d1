//! `#[derive(Properties)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Index, LitStr, Member, Visibility, parse_quote};

/// Container attributes: `#[looks_like(value, identity)]`.
#[derive(Default)]
struct ContainerAttrs {
    value: bool,
    identity: bool,
}

/// Field attributes: `#[looks_like(skip, rename = "Name")]`.
#[derive(Default)]
struct FieldAttrs {
    skip: bool,
    rename: Option<LitStr>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = ContainerAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("looks_like")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("value") {
                    parsed.value = true;
                    Ok(())
                } else if meta.path.is_ident("identity") {
                    parsed.identity = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `value` or `identity`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = FieldAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("looks_like")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    parsed.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `rename = \"...\"`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "Properties can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "Properties can only be derived for structs",
            ));
        }
    };

    let mut properties = Vec::new();
    let mut field_names = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::parse(&field.attrs)?;

        // Private fields are not properties.
        if attrs.skip || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        let field_name = match &field.ident {
            Some(ident) => ident.unraw().to_string(),
            None => index.to_string(),
        };
        let name = match &attrs.rename {
            Some(rename) => rename.value(),
            None => field_name.clone(),
        };

        properties.push(quote! {
            ::looks_like::Property::new(#name, &self.#member)
        });
        field_names.push(quote! {
            #field_name => ::core::option::Option::Some(#name)
        });
    }

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::looks_like::Value));
    }
    if !container.identity && !input.generics.params.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: ::core::cmp::PartialEq));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let kind = if container.value {
        quote!(::looks_like::Kind::Value)
    } else {
        quote!(::looks_like::Kind::Reference)
    };

    let eq = if container.identity {
        quote!(::core::ptr::eq(self, other))
    } else {
        quote!(self == other)
    };

    Ok(quote! {
        impl #impl_generics ::looks_like::Value for #ident #ty_generics #where_clause {
            fn kind() -> ::looks_like::Kind {
                #kind
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn value_eq(&self, other: &dyn ::looks_like::Value) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .is_some_and(|other| #eq)
            }
        }

        impl #impl_generics ::looks_like::Properties for #ident #ty_generics #where_clause {
            fn properties(&self) -> ::std::vec::Vec<::looks_like::Property<'_>> {
                ::std::vec![#(#properties),*]
            }

            fn as_value(&self) -> &dyn ::looks_like::Value {
                self
            }

            fn property_name(field: &str) -> ::core::option::Option<&'static str> {
                match field {
                    #(#field_names,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
