//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait together
//! with field name constants and the ordered `RECORD_FIELDS` list.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_field_attrs, parse_record_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let record_attrs = parse_record_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut keys: Vec<String> = Vec::new();
    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let field_attrs = parse_field_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }

        let (optional, inner_ty) = match option_inner(&field.ty) {
            Some(inner) => (true, inner),
            None => (false, &field.ty),
        };

        let kind = match field_attrs.kind {
            Some(kind) => kind,
            None => infer_kind(inner_ty).ok_or_else(|| {
                Error::new(
                    field.ty.span(),
                    format!(
                        "cannot infer how to read field '{}'. Annotate it with #[field(String)], #[field(Number)], #[field(Timestamp)], #[field(Enum)], #[field(Bool)], #[field(Display)] or #[field(skip)]",
                        field_name
                    ),
                )
            })?,
        };

        let key = field_attrs
            .rename
            .unwrap_or_else(|| record_attrs.rename_all.apply(&field_name.to_string()));

        if keys.contains(&key) {
            return Err(Error::new(
                field_name.span(),
                format!("duplicate record field key '{}'", key),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&key));
        field_constants.push(quote! {
            /// Column key constant.
            pub const #const_name: &'static str = #key;
        });

        let value_expr = value_expr(kind);
        let arm = if optional {
            quote! {
                match &self.#field_name {
                    ::core::option::Option::Some(v) => #value_expr,
                    ::core::option::Option::None => ::wartaboard_seeker::Value::None,
                }
            }
        } else {
            quote! {
                {
                    let v = &self.#field_name;
                    #value_expr
                }
            }
        };

        field_matches.push(quote! {
            #key => #arm,
        });
        keys.push(key);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*

            /// Column keys in declaration order.
            pub const RECORD_FIELDS: &'static [&'static str] = &[#(#keys),*];
        }

        impl #impl_generics ::wartaboard_seeker::Record for #struct_name #ty_generics #where_clause {
            fn field_names(&self) -> ::std::vec::Vec<&str> {
                Self::RECORD_FIELDS.to_vec()
            }

            fn field_value(&self, field: &str) -> ::wartaboard_seeker::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::wartaboard_seeker::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Expression turning `v: &T` into a `Value`.
fn value_expr(kind: FieldKind) -> TokenStream {
    match kind {
        FieldKind::String => quote! {
            ::wartaboard_seeker::Value::String(::std::borrow::Cow::Borrowed(
                ::core::convert::AsRef::<str>::as_ref(v)
            ))
        },
        FieldKind::Number => quote! {
            ::wartaboard_seeker::Value::Number(::wartaboard_seeker::Number::from(*v))
        },
        FieldKind::Timestamp => quote! {
            ::wartaboard_seeker::Value::Timestamp(
                ::wartaboard_seeker::FieldTimestamp::field_timestamp(v)
            )
        },
        FieldKind::Enum => quote! {
            ::wartaboard_seeker::Value::Enum(::wartaboard_seeker::FieldEnum::field_label(v))
        },
        FieldKind::Bool => quote! {
            ::wartaboard_seeker::Value::Bool(*v)
        },
        FieldKind::Display => quote! {
            ::wartaboard_seeker::Value::String(::std::borrow::Cow::Owned(
                ::std::string::ToString::to_string(v)
            ))
        },
    }
}

/// Returns `T` if `ty` is `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Infers a field kind from common type names.
fn infer_kind(ty: &Type) -> Option<FieldKind> {
    match ty {
        Type::Reference(reference) => infer_kind(&reference.elem),
        Type::Path(path) => {
            let ident = path.path.segments.last()?.ident.to_string();
            match ident.as_str() {
                "String" | "str" => Some(FieldKind::String),
                "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "usize" | "f32" | "f64" => Some(FieldKind::Number),
                "bool" => Some(FieldKind::Bool),
                "DateTime" | "NaiveDateTime" | "NaiveDate" | "Timestamp" => {
                    Some(FieldKind::Timestamp)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(tokens: &str) -> Result<TokenStream> {
        record_derive_impl(syn::parse_str::<DeriveInput>(tokens)?)
    }

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("name"), "NAME");
        assert_eq!(to_screaming_snake_case("publish_date"), "PUBLISH_DATE");
        assert_eq!(to_screaming_snake_case("heroImage"), "HERO_IMAGE");
        assert_eq!(to_screaming_snake_case("seo-title"), "SEO_TITLE");
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = syn::parse_str("Option<String>").unwrap();
        assert!(option_inner(&ty).is_some());
        let ty: Type = syn::parse_str("std::option::Option<u32>").unwrap();
        assert!(option_inner(&ty).is_some());
        let ty: Type = syn::parse_str("Vec<String>").unwrap();
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn test_infer_kind() {
        let infer = |s: &str| infer_kind(&syn::parse_str::<Type>(s).unwrap());
        assert_eq!(infer("String"), Some(FieldKind::String));
        assert_eq!(infer("&'a str"), Some(FieldKind::String));
        assert_eq!(infer("u32"), Some(FieldKind::Number));
        assert_eq!(infer("bool"), Some(FieldKind::Bool));
        assert_eq!(infer("DateTime<Utc>"), Some(FieldKind::Timestamp));
        assert_eq!(infer("chrono::NaiveDate"), Some(FieldKind::Timestamp));
        assert_eq!(infer("Role"), None);
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let err = derive("struct Pair(String, String);").unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_enum() {
        let err = derive("enum Role { Member, Pastor }").unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn test_uninferrable_field_needs_annotation() {
        let err = derive("struct Member { role: Role }").unwrap_err();
        assert!(err.to_string().contains("cannot infer"));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = derive(
            r#"struct Doc { title: String, #[field(rename = "title")] headline: String }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate record field key"));
    }

    #[test]
    fn test_generates_keys_in_order() {
        let tokens = derive(
            r#"
            #[record(rename_all = "camelCase")]
            struct Event {
                id: String,
                event_name: String,
                #[field(skip)]
                internal: u64,
                poster_image: Option<String>,
            }
            "#,
        )
        .unwrap()
        .to_string();
        let id = tokens.find(r#""id""#).unwrap();
        let event_name = tokens.find(r#""eventName""#).unwrap();
        let poster = tokens.find(r#""posterImage""#).unwrap();
        assert!(id < event_name && event_name < poster);
        assert!(tokens.contains("EVENT_NAME"));
        assert!(!tokens.contains("INTERNAL"));
    }
}
