//! Attribute parsing for the Record derive macro.
//!
//! Parses the `#[field(...)]` field attributes and the `#[record(...)]`
//! container attribute.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// How a field is exposed as a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[field(String)]`: borrowed as a string.
    String,
    /// `#[field(Number)]`: converted through `Number::from`.
    Number,
    /// `#[field(Timestamp)]`: requires `FieldTimestamp`.
    Timestamp,
    /// `#[field(Enum)]`: requires `FieldEnum`.
    Enum,
    /// `#[field(Bool)]`.
    Bool,
    /// `#[field(Display)]`: formatted with `ToString`.
    Display,
}

impl FieldKind {
    /// Parse a field kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "String" | "string" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Timestamp" | "timestamp" => Ok(FieldKind::Timestamp),
            "Enum" | "enumeration" => Ok(FieldKind::Enum),
            "Bool" | "boolean" => Ok(FieldKind::Bool),
            "Display" | "display" => Ok(FieldKind::Display),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown field kind: '{}'. Expected one of: String, Number, Timestamp, Enum, Bool, Display",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[field(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FieldAttr {
    /// Explicit kind. Inferred from the field type when absent.
    pub kind: Option<FieldKind>,
    /// Leave this field out of the record.
    pub skip: bool,
    /// Column key (default: field name after `rename_all`).
    pub rename: Option<String>,
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field kind: String, Number, Timestamp, Enum, Bool, Display, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_literal(&nv.value, "rename")?);
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown field attribute. Expected: String, Number, Timestamp, Enum, Bool, Display, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Key casing applied to every field without an explicit `rename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameAll {
    /// Keep the Rust field name.
    #[default]
    None,
    /// `created_at` becomes `createdAt`.
    CamelCase,
    /// `created_at` becomes `created-at`.
    KebabCase,
}

impl RenameAll {
    /// Applies this casing to a snake_case field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            RenameAll::None => name.to_string(),
            RenameAll::CamelCase => {
                let mut out = String::with_capacity(name.len());
                let mut upper_next = false;
                for c in name.chars() {
                    if c == '_' {
                        upper_next = !out.is_empty();
                    } else if upper_next {
                        out.extend(c.to_uppercase());
                        upper_next = false;
                    } else {
                        out.push(c);
                    }
                }
                out
            }
            RenameAll::KebabCase => name.replace('_', "-"),
        }
    }
}

/// Container-level attributes from `#[record(...)]`.
#[derive(Debug, Clone, Default)]
pub struct RecordAttr {
    /// Casing for field keys.
    pub rename_all: RenameAll,
}

impl Parse for RecordAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RecordAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                    let value = string_literal(&nv.value, "rename_all")?;
                    attr.rename_all = match value.as_str() {
                        "camelCase" => RenameAll::CamelCase,
                        "kebab-case" => RenameAll::KebabCase,
                        "snake_case" => RenameAll::None,
                        other => {
                            return Err(Error::new(
                                nv.value.span(),
                                format!(
                                    "unknown rename_all style: '{}'. Expected one of: camelCase, snake_case, kebab-case",
                                    other
                                ),
                            ))
                        }
                    };
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record attribute. Expected: rename_all = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

fn string_literal(expr: &Expr, name: &str) -> Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        other => Err(Error::new(
            other.span(),
            format!("{} must be a string literal", name),
        )),
    }
}

/// Extract `#[field(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}

/// Extract the `#[record(...)]` attribute from a struct's attributes.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<RecordAttr>();
        }
    }
    Ok(RecordAttr::default())
}
