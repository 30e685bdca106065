//! Proc macros for wartaboard.
//!
//! - [`Record`] - Generate the schema descriptor a table derives columns from

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for structs used as table rows.
///
/// This macro generates an implementation of `Record` from
/// `wartaboard-seeker`, so a table can enumerate columns and read cells
/// without inspecting the value at runtime.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Borrowed string (`String`, `&str`, anything `AsRef<str>`) |
/// | `Number` | Numeric field, converted through `Number::from` |
/// | `Timestamp` | Date or time - requires `FieldTimestamp` impl |
/// | `Enum` | Enum field - requires `FieldEnum` impl |
/// | `Bool` | Boolean field |
/// | `Display` | Any `ToString` type, formatted per read |
/// | `skip` | Leave the field out of the record |
/// | `rename = "..."` | Use a custom column key |
///
/// Without a kind, `String`/`str`, the primitive numbers, `bool` and the
/// chrono date types are recognized by name. `Option<T>` fields read as
/// `Value::None` when empty.
///
/// # Container Attributes
///
/// `#[record(rename_all = "camelCase")]` renames every key that has no
/// explicit `rename`. `snake_case` and `kebab-case` are also accepted.
///
/// # Generated Code
///
/// 1. A key constant per field (e.g., `Event::EVENT_NAME`)
/// 2. `RECORD_FIELDS`, the keys in declaration order
/// 3. Implementation of `Record::field_names()` and `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use wartaboard_macros::Record;
/// use wartaboard_seeker::{FieldEnum, Record as _, Value};
///
/// #[derive(Clone, Copy)]
/// enum Role { Member, Admin }
///
/// impl FieldEnum for Role {
///     fn field_label(&self) -> &'static str {
///         match self {
///             Role::Member => "member",
///             Role::Admin => "admin",
///         }
///     }
/// }
///
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct Member {
///     id: String,
///     name: String,
///     image: Option<String>,
///     #[field(Enum)]
///     role: Role,
///     #[field(skip)]
///     password_hash: String,
/// }
///
/// assert_eq!(Member::RECORD_FIELDS, &["id", "name", "image", "role"]);
/// let member = Member {
///     id: "u1".into(),
///     name: "Maria".into(),
///     image: None,
///     role: Role::Admin,
///     password_hash: String::new(),
/// };
/// assert_eq!(member.field_value(Member::ROLE), Value::Enum("admin"));
/// assert_eq!(member.field_value("image"), Value::None);
/// ```
#[proc_macro_derive(Record, attributes(field, record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
