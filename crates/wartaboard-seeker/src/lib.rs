//! Seeker - record access and filter rules for dashboard tables.
//!
//! Seeker is the row-level half of a wartaboard table. It knows how to:
//!
//! - Enumerate the fields of a record in declaration order ([`Record`])
//! - Extract a field as a runtime [`Value`] and stringify it ([`Value::to_text`])
//! - Test a row against free-text search and structured [`FilterRule`]s ([`Query`])
//!
//! # Quick Start
//!
//! ```rust
//! use wartaboard_seeker::{FilterId, FilterRule, Query, Record, Rule, Value};
//!
//! struct Person {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Record for Person {
//!     fn field_names(&self) -> Vec<&str> {
//!         vec!["id", "name"]
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "id" => Value::from(self.id.as_str()),
//!             "name" => Value::from(self.name.as_str()),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let people = vec![
//!     Person { id: "1".into(), name: "Alice".into() },
//!     Person { id: "2".into(), name: "Bob".into() },
//! ];
//!
//! let query = Query::new()
//!     .search("ALI", ["name"])
//!     .build();
//! let results = query.filter(&people, Person::accessor);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Alice");
//!
//! let query = Query::new()
//!     .rule(FilterRule::new(FilterId(1), "name", Rule::StartsWith, "b"))
//!     .build();
//! assert_eq!(query.filter(&people, Person::accessor)[0].name, "Bob");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (search is empty OR any search field contains search)
//!       ∧ (every filter rule matches)
//! ```
//!
//! All comparisons are case-insensitive and operate on the stringified field
//! value. A rule whose name is not recognized matches every row.
//!
//! | Rule | Label | Test |
//! |------|-------|------|
//! | `equals` | is equal to | `field == value` |
//! | `contains` | contains | `field.contains(value)` |
//! | `startsWith` | starts with | `field.starts_with(value)` |
//! | `endsWith` | ends with | `field.ends_with(value)` |
//! | `isNot` | is not | `field != value` |

mod error;
#[cfg(feature = "json")]
mod json;
mod query;
mod rule;
mod traits;
mod value;

pub use error::{Result, SeekerError};
pub use query::Query;
pub use rule::{FilterField, FilterId, FilterRule, Rule, RuleSpec};
pub use traits::{FieldEnum, FieldTimestamp, Record};
pub use value::{Number, Timestamp, Value};
