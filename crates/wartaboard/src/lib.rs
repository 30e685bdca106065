//! # Wartaboard - Filterable data tables for dashboard collections
//!
//! Wartaboard turns a collection of records (bulletins, events, members)
//! into a searchable, filterable, column-configurable table. It takes care
//! of the table mechanics so that a dashboard only decides which columns
//! to show and how to present a few special cells.
//!
//! ## Core Concepts
//!
//! - [`Record`]: schema descriptor for a row type. Derive it on structs
//!   with `#[derive(Record)]`, or use [`JsonRow`] for untyped data.
//! - [`project_columns`]: derives the ordered column list from the first
//!   row, honoring `include`, `omit` and label overrides.
//! - [`DataTable`]: the engine. Holds search text, column visibility and
//!   filter rules as an immutable [`TableState`], and computes the visible
//!   rows on demand.
//! - [`CellRenderer`]: per-column presentation, resolved once when the
//!   columns are derived.
//! - [`RenderedTable`]: the visible rows of the visible columns, with the
//!   first-column row links and the empty-state message.
//! - [`TextTable`]: lays a rendered table out for the terminal.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wartaboard::{DataTable, Record, RowLink, TextTable};
//!
//! #[derive(Record)]
//! #[record(rename_all = "camelCase")]
//! struct Event {
//!     id: String,
//!     event_name: String,
//!     location: String,
//! }
//!
//! let events = Arc::new(vec![
//!     Event { id: "e1".into(), event_name: "Ibadah Pagi".into(), location: "Main Hall".into() },
//!     Event { id: "e2".into(), event_name: "Youth Night".into(), location: "Annex".into() },
//! ]);
//!
//! let mut table = DataTable::builder(events)
//!     .omit(["id"])
//!     .link(RowLink::new("/dashboard/event", |e: &Event| e.id.clone()))
//!     .build();
//!
//! table.set_search("hall");
//! let rendered = table.render();
//! assert_eq!(rendered.len(), 1);
//! assert_eq!(rendered.rows[0].cells[0].href.as_deref(), Some("/dashboard/event/e1"));
//!
//! let text = TextTable::new().render(&rendered);
//! assert!(text.contains("Ibadah Pagi"));
//! ```
//!
//! ## Filters
//!
//! Filter rules compare one column against a value, ignoring case. All
//! rules must pass. Each rule gets an id from a counter that never goes
//! back, so removing a rule never changes which rule another id names.
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use wartaboard::{DataTable, JsonRow};
//!
//! let rows: Vec<JsonRow> = serde_json::from_value(json!([
//!     {"name": "Alice"}, {"name": "Bob"}
//! ])).unwrap();
//! let mut table = DataTable::new(Arc::new(rows));
//!
//! let id = table.add_filter_str("name:startsWith:b").unwrap();
//! assert_eq!(table.visible_rows().len(), 1);
//! table.remove_filter(id);
//! assert_eq!(table.visible_rows().len(), 2);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod header;
pub mod render;
pub mod state;
pub mod table;
pub mod text;

pub use column::{project_columns, start_case, Column, ColumnConfig};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use header::{
    describe_filter, filter_summary, rule_options, ColumnToggle, HeaderPanel, HeaderState,
    RuleOption,
};
pub use render::{
    CellRenderer, DefaultRenderer, RenderedCell, RenderedRow, RenderedTable, Renderer, RowLink,
    TableStatus,
};
pub use state::{TableAction, TableState};
pub use table::{DataTable, DataTableBuilder};
pub use text::{BorderStyle, TextTable};

pub use wartaboard_seeker as seeker;
pub use wartaboard_seeker::{
    FieldEnum, FieldTimestamp, FilterField, FilterId, FilterRule, Number, Query, Record, Rule,
    RuleSpec, Timestamp, Value,
};

// Derive macro shares the trait's name, like serde's.
pub use wartaboard_macros::Record;

/// An untyped row: a JSON object whose keys are the column keys.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;
