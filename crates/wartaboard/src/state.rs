//! Immutable table state.
//!
//! [`TableState`] holds everything a user changes on a table: the search
//! text, which columns are shown, and the structured filters. It is never
//! mutated in place. [`TableState::reduce`] returns the next state, so a
//! reader holding an earlier snapshot keeps a consistent view.

use indexmap::IndexMap;
use serde::Serialize;
use wartaboard_seeker::{FilterField, FilterId, FilterRule, Query, Rule};

use crate::column::Column;

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Replace the search text.
    SetSearch(String),
    /// Show or hide a column. Unknown keys are ignored.
    ToggleColumn { key: String, visible: bool },
    /// Append an `equals ""` rule on `default_column` with a fresh id.
    AddFilter { default_column: String },
    /// Replace one field of the rule with this id. Unknown ids are ignored.
    UpdateFilter {
        id: FilterId,
        field: FilterField,
        value: String,
    },
    /// Delete the rule with this id.
    RemoveFilter(FilterId),
    /// Align visibility with a new column set: new columns become visible,
    /// known columns keep their setting, vanished columns are dropped.
    ReconcileColumns(Vec<String>),
}

/// Search, visibility and filters of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableState {
    search_query: String,
    column_visibility: IndexMap<String, bool>,
    filters: Vec<FilterRule>,
    next_filter_id: u64,
}

impl Default for TableState {
    fn default() -> Self {
        TableState {
            search_query: String::new(),
            column_visibility: IndexMap::new(),
            filters: Vec::new(),
            next_filter_id: 1,
        }
    }
}

impl TableState {
    /// Creates the initial state for `columns`, all visible.
    pub fn new(columns: &[Column]) -> Self {
        TableState {
            column_visibility: columns.iter().map(|c| (c.key.clone(), true)).collect(),
            ..TableState::default()
        }
    }

    /// Returns the search text.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the visibility of every column, in column order.
    pub fn column_visibility(&self) -> &IndexMap<String, bool> {
        &self.column_visibility
    }

    /// Returns `true` unless the column has been hidden.
    pub fn is_visible(&self, key: &str) -> bool {
        self.column_visibility.get(key).copied().unwrap_or(true)
    }

    /// Returns the filter rules in the order they were added.
    pub fn filters(&self) -> &[FilterRule] {
        &self.filters
    }

    /// Returns the rule with this id.
    pub fn filter(&self, id: FilterId) -> Option<&FilterRule> {
        self.filters.iter().find(|f| f.id == id)
    }

    /// Returns the id the next added filter will get.
    pub fn next_filter_id(&self) -> FilterId {
        FilterId(self.next_filter_id)
    }

    /// Builds the row predicate for this state.
    ///
    /// Search scans every column in `columns`, shown or hidden.
    pub fn query(&self, columns: &[Column]) -> Query {
        Query::new()
            .search(
                self.search_query.clone(),
                columns.iter().map(|c| c.key.clone()),
            )
            .rules(self.filters.iter().cloned())
            .build()
    }

    /// Returns the state after `action`.
    pub fn reduce(&self, action: TableAction) -> TableState {
        let mut next = self.clone();
        match action {
            TableAction::SetSearch(query) => {
                next.search_query = query;
            }
            TableAction::ToggleColumn { key, visible } => {
                if let Some(entry) = next.column_visibility.get_mut(&key) {
                    *entry = visible;
                }
            }
            TableAction::AddFilter { default_column } => {
                let id = FilterId(next.next_filter_id);
                next.next_filter_id += 1;
                next.filters
                    .push(FilterRule::new(id, default_column, Rule::Equals, ""));
            }
            TableAction::UpdateFilter { id, field, value } => {
                if let Some(rule) = next.filters.iter_mut().find(|f| f.id == id) {
                    *rule = rule.with_field(field, value);
                }
            }
            TableAction::RemoveFilter(id) => {
                next.filters.retain(|f| f.id != id);
            }
            TableAction::ReconcileColumns(keys) => {
                next.column_visibility = keys
                    .into_iter()
                    .map(|key| {
                        let visible = self.column_visibility.get(&key).copied().unwrap_or(true);
                        (key, visible)
                    })
                    .collect();
            }
        }
        next
    }
}
