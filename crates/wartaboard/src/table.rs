//! Filterable Table Engine.
//!
//! A [`DataTable`] owns a shared, read-only data array, the columns derived
//! from it, one resolved renderer per column, and an immutable
//! [`TableState`]. Every operation replaces the state with a new snapshot;
//! visible rows are recomputed from the current snapshot on demand.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use wartaboard::{DataTable, JsonRow, RowLink};
//! use wartaboard::seeker::{FilterField, Value};
//!
//! let data: Vec<JsonRow> = serde_json::from_value(json!([
//!     {"id": "1", "name": "Alice"},
//!     {"id": "2", "name": "Bob"}
//! ])).unwrap();
//!
//! let mut table = DataTable::builder(Arc::new(data))
//!     .omit(["id"])
//!     .render_with("name", |value: &Value<'_>, _row: &JsonRow| value.to_text().to_uppercase())
//!     .link(RowLink::field("/dashboard/member", "id"))
//!     .build();
//!
//! table.set_search("ali");
//! let rendered = table.render();
//! assert_eq!(rendered.texts(), vec![vec!["ALICE"]]);
//! assert_eq!(rendered.rows[0].cells[0].href.as_deref(), Some("/dashboard/member/1"));
//!
//! table.set_search("");
//! let id = table.add_filter();
//! table.update_filter(id, FilterField::Rule, "startsWith");
//! table.update_filter(id, FilterField::Value, "b");
//! assert_eq!(table.visible_rows().len(), 1);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use wartaboard_seeker::{FilterField, FilterId, FilterRule, Query, Record, RuleSpec, Value};

use crate::column::{project_columns, Column, ColumnConfig};
use crate::config::TableConfig;
use crate::error::Result;
use crate::header::{filter_summary, ColumnToggle};
use crate::render::{
    CellRenderer, RenderedCell, RenderedRow, RenderedTable, Renderer, RowLink, TableStatus,
};
use crate::state::{TableAction, TableState};

/// Builder for [`DataTable`].
pub struct DataTableBuilder<R> {
    data: Arc<Vec<R>>,
    columns: ColumnConfig,
    renderers: IndexMap<String, Arc<dyn CellRenderer<R>>>,
    link: Option<RowLink<R>>,
    hidden: Vec<String>,
}

impl<R: Record> DataTableBuilder<R> {
    /// Restricts the columns to `keys`, in that order.
    pub fn include<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = self.columns.include(keys);
        self
    }

    /// Removes `keys` from the derived columns.
    pub fn omit<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = self.columns.omit(keys);
        self
    }

    /// Overrides the header label of one column.
    pub fn label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.columns = self.columns.label(key, label);
        self
    }

    /// Sets a custom renderer for one column.
    pub fn renderer(
        mut self,
        key: impl Into<String>,
        renderer: impl CellRenderer<R> + 'static,
    ) -> Self {
        self.renderers.insert(key.into(), Arc::new(renderer));
        self
    }

    /// Sets a closure renderer for one column.
    pub fn render_with<F>(self, key: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Value<'_>, &R) -> String + 'static,
    {
        self.renderer(key, render)
    }

    /// Links the first visible column of every row.
    pub fn link(mut self, link: RowLink<R>) -> Self {
        self.link = Some(link);
        self
    }

    /// Starts with these columns hidden.
    pub fn hide<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Applies the column settings of a configuration file.
    ///
    /// The link target needs an identifier accessor and is left to
    /// [`link`](Self::link).
    pub fn config(mut self, config: &TableConfig) -> Self {
        self.columns = self
            .columns
            .include(config.include.iter().cloned())
            .omit(config.omit.iter().cloned());
        for (key, label) in &config.labels {
            self.columns = self.columns.label(key.clone(), label.clone());
        }
        self.hidden.extend(config.hidden.iter().cloned());
        self
    }

    /// Derives the columns and builds the table.
    pub fn build(self) -> DataTable<R> {
        let columns = project_columns(&self.data, &self.columns);
        let slots = resolve_renderers(&columns, &self.renderers);
        let mut state = TableState::new(&columns);
        for key in self.hidden {
            state = state.reduce(TableAction::ToggleColumn {
                key,
                visible: false,
            });
        }
        log::debug!(
            "table built: {} rows, {} columns",
            self.data.len(),
            columns.len()
        );
        DataTable {
            data: self.data,
            config: self.columns,
            renderers: self.renderers,
            link: self.link,
            columns,
            slots,
            state: Arc::new(state),
        }
    }
}

/// A searchable, filterable view over a shared row collection.
pub struct DataTable<R> {
    data: Arc<Vec<R>>,
    config: ColumnConfig,
    renderers: IndexMap<String, Arc<dyn CellRenderer<R>>>,
    link: Option<RowLink<R>>,
    columns: Vec<Column>,
    slots: Vec<Renderer<R>>,
    state: Arc<TableState>,
}

impl<R: Record> DataTable<R> {
    /// Starts building a table over `data`.
    pub fn builder(data: Arc<Vec<R>>) -> DataTableBuilder<R> {
        DataTableBuilder {
            data,
            columns: ColumnConfig::default(),
            renderers: IndexMap::new(),
            link: None,
            hidden: Vec::new(),
        }
    }

    /// Builds a table with every column and default rendering.
    pub fn new(data: Arc<Vec<R>>) -> Self {
        DataTable::builder(data).build()
    }

    /// Returns the data.
    pub fn data(&self) -> &Arc<Vec<R>> {
        &self.data
    }

    /// Returns every derived column, shown or hidden.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the shown columns, in column order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| self.state.is_visible(&c.key))
            .collect()
    }

    /// Returns every column with its visibility, for a column picker.
    pub fn column_toggles(&self) -> Vec<ColumnToggle> {
        self.columns
            .iter()
            .map(|c| ColumnToggle {
                key: c.key.clone(),
                label: c.label.clone(),
                visible: self.state.is_visible(&c.key),
            })
            .collect()
    }

    /// Returns `true` unless the column has been hidden.
    pub fn is_visible(&self, key: &str) -> bool {
        self.state.is_visible(key)
    }

    /// Returns the search text.
    pub fn search_query(&self) -> &str {
        self.state.search_query()
    }

    /// Returns the filter rules.
    pub fn filters(&self) -> &[FilterRule] {
        self.state.filters()
    }

    /// Returns the current state. Later operations do not affect it.
    pub fn snapshot(&self) -> Arc<TableState> {
        Arc::clone(&self.state)
    }

    fn dispatch(&mut self, action: TableAction) {
        log::trace!("table action: {:?}", action);
        self.state = Arc::new(self.state.reduce(action));
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.dispatch(TableAction::SetSearch(query.into()));
    }

    /// Shows or hides a column. Rows are unaffected.
    pub fn toggle_column(&mut self, key: impl Into<String>, visible: bool) {
        self.dispatch(TableAction::ToggleColumn {
            key: key.into(),
            visible,
        });
    }

    /// Appends an `equals ""` rule on the first column and returns its id.
    pub fn add_filter(&mut self) -> FilterId {
        let id = self.state.next_filter_id();
        let default_column = self
            .columns
            .first()
            .map(|c| c.key.clone())
            .unwrap_or_default();
        self.dispatch(TableAction::AddFilter { default_column });
        log::debug!("added filter {}", id);
        id
    }

    /// Replaces one field of the rule `id`. Unknown ids are ignored.
    pub fn update_filter(&mut self, id: FilterId, field: FilterField, value: impl Into<String>) {
        self.dispatch(TableAction::UpdateFilter {
            id,
            field,
            value: value.into(),
        });
    }

    /// Deletes the rule `id`.
    pub fn remove_filter(&mut self, id: FilterId) {
        self.dispatch(TableAction::RemoveFilter(id));
        log::debug!("removed filter {}", id);
    }

    /// Adds a complete rule through the same operations an editor uses.
    pub fn add_filter_spec(&mut self, spec: RuleSpec) -> FilterId {
        let id = self.add_filter();
        self.update_filter(id, FilterField::Column, spec.column);
        self.update_filter(id, FilterField::Rule, spec.rule.as_str());
        self.update_filter(id, FilterField::Value, spec.value);
        id
    }

    /// Parses `column:rule:value` and adds it.
    pub fn add_filter_str(&mut self, text: &str) -> Result<FilterId> {
        let spec: RuleSpec = text.parse()?;
        Ok(self.add_filter_spec(spec))
    }

    /// Returns the predicate for the current state.
    pub fn query(&self) -> Query {
        self.state.query(&self.columns)
    }

    /// Returns the rows passing search and filters, in data order.
    pub fn visible_rows(&self) -> Vec<&R> {
        let rows = self.query().filter(self.data.as_slice(), R::accessor);
        log::trace!("visible rows: {} of {}", rows.len(), self.data.len());
        rows
    }

    /// Returns the data positions of the visible rows.
    pub fn visible_positions(&self) -> Vec<usize> {
        self.query().positions(self.data.as_slice(), R::accessor)
    }

    /// Renders the visible rows of the visible columns.
    pub fn render(&self) -> RenderedTable {
        let shown: Vec<(usize, &Column)> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| self.state.is_visible(&c.key))
            .collect();

        let rows: Vec<RenderedRow> = self
            .visible_positions()
            .into_iter()
            .map(|index| {
                let row = &self.data[index];
                let cells = shown
                    .iter()
                    .enumerate()
                    .map(|(position, (slot, column))| {
                        let value = row.field_value(&column.key);
                        let text = self.slots[*slot].render(&value, row);
                        let href = match &self.link {
                            Some(link) if position == 0 => Some(link.href(row)),
                            _ => None,
                        };
                        RenderedCell {
                            key: column.key.clone(),
                            text,
                            href,
                        }
                    })
                    .collect();
                RenderedRow { index, cells }
            })
            .collect();

        let status = if self.data.is_empty() {
            TableStatus::Empty
        } else if rows.is_empty() {
            TableStatus::NoMatches
        } else {
            TableStatus::Rows
        };

        RenderedTable {
            headers: shown.into_iter().map(|(_, c)| c.clone()).collect(),
            rows,
            status,
            column_count: self.columns.len(),
            total_count: self.data.len(),
            filter_summary: filter_summary(self.state.filters(), &self.columns),
        }
    }

    /// Replaces the data.
    ///
    /// Columns and renderers are derived again only when `data` is a
    /// different allocation. Search, filters and filter ids are kept;
    /// visibility is reconciled with the new columns.
    pub fn set_data(&mut self, data: Arc<Vec<R>>) {
        if Arc::ptr_eq(&self.data, &data) {
            return;
        }
        self.data = data;
        let columns = project_columns(&self.data, &self.config);
        if columns != self.columns {
            log::debug!(
                "columns changed: {} -> {}",
                self.columns.len(),
                columns.len()
            );
            self.slots = resolve_renderers(&columns, &self.renderers);
            let keys = columns.iter().map(|c| c.key.clone()).collect();
            self.columns = columns;
            self.dispatch(TableAction::ReconcileColumns(keys));
        }
    }
}

fn resolve_renderers<R>(
    columns: &[Column],
    renderers: &IndexMap<String, Arc<dyn CellRenderer<R>>>,
) -> Vec<Renderer<R>> {
    columns
        .iter()
        .map(|column| match renderers.get(&column.key) {
            Some(renderer) => Renderer::Custom(Arc::clone(renderer)),
            None => Renderer::Default,
        })
        .collect()
}
