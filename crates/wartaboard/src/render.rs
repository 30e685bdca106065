//! Cell renderers, row links and the rendered-table model.
//!
//! Every column gets a [`Renderer`] when the column set is derived: either
//! the default stringification or a caller-supplied [`CellRenderer`]. Cells
//! are then rendered without any per-cell lookup.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use wartaboard_seeker::{Record, Value};

use crate::column::Column;

/// Presents one cell of a row.
///
/// Implemented for closures taking `(&Value, &R)`, so most callers never
/// name this trait:
///
/// ```
/// use wartaboard::{CellRenderer, JsonRow};
/// use wartaboard::seeker::Value;
///
/// let upper = |value: &Value<'_>, _row: &JsonRow| value.to_text().to_uppercase();
/// assert_eq!(upper.render(&Value::from("warta"), &JsonRow::new()), "WARTA");
/// ```
pub trait CellRenderer<R> {
    /// Renders `value`, read from `row`, as text.
    fn render(&self, value: &Value<'_>, row: &R) -> String;
}

impl<R, F> CellRenderer<R> for F
where
    F: Fn(&Value<'_>, &R) -> String,
{
    fn render(&self, value: &Value<'_>, row: &R) -> String {
        self(value, row)
    }
}

/// Renders the value's text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl<R> CellRenderer<R> for DefaultRenderer {
    fn render(&self, value: &Value<'_>, _row: &R) -> String {
        value.to_text().into_owned()
    }
}

/// The renderer resolved for one column.
pub enum Renderer<R> {
    /// [`DefaultRenderer`].
    Default,
    /// A caller-supplied renderer.
    Custom(Arc<dyn CellRenderer<R>>),
}

impl<R> Renderer<R> {
    /// Renders one cell.
    pub fn render(&self, value: &Value<'_>, row: &R) -> String {
        match self {
            Renderer::Default => DefaultRenderer.render(value, row),
            Renderer::Custom(renderer) => renderer.render(value, row),
        }
    }

    /// Returns `true` for the default renderer.
    pub fn is_default(&self) -> bool {
        matches!(self, Renderer::Default)
    }
}

impl<R> Clone for Renderer<R> {
    fn clone(&self) -> Self {
        match self {
            Renderer::Default => Renderer::Default,
            Renderer::Custom(renderer) => Renderer::Custom(Arc::clone(renderer)),
        }
    }
}

impl<R> fmt::Debug for Renderer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Default => f.write_str("Default"),
            Renderer::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Builds the navigation reference of a row: `{target}/{id}`.
///
/// The identifier is read through an explicit accessor, so a row type
/// without an `id` field cannot silently produce broken links.
///
/// ```
/// use wartaboard::RowLink;
///
/// struct Event { id: String }
///
/// let link = RowLink::new("/dashboard/event/", |e: &Event| e.id.clone());
/// assert_eq!(link.href(&Event { id: "e1".into() }), "/dashboard/event/e1");
/// ```
pub struct RowLink<R> {
    target: String,
    id: Arc<dyn Fn(&R) -> String>,
}

impl<R> RowLink<R> {
    /// Creates a link under `target` using `id` to identify rows.
    pub fn new(target: impl Into<String>, id: impl Fn(&R) -> String + 'static) -> Self {
        RowLink {
            target: target.into(),
            id: Arc::new(id),
        }
    }

    /// Returns the target namespace.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the link for `row`.
    pub fn href(&self, row: &R) -> String {
        format!("{}/{}", self.target.trim_end_matches('/'), (self.id)(row))
    }
}

impl<R: Record> RowLink<R> {
    /// Creates a link reading the identifier from the field `key`.
    pub fn field(target: impl Into<String>, key: impl Into<String>) -> Self {
        let key = key.into();
        RowLink::new(target, move |row: &R| {
            row.field_value(&key).to_text().into_owned()
        })
    }
}

impl<R> Clone for RowLink<R> {
    fn clone(&self) -> Self {
        RowLink {
            target: self.target.clone(),
            id: Arc::clone(&self.id),
        }
    }
}

impl<R> fmt::Debug for RowLink<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowLink")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Whether a rendered table has rows, and why not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableStatus {
    /// At least one row matched.
    Rows,
    /// The data has no rows at all.
    Empty,
    /// Rows exist but none passed search and filters.
    NoMatches,
}

impl TableStatus {
    /// Returns the placeholder shown instead of rows.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TableStatus::Rows => None,
            TableStatus::Empty => Some("Collection is empty"),
            TableStatus::NoMatches => Some("No matching results"),
        }
    }
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    /// Column key.
    pub key: String,
    /// Rendered text.
    pub text: String,
    /// Link target, set on the first visible column when the table links rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Position of the row in the table data.
    pub index: usize,
    /// Cells of the visible columns.
    pub cells: Vec<RenderedCell>,
}

/// The visible part of a table, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTable {
    /// Visible columns, in column order.
    pub headers: Vec<Column>,
    /// Rows that passed search and filters.
    pub rows: Vec<RenderedRow>,
    /// Row presence.
    pub status: TableStatus,
    /// Number of derived columns, shown or hidden. The status placeholder spans this many.
    pub column_count: usize,
    /// Number of rows before search and filters.
    pub total_count: usize,
    /// Active filters in words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,
}

impl RenderedTable {
    /// Returns the status placeholder, if there are no rows.
    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }

    /// Returns the number of rendered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows were rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell texts row by row.
    pub fn texts(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|c| c.text.as_str()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wartaboard_seeker::Number;

    struct Doc {
        id: String,
    }

    #[test]
    fn default_renderer_uses_text_form() {
        let doc = Doc { id: "d1".into() };
        assert_eq!(DefaultRenderer.render(&Value::from("x"), &doc), "x");
        assert_eq!(
            DefaultRenderer.render(&Value::Number(Number::U64(3)), &doc),
            "3"
        );
        assert_eq!(DefaultRenderer.render(&Value::None, &doc), "");
    }

    #[test]
    fn closure_renderer_sees_row() {
        let renderer = |value: &Value<'_>, row: &Doc| format!("{}#{}", value.to_text(), row.id);
        let doc = Doc { id: "d1".into() };
        assert_eq!(renderer.render(&Value::from("a"), &doc), "a#d1");
    }

    #[test]
    fn resolved_renderer_dispatch() {
        let doc = Doc { id: "d1".into() };
        let custom: Renderer<Doc> =
            Renderer::Custom(Arc::new(|_: &Value<'_>, _: &Doc| "custom".to_string()));
        assert_eq!(custom.render(&Value::from("a"), &doc), "custom");
        assert!(!custom.clone().is_default());
        assert_eq!(Renderer::<Doc>::Default.render(&Value::from("a"), &doc), "a");
    }

    #[test]
    fn link_joins_with_single_slash() {
        let link = RowLink::new("/dashboard/warta", |d: &Doc| d.id.clone());
        let doc = Doc { id: "42".into() };
        assert_eq!(link.href(&doc), "/dashboard/warta/42");
        let trailing = RowLink::new("/dashboard/warta/", |d: &Doc| d.id.clone());
        assert_eq!(trailing.href(&doc), "/dashboard/warta/42");
        assert_eq!(link.clone().target(), "/dashboard/warta");
    }

    #[test]
    fn status_messages() {
        assert_eq!(TableStatus::Rows.message(), None);
        assert_eq!(TableStatus::Empty.message(), Some("Collection is empty"));
        assert_eq!(TableStatus::NoMatches.message(), Some("No matching results"));
    }

    #[test]
    fn rendered_table_serializes_camel_case() {
        let table = RenderedTable {
            headers: vec![Column::new("name", "Name")],
            rows: vec![RenderedRow {
                index: 0,
                cells: vec![RenderedCell {
                    key: "name".into(),
                    text: "Alice".into(),
                    href: None,
                }],
            }],
            status: TableStatus::Rows,
            column_count: 1,
            total_count: 1,
            filter_summary: None,
        };
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["status"], "rows");
        assert_eq!(json["columnCount"], 1);
        assert!(json["rows"][0]["cells"][0].get("href").is_none());
        assert_eq!(table.texts(), vec![vec!["Alice"]]);
    }
}
