//! Column/Row Projector.
//!
//! Derives the column set of a table from the first record of its data:
//!
//! 1. No data, no columns. `include` and `omit` are irrelevant.
//! 2. A non-empty `include` list is the column set, in the given order.
//!    Repeated keys count once, at their first position.
//! 3. Otherwise every field of the first record, minus `omit`.
//! 4. Each column is labelled from `labels`, falling back to [`start_case`].
//!
//! `include` keys that the record does not have are kept; their cells read
//! as [`Value::None`](wartaboard_seeker::Value::None) and render blank.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use wartaboard_seeker::Record;

/// A labelled projection of one field across all rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Field key the column reads.
    pub key: String,
    /// Header label.
    pub label: String,
}

impl Column {
    /// Creates a column with an explicit label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Creates a column labelled with [`start_case`] of its key.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let label = start_case(&key);
        Column { key, label }
    }
}

/// Inclusion, exclusion and labelling of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Exclusive allow-list. When non-empty, `omit` is ignored.
    pub include: Vec<String>,
    /// Deny-list applied to the first record's fields.
    pub omit: Vec<String>,
    /// Header label overrides.
    pub labels: IndexMap<String, String>,
}

impl ColumnConfig {
    /// Creates an empty configuration: every field, start-cased labels.
    pub fn new() -> Self {
        ColumnConfig::default()
    }

    /// Appends keys to the allow-list.
    pub fn include<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Appends keys to the deny-list.
    pub fn omit<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omit.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Overrides the label of one column.
    pub fn label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }

    /// Returns the label for `key`.
    pub fn label_for(&self, key: &str) -> String {
        self.labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| start_case(key))
    }
}

/// Derives the columns of `data` under `config`.
///
/// ```
/// use serde_json::json;
/// use wartaboard::{project_columns, Column, ColumnConfig, JsonRow};
///
/// let rows: Vec<JsonRow> = serde_json::from_value(json!([
///     {"id": "1", "name": "Alice", "signupDate": "2025-01-05"}
/// ])).unwrap();
///
/// let columns = project_columns(&rows, &ColumnConfig::new().omit(["id"]));
/// assert_eq!(columns, vec![
///     Column::new("name", "Name"),
///     Column::new("signupDate", "Signup Date"),
/// ]);
/// ```
pub fn project_columns<R: Record>(data: &[R], config: &ColumnConfig) -> Vec<Column> {
    let Some(first) = data.first() else {
        return Vec::new();
    };

    let keys: IndexSet<String> = if !config.include.is_empty() {
        config.include.iter().cloned().collect()
    } else {
        first
            .field_names()
            .into_iter()
            .filter(|key| !config.omit.iter().any(|omitted| omitted == key))
            .map(str::to_string)
            .collect()
    };

    keys.into_iter()
        .map(|key| {
            let label = config.label_for(&key);
            Column { key, label }
        })
        .collect()
}

/// Turns a field key into a human-readable label.
///
/// Inserts a space before every uppercase letter, treats `_` and `-` as
/// spaces, collapses whitespace and capitalizes every word.
///
/// ```
/// use wartaboard::start_case;
///
/// assert_eq!(start_case("signupDate"), "Signup Date");
/// assert_eq!(start_case("hero_image"), "Hero Image");
/// assert_eq!(start_case("seo-title"), "Seo Title");
/// ```
pub fn start_case(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
            spaced.push(c);
        } else if c == '_' || c == '-' {
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wartaboard_seeker::Value;

    type Row = serde_json::Map<String, serde_json::Value>;

    fn rows(value: serde_json::Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    fn keys(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn start_case_examples() {
        assert_eq!(start_case("signupDate"), "Signup Date");
        assert_eq!(start_case("hero_image"), "Hero Image");
        assert_eq!(start_case("name"), "Name");
        assert_eq!(start_case("publishDate"), "Publish Date");
        assert_eq!(start_case("banExpiresAt"), "Ban Expires At");
        assert_eq!(start_case("__meta--key__"), "Meta Key");
        assert_eq!(start_case(""), "");
    }

    #[test]
    fn start_case_spaces_every_capital() {
        assert_eq!(start_case("ID"), "I D");
        assert_eq!(start_case("isPublished"), "Is Published");
    }

    #[test]
    fn empty_data_has_no_columns() {
        let config = ColumnConfig::new().include(["name"]);
        assert!(project_columns::<Row>(&[], &config).is_empty());
    }

    #[test]
    fn omit_removes_keys_in_natural_order() {
        let data = rows(json!([{"id": "1", "name": "Alice", "email": "a@x"}]));
        let columns = project_columns(&data, &ColumnConfig::new().omit(["id"]));
        assert_eq!(keys(&columns), vec!["name", "email"]);
    }

    #[test]
    fn include_wins_over_omit() {
        let data = rows(json!([{"id": "1", "name": "Alice", "email": "a@x"}]));
        let config = ColumnConfig::new()
            .include(["email", "name"])
            .omit(["name"]);
        let columns = project_columns(&data, &config);
        assert_eq!(keys(&columns), vec!["email", "name"]);
    }

    #[test]
    fn repeated_include_keys_count_once() {
        let data = rows(json!([{"id": "1", "name": "Maria"}]));
        let config = ColumnConfig::new()
            .include(["name", "id"])
            .include(["name"]);
        let columns = project_columns(&data, &config);
        assert_eq!(keys(&columns), vec!["name", "id"]);
    }

    #[test]
    fn include_keeps_unknown_keys() {
        let data = rows(json!([{"id": "1"}]));
        let columns = project_columns(&data, &ColumnConfig::new().include(["nickname"]));
        assert_eq!(columns, vec![Column::new("nickname", "Nickname")]);
        assert_eq!(data[0].field_value("nickname"), Value::None);
    }

    #[test]
    fn labels_override_start_case() {
        let data = rows(json!([{"heroImage": "x.png", "title": "Warta"}]));
        let config = ColumnConfig::new().label("heroImage", "Banner");
        let columns = project_columns(&data, &config);
        assert_eq!(
            columns,
            vec![Column::new("heroImage", "Banner"), Column::new("title", "Title")]
        );
    }

    #[test]
    fn only_first_record_defines_keys() {
        let data = rows(json!([{"a": 1}, {"a": 2, "b": 3}]));
        let columns = project_columns(&data, &ColumnConfig::new());
        assert_eq!(keys(&columns), vec!["a"]);
    }

    #[test]
    fn column_from_key() {
        assert_eq!(Column::from_key("eventName"), Column::new("eventName", "Event Name"));
    }
}
