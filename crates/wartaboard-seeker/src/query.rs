//! Query builder and executor.
//!
//! A [`Query`] combines a free-text search over a set of fields with a list
//! of structured [`FilterRule`]s, and tests rows against both.

use crate::rule::FilterRule;
use crate::value::Value;

/// A search-plus-rules query over a collection of rows.
///
/// The match logic is:
/// ```text
/// match = (search is empty OR any search field contains search)
///       ∧ (every rule matches)
/// ```
///
/// # Example
///
/// ```
/// use wartaboard_seeker::{FilterId, FilterRule, Query, Rule};
///
/// let query = Query::new()
///     .search("pagi", ["eventName", "location"])
///     .rule(FilterRule::new(FilterId(1), "location", Rule::IsNot, "online"))
///     .build();
/// assert_eq!(query.rules_list().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search: String,
    search_fields: Vec<String>,
    rules: Vec<FilterRule>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    /// Sets the free-text search and the fields it scans.
    pub fn search<I, S>(mut self, text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = text.into();
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a filter rule. All rules must match.
    pub fn rule(mut self, rule: FilterRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several filter rules.
    pub fn rules(mut self, rules: impl IntoIterator<Item = FilterRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    /// Returns the search text.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Returns the fields the search scans.
    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Returns the filter rules.
    pub fn rules_list(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Returns `true` if this query has no search text and no rules.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.rules.is_empty()
    }

    /// Tests the search part of the query against one item.
    pub fn matches_search<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        self.search_fields.iter().any(|field| {
            accessor(item, field.as_str())
                .to_text()
                .to_lowercase()
                .contains(&needle)
        })
    }

    /// Tests every filter rule against one item.
    pub fn matches_rules<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.rules
            .iter()
            .all(|rule| rule.matches(&accessor(item, rule.column.as_str())))
    }

    /// Tests if a single item matches this query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.matches_search(item, &accessor) && self.matches_rules(item, &accessor)
    }

    /// Filters a slice, returning references to matching items in input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }

    /// Returns the indices of matching items in input order.
    pub fn positions<T, F>(&self, items: &[T], accessor: F) -> Vec<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(*item, &accessor))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }
}
