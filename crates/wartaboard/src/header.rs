//! Header sub-control model.
//!
//! The header above a table offers a search box plus two collapsible
//! panels: a column picker and a filter-rule editor. This module holds the
//! presentation-independent part of it: which panel is open, the options
//! a rule picker lists, and filters described in words.

use serde::Serialize;
use wartaboard_seeker::{FilterRule, Rule};

use crate::column::Column;

/// One entry of a rule picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOption {
    /// Wire name stored in a [`FilterRule`].
    pub key: String,
    /// Label shown to the user.
    pub label: String,
}

impl RuleOption {
    /// Returns the rule this option selects.
    pub fn rule(&self) -> Rule {
        Rule::from(self.key.as_str())
    }
}

impl From<&Rule> for RuleOption {
    fn from(rule: &Rule) -> Self {
        RuleOption {
            key: rule.as_str().to_string(),
            label: rule.label().to_string(),
        }
    }
}

/// Rules offered by the filter editor, in [`Rule::KNOWN`] order.
pub fn rule_options() -> Vec<RuleOption> {
    Rule::KNOWN.iter().map(RuleOption::from).collect()
}

/// A collapsible header panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPanel {
    /// Column visibility toggles.
    Columns,
    /// Filter-rule editor.
    Filters,
}

/// Accordion state: at most one panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeaderState {
    open: Option<HeaderPanel>,
}

impl HeaderState {
    /// Creates a header with both panels closed.
    pub fn new() -> Self {
        HeaderState::default()
    }

    /// Returns the open panel.
    pub fn open_panel(&self) -> Option<HeaderPanel> {
        self.open
    }

    /// Returns `true` if `panel` is open.
    pub fn is_open(&self, panel: HeaderPanel) -> bool {
        self.open == Some(panel)
    }

    /// Opens `panel`, closing the other one, or closes it if already open.
    pub fn toggle(self, panel: HeaderPanel) -> Self {
        HeaderState {
            open: if self.open == Some(panel) {
                None
            } else {
                Some(panel)
            },
        }
    }

    /// State after a filter is added: the filter editor is open.
    pub fn filter_added(self) -> Self {
        HeaderState {
            open: Some(HeaderPanel::Filters),
        }
    }
}

/// A column with its current visibility, as the column picker shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnToggle {
    /// Column key.
    pub key: String,
    /// Column label.
    pub label: String,
    /// Whether the column is shown.
    pub visible: bool,
}

/// Returns the label of the column `key`, or the key itself.
fn column_label<'a>(key: &'a str, columns: &'a [Column]) -> &'a str {
    columns
        .iter()
        .find(|c| c.key == key)
        .map_or(key, |c| c.label.as_str())
}

/// Describes one rule, e.g. `Name starts with "b"`.
pub fn describe_filter(rule: &FilterRule, columns: &[Column]) -> String {
    format!(
        "{} {} \"{}\"",
        column_label(&rule.column, columns),
        rule.rule.label(),
        rule.value
    )
}

/// Describes every rule, joined with `and`. `None` without rules.
pub fn filter_summary(rules: &[FilterRule], columns: &[Column]) -> Option<String> {
    if rules.is_empty() {
        return None;
    }
    Some(
        rules
            .iter()
            .map(|rule| describe_filter(rule, columns))
            .collect::<Vec<_>>()
            .join(" and "),
    )
}
