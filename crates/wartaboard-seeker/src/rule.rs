//! Structured filter rules.
//!
//! A [`FilterRule`] is a single predicate: a column key, a [`Rule`] and a
//! comparison value. Rules are identified by a [`FilterId`] so a rule editor
//! can update or remove one rule without disturbing the others.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekerError;
use crate::value::Value;

/// Identifier of a filter rule, unique within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub u64);

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Comparison applied by a filter rule.
///
/// Rules are named on the wire (`equals`, `contains`, `startsWith`,
/// `endsWith`, `isNot`). Any other name is kept verbatim in [`Rule::Other`]
/// and matches every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rule {
    /// Field equals the value.
    #[default]
    Equals,
    /// Field contains the value.
    Contains,
    /// Field starts with the value.
    StartsWith,
    /// Field ends with the value.
    EndsWith,
    /// Field differs from the value.
    IsNot,
    /// Unrecognized rule name. Always matches.
    Other(String),
}

impl Rule {
    /// All recognized rules, in the order a rule picker lists them.
    pub const KNOWN: [Rule; 5] = [
        Rule::Equals,
        Rule::Contains,
        Rule::StartsWith,
        Rule::EndsWith,
        Rule::IsNot,
    ];

    /// Returns the wire name of this rule.
    pub fn as_str(&self) -> &str {
        match self {
            Rule::Equals => "equals",
            Rule::Contains => "contains",
            Rule::StartsWith => "startsWith",
            Rule::EndsWith => "endsWith",
            Rule::IsNot => "isNot",
            Rule::Other(name) => name,
        }
    }

    /// Returns the human-readable label shown in a rule picker.
    pub fn label(&self) -> &str {
        match self {
            Rule::Equals => "is equal to",
            Rule::Contains => "contains",
            Rule::StartsWith => "starts with",
            Rule::EndsWith => "ends with",
            Rule::IsNot => "is not",
            Rule::Other(name) => name,
        }
    }

    /// Returns `true` if this rule name was recognized.
    pub fn is_known(&self) -> bool {
        !matches!(self, Rule::Other(_))
    }

    /// Applies this rule to already lower-cased operands.
    pub fn eval(&self, field: &str, value: &str) -> bool {
        match self {
            Rule::Equals => field == value,
            Rule::Contains => field.contains(value),
            Rule::StartsWith => field.starts_with(value),
            Rule::EndsWith => field.ends_with(value),
            Rule::IsNot => field != value,
            Rule::Other(_) => true,
        }
    }
}

impl From<&str> for Rule {
    fn from(name: &str) -> Self {
        match name {
            "equals" => Rule::Equals,
            "contains" => Rule::Contains,
            "startsWith" => Rule::StartsWith,
            "endsWith" => Rule::EndsWith,
            "isNot" => Rule::IsNot,
            other => Rule::Other(other.to_string()),
        }
    }
}

impl From<String> for Rule {
    fn from(name: String) -> Self {
        Rule::from(name.as_str())
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.as_str().to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structured filter predicate.
///
/// # Example
///
/// ```
/// use wartaboard_seeker::{FilterId, FilterRule, Rule, Value};
///
/// let rule = FilterRule::new(FilterId(1), "name", Rule::StartsWith, "b");
/// assert!(rule.matches(&Value::from("Bob")));
/// assert!(!rule.matches(&Value::from("Alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Identifier, unique within the owning table.
    pub id: FilterId,
    /// Column key the rule reads.
    pub column: String,
    /// Comparison to apply.
    pub rule: Rule,
    /// Value to compare against.
    pub value: String,
}

impl FilterRule {
    /// Creates a new filter rule.
    pub fn new(
        id: FilterId,
        column: impl Into<String>,
        rule: impl Into<Rule>,
        value: impl Into<String>,
    ) -> Self {
        FilterRule {
            id,
            column: column.into(),
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// Evaluates this rule against a field value, ignoring case.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        if let Rule::Other(_) = self.rule {
            return true;
        }
        let field = field_value.to_text().to_lowercase();
        let value = self.value.to_lowercase();
        self.rule.eval(&field, &value)
    }

    /// Returns a copy with one field replaced.
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FilterField::Column => next.column = value,
            FilterField::Rule => next.rule = Rule::from(value),
            FilterField::Value => next.value = value,
        }
        next
    }
}

/// Editable field of a [`FilterRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    /// The column key.
    Column,
    /// The rule name.
    Rule,
    /// The comparison value.
    Value,
}

/// A filter rule without an identifier, parsed from `column:rule:value`.
///
/// The value may itself contain `:`. An empty value is allowed.
///
/// ```
/// use wartaboard_seeker::{Rule, RuleSpec};
///
/// let spec: RuleSpec = "location:contains:Hall: A".parse().unwrap();
/// assert_eq!(spec.column, "location");
/// assert_eq!(spec.rule, Rule::Contains);
/// assert_eq!(spec.value, "Hall: A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Column key.
    pub column: String,
    /// Comparison.
    pub rule: Rule,
    /// Comparison value.
    pub value: String,
}

impl RuleSpec {
    /// Attaches an identifier, producing a full [`FilterRule`].
    pub fn into_rule(self, id: FilterId) -> FilterRule {
        FilterRule {
            id,
            column: self.column,
            rule: self.rule,
            value: self.value,
        }
    }
}

impl FromStr for RuleSpec {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (column, rule, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(column), Some(rule), Some(value)) => (column, rule, value),
            _ => {
                return Err(SeekerError::InvalidRuleSpec {
                    input: s.to_string(),
                })
            }
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(SeekerError::EmptyColumn {
                input: s.to_string(),
            });
        }
        Ok(RuleSpec {
            column: column.to_string(),
            rule: Rule::from(rule.trim()),
            value: value.to_string(),
        })
    }
}
