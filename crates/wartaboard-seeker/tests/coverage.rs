//! Public API coverage for seeker.

use serde_json::json;
use wartaboard_seeker::{
    FilterField, FilterId, FilterRule, Number, Query, Record, Rule, RuleSpec, SeekerError,
    Timestamp, Value,
};

// ============================================================================
// JSON rows
// ============================================================================

type Row = serde_json::Map<String, serde_json::Value>;

fn rows() -> Vec<Row> {
    let data = json!([
        {"id": "a1", "name": "Alice", "seats": 12, "active": true},
        {"id": "b2", "name": "Bob", "seats": 40, "active": false},
        {"id": "c3", "name": "Benny", "seats": null, "active": true}
    ]);
    match data {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn json_rows_are_records() {
    let rows = rows();
    assert_eq!(rows[0].field_names(), vec!["id", "name", "seats", "active"]);
    assert_eq!(rows[1].field_value("seats"), Value::Number(Number::I64(40)));
    assert_eq!(rows[2].field_value("seats"), Value::None);
}

#[test]
fn json_rows_filter_with_accessor() {
    let rows = rows();
    let query = Query::new()
        .rule(FilterRule::new(FilterId(1), "name", Rule::StartsWith, "b"))
        .rule(FilterRule::new(FilterId(2), "active", Rule::Equals, "true"))
        .build();
    let names: Vec<_> = query
        .filter(&rows, Row::accessor)
        .into_iter()
        .map(|row| row.field_value("name").to_text().into_owned())
        .collect();
    assert_eq!(names, vec!["Benny"]);
}

#[test]
fn search_on_null_field_never_matches() {
    let rows = rows();
    let query = Query::new().search("null", ["seats"]).build();
    assert_eq!(query.count(&rows, Row::accessor), 0);
}

// ============================================================================
// Rule editing
// ============================================================================

#[test]
fn rule_spec_into_rule_keeps_parts() {
    let spec: RuleSpec = "name : isNot : Bob".parse().unwrap();
    let rule = spec.into_rule(FilterId(9));
    assert_eq!(rule.id, FilterId(9));
    assert_eq!(rule.column, "name");
    assert_eq!(rule.rule, Rule::IsNot);
    assert_eq!(rule.value, " Bob");
}

#[test]
fn rule_spec_unknown_rule_is_kept() {
    let spec: RuleSpec = "name:greaterThan:3".parse().unwrap();
    assert_eq!(spec.rule, Rule::Other("greaterThan".into()));
}

#[test]
fn rule_spec_error_messages() {
    let err = "only:two".parse::<RuleSpec>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid filter rule 'only:two': expected column:rule:value"
    );
    assert!(matches!(
        " :equals:x".parse::<RuleSpec>(),
        Err(SeekerError::EmptyColumn { .. })
    ));
}

#[test]
fn filter_field_deserializes_lowercase() {
    let field: FilterField = serde_json::from_str(r#""value""#).unwrap();
    assert_eq!(field, FilterField::Value);
}

#[test]
fn unknown_rule_survives_serde() {
    let rule = FilterRule::new(FilterId(3), "name", "fuzzy", "x");
    let json = serde_json::to_string(&rule).unwrap();
    let back: FilterRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rule, Rule::Other("fuzzy".into()));
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn number_to_f64() {
    assert_eq!(Number::I64(42).to_f64(), 42.0);
    assert_eq!(Number::U64(42).to_f64(), 42.0);
    assert_eq!(Number::F64(42.5).to_f64(), 42.5);
}

#[test]
fn timestamp_text_is_searchable() {
    let ts = Timestamp::from_secs(1_736_071_200);
    let value = Value::Timestamp(ts);
    let rule = FilterRule::new(FilterId(1), "date", Rule::StartsWith, "2025-01-05");
    assert!(rule.matches(&value));
}

#[test]
fn owned_values_outlive_formatting() {
    let value: Value<'static> = Value::from(format!("{}-{}", "a", 1));
    assert_eq!(value.to_text(), "a-1");
}
