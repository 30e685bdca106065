//! Property-based tests for seeker using proptest.

use proptest::prelude::*;
use wartaboard_seeker::{FilterId, FilterRule, Number, Query, Rule, Value};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct TestItem {
    seats: i64,
    name: String,
    location: String,
}

fn item_accessor<'a>(item: &'a TestItem, field: &str) -> Value<'a> {
    match field {
        "seats" => Value::Number(Number::I64(item.seats)),
        "name" => Value::from(item.name.as_str()),
        "location" => Value::from(item.location.as_str()),
        _ => Value::None,
    }
}

fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    (any::<i64>(), "[a-zA-Z]{1,10}", "[a-z ]{0,12}").prop_map(|(seats, name, location)| {
        TestItem {
            seats,
            name,
            location,
        }
    })
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    prop_oneof![
        Just(Rule::Equals),
        Just(Rule::Contains),
        Just(Rule::StartsWith),
        Just(Rule::EndsWith),
        Just(Rule::IsNot),
    ]
}

fn column_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("seats"), Just("name"), Just("location"), Just("missing")]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filter never returns more items than the input.
    #[test]
    fn filter_never_grows_collection(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        rule in rule_strategy(),
        column in column_strategy(),
        value in "[a-z0-9]{0,3}",
    ) {
        let query = Query::new()
            .rule(FilterRule::new(FilterId(1), column, rule, value))
            .build();
        let results = query.filter(&items, item_accessor);
        prop_assert!(results.len() <= items.len());
    }

    /// Count equals the length of filtered results and of positions.
    #[test]
    fn count_equals_filter_len(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        search in "[a-z]{0,2}",
    ) {
        let query = Query::new().search(search, ["name", "location"]).build();
        let filtered = query.filter(&items, item_accessor);
        prop_assert_eq!(filtered.len(), query.count(&items, item_accessor));
        prop_assert_eq!(filtered.len(), query.positions(&items, item_accessor).len());
    }

    /// Empty query matches all items.
    #[test]
    fn empty_query_matches_all(
        items in prop::collection::vec(test_item_strategy(), 0..50),
    ) {
        let query = Query::new().build();
        prop_assert_eq!(query.count(&items, item_accessor), items.len());
    }

    /// Positions are strictly increasing, so input order is preserved.
    #[test]
    fn positions_are_increasing(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        search in "[a-z]{1,2}",
    ) {
        let query = Query::new().search(search, ["name"]).build();
        let positions = query.positions(&items, item_accessor);
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Adding a rule never increases the result.
    #[test]
    fn adding_rule_narrows(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        first in rule_strategy(),
        second in rule_strategy(),
        value in "[a-z]{0,2}",
    ) {
        let one = Query::new()
            .rule(FilterRule::new(FilterId(1), "name", first.clone(), value.clone()))
            .build();
        let two = one
            .clone()
            .rule(FilterRule::new(FilterId(2), "location", second, value))
            .build();
        prop_assert!(two.count(&items, item_accessor) <= one.count(&items, item_accessor));
    }

    /// Search result is a subset of the unsearched result.
    #[test]
    fn search_narrows(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        search in "[a-z]{1,3}",
    ) {
        let all = Query::new().build().positions(&items, item_accessor);
        let searched = Query::new()
            .search(search, ["name", "location"])
            .build()
            .positions(&items, item_accessor);
        prop_assert!(searched.iter().all(|p| all.contains(p)));
    }

    /// Search ignores case.
    #[test]
    fn search_case_insensitive(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        search in "[a-z]{1,2}",
    ) {
        let lower = Query::new().search(search.clone(), ["name"]).build();
        let upper = Query::new().search(search.to_uppercase(), ["name"]).build();
        prop_assert_eq!(
            lower.positions(&items, item_accessor),
            upper.positions(&items, item_accessor)
        );
    }

    /// A rule with an unrecognized name matches every row.
    #[test]
    fn unknown_rule_matches_all(
        items in prop::collection::vec(test_item_strategy(), 0..50),
        name in "[A-Z][a-z]{2,8}",
        value in "[a-z]{0,4}",
    ) {
        let query = Query::new()
            .rule(FilterRule::new(FilterId(1), "name", Rule::Other(name), value))
            .build();
        prop_assert_eq!(query.count(&items, item_accessor), items.len());
    }

    /// `equals` and `isNot` partition the collection.
    #[test]
    fn equals_and_is_not_partition(
        items in prop::collection::vec(test_item_strategy(), 0..60),
        value in "[a-z]{1,3}",
    ) {
        let eq = Query::new()
            .rule(FilterRule::new(FilterId(1), "name", Rule::Equals, value.clone()))
            .build();
        let ne = Query::new()
            .rule(FilterRule::new(FilterId(1), "name", Rule::IsNot, value))
            .build();
        prop_assert_eq!(
            eq.count(&items, item_accessor) + ne.count(&items, item_accessor),
            items.len()
        );
    }
}
