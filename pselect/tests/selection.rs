use pselect::{OptionValue, SelectOption, SelectValue, SelectedValues, toggle};
use pselect::selection::summary;

fn alice() -> SelectOption {
    SelectOption::new(1, "Alice")
}

fn bob() -> SelectOption {
    SelectOption::new(2, "Bob")
}

fn carol() -> SelectOption {
    SelectOption::new(3, "Carol")
}

fn labels(value: &SelectValue) -> Vec<&str> {
    value.options().iter().map(|o| o.label()).collect()
}

// ============================================================================
// Option equality
// ============================================================================

#[test]
fn test_option_equality_is_by_value() {
    assert_eq!(SelectOption::new(1, "Alice"), SelectOption::new(1, "Someone else"));
    assert_ne!(SelectOption::new(1, "Alice"), SelectOption::new(2, "Alice"));
    assert_ne!(SelectOption::new(1, "One"), SelectOption::new("1", "One"));
}

#[test]
fn test_option_value_display() {
    assert_eq!(OptionValue::from(42).to_string(), "42");
    assert_eq!(OptionValue::from("a-b").to_string(), "a-b");
}

#[test]
fn test_option_value_json_is_untagged() {
    let number: OptionValue = serde_json::from_str("7").unwrap();
    let text: OptionValue = serde_json::from_str("\"7\"").unwrap();
    assert_eq!(number, OptionValue::Number(7));
    assert_eq!(text, OptionValue::Text("7".into()));

    let option: SelectOption = serde_json::from_str(r#"{"value": 3, "label": "Carol"}"#).unwrap();
    assert_eq!(option.value(), &OptionValue::Number(3));
    assert_eq!(option.label(), "Carol");
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_single_select_emits_item_regardless_of_prior_value() {
    let prior = [
        None,
        Some(SelectValue::Single(alice())),
        Some(SelectValue::Single(bob())),
        Some(SelectValue::Multiple(vec![alice(), bob()])),
    ];
    for value in &prior {
        let next = toggle(value.as_ref(), &bob(), false);
        assert_eq!(next, SelectValue::Single(bob()));
        assert_eq!(labels(&next), ["Bob"]);
    }
}

#[test]
fn test_multi_select_scenario() {
    let start = SelectValue::Multiple(vec![]);

    let after_bob = toggle(Some(&start), &bob(), true);
    assert_eq!(labels(&after_bob), ["Bob"]);

    let after_carol = toggle(Some(&after_bob), &carol(), true);
    assert_eq!(labels(&after_carol), ["Bob", "Carol"]);

    let after_bob_again = toggle(Some(&after_carol), &bob(), true);
    assert_eq!(labels(&after_bob_again), ["Carol"]);
}

#[test]
fn test_multi_select_toggle_is_its_own_inverse() {
    let start = SelectValue::Multiple(vec![alice(), carol()]);

    // Unselected item: added then removed, order untouched
    let once = toggle(Some(&start), &bob(), true);
    assert_eq!(labels(&once), ["Alice", "Carol", "Bob"]);
    let twice = toggle(Some(&once), &bob(), true);
    assert_eq!(labels(&twice), labels(&start));

    // Selected item: removed then re-appended, same contents
    let once = toggle(Some(&start), &alice(), true);
    assert_eq!(labels(&once), ["Carol"]);
    let twice = toggle(Some(&once), &alice(), true);
    let mut contents = labels(&twice);
    contents.sort();
    assert_eq!(contents, ["Alice", "Carol"]);
}

#[test]
fn test_multi_select_removal_matches_value_not_label() {
    let start = SelectValue::Multiple(vec![SelectOption::new(2, "Robert")]);
    let next = toggle(Some(&start), &bob(), true);
    assert_eq!(next, SelectValue::Multiple(vec![]));
}

#[test]
fn test_multi_select_removes_only_first_duplicate() {
    let start = SelectValue::Multiple(vec![bob(), carol(), bob()]);
    let next = toggle(Some(&start), &bob(), true);
    assert_eq!(labels(&next), ["Carol", "Bob"]);
}

#[test]
fn test_multi_select_with_non_sequence_value_starts_empty() {
    let next = toggle(None, &alice(), true);
    assert_eq!(labels(&next), ["Alice"]);

    let single = SelectValue::Single(carol());
    let next = toggle(Some(&single), &alice(), true);
    assert_eq!(next, SelectValue::Multiple(vec![alice()]));
}

// ============================================================================
// Summary and membership
// ============================================================================

#[test]
fn test_summary_counts_multiple() {
    for n in [0usize, 1, 7, 120] {
        let options = (0..n as i64).map(|i| SelectOption::new(i, "x")).collect();
        assert_eq!(SelectValue::Multiple(options).summary(), format!("{} selected", n));
    }
}

#[test]
fn test_summary_single_and_absent() {
    assert_eq!(summary(Some(&SelectValue::Single(carol()))), "Carol");
    assert_eq!(summary(None), "");
}

#[test]
fn test_selected_values_membership() {
    let value = SelectValue::Multiple(vec![alice(), carol()]);
    let selected = SelectedValues::from_value(Some(&value));
    assert!(selected.contains(alice().value()));
    assert!(!selected.contains(bob().value()));

    assert!(SelectedValues::from_value(None).is_empty());
    let single = SelectedValues::from_value(Some(&SelectValue::Single(bob())));
    assert!(single.contains(&OptionValue::Number(2)));
}
