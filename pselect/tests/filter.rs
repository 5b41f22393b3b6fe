use std::sync::Arc;

use pselect::{FilteredList, SelectOption, filter_options};

fn people() -> Vec<SelectOption> {
    vec![
        SelectOption::new(1, "Alice"),
        SelectOption::new(2, "Bob"),
        SelectOption::new(3, "Carol"),
    ]
}

fn labels(options: &[SelectOption], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|&i| options[i].label().to_string())
        .collect()
}

// ============================================================================
// filter_options
// ============================================================================

#[test]
fn test_empty_query_is_identity() {
    let options = people();
    assert_eq!(filter_options(&options, ""), vec![0, 1, 2]);
}

#[test]
fn test_substring_match_ignores_case() {
    let options = people();
    assert_eq!(labels(&options, &filter_options(&options, "car")), ["Carol"]);
    assert_eq!(labels(&options, &filter_options(&options, "CAR")), ["Carol"]);
    assert_eq!(labels(&options, &filter_options(&options, "o")), ["Bob", "Carol"]);
}

#[test]
fn test_match_is_on_label_not_value() {
    let options = vec![
        SelectOption::new("alpha", "Zed"),
        SelectOption::new("beta", "Alphonse"),
    ];
    assert_eq!(labels(&options, &filter_options(&options, "alph")), ["Alphonse"]);
}

#[test]
fn test_no_match_is_empty() {
    let options = people();
    assert!(filter_options(&options, "xyz").is_empty());
}

#[test]
fn test_unicode_case_folding() {
    let options = vec![
        SelectOption::new(1, "Ölund"),
        SelectOption::new(2, "García"),
        SelectOption::new(3, "Olsen"),
    ];
    assert_eq!(labels(&options, &filter_options(&options, "öl")), ["Ölund"]);
    assert_eq!(labels(&options, &filter_options(&options, "CÍA")), ["García"]);
}

#[test]
fn test_filter_matches_lowercase_contains_for_every_option() {
    let options: Vec<SelectOption> = (0..500)
        .map(|i| SelectOption::new(i, format!("Person {} {}", i, ["Ann", "bEn", "CLIO"][i as usize % 3])))
        .collect();

    for query in ["ann", "BEN", "clio", "1", "person 4", "zz"] {
        let expected: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.label().to_lowercase().contains(&query.to_lowercase()))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(filter_options(&options, query), expected, "query {:?}", query);
    }
}

#[test]
fn test_duplicate_labels_all_kept() {
    let options = vec![
        SelectOption::new(1, "Sam"),
        SelectOption::new(2, "Sam"),
        SelectOption::new(3, "Kim"),
    ];
    assert_eq!(filter_options(&options, "sam"), vec![0, 1]);
}

// ============================================================================
// FilteredList memo
// ============================================================================

#[test]
fn test_filtered_list_recomputes_only_on_change() {
    let options: Arc<[SelectOption]> = people().into();
    let mut list = FilteredList::new();

    assert!(list.update(&options, ""));
    assert_eq!(list.len(), 3);
    assert!(!list.update(&options, ""));

    assert!(list.update(&options, "car"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).map(|o| o.label()), Some("Carol"));
    assert!(!list.update(&options, "car"));
}

#[test]
fn test_filtered_list_recomputes_for_new_options() {
    let first: Arc<[SelectOption]> = people().into();
    let second: Arc<[SelectOption]> = vec![SelectOption::new(9, "Caroline")].into();
    let mut list = FilteredList::new();

    list.update(&first, "car");
    assert_eq!(list.len(), 1);

    assert!(list.update(&second, "car"));
    assert_eq!(list.get(0).map(|o| o.label()), Some("Caroline"));
}

#[test]
fn test_filtered_list_clearing_query_restores_all() {
    let options: Arc<[SelectOption]> = people().into();
    let mut list = FilteredList::new();
    list.update(&options, "bob");
    assert_eq!(list.len(), 1);

    list.update(&options, "");
    let all: Vec<&str> = list.iter().map(|o| o.label()).collect();
    assert_eq!(all, ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_filtered_list_get_out_of_range() {
    let options: Arc<[SelectOption]> = people().into();
    let mut list = FilteredList::new();
    assert!(list.get(0).is_none());
    list.update(&options, "");
    assert!(list.get(3).is_none());
}
