use jsonmatch::{
    compare_with, CompareMode, CustomComparator, Customization, RegexMatcher, ValueMatcher,
};
use serde_json::{json, Value};

fn accept_all(_: &Value, _: &Value) -> bool {
    true
}

fn reject_all(_: &Value, _: &Value) -> bool {
    false
}

#[test]
fn regex_override_replaces_default_equality() {
    let comparator = CustomComparator::new(CompareMode::STRICT).with(
        Customization::new("entry.id", RegexMatcher::new(r"\d").expect("valid regex"))
            .expect("valid pattern"),
    );
    // "x" != "1" under default equality; the matcher's verdict wins.
    assert!(compare_with(
        &json!({"entry": {"id": "x"}}),
        &json!({"entry": {"id": "1"}}),
        &comparator
    )
    .passed());
    assert!(compare_with(
        &json!({"entry": {"id": "x"}}),
        &json!({"entry": {"id": "as"}}),
        &comparator
    )
    .failed());
}

#[test]
fn override_can_reject_values_default_equality_accepts() {
    let comparator = CustomComparator::new(CompareMode::STRICT)
        .with(Customization::new("id", reject_all).expect("valid pattern"));
    let result = compare_with(&json!({"id": 1}), &json!({"id": 1}), &comparator);
    assert!(result.failed());
    assert_eq!(result.message(), "id: expected 1 but got 1");
}

#[test]
fn wildcard_index_applies_to_every_element() {
    let comparator = CustomComparator::new(CompareMode::LENIENT)
        .with(Customization::new("friends[*].pets", accept_all).expect("valid pattern"));
    let expected = json!({"friends": [
        {"id": 2, "pets": ["dog"]},
        {"id": 3, "pets": ["bird"]}
    ]});
    let actual = json!({"friends": [
        {"id": 3, "pets": ["hamster"]},
        {"id": 2, "pets": []}
    ]});
    assert!(compare_with(&expected, &actual, &comparator).passed());
}

#[test]
fn first_registered_customization_wins() {
    let comparator = CustomComparator::new(CompareMode::STRICT)
        .with(Customization::new("id", reject_all).expect("valid pattern"))
        .with(Customization::new("id", accept_all).expect("valid pattern"));
    assert!(compare_with(&json!({"id": 1}), &json!({"id": 1}), &comparator).failed());
}

#[test]
fn a_pattern_may_address_a_composite_wholesale() {
    let comparator = CustomComparator::new(CompareMode::STRICT)
        .with(Customization::new("payload", accept_all).expect("valid pattern"));
    // The override swallows the whole subtree it names...
    assert!(compare_with(
        &json!({"payload": {"a": 1}, "id": 7}),
        &json!({"payload": [1, 2, 3], "id": 7}),
        &comparator
    )
    .passed());
    // ...but has no effect on paths it does not name.
    assert!(compare_with(
        &json!({"payload": {"a": 1}, "id": 7}),
        &json!({"payload": [1, 2, 3], "id": 8}),
        &comparator
    )
    .failed());
}

#[test]
fn overrides_apply_inside_ordered_arrays() {
    let comparator = CustomComparator::new(CompareMode::STRICT)
        .with(Customization::new("codes[1]", accept_all).expect("valid pattern"));
    assert!(compare_with(
        &json!({"codes": [1, 2, 3]}),
        &json!({"codes": [1, 99, 3]}),
        &comparator
    )
    .passed());
}

#[test]
fn comparators_are_shareable_across_threads() {
    let comparator = std::sync::Arc::new(CustomComparator::new(CompareMode::LENIENT).with(
        Customization::new("id", RegexMatcher::new(r"\d+").expect("valid regex"))
            .expect("valid pattern"),
    ));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let comparator = std::sync::Arc::clone(&comparator);
            std::thread::spawn(move || {
                let expected = json!({"id": "x"});
                let actual = json!({"id": worker.to_string()});
                compare_with(&expected, &actual, &*comparator).passed()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("worker finished"));
    }
}

#[test]
fn closures_and_trait_objects_are_interchangeable() {
    struct WithinOne;
    impl ValueMatcher for WithinOne {
        fn matches(&self, expected: &Value, actual: &Value) -> bool {
            match (expected.as_f64(), actual.as_f64()) {
                (Some(expected), Some(actual)) => (expected - actual).abs() <= 1.0,
                _ => false,
            }
        }
    }
    let comparator = CustomComparator::new(CompareMode::STRICT)
        .with(Customization::new("reading", WithinOne).expect("valid pattern"));
    assert!(compare_with(&json!({"reading": 10}), &json!({"reading": 10.4}), &comparator).passed());
    assert!(compare_with(&json!({"reading": 10}), &json!({"reading": 12}), &comparator).failed());
}
