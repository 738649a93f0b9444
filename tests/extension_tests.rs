//! Integration tests for the extension traits.
//!
//! These tests use the extensions through the prelude, the way downstream
//! code imports them.

#![cfg(feature = "extension")]

use convenient_collections::prelude::*;
use rstest::rstest;
use std::collections::HashMap;

#[rstest]
fn test_prelude_exposes_sequence_helpers() {
    let raw = vec![Some("b"), None, Some("a")];
    let names = raw.compact();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(names.lift(1), Some(&"a"));
    assert_eq!(names.next_after(&"b"), Some(&"a"));
    assert_eq!(names.tail(1), &["a"]);
}

#[rstest]
fn test_vec_removal_helpers() {
    let mut queue = vec!["low", "high", "low"];
    assert_eq!(queue.remove_first_where(|item| *item == "high"), Some("high"));
    assert_eq!(queue.remove_element(&"low"), Some("low"));
    assert_eq!(queue, vec!["low"]);
}

#[rstest]
fn test_optional_map_helpers() {
    let missing: Option<HashMap<String, i32>> = None;
    let filled = Some(HashMap::from([("k".to_string(), 1)]));

    assert!(missing.is_empty_or_none());
    assert!(filled.is_not_empty_nor_none());
    assert!(missing.empty_if_none().is_empty());
}

#[rstest]
#[case::below(-3.5, 0.0)]
#[case::inside(0.25, 0.25)]
#[case::above(7.0, 1.0)]
fn test_unify_on_floats(#[case] value: f64, #[case] expected: f64) {
    assert!((unify(0.0, value, 1.0) - expected).abs() < f64::EPSILON);
}

#[rstest]
fn test_numeric_helpers_on_unsigned_and_optional() {
    assert!(0_u8.is_zero());
    assert!(5_usize.is_greater_than_zero());
    assert!(None::<i32>.is_zero_or_none());
    assert!(Some(-1_i32).is_not_zero_nor_none());
}

#[rstest]
fn test_lazy_first_with_closures() {
    let cache: Option<i32> = None;
    let mut producers: Vec<Box<dyn Fn() -> Option<i32>>> = Vec::new();
    producers.push(Box::new(move || cache));
    producers.push(Box::new(|| Some(7)));
    assert_eq!(lazy_first(producers), Some(7));
}
