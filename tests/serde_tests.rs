//! Integration tests for serde support in convenient-collections.
//!
//! These tests verify that OrderedSet serializes as a plain sequence in
//! insertion order and deserializes through duplicate-dropping construction.

#![cfg(all(feature = "collection", feature = "serde"))]

use convenient_collections::collection::OrderedSet;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Playlist {
    name: String,
    tracks: OrderedSet<String>,
}

#[rstest]
fn test_serialize_empty() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_serialize_is_plain_sequence_in_insertion_order() {
    let set = OrderedSet::from_vec(vec![3, 1, 2, 1]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[3,1,2]");

    let as_vec: Vec<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(as_vec, set.contents());
}

#[rstest]
fn test_deserialize_keeps_first_occurrence() {
    let set: OrderedSet<String> = serde_json::from_str(r#"["b","a","b","c","a"]"#).unwrap();
    assert_eq!(
        set.contents(),
        vec!["b".to_string(), "a".to_string(), "c".to_string()]
    );
}

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![42])]
#[case::many((0..500).rev().collect())]
fn test_roundtrip_preserves_contents(#[case] elements: Vec<i32>) {
    let original = OrderedSet::from_vec(elements);
    let json = serde_json::to_string(&original).unwrap();
    let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.contents(), original.contents());
    assert_eq!(restored, original);
}

#[rstest]
#[case::wrong_element_type(r#"[1,"two",3]"#)]
#[case::not_a_sequence(r#"{"a":1}"#)]
#[case::truncated("[1,2")]
fn test_malformed_input_propagates_error(#[case] json: &str) {
    let result: Result<OrderedSet<i32>, serde_json::Error> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_in_derived_struct() {
    let playlist = Playlist {
        name: "morning".to_string(),
        tracks: ["intro", "theme", "intro"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    let json = serde_json::to_string(&playlist).unwrap();
    assert_eq!(json, r#"{"name":"morning","tracks":["intro","theme"]}"#);

    let restored: Playlist = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, playlist);
}

#[rstest]
fn test_nested_ordered_sets() {
    let outer: OrderedSet<OrderedSet<u8>> = vec![
        OrderedSet::from_vec(vec![1, 2]),
        OrderedSet::from_vec(vec![2, 1]),
        OrderedSet::from_vec(vec![1, 1, 2]),
    ]
    .into_iter()
    .collect();
    assert_eq!(outer.len(), 2);

    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[2,1]]");
    let restored: OrderedSet<OrderedSet<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, outer);
}
