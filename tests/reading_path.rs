use rstest::rstest;
use serde_json::{json, Value};
use serde_json_ext::{parse_str, ErrorKind, OptionalExt, PathExt};

fn nested() -> Value {
    parse_str(r#"{"foo":{"bar":{"baz":13}}}"#).unwrap()
}

#[rstest]
fn test_path_reaches_nested_value() {
    let json = nested();
    let baz = json.property_by_path_or_null("foo.bar.baz");
    assert_eq!(baz.and_then(|v| v.i32_or_null()), Some(13));
    assert_eq!(json.property_by_path("foo.bar.baz").unwrap().i32_or_null(), Some(13));
}

#[rstest]
#[case("foo.bar.baa")]
#[case("foo.baz")]
#[case("foo.bar.baz.qux")]
#[case("qux")]
fn test_missing_path(#[case] path: &str) {
    let json = nested();
    assert_eq!(json.property_by_path_or_null(path), None);

    let err = json.property_by_path(path).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PathNotFound);
    assert_eq!(err.target.as_deref(), Some(path));
    assert!(err.to_string().contains(path));
}

#[rstest]
fn test_path_ending_in_empty_object() {
    let json = json!({"a": {"b": {}}});
    assert_eq!(json.property_by_path_or_null("a.b"), Some(&json!({})));
    assert_eq!(json.property_by_path_or_null("a.b.c"), None);
    assert_eq!(json.property_by_path("a.b.c").unwrap_err().kind, ErrorKind::PathNotFound);
}

#[rstest]
fn test_path_through_array_or_scalar_is_absent() {
    let json = json!({"items": [{"id": 1}], "name": "x"});
    assert_eq!(json.property_by_path_or_null("items.id"), None);
    assert_eq!(json.property_by_path_or_null("items.0"), None);
    assert_eq!(json.property_by_path_or_null("name.length"), None);
}

#[rstest]
fn test_null_leaf_is_absent() {
    let json = json!({"a": {"b": null}});
    assert_eq!(json.property_by_path_or_null("a.b"), None);
    assert!(json.property_by_path("a.b").is_err());
}

#[rstest]
fn test_path_is_a_left_fold_of_property_reads() {
    let json = nested();
    let folded = json
        .property_or_null("foo")
        .and_then(|v| v.property_or_null("bar"))
        .and_then(|v| v.property_or_null("baz"));
    assert_eq!(json.property_by_path_or_null("foo.bar.baz"), folded);
}

#[rstest]
#[case("")]
#[case(".")]
#[case("..")]
fn test_path_without_segments_is_the_node_itself(#[case] path: &str) {
    let json = nested();
    assert_eq!(json.property_by_path_or_null(path), Some(&json));
}

#[rstest]
fn test_empty_segments_are_skipped() {
    let json = nested();
    assert_eq!(
        json.property_by_path_or_null(".foo..bar.baz."),
        json.property_by_path_or_null("foo.bar.baz")
    );
}
