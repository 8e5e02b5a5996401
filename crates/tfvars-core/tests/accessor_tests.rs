use std::collections::BTreeMap;

use tfvars_core::{
    decode_bytes, get, get_as_list, get_as_map, get_as_string, AccessError, AttributeMap,
    AttributeValue, Shape,
};

fn vars() -> AttributeMap {
    decode_bytes(
        r#"
        aws_region     = "us-east-2"
        aws_account_id = "111111111111"
        number_type    = 2
        float_type     = 2.5
        boolean_type   = true
        disabled       = false
        nothing        = null
        tags = {
          foo = "bar"
        }
        mixed = {
          name    = "web"
          port    = 8080
          enabled = true
        }
        nested = {
          inner = { deep = "x" }
        }
        list         = ["item1"]
        ordered      = ["z", "y", "x"]
        scalars      = ["a", 1, false]
        nested_list  = ["a", ["b"]]
        empty_list   = []
        empty_map    = {}
        "#,
    )
    .unwrap()
}

fn assert_wrong_type(err: AccessError, key: &str, expected: Shape, found: &'static str) {
    assert_eq!(
        err,
        AccessError::WrongType {
            key: key.to_string(),
            expected,
            found,
        }
    );
}

// ============================================================================
// get
// ============================================================================

#[test]
fn get_returns_raw_value() {
    let vars = vars();
    assert_eq!(get(&vars, "number_type").unwrap(), &AttributeValue::Integer(2));
}

#[test]
fn get_missing_key() {
    let err = get(&vars(), "badkey").unwrap_err();
    assert_eq!(
        err,
        AccessError::KeyNotFound {
            key: "badkey".to_string()
        }
    );
    assert_eq!(err.to_string(), "key \"badkey\" not found");
}

// ============================================================================
// get_as_string
// ============================================================================

#[test]
fn string_verbatim() {
    let vars = vars();
    assert_eq!(get_as_string(&vars, "aws_region").unwrap(), "us-east-2");
    // Digits stay a string, including the leading ones.
    assert_eq!(get_as_string(&vars, "aws_account_id").unwrap(), "111111111111");
}

#[test]
fn string_from_booleans() {
    let vars = vars();
    assert_eq!(get_as_string(&vars, "boolean_type").unwrap(), "true");
    assert_eq!(get_as_string(&vars, "disabled").unwrap(), "false");
}

#[test]
fn string_from_numbers() {
    let vars = vars();
    assert_eq!(get_as_string(&vars, "number_type").unwrap(), "2");
    assert_eq!(get_as_string(&vars, "float_type").unwrap(), "2.5");
}

#[test]
fn string_from_map_is_wrong_type() {
    let err = get_as_string(&vars(), "tags").unwrap_err();
    assert_wrong_type(err, "tags", Shape::String, "map");
}

#[test]
fn string_from_list_is_wrong_type() {
    let err = get_as_string(&vars(), "list").unwrap_err();
    assert!(err.is_wrong_type());
    assert_eq!(err.to_string(), "value of \"list\" is a list, expected a string");
}

#[test]
fn string_from_null_is_wrong_type() {
    let err = get_as_string(&vars(), "nothing").unwrap_err();
    assert_wrong_type(err, "nothing", Shape::String, "null");
}

#[test]
fn string_missing_key() {
    assert!(get_as_string(&vars(), "badkey").unwrap_err().is_key_not_found());
}

// ============================================================================
// get_as_map
// ============================================================================

#[test]
fn map_of_strings() {
    let mut expected = BTreeMap::new();
    expected.insert("foo".to_string(), "bar".to_string());
    assert_eq!(get_as_map(&vars(), "tags").unwrap(), expected);
}

#[test]
fn map_coerces_scalar_members() {
    let map = get_as_map(&vars(), "mixed").unwrap();
    assert_eq!(map["name"], "web");
    assert_eq!(map["port"], "8080");
    assert_eq!(map["enabled"], "true");
}

#[test]
fn map_empty() {
    assert!(get_as_map(&vars(), "empty_map").unwrap().is_empty());
}

#[test]
fn map_from_string_is_wrong_type() {
    let err = get_as_map(&vars(), "aws_region").unwrap_err();
    assert_wrong_type(err, "aws_region", Shape::Map, "string");
}

#[test]
fn map_from_list_is_wrong_type() {
    let err = get_as_map(&vars(), "list").unwrap_err();
    assert_wrong_type(err, "list", Shape::Map, "list");
}

#[test]
fn map_with_nested_map_is_not_flattened() {
    let err = get_as_map(&vars(), "nested").unwrap_err();
    assert_wrong_type(err, "nested.inner", Shape::String, "map");
}

#[test]
fn map_missing_key() {
    assert!(get_as_map(&vars(), "badkey").unwrap_err().is_key_not_found());
}

// ============================================================================
// get_as_list
// ============================================================================

#[test]
fn list_of_strings() {
    assert_eq!(get_as_list(&vars(), "list").unwrap(), vec!["item1"]);
}

#[test]
fn list_keeps_source_order() {
    assert_eq!(get_as_list(&vars(), "ordered").unwrap(), vec!["z", "y", "x"]);
}

#[test]
fn list_coerces_scalar_elements() {
    assert_eq!(get_as_list(&vars(), "scalars").unwrap(), vec!["a", "1", "false"]);
}

#[test]
fn list_empty() {
    assert!(get_as_list(&vars(), "empty_list").unwrap().is_empty());
}

#[test]
fn list_from_map_is_wrong_type() {
    let err = get_as_list(&vars(), "tags").unwrap_err();
    assert_wrong_type(err, "tags", Shape::List, "map");
}

#[test]
fn list_from_scalar_is_wrong_type() {
    let err = get_as_list(&vars(), "number_type").unwrap_err();
    assert_wrong_type(err, "number_type", Shape::List, "number");
}

#[test]
fn list_with_nested_list_names_the_element() {
    let err = get_as_list(&vars(), "nested_list").unwrap_err();
    assert_wrong_type(err, "nested_list[1]", Shape::String, "list");
}

#[test]
fn list_missing_key() {
    assert!(get_as_list(&vars(), "badkey").unwrap_err().is_key_not_found());
}
