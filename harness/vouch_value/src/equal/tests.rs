use super::*;
use proptest::prelude::*;

fn list(items: &[i64]) -> Value {
    Value::from(items.to_vec())
}

#[test]
fn test_sequences() {
    assert!(equal(&list(&[1, 2, 3]), &list(&[1, 2, 3])));
    assert!(!equal(&list(&[1, 2]), &list(&[1, 2, 3])));
    assert!(!equal(&list(&[1, 2, 3]), &list(&[1, 2])));
    assert!(!equal(&list(&[1, 2, 3]), &list(&[3, 2, 1])));
    assert!(equal(&list(&[]), &list(&[])));
}

#[test]
fn test_mappings() {
    let ab = Value::map_from([("a", 1), ("b", 2)]);
    let ba = Value::map_from([("b", 2), ("a", 1)]);
    let a = Value::map_from([("a", 1)]);

    assert!(equal(&ab, &ba));
    assert!(!equal(&a, &ab));
    assert!(!equal(&ab, &a));
}

#[test]
fn test_null_only_equals_null() {
    assert!(equal(&Value::Null, &Value::Null));
    assert!(!equal(&Value::Null, &Value::int(0)));
    assert!(!equal(&Value::list(vec![]), &Value::Null));
}

#[test]
fn test_null_field_differs_from_absent_field() {
    let with_null = Value::map_from([("a", Value::Null)]);
    let empty = Value::map(Fields::new());
    assert!(!equal(&with_null, &empty));
}

#[test]
fn test_sequence_never_equals_mapping() {
    let seq = list(&[1]);
    let map = Value::map_from([("0", 1)]);
    assert!(!equal(&seq, &map));
    assert!(!equal(&map, &seq));
    assert!(!equal(&seq, &Value::int(1)));
}

#[test]
fn test_records_compare_as_mappings() {
    let point = Value::record("Point", [("x", 1)]);
    let vector = Value::record("Vector", [("x", 1)]);
    let plain = Value::map_from([("x", 1)]);
    assert!(equal(&point, &vector));
    assert!(equal(&point, &plain));
}

#[test]
fn test_primitive_strictness() {
    assert!(!equal(&Value::int(1), &Value::float(1.0)));
    assert!(!equal(&Value::int(1), &Value::string("1")));
    assert!(!equal(&Value::float(f64::NAN), &Value::float(f64::NAN)));
    assert!(equal(&Value::float(0.0), &Value::float(-0.0)));
}

#[test]
fn test_nested() {
    let a = Value::map_from([("xs", list(&[1, 2])), ("name", Value::from("n"))]);
    let b = Value::map_from([("name", Value::from("n")), ("xs", list(&[1, 2]))]);
    let c = Value::map_from([("name", Value::from("n")), ("xs", list(&[1, 3]))]);
    assert!(equal(&a, &b));
    assert!(!equal(&a, &c));
}

#[test]
fn test_deeply_nested_lists() {
    let mut a = Value::Null;
    let mut b = Value::Null;
    for _ in 0..2_000 {
        a = Value::list(vec![a]);
        b = Value::list(vec![b]);
    }
    assert!(equal(&a, &b));
}

// Property tests

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::Float),
        "[a-z]{0,4}".prop_map(Value::string),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::btree_map("[a-c]", inner, 0..4).prop_map(Value::map),
        ]
    })
}

/// Rebuild a value from scratch so that no storage is shared.
fn deep_copy(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::list(items.iter().map(deep_copy).collect()),
        Value::Map(fields) => Value::map(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), deep_copy(v)))
                .collect(),
        ),
        Value::Record(record) => Value::record(
            record.type_name(),
            record.fields().iter().map(|(k, v)| (k.clone(), deep_copy(v))),
        ),
        other => other.clone(),
    }
}

fn contains_nan(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_nan(),
        Value::List(items) => items.iter().any(contains_nan),
        Value::Map(fields) => fields.values().any(contains_nan),
        Value::Record(record) => record.fields().values().any(contains_nan),
        _ => false,
    }
}

proptest! {
    #[test]
    fn prop_equal_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(equal(&a, &b), equal(&b, &a));
    }

    #[test]
    fn prop_equal_is_reflexive_on_copies(a in arb_value()) {
        prop_assume!(!contains_nan(&a));
        prop_assert!(equal(&a, &deep_copy(&a)));
    }
}
