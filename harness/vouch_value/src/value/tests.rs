use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_truthy() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::int(1).is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(!Value::float(0.0).is_truthy());
    assert!(!Value::float(f64::NAN).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("x").is_truthy());
    assert!(!Value::Null.is_truthy());
    // Empty composites are still truthy.
    assert!(Value::list(vec![]).is_truthy());
    assert!(Value::map(Fields::new()).is_truthy());
}

#[test]
fn test_value_stringify() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::float(1.5).to_string(), "1.5");
    assert_eq!(Value::float(2.0).to_string(), "2");
    assert_eq!(Value::float(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::string("hello").to_string(), "hello");
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
    assert_eq!(
        Value::list(vec![Value::int(1), Value::Null, Value::int(3)]).to_string(),
        "1,,3"
    );
}

#[test]
fn test_value_render() {
    assert_eq!(Value::string("hi").render().to_string(), "\"hi\"");
    assert_eq!(Value::float(2.0).render().to_string(), "2.0");
    assert_eq!(Value::from(vec![1, 2]).render().to_string(), "[1, 2]");
    assert_eq!(
        Value::map_from([("b", 2), ("a", 1)]).render().to_string(),
        "{a: 1, b: 2}"
    );
    assert_eq!(
        Value::record("Point", [("x", 0)]).render().to_string(),
        "Point {x: 0}"
    );
}

#[test]
fn test_identity_of_primitives() {
    assert!(Value::int(5).is_identical(&Value::int(5)));
    assert!(!Value::int(5).is_identical(&Value::int(6)));
    assert!(Value::string("a").is_identical(&Value::string("a")));
    // No coercion between numeric representations.
    assert!(!Value::int(1).is_identical(&Value::float(1.0)));
    assert!(!Value::float(f64::NAN).is_identical(&Value::float(f64::NAN)));
    assert!(Value::float(0.0).is_identical(&Value::float(-0.0)));
}

#[test]
fn test_identity_of_composites() {
    let list = Value::from(vec![1, 2]);
    let alias = list.clone();
    let copy = Value::from(vec![1, 2]);

    assert!(list.is_identical(&alias));
    assert!(!list.is_identical(&copy));
}

#[test]
fn test_kind_classification() {
    assert_eq!(Value::int(1).kind(), Kind::Int);
    assert_eq!(Value::from("s").kind(), Kind::Str);
    assert_eq!(Value::from(vec![1]).kind(), Kind::List);

    let point = Value::record("Point", [("x", 1)]);
    assert_eq!(point.kind(), Kind::record("Point"));
    assert!(point.is_instance_of(&Kind::Map));
    assert!(point.is_instance_of(&Kind::record("Point")));
    assert!(!point.is_instance_of(&Kind::record("Line")));
    assert!(!Value::map(Fields::new()).is_instance_of(&Kind::record("Point")));
}

#[test]
fn test_contains() {
    let text = Value::from("hello world");
    assert_eq!(text.contains(&Value::from("world")), Some(true));
    assert_eq!(text.contains(&Value::from("moon")), Some(false));
    assert_eq!(text.contains(&Value::int(1)), Some(false));
    assert_eq!(Value::from("a1").contains(&Value::int(1)), Some(true));
    assert_eq!(Value::from("is true").contains(&Value::from(true)), Some(true));

    let list = Value::from(vec![1, 2, 3]);
    assert_eq!(list.contains(&Value::int(2)), Some(true));
    assert_eq!(list.contains(&Value::int(4)), Some(false));

    assert_eq!(Value::int(3).contains(&Value::int(3)), None);
}

#[test]
fn test_field_lookup() {
    let map = Value::map_from([("a", 1)]);
    assert_eq!(map.get("a").and_then(Value::as_int), Some(1));
    assert!(map.get("b").is_none());
    assert!(Value::int(1).get("a").is_none());
}

#[test]
fn test_conversions() {
    assert!(Value::from(None::<i32>).is_null());
    assert_eq!(Value::from(Some(3)).as_int(), Some(3));
    assert_eq!(Value::from('c').as_str(), Some("c"));
    assert_eq!(
        Value::from((1, "two")).render().to_string(),
        "[1, \"two\"]"
    );
    assert_eq!(Value::from([[1, 2], [4, 5]]).to_string(), "1,2,4,5");
}

#[test]
fn test_wide_integers_are_lossless() {
    assert_eq!(Value::from(u64::MAX).as_int(), Some(i128::from(u64::MAX)));
    assert_eq!(Value::from(usize::MAX).to_string(), usize::MAX.to_string());
    assert_eq!(Value::from(isize::MIN).to_string(), isize::MIN.to_string());
    assert!(!Value::from(u64::MAX).is_identical(&Value::from(u64::MAX - 1)));
    assert!(!Value::from(u64::MAX).is_identical(&Value::from(i64::MAX)));
    assert!(Value::from(7_u64).is_identical(&Value::int(7)));
}
