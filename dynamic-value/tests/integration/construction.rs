//! Construction, assignment, coercion and the sharing contract.

use dynamic_testhelpers::{IPanic, test};
use dynamic_value::{Error, ErrorKind, Kind, Value};

#[test]
fn default_value_is_an_empty_map() {
    let d = Value::default();
    assert_eq!(d.kind(), Kind::Map);
    assert_eq!(d.str(false), "{}");
}

#[test]
fn scalar_round_trips() -> Result<(), IPanic> {
    let d = Value::from(i32::MAX);
    assert_eq!(d.kind(), Kind::Int);
    assert_eq!(d.as_int()?, i32::MAX);

    let d = Value::from(u32::MAX);
    assert_eq!(d.kind(), Kind::UInt);
    assert_eq!(d.as_uint()?, u32::MAX);

    let d = Value::from(i64::MAX);
    assert_eq!(d.kind(), Kind::Long);
    assert_eq!(d.as_long()?, i64::MAX);

    let d = Value::from(u64::MAX);
    assert_eq!(d.kind(), Kind::ULong);
    assert_eq!(d.as_ulong()?, u64::MAX);

    let d = Value::from(f64::MAX);
    assert_eq!(d.kind(), Kind::Double);
    assert_eq!(d.as_double()?, f64::MAX);

    let d = Value::from(true);
    assert_eq!(d.kind(), Kind::Bool);
    assert!(d.as_bool()?);

    let d = Value::from(String::from("A string"));
    assert_eq!(d.kind(), Kind::String);
    assert_eq!(d.as_string(false), "A string");

    let d = Value::from(());
    assert_eq!(d.kind(), Kind::Null);
    Ok(())
}

#[test]
fn assignment_retypes() -> Result<(), IPanic> {
    let d = Value::new();
    d.set(i64::MAX);
    assert_eq!(d.kind(), Kind::Long);
    assert_eq!(d.as_long()?, i64::MAX);
    d.set("A string");
    assert_eq!(d.kind(), Kind::String);
    d.set_null();
    assert!(d.is_null());
    d.set(vec![1, 2, 3]);
    assert_eq!(d.kind(), Kind::Array);
    assert_eq!(d.size()?, 3);
    Ok(())
}

#[test]
fn explicit_conversions() {
    let d = Value::from(u64::MAX);
    assert_eq!(u64::try_from(&d), Ok(u64::MAX));
    let d = Value::from("A string");
    assert_eq!(String::from(&d), "A string");
    assert_eq!(
        i32::try_from(&d),
        Err(Error::TypeMismatch {
            operation: "as_int",
            actual: Kind::String,
            expected: &[Kind::Int],
        })
    );
}

#[test]
fn containers_have_no_numeric_view() {
    let d = Value::null();
    for kind in [Kind::String, Kind::Array, Kind::Map] {
        d.set_kind(kind);
        for result in [
            d.as_int().map(drop),
            d.as_uint().map(drop),
            d.as_long().map(drop),
            d.as_ulong().map(drop),
            d.as_double().map(drop),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::TypeMismatch);
        }
        assert!(d.as_bool().is_ok());
    }
}

#[test]
fn bool_is_never_one() {
    assert_ne!(Value::from(true), Value::from(1));
    assert_eq!(Value::from(true).as_int(), Ok(1));
}

#[test]
fn clone_shares_and_deep_copy_does_not() -> Result<(), IPanic> {
    let original = Value::new();
    original.entry("list")?.set(vec![1, 2]);

    let shared = original.clone();
    let copy = original.deep_copy();
    assert_eq!(copy, original);

    shared.entry("list")?.push_back(3)?;
    assert_eq!(original.str(false), r#"{"list": [1, 2, 3]}"#);
    assert_eq!(copy.str(false), r#"{"list": [1, 2]}"#);

    copy.entry("extra")?.set(true);
    assert!(!original.has("extra")?);
    Ok(())
}

#[test]
fn set_kind_resets_even_to_same_kind() -> Result<(), IPanic> {
    let d = Value::from_entries([("a", 1)]);
    d.set_kind(Kind::Map);
    assert_eq!(d.size()?, 0);
    d.set_kind(Kind::Bool);
    assert!(!d.as_bool()?);
    Ok(())
}

#[test]
fn nested_handles_outlive_their_parent() -> Result<(), IPanic> {
    let inner = {
        let parent = Value::from_entries([("inner", vec!["kept"])]);
        parent.at("inner")?
    };
    assert_eq!(inner.handle_count(), 1);
    assert_eq!(inner.str(false), r#"["kept"]"#);
    Ok(())
}
