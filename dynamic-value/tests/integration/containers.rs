//! Indexing, bounds and container mutation.

use dynamic_testhelpers::{IPanic, test};
use dynamic_value::{Error, ErrorKind, Kind, Value, dynamic};

#[test]
fn mutable_index_vivifies_but_at_does_not() -> Result<(), IPanic> {
    let d = Value::new();
    assert_eq!(
        d.at("missing"),
        Err(Error::MissingKey {
            key: r#""missing""#.into()
        })
    );
    assert_eq!(d.size()?, 0);

    let created = d.entry("missing")?;
    assert_eq!(created.kind(), Kind::Map);
    assert_eq!(d.size()?, 1);
    assert!(d.has("missing")?);
    assert_eq!(d.str(false), r#"{"missing": {}}"#);
    Ok(())
}

#[test]
fn array_index_bounds() -> Result<(), IPanic> {
    let n = 4;
    let d = Value::with_kind(Kind::Array);
    for i in 0..n {
        d.push_back(i)?;
    }
    assert_eq!(d.at(n - 1)?.as_int()?, n - 1);
    assert_eq!(d.at(n).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(d.at(n + 1).unwrap_err().kind(), ErrorKind::OutOfRange);
    // mutable indexing does not extend arrays either
    assert_eq!(d.entry(n).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(d.size()?, 4);
    Ok(())
}

#[test]
fn array_keys_are_coerced() -> Result<(), IPanic> {
    let d = dynamic!(["zero", "one", "two"]);
    assert_eq!(d.at(1u64)?.as_string(false), "one");
    assert_eq!(d.at(2.9)?.as_string(false), "two");
    assert_eq!(d.at(true)?.as_string(false), "one");
    assert_eq!(d.at(())?.as_string(false), "zero");
    assert_eq!(d.at("1").unwrap_err().kind(), ErrorKind::TypeMismatch);
    Ok(())
}

#[test]
fn operations_reject_wrong_kinds() {
    let s = Value::from("text");
    assert_eq!(s.push_back(1).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(s.has("t").unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(s.erase("t").unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(s.front().unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(s.clear().unwrap_err().kind(), ErrorKind::TypeMismatch);

    let n = Value::from(1.5);
    assert_eq!(
        n.size(),
        Err(Error::TypeMismatch {
            operation: "size",
            actual: Kind::Double,
            expected: &[Kind::String, Kind::Array, Kind::Map],
        })
    );
    assert_eq!(n.as_double(), Ok(1.5));
}

#[test]
fn emplace_and_erase_positions() -> Result<(), IPanic> {
    let d = dynamic!([1, 3]);
    d.emplace(1, 2)?;
    d.emplace(0, 0)?;
    assert_eq!(d.str(false), "[0, 1, 2, 3]");
    assert_eq!(d.erase_at(0)?.as_int()?, 0);
    assert_eq!(d.erase_at(3).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(d.front()?.as_int()?, 1);
    assert_eq!(d.back()?.as_int()?, 3);
    Ok(())
}

#[test]
fn map_erase_and_has() -> Result<(), IPanic> {
    let d = dynamic!({"key": "value", 1: 1.25, true: false});
    assert!(d.has(1)?);
    assert!(!d.has("1")?);
    assert!(d.erase(1)?.is_some());
    assert!(d.erase(1)?.is_none());
    assert_eq!(d.str(false), r#"{"key": "value", true: false}"#);
    d.clear()?;
    assert!(d.is_empty()?);
    Ok(())
}

#[test]
fn string_sizing() -> Result<(), IPanic> {
    let s = Value::from("abc");
    assert_eq!(s.size()?, 3);
    s.reserve(64)?;
    assert!(s.capacity()? >= 67);
    s.resize(5)?;
    assert_eq!(s.str(false), r#""abc\x00\x00""#);
    s.resize(2)?;
    s.shrink_to_fit()?;
    assert_eq!(s.as_string(false), "ab");
    assert!(s.max_size()? >= s.size()?);
    Ok(())
}

#[test]
fn assign_replaces_contents() -> Result<(), IPanic> {
    let d = dynamic!([1, 2, 3]);
    d.assign_iter(["a", "b"])?;
    assert_eq!(d.str(false), r#"["a", "b"]"#);
    d.assign_repeat(2, Value::null())?;
    assert_eq!(d.str(false), "[null, null]");
    d.front()?.set(0);
    assert_eq!(d.str(false), "[0, 0]");
    Ok(())
}

#[test]
fn failed_operations_leave_value_untouched() {
    let d = dynamic!([1, 2]);
    assert!(d.emplace(5, 0).is_err());
    assert!(d.erase("x").is_err());
    assert!(d.at(2).is_err());
    assert!(Value::from("é").resize(1).is_err());
    assert_eq!(d.str(false), "[1, 2]");
}
