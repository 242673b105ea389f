//! Property checks over generated inputs.

use bolero::check;
use dynamic_testhelpers::test;
use dynamic_value::{Kind, Value};

/// Reverses the byte-level string escaping of the canonical text.
fn unescape(text: &str) -> Vec<u8> {
    let inner = &text.as_bytes()[1..text.len() - 1];
    let mut out = Vec::new();
    let mut i = 0;
    while i < inner.len() {
        if inner[i] != b'\\' {
            out.push(inner[i]);
            i += 1;
            continue;
        }
        match inner[i + 1] {
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'n' => out.push(b'\n'),
            b'x' => {
                let hex = std::str::from_utf8(&inner[i + 2..i + 4]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 2;
            }
            other => out.push(other),
        }
        i += 2;
    }
    out
}

#[test]
fn integer_round_trips() {
    check!().with_type::<(i32, u32, i64, u64)>().for_each(|&(a, b, c, d)| {
        assert_eq!(Value::from(a).as_int(), Ok(a));
        assert_eq!(Value::from(b).as_uint(), Ok(b));
        assert_eq!(Value::from(c).as_long(), Ok(c));
        assert_eq!(Value::from(d).as_ulong(), Ok(d));
        assert_eq!(Value::from(c).as_string(false), c.to_string());
        assert_eq!(Value::from(d).as_string(false), d.to_string());
    });
}

#[test]
fn double_and_bool_round_trips() {
    check!().with_type::<(f64, bool)>().for_each(|&(x, flag)| {
        let v = Value::from(x);
        if x.is_nan() {
            assert!(v.as_double().unwrap().is_nan());
        } else {
            assert_eq!(v.as_double(), Ok(x));
        }
        assert_eq!(Value::from(flag).as_bool(), Ok(flag));
        assert_eq!(v.as_bool(), Ok(x != 0.0));
    });
}

#[test]
fn narrowing_matches_as_casts() {
    check!().with_type::<(i64, f64)>().for_each(|&(n, x)| {
        let v = Value::from(n);
        assert_eq!(v.as_int(), Ok(n as i32));
        assert_eq!(v.as_uint(), Ok(n as u32));
        assert_eq!(v.as_ulong(), Ok(n as u64));
        let v = Value::from(x);
        assert_eq!(v.as_long(), Ok(x as i64));
        assert_eq!(v.as_ulong(), Ok(x as u64));
    });
}

#[test]
fn escaped_strings_are_printable_and_reversible() {
    check!().with_type::<String>().for_each(|s: &String| {
        let text = Value::from(s.as_str()).str(false);
        assert!(text.starts_with('"') && text.ends_with('"') && text.len() >= 2);
        assert!(text.bytes().all(|b| (0x20..=0x7E).contains(&b)));
        assert_eq!(unescape(&text), s.as_bytes());
        assert_eq!(Value::from(s.as_str()).as_string(false), *s);
    });
}

#[test]
fn equality_agrees_with_text() {
    check!().with_type::<(i64, u64, String)>().for_each(|(n, u, s)| {
        let values = [
            Value::from(*n),
            Value::from(*u),
            Value::from(s.as_str()),
            Value::from(vec![Value::from(*n), Value::from(s.as_str())]),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a == b, a.str(false) == b.str(false));
                assert_eq!(a.cmp(b), a.str(false).cmp(&b.str(false)));
            }
        }
    });
}

#[test]
fn array_model_matches() {
    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let array = Value::with_kind(Kind::Array);
        let mut model: Vec<u8> = Vec::new();

        for chunk in bytes.chunks(2).take(32) {
            let arg = chunk.get(1).copied().unwrap_or(0);
            match chunk[0] % 4 {
                0 => {
                    array.push_back(u32::from(arg)).unwrap();
                    model.push(arg);
                }
                1 => {
                    let popped = array.pop_back().unwrap();
                    assert_eq!(popped.map(|v| v.as_uint().unwrap()), model.pop().map(u32::from));
                }
                2 => {
                    let index = usize::from(arg) % (model.len() + 1);
                    array.emplace(index, u32::from(arg)).unwrap();
                    model.insert(index, arg);
                }
                _ => {
                    let index = usize::from(arg);
                    if index < model.len() {
                        array.erase_at(index).unwrap();
                        model.remove(index);
                    } else {
                        assert!(array.erase_at(index).is_err());
                    }
                }
            }
            assert_eq!(array.size(), Ok(model.len()));
        }

        let items: Vec<u8> = array
            .iter()
            .unwrap()
            .map(|e| e.value.as_uint().unwrap() as u8)
            .collect();
        assert_eq!(items, model);
    });
}

#[test]
fn deep_copy_equals_original() {
    check!().with_type::<Vec<(String, i32)>>().for_each(|entries| {
        let map = Value::from_entries(entries.iter().map(|(k, v)| (k.as_str(), *v)));
        let copy = map.deep_copy();
        assert_eq!(copy, map);
        assert!(!copy.shares_storage_with(&map));
    });
}
