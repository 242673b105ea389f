//! Canonical text form.
//!
//! The text produced here is what values are compared, ordered and hashed
//! by, so it must stay byte-for-byte stable:
//!
//! - doubles render like C's `%g` (six significant digits)
//! - strings are quoted with byte-level escaping; anything outside printable
//!   ASCII becomes `\xHH`
//! - arrays are `[a, b]` on one line
//! - maps are `{k: v}`, or one entry per line with four-space indentation
//!   when pretty-printing

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Display, Formatter, Write};

use crate::storage::Storage;
use crate::Value;

const INDENT: &str = "    ";

impl Value {
    /// Renders the canonical text, multi-line for maps when `pretty` is set.
    ///
    /// ```
    /// use dynamic_value::Value;
    ///
    /// let v = Value::from_entries([("key", "value")]);
    /// assert_eq!(v.str(false), r#"{"key": "value"}"#);
    /// assert_eq!(v.str(true), "{\n    \"key\": \"value\"\n}");
    /// ```
    #[must_use]
    pub fn str(&self, pretty: bool) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out, pretty, 0)
            .expect("a Display implementation returned an error unexpectedly");
        out
    }

    /// Writes the compact canonical text followed by a newline.
    pub fn write_line<W: std::io::Write + ?Sized>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{self}")
    }

    /// Writes the canonical text with `indent` levels of enclosing maps.
    pub(crate) fn write_canonical<W: Write + ?Sized>(
        &self,
        out: &mut W,
        pretty: bool,
        indent: usize,
    ) -> fmt::Result {
        match &*self.storage() {
            Storage::Null => out.write_str("null"),
            Storage::Int(v) => write!(out, "{v}"),
            Storage::UInt(v) => write!(out, "{v}"),
            Storage::Long(v) => write!(out, "{v}"),
            Storage::ULong(v) => write!(out, "{v}"),
            Storage::Double(v) => write_double(out, *v),
            Storage::Bool(v) => out.write_str(if *v { "true" } else { "false" }),
            Storage::String(s) => write_escaped(out, s),
            Storage::Array(items) => {
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    item.write_canonical(out, pretty, indent)?;
                }
                out.write_char(']')
            }
            Storage::Map(map) => {
                out.write_char('{')?;
                if map.len() == 0 {
                    return out.write_char('}');
                }
                let separator = if pretty { ", \n" } else { ", " };
                if pretty {
                    out.write_char('\n')?;
                }
                for (i, slot) in map.iter().enumerate() {
                    if i > 0 {
                        out.write_str(separator)?;
                    }
                    if pretty {
                        write_indent(out, indent + 1)?;
                    }
                    slot.key.write_canonical(out, pretty, indent)?;
                    out.write_str(": ")?;
                    slot.value.write_canonical(out, pretty, indent + 1)?;
                }
                if pretty {
                    out.write_char('\n')?;
                    write_indent(out, indent)?;
                }
                out.write_char('}')
            }
        }
    }
}

fn write_indent<W: Write + ?Sized>(out: &mut W, levels: usize) -> fmt::Result {
    for _ in 0..levels {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Quotes `s`, escaping at the byte level.
pub(crate) fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for &b in s.as_bytes() {
        match b {
            b'"' => out.write_str("\\\"")?,
            b'\\' => out.write_str("\\\\")?,
            b'\t' => out.write_str("\\t")?,
            b'\r' => out.write_str("\\r")?,
            b'\n' => out.write_str("\\n")?,
            0x20..=0x7E => out.write_char(char::from(b))?,
            _ => write!(out, "\\x{b:02X}")?,
        }
    }
    out.write_char('"')
}

/// Significant digits of the `%g` rendering.
const PRECISION: i32 = 6;

/// Renders `v` the way `printf("%g")` does.
///
/// `%g` picks scientific notation when the decimal exponent (after rounding
/// to six significant digits) is below -4 or at least 6, fixed notation
/// otherwise, and strips trailing zeros either way.
pub(crate) fn write_double<W: Write + ?Sized>(out: &mut W, v: f64) -> fmt::Result {
    if v.is_nan() {
        return out.write_str("nan");
    }
    if v.is_infinite() {
        return out.write_str(if v < 0.0 { "-inf" } else { "inf" });
    }
    if v == 0.0 {
        return out.write_str(if v.is_sign_negative() { "-0" } else { "0" });
    }

    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return out.write_str(&sci);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return out.write_str(&sci);
    };

    if exponent < -4 || exponent >= PRECISION {
        out.write_str(trim_fraction(mantissa))?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "e{sign}{:02}", exponent.unsigned_abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        let fixed = format!("{v:.decimals$}");
        out.write_str(trim_fraction(&fixed))
    }
}

/// Strips trailing zeros of a fractional part, and the point if nothing remains.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl Display for Value {
    /// Compact canonical text; the alternate flag (`{:#}`) pretty-prints.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        self.write_canonical(f, pretty, 0)
    }
}
