use std::fmt;

use base64::Engine as _;
use rust_decimal::Decimal;
use serde_json::Value;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};
use uuid::Uuid;

use crate::num::number::{exact_signed, exact_unsigned, narrow_f32, number_to_decimal};

/// JSON type tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar that can be read directly from a node of one source kind.
///
/// `from_json` returns `None` when the node has any other kind, or when the
/// node's content cannot be converted to `Self` without loss. It never panics
/// and never rounds, truncates or wraps.
pub trait FromJson<'a>: Sized {
    const TYPE_NAME: &'static str;
    const SOURCE_KIND: ValueKind;

    fn from_json(value: &'a Value) -> Option<Self>;
}

impl<'a> FromJson<'a> for bool {
    const TYPE_NAME: &'static str = "bool";
    const SOURCE_KIND: ValueKind = ValueKind::Bool;

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

macro_rules! impl_from_json_integer {
    ($($ty:ty => $exact:ident),* $(,)?) => {
        $(
            impl<'a> FromJson<'a> for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const SOURCE_KIND: ValueKind = ValueKind::Number;

                fn from_json(value: &'a Value) -> Option<Self> {
                    match value {
                        Value::Number(number) => $exact(number),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_json_integer!(
    u8 => exact_unsigned,
    u16 => exact_unsigned,
    u32 => exact_unsigned,
    u64 => exact_unsigned,
    i8 => exact_signed,
    i16 => exact_signed,
    i32 => exact_signed,
    i64 => exact_signed,
);

impl<'a> FromJson<'a> for f64 {
    const TYPE_NAME: &'static str = "f64";
    const SOURCE_KIND: ValueKind = ValueKind::Number;

    fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
            _ => None,
        }
    }
}

impl<'a> FromJson<'a> for f32 {
    const TYPE_NAME: &'static str = "f32";
    const SOURCE_KIND: ValueKind = ValueKind::Number;

    fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .filter(|value| value.is_finite())
                .and_then(narrow_f32),
            _ => None,
        }
    }
}

impl<'a> FromJson<'a> for Decimal {
    const TYPE_NAME: &'static str = "decimal";
    const SOURCE_KIND: ValueKind = ValueKind::Number;

    fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(number) => number_to_decimal(number),
            _ => None,
        }
    }
}

impl<'a> FromJson<'a> for &'a str {
    const TYPE_NAME: &'static str = "string";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromJson<'a> for String {
    const TYPE_NAME: &'static str = "string";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Hyphenated `8-4-4-4-12` layout only; braced, URN and bare-hex forms are
/// rejected.
impl<'a> FromJson<'a> for Uuid {
    const TYPE_NAME: &'static str = "uuid";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        let text = value.as_str()?;
        if text.len() != 36 {
            return None;
        }
        Uuid::try_parse(text).ok()
    }
}

/// An ISO-8601 date-time with or without offset, or a bare date. Offsets are
/// normalized to UTC before being dropped.
impl<'a> FromJson<'a> for PrimitiveDateTime {
    const TYPE_NAME: &'static str = "date-time";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        let text = value.as_str()?;
        if let Some(with_offset) = parse_offset_date_time(text) {
            let utc = with_offset.checked_to_offset(UtcOffset::UTC)?;
            return Some(PrimitiveDateTime::new(utc.date(), utc.time()));
        }
        parse_local_date_time(text)
    }
}

/// An ISO-8601 date-time; text without an offset is taken as UTC.
impl<'a> FromJson<'a> for OffsetDateTime {
    const TYPE_NAME: &'static str = "date-time with offset";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        let text = value.as_str()?;
        parse_offset_date_time(text)
            .or_else(|| parse_local_date_time(text).map(PrimitiveDateTime::assume_utc))
    }
}

/// Standard padded base64 alphabet.
impl<'a> FromJson<'a> for Vec<u8> {
    const TYPE_NAME: &'static str = "base64 bytes";
    const SOURCE_KIND: ValueKind = ValueKind::String;

    fn from_json(value: &'a Value) -> Option<Self> {
        let text = value.as_str()?;
        base64::engine::general_purpose::STANDARD.decode(text).ok()
    }
}

fn parse_offset_date_time(text: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(text, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT))
        .ok()
}

fn parse_local_date_time(text: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(text, &Iso8601::DEFAULT)
        .ok()
        .or_else(|| Date::parse(text, &Iso8601::DEFAULT).ok().map(Date::midnight))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[rstest::rstest]
    #[case(json!(null), ValueKind::Null)]
    #[case(json!(false), ValueKind::Bool)]
    #[case(json!(1.5), ValueKind::Number)]
    #[case(json!("x"), ValueKind::String)]
    #[case(json!([]), ValueKind::Array)]
    #[case(json!({}), ValueKind::Object)]
    fn test_value_kind_of(#[case] value: Value, #[case] kind: ValueKind) {
        assert_eq!(ValueKind::of(&value), kind);
    }

    #[rstest::rstest]
    fn test_uuid_requires_hyphenated_layout() {
        let hyphenated = json!("b2567a71-6966-49b1-8976-ad3f4e397b05");
        let simple = json!("b2567a71696649b18976ad3f4e397b05");
        assert!(Uuid::from_json(&hyphenated).is_some());
        assert!(Uuid::from_json(&simple).is_none());
    }

    #[rstest::rstest]
    fn test_date_time_normalizes_offset_to_utc() {
        let value = json!("2014-01-02T01:28:56+02:00");
        let parsed = PrimitiveDateTime::from_json(&value).unwrap();
        assert_eq!(parsed.date(), Date::from_calendar_date(2014, time::Month::January, 1).unwrap());
        assert_eq!(parsed.hour(), 23);
        assert_eq!(parsed.minute(), 28);
    }

    #[rstest::rstest]
    fn test_offset_date_time_assumes_utc_without_offset() {
        let value = json!("2014-01-01T23:28:56");
        let parsed = OffsetDateTime::from_json(&value).unwrap();
        assert_eq!(parsed.offset(), UtcOffset::UTC);
        assert_eq!(parsed.hour(), 23);
    }
}
