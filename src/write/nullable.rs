use rust_decimal::Decimal;
use time::format_description::well_known::iso8601::{Config, EncodedConfig, FormattedComponents};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::error::Error;
use crate::write::writer::JsonWriter;
use crate::Result;

const DATE_TIME: EncodedConfig = Config::DEFAULT
    .set_formatted_components(FormattedComponents::DateTime)
    .encode();

/// A scalar with a single JSON representation.
pub trait JsonScalar {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()>;
}

impl<T: JsonScalar + ?Sized> JsonScalar for &T {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        (**self).write_json(writer)
    }
}

impl JsonScalar for bool {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_bool_value(*self)
    }
}

macro_rules! impl_json_scalar_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonScalar for $ty {
                fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
                    writer.write_integer_value(*self)
                }
            }
        )*
    };
}

impl_json_scalar_integer!(u8, i8, i16, u16, i32, u32, i64, u64);

impl JsonScalar for f32 {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_f32_value(*self)
    }
}

impl JsonScalar for f64 {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_f64_value(*self)
    }
}

impl JsonScalar for Decimal {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_number_text(&self.to_string())
    }
}

impl JsonScalar for str {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_str_value(self)
    }
}

impl JsonScalar for String {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        writer.write_str_value(self)
    }
}

impl JsonScalar for Uuid {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        let mut buffer = Uuid::encode_buffer();
        writer.write_str_value(self.hyphenated().encode_lower(&mut buffer))
    }
}

impl JsonScalar for PrimitiveDateTime {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        let text = self
            .format(&Iso8601::<DATE_TIME>)
            .map_err(|err| Error::write(format!("cannot format date-time: {err}")))?;
        writer.write_str_value(&text)
    }
}

impl JsonScalar for OffsetDateTime {
    fn write_json(&self, writer: &mut JsonWriter) -> Result<()> {
        let text = self
            .format(&Rfc3339)
            .map_err(|err| Error::write(format!("cannot format date-time with offset: {err}")))?;
        writer.write_str_value(&text)
    }
}

/// Writes `Option`al scalars, emitting JSON `null` for `None`.
pub trait NullableWrite {
    fn write_value_or_null<T: JsonScalar>(&mut self, value: Option<T>) -> Result<()>;

    fn write_property_or_null<T: JsonScalar>(&mut self, name: &str, value: Option<T>)
        -> Result<()>;
}

impl NullableWrite for JsonWriter {
    fn write_value_or_null<T: JsonScalar>(&mut self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => value.write_json(self),
            None => self.write_null_value(),
        }
    }

    fn write_property_or_null<T: JsonScalar>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<()> {
        self.write_property_name(name)?;
        self.write_value_or_null(value)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn object_with<T: JsonScalar>(value: Option<T>) -> String {
        let mut writer = JsonWriter::default();
        writer.start_object().unwrap();
        writer.write_property_or_null("foo", value).unwrap();
        writer.end_object().unwrap();
        writer.finish().unwrap()
    }

    #[rstest::rstest]
    fn test_decimal_keeps_scale() {
        let value = Decimal::from_str("13.10").unwrap();
        assert_eq!(object_with(Some(value)), r#"{"foo":13.10}"#);
    }

    #[rstest::rstest]
    fn test_borrowed_values() {
        let owned = String::from("bar");
        assert_eq!(object_with(Some(&owned)), r#"{"foo":"bar"}"#);
        assert_eq!(object_with(Some("bar")), r#"{"foo":"bar"}"#);
        assert_eq!(object_with::<&str>(None), r#"{"foo":null}"#);
    }

    #[rstest::rstest]
    fn test_uuid_is_lower_hyphenated() {
        let value = Uuid::parse_str("B2567A71-6966-49B1-8976-AD3F4E397B05").unwrap();
        assert_eq!(
            object_with(Some(value)),
            r#"{"foo":"b2567a71-6966-49b1-8976-ad3f4e397b05"}"#
        );
    }

    #[rstest::rstest]
    fn test_array_of_nullable_values() {
        let mut writer = JsonWriter::default();
        writer.start_array().unwrap();
        writer.write_value_or_null(Some(1i64)).unwrap();
        writer.write_value_or_null::<i64>(None).unwrap();
        writer.write_value_or_null(Some(true)).unwrap();
        writer.end_array().unwrap();
        assert_eq!(writer.finish().unwrap(), "[1,null,true]");
    }
}
