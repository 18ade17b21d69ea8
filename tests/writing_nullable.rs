use std::str::FromStr;

use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::Value;
use serde_json_ext::{
    parse_str, Indent, JsonScalar, JsonWriter, NullableWrite, OptionalExt, ValueKind,
    WriterOptions,
};
use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};
use uuid::Uuid;

fn write_foo<T: JsonScalar>(value: Option<T>) -> String {
    let mut writer = JsonWriter::default();
    writer.start_object().unwrap();
    writer.write_property_or_null("foo", value).unwrap();
    writer.end_object().unwrap();
    writer.finish().unwrap()
}

fn read_foo(text: &str) -> Value {
    let json = parse_str(text).unwrap();
    json.get("foo").cloned().unwrap_or(Value::Null)
}

#[rstest]
fn test_none_writes_null_for_every_scalar() {
    let written = [
        write_foo::<bool>(None),
        write_foo::<u8>(None),
        write_foo::<i64>(None),
        write_foo::<f64>(None),
        write_foo::<Decimal>(None),
        write_foo::<&str>(None),
        write_foo::<Uuid>(None),
        write_foo::<PrimitiveDateTime>(None),
        write_foo::<time::OffsetDateTime>(None),
    ];
    for text in written {
        assert_eq!(text, r#"{"foo":null}"#);
        let json = parse_str(&text).unwrap();
        assert_eq!(json.property_or_null("foo"), None);
        assert_eq!(json.get("foo").map(|v| v.kind()), Some(ValueKind::Null));
    }
}

#[rstest]
fn test_written_values_read_back() {
    assert_eq!(read_foo(&write_foo(Some(true))).bool_or_null(), Some(true));
    assert_eq!(read_foo(&write_foo(Some(u8::MAX))).u8_or_null(), Some(u8::MAX));
    assert_eq!(read_foo(&write_foo(Some(i8::MIN))).i8_or_null(), Some(i8::MIN));
    assert_eq!(read_foo(&write_foo(Some(i16::MIN))).i16_or_null(), Some(i16::MIN));
    assert_eq!(read_foo(&write_foo(Some(u16::MAX))).u16_or_null(), Some(u16::MAX));
    assert_eq!(read_foo(&write_foo(Some(i32::MIN))).i32_or_null(), Some(i32::MIN));
    assert_eq!(read_foo(&write_foo(Some(u32::MAX))).u32_or_null(), Some(u32::MAX));
    assert_eq!(read_foo(&write_foo(Some(i64::MIN))).i64_or_null(), Some(i64::MIN));
    assert_eq!(read_foo(&write_foo(Some(u64::MAX))).u64_or_null(), Some(u64::MAX));
    assert_eq!(read_foo(&write_foo(Some(13.11f32))).f32_or_null(), Some(13.11f32));
    assert_eq!(read_foo(&write_foo(Some(-13.11f64))).f64_or_null(), Some(-13.11));
    assert_eq!(read_foo(&write_foo(Some("bar"))).str_or_null(), Some("bar"));
}

#[rstest]
#[case("-13.11")]
#[case("0.1234567890123456789012345678")]
#[case("1234567890123456.789012345678")]
#[case("79228162514264337593543950335")]
fn test_decimal_round_trip(#[case] text: &str) {
    let value = Decimal::from_str(text).unwrap();
    let written = write_foo(Some(value));
    assert_eq!(written, format!(r#"{{"foo":{text}}}"#));
    assert_eq!(read_foo(&written).decimal_or_null(), Some(value));
}

#[rstest]
fn test_uuid_round_trip() {
    let value = Uuid::parse_str("b2567a71-6966-49b1-8976-ad3f4e397b05").unwrap();
    assert_eq!(read_foo(&write_foo(Some(value))).uuid_or_null(), Some(value));
}

#[rstest]
fn test_date_time_round_trip() {
    let date = Date::from_calendar_date(2024, Month::February, 29).unwrap();
    let value = PrimitiveDateTime::new(date, Time::from_hms_milli(13, 14, 15, 500).unwrap());
    assert_eq!(read_foo(&write_foo(Some(value))).date_time_or_null(), Some(value));

    let value = PrimitiveDateTime::new(date, Time::from_hms(13, 14, 15).unwrap())
        .assume_offset(UtcOffset::from_hms(2, 0, 0).unwrap());
    assert_eq!(read_foo(&write_foo(Some(value))).date_time_offset_or_null(), Some(value));
}

#[rstest]
fn test_string_escaping_round_trip() {
    let text = "quote \" slash \\ newline \n tab \t bell \u{7} emoji \u{1F600}";
    let written = write_foo(Some(text));
    assert!(!written.contains('\n'));
    assert_eq!(read_foo(&written).str_or_null(), Some(text));
}

#[rstest]
fn test_indented_document_parses_to_same_value() {
    let build = |options: WriterOptions| {
        let mut writer = JsonWriter::new(options);
        writer.start_object().unwrap();
        writer.write_property_or_null("id", Some(7u32)).unwrap();
        writer.write_property_or_null::<&str>("name", None).unwrap();
        writer.write_property_name("tags").unwrap();
        writer.start_array().unwrap();
        writer.write_value_or_null(Some("a")).unwrap();
        writer.write_value_or_null::<&str>(None).unwrap();
        writer.end_array().unwrap();
        writer.end_object().unwrap();
        writer.finish().unwrap()
    };

    let compact = build(WriterOptions::new());
    let indented = build(WriterOptions::new().with_indent(Indent::spaces(4)));
    assert_eq!(compact, r#"{"id":7,"name":null,"tags":["a",null]}"#);
    assert!(indented.contains("\n    \"id\": 7"));
    assert_eq!(parse_str(&compact).unwrap(), parse_str(&indented).unwrap());
}
