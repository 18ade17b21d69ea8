//! Null-tolerant, coercing accessors over [`serde_json::Value`], and a
//! streaming writer with nullable-aware overloads.
//!
//! Reading never fails on missing, mistyped or `null` data: every `*_or_null`
//! accessor answers `None` instead, and the required forms turn that `None`
//! into an [`Error`].
//!
//! ```
//! use serde_json_ext::{CoercionExt, OptionalExt, PathExt};
//!
//! let json = serde_json_ext::parse_str(r#"{"user":{"id":"42","name":null}}"#).unwrap();
//!
//! let user = json.property_by_path("user").unwrap();
//! assert_eq!(user.property_or_null("id").and_then(|id| id.i32_coerced_or_null()), Some(42));
//! assert_eq!(user.property_or_null("name"), None);
//! ```

pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod options;
pub mod read;
pub mod write;

mod num;
mod parse;
mod text;

use std::io::Read;

use serde_json::Value;

pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{Indent, ParseOptions, WriterOptions};
pub use crate::read::{
    ArrayElements, Coercible, CoercionExt, FromJson, ObjectEntries, OptionalExt, PathExt,
    StringExt, ValueKind,
};
pub use crate::write::{JsonScalar, JsonWriter, NullableWrite};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    parse::from_slice(input, options)
}

pub fn parse_str(input: &str) -> Result<Value> {
    parse_str_with_options(input, &ParseOptions::default())
}

pub fn parse_str_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    parse::from_str(input, options)
}

/// Parses `input`, or returns `None` if it is not well-formed JSON.
pub fn try_parse(input: &[u8]) -> Option<Value> {
    try_parse_with_options(input, &ParseOptions::default())
}

pub fn try_parse_with_options(input: &[u8], options: &ParseOptions) -> Option<Value> {
    discard_error(parse_with_options(input, options))
}

pub fn try_parse_str(input: &str) -> Option<Value> {
    try_parse_str_with_options(input, &ParseOptions::default())
}

pub fn try_parse_str_with_options(input: &str, options: &ParseOptions) -> Option<Value> {
    discard_error(parse_str_with_options(input, options))
}

pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Value> {
    parse::from_reader(reader, options)
}

fn discard_error(result: Result<Value>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(
                target: "serde_json_ext::parse",
                error = %err,
                "Discarded malformed JSON input"
            );
            None
        }
    }
}
