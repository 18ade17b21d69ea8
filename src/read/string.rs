use serde_json::Value;

use crate::error::Error;
use crate::read::optional::OptionalExt;
use crate::Result;

pub trait StringExt {
    fn non_null_str(&self) -> Result<&str>;

    /// `None` unless this is a string with at least one character.
    fn non_empty_str_or_null(&self) -> Option<&str>;

    fn non_empty_str(&self) -> Result<&str> {
        self.non_empty_str_or_null()
            .ok_or_else(|| Error::value_missing("non-empty string"))
    }

    /// `None` unless this is a string with at least one non-whitespace
    /// character.
    fn non_white_space_str_or_null(&self) -> Option<&str>;

    fn non_white_space_str(&self) -> Result<&str> {
        self.non_white_space_str_or_null()
            .ok_or_else(|| Error::value_missing("non-empty non-whitespace string"))
    }
}

impl StringExt for Value {
    fn non_null_str(&self) -> Result<&str> {
        self.str_or_null()
            .ok_or_else(|| Error::value_missing("non-null string"))
    }

    fn non_empty_str_or_null(&self) -> Option<&str> {
        self.str_or_null().filter(|text| !text.is_empty())
    }

    fn non_white_space_str_or_null(&self) -> Option<&str> {
        self.str_or_null().filter(|text| !text.trim().is_empty())
    }
}
