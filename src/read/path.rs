use serde_json::Value;

use crate::error::Error;
use crate::read::optional::OptionalExt;
use crate::Result;

/// Resolution of flat dotted property paths such as `"user.address.city"`.
///
/// Paths are split on `.` with empty segments dropped, so `".a..b."` is the
/// same as `"a.b"`. There is no index syntax and no escaping of literal dots.
pub trait PathExt {
    /// Walks `path` with [`OptionalExt::property_or_null`], stopping at the
    /// first segment that yields nothing. An empty path yields `self`.
    fn property_by_path_or_null(&self, path: &str) -> Option<&Value>;

    fn property_by_path(&self, path: &str) -> Result<&Value> {
        self.property_by_path_or_null(path)
            .ok_or_else(|| Error::path_not_found(path))
    }
}

impl PathExt for Value {
    fn property_by_path_or_null(&self, path: &str) -> Option<&Value> {
        if memchr::memchr(b'.', path.as_bytes()).is_none() {
            return if path.is_empty() {
                Some(self)
            } else {
                self.property_or_null(path)
            };
        }

        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |current, segment| current.property_or_null(segment))
    }
}
