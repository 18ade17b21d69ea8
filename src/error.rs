#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required read found nothing usable of the requested type.
    ValueMissingOrInvalid,
    /// A required dotted path did not resolve.
    PathNotFound,
    Syntax,
    Io,
    Write,
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Type name or path the failed operation was asked for.
    pub target: Option<String>,
    pub location: Option<Location>,
}

impl Error {
    pub fn value_missing(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            kind: ErrorKind::ValueMissingOrInvalid,
            message: format!("cannot read or coerce the JSON value as {target}"),
            target: Some(target),
            location: None,
        }
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            kind: ErrorKind::PathNotFound,
            message: format!("cannot find JSON property matching path '{path}'"),
            target: Some(path),
            location: None,
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            target: None,
            location: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
            target: None,
            location: None,
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Write,
            message: message.into(),
            target: None,
            location: None,
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Http,
            message: message.into(),
            target: None,
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let location = Location {
            line: err.line(),
            column: err.column(),
        };
        if err.is_io() {
            return Error::io(err.to_string());
        }
        Error::syntax(err.to_string()).with_location(location)
    }
}
