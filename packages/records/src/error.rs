use std::fmt::{self, Display};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    /// The input was not a well-formed JSON document.
    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but a record is missing a field or has one of the wrong shape.
    #[error("Schema Error: {0}")]
    Schema(#[from] SchemaError),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format Error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema(_))
    }

    /// The schema error behind this error, if any.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Error::Schema(err) => Some(err),
            _ => None,
        }
    }
}

/// A field of the document that could not be read.
///
/// `field` is the path of the field inside its record, like `name`, `types[2].from` or
/// `constants[0].value`. `record` is the index of the record in the document, or `None` when the
/// document itself has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub record: Option<usize>,
    pub field: String,
    pub kind: SchemaErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaErrorKind {
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaError {
    pub(crate) fn missing(record: usize, field: impl Into<String>) -> Self {
        Self {
            record: Some(record),
            field: field.into(),
            kind: SchemaErrorKind::Missing,
        }
    }

    pub(crate) fn wrong_type(
        record: Option<usize>,
        field: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self {
            record,
            field: field.into(),
            kind: SchemaErrorKind::WrongType {
                expected,
                found: json_kind(found),
            },
        }
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(record) => write!(f, "record {record}: ")?,
            None => write!(f, "document: ")?,
        }

        match &self.kind {
            SchemaErrorKind::Missing => write!(f, "missing field `{}`", self.field),
            SchemaErrorKind::WrongType { expected, found } if self.field.is_empty() => {
                write!(f, "should be {expected}, found {found}")
            }
            SchemaErrorKind::WrongType { expected, found } => write!(
                f,
                "field `{}` should be {expected}, found {found}",
                self.field
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
