use crate::error::{Result, SchemaError};
use serde_json::{Map, Value};

/// A named group of type aliases and constants, written out as one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub types: Vec<TypeAlias>,
    pub constants: Vec<Constant>,
}

/// `using <to> = <from>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub from: String,
    pub to: String,
}

/// `static constexpr <ty> <name> = <value>;`
///
/// The value is an opaque literal and is written exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub ty: String,
    pub name: String,
    pub value: String,
}

// The record gatherer spells these two keys differently.
const NAME_KEYS: &[&str] = &["name", "record_name"];
const TYPES_KEYS: &[&str] = &["types", "type_aliases"];

/// Parse a whole document into its list of raw records.
///
/// Records are kept as raw json so that a duplicate record can be skipped without its other
/// fields ever being looked at.
pub fn read_document(src: &str) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_str(src)?;

    match document {
        Value::Array(records) => {
            tracing::trace!("read document with {} records", records.len());
            Ok(records)
        }
        other => Err(SchemaError::wrong_type(None, "$", "an array", &other).into()),
    }
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.types.push(TypeAlias {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn with_constant(
        mut self,
        ty: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.constants.push(Constant {
            ty: ty.into(),
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Read just the name of the record at `index`.
    pub fn name_of(index: usize, value: &Value) -> Result<&str, SchemaError> {
        let fields = record_fields(index, value)?;
        let name = lookup(index, fields, NAME_KEYS)?;
        as_str(index, NAME_KEYS[0], name)
    }

    /// Read the full record at `index`, failing on the first field that is absent or malformed.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, SchemaError> {
        let fields = record_fields(index, value)?;

        let name = as_str(index, NAME_KEYS[0], lookup(index, fields, NAME_KEYS)?)?;

        let types = as_array(index, TYPES_KEYS[0], lookup(index, fields, TYPES_KEYS)?)?
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let path = format!("types[{idx}]");
                let entry = as_object(index, &path, entry)?;
                Ok(TypeAlias {
                    from: entry_str(index, &path, entry, "from")?,
                    to: entry_str(index, &path, entry, "to")?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        let constants = as_array(index, "constants", lookup(index, fields, &["constants"])?)?
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let path = format!("constants[{idx}]");
                let entry = as_object(index, &path, entry)?;
                Ok(Constant {
                    ty: entry_str(index, &path, entry, "type")?,
                    name: entry_str(index, &path, entry, "name")?,
                    value: entry_literal(index, &path, entry, "value")?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self {
            name: name.to_string(),
            types,
            constants,
        })
    }
}

fn record_fields(index: usize, value: &Value) -> Result<&Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type(Some(index), "", "an object", value))
}

/// Find the first of `keys` present in the record. Errors name the primary key.
fn lookup<'a>(
    index: usize,
    fields: &'a Map<String, Value>,
    keys: &[&str],
) -> Result<&'a Value, SchemaError> {
    keys.iter()
        .find_map(|key| fields.get(*key))
        .ok_or_else(|| SchemaError::missing(index, keys[0]))
}

fn as_str<'a>(index: usize, field: &str, value: &'a Value) -> Result<&'a str, SchemaError> {
    value
        .as_str()
        .ok_or_else(|| SchemaError::wrong_type(Some(index), field, "a string", value))
}

fn as_array<'a>(index: usize, field: &str, value: &'a Value) -> Result<&'a Vec<Value>, SchemaError> {
    value
        .as_array()
        .ok_or_else(|| SchemaError::wrong_type(Some(index), field, "an array", value))
}

fn as_object<'a>(
    index: usize,
    field: &str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type(Some(index), field, "an object", value))
}

fn entry_str(
    index: usize,
    path: &str,
    entry: &Map<String, Value>,
    key: &str,
) -> Result<String, SchemaError> {
    let field = format!("{path}.{key}");
    let value = entry
        .get(key)
        .ok_or_else(|| SchemaError::missing(index, field.as_str()))?;
    as_str(index, &field, value).map(str::to_string)
}

/// Like [`entry_str`], but numbers are accepted too and kept exactly as written in the input.
fn entry_literal(
    index: usize,
    path: &str,
    entry: &Map<String, Value>,
    key: &str,
) -> Result<String, SchemaError> {
    let field = format!("{path}.{key}");
    match entry.get(key) {
        Some(Value::String(literal)) => Ok(literal.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(SchemaError::wrong_type(
            Some(index),
            field,
            "a string or number",
            other,
        )),
        None => Err(SchemaError::missing(index, field)),
    }
}
