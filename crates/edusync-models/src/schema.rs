//! Declarative resource schemas and the request-body validator.
//!
//! A resource is described by the ordered list of its required fields and the
//! kind of value each one holds. Validation is fail-fast and runs in two
//! passes over that list:
//!
//! 1. presence: a field is missing when it is absent, `null` or `""`.
//!    `false` and `0` count as present.
//! 2. type: identifier fields must parse as an ObjectId, number fields must be
//!    JSON numbers, boolean fields JSON booleans and text fields JSON strings.
//!
//! The first failure is reported; nothing is accumulated. On success the body
//! becomes a [`Document`] holding exactly the schema's fields, in schema order,
//! with identifier fields stored as ObjectIds.

use bson::{Bson, Document, oid::ObjectId};
use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, including enum-like values such as an enrollment status.
    Text,
    /// Reference to another document; stored as an ObjectId.
    ObjectId,
    Number,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn object_id(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::ObjectId,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Request body must be a JSON object.")]
    NotAnObject,

    #[error("Field '{0}' is required.")]
    Missing(&'static str),

    #[error("Invalid {0} format.")]
    InvalidReference(&'static str),

    #[error("Field '{0}' must be a number.")]
    NotANumber(&'static str),

    #[error("Field '{0}' must be a boolean.")]
    NotABoolean(&'static str),

    #[error("Field '{0}' must be a string.")]
    NotAString(&'static str),

    /// A path identifier that is not a valid ObjectId. Holds the resource's
    /// lowercase label.
    #[error("Invalid {0} ID format.")]
    InvalidId(&'static str),
}

impl SchemaError {
    /// The offending body field, if the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing(name)
            | Self::InvalidReference(name)
            | Self::NotANumber(name)
            | Self::NotABoolean(name)
            | Self::NotAString(name) => Some(name),
            Self::NotAnObject | Self::InvalidId(_) => None,
        }
    }
}

/// Everything the generic controller needs to know about one resource.
#[derive(Debug)]
pub struct ResourceSchema {
    /// Store collection name, also the URL segment (`courses`).
    pub collection: &'static str,
    /// Capitalized singular used in messages (`Course`).
    pub label: &'static str,
    /// Lowercase singular used in identifier messages (`course`).
    pub singular: &'static str,
    /// Key carrying the new identifier in create responses (`courseId`).
    pub id_key: &'static str,
    pub fields: &'static [Field],
}

impl ResourceSchema {
    pub fn parse_id(&self, raw: &str) -> Result<ObjectId, SchemaError> {
        ObjectId::parse_str(raw).map_err(|_| SchemaError::InvalidId(self.singular))
    }

    pub fn validate(&self, body: &Value) -> Result<Document, SchemaError> {
        let object = body.as_object().ok_or(SchemaError::NotAnObject)?;

        if let Some(missing) = self
            .fields
            .iter()
            .find(|field| !is_present(object.get(field.name)))
        {
            return Err(SchemaError::Missing(missing.name));
        }

        let mut document = Document::new();
        for field in self.fields {
            let value = required(object, field.name)?;
            document.insert(field.name, convert(field, value)?);
        }

        Ok(document)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

fn required<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, SchemaError> {
    object.get(name).ok_or(SchemaError::Missing(name))
}

fn convert(field: &Field, value: &Value) -> Result<Bson, SchemaError> {
    match (field.kind, value) {
        (FieldKind::ObjectId, Value::String(raw)) => ObjectId::parse_str(raw)
            .map(Bson::ObjectId)
            .map_err(|_| SchemaError::InvalidReference(field.name)),
        (FieldKind::ObjectId, _) => Err(SchemaError::InvalidReference(field.name)),
        (FieldKind::Number, Value::Number(number)) => Ok(number_to_bson(number)),
        (FieldKind::Number, _) => Err(SchemaError::NotANumber(field.name)),
        (FieldKind::Boolean, Value::Bool(flag)) => Ok(Bson::Boolean(*flag)),
        (FieldKind::Boolean, _) => Err(SchemaError::NotABoolean(field.name)),
        (FieldKind::Text, Value::String(text)) => Ok(Bson::String(text.clone())),
        (FieldKind::Text, _) => Err(SchemaError::NotAString(field.name)),
    }
}

/// Integers that fit in 32 bits are stored as `Int32`, matching what the
/// MongoDB shell and drivers write for small JSON integers.
pub fn number_to_bson(number: &Number) -> Bson {
    if let Some(int) = number.as_i64() {
        return match i32::try_from(int) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(int),
        };
    }

    Bson::Double(number.as_f64().unwrap_or_default())
}
