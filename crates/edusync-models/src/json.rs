//! Stored documents rendered as API JSON.
//!
//! ObjectIds become their 24-character hex form instead of the extended-JSON
//! `{"$oid": ...}` wrapper, so `_id`, `studentId` and `courseId` read as plain
//! strings and can be fed straight back into `/{resource}/{id}`.

use bson::{Bson, Document};
use serde_json::{Map, Number, Value};

pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::String(text) => Value::String(text),
        Bson::Boolean(flag) => Value::Bool(flag),
        Bson::Int32(int) => Value::from(int),
        Bson::Int64(int) => Value::from(int),
        Bson::Double(float) => Number::from_f64(float).map_or(Value::Null, Value::Number),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::DateTime(datetime) => datetime
            .try_to_rfc3339_string()
            .map_or_else(|_| Value::from(datetime.timestamp_millis()), Value::String),
        other => other.into_relaxed_extjson(),
    }
}
