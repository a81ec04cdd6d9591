//! Validating decoder.
//!
//! Parses a candidate payload as JSON, walks it against a [`Schema`], and
//! only then deserializes into the target type. Validation failures name
//! the offending field path and the expected vs. actual type so the message
//! is useful as model feedback.
//!
//! Decoding is deterministic: the same text and schema always produce the
//! same outcome.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::DecodeError;
use crate::schema::{FieldType, Schema, Structured};

/// Path label for the document root.
const ROOT: &str = "$";

/// Parse and structurally validate `text` against `schema`.
///
/// Unknown fields are ignored (forward compatible); absent optional fields
/// are fine; integers are accepted where floats are expected.
pub fn decode_value(text: &str, schema: &Schema) -> Result<JsonValue, DecodeError> {
    let value: JsonValue = serde_json::from_str(text)?;
    validate_object(&value, schema, ROOT)?;
    Ok(value)
}

/// Decode `text` into `T`, validating against the given schema first.
pub fn decode_with_schema<T: DeserializeOwned>(
    text: &str,
    schema: &Schema,
) -> Result<T, DecodeError> {
    let value = decode_value(text, schema)?;
    serde_json::from_value(value).map_err(DecodeError::Deserialize)
}

/// Decode `text` into a [`Structured`] type using its own schema.
pub fn decode<T: Structured>(text: &str) -> Result<T, DecodeError> {
    decode_with_schema(text, &T::schema())
}

fn validate_object(value: &JsonValue, schema: &Schema, path: &str) -> Result<(), DecodeError> {
    let Some(object) = value.as_object() else {
        return Err(DecodeError::mismatch(path, "object", json_type_name(value)));
    };

    for (name, spec) in &schema.fields {
        let field_path = if path == ROOT {
            name.clone()
        } else {
            format!("{path}.{name}")
        };

        match object.get(name) {
            None => {
                if spec.required {
                    return Err(DecodeError::missing_field(field_path));
                }
            }
            Some(JsonValue::Null) => {
                // Null stands in for an absent optional value.
                if spec.required {
                    return Err(DecodeError::mismatch(
                        field_path,
                        spec.ty.type_name(),
                        "null",
                    ));
                }
            }
            Some(found) => validate_type(found, &spec.ty, &field_path)?,
        }
    }

    Ok(())
}

fn validate_type(value: &JsonValue, ty: &FieldType, path: &str) -> Result<(), DecodeError> {
    let ok = match ty {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::Float => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Object(schema) => return validate_object(value, schema, path),
        FieldType::List(elem) => {
            let Some(items) = value.as_array() else {
                return Err(DecodeError::mismatch(path, "array", json_type_name(value)));
            };
            for (index, item) in items.iter().enumerate() {
                validate_type(item, elem, &format!("{path}[{index}]"))?;
            }
            return Ok(());
        }
    };

    if ok {
        Ok(())
    } else {
        Err(DecodeError::mismatch(
            path,
            ty.type_name(),
            json_type_name(value),
        ))
    }
}

/// JSON type name of a value, distinguishing integers from other numbers.
#[must_use]
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => "integer",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
