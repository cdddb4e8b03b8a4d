//! Decoding of the JSON body sent to create an expense.

use serde_json::{Map, Value};

use crate::expense::NewExpense;

/// The ways a request body can fail to describe a valid expense.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The body is not valid JSON. Holds the parser's error message.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// The body is valid JSON but not an object.
    #[error("expected a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field \"{0}\"")]
    MissingField(&'static str),

    /// A field is present but holds the wrong type of value.
    #[error("field \"{field}\" must be {expected}")]
    InvalidType {
        /// The name of the offending field.
        field: &'static str,
        /// A description of the type the field should have, e.g. "a number".
        expected: &'static str,
    },
}

/// Decode a request body into a [NewExpense].
///
/// The body must be a JSON object with the fields `amount` (number),
/// `description` (string), `date` (string) and `category_id` (integer).
/// Unknown fields are ignored.
///
/// # Errors
/// Returns the first problem found, checking fields in the order listed above.
pub fn parse_new_expense(body: &[u8]) -> Result<NewExpense, PayloadError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|error| PayloadError::MalformedJson(error.to_string()))?;

    let object = value.as_object().ok_or(PayloadError::NotAnObject)?;

    Ok(NewExpense {
        amount: field(object, "amount", "a number", Value::as_f64)?,
        description: field(object, "description", "a string", |value| {
            value.as_str().map(str::to_owned)
        })?,
        date: field(object, "date", "a string", |value| {
            value.as_str().map(str::to_owned)
        })?,
        category_id: field(object, "category_id", "an integer", Value::as_i64)?,
    })
}

fn field<T>(
    object: &Map<String, Value>,
    name: &'static str,
    expected: &'static str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Result<T, PayloadError> {
    let value = object.get(name).ok_or(PayloadError::MissingField(name))?;

    convert(value).ok_or(PayloadError::InvalidType {
        field: name,
        expected,
    })
}
