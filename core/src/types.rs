//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is the stored record and the only shape the server ever writes.
//! `TodoPayload` is what create and replace accept: every field optional,
//! unknown fields ignored, so `{}` is a valid (empty, not completed) todo.
//! The payload carries an `id` only so that bodies echoing a previous
//! response still decode; the server always assigns or keeps the id itself.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Request body for `POST /api/todos` and `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoPayload {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(alias = "Text", deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(alias = "Completed", deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// A JSON `null` leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TodoPayload {
    /// Decode a request body.
    ///
    /// Only the first JSON value is read; anything after it is left alone.
    /// An empty body is a decode error; a bare `null` is an empty payload.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match stream.next() {
            Some(result) => result.map(Option::unwrap_or_default),
            None => serde_json::from_slice(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "a".to_string(),
            completed: false,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":1,"text":"a","completed":false}"#);
    }

    #[test]
    fn payload_all_fields_optional() {
        let payload = TodoPayload::from_slice(b"{}").unwrap();
        assert_eq!(payload, TodoPayload::default());
    }

    #[test]
    fn payload_partial_fields() {
        let payload = TodoPayload::from_slice(br#"{"completed":true}"#).unwrap();
        assert_eq!(payload.text, "");
        assert!(payload.completed);
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload = TodoPayload::from_slice(br#"{"text":"x","priority":3}"#).unwrap();
        assert_eq!(payload.text, "x");
    }

    #[test]
    fn payload_accepts_body_id() {
        let payload = TodoPayload::from_slice(br#"{"id":99,"text":"x"}"#).unwrap();
        assert_eq!(payload.id, 99);
    }

    #[test]
    fn payload_rejects_wrong_field_type() {
        assert!(TodoPayload::from_slice(br#"{"completed":"yes"}"#).is_err());
        assert!(TodoPayload::from_slice(br#"{"id":"one"}"#).is_err());
    }

    #[test]
    fn payload_rejects_empty_body() {
        let err = TodoPayload::from_slice(b"").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn payload_rejects_malformed_json() {
        assert!(TodoPayload::from_slice(b"{\"text\":").is_err());
        assert!(TodoPayload::from_slice(b"not json").is_err());
    }

    #[test]
    fn payload_null_fields_take_zero_values() {
        let payload = TodoPayload::from_slice(br#"{"id":null,"text":null,"completed":null}"#).unwrap();
        assert_eq!(payload, TodoPayload::default());
    }

    #[test]
    fn payload_null_body_is_empty() {
        assert_eq!(TodoPayload::from_slice(b"null").unwrap(), TodoPayload::default());
        assert_eq!(TodoPayload::from_slice(b" null ").unwrap(), TodoPayload::default());
    }

    #[test]
    fn payload_accepts_capitalized_keys() {
        let payload = TodoPayload::from_slice(br#"{"ID":3,"Text":"cap","Completed":true}"#).unwrap();
        assert_eq!(
            payload,
            TodoPayload {
                id: 3,
                text: "cap".to_string(),
                completed: true,
            }
        );
        assert_eq!(TodoPayload::from_slice(br#"{"Id":4}"#).unwrap().id, 4);
    }

    #[test]
    fn payload_ignores_trailing_data() {
        let payload = TodoPayload::from_slice(br#"{"text":"first"} {"text":"second"}"#).unwrap();
        assert_eq!(payload.text, "first");
    }
}
