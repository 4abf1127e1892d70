//! Raw request payloads for credit writes.
//!
//! Clients may submit a credit as a JSON object or as an
//! `application/x-www-form-urlencoded` body. Both are decoded into the same
//! [`Payload`] map before validation.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Number, Value};

use crate::error::AppError;

/// A single raw field value as submitted by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Null,
    /// Booleans, arrays and objects. Never valid for any credit field.
    Other,
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => FieldValue::Number(number),
            Value::Null => FieldValue::Null,
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => FieldValue::Other,
        }
    }
}

/// Field name to raw value, unified across JSON and form bodies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: HashMap<String, FieldValue>,
}

impl Payload {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Decode a body, trying JSON first and falling back to form encoding.
    ///
    /// JSON only wins when it is a non-empty object; anything else (invalid
    /// JSON, arrays, scalars, `{}`) is reparsed as a form body.
    pub fn decode(body: &[u8]) -> Self {
        Self::from_json(body).unwrap_or_else(|| Self::from_form(body))
    }

    fn from_json(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(map) if !map.is_empty() => Some(Self {
                fields: map
                    .into_iter()
                    .map(|(key, value)| (key, FieldValue::from(value)))
                    .collect(),
            }),
            _ => None,
        }
    }

    fn from_form(body: &[u8]) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            // First occurrence wins for repeated keys
            fields
                .entry(key.into_owned())
                .or_insert_with(|| FieldValue::Text(value.into_owned()));
        }
        Self { fields }
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;

        Ok(Self::decode(&body))
    }
}
