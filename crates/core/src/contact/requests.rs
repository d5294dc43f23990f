//! Request payload for create and update operations.
//!
//! The gateway delivers the body as a JSON string. Every field is optional at
//! the wire level so that a missing field becomes a validation error instead
//! of a parse error.

use serde::Deserialize;

use super::error::ValidationError;
use super::types::Contact;

/// Body of a `POST` or `PUT` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl ContactPayload {
    /// Parses the raw request body. An absent or empty body is an empty payload.
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        match body.filter(|b| !b.is_empty()) {
            None => Ok(Self::default()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| ValidationError::InvalidBody(e.to_string())),
        }
    }

    /// Checks that all three fields are present and non-empty.
    ///
    /// Values are taken as-is; no trimming or normalization happens here.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        match (
            non_empty(self.first_name),
            non_empty(self.last_name),
            non_empty(self.phone_number),
        ) {
            (Some(first_name), Some(last_name), Some(phone_number)) => {
                Ok(Contact::new(first_name, last_name, phone_number))
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
