use serde::{Deserialize, Serialize};

/// A single contact record, keyed by its phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl Contact {
    /// Creates a new contact.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns a copy of this contact with new names and the same key.
    pub fn with_names(&self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            phone_number: self.phone_number.clone(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
