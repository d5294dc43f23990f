//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! contacts. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use contacts_core::contact::Contact;
use contacts_core::storage::RepositoryError;

pub const PHONE_NUMBER: &str = "phoneNumber";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";

/// Expression used to upsert names without touching the key.
pub const UPDATE_NAMES_EXPRESSION: &str = "SET firstName = :f, lastName = :l";

/// Convert a Contact to DynamoDB item.
pub fn contact_to_item(contact: &Contact) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PHONE_NUMBER.to_string(),
        AttributeValue::S(contact.phone_number.clone()),
    );
    item.insert(
        FIRST_NAME.to_string(),
        AttributeValue::S(contact.first_name.clone()),
    );
    item.insert(
        LAST_NAME.to_string(),
        AttributeValue::S(contact.last_name.clone()),
    );

    item
}

/// Convert a DynamoDB item to Contact.
pub fn item_to_contact(item: &HashMap<String, AttributeValue>) -> Result<Contact, RepositoryError> {
    Ok(Contact::new(
        get_string(item, FIRST_NAME)?,
        get_string(item, LAST_NAME)?,
        get_string(item, PHONE_NUMBER)?,
    ))
}

/// Primary key for a phone number.
pub fn contact_key(phone_number: &str) -> (String, AttributeValue) {
    (
        PHONE_NUMBER.to_string(),
        AttributeValue::S(phone_number.to_string()),
    )
}

/// Values bound to the placeholders of [`UPDATE_NAMES_EXPRESSION`].
pub fn update_names_values(contact: &Contact) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":f".to_string(), AttributeValue::S(contact.first_name.clone())),
        (":l".to_string(), AttributeValue::S(contact.last_name.clone())),
    ])
}

/// Build the stored contact from the `UPDATED_NEW` attributes of an update.
///
/// The key is never returned by DynamoDB in that mode, so it comes from the
/// request.
pub fn updated_attributes_to_contact(
    phone_number: &str,
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Contact, RepositoryError> {
    Ok(Contact::new(
        get_string(attributes, FIRST_NAME)?,
        get_string(attributes, LAST_NAME)?,
        phone_number,
    ))
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::Serialization(format!("missing attribute: {key}")))
}
