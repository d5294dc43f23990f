use crate::contact::{Contact, ContactPayload, ValidationError};

use super::event::ContactEvent;
use super::method::Method;

/// Query parameter carrying the key for deletes.
const PHONE_NUMBER_PARAM: &str = "phone_number";

/// A validated request, ready to run against a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create(Contact),
    List,
    Delete { phone_number: String },
    Update(Contact),
}

/// Decides which operation an event asks for and validates its inputs.
///
/// Validation failures never reach the store.
pub fn parse_operation(event: &ContactEvent) -> Result<Operation, ValidationError> {
    let method: Method = event.http_method.parse()?;

    match method {
        Method::Post => Ok(Operation::Create(contact_from_body(event)?)),
        Method::Get => Ok(Operation::List),
        Method::Delete => {
            let phone_number = event
                .query_param(PHONE_NUMBER_PARAM)
                .filter(|p| !p.is_empty())
                .ok_or(ValidationError::MissingPhoneNumber)?;
            Ok(Operation::Delete {
                phone_number: phone_number.to_string(),
            })
        }
        Method::Put => Ok(Operation::Update(contact_from_body(event)?)),
    }
}

fn contact_from_body(event: &ContactEvent) -> Result<Contact, ValidationError> {
    ContactPayload::from_body(event.body.as_deref())?.into_contact()
}

pub fn added_message(contact: &Contact) -> String {
    format!(
        "Contact added: {} {} {}",
        contact.first_name, contact.last_name, contact.phone_number
    )
}

pub fn updated_message(contact: &Contact) -> String {
    format!(
        "Contact updated: {} {} {}",
        contact.first_name, contact.last_name, contact.phone_number
    )
}

pub fn deleted_message(phone_number: &str) -> String {
    format!("Contact with phone number {phone_number} deleted.")
}
