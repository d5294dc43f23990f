//! One handler per contact operation. Each performs a single repository call.

use contacts_core::contact::Contact;
use contacts_core::dispatch::{
    added_message, deleted_message, updated_message, ContactError, ContactResponse, StoreAction,
};
use contacts_core::storage::{ContactRepository, RepositoryError};

/// Upserts a contact (POST).
pub async fn create_contact(
    repository: &dyn ContactRepository,
    contact: &Contact,
) -> Result<ContactResponse, ContactError> {
    repository
        .put_contact(contact)
        .await
        .map_err(|e| ContactError::store(StoreAction::Add, e))?;

    tracing::info!(phone_number = %contact.phone_number, "Contact added");
    Ok(ContactResponse::message(200, added_message(contact)))
}

/// Returns every contact (GET).
pub async fn list_contacts(
    repository: &dyn ContactRepository,
) -> Result<ContactResponse, ContactError> {
    let contacts = repository
        .list_contacts()
        .await
        .map_err(|e| ContactError::store(StoreAction::Fetch, e))?;

    tracing::info!(count = contacts.len(), "Contacts fetched");
    ContactResponse::json(200, &contacts).map_err(|e| {
        ContactError::store(
            StoreAction::Fetch,
            RepositoryError::Serialization(e.to_string()),
        )
    })
}

/// Deletes a contact by phone number (DELETE). Missing contacts still succeed.
pub async fn delete_contact(
    repository: &dyn ContactRepository,
    phone_number: &str,
) -> Result<ContactResponse, ContactError> {
    repository
        .delete_contact(phone_number)
        .await
        .map_err(|e| ContactError::store(StoreAction::Delete, e))?;

    tracing::info!(phone_number = %phone_number, "Contact deleted");
    Ok(ContactResponse::message(200, deleted_message(phone_number)))
}

/// Sets first and last name for a phone number, creating it if needed (PUT).
pub async fn update_contact(
    repository: &dyn ContactRepository,
    contact: &Contact,
) -> Result<ContactResponse, ContactError> {
    let stored = repository
        .update_contact(contact)
        .await
        .map_err(|e| ContactError::store(StoreAction::Update, e))?;

    tracing::info!(phone_number = %stored.phone_number, "Contact updated");
    Ok(ContactResponse::message(200, updated_message(contact)))
}
