use async_trait::async_trait;

use crate::contact::Contact;

use super::Result;

/// Storage contract for contact records keyed by phone number.
///
/// Writes are upserts: there is no "already exists" or "not found" outcome.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts the contact, overwriting any record with the same phone number.
    async fn put_contact(&self, contact: &Contact) -> Result<()>;

    /// Returns every stored contact.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Deletes the contact with this phone number. Missing keys are not an error.
    async fn delete_contact(&self, phone_number: &str) -> Result<()>;

    /// Sets first and last name for the phone number, creating the record if
    /// absent. Returns the record as stored after the update.
    async fn update_contact(&self, contact: &Contact) -> Result<Contact>;
}
