//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use contacts_core::contact::Contact;
use contacts_core::storage::{ContactRepository, Result};

/// In-memory storage backend.
///
/// Contacts live in a `BTreeMap` keyed by phone number, so listing returns
/// them in key order. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: Arc<RwLock<BTreeMap<String, Contact>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.contacts.read().await.len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn put_contact(&self, contact: &Contact) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.phone_number.clone(), contact.clone());
        Ok(())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.values().cloned().collect())
    }

    async fn delete_contact(&self, phone_number: &str) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.remove(phone_number);
        Ok(())
    }

    async fn update_contact(&self, contact: &Contact) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        let stored = contacts
            .entry(contact.phone_number.clone())
            .and_modify(|existing| {
                *existing = existing.with_names(&contact.first_name, &contact.last_name)
            })
            .or_insert_with(|| contact.clone());
        Ok(stored.clone())
    }
}
