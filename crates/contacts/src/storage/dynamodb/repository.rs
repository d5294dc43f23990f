//! DynamoDB repository implementation.
//!
//! Implements [`ContactRepository`] with one DynamoDB call per operation,
//! except listing, which follows scan pages to the end of the table.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use contacts_core::contact::Contact;
use contacts_core::storage::{ContactRepository, RepositoryError, Result};

use crate::config::Config;

use super::conversions::{
    contact_key, contact_to_item, update_names_values, updated_attributes_to_contact,
    UPDATE_NAMES_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_put_item_error, map_scan_error, map_update_item_error,
};
use super::scan::scan_all;

/// DynamoDB-based repository implementation.
///
/// The client is cheap to clone and meant to be built once per process.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential and region chain. When
    /// `dynamodb_endpoint_url` is set the client talks to that endpoint
    /// instead, e.g. DynamoDB Local.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.dynamodb_endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()), &config.table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ContactRepository for DynamoDbRepository {
    async fn put_contact(&self, contact: &Contact) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(contact_to_item(contact)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let (contacts, pages) = scan_all(|start_key| async move {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            Ok::<_, RepositoryError>((
                output.items.unwrap_or_default(),
                output.last_evaluated_key,
            ))
        })
        .await?;

        tracing::debug!(
            table = %self.table_name,
            pages,
            count = contacts.len(),
            "Scanned contacts table"
        );

        Ok(contacts)
    }

    async fn delete_contact(&self, phone_number: &str) -> Result<()> {
        let (key_name, key_value) = contact_key(phone_number);

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn update_contact(&self, contact: &Contact) -> Result<Contact> {
        let (key_name, key_value) = contact_key(&contact.phone_number);

        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .update_expression(UPDATE_NAMES_EXPRESSION)
            .set_expression_attribute_values(Some(update_names_values(contact)))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        let attributes = output.attributes.unwrap_or_default();
        updated_attributes_to_contact(&contact.phone_number, &attributes)
    }
}
