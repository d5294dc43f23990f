//! Shared state handed to every invocation.

use std::sync::Arc;

use contacts_core::storage::ContactRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// Holds the store client. Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn ContactRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Builds the repository selected by the configuration.
    pub async fn from_config(config: &Config) -> Self {
        let repository: Arc<dyn ContactRepository> = match config.storage {
            StorageBackend::DynamoDb => {
                let repository = DynamoDbRepository::from_config(config).await;
                tracing::info!(
                    table = %repository.table_name(),
                    endpoint = ?config.dynamodb_endpoint_url,
                    "Using DynamoDB storage"
                );
                Arc::new(repository)
            }
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Arc::new(InMemoryRepository::new())
            }
        };

        Self::new(repository)
    }

    pub fn repository(&self) -> &dyn ContactRepository {
        self.repository.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
