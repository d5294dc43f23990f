//! Storage backend implementations.
//!
//! Concrete implementations of [`contacts_core::storage::ContactRepository`].
//! The backend is chosen at startup from [`crate::config::StorageBackend`]:
//!
//! - `dynamodb` (default): AWS DynamoDB via `aws-sdk-dynamodb`
//! - `memory`: process-local map, for tests and local development

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
