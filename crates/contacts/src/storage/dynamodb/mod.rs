//! DynamoDB storage backend implementation.
//!
//! The table has a single string partition key, `phoneNumber`, and stores
//! `firstName` and `lastName` as string attributes.

mod conversions;
mod error;
mod repository;
mod scan;

pub use repository::DynamoDbRepository;
