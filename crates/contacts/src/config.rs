use std::{env, fmt, str::FromStr};

/// Which repository implementation backs the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StorageBackend::DynamoDb),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!("unknown storage backend '{other}', expected 'dynamodb' or 'memory'"),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageBackend::DynamoDb => "dynamodb",
            StorageBackend::Memory => "memory",
        })
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the contacts (default: "contacts")
    pub table_name: String,
    /// Endpoint override for the DynamoDB client, e.g. DynamoDB Local
    pub dynamodb_endpoint_url: Option<String>,
    /// Storage backend (default: dynamodb)
    pub storage: StorageBackend,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACTS_TABLE_NAME` - DynamoDB table name (default: "contacts")
    /// - `DYNAMODB_ENDPOINT_URL` - Optional endpoint override
    /// - `CONTACTS_STORAGE` - `dynamodb` or `memory` (default: "dynamodb")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match lookup("CONTACTS_STORAGE") {
            Some(value) => value.parse()?,
            None => StorageBackend::default(),
        };

        Ok(Self {
            table_name: lookup("CONTACTS_TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "contacts".to_string()),
            dynamodb_endpoint_url: lookup("DYNAMODB_ENDPOINT_URL").filter(|v| !v.is_empty()),
            storage,
        })
    }
}
