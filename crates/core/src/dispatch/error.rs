use std::fmt;

use thiserror::Error;

use crate::contact::ValidationError;
use crate::storage::RepositoryError;

/// The store call an error came from, used to prefix the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Add,
    Fetch,
    Delete,
    Update,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreAction::Add => "adding contact",
            StoreAction::Fetch => "fetching contacts",
            StoreAction::Delete => "deleting contact",
            StoreAction::Update => "updating contact",
        })
    }
}

/// Every way a request can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error {action}: {source}")]
    Store {
        action: StoreAction,
        source: RepositoryError,
    },
}

impl ContactError {
    pub fn store(action: StoreAction, source: RepositoryError) -> Self {
        Self::Store { action, source }
    }
}
