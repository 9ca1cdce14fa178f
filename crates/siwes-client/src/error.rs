use thiserror::Error;

use siwes_store::StoreError;

/// Errors returned by client commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The command needs a logged-in user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The logged-in user may not see or change this record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Another client panicked while holding the store.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
