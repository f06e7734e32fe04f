use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store failures pass through with their own message.
    #[error(transparent)]
    Repo(#[from] RepositoryError),

    #[error("One or more product is missing.")]
    MissingEntity,

    #[error("Product not found.")]
    NotFound,

    #[error("Product quantity higher than stock quantity.")]
    InsufficientStock,

    #[error("Delta quantity must not be negative.")]
    InvalidDelta,
}
