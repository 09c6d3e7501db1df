use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0} (must be 8 digits)")]
    InvalidPhone(String),

    #[error("Password too weak: need 8+ characters with a lowercase, an uppercase, a digit and a symbol")]
    WeakPassword,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
