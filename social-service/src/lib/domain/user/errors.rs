use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for email delivery operations
#[derive(Debug, Clone, Error)]
pub enum EmailSenderError {
    #[error("Mail API request failed: {0}")]
    DeliveryFailed(String),
}

/// Top-level error for all user-related operations.
///
/// Every client-facing variant displays the exact `detail` string the HTTP
/// layer surfaces. `InvalidCredentials` deliberately covers both "no such
/// user" and "wrong password" so responses cannot be used for account
/// enumeration.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password!")]
    InvalidCredentials,

    /// Bearer token was validly signed but resolves to no stored user.
    #[error("Could not find user for this token!")]
    UserNotFound,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Email delivery failed: {0}")]
    EmailDelivery(#[from] EmailSenderError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
