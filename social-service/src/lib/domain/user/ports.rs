use async_trait::async_trait;

use crate::user::errors::EmailSenderError;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;
use crate::user::models::RegisteredUser;
use crate::user::models::User;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user and send the confirmation email.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email already exists in the store
    /// * `EmailDelivery` - Confirmation mail could not be delivered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<RegisteredUser, UserError>;

    /// Mark the email carried by a confirmation token as confirmed.
    ///
    /// Idempotent: confirming an already confirmed user succeeds.
    ///
    /// # Errors
    /// * `Token` - Signature, expiry, subject, or purpose check failed
    /// * `DatabaseError` - Store operation failed
    async fn confirm_email(&self, token: &str) -> Result<(), UserError>;

    /// Verify credentials and return the user record.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (uniform)
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (uniform)
    async fn login(&self, email: &str, password: &str) -> Result<String, UserError>;

    /// Resolve the user a bearer access token belongs to.
    ///
    /// Every protected endpoint calls this before doing any work.
    ///
    /// # Errors
    /// * `Token` - Signature, expiry, subject, or purpose check failed
    /// * `UserNotFound` - Token is valid but its subject no longer exists
    async fn current_user(&self, token: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Email uniqueness is enforced by the store; a race between two concurrent
/// registrations resolves there and the loser sees `EmailAlreadyRegistered`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist a new unconfirmed user, returning the assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Unique email constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, email: &EmailAddress, password_hash: &str) -> Result<i64, UserError>;

    /// Flip the user's confirmed flag to true.
    async fn set_confirmed(&self, email: &str) -> Result<(), UserError>;
}

/// Outbound email delivery.
#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    /// Deliver a single plain-text message. Never retried.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSenderError>;
}
