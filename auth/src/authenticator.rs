use std::sync::Arc;

use crate::clock::Clock;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::TokenPurpose;

/// Authentication facade combining password hashing and token handling.
///
/// Owns the process-wide signing secret (via the codec). The service layer
/// supplies user lookup; this type never touches storage.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(secret),
        }
    }

    /// Create an authenticator with an injected clock (deterministic tests).
    pub fn with_clock(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::with_clock(secret, clock),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns `false` for a mismatch or a malformed digest; never errors.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a token with an explicit purpose and lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(
        &self,
        email: &str,
        purpose: TokenPurpose,
        ttl_minutes: i64,
    ) -> Result<String, TokenError> {
        self.token_codec.issue(email, purpose, ttl_minutes)
    }

    /// Issue an access token with the default lifetime.
    pub fn issue_access_token(&self, email: &str) -> Result<String, TokenError> {
        self.token_codec.issue_access(email)
    }

    /// Issue an email-confirmation token with the default lifetime.
    pub fn issue_confirmation_token(&self, email: &str) -> Result<String, TokenError> {
        self.token_codec.issue_confirmation(email)
    }

    /// Validate a token of the expected purpose and return its subject.
    ///
    /// # Errors
    /// * `TokenError` - Signature, expiry, subject, or purpose check failed
    pub fn subject_for_token(
        &self,
        token: &str,
        expected: TokenPurpose,
    ) -> Result<String, TokenError> {
        self.token_codec.parse(token, expected)
    }
}
