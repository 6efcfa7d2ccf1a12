//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the backend:
//! - Password hashing (Argon2id)
//! - Signed dual-purpose tokens (access vs. email confirmation) with expiry
//! - An authentication facade bundling both
//!
//! The service defines its own user-store traits and adapts these
//! implementations. This keeps credential storage out of the library while
//! reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenPurpose};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue_access("user@example.com").unwrap();
//! let subject = codec.parse(&token, TokenPurpose::Access).unwrap();
//! assert_eq!(subject, "user@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenPurpose};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! assert!(auth.verify_password("password123", &hash));
//! let token = auth.issue_access_token("user@example.com").unwrap();
//!
//! // Validate token on a protected request
//! let email = auth.subject_for_token(&token, TokenPurpose::Access).unwrap();
//! assert_eq!(email, "user@example.com");
//! ```

pub mod authenticator;
pub mod clock;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::SystemClock;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenPurpose;
