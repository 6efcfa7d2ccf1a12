use thiserror::Error;

use super::claims::TokenPurpose;

/// Error type for token validation.
///
/// Every variant is a client-facing rejection; the display strings are the
/// exact `detail` messages surfaced by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature or encoding is invalid.
    #[error("Invalid token")]
    InvalidToken,

    /// Correctly signed, but past its expiry.
    #[error("Token has expired")]
    TokenExpired,

    /// Correctly signed and unexpired, but carrying no subject.
    #[error("Token missing 'sub' field")]
    MalformedToken,

    /// Purpose claim absent or not the one the endpoint demands.
    #[error("Invalid token type, expected '{expected}'")]
    WrongTokenType { expected: TokenPurpose },

    /// Token generation failed (server fault, not a client rejection).
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
