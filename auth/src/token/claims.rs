use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Declared intent of a token.
///
/// The purpose discriminant is the only thing preventing a confirmation
/// link from being replayed as an access credential, so consumers must
/// always state which purpose they expect. Adding a new purpose is a
/// compile-checked change: every `match` below is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    /// Short-lived credential authorizing protected actions.
    Access,
    /// Longer-lived credential proving control of an email address.
    Confirmation,
}

impl TokenPurpose {
    /// Wire representation used in the token's `type` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Access => "access",
            TokenPurpose::Confirmation => "confirmation",
        }
    }

    /// Default token lifetime in minutes for this purpose.
    pub fn default_ttl_minutes(&self) -> i64 {
        match self {
            TokenPurpose::Access => 30,
            TokenPurpose::Confirmation => 1440,
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims carried by this system's tokens.
///
/// All fields are optional on the decode side: a token missing `sub` or
/// `type` must still decode so the codec can report the precise failure
/// (`MalformedToken` vs. `WrongTokenType`) instead of a generic one.
/// `type` is kept as a raw string here so an unknown purpose value decodes
/// and is rejected as a type mismatch rather than an invalid token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the user's email address)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Token purpose discriminant
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl Claims {
    /// Build the claims for a freshly issued token.
    pub fn new(subject: impl ToString, purpose: TokenPurpose, expires_at: i64) -> Self {
        Self {
            sub: Some(subject.to_string()),
            exp: Some(expires_at),
            purpose: Some(purpose.as_str().to_string()),
        }
    }
}
