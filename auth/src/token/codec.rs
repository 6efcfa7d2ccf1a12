use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenPurpose;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Codec producing and consuming signed, self-describing tokens.
///
/// Tokens are JWTs signed with HS256 and carry `{sub, exp, type}`. The codec
/// exclusively owns the signing secret; validity of a token is purely a
/// function of signature, clock, and declared purpose. There is no
/// server-side revocation.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a new codec with a secret key, reading system time.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// TokenCodec instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Create a codec with an injected clock for deterministic expiry tests.
    pub fn with_clock(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - The user's email address
    /// * `purpose` - Declared intent embedded in the `type` claim
    /// * `ttl_minutes` - Lifetime from now; negative values produce an
    ///   already-expired token (tests rely on this)
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        purpose: TokenPurpose,
        ttl_minutes: i64,
    ) -> Result<String, TokenError> {
        tracing::debug!(email = subject, %purpose, ttl_minutes, "Issuing token");

        let expires_at = self.clock.now() + Duration::minutes(ttl_minutes);
        let claims = Claims::new(subject, purpose, expires_at.timestamp());

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Issue an access token with the default 30 minute lifetime.
    pub fn issue_access(&self, subject: &str) -> Result<String, TokenError> {
        let purpose = TokenPurpose::Access;
        self.issue(subject, purpose, purpose.default_ttl_minutes())
    }

    /// Issue an email-confirmation token with the default 24 hour lifetime.
    pub fn issue_confirmation(&self, subject: &str) -> Result<String, TokenError> {
        let purpose = TokenPurpose::Confirmation;
        self.issue(subject, purpose, purpose.default_ttl_minutes())
    }

    /// Validate a token and extract its subject.
    ///
    /// Checks run in a fixed order so an expired-but-correctly-signed token
    /// always reports expiry, never invalidity:
    /// 1. signature/decoding, 2. expiry, 3. subject presence, 4. purpose.
    ///
    /// Expiry is checked here against the injected clock rather than by the
    /// JWT library, so the clock is authoritative.
    ///
    /// # Arguments
    /// * `token` - Token string to validate
    /// * `expected` - Purpose the consuming endpoint demands
    ///
    /// # Returns
    /// The token's subject (email address)
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or encoding is invalid
    /// * `TokenExpired` - Signed correctly but past expiry
    /// * `MalformedToken` - No `sub` claim
    /// * `WrongTokenType` - Purpose claim absent or different from `expected`
    pub fn parse(&self, token: &str, expected: TokenPurpose) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;
        let claims = token_data.claims;

        if let Some(exp) = claims.exp {
            if self.clock.now().timestamp() > exp {
                return Err(TokenError::TokenExpired);
            }
        }

        let subject = claims.sub.ok_or(TokenError::MalformedToken)?;

        match claims.purpose.as_deref() {
            Some(purpose) if purpose == expected.as_str() => Ok(subject),
            _ => Err(TokenError::WrongTokenType { expected }),
        }
    }
}
