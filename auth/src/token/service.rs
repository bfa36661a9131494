use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;

/// How long an issued token stays valid.
const VALIDITY_HOURS: i64 = 24;

/// Issues and validates signed, self-contained bearer tokens.
///
/// Tokens are compact HS256 JWTs carrying subject, issued-at, and expiration.
/// The signing secret is passed in at construction and held for the process
/// lifetime; rotating it invalidates every outstanding token, since only a
/// single key verifies.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from a signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token bound to a subject.
    ///
    /// Sets issued-at to now and expiration to now plus the fixed validity
    /// window.
    ///
    /// # Returns
    /// Compact serialized token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(VALIDITY_HOURS)).timestamp(),
        };

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature, structure, and expiration.
    ///
    /// # Returns
    /// The embedded claims
    ///
    /// # Errors
    /// * `Expired` - Expiration time is in the past
    /// * `Invalid` - Signature mismatch or malformed structure
    pub fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact; the default 60s leeway would accept stale tokens
        validation.leeway = 0;

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Read the subject out of a token without verifying it.
    ///
    /// Works on expired or tampered tokens, which makes it usable for
    /// diagnostics and for deciding which identity a request claims to be.
    ///
    /// # Security Warning
    /// The result is NOT trustworthy. Authorization decisions must go through
    /// [`TokenService::is_valid`].
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.sub)
            .ok()
    }

    /// Check that a token is fully valid for an expected subject.
    ///
    /// On top of signature and expiry verification, the embedded subject must
    /// equal the expected one, so a valid token cannot be replayed against a
    /// different identity.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.validate(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(e) => {
                tracing::debug!("Token validation failed: {}", e);
                false
            }
        }
    }
}
