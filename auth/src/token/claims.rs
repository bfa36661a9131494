use serde::Deserialize;
use serde::Serialize;

/// Payload of an issued bearer token.
///
/// Self-contained: validity is purely a function of the signature and the
/// current time. The payload is signed but not encrypted, so it must never
/// carry secrets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject - the email the token was issued for
    pub sub: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl TokenClaims {
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let claims = TokenClaims {
            sub: "alice@example.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
