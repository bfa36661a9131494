//! Authentication primitives
//!
//! Reusable building blocks for credential-based authentication:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (HS256 JWT) with a fixed validity window
//!
//! The service layer owns identities and persistence; this crate only knows
//! about plaintext/digest pairs and subject strings.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue("alice@example.com").unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! assert!(tokens.is_valid(&token, "alice@example.com"));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenService;
