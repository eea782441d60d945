//! Token verification utilities library
//!
//! Provides reusable bearer-token infrastructure for services:
//! - Authorization header parsing (`<Scheme> <token>`)
//! - JWT token signing and verification
//!
//! Each service defines its own ports and adapts these implementations.
//!
//! # Examples
//!
//! ## Authorization Header
//! ```
//! use auth::BearerScheme;
//!
//! let scheme = BearerScheme::default();
//! let credential = scheme.parse(Some("Bearer abc.def.ghi")).unwrap();
//! assert_eq!(credential.token(), "abc.def.ghi");
//! assert!(scheme.parse(Some("Token abc")).is_err());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("http://example.org/id/user/alice", Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, claims.sub);
//! ```

pub mod bearer;
pub mod jwt;

// Re-export commonly used items
pub use bearer::BearerCredential;
pub use bearer::BearerScheme;
pub use bearer::CredentialError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
