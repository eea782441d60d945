//! HS256 JSON Web Tokens: registered claims, signing and verification.

mod claims;
mod errors;
mod handler;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
