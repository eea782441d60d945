pub mod jwt;

pub use jwt::JwtSubjectVerifier;
