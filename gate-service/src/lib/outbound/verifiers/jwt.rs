use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;

use crate::domain::token::errors::VerificationError;
use crate::domain::token::ports::SubjectVerifier;

/// Verifies HS256 JWTs and returns their `sub` claim.
pub struct JwtSubjectVerifier {
    handler: JwtHandler,
}

impl JwtSubjectVerifier {
    pub fn new(handler: JwtHandler) -> Self {
        Self { handler }
    }
}

impl SubjectVerifier for JwtSubjectVerifier {
    fn verify_and_extract_subject(&self, token: &str) -> Result<String, VerificationError> {
        let claims: Claims = self.handler.decode(token).map_err(|e| match e {
            JwtError::TokenExpired => VerificationError::Expired,
            JwtError::MissingClaim(ref claim) if claim == "sub" => {
                VerificationError::MissingSubject
            }
            _ => VerificationError::Rejected(e.to_string()),
        })?;

        claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(VerificationError::MissingSubject)
    }
}
