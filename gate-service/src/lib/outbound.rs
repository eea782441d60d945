pub mod repositories;
pub mod verifiers;
