pub mod exemption;
pub mod gate;
pub mod security;
pub mod token;
pub mod user;
