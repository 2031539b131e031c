//! Credentials, token acquisition and the authenticated request executor.

pub mod credentials;
pub mod executor;
pub mod token_service;
