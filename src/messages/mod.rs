//! Typed bodies of the service responses and requests.

pub mod config;
pub mod nlp;
pub mod security;
