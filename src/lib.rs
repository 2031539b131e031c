//! # GraphGrid SDK
//!
//! Typed async client for the GraphGrid config, security and nlp services.
//! Calls are described by data-only api descriptors and executed through an
//! authenticated executor that owns the session's bearer token: it fetches
//! the token on demand, tracks its expiry and recovers once from a `401`
//! caused by a stale token.
//!
//! Modules:
//! - `api` — endpoint descriptors and the request builder
//! - `auth` — credentials, token acquisition, authenticated execution
//! - `cache` — the token and its ledger
//! - `client` — per-service clients and the `GraphGridSdk` session
//! - `config` — YAML config, validation and credentials bootstrap
//! - `pipeline` — NMT train-and-promote pipeline

pub mod api;
pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod messages;
pub mod observability;
pub mod pipeline;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::sdk::GraphGridSdk;
pub use crate::config::settings::SdkConfig;
pub use crate::error::{SdkError, TransportError};
