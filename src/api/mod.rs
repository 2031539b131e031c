//! Api descriptors, one constructor per remote endpoint, and the builder
//! that turns them into wire-level requests.

pub mod config_api;
pub mod descriptor;
pub mod nlp_api;
pub mod request_builder;
pub mod security_api;
