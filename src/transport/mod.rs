pub mod executor;
pub mod request;
