pub mod config_client;
pub mod nlp_client;
pub mod sdk;
