pub mod common;

mod messages_decoding;
mod request_building;
mod security_token_service;
mod token_ledger;
