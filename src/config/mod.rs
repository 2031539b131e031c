pub mod bootstrap;
pub mod loader;
pub mod settings;
pub mod validator;
