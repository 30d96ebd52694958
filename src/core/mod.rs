pub mod card;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod loader;
