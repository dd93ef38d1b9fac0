pub mod config;
pub mod constants;
pub mod conversation;
pub mod message;
