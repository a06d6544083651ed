pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod play_store;
pub mod session;
pub mod source;
