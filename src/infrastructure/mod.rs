// src/infrastructure/mod.rs
pub mod clipboard;
pub mod config;
pub mod json_store;

pub use clipboard::SystemClipboard;
pub use config::Config;
pub use json_store::JsonStore;
