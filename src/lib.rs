pub mod advisor;
pub mod config;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod render;
pub mod server;
