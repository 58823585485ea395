pub mod arguments;
pub mod avatars;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod logger;
pub mod progress;
pub mod stats;
pub mod types;
pub mod webserver;
