/// Application settings loaded from config.toml
pub mod app;

/// Customer identity mapping from environment variables
pub mod users;
