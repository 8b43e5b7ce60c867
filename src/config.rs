//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON seed fixture
    pub seed_path: PathBuf,
    /// Optional override for the seed's current user id
    pub current_user_id: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            seed_path: PathBuf::from("data/seed.json"),
            current_user_id: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            seed_path: env::var("SEED_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/seed.json")),
            current_user_id: env::var("CURRENT_USER_ID").ok().filter(|v| !v.is_empty()),
        }
    }
}
