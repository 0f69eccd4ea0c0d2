//! Environment configuration
//!
//! `.env` files are loaded from the current directory, then
//! `~/.lightbnb/.env`. Variables already set in the environment win.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the lightbnb config directory path (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

/// Load environment variables from .env files.
///
/// Runs before tracing is initialised (so `RUST_LOG` can come from a
/// `.env`); returns the files loaded, highest priority first, for the
/// caller to log.
pub fn load_dotenv() -> Result<Vec<PathBuf>> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            // dotenvy doesn't overwrite existing vars
            dotenvy::from_path(&env_file)
                .with_context(|| format!("Failed to load {}", env_file.display()))?;
            loaded_from.push(env_file);
        }
    }

    Ok(loaded_from)
}

/// Resolve the database URL from an explicit argument or `DATABASE_URL`.
pub fn database_url(explicit: Option<String>) -> Result<String> {
    explicit
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.lightbnb/.env")
}
