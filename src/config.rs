//! Configuration management for the APOD gallery.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The only settings the program needs are the APOD
//! endpoint and the NASA API key, both of which have working defaults so the
//! gallery runs without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Public APOD endpoint.
pub const DEFAULT_APOD_API_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Shared demo key accepted by api.nasa.gov, heavily rate limited.
pub const DEFAULT_APOD_API_KEY: &str = "DEMO_KEY";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `apodcli/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/apodcli/.env`
/// - macOS: `~/Library/Application Support/apodcli/.env`
/// - Windows: `%LOCALAPPDATA%/apodcli/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or if an
/// existing `.env` file cannot be parsed. A missing file is not an error since
/// every setting has a default.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the user's `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("apodcli/.env");
    path
}

/// Returns the APOD endpoint.
///
/// Reads `APOD_API_URL`, falling back to [`DEFAULT_APOD_API_URL`].
///
/// # Example
///
/// ```
/// let url = apod_api_url(); // e.g., "https://api.nasa.gov/planetary/apod"
/// ```
pub fn apod_api_url() -> String {
    env::var("APOD_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APOD_API_URL.to_string())
}

/// Returns the NASA API key sent as `api_key`.
///
/// Reads `APOD_API_KEY`, falling back to [`DEFAULT_APOD_API_KEY`].
pub fn apod_api_key() -> String {
    env::var("APOD_API_KEY")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APOD_API_KEY.to_string())
}
