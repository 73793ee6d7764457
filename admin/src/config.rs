// admin/src/config.rs

use std::env;
use std::path::PathBuf;

use backoffice::{AdminError, Result};
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL of the remote back-office API, configured once.
  pub api_base_url: String,
  /// Where the session tokens live between invocations.
  pub token_file: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let api_base_url =
      env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

    let token_file = match env::var("TOKEN_FILE") {
      Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
      _ => {
        let home = env::var("HOME")
          .map_err(|_| AdminError::Config("Neither TOKEN_FILE nor HOME is set".to_string()))?;
        PathBuf::from(home).join(".backoffice-tokens.json")
      }
    };

    tracing::debug!(%api_base_url, token_file = %token_file.display(), "Configuration loaded.");
    Ok(AppConfig {
      api_base_url,
      token_file,
    })
  }
}
