// core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// The error taxonomy for the back office. Every page-level failure
/// collapses into one of these variants; the user-facing message is
/// whatever `Display` renders.
#[derive(Debug, Error)]
pub enum AdminError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// The remote API answered with a non-success envelope.
  #[error("API Error (status {status}): {message}")]
  Api { status: u16, message: String },

  /// Checkout stage violations (e.g. confirming an order whose QR was
  /// never displayed).
  #[error("Checkout Error: {0}")]
  Checkout(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("HTTP Error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("Decode Error: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Handlers occasionally use `?` on functions returning anyhow::Result;
// fold those into Internal unless they were wrapping an AdminError.
impl From<AnyhowError> for AdminError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<AdminError>() {
      Ok(admin_err) => admin_err,
      Err(other) => AdminError::Internal(other.to_string()),
    }
  }
}

impl AdminError {
  /// The one-line string shown to the operator, the way the original
  /// dashboard surfaced failures as toasts. Transport-level errors get
  /// a generic fallback; everything else renders its own message.
  pub fn user_message(&self) -> String {
    match self {
      AdminError::Http(_) => "Request failed. Please try again.".to_string(),
      AdminError::Decode(_) => "Unexpected response from the server.".to_string(),
      other => other.to_string(),
    }
  }
}

/// Result alias used throughout the crate.
pub type Result<T, E = AdminError> = std::result::Result<T, E>;
