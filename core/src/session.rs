// core/src/session.rs

//! The session token store, standing in for the browser's
//! localStorage. Shared between the client and callers via `Arc`, with
//! interior mutability through `parking_lot::RwLock`.
//!
//! Lock guards are blocking and MUST NOT be held across `.await`
//! suspension points; every accessor here copies the data out before
//! returning.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Tokens {
  #[serde(rename = "accessToken")]
  access_token: Option<String>,
  #[serde(rename = "refreshToken")]
  refresh_token: Option<String>,
}

/// Holds the bearer tokens issued by `POST /auth/login`.
///
/// Optionally backed by a token file so separate invocations of the
/// admin binary stay signed in (the browser got this behavior from
/// localStorage for free).
#[derive(Debug, Clone)]
pub struct Session {
  inner: Arc<RwLock<Tokens>>,
  store_path: Option<PathBuf>,
}

impl Session {
  /// An unauthenticated, memory-only session.
  pub fn in_memory() -> Self {
    Session {
      inner: Arc::new(RwLock::new(Tokens::default())),
      store_path: None,
    }
  }

  /// A session persisted to `path`. If the file exists its tokens are
  /// loaded; a missing file simply starts signed out.
  pub fn with_store_file(path: PathBuf) -> Result<Self> {
    let tokens = match std::fs::read_to_string(&path) {
      Ok(raw) => serde_json::from_str(&raw)?,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Tokens::default(),
      Err(err) => return Err(err.into()),
    };
    Ok(Session {
      inner: Arc::new(RwLock::new(tokens)),
      store_path: Some(path),
    })
  }

  pub fn access_token(&self) -> Option<String> {
    self.inner.read().access_token.clone()
  }

  pub fn is_signed_in(&self) -> bool {
    self.inner.read().access_token.is_some()
  }

  /// Stores both tokens, persisting them when a token file is
  /// configured.
  pub fn store(&self, access_token: String, refresh_token: Option<String>) -> Result<()> {
    {
      let mut guard = self.inner.write();
      guard.access_token = Some(access_token);
      guard.refresh_token = refresh_token;
    }
    self.persist()
  }

  /// Drops the access token. The refresh token is kept, matching the
  /// original sign-out behavior.
  pub fn clear(&self) -> Result<()> {
    self.inner.write().access_token = None;
    self.persist()
  }

  fn persist(&self) -> Result<()> {
    let Some(path) = &self.store_path else {
      return Ok(());
    };
    let snapshot = self.inner.read().clone();
    let raw = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, raw)?;
    tracing::debug!(path = %path.display(), "Session tokens persisted.");
    Ok(())
  }
}

impl Default for Session {
  fn default() -> Self {
    Self::in_memory()
  }
}
