// core/src/api/auth.rs

use serde::{Deserialize, Serialize};

use super::{ApiClient, Envelope};
use crate::error::{AdminError, Result};

/// Body of `POST /auth/login`. The tokens come back bare, outside the
/// usual envelope.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
  #[serde(rename = "accessToken")]
  pub access_token: Option<String>,
  #[serde(rename = "refreshToken")]
  pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
  #[serde(rename = "_id", default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
  email: &'a str,
  password: &'a str,
  device: &'a str,
}

impl ApiClient {
  /// Sign in with email and password; on success the tokens are stored
  /// in the shared session.
  pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
    let body = LoginRequest {
      email,
      password,
      device: "cli",
    };
    let response = self
      .send(self.http().post(self.url("/auth/login")).json(&body))
      .await?;
    let login: LoginResponse = response.json().await?;

    let Some(access_token) = login.access_token else {
      return Err(AdminError::Auth("No access token received".to_string()));
    };
    self.session().store(access_token, login.refresh_token)?;
    tracing::info!(%email, "Signed in.");
    Ok(())
  }

  /// `GET /auth/me`. Returns `None` without ever touching the network
  /// when no token is stored, the way the original client short-circuited
  /// on an empty localStorage.
  pub async fn current_user(&self) -> Result<Option<AuthUser>> {
    if !self.session().is_signed_in() {
      return Ok(None);
    }
    let response = self.send(self.http().get(self.url("/auth/me"))).await?;
    let envelope: Envelope<AuthUser> = response.json().await?;
    envelope.into_data("current user").map(Some)
  }

  /// Drops the stored access token.
  pub fn sign_out(&self) -> Result<()> {
    self.session().clear()?;
    tracing::info!("Signed out.");
    Ok(())
  }
}
