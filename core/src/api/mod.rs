// core/src/api/mod.rs

//! The HTTP boundary: a typed client over the remote back-office API.
//!
//! Most endpoints answer with a `{ statusCode, data }` envelope; a few
//! (order detail, the stats reports) return their payload bare. Both
//! shapes are handled here so the per-resource modules stay small.
//!
//! One request per user action, no retries, no cancellation — failures
//! surface as a single [`AdminError`] that the front-end renders as a
//! one-line message.

mod auth;
mod brands;
mod categories;
mod orders;
mod products;
mod suppliers;
mod variants;

pub use auth::{AuthUser, LoginResponse};
pub use orders::{OrderPage, QrResponse};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AdminError, Result};
use crate::forms::Attachment;
use crate::session::Session;

/// The standard `{ statusCode, data }` response wrapper. `message` and
/// `total` only appear on some endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
  #[serde(rename = "statusCode")]
  pub status_code: u16,
  pub data: Option<T>,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub total: Option<u64>,
}

impl<T> Envelope<T> {
  /// Unwrap the payload, treating any non-2xx `statusCode` as an API
  /// error carrying the server message when present.
  pub fn into_data(self, what: &str) -> Result<T> {
    if !(200..300).contains(&self.status_code) {
      return Err(AdminError::Api {
        status: self.status_code,
        message: self
          .message
          .unwrap_or_else(|| format!("Request for {} failed", what)),
      });
    }
    self
      .data
      .ok_or_else(|| AdminError::NotFound(format!("{} not found", what)))
  }
}

/// Client for the remote REST API. Cheap to clone; the base URL is
/// configured once and the bearer token comes from the shared
/// [`Session`] on every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
  session: Session,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    let http = reqwest::Client::builder().build()?;
    tracing::debug!(%base_url, "API client configured.");
    Ok(ApiClient {
      http,
      base_url,
      session,
    })
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match self.session.access_token() {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  /// Send a prepared request and map transport-level failures. A
  /// non-success HTTP status becomes an `Api` error with whatever
  /// `message` the body carried.
  pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
    let response = self.authorize(request).send().await?;
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    #[derive(Deserialize)]
    struct ErrorBody {
      #[serde(default)]
      message: Option<serde_json::Value>,
    }

    let message = match response.json::<ErrorBody>().await {
      Ok(body) => body
        .message
        .map(|value| match value {
          serde_json::Value::String(text) => text,
          other => other.to_string(),
        })
        .unwrap_or_else(|| status.to_string()),
      Err(_) => status.to_string(),
    };
    tracing::warn!(status = status.as_u16(), %message, "API request failed.");
    Err(AdminError::Api {
      status: status.as_u16(),
      message,
    })
  }

  /// GET an enveloped payload.
  pub(crate) async fn get_enveloped<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
    let response = self.send(self.http.get(self.url(path))).await?;
    let envelope: Envelope<T> = response.json().await?;
    envelope.into_data(what)
  }

  /// GET a bare (non-enveloped) payload.
  pub(crate) async fn get_bare<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let response = self.send(self.http.get(self.url(path))).await?;
    Ok(response.json().await?)
  }

  /// DELETE, expecting nothing useful back.
  pub(crate) async fn delete(&self, path: &str) -> Result<()> {
    self.send(self.http.delete(self.url(path))).await?;
    Ok(())
  }

  /// POST or PUT a multipart form and check the envelope status.
  pub(crate) async fn submit_multipart(
    &self,
    method: reqwest::Method,
    path: &str,
    form: reqwest::multipart::Form,
    what: &str,
  ) -> Result<()> {
    let request = self
      .http
      .request(method, self.url(path))
      .multipart(form);
    let response = self.send(request).await?;
    let envelope: Envelope<serde_json::Value> = response.json().await?;
    // Some create endpoints return the new document, some return
    // nothing; only the statusCode matters here.
    match envelope.into_data(what) {
      Ok(_) => Ok(()),
      Err(AdminError::NotFound(_)) => Ok(()),
      Err(err) => Err(err),
    }
  }

  pub(crate) fn http(&self) -> &reqwest::Client {
    &self.http
  }
}

/// Build a multipart file part from an in-memory attachment.
pub(crate) fn file_part(attachment: Attachment) -> Result<reqwest::multipart::Part> {
  let part = reqwest::multipart::Part::bytes(attachment.bytes)
    .file_name(attachment.file_name)
    .mime_str(&attachment.mime)?;
  Ok(part)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Brand;

  #[test]
  fn envelope_unwraps_success() {
    let raw = r#"{"statusCode":200,"data":[{"_id":"b1","name":"Acme","description":"","logo":"","slug":"acme"}]}"#;
    let envelope: Envelope<Vec<Brand>> = serde_json::from_str(raw).unwrap();
    let brands = envelope.into_data("brands").unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].id, "b1");
  }

  #[test]
  fn envelope_rejects_non_success_status_with_server_message() {
    let raw = r#"{"statusCode":404,"message":"Brand not found"}"#;
    let envelope: Envelope<Brand> = serde_json::from_str(raw).unwrap();
    match envelope.into_data("brand") {
      Err(AdminError::Api { status, message }) => {
        assert_eq!(status, 404);
        assert_eq!(message, "Brand not found");
      }
      other => panic!("expected Api error, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn envelope_missing_data_is_not_found() {
    let raw = r#"{"statusCode":200}"#;
    let envelope: Envelope<Brand> = serde_json::from_str(raw).unwrap();
    assert!(matches!(
      envelope.into_data("brand"),
      Err(AdminError::NotFound(_))
    ));
  }

  #[test]
  fn envelope_carries_total_for_paginated_lists() {
    let raw = r#"{"statusCode":200,"data":[],"total":42}"#;
    let envelope: Envelope<Vec<Brand>> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.total, Some(42));
  }
}
