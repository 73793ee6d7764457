// tests/session_tests.rs

use backoffice::{ApiClient, Session};
use serial_test::serial;
use std::path::PathBuf;

fn temp_token_file(tag: &str) -> PathBuf {
  let mut path = std::env::temp_dir();
  path.push(format!("backoffice-session-{}-{}.json", tag, std::process::id()));
  path
}

#[test]
fn in_memory_session_starts_signed_out() {
  let session = Session::in_memory();
  assert!(!session.is_signed_in());
  assert!(session.access_token().is_none());
}

#[test]
#[serial]
fn tokens_survive_a_reload_from_the_store_file() {
  let path = temp_token_file("reload");
  let _ = std::fs::remove_file(&path);

  let session = Session::with_store_file(path.clone()).unwrap();
  session
    .store("access-abc".to_string(), Some("refresh-def".to_string()))
    .unwrap();

  // A second instance (a later CLI invocation) picks the tokens up.
  let reloaded = Session::with_store_file(path.clone()).unwrap();
  assert_eq!(reloaded.access_token().as_deref(), Some("access-abc"));

  std::fs::remove_file(&path).unwrap();
}

#[test]
#[serial]
fn sign_out_clears_only_the_access_token() {
  let path = temp_token_file("signout");
  let _ = std::fs::remove_file(&path);

  let session = Session::with_store_file(path.clone()).unwrap();
  session
    .store("access-abc".to_string(), Some("refresh-def".to_string()))
    .unwrap();
  session.clear().unwrap();
  assert!(!session.is_signed_in());

  // The refresh token stays in the store file.
  let raw = std::fs::read_to_string(&path).unwrap();
  assert!(raw.contains("refresh-def"));
  assert!(!raw.contains("access-abc"));

  std::fs::remove_file(&path).unwrap();
}

#[test]
#[serial]
fn missing_store_file_is_not_an_error() {
  let path = temp_token_file("missing");
  let _ = std::fs::remove_file(&path);
  let session = Session::with_store_file(path).unwrap();
  assert!(!session.is_signed_in());
}

#[tokio::test]
async fn signed_out_current_user_never_touches_the_network() {
  // The base URL resolves nowhere; the call must short-circuit on the
  // empty session before any request is made.
  let client = ApiClient::new("http://127.0.0.1:1", Session::in_memory()).unwrap();
  let user = client.current_user().await.unwrap();
  assert!(user.is_none());
}
