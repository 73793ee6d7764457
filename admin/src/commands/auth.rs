// admin/src/commands/auth.rs

use backoffice::{ApiClient, Result};

use crate::render;

pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
  client.sign_in(email, password).await?;
  render::success(&format!("Signed in as {}", email));
  Ok(())
}

pub fn logout(client: &ApiClient) -> Result<()> {
  client.sign_out()?;
  render::success("Signed out");
  Ok(())
}

pub async fn whoami(client: &ApiClient) -> Result<()> {
  match client.current_user().await? {
    Some(user) => {
      println!(
        "{} <{}>",
        user.name.unwrap_or_else(|| "(unnamed)".to_string()),
        user.email.unwrap_or_else(|| "-".to_string())
      );
    }
    None => println!("Not signed in."),
  }
  Ok(())
}
