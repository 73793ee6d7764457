// admin/src/main.rs

// Declare modules for the application
mod cli;
mod commands;
mod config;
mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use backoffice::{ApiClient, Result, Session};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::WARN) // Default level; RUST_LOG overrides
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      // Full error to the log, one line to the operator (the toast).
      tracing::error!(error = %err, "Command failed.");
      eprintln!("✗ {}", err.user_message());
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> Result<()> {
  let config = AppConfig::from_env()?;
  let session = Session::with_store_file(config.token_file.clone())?;
  let client = ApiClient::new(config.api_base_url.clone(), session)?;

  match cli.command {
    Command::Login { email, password } => commands::auth::login(&client, &email, &password).await,
    Command::Logout => commands::auth::logout(&client),
    Command::Whoami => commands::auth::whoami(&client).await,
    Command::Brand { action } => commands::brands::run(&client, action).await,
    Command::Category { action } => commands::categories::run(&client, action).await,
    Command::Supplier { action } => commands::suppliers::run(&client, action).await,
    Command::Variant { action } => commands::variants::run(&client, action).await,
    Command::Product { action } => commands::products::run(&client, action).await,
    Command::Order { action } => commands::orders::run(&client, action).await,
    Command::Dashboard { year, month } => commands::dashboard::run(&client, year, month).await,
  }
}
