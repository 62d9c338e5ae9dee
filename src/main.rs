use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use toplines::app::{App, AppEvent};
use toplines::config::{Config, API_KEY_ENV};
use toplines::feed::HeadlinesClient;
use toplines::ui;

/// Get the config file path (~/.config/toplines/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("toplines")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "toplines", about = "Terminal top-headlines browser")]
struct Args {
    /// Two-letter country code (overrides config file)
    #[arg(long)]
    country: Option<String>,

    /// Path to a config file (defaults to ~/.config/toplines/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(country) = args.country {
        config.country = country;
    }

    let Some(api_key) = config.resolve_api_key() else {
        eprintln!("Error: no API key configured.");
        eprintln!();
        eprintln!("Set the {} environment variable, or add", API_KEY_ENV);
        eprintln!("  api_key = \"...\"");
        eprintln!("to {}.", config_path.display());
        std::process::exit(1);
    };

    let client = HeadlinesClient::new(&config.endpoint, &config.country, api_key)
        .context("Failed to build headlines client")?;

    let mut app = App::new(client);

    // Event channel for background fetch completions
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
