//! Folium CLI
//!
//! Entry point for the `folium` binary.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folium_cli::cli::{Args, Command};
use folium_cli::{commands, config_handlers};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match args.command {
        Command::Serve => commands::cmd_serve(args.config.as_deref()).await?,
        Command::Projects { page, url } => commands::cmd_projects(page, &url).await?,
        Command::Show { id, tab, url } => commands::cmd_show(id, tab.as_deref(), &url).await?,
        Command::Config { action } => {
            config_handlers::handle_config_command(args.config.as_deref(), action)?;
        }
    }

    Ok(())
}
