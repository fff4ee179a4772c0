//! Handler functions for config CLI commands.
//!
//! Implements the `folium config` subcommands (`path`, `show`, `init`)
//! against [`CatalogConfig`].

use std::path::Path;

use folium_catalog::config::DEFAULT_CONFIG_PATH;
use folium_catalog::CatalogConfig;

use crate::cli::ConfigAction;
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config_path),
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref().or(config_path), force)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the config file path that `serve` would read.
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `folium config init` to create it)");
    }
    Ok(())
}

/// Print the active configuration, defaults and overrides applied, as TOML.
pub fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = CatalogConfig::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&Path>, force: bool) -> Result<()> {
    let path = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

    if path.exists() && !force {
        return Err(Error::usage(format!(
            "config file already exists at {}; use --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let config = CatalogConfig::default();
    std::fs::write(path, config.to_toml_string()?)?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
