//! Argument definitions for the `folium` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Catalog base URL used by client commands when none is given, matching
/// the service's default bind address.
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:4170";

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "folium", about = "Folium portfolio toolkit", version)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The `folium` subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the catalog HTTP service
    Serve,
    /// List one page of projects from a running catalog
    Projects {
        /// 1-based page to display
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Base URL of the catalog service
        #[arg(long, env = "FOLIUM_URL", default_value = DEFAULT_CATALOG_URL)]
        url: String,
    },
    /// Show one project in detail
    Show {
        /// Project identifier
        id: u32,

        /// Tab to open (overview, challenges, outcomes)
        #[arg(short, long)]
        tab: Option<String>,

        /// Base URL of the catalog service
        #[arg(long, env = "FOLIUM_URL", default_value = DEFAULT_CATALOG_URL)]
        url: String,
    },
    /// Manage the configuration file
    Config {
        /// Config operation to run.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// The `folium config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the active configuration as TOML
    Show,
    /// Create a default configuration file
    Init {
        /// Destination file (defaults to the standard config path)
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
