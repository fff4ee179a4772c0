//! # folium-cli
//!
//! Command-line interface for the Folium portfolio platform.
//!
//! This crate provides the `folium` binary:
//! - `folium serve` runs the catalog HTTP service
//! - `folium projects` lists one page of projects from a running catalog
//! - `folium show` prints one project's detail view
//! - `folium config` manages the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod render;

pub use error::{Error, Result};
