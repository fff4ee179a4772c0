//! # folium-catalog
//!
//! HTTP catalog service for the Folium portfolio platform.
//!
//! This crate provides the read-only project catalog:
//! - Immutable, validated in-memory collection ([`Catalog`])
//! - `GET /api/projects` JSON endpoint plus health and static files
//! - Single-origin CORS and request tracing
//! - TOML configuration with environment overrides

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{Error, Result};
