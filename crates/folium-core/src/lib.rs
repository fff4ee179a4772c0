//! # folium-core
//!
//! Shared types for the Folium portfolio platform.
//!
//! This crate defines the data model the catalog service and the project
//! browser agree on:
//! - [`Project`] / [`ProjectId`]: portfolio records and their identifiers
//! - [`TabCategory`]: the fixed detail-tab categories
//! - [`Error`] / [`Result`]: shared error types
//! - [`normalize_tech`]: canonical technology-name form for lookups
//!
//! It has no internal Folium dependencies (dependency level 0).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod normalize;
pub mod project;
pub mod tabs;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use normalize::normalize_tech;
pub use project::{Project, ProjectId};
pub use tabs::TabCategory;
