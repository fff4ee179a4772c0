//! # folium-browser
//!
//! Headless project browser for the Folium portfolio platform.
//!
//! This crate implements the browsing experience over a catalog of project
//! records, without any rendering:
//! - One startup fetch through a pluggable [`ProjectSource`]
//! - Local view state: pagination, detail selection, tab switching
//! - Render models ([`PageView`], [`DetailView`]) and badge styling
//! - A guarded async [`BrowserSession`] for mount/teardown lifecycles

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod badge;
pub mod error;
mod proptests;
pub mod session;
pub mod source;
pub mod state;
pub mod view;

pub use badge::{badge_for, TechBadge};
pub use error::{Error, Result};
pub use session::BrowserSession;
pub use source::{CatalogClient, ProjectSource};
pub use state::{BrowserState, FetchStatus, PAGE_SIZE};
pub use view::{CardView, DetailView, PageView};
