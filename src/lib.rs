//! # Activity Signup
//!
//! Extracurricular activity signup board. This crate is the HTTP API the
//! activities UI (`activities-ui/`) talks to, and the static host that serves
//! the built UI.
//!
//! ## Modules
//!
//! - [`catalog`]: In-memory, insertion-ordered activity catalog and rosters
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_signup::{serve, ActivityCatalog, AppState, Config};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let catalog = Arc::new(ActivityCatalog::with_defaults());
//!
//!     serve(AppState::new(catalog, config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;

pub use api::{build_router, serve, ApiError, AppState};

pub use catalog::{
    Activity, ActivityCatalog, ActivityCollection, ActivityInfo, CatalogError, CatalogResult,
};

pub use config::{CatalogConfig, Config, ConfigError, LoggingConfig, ServerConfig};
