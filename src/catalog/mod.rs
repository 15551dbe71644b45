//! Activity Catalog
//!
//! The server-side source of truth for activities and their participant
//! rosters.
//!
//! # Example
//!
//! ```rust,no_run
//! use activity_signup::catalog::ActivityCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = ActivityCatalog::with_defaults();
//!
//!     let message = catalog.signup("Chess Club", "student@example.edu").await?;
//!     println!("{}", message);
//!
//!     for activity in catalog.list().await.iter() {
//!         println!("{}: {} spots left", activity.name, activity.info.spots_left());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use seed::default_activities;
pub use store::ActivityCatalog;
pub use types::{Activity, ActivityCollection, ActivityInfo};
