//! API Access
//!
//! Transport for the activities REST API.

pub mod client;
pub mod error;

pub use client::{ActivitiesApi, HttpApi};
pub use error::ApiError;
