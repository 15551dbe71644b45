//! State Management
//!
//! Data model, render plans, intents and reactive UI state.

pub mod global;
pub mod intent;
pub mod message;
pub mod model;
pub mod plan;
