//! UI Components
//!
//! Leptos components mounted into the page's existing anchors.

pub mod activity_card;
pub mod activity_list;
pub mod activity_options;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use activity_options::ActivityOptions;
