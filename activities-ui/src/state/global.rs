//! Global UI State
//!
//! Reactive state shared by the mounted views, using Leptos signals.

use leptos::*;

use super::message::{MessageSlot, Severity, MESSAGE_TIMEOUT_MS};
use super::plan::RenderPlan;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Outcome of the most recent load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Copy)]
pub struct UiState {
    /// Plan from the last successful fetch
    pub plan: RwSignal<RenderPlan>,
    /// Drives what the list container shows
    pub status: RwSignal<LoadStatus>,
    /// The `#message` slot
    pub message: RwSignal<MessageSlot>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            plan: create_rw_signal(RenderPlan::default()),
            status: create_rw_signal(LoadStatus::Loading),
            message: create_rw_signal(MessageSlot::default()),
        }
    }

    /// Replace the list and options with a fresh plan
    pub fn apply_plan(&self, plan: RenderPlan) {
        self.plan.set(plan);
        self.status.set(LoadStatus::Loaded);
    }

    /// Replace the list with the load failure notice
    pub fn mark_load_failed(&self) {
        self.status.set(LoadStatus::Failed);
    }

    /// Show a message (auto-hides after timeout)
    pub fn show_message(&self, text: &str, severity: Severity) {
        let Some(generation) = self.message.try_update(|slot| slot.show(text, severity)) else {
            return;
        };

        let message_signal = self.message;
        gloo_timers::callback::Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            message_signal.update(|slot| {
                slot.expire(generation);
            });
        })
        .forget();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
