//! Activity List Component
//!
//! Contents of `#activities-list`. Every new plan rebuilds all cards.

use leptos::*;

use super::ActivityCard;
use crate::state::global::{LoadStatus, LOADING_TEXT, LOAD_FAILED_TEXT};
use crate::state::intent::RemovalTarget;
use crate::state::plan::RenderPlan;

#[component]
pub fn ActivityList(
    #[prop(into)]
    status: Signal<LoadStatus>,
    #[prop(into)]
    plan: Signal<RenderPlan>,
    on_remove: Callback<RemovalTarget>,
) -> impl IntoView {
    move || match status.get() {
        LoadStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
        LoadStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_view(),
        LoadStatus::Loaded => plan
            .get()
            .cards
            .into_iter()
            .map(|card| view! { <ActivityCard card=card on_remove=on_remove /> })
            .collect_view(),
    }
}
