//! Activity Options Component
//!
//! Option set of the `#activity` select.

use leptos::*;

/// First option; its empty value fails the signup presence check
pub const SELECT_PROMPT: &str = "-- Select an activity --";

/// Prompt plus one option per activity.
///
/// Options are keyed by name so a re-render keeps the current selection
/// when the selected activity still exists.
#[component]
pub fn ActivityOptions(
    #[prop(into)]
    options: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <option value="">{SELECT_PROMPT}</option>
        <For
            each=move || options.get()
            key=|name| name.clone()
            children=|name| {
                let label = name.clone();
                view! { <option value=name>{label}</option> }
            }
        />
    }
}
