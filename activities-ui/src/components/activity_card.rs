//! Activity Card Component
//!
//! One card per activity with its participants block.

use leptos::*;

use crate::state::intent::RemovalTarget;
use crate::state::plan::{CardPlan, Participants, NO_PARTICIPANTS};

/// Activity card component
#[component]
pub fn ActivityCard(
    /// Card contents
    card: CardPlan,
    /// Fired with the row's (activity, email) pair
    on_remove: Callback<RemovalTarget>,
) -> impl IntoView {
    let availability = card.availability();

    let rows = match card.participants {
        Participants::Placeholder => view! {
            <li class="muted">{NO_PARTICIPANTS}</li>
        }
        .into_view(),
        Participants::Rows(targets) => targets
            .into_iter()
            .map(|target| view! { <ParticipantRow target=target on_remove=on_remove /> })
            .collect_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>

            <div class="participants-section">
                <div class="participants-title">"Participants"</div>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(target: RemovalTarget, on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let label = target.control_label();
    let email = target.email.clone();

    view! {
        <li class="participant-item">
            <span class="participant-email">{email}</span>
            <button
                type="button"
                class="delete-btn"
                title=label.clone()
                aria-label=label
                on:click=move |_| on_remove.call(target.clone())
            >
                "✕"
            </button>
        </li>
    }
}
