//! Render Plan
//!
//! Turns a fetched [`ActivityCollection`] into exactly what the list and the
//! activity select show. Components draw a plan as-is; every fetch produces a
//! fresh plan that replaces the previous one.

use super::intent::RemovalTarget;
use super::model::ActivityCollection;

/// Placeholder row for an activity nobody has joined
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Everything one render draws
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderPlan {
    /// One card per activity, in server order
    pub cards: Vec<CardPlan>,
    /// One select option per activity, same order as `cards`
    pub options: Vec<String>,
}

/// One activity card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPlan {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub participants: Participants,
}

/// Body of a card's participants block
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Participants {
    /// Single "No participants yet" row
    Placeholder,
    /// One removable row per participant, in roster order
    Rows(Vec<RemovalTarget>),
}

impl RenderPlan {
    pub fn from_collection(activities: &ActivityCollection) -> Self {
        let cards: Vec<CardPlan> = activities
            .iter()
            .map(|activity| {
                let participants = activity.info.participants();
                let participants = if participants.is_empty() {
                    Participants::Placeholder
                } else {
                    Participants::Rows(
                        participants
                            .iter()
                            .map(|email| RemovalTarget::new(&activity.name, email))
                            .collect(),
                    )
                };

                CardPlan {
                    name: activity.name.clone(),
                    description: activity.info.description.clone(),
                    schedule: activity.info.schedule.clone(),
                    spots_left: activity.info.spots_left(),
                    participants,
                }
            })
            .collect();

        let options = cards.iter().map(|card| card.name.clone()).collect();

        Self { cards, options }
    }
}

impl CardPlan {
    /// Text after the "Availability:" label
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

impl Participants {
    /// Rows with a remove control
    pub fn row_count(&self) -> usize {
        match self {
            Participants::Placeholder => 0,
            Participants::Rows(rows) => rows.len(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Participants::Placeholder)
    }
}
