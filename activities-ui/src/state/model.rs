//! Activity Data Model
//!
//! Wire types for `GET /activities`. The collection keeps the key order of
//! the JSON object so cards and options render in server order.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Details for a single activity
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityInfo {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    participants: Option<Vec<String>>,
}

impl ActivityInfo {
    /// Participant emails, empty when the server omitted the list
    pub fn participants(&self) -> &[String] {
        self.participants.as_deref().unwrap_or_default()
    }

    /// Remaining capacity, never negative
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants().len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// A named activity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub info: ActivityInfo,
}

/// Activities in the order the server listed them
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    // A repeated key keeps its first position and takes the later value.
    fn insert(&mut self, name: String, info: ActivityInfo) {
        match self.activities.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.info = info,
            None => self.activities.push(Activity { name, info }),
        }
    }
}

impl FromIterator<(String, ActivityInfo)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, ActivityInfo)>>(iter: I) -> Self {
        let mut collection = ActivityCollection::default();
        for (name, info) in iter {
            collection.insert(name, info);
        }
        collection
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut collection = ActivityCollection::default();
                while let Some((name, info)) = access.next_entry::<String, ActivityInfo>()? {
                    collection.insert(name, info);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

#[cfg(test)]
pub(crate) fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> ActivityInfo {
    ActivityInfo {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: Some(participants.iter().map(|p| p.to_string()).collect()),
    }
}
