//! Catalog Types
//!
//! Activity records and the insertion-ordered collection served by
//! `GET /activities`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Metadata and roster for a single activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityInfo {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityInfo {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder helper for seeding an initial roster
    pub fn participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = emails.into_iter().map(Into::into).collect();
        self
    }

    /// Remaining capacity, clamped at zero
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.eq_ignore_ascii_case(email))
    }
}

/// A named activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub info: ActivityInfo,
}

/// Activities keyed by name, kept in insertion order.
///
/// Serializes as a JSON object whose key order matches the catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, replacing an existing one in place
    pub fn insert(&mut self, name: impl Into<String>, info: ActivityInfo) {
        let name = name.into();
        match self.activities.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.info = info,
            None => self.activities.push(Activity { name, info }),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, info: ActivityInfo) -> Self {
        self.insert(name, info);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ActivityInfo> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.info)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityInfo> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .map(|a| &mut a.info)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for ActivityCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.info)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut collection = ActivityCollection::new();
                while let Some((name, info)) = access.next_entry::<String, ActivityInfo>()? {
                    if collection.get(&name).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate activity '{}'",
                            name
                        )));
                    }
                    collection.insert(name, info);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
