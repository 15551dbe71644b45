//! Activity Catalog Store
//!
//! In-memory catalog shared by all request handlers. Reads take a snapshot;
//! roster changes hold the write lock for the whole check-then-mutate step.

use std::path::Path;
use tokio::sync::RwLock;

use super::error::{CatalogError, CatalogResult};
use super::seed::default_activities;
use super::types::ActivityCollection;

/// Thread-safe activity catalog
pub struct ActivityCatalog {
    activities: RwLock<ActivityCollection>,
}

impl ActivityCatalog {
    pub fn new(activities: ActivityCollection) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Catalog seeded with the built-in school activities
    pub fn with_defaults() -> Self {
        Self::new(default_activities())
    }

    /// Load a catalog from a JSON file shaped like the `GET /activities` body
    pub fn from_seed_file(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::SeedIo {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let activities: ActivityCollection =
            serde_json::from_str(&content).map_err(|e| CatalogError::SeedParse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        tracing::info!(
            path = ?path,
            activities = activities.len(),
            "Loaded activity seed file"
        );

        Ok(Self::new(activities))
    }

    /// Snapshot of all activities in catalog order
    pub async fn list(&self) -> ActivityCollection {
        self.activities.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Add `email` to the roster of `activity`.
    ///
    /// Returns the confirmation message sent back to the client.
    pub async fn signup(&self, activity: &str, email: &str) -> CatalogResult<String> {
        let email = normalize_email(email)?;

        let mut activities = self.activities.write().await;
        let info = activities
            .get_mut(activity)
            .ok_or_else(|| CatalogError::ActivityNotFound {
                activity: activity.to_string(),
            })?;

        if info.has_participant(email) {
            return Err(CatalogError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if info.is_full() {
            return Err(CatalogError::ActivityFull {
                activity: activity.to_string(),
            });
        }

        info.participants.push(email.to_string());

        tracing::info!(
            activity = %activity,
            email = %email,
            spots_left = info.spots_left(),
            "Participant signed up"
        );

        Ok(format!("Signed up {} for {}", email, activity))
    }

    /// Remove `email` from the roster of `activity`
    pub async fn unregister(&self, activity: &str, email: &str) -> CatalogResult<String> {
        let email = normalize_email(email)?;

        let mut activities = self.activities.write().await;
        let info = activities
            .get_mut(activity)
            .ok_or_else(|| CatalogError::ActivityNotFound {
                activity: activity.to_string(),
            })?;

        let position = info
            .participants
            .iter()
            .position(|p| p.eq_ignore_ascii_case(email))
            .ok_or_else(|| CatalogError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        let removed = info.participants.remove(position);

        tracing::info!(activity = %activity, email = %removed, "Participant removed");

        Ok(format!("Removed {} from {}", removed, activity))
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn normalize_email(email: &str) -> CatalogResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CatalogError::MissingEmail);
    }
    Ok(email)
}
