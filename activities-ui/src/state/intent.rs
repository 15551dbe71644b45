//! User Intents
//!
//! What a user action asks the dispatcher to do. Intents carry plain values
//! read at the moment of the action; nothing is looked up later.

/// Work item for the dispatcher
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Re-fetch and re-render the activity list
    Refresh,
    /// Signup form was submitted
    Signup(SignupForm),
    /// A participant's remove control was clicked
    RemoveParticipant(RemovalTarget),
}

/// Raw signup form values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// Signup form values that passed the presence check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// Trim the email and require both fields. No format validation.
    pub fn validate(&self) -> Option<SignupRequest> {
        let email = self.email.trim();
        if email.is_empty() || self.activity.is_empty() {
            return None;
        }
        Some(SignupRequest {
            email: email.to_string(),
            activity: self.activity.clone(),
        })
    }
}

/// The (activity, participant) pair a remove control acts on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Question shown before removing
    pub fn confirm_prompt(&self) -> String {
        format!("Remove {} from {}?", self.email, self.activity)
    }

    /// Accessible label for the remove control
    pub fn control_label(&self) -> String {
        format!("Remove {} from {}", self.email, self.activity)
    }
}
