//! Transient Message Slot
//!
//! State behind the `#message` area. Each `show` bumps a generation number;
//! an auto-hide timer only hides the message it was armed for.

/// How long a message stays visible after the latest `show`
pub const MESSAGE_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageSlot {
    text: String,
    severity: Option<Severity>,
    visible: bool,
    generation: u64,
}

impl MessageSlot {
    /// Replace the current message and make it visible.
    ///
    /// Returns the generation to hand to the auto-hide timer.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.text = text.into();
        self.severity = Some(severity);
        self.visible = true;
        self.generation
    }

    /// Hide the message if `generation` is still the latest one.
    ///
    /// Only toggles visibility; the text stays in place.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class attribute for the message element
    pub fn class_name(&self) -> String {
        match (self.severity, self.visible) {
            (None, _) => "hidden".to_string(),
            (Some(severity), true) => format!("message {}", severity.class()),
            (Some(severity), false) => format!("message {} hidden", severity.class()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let slot = MessageSlot::default();
        assert!(!slot.is_visible());
        assert_eq!(slot.class_name(), "hidden");
    }

    #[test]
    fn test_show_then_expire() {
        let mut slot = MessageSlot::default();

        let generation = slot.show("Signed up!", Severity::Success);
        assert!(slot.is_visible());
        assert_eq!(slot.class_name(), "message success");

        assert!(slot.expire(generation));
        assert!(!slot.is_visible());
        assert_eq!(slot.text(), "Signed up!");
        assert_eq!(slot.class_name(), "message success hidden");
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        let mut slot = MessageSlot::default();

        let first = slot.show("Signed up!", Severity::Success);
        let second = slot.show("Not found", Severity::Error);

        assert!(!slot.expire(first));
        assert!(slot.is_visible());
        assert_eq!(slot.text(), "Not found");
        assert_eq!(slot.severity(), Some(Severity::Error));

        assert!(slot.expire(second));
        assert!(!slot.is_visible());
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut slot = MessageSlot::default();
        let generation = slot.show("x", Severity::Error);
        assert!(slot.expire(generation));
        assert!(!slot.expire(generation));
    }
}
