//! Unsaved-changes guard for the edit page.

use crate::config::{DirtyPolicy, GuardConfig};
use crate::event::UnloadDecision;
use crate::models::{EditField, FormSnapshot, FormValues};

/// Tracks whether the edit form holds edits that have not been submitted.
///
/// With the default [`DirtyPolicy::OnTouch`] the flag only ever goes up on
/// input; typing a field back to its original value does not clear it. Only a
/// submission that passed validation does.
#[derive(Debug, Clone)]
pub struct DirtyStateTracker {
    snapshot: FormSnapshot,
    dirty: bool,
    policy: DirtyPolicy,
    warning: String,
}

impl DirtyStateTracker {
    /// Start tracking from the field values present at page load.
    #[must_use]
    pub fn new(snapshot: FormSnapshot, config: &GuardConfig) -> Self {
        Self {
            snapshot,
            dirty: false,
            policy: config.dirty_policy,
            warning: config.messages.unsaved_changes.clone(),
        }
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub const fn policy(&self) -> DirtyPolicy {
        self.policy
    }

    /// Input event on one of the tracked fields. `current` holds both fields
    /// as they are after the edit.
    pub fn on_input(&mut self, field: EditField, current: &FormValues) {
        let dirty = match self.policy {
            DirtyPolicy::OnTouch => true,
            DirtyPolicy::ValueDiff => !self.snapshot.matches_exact(current),
        };

        if dirty != self.dirty {
            tracing::debug!("Edit form dirty={} after input on {:?}", dirty, field);
        }
        self.dirty = dirty;
    }

    /// The edit form was submitted and passed validation.
    pub fn mark_saved(&mut self) {
        if self.dirty {
            tracing::debug!("Edit form saved, clearing dirty flag");
        }
        self.dirty = false;
    }

    /// Page-leave attempt.
    pub fn on_before_unload(&self) -> UnloadDecision {
        if self.dirty {
            UnloadDecision::Prompt(self.warning.clone())
        } else {
            UnloadDecision::Leave
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tracker(policy: DirtyPolicy) -> DirtyStateTracker {
        let config = GuardConfig {
            dirty_policy: policy,
            ..GuardConfig::default()
        };
        DirtyStateTracker::new(FormSnapshot::new("Hello", "World"), &config)
    }

    #[test]
    fn starts_clean() {
        let tracker = tracker(DirtyPolicy::OnTouch);
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.on_before_unload(), UnloadDecision::Leave);
    }

    #[test]
    fn any_input_marks_dirty_and_prompts() {
        let mut tracker = tracker(DirtyPolicy::OnTouch);
        tracker.on_input(EditField::Content, &FormValues::new("Hello", "World!"));

        assert!(tracker.is_dirty());
        assert_eq!(
            tracker.on_before_unload(),
            UnloadDecision::Prompt(
                "You have unsaved changes. Are you sure you want to leave?".to_string()
            )
        );
    }

    #[test]
    fn reverting_an_edit_stays_dirty_on_touch() {
        let mut tracker = tracker(DirtyPolicy::OnTouch);
        tracker.on_input(EditField::Title, &FormValues::new("Hello!", "World"));
        tracker.on_input(EditField::Title, &FormValues::new("Hello", "World"));

        assert!(tracker.is_dirty());
    }

    #[test]
    fn reverting_an_edit_clears_under_value_diff() {
        let mut tracker = tracker(DirtyPolicy::ValueDiff);
        tracker.on_input(EditField::Title, &FormValues::new("Hello!", "World"));
        assert!(tracker.is_dirty());

        tracker.on_input(EditField::Title, &FormValues::new("Hello", "World"));
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn save_clears_flag() {
        let mut tracker = tracker(DirtyPolicy::OnTouch);
        tracker.on_input(EditField::Title, &FormValues::new("Hi", "World"));

        tracker.mark_saved();

        assert!(!tracker.is_dirty());
        assert!(!tracker.on_before_unload().is_prompt());
    }
}
