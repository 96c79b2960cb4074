//! Page guard configuration.
//!
//! Provides the `GuardConfig` struct shared by every controller on a page: the
//! title length limit, the dirty-tracking policy, and the literal strings shown
//! to the user. Every field has a default, so an empty JSON object is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ValidationError};

/// Longest accepted note title, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;

const MAX_PLACEHOLDER: &str = "{max}";

/// How the unsaved-changes flag reacts to input events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirtyPolicy {
    /// Any input marks the form dirty until the next successful save.
    #[default]
    OnTouch,
    /// Dirty only while the fields differ from the rendered snapshot.
    ValueDiff,
}

/// User-facing strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub empty_fields: String,
    /// `{max}` is replaced by the configured title limit.
    pub title_too_long: String,
    pub no_changes: String,
    pub unsaved_changes: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_fields: "Please fill in all fields!".to_string(),
            title_too_long: "Title must not exceed {max} characters!".to_string(),
            no_changes: "You have not made any changes!".to_string(),
            unsaved_changes: "You have unsaved changes. Are you sure you want to leave?"
                .to_string(),
        }
    }
}

impl Messages {
    /// Notice text for a rejected submission.
    pub fn for_validation(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::EmptyField => self.empty_fields.clone(),
            ValidationError::TitleTooLong { max, .. } => self
                .title_too_long
                .replace(MAX_PLACEHOLDER, &max.to_string()),
            ValidationError::NoChangesDetected => self.no_changes.clone(),
        }
    }
}

/// Settings shared by all controllers on a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    pub title_max_chars: usize,
    pub dirty_policy: DirtyPolicy,
    pub messages: Messages,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            dirty_policy: DirtyPolicy::default(),
            messages: Messages::default(),
        }
    }
}

impl GuardConfig {
    /// Reject values no controller can work with.
    pub fn validate(&self) -> Result<()> {
        if self.title_max_chars == 0 {
            return Err(Error::InvalidConfig(
                "title_max_chars must be greater than zero".to_string(),
            ));
        }

        require_text(&self.messages.empty_fields, "messages.empty_fields")?;
        require_text(&self.messages.title_too_long, "messages.title_too_long")?;
        require_text(&self.messages.no_changes, "messages.no_changes")?;
        require_text(&self.messages.unsaved_changes, "messages.unsaved_changes")?;
        Ok(())
    }
}

/// Parse a page configuration from a raw JSON payload and validate it.
pub fn parse_guard_config(payload: &str) -> Result<GuardConfig> {
    let config: GuardConfig = serde_json::from_str(payload)?;
    config.validate()?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Private
// ---------------------------------------------------------------------------

fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidConfig(format!("{field} must not be empty")));
    }
    Ok(())
}
