//! Submit-time validation for the note forms.
//!
//! Rules run in a fixed order and the first failure wins:
//! empty title or content, then title length, then (edit form only) whether
//! anything changed compared to the rendered snapshot.

use crate::config::{GuardConfig, Messages};
use crate::error::ValidationError;
use crate::event::Disposition;
use crate::host::PageHost;
use crate::models::{FormKind, FormSnapshot, FormValues};

/// Check the rules shared by the create and edit forms.
///
/// Both fields are trimmed first. Title length is counted in characters and
/// `max_title_chars` itself is still accepted.
pub fn validate_note_form(
    values: &FormValues,
    max_title_chars: usize,
) -> Result<(), ValidationError> {
    let title = values.trimmed_title();
    let content = values.trimmed_content();

    if title.is_empty() || content.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let chars = title.chars().count();
    if chars > max_title_chars {
        return Err(ValidationError::TitleTooLong {
            chars,
            max: max_title_chars,
        });
    }

    Ok(())
}

/// Validation gate for one form on the page.
#[derive(Debug, Clone)]
pub struct FormValidationGate {
    kind: FormKind,
    snapshot: Option<FormSnapshot>,
    max_title_chars: usize,
    messages: Messages,
}

impl FormValidationGate {
    /// Gate for the "add note" form.
    #[must_use]
    pub fn for_create(config: &GuardConfig) -> Self {
        Self {
            kind: FormKind::Create,
            snapshot: None,
            max_title_chars: config.title_max_chars,
            messages: config.messages.clone(),
        }
    }

    /// Gate for the edit form, comparing against the rendered note.
    #[must_use]
    pub fn for_edit(snapshot: FormSnapshot, config: &GuardConfig) -> Self {
        Self {
            kind: FormKind::Edit,
            snapshot: Some(snapshot),
            max_title_chars: config.title_max_chars,
            messages: config.messages.clone(),
        }
    }

    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    pub const fn snapshot(&self) -> Option<&FormSnapshot> {
        self.snapshot.as_ref()
    }

    /// Run every rule for this form without touching the page.
    pub fn evaluate(&self, values: &FormValues) -> Result<(), ValidationError> {
        validate_note_form(values, self.max_title_chars)?;

        if let Some(snapshot) = &self.snapshot {
            if snapshot.matches_trimmed(values) {
                return Err(ValidationError::NoChangesDetected);
            }
        }

        Ok(())
    }

    /// Submit handler. On failure the user is told why and the submission is
    /// cancelled; the fields are left as they are.
    pub fn on_submit(&self, values: &FormValues, host: &mut impl PageHost) -> Disposition {
        match self.evaluate(values) {
            Ok(()) => {
                tracing::debug!("{:?} form passed validation", self.kind);
                Disposition::Proceed
            }
            Err(error) => {
                tracing::warn!("{:?} form submission blocked: {}", self.kind, error);
                host.notify(&self.messages.for_validation(&error));
                Disposition::Prevented
            }
        }
    }
}
