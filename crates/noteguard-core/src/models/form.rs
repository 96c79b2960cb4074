//! Note form values and the render-time snapshot

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which note form an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// The "add note" form on the index page
    Create,
    /// The form on the edit page
    Edit,
}

/// A tracked field of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Title,
    Content,
}

/// Raw field values as read from the page, untrimmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub title: String,
    pub content: String,
}

impl FormValues {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title with surrounding whitespace removed
    #[must_use]
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    /// Content with surrounding whitespace removed
    #[must_use]
    pub fn trimmed_content(&self) -> &str {
        self.content.trim()
    }
}

/// Title and content of a note as the server rendered them at page load.
///
/// Supplied by the rendering side and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSnapshot {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl FormSnapshot {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Capture whatever the fields hold right now.
    #[must_use]
    pub fn capture(values: &FormValues) -> Self {
        Self::new(values.title.clone(), values.content.clone())
    }

    /// Parse a snapshot embedded by the page template as JSON.
    pub fn from_json(payload: &str) -> Result<Self> {
        if payload.trim().is_empty() {
            return Err(Error::InvalidSnapshot("payload is empty".to_string()));
        }
        serde_json::from_str(payload)
            .map_err(|error| Error::InvalidSnapshot(format!("invalid snapshot JSON: {error}")))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the trimmed values equal the snapshot as rendered.
    #[must_use]
    pub fn matches_trimmed(&self, values: &FormValues) -> bool {
        self.title == values.trimmed_title() && self.content == values.trimmed_content()
    }

    /// True when the raw values equal the snapshot exactly.
    #[must_use]
    pub fn matches_exact(&self, values: &FormValues) -> bool {
        self.title == values.title && self.content == values.content
    }
}
