//! Pending deletion target

use std::fmt;

/// The URL of the deletion trigger the user most recently activated.
///
/// Only ever constructed from a non-blank URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionIntent(String);

impl DeletionIntent {
    /// Returns `None` for a blank target.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            None
        } else {
            Some(Self(url))
        }
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_url(self) -> String {
        self.0
    }
}

impl fmt::Display for DeletionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
