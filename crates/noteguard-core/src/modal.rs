//! Deletion confirmation modal.
//!
//! Clicking a deletion link does not navigate. The link's target is parked as
//! the pending [`DeletionIntent`] and the modal opens; only the confirm button
//! turns that intent into a navigation.

use crate::event::{ClickTarget, Disposition};
use crate::host::PageHost;
use crate::models::DeletionIntent;

/// Visibility of the confirmation modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

/// Gates deletion links behind an explicit confirm step.
///
/// The modal is visible exactly when an intent is pending, so the state is
/// derived from the intent rather than stored next to it.
#[derive(Debug, Default)]
pub struct ModalConfirmationController {
    intent: Option<DeletionIntent>,
}

impl ModalConfirmationController {
    /// Returns a controller only when the page has deletion triggers.
    #[must_use]
    pub fn attach(trigger_count: usize) -> Option<Self> {
        if trigger_count == 0 {
            return None;
        }
        tracing::debug!("Deletion modal attached to {} trigger(s)", trigger_count);
        Some(Self::default())
    }

    pub const fn state(&self) -> ModalState {
        if self.intent.is_some() {
            ModalState::Visible
        } else {
            ModalState::Hidden
        }
    }

    pub const fn pending(&self) -> Option<&DeletionIntent> {
        self.intent.as_ref()
    }

    /// A deletion trigger was activated.
    ///
    /// The link's own navigation is always suppressed. A later trigger
    /// replaces any intent that has not been confirmed yet.
    pub fn on_trigger(&mut self, url: &str, host: &mut impl PageHost) -> Disposition {
        let Some(intent) = DeletionIntent::new(url) else {
            tracing::warn!("Deletion trigger has no target URL, dropping pending deletion");
            self.dismiss(host);
            return Disposition::Prevented;
        };

        if let Some(previous) = self.intent.replace(intent) {
            tracing::debug!("Replacing pending deletion of {}", previous);
        }
        tracing::debug!("Deletion requested for {}", url);
        host.set_modal_visible(true);
        Disposition::Prevented
    }

    /// Confirm button. Navigates to the pending target, if any.
    ///
    /// Returns the URL that was navigated to.
    pub fn on_confirm(&mut self, host: &mut impl PageHost) -> Option<String> {
        let intent = self.intent.take()?;
        let url = intent.into_url();
        tracing::debug!("Deletion confirmed, navigating to {}", url);
        host.set_modal_visible(false);
        host.navigate(&url);
        Some(url)
    }

    /// Cancel button.
    pub fn on_cancel(&mut self, host: &mut impl PageHost) {
        self.dismiss(host);
    }

    /// Any click on the window. Only backdrop clicks close the modal.
    pub fn on_window_click(&mut self, target: ClickTarget, host: &mut impl PageHost) {
        if target == ClickTarget::ModalBackdrop {
            self.dismiss(host);
        }
    }

    fn dismiss(&mut self, host: &mut impl PageHost) {
        if let Some(intent) = self.intent.take() {
            tracing::debug!("Deletion of {} cancelled", intent);
        }
        host.set_modal_visible(false);
    }
}
