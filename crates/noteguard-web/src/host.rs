//! `PageHost` on top of the real browser window.

use noteguard_core::PageHost;
use web_sys::{HtmlElement, Window};

#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Window,
    modal: Option<HtmlElement>,
}

impl BrowserHost {
    pub const fn new(window: Window, modal: Option<HtmlElement>) -> Self {
        Self { window, modal }
    }
}

impl PageHost for BrowserHost {
    fn navigate(&mut self, url: &str) {
        if let Err(error) = self.window.location().set_href(url) {
            tracing::error!("Navigation to {} failed: {:?}", url, error);
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            tracing::error!("Failed to show notice: {:?}", error);
        }
    }

    fn set_modal_visible(&mut self, visible: bool) {
        let Some(modal) = &self.modal else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        if let Err(error) = modal.style().set_property("display", display) {
            tracing::error!("Failed to toggle confirmation modal: {:?}", error);
        }
    }
}
