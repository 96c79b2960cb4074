//! The seam between controllers and the live page.

/// Effects a controller can have on the page.
///
/// The browser binding implements this on top of `window` and the modal
/// element. Every call is synchronous; `notify` blocks until dismissed.
pub trait PageHost {
    /// Full-page navigation to `url`.
    fn navigate(&mut self, url: &str);

    /// Blocking notice shown to the user.
    fn notify(&mut self, message: &str);

    /// Show or hide the deletion confirmation modal.
    fn set_modal_visible(&mut self, visible: bool);
}

#[cfg(test)]
pub use recording::RecordingHost;
