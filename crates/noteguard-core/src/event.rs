//! Outcomes handlers hand back to the hosting page.

/// Whether the browser should go on with an event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Proceed,
    Prevented,
}

impl Disposition {
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevented)
    }
}

/// Where a window-level click landed relative to the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal container itself, outside its content box
    ModalBackdrop,
    Elsewhere,
}

/// Answer to a page-leave attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnloadDecision {
    Leave,
    /// Ask the user to confirm. Browsers may show their own text instead.
    Prompt(String),
}

impl UnloadDecision {
    pub const fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt(_))
    }
}
