//! Per-page composition root.
//!
//! A `NotesPage` is built once when the document is ready, from a description
//! of what the server rendered. Each controller is attached only when its
//! elements exist; events aimed at a missing controller fall through with
//! their default action intact.

use crate::config::GuardConfig;
use crate::dirty::DirtyStateTracker;
use crate::event::{ClickTarget, Disposition, UnloadDecision};
use crate::host::PageHost;
use crate::modal::ModalConfirmationController;
use crate::models::{EditField, FormKind, FormSnapshot, FormValues};
use crate::validation::FormValidationGate;

/// What the rendered markup contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Number of deletion trigger links
    pub delete_triggers: usize,
    /// Whether the "add note" form is present
    pub has_create_form: bool,
    /// Whether the edit form is present
    pub has_edit_form: bool,
    /// Edit title/content values at load, present only when both fields exist
    pub edit_fields: Option<FormValues>,
    /// Snapshot embedded by the template, if any
    pub snapshot: Option<FormSnapshot>,
}

/// The controllers attached to one page load.
#[derive(Debug)]
pub struct NotesPage {
    modal: Option<ModalConfirmationController>,
    create_gate: Option<FormValidationGate>,
    edit_gate: Option<FormValidationGate>,
    tracker: Option<DirtyStateTracker>,
}

impl NotesPage {
    pub fn attach(layout: &PageLayout, config: &GuardConfig) -> Self {
        let modal = ModalConfirmationController::attach(layout.delete_triggers);

        let create_gate = layout
            .has_create_form
            .then(|| FormValidationGate::for_create(config));

        // Without an embedded snapshot the edit gate compares against what the
        // fields held at load, which is the same server-rendered value.
        let edit_gate = layout.has_edit_form.then(|| {
            let snapshot = layout
                .snapshot
                .clone()
                .or_else(|| layout.edit_fields.as_ref().map(FormSnapshot::capture))
                .unwrap_or_default();
            FormValidationGate::for_edit(snapshot, config)
        });

        let tracker = layout
            .edit_fields
            .as_ref()
            .map(|fields| DirtyStateTracker::new(FormSnapshot::capture(fields), config));

        tracing::info!(
            "Page attached: modal={} create_form={} edit_form={} dirty_tracking={}",
            modal.is_some(),
            create_gate.is_some(),
            edit_gate.is_some(),
            tracker.is_some()
        );

        Self {
            modal,
            create_gate,
            edit_gate,
            tracker,
        }
    }

    pub const fn modal(&self) -> Option<&ModalConfirmationController> {
        self.modal.as_ref()
    }

    pub const fn tracker(&self) -> Option<&DirtyStateTracker> {
        self.tracker.as_ref()
    }

    pub const fn gate(&self, kind: FormKind) -> Option<&FormValidationGate> {
        match kind {
            FormKind::Create => self.create_gate.as_ref(),
            FormKind::Edit => self.edit_gate.as_ref(),
        }
    }

    pub fn on_delete_trigger(&mut self, url: &str, host: &mut impl PageHost) -> Disposition {
        match &mut self.modal {
            Some(modal) => modal.on_trigger(url, host),
            None => Disposition::Proceed,
        }
    }

    pub fn on_confirm(&mut self, host: &mut impl PageHost) -> Option<String> {
        self.modal.as_mut()?.on_confirm(host)
    }

    pub fn on_cancel(&mut self, host: &mut impl PageHost) {
        if let Some(modal) = &mut self.modal {
            modal.on_cancel(host);
        }
    }

    pub fn on_window_click(&mut self, target: ClickTarget, host: &mut impl PageHost) {
        if let Some(modal) = &mut self.modal {
            modal.on_window_click(target, host);
        }
    }

    /// Form submission. A valid edit submission also counts as a save for the
    /// unsaved-changes guard; a blocked one leaves the guard as it was.
    pub fn on_submit(
        &mut self,
        kind: FormKind,
        values: &FormValues,
        host: &mut impl PageHost,
    ) -> Disposition {
        let Some(gate) = self.gate(kind) else {
            return Disposition::Proceed;
        };

        let disposition = gate.on_submit(values, host);
        if kind == FormKind::Edit && disposition == Disposition::Proceed {
            if let Some(tracker) = &mut self.tracker {
                tracker.mark_saved();
            }
        }
        disposition
    }

    pub fn on_input(&mut self, field: EditField, current: &FormValues) {
        if let Some(tracker) = &mut self.tracker {
            tracker.on_input(field, current);
        }
    }

    pub fn on_before_unload(&self) -> UnloadDecision {
        self.tracker
            .as_ref()
            .map_or(UnloadDecision::Leave, DirtyStateTracker::on_before_unload)
    }
}
