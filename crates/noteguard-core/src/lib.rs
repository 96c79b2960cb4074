//! noteguard-core - Core library for noteguard
//!
//! This crate contains the interaction controllers that sit between a
//! server-rendered notes page and the user: deletion confirmation, submit-time
//! form validation, and the unsaved-changes guard. Everything here is
//! platform-agnostic; effects on the page go through [`PageHost`].

pub mod config;
pub mod dirty;
pub mod error;
pub mod event;
pub mod host;
pub mod modal;
pub mod models;
pub mod page;
pub mod validation;

pub use config::{parse_guard_config, DirtyPolicy, GuardConfig, Messages};
pub use dirty::DirtyStateTracker;
pub use error::{Error, Result, ValidationError};
pub use event::{ClickTarget, Disposition, UnloadDecision};
pub use host::PageHost;
pub use modal::{ModalConfirmationController, ModalState};
pub use models::{DeletionIntent, EditField, FormKind, FormSnapshot, FormValues};
pub use page::{NotesPage, PageLayout};
pub use validation::{validate_note_form, FormValidationGate};
