//! Data models for noteguard

mod form;
mod intent;

pub use form::{EditField, FormKind, FormSnapshot, FormValues};
pub use intent::DeletionIntent;
