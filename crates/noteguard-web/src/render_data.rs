//! Data the server template embeds in the page for the controllers.
//!
//! Both payloads travel as `<script type="application/json">` blocks, so the
//! template only has to JSON-escape them.

use noteguard_core::{parse_guard_config, FormSnapshot, GuardConfig};

/// Element id of the rendered note snapshot on the edit page.
pub const SNAPSHOT_SCRIPT_ID: &str = "noteSnapshot";
/// Element id of the optional configuration override.
pub const CONFIG_SCRIPT_ID: &str = "noteguardConfig";

/// Decode the embedded snapshot. A missing or broken payload yields `None` and
/// the edit gate falls back to the field values at load.
pub fn snapshot_from_payload(payload: Option<&str>) -> Option<FormSnapshot> {
    let payload = payload?;
    match FormSnapshot::from_json(payload) {
        Ok(snapshot) => Some(snapshot),
        Err(error) => {
            tracing::warn!("Ignoring embedded note snapshot: {}", error);
            None
        }
    }
}

/// Decode the configuration override, falling back to defaults.
pub fn config_from_payload(payload: Option<&str>) -> GuardConfig {
    let Some(payload) = payload.filter(|payload| !payload.trim().is_empty()) else {
        return GuardConfig::default();
    };

    parse_guard_config(payload).unwrap_or_else(|error| {
        tracing::warn!("Using default guard config: {}", error);
        GuardConfig::default()
    })
}
