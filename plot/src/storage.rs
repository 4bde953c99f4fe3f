//! localStorage slot for the persisted history.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is best-effort: every failure here becomes a [`StorageError`]
//! value that the engine logs and ignores. A missing slot is `Ok(None)`, not
//! an error. Nothing in this module can crash the renderer.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::consts::STORAGE_KEY;

/// Why a durable-store operation failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("no window object in this context")]
    NoWindow,
    #[error("localStorage is unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage operation failed: {0}")]
    Failed(String),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(describe(&e)))?
        .ok_or_else(|| StorageError::Unavailable("storage disabled".to_owned()))
}

/// Read the persisted history slot. `Ok(None)` when the slot was never written.
///
/// # Errors
///
/// Returns a [`StorageError`] if localStorage cannot be reached.
pub fn load() -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|e| StorageError::Failed(describe(&e)))
}

/// Overwrite the history slot.
///
/// # Errors
///
/// Returns a [`StorageError`] if the write fails (e.g. quota exceeded).
pub fn save(raw: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(STORAGE_KEY, raw)
        .map_err(|e| StorageError::Failed(describe(&e)))
}

/// Delete the history slot entirely.
///
/// # Errors
///
/// Returns a [`StorageError`] if the removal fails.
pub fn remove() -> Result<(), StorageError> {
    local_storage()?
        .remove_item(STORAGE_KEY)
        .map_err(|e| StorageError::Failed(describe(&e)))
}
