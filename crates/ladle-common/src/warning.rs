//! Deduplicated warnings routed through `tracing`.
//!
//! The parser and the selector engine never fail on odd input; they degrade
//! and report what they skipped here. Each distinct message is emitted once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (emits once per unique message)
///
/// The first occurrence is forwarded to `tracing::warn!` with the component
/// as a structured field. Returns `true` if this call emitted the warning.
///
/// # Example
/// ```
/// use ladle_common::warning::warn_once;
///
/// let _ = warn_once("Selector", "unknown pseudo-class ':frobnicate'");
/// assert!(!warn_once("Selector", "unknown pseudo-class ':frobnicate'"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first {
        tracing::warn!(component, "{message}");
    }
    first
}

/// Returns true if the given warning has been emitted since the last clear.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call when starting on a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
