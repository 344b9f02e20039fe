//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the markup parser to report input it accepts but silently ignores,
//! such as attribute syntax it does not recognize.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all. Deduplication still happens when off.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about ignored or unsupported input (prints once per unique message)
///
/// # Example
/// ```
/// use sprig_common::warning::warn_once;
///
/// warn_once("Markup", "ignoring unquoted attribute in <input value=1>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if record(key) && ENABLED.load(Ordering::Relaxed) {
        let line = format!("[Sprig {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Turn warning output on or off for the whole process.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether warning output is currently enabled.
#[must_use]
pub fn warnings_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Insert `key` into the global set, returning true if it was not there yet.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}
