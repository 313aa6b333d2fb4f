//! Process-wide brace escaping for upstream ref expressions
//!
//! Some git builds want the braces in `@{...}` escaped, others reject the
//! escaped form. The first command that needs the upstream marker decides the
//! form once by probing `git rev-parse @{0}`; every later ref expression in
//! the process uses the same form.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// How `{` and `}` are written in ref expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// `@{u}`
    Plain,
    /// `@\{u\}`
    Escaped,
}

/// `None` until the probe has run.
static ESCAPE_MODE: Mutex<Option<EscapeMode>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<EscapeMode>> {
    // The guarded value is a plain Copy option, so a poisoned lock is still consistent
    ESCAPE_MODE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The mode decided for this process, if the probe has run.
pub fn escape_mode() -> Option<EscapeMode> {
    *lock()
}

/// Apply the process-wide escape mode to `text`.
///
/// Before the probe has run, text is returned unchanged.
pub fn escape(text: &str) -> String {
    escape_with(escape_mode().unwrap_or(EscapeMode::Plain), text)
}

/// Apply a specific escape mode to `text`.
pub fn escape_with(mode: EscapeMode, text: &str) -> String {
    match mode {
        EscapeMode::Plain => text.to_string(),
        EscapeMode::Escaped => text.replace('{', "\\{").replace('}', "\\}"),
    }
}

/// Decide the escape mode unless already decided.
///
/// `probe` reports whether the probe command succeeds in a given mode; plain
/// is tried before escaped. The lock is held for the whole check-and-set, so
/// concurrent callers wait for the first decision instead of probing again.
/// Returns `None` when both forms fail, leaving the mode undecided.
pub(crate) fn ensure_with<F>(probe: F) -> Option<EscapeMode>
where
    F: Fn(EscapeMode) -> bool,
{
    let mut decided = lock();
    if let Some(mode) = *decided {
        return Some(mode);
    }

    let mode = [EscapeMode::Plain, EscapeMode::Escaped]
        .into_iter()
        .find(|mode| probe(*mode))?;

    tracing::debug!(?mode, "Decided brace escaping for upstream refs");
    *decided = Some(mode);
    Some(mode)
}
