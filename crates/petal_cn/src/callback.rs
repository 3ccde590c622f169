//! Caller-supplied callbacks
//!
//! Callbacks are fallible. A failure is logged and swallowed where the
//! component invokes it, so one broken handler cannot take down the tree.

use std::sync::Arc;

use petal_theme::ThemeMode;

pub type PressHandler = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;
pub type TextHandler = Arc<dyn Fn(&str) -> anyhow::Result<()> + Send + Sync>;
pub type ToggleHandler = Arc<dyn Fn(bool) -> anyhow::Result<()> + Send + Sync>;
pub type ModeHandler = Arc<dyn Fn(ThemeMode) -> anyhow::Result<()> + Send + Sync>;

/// Run a callback, logging a failure instead of propagating it
pub(crate) fn dispatch(
    component: &'static str,
    callback: &'static str,
    call: impl FnOnce() -> anyhow::Result<()>,
) {
    if let Err(err) = call() {
        tracing::warn!("{component}.{callback} failed: {err:#}");
    }
}
