use std::io;

use thiserror::Error;

/// Failures surfaced by the autostart operations.
///
/// A registry channel that cannot be opened or written is not an error by
/// itself: `enable` recovers from it locally by falling back to the startup
/// shortcut, and only the fallback failing surfaces as [`Write`].
///
/// [`Write`]: AutostartError::Write
#[derive(Debug, Error)]
pub enum AutostartError {
    /// The fallback shortcut write failed after the registry channel was
    /// already unavailable.
    #[error("failed to write startup shortcut: {0}")]
    Write(#[source] io::Error),

    /// Removing a registration failed; steps completed before the failure
    /// are not rolled back.
    #[error("failed to remove autostart registration: {0}")]
    Removal(#[source] io::Error),

    /// Querying the registry channel failed for a reason other than the
    /// key or value being absent.
    #[error("failed to query autostart state: {0}")]
    Query(#[source] io::Error),
}
