//! Registration channels
//!
//! An autostart registration can live in either of two places:
//! - the per-user Run key in the registry (primary), or
//! - a `.lnk` file in the Start Menu Startup folder (fallback).
//!
//! The manager talks to both through these traits so its fallback and
//! cleanup logic can be exercised without touching a real registry hive or
//! startup folder. Outcomes are explicit `io::Result`s, never panics: a
//! failed registry write is what triggers the shortcut fallback.

use std::io;
use std::path::Path;

#[cfg(target_os = "windows")]
pub mod registry;
pub mod shortcut;

#[cfg(target_os = "windows")]
pub use registry::RunKeyRegistry;
pub use shortcut::StartupShortcuts;

/// The per-user Run key, addressed by value name.
pub trait RegistryChannel {
    /// Create-or-open the Run key and set `name` to `command`.
    fn set_command(&self, name: &str, command: &str) -> io::Result<()>;

    /// Read the command registered under `name`. An absent Run key or
    /// absent value is `Ok(None)`, not an error.
    fn query_command(&self, name: &str) -> io::Result<Option<String>>;

    /// Delete the value `name`. An absent Run key or absent value is a
    /// no-op.
    fn remove_command(&self, name: &str) -> io::Result<()>;
}

/// Shortcut files in the Startup folder, addressed by full path.
pub trait ShortcutChannel {
    /// Write a shortcut at `path` launching `target` with `args`.
    fn write(&self, path: &Path, target: &Path, args: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn remove(&self, path: &Path) -> io::Result<()>;
}
