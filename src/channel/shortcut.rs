//! Startup-folder shortcut channel

use std::fs;
use std::io;
use std::path::Path;

use super::ShortcutChannel;

/// `.lnk` files in the per-user Startup folder. Authoring the shortcut
/// needs the Windows shell-link format; existence and removal are plain
/// filesystem operations.
pub struct StartupShortcuts;

impl ShortcutChannel for StartupShortcuts {
    #[cfg(target_os = "windows")]
    fn write(&self, path: &Path, target: &Path, args: &str) -> io::Result<()> {
        let mut link =
            mslnk::ShellLink::new(target).map_err(|e| io::Error::other(e.to_string()))?;
        if !args.is_empty() {
            link.set_arguments(Some(args.to_string()));
        }
        link.create_lnk(path)
            .map_err(|e| io::Error::other(e.to_string()))
    }

    #[cfg(not(target_os = "windows"))]
    fn write(&self, _path: &Path, _target: &Path, _args: &str) -> io::Result<()> {
        Err(io::Error::other(
            "startup shortcuts are only supported on Windows",
        ))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
