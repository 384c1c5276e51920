use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process-environment facts the manager needs, captured once at
/// construction instead of read ad hoc, so tests can substitute their own.
#[derive(Clone, Debug)]
pub struct RuntimeEnv {
    /// Per-user Start Menu Startup folder, home of the fallback shortcuts.
    pub startup_folder: PathBuf,
    pub current_exe: PathBuf,
    /// Whether this process is a managed desktop-shell install whose
    /// installer maintains an updater executable next to the app.
    pub managed_desktop_runtime: bool,
}

impl RuntimeEnv {
    /// Capture the real process environment. The startup folder is derived
    /// from the roaming app-data directory (%APPDATA% on Windows).
    pub fn detect(managed_desktop_runtime: bool) -> Result<Self> {
        let appdata = dirs::data_dir().context("failed to resolve the roaming app-data directory")?;
        let startup_folder = appdata
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs")
            .join("Startup");
        let current_exe =
            std::env::current_exe().context("failed to resolve the current executable path")?;

        Ok(Self {
            startup_folder,
            current_exe,
            managed_desktop_runtime,
        })
    }

    /// Where the fallback shortcut for `app_name` lives.
    pub fn startup_shortcut_path(&self, app_name: &str) -> PathBuf {
        self.startup_folder.join(format!("{app_name}.lnk"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_path_uses_app_name_as_filename_stem() {
        let env = RuntimeEnv {
            startup_folder: PathBuf::from("startup"),
            current_exe: PathBuf::from("myapp.exe"),
            managed_desktop_runtime: false,
        };
        assert_eq!(
            env.startup_shortcut_path("MyApp"),
            PathBuf::from("startup").join("MyApp.lnk")
        );
    }
}
