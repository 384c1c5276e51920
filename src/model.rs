use std::path::{Path, PathBuf};

use crate::env::RuntimeEnv;

/// Updater executable dropped by the installer one directory above the
/// application's own directory.
const UPDATER_EXE: &str = "update.exe";

/// Identity of the application being registered. `app_name` is the registry
/// value name and the shortcut filename stem; it is the only correlation key
/// between the two channels, so it must stay stable across calls.
#[derive(Clone, Debug)]
pub struct AppIdentity {
    pub app_name: String,
    pub app_path: PathBuf,
}

impl AppIdentity {
    pub fn new(app_name: impl Into<String>, app_path: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            app_path: app_path.into(),
        }
    }
}

/// What to actually launch at login, derived at enable time.
///
/// Normally this is the application itself. When the runtime is a managed
/// desktop-shell install and the installer's updater executable is present
/// next to the running binary, the registration targets the updater with a
/// relaunch directive instead, so login starts the currently installed
/// version rather than a copy that goes stale after the next update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchDirective {
    pub target_path: PathBuf,
    pub args: String,
}

impl LaunchDirective {
    pub fn resolve(env: &RuntimeEnv, app_path: &Path, hidden_on_launch: bool) -> Self {
        if env.managed_desktop_runtime {
            if let Some(updater) = updater_path(&env.current_exe) {
                if updater.exists() {
                    let exe_name = env
                        .current_exe
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    let mut args = format!("--processStart \"{exe_name}\"");
                    if hidden_on_launch {
                        args.push_str(" --process-start-args \"--hidden\"");
                    }
                    return Self {
                        target_path: updater,
                        args,
                    };
                }
            }
        }

        Self {
            target_path: app_path.to_path_buf(),
            args: if hidden_on_launch {
                "--hidden".to_string()
            } else {
                String::new()
            },
        }
    }

    /// Render the Run-key value: quoted target, then args unquoted.
    pub fn registry_command(&self) -> String {
        if self.args.is_empty() {
            format!("\"{}\"", self.target_path.display())
        } else {
            format!("\"{}\" {}", self.target_path.display(), self.args)
        }
    }
}

fn updater_path(current_exe: &Path) -> Option<PathBuf> {
    // <exe dir>/../update.exe
    let exe_dir = current_exe.parent()?;
    Some(exe_dir.parent()?.join(UPDATER_EXE))
}
