//! Enable/disable/query orchestration across the two channels

use log::{info, warn};

use crate::channel::{RegistryChannel, ShortcutChannel};
use crate::env::RuntimeEnv;
use crate::error::AutostartError;
use crate::model::{AppIdentity, LaunchDirective};

/// Coordinates the Run-key and Startup-folder channels.
///
/// Every enable targets the registry first and falls back to a shortcut
/// only when the registry channel is unavailable, so a single enable ever
/// creates exactly one registration. Disable and query consult both
/// channels, because an earlier enable may have landed in either one.
///
/// The manager holds no state between calls; each operation re-derives
/// everything from the OS-level channels.
pub struct AutostartManager<R, S> {
    env: RuntimeEnv,
    registry: R,
    shortcuts: S,
}

#[cfg(target_os = "windows")]
impl AutostartManager<crate::channel::RunKeyRegistry, crate::channel::StartupShortcuts> {
    /// Manager wired to the real registry and startup folder.
    pub fn new(env: RuntimeEnv) -> Self {
        Self::with_channels(
            env,
            crate::channel::RunKeyRegistry,
            crate::channel::StartupShortcuts,
        )
    }
}

impl<R: RegistryChannel, S: ShortcutChannel> AutostartManager<R, S> {
    pub fn with_channels(env: RuntimeEnv, registry: R, shortcuts: S) -> Self {
        Self {
            env,
            registry,
            shortcuts,
        }
    }

    /// Register `app` to launch at login, hidden if `hidden_on_launch`.
    ///
    /// Registry success short-circuits: the shortcut channel is not touched
    /// on that path, so a stale shortcut from an earlier fallback enable is
    /// left in place.
    pub fn enable(
        &self,
        app: &AppIdentity,
        hidden_on_launch: bool,
    ) -> Result<(), AutostartError> {
        let directive = LaunchDirective::resolve(&self.env, &app.app_path, hidden_on_launch);
        let command = directive.registry_command();

        match self.registry.set_command(&app.app_name, &command) {
            Ok(()) => {
                info!("enabled autostart for {} via registry: {}", app.app_name, command);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "registry channel unavailable for {} ({}), falling back to startup shortcut",
                    app.app_name, e
                );
                let lnk = self.env.startup_shortcut_path(&app.app_name);
                self.shortcuts
                    .write(&lnk, &directive.target_path, &directive.args)
                    .map_err(AutostartError::Write)?;
                info!("enabled autostart for {} via shortcut: {:?}", app.app_name, lnk);
                Ok(())
            }
        }
    }

    /// Remove every registration for `app_name`, whichever channel holds
    /// it. Absent registrations are a no-op; a failing step aborts without
    /// rolling back steps already completed.
    pub fn disable(&self, app_name: &str) -> Result<(), AutostartError> {
        let lnk = self.env.startup_shortcut_path(app_name);
        if self.shortcuts.exists(&lnk) {
            self.shortcuts
                .remove(&lnk)
                .map_err(AutostartError::Removal)?;
        }

        self.registry
            .remove_command(app_name)
            .map_err(AutostartError::Removal)?;

        info!("disabled autostart for {}", app_name);
        Ok(())
    }

    /// Whether either channel currently holds a registration for
    /// `app_name`. An existing shortcut answers true without consulting
    /// the registry.
    pub fn is_enabled(&self, app_name: &str) -> Result<bool, AutostartError> {
        if self.shortcuts.exists(&self.env.startup_shortcut_path(app_name)) {
            return Ok(true);
        }

        let registered = self
            .registry
            .query_command(app_name)
            .map_err(AutostartError::Query)?;
        Ok(registered.is_some())
    }
}
