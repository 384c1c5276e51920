//! Launch-at-login registration for Windows.
//!
//! Registrations live primarily under the per-user Run key
//! (`HKCU\Software\Microsoft\Windows\CurrentVersion\Run`); when that
//! channel is unavailable the manager falls back to a `.lnk` shortcut in
//! the Start Menu Startup folder. Disable and query consult both channels,
//! since an earlier enable may have landed in either one.

pub mod channel;
pub mod env;
pub mod error;
pub mod manager;
pub mod model;

pub use env::RuntimeEnv;
pub use error::AutostartError;
pub use manager::AutostartManager;
pub use model::{AppIdentity, LaunchDirective};
