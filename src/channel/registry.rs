//! Run-key registry channel backed by winreg

use std::io;

use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE};

use super::RegistryChannel;

const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// `HKCU\Software\Microsoft\Windows\CurrentVersion\Run`.
///
/// A `NotFound` when opening the key or reading a value means "no
/// registration" and is folded into the success path; anything else (for
/// example access denied) propagates so a permissions problem is never
/// reported as "disabled".
pub struct RunKeyRegistry;

impl RegistryChannel for RunKeyRegistry {
    fn set_command(&self, name: &str, command: &str) -> io::Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (key, _) = hkcu.create_subkey(RUN_KEY)?;
        key.set_value(name, &command)
    }

    fn query_command(&self, name: &str) -> io::Result<Option<String>> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = match hkcu.open_subkey(RUN_KEY) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        match key.get_value::<String, _>(name) {
            Ok(command) => Ok(Some(command)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn remove_command(&self, name: &str) -> io::Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = match hkcu.open_subkey_with_flags(RUN_KEY, KEY_QUERY_VALUE | KEY_SET_VALUE) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Run key not found, nothing to remove");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match key.delete_value(name) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
