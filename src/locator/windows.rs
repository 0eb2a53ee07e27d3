use std::path::{Path, PathBuf};
use tracing::debug;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
use winreg::RegKey;

use crate::model::Platform;
use crate::platform::{windows_install_candidates, LAUNCHER_EXE};

const HKCU_STEAM_KEY: &str = r"Software\Valve\Steam";
const HKLM_STEAM_KEYS: [&str; 2] = [
    r"SOFTWARE\WOW6432Node\Valve\Steam",
    r"SOFTWARE\Valve\Steam",
];

pub struct WindowsLocator;

impl super::RootLocator for WindowsLocator {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn locate(&self) -> Option<PathBuf> {
        // Registry first; a verified hit short-circuits the path probe.
        if let Some(path) = registry_install_path() {
            if is_install_dir(&path) {
                return Some(path);
            }
            debug!(path = %path.display(), "registry path failed verification");
        }

        windows_install_candidates()
            .into_iter()
            .find(|candidate| is_install_dir(candidate))
    }
}

/// A candidate only counts as an installation when the directory exists
/// and contains the launcher executable.
fn is_install_dir(path: &Path) -> bool {
    path.exists() && path.join(LAUNCHER_EXE).exists()
}

/// Reads the install path from the registry: the user-scope `SteamPath`
/// value first, then the machine-scope `InstallPath` (32-bit view before
/// native). Missing keys and unreadable values fall through silently.
fn registry_install_path() -> Option<PathBuf> {
    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    if let Ok(key) = hkcu.open_subkey(HKCU_STEAM_KEY) {
        if let Ok(path) = key.get_value::<String, _>("SteamPath") {
            return Some(PathBuf::from(path));
        }
    }

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    for subkey in HKLM_STEAM_KEYS {
        if let Ok(key) = hklm.open_subkey(subkey) {
            if let Ok(path) = key.get_value::<String, _>("InstallPath") {
                return Some(PathBuf::from(path));
            }
        }
    }

    None
}
