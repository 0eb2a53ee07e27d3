//! Cross-platform path knowledge for Steam installations.
//!
//! This module provides the well-known candidate locations where the Steam
//! client installs itself on each platform. Probing and verification happen
//! in [`crate::locator`]; the helpers here only build the candidate lists.

use std::env;
use std::path::{Path, PathBuf};

/// Name of the Steam launcher executable on Windows. Its presence inside a
/// candidate directory is what verifies that directory as a real install.
pub(crate) const LAUNCHER_EXE: &str = "steam.exe";

/// Name of the Steam launcher binary looked up on `$PATH` on Linux.
pub(crate) const LAUNCHER_BIN: &str = "steam";

/// Environment variable overriding the snap base directory on Linux
/// (defaults to `~/snap`).
pub(crate) const SNAP_DIR_ENV: &str = "STEAMSCAN_SNAP_DIR";

/// Returns the Windows install candidates probed after a registry miss.
///
/// In order: the two conventional absolute program-files paths, then the
/// same two derived from the `ProgramFiles(x86)` / `ProgramFiles`
/// environment variables (which differ from the fixed paths on relocated
/// or non-`C:` systems).
pub fn windows_install_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(r"C:\Program Files (x86)\Steam"),
        PathBuf::from(r"C:\Program Files\Steam"),
    ];
    for var in ["ProgramFiles(x86)", "ProgramFiles"] {
        if let Some(base) = env::var_os(var) {
            candidates.push(PathBuf::from(base).join("Steam"));
        }
    }
    candidates
}

/// Returns the single well-known Steam directory on macOS, under `home`.
///
/// Location: `~/Library/Application Support/Steam`. This is the directory
/// that hosts `steamapps`; the `.app` bundle in `/Applications` does not.
pub fn macos_steam_dir(home: &Path) -> PathBuf {
    home.join("Library")
        .join("Application Support")
        .join("Steam")
}

/// Returns the ordered Linux install candidates under `home`.
///
/// Covers, in order:
/// - native package installs: `~/.steam/steam`
/// - user-local installs: `~/.local/share/Steam`
/// - flatpak: `~/.var/app/com.valvesoftware.Steam/.local/share/Steam`
/// - snap: `<snap_base>/steam/common/.local/share/Steam`
///
/// `snap_base` defaults to `~/snap` and can be overridden with the
/// `STEAMSCAN_SNAP_DIR` environment variable (see [`linux_snap_base`]).
/// `~/.steam/steam` is usually a symlink to `~/.local/share/Steam`, so
/// callers deduplicate before probing.
pub fn linux_install_candidates(home: &Path, snap_base: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".steam").join("steam"),
        home.join(".local").join("share").join("Steam"),
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".local")
            .join("share")
            .join("Steam"),
        snap_base
            .join("steam")
            .join("common")
            .join(".local")
            .join("share")
            .join("Steam"),
    ]
}

/// Resolves the snap base directory: `$STEAMSCAN_SNAP_DIR` when set,
/// otherwise `~/snap`.
pub fn linux_snap_base(home: &Path) -> PathBuf {
    env::var_os(SNAP_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join("snap"))
}
