use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Returns the platform this binary was built for, or `None` on any
    /// operating system outside the three Steam supports.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOS)
        } else if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A located Steam installation.
///
/// Built fresh on every [`crate::locate`] call and never cached — Steam's
/// on-disk state can change between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamInstall {
    /// Root installation directory.
    pub path: PathBuf,
    /// Platform the installation was discovered on.
    pub platform: Platform,
    /// Whether the Steam client process is currently running.
    pub is_running: bool,
    /// Client version, when it could be determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// All `steamapps` library folders, main one first.
    pub libraries: Vec<PathBuf>,
}

/// One app as described by its `appmanifest_<appid>.acf` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamApp {
    /// Steam's numeric app id, as a string.
    pub app_id: String,
    /// Display name from the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Install directory, present only when verified to exist on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
    /// Declared size on disk in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_on_disk: Option<u64>,
    /// True iff the manifest declared an install directory and it exists.
    pub is_installed: bool,
    /// Last update time, from the manifest's Unix-epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
