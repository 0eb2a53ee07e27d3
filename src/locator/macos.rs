use std::path::PathBuf;

use crate::model::Platform;
use crate::platform::macos_steam_dir;

pub struct MacLocator;

impl super::RootLocator for MacLocator {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    /// Checks the single well-known Steam directory under the user's home.
    /// Existence of the directory is the whole check; the `.app` bundle is
    /// deliberately not consulted since it never hosts `steamapps`.
    fn locate(&self) -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let dir = macos_steam_dir(&home);
        dir.exists().then_some(dir)
    }
}
