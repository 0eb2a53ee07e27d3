//! App manifest lookup and parsing.
//!
//! Each installed app is described by one `appmanifest_<appid>.acf` file in
//! the library folder that holds it. The four fields steamscan consumes are
//! extracted independently; a malformed field leaves its slot absent
//! instead of failing the record, and a declared install directory is only
//! surfaced after it has been verified to exist on disk.

use chrono::DateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::acf;
use crate::error::{Error, Result};
use crate::model::SteamApp;

/// Subdirectory of a library folder where app payloads live.
pub const COMMON_DIR: &str = "common";

const MANIFEST_PREFIX: &str = "appmanifest_";
const MANIFEST_SUFFIX: &str = ".acf";

/// Builds the manifest file name for an app id.
pub(crate) fn manifest_file_name(app_id: &str) -> String {
    format!("{MANIFEST_PREFIX}{app_id}{MANIFEST_SUFFIX}")
}

/// Extracts the app id from a manifest file name, or `None` if the name
/// does not match `appmanifest_<digits>.acf`.
pub(crate) fn app_id_from_file_name(file_name: &str) -> Option<&str> {
    let id = file_name
        .strip_prefix(MANIFEST_PREFIX)?
        .strip_suffix(MANIFEST_SUFFIX)?;
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Some(id)
    } else {
        None
    }
}

/// Looks for `app_id`'s manifest in a single library folder.
///
/// Returns `None` when the manifest is missing or unreadable, so callers
/// can continue with the next folder.
pub(crate) fn app_in_folder(app_id: &str, folder: &Path) -> Option<SteamApp> {
    let manifest = folder.join(manifest_file_name(app_id));
    if !manifest.exists() {
        return None;
    }
    let text = match fs::read_to_string(&manifest) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %manifest.display(), %err, "skipping unreadable manifest");
            return None;
        }
    };
    Some(parse_app(app_id, folder, &text))
}

fn parse_app(app_id: &str, folder: &Path, text: &str) -> SteamApp {
    let name = acf::string_value(text, "name");

    // The manifest records installdir relative to <folder>/common; the raw
    // value is only surfaced once the directory is confirmed on disk.
    let install_dir: Option<PathBuf> = acf::string_value(text, "installdir")
        .map(|dir| folder.join(COMMON_DIR).join(dir))
        .filter(|path| path.exists());
    let is_installed = install_dir.is_some();

    let size_on_disk = acf::string_value(text, "SizeOnDisk").and_then(|raw| raw.parse::<u64>().ok());
    let last_updated = acf::string_value(text, "LastUpdated")
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    SteamApp {
        app_id: app_id.to_string(),
        name,
        install_dir,
        size_on_disk,
        is_installed,
        last_updated,
    }
}

/// Scans `folders` in order for `app_id`'s manifest and returns the parsed
/// app from the first folder that has one.
///
/// # Errors
///
/// [`Error::AppNotFound`] when no folder yields a manifest.
pub fn locate_app(app_id: &str, folders: &[PathBuf]) -> Result<SteamApp> {
    folders
        .iter()
        .find_map(|folder| app_in_folder(app_id, folder))
        .ok_or_else(|| Error::AppNotFound {
            app_id: app_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(folder: &Path, app_id: &str, body: &str) {
        fs::create_dir_all(folder).unwrap();
        fs::write(folder.join(manifest_file_name(app_id)), body).unwrap();
    }

    const TF2_MANIFEST: &str = "\"AppState\"\n{\n\t\"appid\"\t\t\"440\"\n\t\"name\"\t\t\"Team Fortress 2\"\n\t\"installdir\"\t\t\"Team Fortress 2\"\n\t\"SizeOnDisk\"\t\t\"15000000000\"\n\t\"LastUpdated\"\t\t\"1640995200\"\n}\n";

    #[test]
    fn test_locate_app_parses_all_fields() {
        let lib = TempDir::new().unwrap();
        write_manifest(lib.path(), "440", TF2_MANIFEST);
        let install = lib.path().join(COMMON_DIR).join("Team Fortress 2");
        fs::create_dir_all(&install).unwrap();

        let app = locate_app("440", &[lib.path().to_path_buf()]).unwrap();
        assert_eq!(app.app_id, "440");
        assert_eq!(app.name.as_deref(), Some("Team Fortress 2"));
        assert_eq!(app.install_dir.as_deref(), Some(install.as_path()));
        assert_eq!(app.size_on_disk, Some(15_000_000_000));
        assert!(app.is_installed);
        assert_eq!(
            app.last_updated,
            Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_field_extraction_is_order_independent() {
        let lib = TempDir::new().unwrap();
        let shuffled = "\"AppState\"\n{\n\t\"LastUpdated\"\t\t\"1640995200\"\n\t\"installdir\"\t\t\"Team Fortress 2\"\n\t\"SizeOnDisk\"\t\t\"15000000000\"\n\t\"name\"\t\t\"Team Fortress 2\"\n}\n";
        write_manifest(lib.path(), "440", shuffled);
        fs::create_dir_all(lib.path().join(COMMON_DIR).join("Team Fortress 2")).unwrap();

        let app = locate_app("440", &[lib.path().to_path_buf()]).unwrap();
        assert_eq!(app.name.as_deref(), Some("Team Fortress 2"));
        assert_eq!(app.size_on_disk, Some(15_000_000_000));
        assert!(app.is_installed);
    }

    #[test]
    fn test_declared_but_missing_installdir_not_surfaced() {
        let lib = TempDir::new().unwrap();
        write_manifest(lib.path(), "440", TF2_MANIFEST);
        // No common/Team Fortress 2 on disk.

        let app = locate_app("440", &[lib.path().to_path_buf()]).unwrap();
        assert!(!app.is_installed);
        assert!(app.install_dir.is_none());
        // The rest of the record still parses.
        assert_eq!(app.name.as_deref(), Some("Team Fortress 2"));
    }

    #[test]
    fn test_non_numeric_size_degrades_to_absent() {
        let lib = TempDir::new().unwrap();
        write_manifest(
            lib.path(),
            "10",
            "\"name\"\t\"Counter-Strike\"\n\"SizeOnDisk\"\t\"lots\"\n\"LastUpdated\"\t\"soon\"\n",
        );

        let app = locate_app("10", &[lib.path().to_path_buf()]).unwrap();
        assert_eq!(app.name.as_deref(), Some("Counter-Strike"));
        assert_eq!(app.size_on_disk, None);
        assert_eq!(app.last_updated, None);
    }

    #[test]
    fn test_first_folder_with_manifest_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_manifest(first.path(), "440", "\"name\"\t\"from first\"\n");
        write_manifest(second.path(), "440", "\"name\"\t\"from second\"\n");

        let folders = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let app = locate_app("440", &folders).unwrap();
        assert_eq!(app.name.as_deref(), Some("from first"));
    }

    #[test]
    fn test_missing_everywhere_is_app_not_found() {
        let lib = TempDir::new().unwrap();
        let err = locate_app("999999", &[lib.path().to_path_buf()]).unwrap_err();
        assert_eq!(
            err,
            Error::AppNotFound {
                app_id: "999999".to_string()
            }
        );
    }

    #[test]
    fn test_app_id_from_file_name() {
        assert_eq!(app_id_from_file_name("appmanifest_440.acf"), Some("440"));
        assert_eq!(app_id_from_file_name("appmanifest_.acf"), None);
        assert_eq!(app_id_from_file_name("appmanifest_44x.acf"), None);
        assert_eq!(app_id_from_file_name("appmanifest_440.acf.tmp"), None);
        assert_eq!(app_id_from_file_name("libraryfolders.vdf"), None);
    }
}
