//! Full-inventory aggregation across library folders.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::manifest;
use crate::model::SteamApp;

/// Returns every installed app reachable from `folders`, deduplicated by
/// `(app_id, install path)`.
///
/// Never fails: an unlistable folder is skipped, a file name that is not a
/// valid manifest name is skipped, and an unreadable manifest omits only
/// that entry. Result ordering follows folder order, then directory-listing
/// order within each folder; the latter is filesystem dependent.
pub fn installed_apps(folders: &[PathBuf]) -> Vec<SteamApp> {
    let mut seen = HashSet::new();
    let mut apps = Vec::new();

    for folder in folders {
        let entries = match std::fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %folder.display(), %err, "skipping unlistable library folder");
                continue;
            }
        };

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(app_id) = manifest::app_id_from_file_name(&file_name) else {
                continue;
            };
            let Some(app) = manifest::app_in_folder(app_id, folder) else {
                continue;
            };
            let Some(install_dir) = app.install_dir.as_deref() else {
                continue;
            };
            if seen.insert(dedup_key(&app.app_id, install_dir, cfg!(windows))) {
                apps.push(app);
            }
        }
    }

    apps
}

/// Identity key for an app sighting. Windows filesystems are case
/// insensitive, so the path component is folded there and nowhere else.
fn dedup_key(app_id: &str, install_dir: &Path, fold_case: bool) -> String {
    let path = install_dir.to_string_lossy();
    if fold_case {
        format!("{app_id}|{}", path.to_lowercase())
    } else {
        format!("{app_id}|{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_installed_app(folder: &Path, app_id: &str, installdir: &str) {
        fs::create_dir_all(folder).unwrap();
        fs::write(
            folder.join(format!("appmanifest_{app_id}.acf")),
            format!("\"name\"\t\"App {app_id}\"\n\"installdir\"\t\"{installdir}\"\n"),
        )
        .unwrap();
        fs::create_dir_all(folder.join(manifest::COMMON_DIR).join(installdir)).unwrap();
    }

    #[test]
    fn test_collects_installed_apps_across_folders() {
        let lib_a = TempDir::new().unwrap();
        let lib_b = TempDir::new().unwrap();
        write_installed_app(lib_a.path(), "440", "Team Fortress 2");
        write_installed_app(lib_b.path(), "620", "Portal 2");

        let apps = installed_apps(&[lib_a.path().to_path_buf(), lib_b.path().to_path_buf()]);
        let ids: Vec<&str> = apps.iter().map(|a| a.app_id.as_str()).collect();
        assert_eq!(ids, vec!["440", "620"]);
        assert!(apps.iter().all(|a| a.is_installed));
    }

    #[test]
    fn test_uninstalled_manifests_omitted() {
        let lib = TempDir::new().unwrap();
        fs::create_dir_all(lib.path()).unwrap();
        // Manifest declares an installdir that does not exist on disk.
        fs::write(
            lib.path().join("appmanifest_70.acf"),
            "\"name\"\t\"Half-Life\"\n\"installdir\"\t\"Half-Life\"\n",
        )
        .unwrap();

        assert!(installed_apps(&[lib.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn test_same_app_same_path_deduplicated() {
        let lib = TempDir::new().unwrap();
        write_installed_app(lib.path(), "440", "Team Fortress 2");

        // Same folder passed twice, as happens when a folders file lists
        // a library that was already discovered.
        let folders = vec![lib.path().to_path_buf(), lib.path().to_path_buf()];
        let apps = installed_apps(&folders);
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_same_app_distinct_paths_kept() {
        let lib_a = TempDir::new().unwrap();
        let lib_b = TempDir::new().unwrap();
        write_installed_app(lib_a.path(), "440", "Team Fortress 2");
        write_installed_app(lib_b.path(), "440", "Team Fortress 2");

        let apps = installed_apps(&[lib_a.path().to_path_buf(), lib_b.path().to_path_buf()]);
        assert_eq!(apps.len(), 2);
    }

    #[test]
    fn test_non_manifest_files_skipped() {
        let lib = TempDir::new().unwrap();
        write_installed_app(lib.path(), "440", "Team Fortress 2");
        fs::write(lib.path().join("libraryfolders.vdf"), "").unwrap();
        fs::write(lib.path().join("appmanifest_bad.acf"), "").unwrap();

        let apps = installed_apps(&[lib.path().to_path_buf()]);
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_unlistable_folder_skipped() {
        let lib = TempDir::new().unwrap();
        write_installed_app(lib.path(), "440", "Team Fortress 2");

        let folders = vec![PathBuf::from("/no/such/library"), lib.path().to_path_buf()];
        let apps = installed_apps(&folders);
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_dedup_key_folds_case_only_when_asked() {
        let a = Path::new("/Games/TF2");
        let b = Path::new("/games/tf2");
        assert_eq!(dedup_key("440", a, true), dedup_key("440", b, true));
        assert_ne!(dedup_key("440", a, false), dedup_key("440", b, false));
        assert_ne!(dedup_key("440", a, true), dedup_key("620", a, true));
    }
}
