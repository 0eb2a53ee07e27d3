//! Library-folder discovery.
//!
//! A Steam root owns one primary `steamapps` folder and may declare further
//! library roots in `steamapps/libraryfolders.vdf`. Discovery is
//! best-effort: any read or parse failure degrades to whatever was found so
//! far, since a partial list still lets app lookups succeed.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::acf;

/// Subdirectory of every library root that holds manifests and app data.
pub const STEAMAPPS_DIR: &str = "steamapps";

/// File enumerating additional library roots, under the main steamapps dir.
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

/// Returns every `steamapps` folder reachable from `root`, main one first.
///
/// Additional folders come from the `"path"` entries of
/// `libraryfolders.vdf`, in file-appearance order, each suffixed with
/// `steamapps`, filtered to those that exist and deduplicated by exact
/// path equality (no case folding at this stage). Never fails; an
/// unreadable folders file still yields the main entry.
pub fn library_folders(root: &Path) -> Vec<PathBuf> {
    let mut folders = Vec::new();

    let main = root.join(STEAMAPPS_DIR);
    if main.exists() {
        folders.push(main.clone());
    }

    let folders_file = main.join(LIBRARY_FOLDERS_FILE);
    let text = match fs::read_to_string(&folders_file) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %folders_file.display(), %err, "no readable libraryfolders.vdf");
            return folders;
        }
    };

    for raw in acf::string_values(&text, "path") {
        let candidate = PathBuf::from(normalize_separators(&raw)).join(STEAMAPPS_DIR);
        if candidate.exists() && !folders.contains(&candidate) {
            folders.push(candidate);
        }
    }

    folders
}

/// Rewrites path separators to the platform's native one, so that
/// backslash-separated paths from a manifest written on Windows resolve
/// with std path handling everywhere.
fn normalize_separators(raw: &str) -> String {
    raw.replace(['/', '\\'], std::path::MAIN_SEPARATOR_STR)
}
