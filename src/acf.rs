//! Field-specific extraction from Valve's ACF/VDF key-value text format.
//!
//! Steam records installation metadata in a brace-delimited format where
//! each interesting line is a quoted key/value pair:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"      "440"
//!     "name"       "Team Fortress 2"
//!     "installdir" "Team Fortress 2"
//! }
//! ```
//!
//! Only a handful of top-level fields are ever consumed (`name`,
//! `installdir`, `SizeOnDisk`, `LastUpdated` for app manifests; repeated
//! `path` entries for `libraryfolders.vdf`), so this module deliberately
//! does targeted per-field extraction instead of a structural parser of the
//! nested brace format. Nesting, duplicate blocks and unknown keys are all
//! ignored; a malformed field degrades to "absent" rather than failing the
//! whole file.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one `"key"  "value"` line. Values never contain unescaped
/// quotes in the files Steam writes.
static KV_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*"([^"]+)"\s+"([^"]*)"\s*$"#).expect("static pattern")
});

/// Returns the value of the first `"key" "value"` line matching `key`.
pub fn string_value(text: &str, key: &str) -> Option<String> {
    KV_LINE
        .captures_iter(text)
        .find(|caps| &caps[1] == key)
        .map(|caps| unescape(&caps[2]))
}

/// Returns every value of `"key" "value"` lines matching `key`, in
/// file-appearance order.
pub fn string_values(text: &str, key: &str) -> Vec<String> {
    KV_LINE
        .captures_iter(text)
        .filter(|caps| &caps[1] == key)
        .map(|caps| unescape(&caps[2]))
        .collect()
}

/// Undoes the VDF backslash escaping Steam applies to Windows paths
/// (`C:\\Games\\SteamLibrary` on disk means `C:\Games\SteamLibrary`).
fn unescape(value: &str) -> String {
    value.replace("\\\\", "\\")
}
