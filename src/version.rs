//! Steam client version detection.
//!
//! On Windows the launcher executable carries file-version metadata, read
//! via PowerShell. Everywhere (including as the Windows fallback) a few
//! conventional plain-text marker files under the root are tried in order.
//! Every failure degrades to `None`.

use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::cmd::{run_with_timeout, COMMAND_TIMEOUT};
use crate::model::Platform;
use crate::platform::LAUNCHER_EXE;

const VERSION_MARKERS: [&str; 3] = ["steam.version", "version", "version.txt"];

/// Returns the installed client version under `root`, when determinable.
pub fn detect_version(root: &Path) -> Option<String> {
    if Platform::current() == Some(Platform::Windows) {
        if let Some(version) = launcher_file_version(root) {
            return Some(version);
        }
    }
    version_marker(root)
}

/// Queries the launcher executable's embedded version metadata.
fn launcher_file_version(root: &Path) -> Option<String> {
    let launcher = root.join(LAUNCHER_EXE);
    if !launcher.exists() {
        return None;
    }

    let mut cmd = Command::new("powershell");
    cmd.args([
        "-NoProfile",
        "-Command",
        &format!(
            "(Get-Item '{}').VersionInfo.ProductVersion",
            launcher.display()
        ),
    ]);
    let output = match run_with_timeout(cmd, COMMAND_TIMEOUT) {
        Ok(output) => output,
        Err(err) => {
            debug!(%err, "powershell version query failed");
            return None;
        }
    };
    if !output.status.success() {
        return None;
    }

    non_empty(String::from_utf8_lossy(&output.stdout).trim())
}

/// Returns the first non-empty trimmed content among the conventional
/// version-marker files under `root`.
fn version_marker(root: &Path) -> Option<String> {
    VERSION_MARKERS.iter().find_map(|marker| {
        let text = fs::read_to_string(root.join(marker)).ok()?;
        non_empty(text.trim())
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
