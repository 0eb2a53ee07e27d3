//! Steam client process detection.
//!
//! A thin shim over the OS process table. Every failure path — missing
//! tool, timeout, non-zero exit — degrades to `false`.

use std::process::Command;
use tracing::debug;

use crate::cmd::{run_with_timeout, COMMAND_TIMEOUT};
use crate::model::Platform;

/// Returns whether a Steam client process is currently running.
pub fn is_steam_running() -> bool {
    match Platform::current() {
        Some(Platform::Windows) => tasklist_has("steam.exe"),
        Some(Platform::MacOS) => pgrep("steam_osx"),
        Some(Platform::Linux) => pgrep("steam"),
        None => false,
    }
}

fn pgrep(process: &str) -> bool {
    let mut cmd = Command::new("pgrep");
    cmd.args(["-x", process]);
    match run_with_timeout(cmd, COMMAND_TIMEOUT) {
        Ok(output) => output.status.success(),
        Err(err) => {
            debug!(%process, %err, "pgrep failed");
            false
        }
    }
}

fn tasklist_has(image: &str) -> bool {
    let mut cmd = Command::new("tasklist");
    cmd.args(["/FI", &format!("IMAGENAME eq {image}"), "/NH"]);
    match run_with_timeout(cmd, COMMAND_TIMEOUT) {
        // tasklist exits 0 even when the filter matches nothing; the
        // image name only appears in the output on a match.
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .to_lowercase()
            .contains(image),
        Err(err) => {
            debug!(%image, %err, "tasklist failed");
            false
        }
    }
}
