use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

use crate::cmd::{run_with_timeout, COMMAND_TIMEOUT};
use crate::model::Platform;
use crate::platform::{linux_install_candidates, linux_snap_base, LAUNCHER_BIN};

pub struct LinuxLocator;

impl super::RootLocator for LinuxLocator {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn locate(&self) -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let candidates = linux_install_candidates(&home, &linux_snap_base(&home));
        probe(&candidates).or_else(which_launcher)
    }
}

/// Probes candidates in order, deduplicating by path first, and returns
/// the first that exists. `~/.steam/steam` and `~/.local/share/Steam` are
/// usually the same directory via symlink, so the dedup keeps the probe
/// list honest without changing the outcome.
fn probe(candidates: &[PathBuf]) -> Option<PathBuf> {
    let mut tried = Vec::new();
    for candidate in candidates {
        if tried.contains(candidate) {
            continue;
        }
        tried.push(candidate.clone());
        if candidate.exists() {
            return Some(candidate.clone());
        }
    }
    None
}

/// Last-resort strategy: ask the shell's command resolver where the
/// launcher lives. A timeout or non-zero exit is a strategy failure, not
/// an error.
fn which_launcher() -> Option<PathBuf> {
    let mut cmd = Command::new("which");
    cmd.arg(LAUNCHER_BIN);
    let output = match run_with_timeout(cmd, COMMAND_TIMEOUT) {
        Ok(output) => output,
        Err(err) => {
            debug!(%err, "which lookup failed");
            return None;
        }
    };
    if !output.status.success() {
        return None;
    }
    let path = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_probe_returns_first_existing() {
        let existing_a = TempDir::new().unwrap();
        let existing_b = TempDir::new().unwrap();
        let candidates = vec![
            PathBuf::from("/no/such/steam"),
            existing_a.path().to_path_buf(),
            existing_b.path().to_path_buf(),
        ];
        assert_eq!(probe(&candidates), Some(existing_a.path().to_path_buf()));
    }

    #[test]
    fn test_probe_none_when_nothing_exists() {
        let candidates = vec![PathBuf::from("/no/such/steam")];
        assert_eq!(probe(&candidates), None);
    }

    #[test]
    fn test_probe_deduplicates_before_testing() {
        let dir = TempDir::new().unwrap();
        let stale = dir.path().join("gone");
        fs::create_dir(&stale).unwrap();
        fs::remove_dir(&stale).unwrap();

        let candidates = vec![stale.clone(), stale.clone(), dir.path().to_path_buf()];
        assert_eq!(probe(&candidates), Some(dir.path().to_path_buf()));
    }
}
