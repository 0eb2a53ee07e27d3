//! Bounded-timeout execution of external commands.
//!
//! Discovery shells out to a few OS tools (`which`, `pgrep`, `tasklist`,
//! PowerShell). An unresponsive subsystem must not hang the caller, so every
//! invocation goes through [`run_with_timeout`]; callers treat a timeout or
//! non-zero exit as an ordinary strategy failure.

use std::io;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Timeout applied to every external command the crate spawns.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs `cmd` to completion, killing it if it exceeds `timeout`.
///
/// Output is captured; stdin is closed. The commands spawned here produce
/// at most a few lines, well under the pipe buffer, so polling for exit
/// before draining the pipes cannot deadlock.
///
/// # Errors
///
/// Returns the spawn error, or `ErrorKind::TimedOut` if the deadline
/// passed before the child exited.
pub fn run_with_timeout(mut cmd: Command, timeout: Duration) -> io::Result<Output> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    let deadline = Instant::now() + timeout;

    loop {
        if child.try_wait()?.is_some() {
            return child.wait_with_output();
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "command timed out",
            ));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
