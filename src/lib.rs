//! Locate Steam installations, their library folders, and installed apps.
//!
//! steamscan reconciles three unreliable sources — OS registry/config
//! state, filesystem presence, and Steam's loosely formatted ACF/VDF
//! manifests — into one consistent view, without installing, launching or
//! talking to Steam itself. Every call re-discovers state from scratch;
//! nothing is cached between calls.
//!
//! The discovery core is synchronous. Each public operation comes in an
//! `async` form (a [`tokio::task::spawn_blocking`] submission wrapper, so
//! it never stalls a cooperative scheduler) and a `_blocking` form with
//! identical semantics.
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> steamscan::Result<()> {
//!     let install = steamscan::locate().await?;
//!     println!("Steam at {}", install.path.display());
//!
//!     let tf2 = steamscan::find_app("440", None).await?;
//!     println!("TF2 installed: {}", tf2.is_installed);
//!     Ok(())
//! }
//! ```

pub mod acf;
mod cmd;
pub mod error;
pub mod inventory;
pub mod library;
pub mod locator;
pub mod manifest;
pub mod model;
pub mod platform;
pub mod process;
pub mod version;

pub use error::{Error, Result};
pub use model::{Platform, SteamApp, SteamInstall};

use std::path::{Path, PathBuf};
use tokio::task;
use tracing::warn;

/// Locates the Steam installation on this machine.
///
/// Root resolution is the only hard-failure point; library discovery,
/// running-state and version detection all degrade (to an empty list,
/// `false` and `None` respectively) rather than failing the call.
///
/// # Errors
///
/// [`Error::InstallNotFound`] when no installation could be located.
pub fn locate_blocking() -> Result<SteamInstall> {
    let (platform, root) = locator::resolve()?;
    let libraries = library::library_folders(&root);
    let is_running = process::is_steam_running();
    let version = version::detect_version(&root);

    Ok(SteamInstall {
        path: root,
        platform,
        is_running,
        version,
        libraries,
    })
}

/// Non-blocking form of [`locate_blocking`].
pub async fn locate() -> Result<SteamInstall> {
    submit(locate_blocking, || Error::InstallNotFound { platform: None }).await
}

/// Returns whether the Steam client process is currently running.
pub fn is_running_blocking() -> bool {
    process::is_steam_running()
}

/// Non-blocking form of [`is_running_blocking`].
pub async fn is_running() -> bool {
    task::spawn_blocking(is_running_blocking)
        .await
        .unwrap_or_else(|err| {
            warn!(%err, "running-state query did not complete");
            false
        })
}

/// Finds one app by its numeric id.
///
/// When `root` is `None` the installation is resolved first; a supplied
/// root skips resolution and is used as-is.
///
/// # Errors
///
/// [`Error::InstallNotFound`] when the root needed resolving and none was
/// found; [`Error::AppNotFound`] when no library folder has a manifest for
/// `app_id`.
pub fn find_app_blocking(app_id: &str, root: Option<&Path>) -> Result<SteamApp> {
    let root = resolve_or(root)?;
    let folders = library::library_folders(&root);
    manifest::locate_app(app_id, &folders)
}

/// Non-blocking form of [`find_app_blocking`].
pub async fn find_app(app_id: &str, root: Option<&Path>) -> Result<SteamApp> {
    let app_id = app_id.to_string();
    let root = root.map(Path::to_path_buf);
    let fallback_id = app_id.clone();
    submit(
        move || find_app_blocking(&app_id, root.as_deref()),
        move || Error::AppNotFound {
            app_id: fallback_id,
        },
    )
    .await
}

/// Lists every installed app across all library folders, deduplicated by
/// `(app_id, install path)`.
///
/// # Errors
///
/// [`Error::InstallNotFound`] when the root needed resolving and none was
/// found. Per-folder and per-manifest failures only omit entries.
pub fn list_apps_blocking(root: Option<&Path>) -> Result<Vec<SteamApp>> {
    let root = resolve_or(root)?;
    let folders = library::library_folders(&root);
    Ok(inventory::installed_apps(&folders))
}

/// Non-blocking form of [`list_apps_blocking`].
pub async fn list_apps(root: Option<&Path>) -> Result<Vec<SteamApp>> {
    let root = root.map(Path::to_path_buf);
    submit(
        move || list_apps_blocking(root.as_deref()),
        || Error::InstallNotFound { platform: None },
    )
    .await
}

fn resolve_or(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => locator::resolve_root(),
    }
}

/// Runs a blocking operation on the runtime's blocking pool. A failed join
/// (the task panicked or was cancelled) is re-wrapped into the operation's
/// named error kind; the underlying message goes to the log.
async fn submit<T, F, E>(op: F, on_join_error: E) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
    E: FnOnce() -> Error,
{
    match task::spawn_blocking(op).await {
        Ok(result) => result,
        Err(err) => {
            warn!(%err, "discovery task did not complete");
            Err(on_join_error())
        }
    }
}
