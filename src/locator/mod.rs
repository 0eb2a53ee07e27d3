//! Root installation discovery.
//!
//! This module provides the [`RootLocator`] trait and one implementation
//! per platform for finding the Steam root installation directory.
//!
//! # Available locators
//!
//! | Locator | Strategy |
//! |---------|----------|
//! | `WindowsLocator` | Registry (HKCU, then HKLM), then conventional program-files paths, each verified to contain `steam.exe` |
//! | `MacLocator` | Single well-known directory under `~/Library/Application Support` |
//! | `LinuxLocator` | Ordered probe of native, user-local, flatpak and snap paths, then a `which steam` fallback |
//!
//! Exactly one locator runs per call, selected by [`Platform::current`].
//! Strategies inside a locator are tried in their documented order and the
//! first verified match short-circuits the rest.

mod linux;
mod macos;
#[cfg(windows)]
mod windows;

pub use linux::LinuxLocator;
pub use macos::MacLocator;
#[cfg(windows)]
pub use windows::WindowsLocator;

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::Platform;

/// One platform's ordered discovery chain.
///
/// A locator attempts its strategies in order and returns the first root
/// that passed its verification, or `None` when every strategy failed.
/// Strategy-level failures (a timed-out command, a missing registry key)
/// never escape a locator; they only mean "try the next strategy".
pub trait RootLocator {
    /// The platform this locator discovers installations on.
    fn platform(&self) -> Platform;

    /// Runs the discovery chain.
    fn locate(&self) -> Option<PathBuf>;
}

fn locator_for(platform: Platform) -> Option<Box<dyn RootLocator>> {
    match platform {
        Platform::Linux => Some(Box::new(LinuxLocator)),
        Platform::MacOS => Some(Box::new(MacLocator)),
        #[cfg(windows)]
        Platform::Windows => Some(Box::new(WindowsLocator)),
        // Unreachable through Platform::current, which only reports the
        // platform the binary was built for.
        #[cfg(not(windows))]
        Platform::Windows => None,
    }
}

/// Resolves the Steam root installation directory for the current platform.
///
/// # Errors
///
/// [`Error::InstallNotFound`] when the platform is unsupported (carrying
/// the raw OS tag, without any filesystem probe) or when every strategy of
/// the platform's locator failed.
pub fn resolve() -> Result<(Platform, PathBuf)> {
    let Some(platform) = Platform::current() else {
        return Err(Error::InstallNotFound {
            platform: Some(env::consts::OS.to_string()),
        });
    };

    let root = locator_for(platform)
        .and_then(|locator| locator.locate())
        .ok_or(Error::InstallNotFound {
            platform: Some(platform.as_str().to_string()),
        })?;

    Ok((platform, root))
}

/// As [`resolve`], discarding the platform tag.
pub fn resolve_root() -> Result<PathBuf> {
    resolve().map(|(_, root)| root)
}
