//! Core data types for Steam discovery.
//!
//! This module contains the fundamental types used throughout steamscan:
//!
//! - [`SteamInstall`] - A located Steam installation
//! - [`SteamApp`] - An app discovered in a library folder
//! - [`Platform`] - Operating system platform
//!
//! # Example
//!
//! ```
//! use steamscan::SteamApp;
//!
//! let app = SteamApp {
//!     app_id: "440".to_string(),
//!     name: Some("Team Fortress 2".to_string()),
//!     install_dir: None,
//!     size_on_disk: None,
//!     is_installed: false,
//!     last_updated: None,
//! };
//!
//! println!("{} installed: {}", app.app_id, app.is_installed);
//! ```

mod install;

pub use install::*;
