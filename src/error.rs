//! Error types for Steam discovery.
//!
//! Only two conditions are ever surfaced to callers: the Steam installation
//! itself could not be found, or a specific app could not be found in any
//! library folder. Everything else (unreadable files, timed-out commands,
//! malformed manifest text) is degraded to an absent field or an empty list
//! at the point of use.

use thiserror::Error;

/// Errors surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No Steam installation could be located on this machine.
    ///
    /// Carries the platform tag when known — on an unsupported OS this is
    /// the raw `std::env::consts::OS` value, reported without any
    /// filesystem probe having been attempted.
    #[error("Steam installation not found")]
    InstallNotFound { platform: Option<String> },

    /// No library folder contains a manifest for the requested app.
    #[error("Steam app {app_id} not found in any library folder")]
    AppNotFound { app_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_not_found_display() {
        let err = Error::InstallNotFound {
            platform: Some("freebsd".to_string()),
        };
        assert_eq!(err.to_string(), "Steam installation not found");
    }

    #[test]
    fn test_app_not_found_display_carries_id() {
        let err = Error::AppNotFound {
            app_id: "440".to_string(),
        };
        assert!(err.to_string().contains("440"));
    }
}
