//! Host application identity.
//!
//! Codec policy is keyed on the platform the host runs on and the host
//! application's version. Hosts report their version in `"10.0v2"`
//! notation (major.minor v release).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`HostError`] as the error type.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors reported by a host-application adapter.
///
/// Every capability trait the pipeline drives (render target, session,
/// dialog) is implemented by an adapter over the host binding; this is the
/// failure vocabulary those adapters share.
#[derive(Debug, Error)]
pub enum HostError {
    /// A node the adapter expected in the pre-built network is missing.
    #[error("host node '{0}' not found")]
    NodeNotFound(String),

    /// A parameter is missing on a host node.
    #[error("parameter '{knob}' not found on node '{node}'")]
    KnobNotFound {
        /// Node name.
        node: String,
        /// Parameter name.
        knob: String,
    },

    /// The host failed to execute a render.
    #[error("render failed: {0}")]
    RenderFailed(String),

    /// The session defines no views to render through.
    #[error("session defines no views")]
    NoViews,

    /// A modal dialog could not be shown.
    #[error("dialog failed: {0}")]
    Dialog(String),

    /// I/O error while talking to the host.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other host-side failure.
    #[error("{0}")]
    Other(String),
}

impl HostError {
    /// Creates a [`HostError::RenderFailed`] error.
    pub fn render_failed(msg: impl Into<String>) -> Self {
        Self::RenderFailed(msg.into())
    }

    /// Creates a [`HostError::Other`] error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// The platform the host application is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Linux.
    Linux,
}

impl Platform {
    /// Returns the platform this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Error returned when a host version string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid host version '{0}': expected '<major>.<minor>v<release>'")]
pub struct ParseVersionError(
    /// The rejected input.
    pub String,
);

/// Host application version in major/minor/release form.
///
/// # Example
///
/// ```rust
/// use daily_core::HostVersion;
///
/// let version: HostVersion = "10.0v2".parse().unwrap();
/// assert_eq!(version, HostVersion::new(10, 0, 2));
/// assert!(version > HostVersion::new(9, 5, 1));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HostVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Release number (the `vN` suffix).
    pub release: u32,
}

impl HostVersion {
    /// Creates a version from its components.
    pub fn new(major: u32, minor: u32, release: u32) -> Self {
        Self {
            major,
            minor,
            release,
        }
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}v{}", self.major, self.minor, self.release)
    }
}

impl FromStr for HostVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let (major, rest) = s.split_once('.').ok_or_else(err)?;
        let (minor, release) = rest.split_once('v').ok_or_else(err)?;
        Ok(Self {
            major: major.parse().map_err(|_| err())?,
            minor: minor.parse().map_err(|_| err())?,
            release: release.parse().map_err(|_| err())?,
        })
    }
}
