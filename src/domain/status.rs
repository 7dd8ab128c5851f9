//! Release status classification
//!
//! Statuses are free text on the command line (`stable`, `rc`, `rc2`, `beta`,
//! `dev`, ...). Anything other than the exact string `stable` is a
//! pre-release, classified by prefix in a fixed order: `rc`, `beta`, `alpha`,
//! `dev`. The first matching prefix wins.

use std::fmt;

/// Status text that marks a final release
pub const STABLE: &str = "stable";

/// Classified release status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    /// Final release
    Stable,
    /// Status starting with `rc`
    ReleaseCandidate,
    /// Status starting with `beta`
    Beta,
    /// Status starting with `alpha`
    Alpha,
    /// Status starting with `dev`
    Dev,
    /// Pre-release status matching no known prefix, kept verbatim
    Other(String),
}

impl StatusKind {
    /// Classify a raw status string
    pub fn classify(status: &str) -> Self {
        if status == STABLE {
            StatusKind::Stable
        } else if status.starts_with("rc") {
            StatusKind::ReleaseCandidate
        } else if status.starts_with("beta") {
            StatusKind::Beta
        } else if status.starts_with("alpha") {
            StatusKind::Alpha
        } else if status.starts_with("dev") {
            StatusKind::Dev
        } else {
            StatusKind::Other(status.to_string())
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, StatusKind::Stable)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Stable => write!(f, "stable"),
            StatusKind::ReleaseCandidate => write!(f, "rc"),
            StatusKind::Beta => write!(f, "beta"),
            StatusKind::Alpha => write!(f, "alpha"),
            StatusKind::Dev => write!(f, "dev"),
            StatusKind::Other(s) => write!(f, "{}", s),
        }
    }
}
