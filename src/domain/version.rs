use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Engine version in `major.minor[.patch]` form.
///
/// The original text is kept verbatim for rendering; the numeric components
/// only drive classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    components: Vec<u32>,
}

impl ReleaseVersion {
    /// Parse a version string (e.g., "4.3" or "4.3.1")
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ReleaseError::version("Version cannot be empty"));
        }

        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(ReleaseError::version(format!(
                "Invalid version format: '{}' - expected major.minor or major.minor.patch",
                raw
            )));
        }

        let components = parts
            .iter()
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    ReleaseError::version(format!(
                        "Invalid version component '{}' in '{}'",
                        part, raw
                    ))
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(ReleaseVersion {
            raw: raw.to_string(),
            components,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Classify the release size from the shape of the version
    pub fn flavor(&self) -> VersionFlavor {
        match self.components.as_slice() {
            [_, 0] => VersionFlavor::Major,
            [_, _] => VersionFlavor::Minor,
            _ => VersionFlavor::Patch,
        }
    }

    /// Version with every `.` replaced by `-` (e.g., "4.3.1" -> "4-3-1")
    pub fn dashed(&self) -> String {
        self.raw.replace('.', "-")
    }
}

impl FromStr for ReleaseVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Size of a release, derived from the version shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFlavor {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionFlavor::Major => write!(f, "major"),
            VersionFlavor::Minor => write!(f, "minor"),
            VersionFlavor::Patch => write!(f, "patch"),
        }
    }
}
