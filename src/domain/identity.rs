use crate::domain::status::{StatusKind, STABLE};
use crate::domain::version::{ReleaseVersion, VersionFlavor};
use crate::error::{ReleaseError, Result};

/// The tuple identifying one release build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseIdentity {
    pub version: ReleaseVersion,
    pub status: String,
    pub status_version: u32,
    pub git_reference: String,
}

impl ReleaseIdentity {
    /// Create a release identity, validating its invariants
    ///
    /// An empty status is treated as `stable`. Pre-releases must carry a git
    /// reference, and the status version must be positive.
    pub fn new(
        version: ReleaseVersion,
        status: impl Into<String>,
        status_version: u32,
        git_reference: impl Into<String>,
    ) -> Result<Self> {
        let mut status = status.into().trim().to_string();
        if status.is_empty() {
            status = STABLE.to_string();
        }

        if status_version == 0 {
            return Err(ReleaseError::version(
                "Status version must be a positive integer",
            ));
        }

        let git_reference = git_reference.into().trim().to_string();
        if git_reference.is_empty() && status != STABLE {
            return Err(ReleaseError::config(format!(
                "A git reference is required for '{}' releases",
                status
            )));
        }

        Ok(ReleaseIdentity {
            version,
            status,
            status_version,
            git_reference,
        })
    }

    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.status)
    }

    pub fn is_stable(&self) -> bool {
        self.status == STABLE
    }

    pub fn flavor(&self) -> VersionFlavor {
        self.version.flavor()
    }

    /// Full release tag, e.g. "4.3-rc.2" or "4.3-stable.1"
    pub fn tag(&self) -> String {
        format!("{}-{}.{}", self.version, self.status, self.status_version)
    }

    /// Release name used in the manifest: the bare version for stable
    /// releases, the full tag otherwise
    pub fn manifest_name(&self) -> String {
        if self.is_stable() {
            self.version.to_string()
        } else {
            self.tag()
        }
    }

    /// Git reference published in the manifest
    ///
    /// Stable releases point at their `{version}-stable` tag instead of the
    /// supplied commit.
    pub fn manifest_git_reference(&self) -> String {
        if self.is_stable() {
            format!("{}-stable", self.version)
        } else {
            self.git_reference.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(version: &str, status: &str, status_version: u32, git: &str) -> ReleaseIdentity {
        ReleaseIdentity::new(
            ReleaseVersion::parse(version).unwrap(),
            status,
            status_version,
            git,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_status_defaults_to_stable() {
        let id = identity("4.3", "", 1, "abc123");
        assert_eq!(id.status, "stable");
        assert!(id.is_stable());
    }

    #[test]
    fn test_zero_status_version_rejected() {
        let result = ReleaseIdentity::new(ReleaseVersion::parse("4.3").unwrap(), "rc", 0, "abc");
        assert!(matches!(result, Err(ReleaseError::Version(_))));
    }

    #[test]
    fn test_prerelease_requires_git_reference() {
        let result = ReleaseIdentity::new(ReleaseVersion::parse("4.3").unwrap(), "beta", 1, "  ");
        assert!(matches!(result, Err(ReleaseError::Config(_))));
    }

    #[test]
    fn test_stable_allows_missing_git_reference() {
        let id = identity("4.3", "stable", 1, "");
        assert_eq!(id.git_reference, "");
    }

    #[test]
    fn test_tag() {
        assert_eq!(identity("4.3", "rc", 2, "abc").tag(), "4.3-rc.2");
        assert_eq!(identity("4.3.1", "stable", 1, "abc").tag(), "4.3.1-stable.1");
    }

    #[test]
    fn test_manifest_name_stable() {
        assert_eq!(identity("4.3", "stable", 3, "abc").manifest_name(), "4.3");
    }

    #[test]
    fn test_manifest_name_prerelease() {
        assert_eq!(
            identity("5.0", "beta", 1, "abc").manifest_name(),
            "5.0-beta.1"
        );
    }

    #[test]
    fn test_manifest_git_reference_stable_overrides_hash() {
        let id = identity("4.3", "stable", 1, "deadbeef");
        assert_eq!(id.manifest_git_reference(), "4.3-stable");
    }

    #[test]
    fn test_manifest_git_reference_prerelease_keeps_hash() {
        let id = identity("4.3", "dev", 4, "deadbeef");
        assert_eq!(id.manifest_git_reference(), "deadbeef");
    }

    #[test]
    fn test_status_kind_and_flavor() {
        let id = identity("4.0", "rc1", 1, "abc");
        assert_eq!(id.status_kind(), StatusKind::ReleaseCandidate);
        assert_eq!(id.flavor(), VersionFlavor::Major);
    }
}
