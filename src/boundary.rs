use std::fmt;
use std::path::PathBuf;

use crate::domain::{ReleaseIdentity, StatusKind};
use crate::manifest::ReleaseFiles;

/// Warnings raised while preparing release documents.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Stable manifests publish the `{version}-stable` tag instead of the supplied commit
    GitReferenceOverridden {
        supplied: String,
        published: String,
    },
    /// Pre-release status matching none of the known prefixes
    UnrecognizedStatus { status: String },
    /// A checksum listing contained no entries
    EmptyListing { folder: PathBuf },
}

impl ReleaseWarning {
    /// Warnings about the identity itself.
    pub fn for_identity(identity: &ReleaseIdentity) -> Vec<ReleaseWarning> {
        let mut warnings = Vec::new();
        if let StatusKind::Other(status) = identity.status_kind() {
            warnings.push(ReleaseWarning::UnrecognizedStatus { status });
        }
        warnings
    }

    /// Warnings about a manifest about to be written.
    pub fn for_manifest(
        identity: &ReleaseIdentity,
        release_folder: PathBuf,
        files: &ReleaseFiles,
    ) -> Vec<ReleaseWarning> {
        let mut warnings = Self::for_identity(identity);

        let published = identity.manifest_git_reference();
        if identity.is_stable() && !identity.git_reference.is_empty() {
            warnings.push(ReleaseWarning::GitReferenceOverridden {
                supplied: identity.git_reference.clone(),
                published,
            });
        }

        if files.standard.is_empty() {
            warnings.push(ReleaseWarning::EmptyListing {
                folder: release_folder.clone(),
            });
        }
        if files.mono.is_empty() {
            warnings.push(ReleaseWarning::EmptyListing {
                folder: release_folder.join(crate::manifest::MONO_SUBDIR),
            });
        }

        warnings
    }
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::GitReferenceOverridden {
                supplied,
                published,
            } => {
                let short_hash: String = supplied.chars().take(7).collect();
                write!(
                    f,
                    "Stable release references tag '{}' instead of commit {}",
                    published, short_hash
                )
            }
            ReleaseWarning::UnrecognizedStatus { status } => {
                write!(
                    f,
                    "Status '{}' is not one of rc, beta, alpha, dev or stable",
                    status
                )
            }
            ReleaseWarning::EmptyListing { folder } => {
                write!(f, "No files listed in '{}'", folder.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::FileChecksumEntry;
    use crate::domain::ReleaseVersion;

    fn identity(status: &str, git: &str) -> ReleaseIdentity {
        ReleaseIdentity::new(ReleaseVersion::parse("4.3").unwrap(), status, 1, git).unwrap()
    }

    fn files() -> ReleaseFiles {
        ReleaseFiles {
            standard: vec![FileChecksumEntry::new("a.zip", "01")],
            mono: vec![FileChecksumEntry::new("b.zip", "02")],
        }
    }

    #[test]
    fn test_no_warnings_for_regular_prerelease() {
        let warnings =
            ReleaseWarning::for_manifest(&identity("beta", "abc"), PathBuf::from("r"), &files());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unrecognized_status() {
        let warnings = ReleaseWarning::for_identity(&identity("nightly", "abc"));
        assert_eq!(
            warnings,
            vec![ReleaseWarning::UnrecognizedStatus {
                status: "nightly".to_string()
            }]
        );
    }

    #[test]
    fn test_stable_git_override() {
        let warnings = ReleaseWarning::for_manifest(
            &identity("stable", "0123456789abcdef"),
            PathBuf::from("r"),
            &files(),
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "Stable release references tag '4.3-stable' instead of commit 0123456"
        );
    }

    #[test]
    fn test_empty_mono_listing() {
        let files = ReleaseFiles {
            standard: vec![FileChecksumEntry::new("a.zip", "01")],
            mono: Vec::new(),
        };
        let warnings =
            ReleaseWarning::for_manifest(&identity("rc", "abc"), PathBuf::from("rel"), &files);
        assert_eq!(
            warnings,
            vec![ReleaseWarning::EmptyListing {
                folder: PathBuf::from("rel").join("mono")
            }]
        );
    }
}
