//! Presentation strings derived from a release identity.
//!
//! Each function consumes the classified [`StatusKind`] but keeps its own
//! fallback for unrecognized statuses: the display name shows the raw
//! status, the description uses dev-snapshot wording, and the slug embeds the
//! raw status.

use crate::config::ProjectLinks;
use crate::domain::{ReleaseIdentity, StatusKind, VersionFlavor};

/// Human-readable release name, e.g. "4.3", "4.3 RC 2" or "5.0 beta 1".
pub fn version_name(identity: &ReleaseIdentity) -> String {
    let label = match identity.status_kind() {
        StatusKind::Stable => return identity.version.to_string(),
        StatusKind::ReleaseCandidate => "RC".to_string(),
        StatusKind::Beta => "beta".to_string(),
        StatusKind::Alpha => "alpha".to_string(),
        StatusKind::Dev => "dev".to_string(),
        StatusKind::Other(raw) => raw,
    };

    format!("{} {} {}", identity.version, label, identity.status_version)
}

const MAJOR_DESCRIPTION: &str = "a major release introducing new features and considerable changes to core systems. **Major version releases contain compatibility breaking changes, both with Godot and Redot.**";
const FEATURE_DESCRIPTION: &str = "a feature release improving upon the previous version in many aspects, such as usability and performance. Feature releases also contain new features, but preserve compatibility with previous releases.";
const PATCH_DESCRIPTION: &str = "a lesser release mostly addressing stability and usability issues, backporting smaller feature improvements, and fixing all sorts of bugs. Minor releases are compatible with previous releases and are recommended for adoption.";

/// Sentence completing "**Redot {name}** is ..."
pub fn version_description(identity: &ReleaseIdentity) -> String {
    let flavor = identity.flavor();
    let kind = identity.status_kind();

    if kind.is_stable() {
        return match flavor {
            VersionFlavor::Major => MAJOR_DESCRIPTION,
            VersionFlavor::Minor => FEATURE_DESCRIPTION,
            VersionFlavor::Patch => PATCH_DESCRIPTION,
        }
        .to_string();
    }

    let flavor_name = match flavor {
        VersionFlavor::Major => "major",
        VersionFlavor::Minor => "feature",
        VersionFlavor::Patch => "lesser",
    };
    let version = &identity.version;

    match kind {
        StatusKind::ReleaseCandidate => format!(
            "a release candidate for the {} {} release. Release candidates focus on finalizing the release and fixing remaining critical bugs.",
            version, flavor_name
        ),
        StatusKind::Beta => format!(
            "a beta snapshot for the {} {} release. Beta snapshots are feature-complete and provided for public beta testing to catch as many bugs as possible ahead of the stable release.",
            version, flavor_name
        ),
        // alpha, dev and unrecognized statuses
        _ => format!(
            "a dev snapshot for the {} {} release. Dev snapshots are in-development builds of the engine provided for early testing and feature evaluation while the engine is still being worked on.",
            version, flavor_name
        ),
    }
}

/// URL fragment identifying the release announcement, e.g. "5-0-beta-1".
pub fn release_notes_slug(identity: &ReleaseIdentity) -> String {
    let dashed = identity.version.dashed();
    let class = match identity.status_kind() {
        StatusKind::Stable => return dashed,
        StatusKind::Other(raw) => raw,
        known => known.to_string(),
    };

    format!("{}-{}-{}", dashed, class, identity.status_version)
}

/// Full URL of the release announcement.
pub fn release_notes_url(identity: &ReleaseIdentity, links: &ProjectLinks) -> String {
    format!(
        "{}/release-{}/",
        links.news_url.trim_end_matches('/'),
        release_notes_slug(identity)
    )
}
