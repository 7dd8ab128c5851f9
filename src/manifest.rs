//! Release manifest: the JSON document listing a release's downloadable files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::{read_listing, FileChecksumEntry};
use crate::config::ManifestEnv;
use crate::domain::ReleaseIdentity;
use crate::error::{ReleaseError, Result};

/// Subfolder holding the C#-enabled build of a release.
pub const MONO_SUBDIR: &str = "mono";

/// Checksum entries gathered for one release
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseFiles {
    pub standard: Vec<FileChecksumEntry>,
    pub mono: Vec<FileChecksumEntry>,
}

impl ReleaseFiles {
    /// Standard entries followed by mono entries.
    pub fn into_entries(self) -> Vec<FileChecksumEntry> {
        let mut entries = self.standard;
        entries.extend(self.mono);
        entries
    }
}

/// Serialized manifest, field order matches the published format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    pub name: String,
    pub version: String,
    pub status: String,
    pub status_version: String,
    pub release_date: i64,
    pub git_reference: String,
    pub files: Vec<FileChecksumEntry>,
}

impl ReleaseManifest {
    pub fn new(identity: &ReleaseIdentity, release_date: i64, files: ReleaseFiles) -> Self {
        ReleaseManifest {
            name: identity.manifest_name(),
            version: identity.version.to_string(),
            status: identity.status.clone(),
            status_version: identity.status_version.to_string(),
            release_date,
            git_reference: identity.manifest_git_reference(),
            files: files.into_entries(),
        }
    }
}

/// Folder with the checksum listings of a release: `{base_dir}/releases/{version}-{status}`.
pub fn release_folder(env: &ManifestEnv, identity: &ReleaseIdentity) -> PathBuf {
    env.base_dir
        .join("releases")
        .join(format!("{}-{}", identity.version, identity.status))
}

/// Manifest destination: `{builds_dir}/releases/redot-{tag}.json`.
pub fn manifest_output_path(env: &ManifestEnv, identity: &ReleaseIdentity) -> PathBuf {
    env.builds_dir
        .join("releases")
        .join(format!("redot-{}.json", identity.tag()))
}

/// Read the standard and mono listings of a release.
///
/// Both listings must exist.
pub fn collect_files(env: &ManifestEnv, identity: &ReleaseIdentity) -> Result<ReleaseFiles> {
    let folder = release_folder(env, identity);
    let standard = read_listing(&folder)?;
    let mono = read_listing(&folder.join(MONO_SUBDIR))?;
    Ok(ReleaseFiles { standard, mono })
}

/// Render the manifest as four-space indented JSON with a trailing newline.
pub fn render_manifest(manifest: &ReleaseManifest) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    manifest.serialize(&mut serializer)?;

    let mut rendered = String::from_utf8(buffer).map_err(|e| {
        ReleaseError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write a rendered manifest, creating the parent directory if needed.
pub fn write_manifest(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    Ok(())
}
