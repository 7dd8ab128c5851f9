//! Workflow orchestration for the two tools
//!
//! Keeps the clap layer in the binaries and the document pipeline here, so
//! both can be called programmatically.

use std::path::PathBuf;

use crate::boundary::ReleaseWarning;
use crate::config::{ManifestEnv, ToolsConfig};
use crate::domain::ReleaseIdentity;
use crate::error::Result;
use crate::manifest::{
    collect_files, manifest_output_path, release_folder, render_manifest, write_manifest,
    ReleaseManifest,
};
use crate::notes::{generate_notes, notes_output_path, write_notes};

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Where the document was (or, on a dry run, would have been) written
    pub output_path: PathBuf,

    /// The generated document
    pub document: String,

    /// Whether the document was written to disk
    pub written: bool,

    /// Non-fatal issues found along the way
    pub warnings: Vec<ReleaseWarning>,
}

/// Build the release manifest and write it under the builds directory
///
/// 1. Read the standard and mono checksum listings
/// 2. Render the manifest stamped with `release_date`
/// 3. Write it unless `dry_run` is set
///
/// Nothing is written if any listing is missing or malformed.
pub fn run_metadata_workflow(
    identity: &ReleaseIdentity,
    env: &ManifestEnv,
    release_date: i64,
    dry_run: bool,
) -> Result<WorkflowResult> {
    let files = collect_files(env, identity)?;
    let warnings = ReleaseWarning::for_manifest(identity, release_folder(env, identity), &files);

    let manifest = ReleaseManifest::new(identity, release_date, files);
    let document = render_manifest(&manifest)?;
    let output_path = manifest_output_path(env, identity);

    if !dry_run {
        write_manifest(&output_path, &document)?;
    }

    Ok(WorkflowResult {
        output_path,
        document,
        written: !dry_run,
        warnings,
    })
}

/// Generate the release notes and write them under the configured notes directory
pub fn run_notes_workflow(
    identity: &ReleaseIdentity,
    config: &ToolsConfig,
    dry_run: bool,
) -> Result<WorkflowResult> {
    let warnings = ReleaseWarning::for_identity(identity);
    let document = generate_notes(identity, &config.links);
    let output_path = notes_output_path(&config.notes.output_dir, identity);

    if !dry_run {
        write_notes(&output_path, &document)?;
    }

    Ok(WorkflowResult {
        output_path,
        document,
        written: !dry_run,
        warnings,
    })
}

/// Current time as a Unix timestamp, used as the manifest release date
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseVersion;
    use std::fs;

    fn identity(status: &str) -> ReleaseIdentity {
        ReleaseIdentity::new(ReleaseVersion::parse("4.3").unwrap(), status, 1, "abcdef0").unwrap()
    }

    #[test]
    fn test_notes_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ToolsConfig::default();
        config.notes.output_dir = dir.path().join("notes");

        let result = run_notes_workflow(&identity("rc"), &config, true).unwrap();
        assert!(!result.written);
        assert!(!result.output_path.exists());
        assert!(result.document.contains("GODOT_VERSION_STATUS=rc"));
    }

    #[test]
    fn test_notes_written_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ToolsConfig::default();
        config.notes.output_dir = dir.path().join("tmp");

        let result = run_notes_workflow(&identity("stable"), &config, false).unwrap();
        assert_eq!(
            result.output_path,
            dir.path().join("tmp").join("release-notes-4.3-stable.1.txt")
        );
        assert_eq!(fs::read_to_string(&result.output_path).unwrap(), result.document);
    }

    #[test]
    fn test_metadata_missing_listing_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let env = ManifestEnv::new(dir.path().join("scripts"), dir.path().join("builds"));

        let result = run_metadata_workflow(&identity("stable"), &env, 0, false);
        assert!(result.is_err());
        assert!(!manifest_output_path(&env, &identity("stable")).exists());
    }

    #[test]
    fn test_current_timestamp_is_plausible() {
        // 2023-11-14 or later
        assert!(current_timestamp() > 1_700_000_000);
    }
}
