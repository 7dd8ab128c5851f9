//! Release notes assembly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::{release_notes_url, version_description, version_name};
use crate::config::ProjectLinks;
use crate::domain::ReleaseIdentity;
use crate::error::Result;

/// Build the release notes text for a release.
///
/// The output depends only on the identity and the configured links.
pub fn generate_notes(identity: &ReleaseIdentity, links: &ProjectLinks) -> String {
    let repository = links.repository_url.trim_end_matches('/');
    let mut notes = String::new();

    notes.push_str(&format!(
        "**Redot {}** is {}\n\n",
        version_name(identity),
        version_description(identity)
    ));

    notes.push_str("Report bugs on GitHub after checking that they haven't been reported:\n");
    notes.push_str(&format!("- {}/issues\n", repository));
    notes.push('\n');

    if !identity.is_stable() {
        let commit = &identity.git_reference;
        let status = &identity.status;
        notes.push_str(&format!(
            "Built from commit [{}]({}/commit/{}).\n",
            commit, repository, commit
        ));
        notes.push_str(&format!(
            "To make a custom build which would also be recognized as {}, you should define `GODOT_VERSION_STATUS={}` in your build environment prior to compiling.\n",
            status, status
        ));
        notes.push('\n');
    }

    notes.push_str("----\n");
    notes.push('\n');

    notes.push_str(&format!(
        "- [Release notes]({})\n",
        release_notes_url(identity, links)
    ));

    if identity.is_stable() {
        notes.push_str(&format!(
            "- [Curated changelog]({}/blob/{}/CHANGELOG.md)\n",
            repository,
            identity.tag()
        ));
    }

    notes.push_str("- Download (GitHub): Expand **Assets** below\n");
    notes.push('\n');
    notes.push_str("*All files for this release are mirrored under **Assets** below.*\n");

    notes
}

/// Path of the notes file for a release inside `output_dir`.
pub fn notes_output_path(output_dir: &Path, identity: &ReleaseIdentity) -> PathBuf {
    output_dir.join(format!("release-notes-{}.txt", identity.tag()))
}

/// Write notes to `path`, creating the parent directory if needed.
pub fn write_notes(path: &Path, notes: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, notes)?;
    Ok(())
}
