use std::path::PathBuf;

use crate::domain::{ReleaseIdentity, ReleaseVersion};
use crate::error::{ReleaseError, Result};

/// Release identity flags shared by both tools.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ReleaseArgs {
    #[arg(
        short,
        long,
        default_value = "",
        help = "Redot version in the major.minor.patch format (patch should be omitted for major and minor releases)"
    )]
    pub version: String,

    #[arg(
        short,
        long,
        default_value = "stable",
        help = "Release flavor, e.g. dev, alpha, beta, rc, stable (defaults to stable)"
    )]
    pub flavor: String,

    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Release flavor version, e.g. 1, 2, 3, etc. (defaults to 1)"
    )]
    pub status_version: u32,

    #[arg(short, long, default_value = "", help = "Git commit hash tagged for this release")]
    pub git: String,

    #[arg(long, help = "Print the generated document instead of writing it")]
    pub dry_run: bool,
}

impl ReleaseArgs {
    /// Validate the flags into a release identity.
    pub fn identity(&self) -> Result<ReleaseIdentity> {
        if self.version.trim().is_empty() || self.git.trim().is_empty() {
            return Err(ReleaseError::config(
                "Redot version and git hash cannot be empty",
            ));
        }

        let version = ReleaseVersion::parse(&self.version)?;
        ReleaseIdentity::new(version, &self.flavor, self.status_version, &self.git)
    }
}

/// Notes generator flags: the shared identity plus the config file.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct NotesArgs {
    #[command(flatten)]
    pub release: ReleaseArgs,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,
}
