//! Domain logic - release identity rules independent of file I/O

pub mod identity;
pub mod status;
pub mod version;

pub use identity::ReleaseIdentity;
pub use status::StatusKind;
pub use version::{ReleaseVersion, VersionFlavor};
