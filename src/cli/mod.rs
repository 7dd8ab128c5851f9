//! Command-line surface shared by the two binaries.

pub mod args;
pub mod orchestration;

pub use args::{NotesArgs, ReleaseArgs};
