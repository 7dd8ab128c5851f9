pub mod boundary;
pub mod checksum;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod notes;
pub mod ui;

pub use error::{ReleaseError, Result};
