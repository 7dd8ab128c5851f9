//! User-facing output for the release tools.

pub mod formatter;

pub use formatter::{
    display_document, display_error, display_status, display_success, display_warning,
};
