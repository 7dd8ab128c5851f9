//! Pure formatting functions for UI output.
//!
//! Status lines go to stdout, warnings and errors to stderr.

use console::style;

use crate::boundary::ReleaseWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print a generated document between rules, for dry runs.
///
/// # Arguments
/// * `title` - Where the document would have been written
/// * `document` - The full document text
pub fn display_document(title: &str, document: &str) {
    println!("{}", style(format!("--- {} ---", title)).bold());
    print!("{}", document);
    if !document.ends_with('\n') {
        println!();
    }
    println!("{}", style("---").bold());
}
