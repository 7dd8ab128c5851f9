//! Checksum listings (`SHA512-SUMS.txt`).
//!
//! Each line reads `"{checksum}  {filename}"` with exactly two spaces between
//! the fields, as written by `sha512sum`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// File name of a checksum listing inside a release folder.
pub const CHECKSUM_FILE_NAME: &str = "SHA512-SUMS.txt";

const SEPARATOR: &str = "  ";

/// One downloadable file and its checksum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksumEntry {
    pub filename: String,
    pub checksum: String,
}

impl FileChecksumEntry {
    pub fn new(filename: impl Into<String>, checksum: impl Into<String>) -> Self {
        FileChecksumEntry {
            filename: filename.into(),
            checksum: checksum.into(),
        }
    }
}

/// Parse listing text into entries, preserving order.
///
/// `path` is only used for error reporting. A line without the two-space
/// separator fails the whole listing.
pub fn parse_listing(path: &Path, content: &str) -> Result<Vec<FileChecksumEntry>> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| -> Result<FileChecksumEntry> {
            let (checksum, filename) =
                line.split_once(SEPARATOR)
                    .ok_or_else(|| ReleaseError::MalformedChecksum {
                        path: path.to_path_buf(),
                        line: index + 1,
                        content: line.to_string(),
                    })?;
            Ok(FileChecksumEntry::new(filename.trim(), checksum.trim()))
        })
        .collect()
}

/// Read `SHA512-SUMS.txt` from a release folder.
pub fn read_listing(folder: &Path) -> Result<Vec<FileChecksumEntry>> {
    let path = folder.join(CHECKSUM_FILE_NAME);
    let content = fs::read_to_string(&path).map_err(|source| ReleaseError::ChecksumFile {
        path: path.clone(),
        source,
    })?;
    parse_listing(&path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn listing() -> PathBuf {
        PathBuf::from("releases/4.3-stable/SHA512-SUMS.txt")
    }

    #[test]
    fn test_parse_listing_preserves_order() {
        let entries = parse_listing(&listing(), "abc123  engine.zip\ndef456  engine.tar.gz\n").unwrap();
        assert_eq!(
            entries,
            vec![
                FileChecksumEntry::new("engine.zip", "abc123"),
                FileChecksumEntry::new("engine.tar.gz", "def456"),
            ]
        );
    }

    #[test]
    fn test_parse_listing_trims_fields() {
        let entries = parse_listing(&listing(), " abc123  engine.zip \r\n").unwrap();
        assert_eq!(entries, vec![FileChecksumEntry::new("engine.zip", "abc123")]);
    }

    #[test]
    fn test_parse_listing_keeps_duplicates() {
        let entries = parse_listing(&listing(), "aa  same.zip\naa  same.zip\n").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_listing_empty() {
        assert!(parse_listing(&listing(), "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_single_space_is_malformed() {
        let err = parse_listing(&listing(), "abc123  ok.zip\nabc123 broken.zip\n").unwrap_err();
        match err {
            ReleaseError::MalformedChecksum { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc123 broken.zip");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_listing_blank_line_is_malformed() {
        assert!(parse_listing(&listing(), "abc123  ok.zip\n\nfff  b.zip\n").is_err());
    }

    #[test]
    fn test_read_listing_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_listing(dir.path()).unwrap_err();
        assert!(matches!(err, ReleaseError::ChecksumFile { .. }));
    }

    #[test]
    fn test_read_listing_from_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CHECKSUM_FILE_NAME), "abc123  engine.zip\n").unwrap();
        let entries = read_listing(dir.path()).unwrap();
        assert_eq!(entries, vec![FileChecksumEntry::new("engine.zip", "abc123")]);
    }
}
