//! # Targets Module
//!
//! Loading and membership testing of target digests.
//!
//! The digest file is plain text: one lowercase-hex digest per line.
//! Trailing whitespace is stripped per line, blank lines are skipped, and
//! duplicates collapse silently. After loading, line order is irrelevant —
//! the set only answers membership queries.

use crate::error::TargetError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A set of target digests with O(1) average membership testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    digests: HashSet<String>,
}

impl TargetSet {
    /// An empty target set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a digest file from disk.
    ///
    /// A missing or unreadable file is fatal; the error carries the path so
    /// the user can see which file was at fault.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TargetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TargetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_reader(BufReader::new(file)).map_err(|source| TargetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), targets = set.len(), "loaded digest targets");
        Ok(set)
    }

    /// Read digests from any buffered reader, one per line.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut digests = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let digest = line.trim_end();
            if digest.is_empty() {
                continue;
            }
            digests.insert(digest.to_string());
        }
        Ok(Self { digests })
    }

    /// Test whether a digest is a target.
    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(digest)
    }

    /// Number of distinct target digests.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

impl FromIterator<String> for TargetSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            digests: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_reader_strips_trailing_whitespace() {
        let input = "d41d8cd98f00b204e9800998ecf8427e  \n0cc175b9c0f1b6a831c399e269772661\t\n";
        let set = TargetSet::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("d41d8cd98f00b204e9800998ecf8427e"));
        assert!(set.contains("0cc175b9c0f1b6a831c399e269772661"));
    }

    #[test]
    fn duplicate_lines_collapse() {
        let input = "900150983cd24fb0d6963f7d28e17f72\n900150983cd24fb0d6963f7d28e17f72\n";
        let set = TargetSet::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\n900150983cd24fb0d6963f7d28e17f72\n\n  \n";
        let set = TargetSet::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(set.len(), 1);
        assert!(!set.contains(""));
    }

    #[test]
    fn load_reads_digest_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "d41d8cd98f00b204e9800998ecf8427e").unwrap();
        writeln!(file, "0cc175b9c0f1b6a831c399e269772661").unwrap();

        let set = TargetSet::load(file.path()).unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let error = TargetSet::load("/nonexistent/hashes-12345.txt").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/hashes-12345.txt"));
    }

    #[test]
    fn membership_is_exact_text_match() {
        let set: TargetSet =
            vec!["900150983cd24fb0d6963f7d28e17f72".to_string()].into_iter().collect();

        assert!(set.contains("900150983cd24fb0d6963f7d28e17f72"));
        // uppercase is a different string, not a member
        assert!(!set.contains("900150983CD24FB0D6963F7D28E17F72"));
    }
}
