use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;

/// Timestamp layout used in snapshot names (`YYYYMMDDHHMMSS`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

const TIMESTAMP_LEN: usize = 14;
const DIGEST_LEN: usize = 64;

/// The three parts encoded in a snapshot's file name.
///
/// A snapshot of `notes_v2.txt` taken at 2024-05-01 12:30:00 whose content
/// hashes to `e3b0…b855` is stored as
/// `20240501123000_e3b0…b855_notes_v2.txt`. The base name comes last and may
/// contain underscores itself, so parsing splits on the first two only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotName {
    /// When the snapshot was taken, in local time, to the second.
    pub timestamp: NaiveDateTime,
    /// Lowercase hexadecimal SHA-256 digest of the file content.
    pub digest: String,
    /// Final path component of the original file.
    pub base_name: String,
}

impl SnapshotName {
    pub fn new(timestamp: NaiveDateTime, digest: impl Into<String>, base_name: impl Into<String>) -> Self {
        SnapshotName {
            timestamp,
            digest: digest.into(),
            base_name: base_name.into(),
        }
    }

    /// Splits a snapshot file name back into its parts.
    ///
    /// # Arguments
    ///
    /// * `name` - A file name of the form `{timestamp}_{digest}_{base_name}`.
    ///
    /// # Returns
    ///
    /// * `Some(SnapshotName)` - The parsed parts.
    /// * `None` - If the timestamp or digest is malformed or the base name is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use file_versioning::snapshot::SnapshotName;
    ///
    /// let name = "20240501123000_e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855_hello.txt";
    /// let parsed = SnapshotName::parse(name).unwrap();
    /// assert_eq!(parsed.base_name, "hello.txt");
    /// assert_eq!(parsed.to_string(), name);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let mut parts = name.splitn(3, '_');
        let timestamp = parts.next()?;
        let digest = parts.next()?;
        let base_name = parts.next()?;

        if timestamp.len() != TIMESTAMP_LEN || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;

        if digest.len() != DIGEST_LEN || !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return None;
        }
        if base_name.is_empty() {
            return None;
        }

        Some(SnapshotName::new(timestamp, digest, base_name))
    }
}

impl fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.digest,
            self.base_name
        )
    }
}

/// A snapshot created by [`VersionStore::commit`](super::VersionStore::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The file name inside the side-store; pass this to `rollback`.
    pub name: String,
    /// Full path of the copy.
    pub path: PathBuf,
    /// SHA-256 digest of the content at commit time.
    pub digest: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    /// Tests the underscore-joined name layout.
    #[test]
    fn test_snapshot_name_display() {
        let name = SnapshotName::new(sample_time(), EMPTY_DIGEST, "hello.txt");
        assert_eq!(name.to_string(), format!("20240501123000_{}_hello.txt", EMPTY_DIGEST));
    }

    /// Tests that base names containing underscores survive parsing.
    #[test]
    fn test_snapshot_name_parse_keeps_underscores_in_base_name() {
        let raw = format!("20240501123000_{}_my_notes_v2.txt", EMPTY_DIGEST);
        let parsed = SnapshotName::parse(&raw).unwrap();

        assert_eq!(parsed.timestamp, sample_time());
        assert_eq!(parsed.digest, EMPTY_DIGEST);
        assert_eq!(parsed.base_name, "my_notes_v2.txt");
    }

    /// Tests that malformed names are rejected.
    #[test]
    fn test_snapshot_name_parse_rejects_malformed() {
        assert!(SnapshotName::parse("hello.txt").is_none());
        assert!(SnapshotName::parse(&format!("2024050112300_{}_a", EMPTY_DIGEST)).is_none());
        assert!(SnapshotName::parse(&format!("20241301123000_{}_a", EMPTY_DIGEST)).is_none());
        assert!(SnapshotName::parse("20240501123000_abc_hello.txt").is_none());
        assert!(SnapshotName::parse(&format!("20240501123000_{}_", EMPTY_DIGEST)).is_none());
        assert!(SnapshotName::parse(&format!("20240501123000_{}_a", EMPTY_DIGEST.to_uppercase())).is_none());
    }
}
