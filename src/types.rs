//! Core types describing opened files.

use std::time::SystemTime;

/// Type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// Metadata for an opened file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Base name of the entry.
    pub name: String,
    /// Type of the entry (file or directory).
    pub file_type: FileType,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    #[cfg_attr(feature = "serde", serde(with = "system_time_serde"))]
    pub modified: SystemTime,
}

impl Metadata {
    /// Metadata for a regular file of `size` bytes.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            file_type: FileType::File,
            size,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    /// Metadata for a directory.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_type: FileType::Directory,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Serde support for SystemTime (when serde feature is enabled).
#[cfg(feature = "serde")]
mod system_time_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        (duration.as_secs(), duration.subsec_nanos()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (secs, nanos): (u64, u32) = Deserialize::deserialize(deserializer)?;
        Duration::from_secs(secs)
            .checked_add(Duration::from_nanos(u64::from(nanos)))
            .and_then(|since_epoch| UNIX_EPOCH.checked_add(since_epoch))
            .ok_or_else(|| D::Error::custom("timestamp out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_metadata() {
        let m = Metadata::file("a.txt", 5);
        assert!(m.is_file());
        assert!(!m.is_dir());
        assert_eq!(m.size, 5);
        assert_eq!(m.name, "a.txt");
    }

    #[test]
    fn dir_metadata() {
        let m = Metadata::dir("themes");
        assert!(m.is_dir());
        assert!(!m.is_file());
        assert_eq!(m.size, 0);
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileType>();
        assert_send_sync::<Metadata>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn metadata_serde_keeps_fields() {
        let m = Metadata::file("a.txt", 5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn metadata_serde_rejects_out_of_range_timestamp() {
        let json = r#"{"name":"a","file_type":"File","size":0,"modified":[18446744073709551615,999999999]}"#;
        let result: Result<Metadata, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("timestamp out of range"));
    }
}
