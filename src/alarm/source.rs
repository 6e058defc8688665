//! Alarm sound sources.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where the alarm sound comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmSource {
    /// A sound file on disk, selected with `--sound-path`.
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// The bundled sound compiled into the binary.
    Embedded,
}

impl AlarmSource {
    /// Creates a file-backed alarm source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Returns the file path if this is a file-backed source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path } => Some(path),
            Self::Embedded => None,
        }
    }

    /// Returns true if this is the bundled sound.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded)
    }
}

impl fmt::Display for AlarmSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "bundled alarm sound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source() {
        let source = AlarmSource::file("/tmp/bell.wav");
        assert!(!source.is_embedded());
        assert_eq!(source.path(), Some(Path::new("/tmp/bell.wav")));
        assert_eq!(source.to_string(), "/tmp/bell.wav");
    }

    #[test]
    fn test_embedded_source() {
        let source = AlarmSource::Embedded;
        assert!(source.is_embedded());
        assert!(source.path().is_none());
        assert!(source.to_string().contains("bundled"));
    }

    #[test]
    fn test_source_equality() {
        assert_eq!(AlarmSource::file("/a.wav"), AlarmSource::file("/a.wav"));
        assert_ne!(AlarmSource::file("/a.wav"), AlarmSource::Embedded);
    }
}
