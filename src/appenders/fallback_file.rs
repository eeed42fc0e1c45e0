//! Append-only fallback file
//!
//! Used when the collector cannot be reached and fallback is enabled. Every
//! record is one serialized event followed by a newline. The file is opened,
//! appended and closed for each record; there is no rotation or size cap.

use crate::core::{EmitterError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed relative file name used unless the configuration overrides it
pub const DEFAULT_FALLBACK_PATH: &str = "logfile.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackFile {
    path: PathBuf,
}

impl FallbackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `payload` plus a trailing newline as one record.
    ///
    /// With the `file` feature the write holds an exclusive advisory lock so
    /// records from concurrent senders do not interleave.
    pub fn append(&self, payload: &[u8]) -> Result<()> {
        let mut file = self.open().map_err(|e| EmitterError::fallback(&self.path, e))?;

        let mut record = Vec::with_capacity(payload.len() + 1);
        record.extend_from_slice(payload);
        record.push(b'\n');

        #[cfg(feature = "file")]
        fs2::FileExt::lock_exclusive(&file).map_err(|e| EmitterError::fallback(&self.path, e))?;

        // Closing the file on return releases the lock.
        file.write_all(&record)
            .and_then(|()| file.flush())
            .map_err(|e| EmitterError::fallback(&self.path, e))
    }

    fn open(&self) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        options.open(&self.path)
    }
}

impl Default for FallbackFile {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PATH)
    }
}
