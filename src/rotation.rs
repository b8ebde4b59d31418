use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::message::{backup_timestamp, now};
use crate::Result;

/// An open log file together with the path it was opened from.
#[derive(Debug)]
pub struct ManagedFile {
    path: PathBuf,
    file: File,
}

impl ManagedFile {
    /// Open `path` for appending, creating it if absent.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current on-disk size of the open handle.
    pub fn size(&self) -> io::Result<u64> {
        self.file.metadata().map(|m| m.len())
    }

    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.file.write_all(line)
    }
}

/// Backup path for `path` rotated at `at`: `<path>.bak<YYYYMMDDHHMMSSmmm>`.
pub fn backup_path(path: &Path, at: OffsetDateTime) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    name.push(backup_timestamp(at));
    PathBuf::from(name)
}

/// Size-threshold rotation of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    max_size: u64,
}

impl RotationPolicy {
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// True iff the file has reached the threshold.
    ///
    /// A failed stat is reported on the diagnostic channel and treated as
    /// "not yet".
    pub fn needs_rotation(&self, file: &ManagedFile) -> bool {
        match file.size() {
            Ok(size) => size >= self.max_size,
            Err(e) => {
                tracing::warn!(path = %file.path().display(), error = %e, "failed to stat log file");
                false
            }
        }
    }

    /// Move the file aside and reopen a fresh one at the same path.
    pub fn rotate(&self, file: ManagedFile) -> Result<ManagedFile> {
        self.rotate_at(file, now())
    }

    /// Rotate using `at` for the backup suffix.
    ///
    /// A failed rename is logged and ignored; the file is reopened at its
    /// original path regardless. Only a failed reopen is an error.
    pub fn rotate_at(&self, file: ManagedFile, at: OffsetDateTime) -> Result<ManagedFile> {
        let ManagedFile { path, file } = file;
        let backup = backup_path(&path, at);

        drop(file);

        if let Err(e) = std::fs::rename(&path, &backup) {
            tracing::warn!(
                from = %path.display(),
                to = %backup.display(),
                error = %e,
                "failed to rename rotated log file"
            );
        } else {
            tracing::debug!(from = %path.display(), to = %backup.display(), "rotated log file");
        }

        ManagedFile::open(&path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to reopen log file");
            e.into()
        })
    }
}
