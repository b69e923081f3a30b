//! Size-rotated line writer for trace output.
//!
//! When the live file grows past the size limit it is shifted to `<file>.1`,
//! older backups move up one slot (`.1` to `.2`, and so on) and the oldest
//! one past the retention count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of numbered backups kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appends newline-terminated records to a file, rotating by size.
///
/// The handle is opened lazily on the first write and reopened after every
/// rotation. Writes take `&self`; an internal `Mutex` guards the handle.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// A writer using the default size limit and backup count.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup, `1` being the most recent.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or
    /// an error if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_lines_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));
        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(read(writer.path()), "one\ntwo\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn test_backup_paths_are_numbered() {
        let writer = RotatingFile::new(PathBuf::from("/tmp/ztodo-otlp.json"));
        assert_eq!(writer.backup_path(2), PathBuf::from("/tmp/ztodo-otlp.json.2"));
    }

    #[test]
    fn test_oversized_file_rotates_before_write() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 3);
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();
        assert_eq!(read(&writer.backup_path(1)), "first\n");
        assert_eq!(read(writer.path()), "second\n");
    }

    #[test]
    fn test_rotation_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 1, 2);
        for line in ["a", "b", "c", "d"] {
            writer.write_line(line).unwrap();
        }
        assert_eq!(read(writer.path()), "d\n");
        assert_eq!(read(&writer.backup_path(1)), "c\n");
        assert_eq!(read(&writer.backup_path(2)), "b\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn test_zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 1, 0);
        writer.write_line("old").unwrap();
        writer.write_line("new").unwrap();
        assert_eq!(read(writer.path()), "new\n");
        assert!(!writer.backup_path(1).exists());
    }
}
