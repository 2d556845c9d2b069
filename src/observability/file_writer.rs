//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] appends log records to a file, renaming it to a timestamped
//! backup once it grows past a size threshold and pruning old backups. It
//! implements [`MakeWriter`] so it can back a `tracing-subscriber` fmt layer.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If it exceeds the limit, rename the file to `<name>.<unix_millis>`
/// 3. Remove the oldest backups beyond the retention limit
///
/// # Example
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use unit_converter::observability::FileWriter;
///
/// let writer = FileWriter::new(PathBuf::from("/tmp/unit-converter.log"));
/// writer.append(b"converter started\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_size: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_size: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_size,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf` to the file, rotating first if necessary.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors during rotation, open, write or flush, and
    /// when the internal mutex is poisoned.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let backup_path = self.next_backup_path()?;

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Picks `<name>.<unix_millis>`, or `<name>.<unix_millis>-NNNN` past the
    /// highest sequence already used in that millisecond, so that name order
    /// stays age order even after the oldest backups were pruned.
    fn next_backup_path(&self) -> io::Result<PathBuf> {
        let stamp = chrono::Utc::now().timestamp_millis().to_string();
        let prefix = format!("{}{stamp}", self.backup_prefix()?);

        let latest = self
            .backups()?
            .iter()
            .filter_map(|path| {
                let rest = path.file_name()?.to_str()?.strip_prefix(&prefix)?;
                if rest.is_empty() {
                    Some(0)
                } else {
                    rest.strip_prefix('-')?.parse::<u32>().ok()
                }
            })
            .max();

        let suffix = match latest {
            None => stamp,
            Some(seq) => format!("{stamp}-{:04}", seq + 1),
        };
        Ok(self.backup_path(&suffix))
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    fn backup_prefix(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }

    /// Lists backups of this file, newest first.
    ///
    /// # Errors
    ///
    /// Fails when the parent directory cannot be read.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let prefix = self.backup_prefix()?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| {
                        name.strip_prefix(&prefix)
                            .and_then(|suffix| suffix.chars().next())
                            .is_some_and(|c| c.is_ascii_digit())
                    })
            })
            .collect();

        backups.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(backups)
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        for old_backup in self.backups()?.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Borrowed writer handed out to the fmt layer for one record.
#[derive(Debug)]
pub struct FileWriterGuard<'a> {
    inner: &'a FileWriter,
}

impl Write for FileWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterGuard { inner: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(path.clone());

        writer.append(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn rotates_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::with_limits(path.clone(), 64, 2);
        let line = [b'x'; 40];

        for _ in 0..10 {
            writer.append(&line).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() <= 80);
        for backup in &backups {
            assert_eq!(fs::metadata(backup).unwrap().len(), 80);
        }
    }

    #[test]
    fn newest_backup_holds_latest_rotated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::with_limits(path.clone(), 64, 2);

        for i in 0..10 {
            writer.append(format!("{i:<39}\n").as_bytes()).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(fs::read_to_string(&backups[0]).unwrap().starts_with('6'));
        assert!(fs::read_to_string(&backups[1]).unwrap().starts_with('4'));
        assert!(fs::read_to_string(&path).unwrap().starts_with('8'));
    }

    #[test]
    fn ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log.old"), "x").unwrap();
        fs::write(dir.path().join("other.log.123"), "x").unwrap();
        let writer = FileWriter::new(dir.path().join("app.log"));
        assert!(writer.backups().unwrap().is_empty());
    }
}
