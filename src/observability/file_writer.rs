//! Rotating file writer with size-based rotation and backup retention.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe file writer that rotates when the file grows past the size
/// threshold.
///
/// On rotation the current file is renamed with a Unix-timestamp suffix
/// (`<name>.json.<timestamp>`) and a fresh file is opened on the next
/// write; backups beyond the retention limit are deleted. The file handle
/// is opened lazily so construction never fails.
pub struct RotatingFile {
    file_path: PathBuf,
    handle: Mutex<Option<fs::File>>,
}

impl RotatingFile {
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file is over the threshold.
    ///
    /// The line is flushed immediately so traces survive abrupt plugin
    /// termination.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *handle = None;
                self.rotate()?;
            }
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no file handle"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));
        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.prune_backups()
    }

    /// Deletes backups beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored so pruning always makes as
    /// much progress as it can.
    fn prune_backups(&self) -> std::io::Result<()> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no parent directory"))?;
        let stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_and_creates_the_file_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");

        let writer = RotatingFile::new(path.clone());
        assert!(!path.exists());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }
}
