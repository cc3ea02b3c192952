//! Persistence hooks for history entries.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{Result, VizError};

use super::HistoryEntry;

/// Receives each entry right after it is appended.
///
/// Called while the store's lock is held, so records arrive in index order
/// and a sink must not call back into the store.
pub trait HistorySink: Send + Sync {
    /// # Errors
    /// Returns an error if the entry could not be persisted. The store logs
    /// the failure and keeps the entry in memory.
    fn record(&self, entry: &HistoryEntry) -> Result<()>;
}

/// Writes one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write + Send = File> {
    writer: Mutex<W>,
    path: Option<PathBuf>,
}

impl JsonLinesSink<File> {
    /// Append to `path`, creating it if needed.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| VizError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            writer: Mutex::new(file),
            path: Some(path.to_path_buf()),
        })
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            path: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> HistorySink for JsonLinesSink<W> {
    fn record(&self, entry: &HistoryEntry) -> Result<()> {
        let line = serde_json::to_string(entry)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}
