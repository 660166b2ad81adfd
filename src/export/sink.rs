//! Download sinks
//!
//! A sink receives the finished document bytes and a file name and decides
//! where they go. The terminal shells save into a directory; tests collect
//! deliveries in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};

/// Where a delivered document ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Human-readable location (a path for file sinks)
    pub location: String,
    /// Number of bytes delivered
    pub size: usize,
}

/// Receives an exported document
pub trait DownloadSink {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> ReportResult<Delivery>;
}

/// Saves documents into a directory, replacing any file of the same name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> ReportResult<Delivery> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ReportError::Export(format!(
                "Failed to create output directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(filename);
        let file = File::create(&path).map_err(|e| {
            ReportError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .and_then(|_| writer.flush())
            .map_err(|e| {
                ReportError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "report written");
        Ok(Delivery {
            location: path.display().to_string(),
            size: bytes.len(),
        })
    }
}

/// Keeps every delivered document in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliveries in the order received
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    /// Most recent delivery
    pub fn last(&self) -> Option<&(String, Vec<u8>)> {
        self.files.last()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> ReportResult<Delivery> {
        self.files.push((filename.to_string(), bytes.to_vec()));
        Ok(Delivery {
            location: format!("memory:{}", filename),
            size: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_sink_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("reports");
        let mut sink = DirectorySink::new(&out);

        let delivery = sink.deliver(b"hello", "report.xls").unwrap();
        assert_eq!(delivery.size, 5);
        assert_eq!(std::fs::read(out.join("report.xls")).unwrap(), b"hello");
    }

    #[test]
    fn test_directory_sink_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp_dir.path());
        sink.deliver(b"first version", "r.xls").unwrap();
        sink.deliver(b"second", "r.xls").unwrap();
        assert_eq!(std::fs::read(temp_dir.path().join("r.xls")).unwrap(), b"second");
    }

    #[test]
    fn test_directory_sink_error_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let mut sink = DirectorySink::new(&blocker);
        let err = sink.deliver(b"data", "r.xls").unwrap_err();
        assert!(err.is_export());
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.deliver(b"a", "one.xls").unwrap();
        sink.deliver(b"bb", "two.xls").unwrap();
        assert_eq!(sink.files().len(), 2);
        assert_eq!(sink.last().unwrap().0, "two.xls");
    }
}
