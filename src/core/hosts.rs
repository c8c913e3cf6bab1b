//! Hosts file sinks.
//!
//! The gateway hostname is mapped to loopback by appending one entry to the
//! system hosts file. The append target is injected so tests never touch the
//! real file.
//!
//! ## Example
//!
//! ```ignore
//! let mut sink = MemorySink::default();
//! sink.append(&hosts_line())?;
//! assert_eq!(sink.lines().len(), 1);
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::core::constants::{HOSTS_ENTRY, LINE_SEPARATOR, SYSTEM_HOSTS_FILE};
use crate::error::{Result, WriteError};

/// Append-only target for hosts entries.
pub trait HostsSink {
    /// Append `line` verbatim, preserving existing content.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Hosts` if the target cannot be written.
    fn append(&mut self, line: &str) -> Result<()>;

    /// Human-readable description of the target.
    fn describe(&self) -> String;
}

/// The text appended for the gateway entry, including its leading separator.
pub fn hosts_line() -> String {
    format!("{}{}", LINE_SEPARATOR, HOSTS_ENTRY)
}

/// A hosts file on disk.
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The operating system's hosts file.
    pub fn system() -> Self {
        Self::new(SYSTEM_HOSTS_FILE)
    }
}

impl HostsSink for HostsFile {
    fn append(&mut self, line: &str) -> Result<()> {
        let to_err = |source: std::io::Error| WriteError::Hosts {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(to_err)?;
        file.write_all(line.as_bytes()).map_err(to_err)?;
        file.flush().map_err(to_err)?;

        debug!("Appended {} bytes to {}", line.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink that records appended lines.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Every appended line, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Concatenation of every append, as a file would hold it.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

impl HostsSink for MemorySink {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
