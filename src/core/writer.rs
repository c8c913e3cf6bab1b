//! Artifact writer.
//!
//! Writes the three env files and appends the gateway hosts entry. Steps run
//! in order and stop at the first failure; nothing already written is rolled
//! back.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::constants::{BACKEND_FILE, FRONTEND_FILE, PLATFORM_FILE};
use crate::core::hosts::{hosts_line, HostsSink};
use crate::core::types::Artifacts;
use crate::error::{Result, WriteError};

/// Whether to touch the hosts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostsPolicy {
    Append,
    Skip,
}

/// Account that should own the written env files.
///
/// Set when running under `sudo`, so files created by root stay readable by
/// the operator who invoked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOwner {
    pub uid: u32,
    pub gid: u32,
}

impl FileOwner {
    /// The invoking user from `SUDO_UID` / `SUDO_GID`, if both are set.
    pub fn from_sudo_env() -> Option<Self> {
        let uid = std::env::var("SUDO_UID").ok();
        let gid = std::env::var("SUDO_GID").ok();
        Self::parse(uid.as_deref(), gid.as_deref())
    }

    fn parse(uid: Option<&str>, gid: Option<&str>) -> Option<Self> {
        Some(Self {
            uid: uid?.trim().parse().ok()?,
            gid: gid?.trim().parse().ok()?,
        })
    }
}

/// What a write pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Env files written, in order.
    pub files: Vec<PathBuf>,
    /// Hosts target the entry was appended to, if any.
    pub hosts: Option<String>,
}

/// Write all artifacts into `dir` and append the hosts entry.
///
/// Files that end up owned by root are handed to `owner` when one is given.
///
/// # Errors
///
/// Returns `WriteError::File` for the first env file that cannot be written,
/// or `WriteError::Hosts` if the append fails.
pub fn write_outputs(
    dir: &Path,
    artifacts: &Artifacts,
    sink: &mut dyn HostsSink,
    policy: HostsPolicy,
    owner: Option<FileOwner>,
) -> Result<WriteReport> {
    let mut files = Vec::with_capacity(3);

    for (name, content) in [
        (PLATFORM_FILE, &artifacts.platform),
        (FRONTEND_FILE, &artifacts.frontend),
        (BACKEND_FILE, &artifacts.backend),
    ] {
        let path = dir.join(name);
        write_file(&path, content, owner)?;
        debug!("Wrote {} ({} bytes)", path.display(), content.len());
        files.push(path);
    }

    let hosts = match policy {
        HostsPolicy::Append => {
            sink.append(&hosts_line())?;
            info!("Mapped gateway host in {}", sink.describe());
            Some(sink.describe())
        }
        HostsPolicy::Skip => {
            info!("Skipping hosts file update");
            None
        }
    };

    Ok(WriteReport { files, hosts })
}

/// Write `content` to `path`, truncating any existing file.
///
/// On Unix the file is restricted to its owner (0600) before any content is
/// written.
fn write_file(path: &Path, content: &str, owner: Option<FileOwner>) -> Result<()> {
    let to_err = |source: std::io::Error| WriteError::File {
        path: path.to_path_buf(),
        source,
    };

    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::{MetadataExt, OpenOptionsExt, PermissionsExt};

        let file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)
            .map_err(to_err)?;

        // mode() only applies on create
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(to_err)?;

        if let Some(owner) = owner {
            if file.metadata().map_err(to_err)?.uid() == 0 && owner.uid != 0 {
                std::os::unix::fs::fchown(&file, Some(owner.uid), Some(owner.gid))
                    .map_err(to_err)?;
                debug!("Handed {} to uid {}", path.display(), owner.uid);
            }
        }
        file
    };

    #[cfg(not(unix))]
    let mut file = {
        let _ = owner;
        std::fs::File::create(path).map_err(to_err)?
    };

    file.write_all(content.as_bytes()).map_err(to_err)?;
    file.flush().map_err(to_err)?;

    Ok(())
}
