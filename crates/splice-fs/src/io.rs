//! Whole-file text I/O with atomic, locked writes

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoff::ExponentialBackoff;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Tuning knobs for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying when another process holds the lock.
    pub lock_timeout: Duration,
    /// Whether to fsync the temp file before renaming it into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(10),
            enable_fsync: true,
        }
    }
}

fn lock_path(native: &Path) -> PathBuf {
    let mut name = native.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}

fn acquire_lock(native: &Path, timeout: Duration) -> Result<File> {
    let lock_path = lock_path(native);
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;

    let policy = ExponentialBackoff {
        initial_interval: Duration::from_millis(10),
        max_interval: Duration::from_millis(250),
        max_elapsed_time: Some(timeout),
        ..ExponentialBackoff::default()
    };

    backoff::retry(policy, || {
        lock_file
            .try_lock_exclusive()
            .map_err(backoff::Error::transient)
    })
    .map_err(|_| Error::LockFailed {
        path: native.to_path_buf(),
    })?;

    Ok(lock_file)
}

/// Resolve symlinks so the write lands on the file the path points to.
///
/// A target that does not exist yet is written at `native` as given.
fn resolve_target(native: &Path) -> Result<PathBuf> {
    match fs::canonicalize(native) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(native.to_path_buf()),
        Err(e) => Err(Error::io(native, e)),
    }
}

/// Write content atomically to a file.
///
/// Symlinks are followed: the file they point to is replaced and the link is
/// left in place. An existing file keeps its permissions.
///
/// Holds an exclusive advisory lock on `<file>.lock` for the duration of the
/// write, writes to a temp file in the same directory and renames it over the
/// target, so readers see either the old or the new content, never a mix.
/// The lock file is never removed, so every writer locks the same inode.
/// The lock covers the write only: a caller that read the file earlier is not
/// protected against another writer in between.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let target = resolve_target(&native_path)?;
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&target, e)),
    };

    let lock_file = acquire_lock(&target, config.lock_timeout)?;

    // Same directory as the target so the rename never crosses filesystems
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let result = write_temp_then_rename(
        &temp_path,
        &target,
        content,
        permissions,
        config.enable_fsync,
    );
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    let _ = lock_file.unlock();
    if result.is_ok() {
        tracing::trace!(path = %path, target = %target.display(), "atomic write complete");
    }
    result
}

fn write_temp_then_rename(
    temp_path: &Path,
    native_path: &Path,
    content: &[u8],
    permissions: Option<fs::Permissions>,
    fsync: bool,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    if fsync {
        temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    }
    drop(temp_file);

    fs::rename(temp_path, native_path).map_err(|e| Error::io(native_path, e))
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { path: native_path })
}

/// Write text content to a file atomically with default robustness settings.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}
