//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;

use crate::{Error, Result};

/// Distinguishes temp files created by concurrent writers in one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write content atomically to a file with locking.
///
/// The content goes to a temp file in the same directory (same filesystem),
/// which is locked, flushed and then renamed over `path`. Readers observe
/// either the old file or the new one, never a truncated mix. When `path`
/// already exists its owner, group and permission bits carry over to the
/// replacement, and are applied before any content is written.
///
/// On failure the temp file is removed and `path` is left as it was.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    tracing::trace!(path = %path.display(), temp = %temp_path.display(), "writing temp file");

    let result = write_temp(path, &temp_path, content).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Build the `.{name}.{pid}.{n}.tmp` sibling path for `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    path.with_file_name(temp_name)
}

fn write_temp(path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = create_temp(path, temp_path)?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    // Flush to disk before the rename makes the content visible
    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    Ok(())
}

/// Create the empty temp file, owner-only, then give it the ownership and
/// mode of the file it replaces.
///
/// No content is written until the temp file is at most as readable as
/// `path`; a new file stays `0o600`.
fn create_temp(path: &Path, temp_path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let temp_file = options.open(temp_path).map_err(|e| Error::io(temp_path, e))?;
    copy_metadata(path, &temp_file, temp_path)?;
    Ok(temp_file)
}

/// Give the temp file the owner, group and permissions of `original`.
fn copy_metadata(original: &Path, temp_file: &File, temp_path: &Path) -> Result<()> {
    let meta = match fs::metadata(original) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(original, e)),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let current = temp_file.metadata().map_err(|e| Error::io(temp_path, e))?;
        let uid = (current.uid() != meta.uid()).then_some(meta.uid());
        let gid = (current.gid() != meta.gid()).then_some(meta.gid());
        if uid.is_some() || gid.is_some() {
            tracing::trace!(path = %original.display(), ?uid, ?gid, "copying ownership");
            std::os::unix::fs::fchown(temp_file, uid, gid).map_err(|e| Error::io(temp_path, e))?;
        }
    }

    // After chown, which may clear setuid/setgid bits
    temp_file
        .set_permissions(meta.permissions())
        .map_err(|e| Error::io(temp_path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file, returning `None` if it does not exist.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/etc/ups/ups.conf"));
        assert_eq!(temp.parent(), Some(Path::new("/etc/ups")));

        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".ups.conf."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn temp_paths_are_unique_within_process() {
        let a = temp_path_for(Path::new("/etc/ups/ups.conf"));
        let b = temp_path_for(Path::new("/etc/ups/ups.conf"));
        assert_ne!(a, b);
    }

    #[cfg(unix)]
    #[test]
    fn temp_file_is_restricted_before_content() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("upsd.users");
        fs::write(&path, "[admin]\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        let temp_path = temp_path_for(&path);
        let temp_file = create_temp(&path, &temp_path).unwrap();
        let meta = temp_file.metadata().unwrap();

        assert_eq!(meta.len(), 0);
        assert_eq!(meta.permissions().mode() & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn temp_file_for_new_target_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("upsd.users");

        let temp_path = temp_path_for(&path);
        let temp_file = create_temp(&path, &temp_path).unwrap();

        let mode = temp_file.metadata().unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn read_text_if_exists_missing_is_none() {
        let dir = tempdir().unwrap();
        let result = read_text_if_exists(&dir.path().join("absent.conf")).unwrap();
        assert!(result.is_none());
    }
}
