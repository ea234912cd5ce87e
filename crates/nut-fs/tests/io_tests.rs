use nut_fs::io;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ups.conf");

    io::write_atomic(&path, b"[myups]\ndriver = apcsmart\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[myups]\ndriver = apcsmart\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("nut.conf");
    fs::write(&file_path, "MODE = none\n").unwrap();

    io::write_atomic(&file_path, b"MODE = netserver\n").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "MODE = netserver\n");
}

#[test]
fn test_write_atomic_replaces_inode() {
    // A reader holding the old file keeps seeing the old content: the new
    // content arrives by rename, not by truncating the open file.
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upsd.conf");
    fs::write(&file_path, "LISTEN = 127.0.0.1\n").unwrap();

    let reader = fs::File::open(&file_path).unwrap();

    io::write_atomic(&file_path, b"LISTEN = 0.0.0.0\n").unwrap();

    let mut old = String::new();
    std::io::Read::read_to_string(&mut &reader, &mut old).unwrap();
    assert_eq!(old, "LISTEN = 127.0.0.1\n");

    let new = fs::read_to_string(&file_path).unwrap();
    assert_eq!(new, "LISTEN = 0.0.0.0\n");
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upsmon.conf");
    fs::write(&file_path, "hello").unwrap();

    let content = io::read_text(&file_path).unwrap();
    assert_eq!(content, "hello");
}

#[test]
fn test_read_text_nonexistent_file() {
    let result = io::read_text(std::path::Path::new("/nonexistent/file.conf"));
    let err = result.unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
}

#[test]
fn test_write_text_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("upsd.users");

    io::write_text(&path, "[admin]\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[admin]\n");
}

#[cfg(unix)]
#[test]
fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upsd.users");
    fs::write(&file_path, "[admin]\n").unwrap();
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

    io::write_text(&file_path, "[monuser]\n").unwrap();

    let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_preserves_owner_and_group() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upsd.users");
    fs::write(&file_path, "[admin]\n").unwrap();

    if fs::metadata(&file_path).unwrap().uid() != 0 {
        eprintln!("Skipping test: changing the group of a file needs root");
        return;
    }

    std::os::unix::fs::chown(&file_path, None, Some(57)).unwrap();
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

    io::write_text(&file_path, "[monuser]\n").unwrap();

    let meta = fs::metadata(&file_path).unwrap();
    assert_eq!(meta.uid(), 0);
    assert_eq!(meta.gid(), 57);
    assert_eq!(meta.permissions().mode() & 0o777, 0o640);
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "[monuser]\n");
}
