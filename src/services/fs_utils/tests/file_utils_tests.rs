use super::file_utils::atomic_write;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_atomic_write_creates_parent_and_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("nested").join("exclude.json");

    atomic_write(&target, b"[]").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "[]");
    assert_eq!(fs::read_dir(tmp.path().join("nested")).unwrap().count(), 1);
}

#[test]
fn test_atomic_write_replaces_existing_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("settings.json");
    fs::write(&target, "old").unwrap();

    atomic_write(&target, "新しい".as_bytes()).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "新しい");
}

#[test]
fn test_atomic_write_failure_leaves_no_staged_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("exclude.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "kept").unwrap();

    assert!(atomic_write(&target, b"[]").is_err());

    assert!(target.is_dir());
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "kept");
    let leftovers: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("exclude.json")]);
}
