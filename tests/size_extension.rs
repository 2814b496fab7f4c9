use std::fs;
use tempfile::tempdir;

use scoped_fs::{ScopedDir, WriteOptions};

#[test]
fn size_matches_bytes_on_disk() {
    let td = tempdir().unwrap();
    let body = vec![0x5au8; 16361];
    fs::create_dir(td.path().join("files")).unwrap();
    fs::write(td.path().join("files/284.jpg"), &body).unwrap();

    let dir = ScopedDir::open(td.path()).unwrap();
    assert_eq!(dir.get_size("files/284.jpg").unwrap(), 16361);
    assert_eq!(dir.get_extension("files/284.jpg"), "jpg");
}

#[test]
fn empty_file_has_zero_size() {
    let td = tempdir().unwrap();
    let dir = ScopedDir::open(td.path()).unwrap();
    dir.write("empty", "", WriteOptions::default()).unwrap();
    assert_eq!(dir.get_size("empty").unwrap(), 0);
}

#[test]
fn size_of_missing_path_is_not_found() {
    let td = tempdir().unwrap();
    let dir = ScopedDir::open(td.path()).unwrap();
    assert!(dir.get_size("nope").unwrap_err().is_not_found());
}

#[test]
fn extension_is_pure() {
    let td = tempdir().unwrap();
    let dir = ScopedDir::open(td.path()).unwrap();
    // Nothing needs to exist.
    assert_eq!(dir.get_extension("ghost/photo.png"), "png");
    assert_eq!(dir.get_extension("ghost/Makefile"), "");
    assert_eq!(scoped_fs::fs_ops::cwd::get_extension("a.b.c"), "c");
}
