//! Free functions rooted at the working directory. Each test changes the
//! process cwd, so they are serialized.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use scoped_fs::WriteOptions;
use scoped_fs::fs_ops::cwd;

struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let prev = env::current_dir().expect("current_dir");
        env::set_current_dir(dir).expect("set_current_dir");
        CwdGuard(prev)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn operations_follow_the_working_directory() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let _g = CwdGuard::enter(&base);

    cwd::create_dir("files", WriteOptions::default()).unwrap();
    cwd::write("files/hello.txt", "Hello", WriteOptions::default()).unwrap();
    cwd::update("files/hello.txt", ", read!").unwrap();
    assert_eq!(cwd::read("files/hello.txt").unwrap(), "Hello, read!");

    cwd::copy("files/hello.txt", "files/copy.txt").unwrap();
    assert!(cwd::exists("files/copy.txt"));
    assert_eq!(cwd::get_size("files/copy.txt").unwrap(), 12);
    assert!(cwd::stat("files").unwrap().is_dir());

    let listed = cwd::list_contents(Some(Path::new("files")), false).unwrap();
    assert_eq!(listed.len(), 2);

    cwd::delete("files/copy.txt").unwrap();
    assert!(!cwd::exists("files/copy.txt"));
    assert!(base.join("files/hello.txt").exists());
}

#[test]
#[serial]
fn resolve_uses_cwd_at_call_time() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let first = dunce::canonicalize(first.path()).unwrap();
    let second_path = dunce::canonicalize(second.path()).unwrap();

    {
        let _g = CwdGuard::enter(&first);
        assert_eq!(cwd::resolve("x.txt").unwrap(), first.join("x.txt"));
        assert_eq!(cwd::resolve("").unwrap(), first);
    }
    {
        let _g = CwdGuard::enter(&second_path);
        assert_eq!(cwd::resolve("./x.txt").unwrap(), second_path.join("x.txt"));
    }
}

#[test]
#[serial]
fn json_helpers_use_cwd() {
    let td = tempdir().unwrap();
    let _g = CwdGuard::enter(td.path());

    let v = serde_json::json!({"ok": true});
    cwd::write_json("state.json", &v, WriteOptions::default()).unwrap();
    let back: serde_json::Value = cwd::read_json("state.json").unwrap();
    assert_eq!(back, v);
    assert!(td.path().join("state.json").exists());
}

#[test]
#[serial]
fn cwd_listing_defaults_to_working_directory() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("one"), "1").unwrap();
    fs::write(td.path().join("two"), "2").unwrap();
    let _g = CwdGuard::enter(td.path());

    let names: Vec<_> = cwd::list_contents(None, false)
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["one", "two"]);
}
