use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use scoped_fs::config::{CONFIG_ENV, ROOT_ENV};
use scoped_fs::{Config, LogLevel, default_config_path, load_config_from_env};

fn clear_env() {
    unsafe {
        std::env::remove_var(CONFIG_ENV);
        std::env::remove_var(ROOT_ENV);
    }
}

#[test]
#[serial]
fn config_env_names_the_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom_config.xml");
    fs::write(&cfg, "<config><log_level>quiet</log_level></config>").unwrap();

    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg);
    }

    assert_eq!(default_config_path().unwrap(), cfg);
    let loaded = load_config_from_env().unwrap().expect("env config");
    assert_eq!(loaded.log_level, LogLevel::Quiet);
    assert_eq!(Config::load().unwrap().log_level, LogLevel::Quiet);

    clear_env();
}

#[test]
#[serial]
fn missing_env_config_file_is_an_error() {
    let td = tempdir().unwrap();
    unsafe {
        std::env::set_var(CONFIG_ENV, td.path().join("absent.xml"));
    }
    assert!(Config::load().is_err());
    clear_env();
}

#[test]
#[serial]
fn root_env_overrides_file_root() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config><root>/from/file</root></config>").unwrap();
    let root = td.path().join("from_env");

    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg);
        std::env::set_var(ROOT_ENV, &root);
    }

    let loaded = Config::load().unwrap();
    assert_eq!(loaded.root.as_deref(), Some(root.as_path()));

    clear_env();
}

#[test]
#[serial]
fn unset_env_yields_none() {
    clear_env();
    assert!(load_config_from_env().unwrap().is_none());
}
