//! Verify XML config is parsed and used without touching user state.

use std::fs;
use tempfile::tempdir;

use scoped_fs::{Config, LogLevel, ScopedDir, load_config_from_xml_path};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let root = td.path().join("data");
    let log_file = td.path().join("scoped_fs.log");

    let xml = format!(
        r#"
<config>
  <root>{}</root>
  <file_mode>0600</file_mode>
  <dir_mode>0o700</dir_mode>
  <log_level>debug</log_level>
  <log_file>{}</log_file>
</config>
"#,
        root.display(),
        log_file.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.root.as_deref(), Some(root.as_path()), "root mismatch");
    assert_eq!(cfg.file_mode, 0o600);
    assert_eq!(cfg.dir_mode, 0o700);
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.log_file.as_deref(), Some(log_file.as_path()));
}

#[test]
fn missing_fields_keep_defaults() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config>\n  <log_file>  </log_file>\n</config>").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    let def = Config::default();
    assert_eq!(cfg.root, None);
    assert_eq!(cfg.file_mode, def.file_mode);
    assert_eq!(cfg.dir_mode, def.dir_mode);
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert_eq!(cfg.log_file, None, "whitespace-only log_file is treated as unset");
}

#[test]
fn malformed_xml_errors() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config>\n  <root>/tmp/x\n</config>").unwrap();
    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(format!("{err}").contains("parse config xml"));
}

#[test]
fn unknown_field_is_rejected() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><colour>blue</colour></config>").unwrap();
    assert!(load_config_from_xml_path(&cfg_path).is_err());
}

#[test]
fn bad_mode_is_reported_with_field_name() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><file_mode>rw-r--r--</file_mode></config>").unwrap();
    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(format!("{err:#}").contains("file_mode"), "{err:#}");
}

#[cfg(unix)]
#[test]
fn handle_from_config_uses_configured_modes() {
    use std::os::unix::fs::PermissionsExt;

    let td = tempdir().unwrap();
    let mut cfg = Config::new(td.path());
    cfg.file_mode = 0o600;
    let dir = ScopedDir::from_config(&cfg).unwrap();

    dir.write("secret.txt", "s", Default::default()).unwrap();
    let mode = fs::metadata(td.path().join("secret.txt"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode & !0o600, 0, "unexpected mode {mode:o}");
}
