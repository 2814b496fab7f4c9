//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Resolves the config file from $SCOPED_FS_CONFIG or the platform default path.
//!
//! Notes:
//! - This module only reads the config file; directory validation happens elsewhere.
//! - Unknown XML fields are reported as errors so misconfigurations surface early.

use anyhow::{anyhow, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use super::{CONFIG_ENV, ROOT_ENV};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "root")]
    root: Option<String>,
    #[serde(rename = "file_mode")]
    file_mode: Option<String>,
    #[serde(rename = "dir_mode")]
    dir_mode: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Parse an octal mode such as "0644", "644" or "0o644".
pub fn parse_mode(s: &str) -> Result<u32> {
    let t = s.trim();
    let digits = t
        .strip_prefix("0o")
        .or_else(|| t.strip_prefix("0O"))
        .unwrap_or(t);
    if digits.is_empty() {
        return Err(anyhow!("empty permission mode"));
    }
    u32::from_str_radix(digits, 8).with_context(|| format!("invalid octal mode '{t}'"))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

// Map XmlConfig -> Config, keeping defaults for absent fields.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    cfg.root = non_empty(parsed.root.as_deref()).map(PathBuf::from);
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);

    if let Some(s) = non_empty(parsed.file_mode.as_deref()) {
        cfg.file_mode = parse_mode(s).context("file_mode")?;
    }
    if let Some(s) = non_empty(parsed.dir_mode.as_deref()) {
        cfg.dir_mode = parse_mode(s).context("dir_mode")?;
    }
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s
            .parse::<LogLevel>()
            .map_err(|e| anyhow!(e))
            .context("log_level")?;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    let cfg = xml_to_config(parsed)
        .with_context(|| format!("invalid value in config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "Loaded config xml");
    Ok(cfg)
}

/// If SCOPED_FS_CONFIG is set, load and return that Config; otherwise Ok(None).
pub fn load_config_from_env() -> Result<Option<Config>> {
    match env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => load_config_from_xml_path(Path::new(&p)).map(Some),
        _ => Ok(None),
    }
}

impl Config {
    /// Load configuration with the following precedence:
    /// 1) the file named by $SCOPED_FS_CONFIG (must exist and parse)
    /// 2) the platform default config.xml, when present
    /// 3) built-in defaults
    ///
    /// $SCOPED_FS_ROOT then overrides `root` when set and non-empty.
    pub fn load() -> Result<Config> {
        let mut cfg = match load_config_from_env()? {
            Some(c) => c,
            None => match default_config_path() {
                Ok(p) if p.exists() => load_config_from_xml_path(&p)?,
                _ => Config::default(),
            },
        };

        if let Some(root) = env::var_os(ROOT_ENV).filter(|r| !r.is_empty()) {
            debug!(root = ?root, "Root overridden from environment");
            cfg.root = Some(PathBuf::from(root));
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_variants() {
        assert_eq!(parse_mode("0644").unwrap(), 0o644);
        assert_eq!(parse_mode(" 755 ").unwrap(), 0o755);
        assert_eq!(parse_mode("0o600").unwrap(), 0o600);
        assert!(parse_mode("0x1ff").is_err());
        assert!(parse_mode("9").is_err());
        assert!(parse_mode("").is_err());
    }
}
