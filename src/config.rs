//! Configuration discovery and effective settings resolution.
//!
//! droidmig reads `droidmig.toml|yaml|yml` from the scan root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `filter`: `all`
//! - `fail_on`: `never`
//! - `exclude`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, ScanError};
use crate::models::{Severity, SeverityFilter};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["droidmig.toml", "droidmig.yaml", "droidmig.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `droidmig.toml|yaml`.
pub struct DroidmigConfig {
    pub output: Option<String>,
    pub filter: Option<String>,
    pub fail_on: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl OutputMode {
    pub fn parse(s: &str) -> OutputMode {
        if s.trim().eq_ignore_ascii_case("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub output: OutputMode,
    pub filter: SeverityFilter,
    /// Lowest severity that makes the scan exit non-zero; `None` never fails.
    pub fail_on: Option<Severity>,
    pub exclude: Vec<String>,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a droidmig config file or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start.to_path_buf(),
        }
    }
}

/// Load the config file in `root`, if any.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, DroidmigConfig)>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DroidmigConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DroidmigConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(ScanError::Config { path, message }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&Path>,
    cli_output: Option<&str>,
    cli_filter: Option<&str>,
    cli_fail_on: Option<&str>,
) -> Result<Effective> {
    let start = cli_root.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let root = detect_root(&start);
    let (config_path, cfg) = match load_config(&root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, DroidmigConfig::default()),
    };

    let output = cli_output
        .map(str::to_string)
        .or(cfg.output)
        .map(|s| OutputMode::parse(&s))
        .unwrap_or_default();
    let filter = cli_filter
        .map(str::to_string)
        .or(cfg.filter)
        .map(|s| SeverityFilter::parse(&s))
        .unwrap_or_default();
    let fail_on = cli_fail_on
        .map(str::to_string)
        .or(cfg.fail_on)
        .and_then(|s| Severity::parse(&s));

    Ok(Effective {
        root,
        config_path,
        output,
        filter,
        fail_on,
        exclude: cfg.exclude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("droidmig.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
filter = "critical"
fail_on = "warning"
exclude = ["**/build/**"]
    "#
        )
        .unwrap();

        let eff = resolve_effective(Some(root), None, None, None).unwrap();
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.filter, SeverityFilter::Only(Severity::Critical));
        assert_eq!(eff.fail_on, Some(Severity::Warning));
        assert_eq!(eff.exclude, vec!["**/build/**".to_string()]);
        assert!(eff.config_path.is_some());
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("droidmig.yaml"),
            "output: json\nfilter: info\nfail_on: never\n",
        )
        .unwrap();

        let eff = resolve_effective(Some(root), Some("human"), Some("warning"), None).unwrap();
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.filter, SeverityFilter::Only(Severity::Warning));
        assert_eq!(eff.fail_on, None);
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(Some(dir.path()), None, None, None).unwrap();
        assert_eq!(eff.root, dir.path());
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.filter, SeverityFilter::All);
        assert!(eff.fail_on.is_none());
        assert!(eff.exclude.is_empty());
        assert!(eff.config_path.is_none());
    }

    #[test]
    fn test_root_detected_from_nested_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("droidmig.toml"), "filter = \"info\"\n").unwrap();
        let nested = root.join("app/src");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_root(&nested), root);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("droidmig.toml"), "bogus_key = 1\n").unwrap();
        let err = resolve_effective(Some(dir.path()), None, None, None).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }
}
