//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file (`--config` path, else `~/.guidance-log/config.yml`)
//! 3. Command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{ResolvedConfig, TrackerConfig};
use crate::error::{GuidanceError, Result};
use crate::logfile::default_log_directory;

/// Location of the user's config file, if one exists.
pub fn find_user_config() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".guidance-log").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<TrackerConfig> {
    if !path.exists() {
        return Err(GuidanceError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(TrackerConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| GuidanceError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration and apply command-line overrides.
///
/// An explicit `config_path` must exist. Without one, the user config file
/// is used when present.
pub fn load_config(config_path: Option<&Path>, overrides: TrackerConfig) -> Result<ResolvedConfig> {
    let file_config = match config_path {
        Some(path) => load_config_file(path)?,
        None => match find_user_config() {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => TrackerConfig::default(),
        },
    };

    Ok(resolve(file_config.merge(overrides)))
}

/// Fill in defaults for anything left unset.
pub fn resolve(config: TrackerConfig) -> ResolvedConfig {
    ResolvedConfig {
        log_directory: config.log_directory.unwrap_or_else(default_log_directory),
        counselor_name: config.counselor_name,
        view: config.view.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewKind;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(
            Some(&temp.path().join("missing.yml")),
            TrackerConfig::default(),
        );
        assert!(matches!(result, Err(GuidanceError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_file_is_used() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "log_directory: /front-desk\nview: text\n");

        let config = load_config(Some(&path), TrackerConfig::default()).unwrap();
        assert_eq!(config.log_directory, PathBuf::from("/front-desk"));
        assert_eq!(config.view, ViewKind::Text);
        assert_eq!(config.counselor_name, None);
    }

    #[test]
    fn overrides_beat_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "log_directory: /front-desk\ncounselor_name: A\n");
        let overrides = TrackerConfig {
            log_directory: Some("/elsewhere".into()),
            ..Default::default()
        };

        let config = load_config(Some(&path), overrides).unwrap();
        assert_eq!(config.log_directory, PathBuf::from("/elsewhere"));
        assert_eq!(config.counselor_name.as_deref(), Some("A"));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "\n");

        let config = load_config_file(&path).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "view: [table\n");

        let err = load_config_file(&path).unwrap_err();
        match err {
            GuidanceError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_defaults_to_desktop_and_table() {
        let config = resolve(TrackerConfig::default());
        assert_eq!(config.log_directory, default_log_directory());
        assert_eq!(config.view, ViewKind::Table);
    }
}
