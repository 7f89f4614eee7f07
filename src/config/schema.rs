//! Configuration schema definitions.
//!
//! This module contains the struct that maps to the YAML configuration file
//! and the fully resolved settings a run uses.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::view::ViewKind;

/// Root structure of `config.yml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Directory for both log files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,

    /// Appended to every completed-session line when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counselor_name: Option<String>,

    /// Presentation variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewKind>,
}

impl TrackerConfig {
    /// Apply `other` on top of `self`; keys set in `other` win.
    pub fn merge(self, other: TrackerConfig) -> TrackerConfig {
        TrackerConfig {
            log_directory: other.log_directory.or(self.log_directory),
            counselor_name: other.counselor_name.or(self.counselor_name),
            view: other.view.or(self.view),
        }
    }
}

/// Settings after defaults, file and flags have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub log_directory: PathBuf,
    pub counselor_name: Option<String>,
    pub view: ViewKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
log_directory: /srv/guidance
counselor_name: "Counselor's Name"
view: text
"#;
        let config: TrackerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_directory, Some(PathBuf::from("/srv/guidance")));
        assert_eq!(config.counselor_name.as_deref(), Some("Counselor's Name"));
        assert_eq!(config.view, Some(ViewKind::Text));
    }

    #[test]
    fn empty_document_is_default() {
        let config: TrackerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = serde_yaml::from_str::<TrackerConfig>("log_dir: /tmp\n");
        assert!(result.is_err());
    }

    #[test]
    fn merge_prefers_overlay() {
        let base = TrackerConfig {
            log_directory: Some("/base".into()),
            counselor_name: Some("Base".into()),
            view: Some(ViewKind::Text),
        };
        let overlay = TrackerConfig {
            log_directory: Some("/overlay".into()),
            ..Default::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.log_directory, Some(PathBuf::from("/overlay")));
        assert_eq!(merged.counselor_name.as_deref(), Some("Base"));
        assert_eq!(merged.view, Some(ViewKind::Text));
    }

    #[test]
    fn serializes_without_unset_keys() {
        let config = TrackerConfig {
            view: Some(ViewKind::Table),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(yaml.trim(), "view: table");
    }
}
