//! Configuration loading for guidance-log.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use guidance_log::config::{load_config, TrackerConfig};
//! use guidance_log::view::ViewKind;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "view: text\ncounselor_name: Ms. Rivera\n").unwrap();
//!
//! let config = load_config(Some(&path), TrackerConfig::default()).unwrap();
//! assert_eq!(config.view, ViewKind::Text);
//! assert_eq!(config.counselor_name.as_deref(), Some("Ms. Rivera"));
//! ```
//!
//! # Configuration File Location
//!
//! Without `--config`, the user config at `~/.guidance-log/config.yml` is
//! read when it exists. Command-line flags override anything in the file.

pub mod loader;
pub mod schema;

pub use loader::{find_user_config, load_config, load_config_file, resolve};
pub use schema::{ResolvedConfig, TrackerConfig};
