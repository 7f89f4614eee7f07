//! Plain-text log files for completed visits.
//!
//! Two files live side by side in the log directory:
//! - [`LOG_FILE_NAME`]: append-only, one line per completed session
//! - [`SNAPSHOT_FILE_NAME`]: replaced wholesale on every save

mod writer;

use std::path::PathBuf;

pub use writer::{format_log_line, LogWriter};

/// Append-only log of completed sessions.
pub const LOG_FILE_NAME: &str = "sessions_log.txt";

/// Snapshot of the current view, overwritten on save.
pub const SNAPSHOT_FILE_NAME: &str = "current_sessions_log.txt";

/// Get the default log directory.
///
/// The user's desktop folder, falling back to `<home>/Desktop` and finally
/// the current directory.
pub fn default_log_directory() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_directory_not_empty() {
        let dir = default_log_directory();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn file_names_differ() {
        assert_ne!(LOG_FILE_NAME, SNAPSHOT_FILE_NAME);
    }
}
