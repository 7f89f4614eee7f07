//! Log file writer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{GuidanceError, Result};
use crate::session::{format_timestamp, EndedSession};

use super::{LOG_FILE_NAME, SNAPSHOT_FILE_NAME};

/// Field separator used in every log line.
const SEPARATOR: &str = " --- ";

/// Writes completed sessions and snapshots into a log directory.
///
/// No file handle outlives a single call.
#[derive(Debug, Clone)]
pub struct LogWriter {
    directory: PathBuf,
    counselor: Option<String>,
}

impl LogWriter {
    /// Create a writer for `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            counselor: None,
        }
    }

    /// Suffix every appended line with a counselor name.
    pub fn with_counselor(mut self, counselor: Option<String>) -> Self {
        self.counselor = counselor;
        self
    }

    /// Directory both files are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the append-only session log.
    pub fn log_path(&self) -> PathBuf {
        self.directory.join(LOG_FILE_NAME)
    }

    /// Path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.directory.join(SNAPSHOT_FILE_NAME)
    }

    /// Append one line for a completed session, creating the file if needed.
    pub fn append_completed_session(&self, session: &EndedSession) -> Result<()> {
        let path = self.log_path();
        let line = format_log_line(session, self.counselor.as_deref());

        self.ensure_dir(&path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| write_error(&path, source))?;
        writeln!(file, "{}", line).map_err(|source| write_error(&path, source))?;

        tracing::info!(id = %session.id, path = %path.display(), "session logged");
        Ok(())
    }

    /// Replace the snapshot file with `content`.
    pub fn overwrite_snapshot_file(&self, content: &str) -> Result<()> {
        let path = self.snapshot_path();

        self.ensure_dir(&path)?;
        fs::write(&path, content).map_err(|source| write_error(&path, source))?;

        tracing::info!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|source| write_error(path, source))
    }
}

/// Format the persistent log line for a completed session.
///
/// `<id> --- <time in> --- <time out>`, followed by ` --- <counselor>` when
/// a counselor is given. No line terminator.
pub fn format_log_line(session: &EndedSession, counselor: Option<&str>) -> String {
    let time_in = format_timestamp(session.time_in);
    let time_out = format_timestamp(session.time_out);
    let mut line = [session.id.as_str(), time_in.as_str(), time_out.as_str()].join(SEPARATOR);

    if let Some(name) = counselor {
        line.push_str(SEPARATOR);
        line.push_str(name);
    }
    line
}

fn write_error(path: &Path, source: std::io::Error) -> GuidanceError {
    GuidanceError::LogWrite {
        path: path.to_path_buf(),
        source,
    }
}
