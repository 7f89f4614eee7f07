//! Plain-text presentation of the session list.

use crate::session::SnapshotRow;

use super::SessionView;

/// Shows sessions as free text, one line per student.
///
/// Open sessions omit the blank time out and elapsed fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextView;

impl TextView {
    fn line(row: &SnapshotRow) -> String {
        let mut fields = vec![row.id.as_str(), row.time_in.as_str()];
        if !row.time_out.is_empty() {
            fields.push(&row.time_out);
            fields.push(&row.elapsed);
        }
        fields.join(" --- ")
    }
}

impl SessionView for TextView {
    fn render(&self, rows: &[SnapshotRow]) -> String {
        rows.iter().map(Self::line).collect::<Vec<_>>().join("\n")
    }

    fn snapshot_content(&self, rows: &[SnapshotRow]) -> String {
        rows.iter().map(|r| Self::line(r) + "\n").collect()
    }
}
