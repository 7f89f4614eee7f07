//! Presentation variants for the session list.
//!
//! Both views render the same [`SnapshotRow`] projection; they differ only in
//! layout on screen and in what a saved snapshot file looks like.
//!
//! # Example
//!
//! ```
//! use guidance_log::view::ViewKind;
//!
//! let view = ViewKind::Text.view();
//! assert_eq!(view.snapshot_content(&[]), "");
//! ```

mod table;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::SnapshotRow;

pub use table::TableView;
pub use text::TextView;

/// A way of presenting the current sessions.
pub trait SessionView {
    /// Text shown on screen.
    fn render(&self, rows: &[SnapshotRow]) -> String;

    /// Text written to the snapshot file on save.
    fn snapshot_content(&self, rows: &[SnapshotRow]) -> String;
}

/// Which view to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Bordered grid with one column per field.
    #[default]
    Table,
    /// One line of free text per session.
    Text,
}

impl ViewKind {
    /// Build the view.
    pub fn view(self) -> Box<dyn SessionView> {
        match self {
            Self::Table => Box::new(TableView),
            Self::Text => Box::new(TextView),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SnapshotRow> {
        vec![SnapshotRow {
            id: "1".into(),
            time_in: "2024-09-03 08:00:00".into(),
            time_out: String::new(),
            elapsed: String::new(),
        }]
    }

    #[test]
    fn default_is_table() {
        assert_eq!(ViewKind::default(), ViewKind::Table);
    }

    #[test]
    fn kinds_build_matching_views() {
        let rows = rows();
        assert_eq!(
            ViewKind::Table.view().snapshot_content(&rows),
            TableView.snapshot_content(&rows)
        );
        assert_eq!(
            ViewKind::Text.view().snapshot_content(&rows),
            TextView.snapshot_content(&rows)
        );
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(ViewKind::Table.to_string(), "table");
        assert_eq!(ViewKind::Text.to_string(), "text");
    }

    #[test]
    fn deserializes_from_yaml() {
        let kind: ViewKind = serde_yaml::from_str("text").unwrap();
        assert_eq!(kind, ViewKind::Text);
        assert!(serde_yaml::from_str::<ViewKind>("grid").is_err());
    }
}
