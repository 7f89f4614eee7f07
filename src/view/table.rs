//! Table presentation of the session list.

use crate::session::SnapshotRow;

use super::SessionView;

const HEADERS: [&str; 4] = ["ID", "Time In", "Time Out", "Elapsed Time"];

/// Shows sessions as a bordered grid, one row per student.
///
/// Saved snapshots keep the column order with every cell followed by
/// `" --- "`, trailing separator included.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableView;

impl SessionView for TableView {
    fn render(&self, rows: &[SnapshotRow]) -> String {
        SessionGrid::from_rows(rows).render()
    }

    fn snapshot_content(&self, rows: &[SnapshotRow]) -> String {
        let mut output = String::new();
        for row in rows {
            for cell in cells(row) {
                output.push_str(cell);
                output.push_str(" --- ");
            }
            output.push('\n');
        }
        output
    }
}

fn cells(row: &SnapshotRow) -> [&str; 4] {
    [&row.id, &row.time_in, &row.time_out, &row.elapsed]
}

/// Box-drawn grid with one column per session field.
#[derive(Debug)]
struct SessionGrid<'a> {
    rows: Vec<[&'a str; 4]>,
    column_widths: [usize; 4],
}

impl<'a> SessionGrid<'a> {
    fn from_rows(rows: &'a [SnapshotRow]) -> Self {
        let mut column_widths = HEADERS.map(width);
        let rows: Vec<[&str; 4]> = rows.iter().map(cells).collect();

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                column_widths[i] = column_widths[i].max(width(cell));
            }
        }

        Self {
            rows,
            column_widths,
        }
    }

    fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');
        output.push_str(&self.render_row(&HEADERS));
        output.push('\n');
        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));
        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        let mid = mid.to_string();
        format!("{}{}{}", left, segments.join(mid.as_str()), right)
    }

    fn render_row(&self, row: &[&str; 4]) -> String {
        let mut s = String::from("│");
        for (cell, w) in row.iter().zip(self.column_widths) {
            let pad = w - width(cell);
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        s
    }
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}
