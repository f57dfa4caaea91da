//! Human-readable snapshot output.

use owo_colors::OwoColorize;
use std::fmt::Write as _;
use taskboard_pages::{Card, Column, Snapshot};

/// Renders every column and its cards, one card per line.
#[must_use]
pub fn render_snapshot(snapshot: &Snapshot, color: bool) -> String {
    let mut out = String::new();
    for column in &snapshot.columns {
        render_column(&mut out, column, color);
    }
    if !snapshot.faults.is_empty() {
        let heading = format!("{} contained failure(s)", snapshot.faults.len());
        if color {
            let _ = writeln!(out, "{}", heading.yellow());
        } else {
            let _ = writeln!(out, "{heading}");
        }
        for fault in &snapshot.faults {
            let _ = writeln!(out, "  ! {fault}");
        }
    }
    out
}

fn render_column(out: &mut String, column: &Column, color: bool) {
    let status = if !column.is_rendered() {
        " (not on page)".to_string()
    } else {
        format!(" ({})", column.items.len())
    };
    if color {
        let _ = writeln!(out, "{}{}", column.name.bold(), status.dimmed());
    } else {
        let _ = writeln!(out, "{}{status}", column.name);
    }
    for card in &column.items {
        let _ = writeln!(out, "  - {}", card_line(card));
    }
}

fn card_line(card: &Card) -> String {
    let mut line = card.title.clone();
    if !card.tags.is_empty() {
        let _ = write!(line, " [{}]", card.tags.join(", "));
    }
    if !card.assignee.is_empty() {
        let _ = write!(line, " @{}", card.assignee);
    }
    if !card.due_date.is_empty() {
        let _ = write!(line, " due {}", card.due_date);
    }
    line
}
