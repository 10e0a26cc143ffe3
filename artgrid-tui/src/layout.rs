//! Screen layout and mouse hit-testing.
//!
//! Rendering and click handling both derive their geometry from
//! `Areas::compute`, so a click always lands on what was drawn.

use artgrid_core::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the checkbox column, header arrow included.
pub const CHECKBOX_WIDTH: u16 = 5;
pub const DIALOG_WIDTH: u16 = 34;
pub const DIALOG_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub table: Rect,
    pub paginator: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

impl Areas {
    pub fn compute(frame: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(3),
            ])
            .split(frame);
        Self {
            header: chunks[0],
            table: chunks[1],
            paginator: chunks[2],
            detail: chunks[3],
            footer: chunks[4],
        }
    }

    /// Data rows that fit inside the table block (borders and header excluded).
    pub fn visible_rows(&self) -> usize {
        self.table.height.saturating_sub(3) as usize
    }

    /// Cell holding the header arrow.
    pub fn header_arrow(&self) -> Position {
        Position {
            top: self.table.y + 1,
            left: self.table.x + 1,
        }
    }
}

/// First row index drawn, given the highlighted row.
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || cursor < visible_rows {
        0
    } else {
        cursor + 1 - visible_rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    HeaderArrow,
    Row { index: usize, checkbox: bool },
}

/// Map a click at `(column, row)` onto the table.
pub fn hit_test(
    areas: &Areas,
    column: u16,
    row: u16,
    cursor: usize,
    record_count: usize,
) -> Option<TableHit> {
    let table = areas.table;
    let inner_left = table.x + 1;
    let inner_right = table.x + table.width.saturating_sub(1);
    if column < inner_left || column >= inner_right {
        return None;
    }
    let in_checkbox = column < inner_left + CHECKBOX_WIDTH;

    let header_row = table.y + 1;
    let first_data_row = table.y + 2;
    let bottom = table.y + table.height.saturating_sub(1);

    if row == header_row {
        return in_checkbox.then_some(TableHit::HeaderArrow);
    }
    if row < first_data_row || row >= bottom {
        return None;
    }

    let offset = scroll_offset(cursor, areas.visible_rows());
    let index = offset + (row - first_data_row) as usize;
    (index < record_count).then_some(TableHit::Row {
        index,
        checkbox: in_checkbox,
    })
}

/// Popup rectangle at `anchor`, shifted to stay inside `frame`.
pub fn dialog_rect(anchor: Position, frame: Rect) -> Rect {
    let width = DIALOG_WIDTH.min(frame.width);
    let height = DIALOG_HEIGHT.min(frame.height);
    let max_x = frame.x + frame.width - width;
    let max_y = frame.y + frame.height - height;
    Rect::new(
        anchor.left.clamp(frame.x, max_x),
        anchor.top.clamp(frame.y, max_y),
        width,
        height,
    )
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
