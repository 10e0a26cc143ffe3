//! Bulk-select popover.

use crate::layout::dialog_rect;
use crate::state::App;
use artgrid_core::{MAX_ROW_COUNT, MIN_ROW_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App) {
    let dialog = &app.browser.dialog;
    let area = dialog_rect(dialog.anchor, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("Select Rows")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let input = if dialog.input().is_empty() {
        Span::styled("Select rows", Style::default().fg(app.theme.text_dim))
    } else {
        Span::styled(
            dialog.input().to_string(),
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::UNDERLINED),
        )
    };
    f.render_widget(Paragraph::new(Line::from(vec![Span::raw("Rows: "), input])), chunks[0]);

    let range = format!("{}-{}, up/down to adjust", MIN_ROW_COUNT, MAX_ROW_COUNT);
    f.render_widget(
        Paragraph::new(range).style(Style::default().fg(app.theme.text_dim)),
        chunks[1],
    );

    let status = if app.browser.is_bulk_pending() || app.browser.page.loading {
        Span::styled("Loading next page...", app.theme.loading_style())
    } else {
        Span::styled("[Enter] Submit  [Esc] Cancel", Style::default().fg(app.theme.primary))
    };
    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        chunks[2],
    );
}
