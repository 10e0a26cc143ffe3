//! Artwork grid.

use crate::layout::{Areas, CHECKBOX_WIDTH};
use crate::state::App;
use artgrid_core::Artwork;
use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

pub const COLUMN_TITLES: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Start Year",
    "End Year",
];

/// Header cell of the checkbox column: page checkbox plus the dialog arrow.
pub fn header_checkbox(records: &[Artwork], selected: impl Fn(&Artwork) -> bool) -> &'static str {
    let all = !records.is_empty() && records.iter().all(selected);
    if all {
        "[x]▾"
    } else {
        "[ ]▾"
    }
}

pub fn render(f: &mut Frame<'_>, app: &App, areas: &Areas) {
    let browser = &app.browser;
    let records = &browser.page.records;
    let is_selected = |a: &Artwork| browser.selection.contains(a.id);

    let mut header_cells = vec![Cell::from(Span::styled(
        header_checkbox(records, is_selected),
        Style::default().fg(app.theme.primary),
    ))];
    header_cells.extend(COLUMN_TITLES.iter().map(|title| Cell::from(*title)));
    let header = Row::new(header_cells).style(app.theme.header_style());

    let rows = records.iter().map(|artwork| {
        let checked = is_selected(artwork);
        let row = Row::new(vec![
            Cell::from(if checked { "[x]" } else { "[ ]" }),
            Cell::from(artwork.title.clone()),
            Cell::from(artwork.place_of_origin.clone()),
            Cell::from(first_line(&artwork.artist_display)),
            Cell::from(first_line(&artwork.inscriptions)),
            Cell::from(artwork.date_start.to_string()),
            Cell::from(artwork.date_end.to_string()),
        ]);
        if checked {
            row.style(app.theme.selected_style())
        } else {
            row
        }
    });

    let widths = [
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Percentage(24),
        Constraint::Percentage(12),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let title = if browser.page.loading {
        Span::styled("Artworks (loading)", app.theme.loading_style())
    } else {
        Span::styled("Artworks", Style::default().fg(app.theme.text))
    };

    let mut table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        )
        .highlight_style(app.theme.cursor_style().add_modifier(Modifier::BOLD));
    if browser.page.loading {
        table = table.style(app.theme.loading_style());
    }

    let mut state = TableState::default();
    if !records.is_empty() {
        state.select(Some(browser.cursor));
    }
    f.render_stateful_widget(table, areas.table, &mut state);
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::RawArtwork;

    fn artwork(id: u64) -> Artwork {
        RawArtwork {
            id,
            ..RawArtwork::default()
        }
        .normalize()
    }

    #[test]
    fn test_header_checkbox_reflects_page_selection() {
        let records = vec![artwork(1), artwork(2)];
        assert_eq!(header_checkbox(&records, |_| true), "[x]▾");
        assert_eq!(header_checkbox(&records, |a| a.id.get() == 1), "[ ]▾");
        assert_eq!(header_checkbox(&[], |_| true), "[ ]▾");
    }

    #[test]
    fn test_first_line_drops_continuations() {
        assert_eq!(first_line("Georges Seurat\nFrench, 1859-1891"), "Georges Seurat");
        assert_eq!(first_line(""), "");
    }
}
