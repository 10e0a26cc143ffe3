//! Paginator line under the table.

use artgrid_core::PageState;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Paginator<'a> {
    pub page: &'a PageState,
    pub active_style: Style,
    pub dim_style: Style,
}

impl<'a> Paginator<'a> {
    /// Text shown for the current page, e.g. `Page 2 of 9 | 13-24 of 100 records`.
    pub fn summary(page: &PageState) -> String {
        let first = page.first_record_index();
        let shown = page.records.len() as u64;
        let range = if shown == 0 {
            "0".to_string()
        } else {
            format!("{}-{}", first + 1, first + shown)
        };
        format!(
            "Page {} of {} | {} of {} records",
            page.current_page + 1,
            page.page_count(),
            range,
            page.total_records
        )
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let at_start = self.page.current_page == 0;
        let at_end = !self.page.has_page(self.page.current_page + 1);
        let arrow = |disabled: bool, text: &'static str| {
            Span::styled(text, if disabled { self.dim_style } else { self.active_style })
        };

        let line = Line::from(vec![
            arrow(at_start, "|< "),
            arrow(at_start, "< "),
            Span::raw(Self::summary(self.page)),
            arrow(at_end, " >"),
            arrow(at_end, " >|"),
        ]);

        let widget = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}
