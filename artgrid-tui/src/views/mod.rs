//! View rendering dispatch.

pub mod dialog;
pub mod table;

use crate::layout::{centered_rect, Areas};
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::notification_color;
use crate::widgets::{DetailPanel, Paginator};
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Notifications older than this fall back to the key help line.
const NOTIFICATION_TTL_SECS: i64 = 8;

const HELP_TEXT: &str = "\
j/k or arrows   move between rows
h/l or arrows   previous / next page
g / G           first / last page
space           toggle row
a               toggle every row on the page
b               select the first N rows
c               clear selection
ctrl-r          reload page
q               quit

Click the header arrow to open row selection,
or a checkbox to toggle its row.";

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let areas = Areas::compute(f.size());

    render_header(f, app, areas.header);
    table::render(f, app, &areas);
    Paginator {
        page: &app.browser.page,
        active_style: Style::default().fg(app.theme.primary),
        dim_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, areas.paginator);
    render_detail(f, app, areas.detail);
    render_footer(f, app, areas.footer);

    if app.browser.dialog.visible {
        dialog::render(f, app);
    }
    if app.help_visible {
        render_help(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Artworks", app.theme.header_style()),
        Span::raw(format!(" | {} selected", app.browser.selection.len())),
    ];
    if app.browser.page.loading {
        spans.push(Span::styled(" | loading...", app.theme.loading_style()));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let fields = match app.browser.cursor_record() {
        Some(artwork) => vec![
            ("Title", artwork.title.clone()),
            ("Artist", artwork.artist_display.replace('\n', " ")),
            ("Origin", artwork.place_of_origin.clone()),
            ("Years", format!("{} - {}", artwork.date_start, artwork.date_end)),
            ("Inscriptions", artwork.inscriptions.replace('\n', " ")),
        ],
        None => Vec::new(),
    };
    DetailPanel {
        title: "Details",
        fields,
        label_style: Style::default().fg(app.theme.secondary),
        border_style: Style::default().fg(app.theme.border),
    }
    .render(f, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "j/k move | h/l page | space toggle | b select N rows | ? help | q quit";
    let now = Utc::now();
    let recent = app
        .notifications
        .last()
        .filter(|note| {
            note.level == NotificationLevel::Error || note.age_secs(now) < NOTIFICATION_TTL_SECS
        });

    let (text, style) = match recent {
        Some(note) => (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_help(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    let help = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}
