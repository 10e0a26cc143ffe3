//! Application state: the browser state machine plus UI-only concerns.

use crate::config::TuiConfig;
use crate::keys::{Action, InputMode};
use crate::layout::{hit_test, Areas, TableHit};
use crate::notifications::{push_bounded, Notification, NotificationLevel};
use crate::theme::GalleryTheme;
use artgrid_core::{
    ArtworkPage, BrowserState, BulkStep, FetchError, FetchOutcome, FetchRequest, FetchTicket,
    Position,
};
use ratatui::layout::Rect;

/// What the event loop must do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Quit,
}

impl From<Option<FetchRequest>> for Effect {
    fn from(request: Option<FetchRequest>) -> Self {
        request.map(Effect::Fetch).unwrap_or(Effect::None)
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: GalleryTheme,
    pub browser: BrowserState,
    pub notifications: Vec<Notification>,
    pub help_visible: bool,
    /// Size of the last drawn frame, for mouse hit-testing.
    pub frame_size: Rect,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let browser = BrowserState::new(config.bulk_select.max_extra_pages);
        Self {
            config,
            theme: GalleryTheme::gallery(),
            browser,
            notifications: Vec::new(),
            help_visible: false,
            frame_size: Rect::default(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.help_visible {
            InputMode::Help
        } else if self.browser.dialog.visible {
            InputMode::Dialog
        } else {
            InputMode::Browse
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        push_bounded(&mut self.notifications, Notification::new(level, message));
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame_size = Rect::new(0, 0, width, height);
    }

    pub fn areas(&self) -> Areas {
        Areas::compute(self.frame_size)
    }

    pub fn mount(&mut self) -> Effect {
        Effect::Fetch(self.browser.mount())
    }

    /// Apply a settled fetch. Returns the follow-up fetch of a bulk selection.
    pub fn apply_page_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<ArtworkPage, FetchError>,
    ) -> Effect {
        let bulk_before = self.browser.is_bulk_pending();
        match self.browser.complete_fetch(ticket, result) {
            FetchOutcome::Applied { records, follow_up } => {
                tracing::info!(
                    page = ticket.page,
                    records = records.len(),
                    total = self.browser.page.total_records,
                    "page loaded"
                );
                if bulk_before && follow_up.is_none() {
                    self.notify_bulk_finished();
                }
                follow_up.into()
            }
            FetchOutcome::Failed { error } => {
                tracing::error!(page = ticket.page, error = %error, "error fetching artworks");
                let mut message = format!("Could not load page {}: {}", ticket.page + 1, error);
                if bulk_before {
                    message.push_str(&format!(". {}", self.bulk_summary()));
                }
                self.notify(NotificationLevel::Error, message);
                Effect::None
            }
            FetchOutcome::Stale => Effect::None,
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Effect {
        match self.input_mode() {
            InputMode::Help => {
                if matches!(action, Action::Cancel) {
                    self.help_visible = false;
                } else if matches!(action, Action::Quit) {
                    return Effect::Quit;
                }
                Effect::None
            }
            InputMode::Dialog => self.handle_dialog_action(action),
            InputMode::Browse => self.handle_browse_action(action),
        }
    }

    fn handle_browse_action(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::MoveUp => self.browser.cursor_up(),
            Action::MoveDown => self.browser.cursor_down(),
            Action::NextPage => return self.browser.next_page().into(),
            Action::PrevPage => return self.browser.previous_page().into(),
            Action::FirstPage => return self.browser.first_page().into(),
            Action::LastPage => return self.browser.last_page().into(),
            Action::Refresh => return Effect::Fetch(self.browser.refresh()),
            Action::ToggleRow => {
                self.browser.toggle_cursor_row();
            }
            Action::TogglePage => self.browser.toggle_page(),
            Action::ClearSelection => self.browser.clear_selection(),
            Action::OpenBulkSelect => {
                let anchor = self.header_arrow_anchor();
                self.browser.open_dialog(anchor);
            }
            Action::OpenHelp => self.help_visible = true,
            Action::Cancel
            | Action::Confirm
            | Action::Digit(_)
            | Action::Backspace
            | Action::Increment
            | Action::Decrement => {}
        }
        Effect::None
    }

    fn handle_dialog_action(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::Digit(digit) => self.browser.dialog.push_digit(digit),
            Action::Backspace => self.browser.dialog.pop_digit(),
            Action::Increment => self.browser.dialog.increment(),
            Action::Decrement => self.browser.dialog.decrement(),
            Action::Cancel => self.browser.close_dialog(),
            Action::Confirm => return self.confirm_bulk_select(),
            _ => {}
        }
        Effect::None
    }

    pub fn confirm_bulk_select(&mut self) -> Effect {
        let wanted = self.browser.dialog.row_count().get();
        match self.browser.confirm_bulk_select() {
            BulkStep::Finished { selected } => {
                tracing::info!(wanted, selected, "bulk select finished on current page");
                self.notify_bulk_finished();
                Effect::None
            }
            BulkStep::Pending(request) => Effect::Fetch(request),
            BulkStep::Ignored => {
                tracing::debug!("bulk select ignored while a page is loading");
                Effect::None
            }
        }
    }

    /// Left click at terminal cell `(column, row)`.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Effect {
        if self.input_mode() != InputMode::Browse {
            return Effect::None;
        }
        let hit = hit_test(
            &self.areas(),
            column,
            row,
            self.browser.cursor,
            self.browser.page.records.len(),
        );
        match hit {
            Some(TableHit::HeaderArrow) => {
                self.browser.open_dialog(Position::from_click(column, row));
            }
            Some(TableHit::Row { index, checkbox }) => {
                self.browser.set_cursor(index);
                if checkbox {
                    self.browser.toggle_row(index);
                }
            }
            None => {}
        }
        Effect::None
    }

    fn header_arrow_anchor(&self) -> Position {
        let arrow = self.areas().header_arrow();
        Position::from_click(arrow.left, arrow.top)
    }

    fn bulk_summary(&self) -> String {
        format!(
            "Selected {} of {} requested rows",
            self.browser.selection.len(),
            self.browser.dialog.row_count().get()
        )
    }

    fn notify_bulk_finished(&mut self) {
        let selected = self.browser.selection.len();
        let wanted = self.browser.dialog.row_count().get() as usize;
        let level = if selected >= wanted {
            NotificationLevel::Success
        } else {
            NotificationLevel::Warning
        };
        let message = self.bulk_summary();
        self.notify(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::{RawArtwork, PAGE_SIZE};

    fn page(index: usize, total: u64) -> ArtworkPage {
        let start = (index * PAGE_SIZE) as u64;
        let end = (start + PAGE_SIZE as u64).min(total);
        ArtworkPage {
            records: (start..end)
                .map(|i| {
                    RawArtwork {
                        id: i + 1,
                        ..RawArtwork::default()
                    }
                    .normalize()
                })
                .collect(),
            total,
        }
    }

    fn mounted_app(total: u64) -> App {
        let mut app = App::new(TuiConfig::default());
        app.resize(120, 40);
        let request = match app.mount() {
            Effect::Fetch(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        };
        app.apply_page_loaded(request.ticket, Ok(page(0, total)));
        app
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut app = App::new(TuiConfig::default());
        match app.mount() {
            Effect::Fetch(request) => assert_eq!(request.page_request().page, 1),
            other => panic!("expected fetch, got {:?}", other),
        }
        assert!(app.browser.page.loading);
    }

    #[test]
    fn test_input_mode_follows_overlays() {
        let mut app = mounted_app(100);
        assert_eq!(app.input_mode(), InputMode::Browse);

        app.handle_action(Action::OpenBulkSelect);
        assert_eq!(app.input_mode(), InputMode::Dialog);

        app.handle_action(Action::Cancel);
        app.handle_action(Action::OpenHelp);
        assert_eq!(app.input_mode(), InputMode::Help);

        app.handle_action(Action::Cancel);
        assert_eq!(app.input_mode(), InputMode::Browse);
    }

    #[test]
    fn test_header_click_opens_dialog_at_click() {
        let mut app = mounted_app(100);
        let arrow = app.areas().header_arrow();

        app.handle_click(arrow.left + 1, arrow.top);

        assert!(app.browser.dialog.visible);
        assert_eq!(
            app.browser.dialog.anchor,
            Position::from_click(arrow.left + 1, arrow.top)
        );
    }

    #[test]
    fn test_checkbox_click_toggles_row() {
        let mut app = mounted_app(100);
        let areas = app.areas();
        let row = areas.table.y + 2 + 4;

        app.handle_click(areas.table.x + 2, row);

        assert_eq!(app.browser.cursor, 4);
        assert_eq!(app.browser.selection.len(), 1);
    }

    #[test]
    fn test_dialog_confirm_spanning_pages_issues_one_fetch() {
        let mut app = mounted_app(100);
        app.handle_action(Action::OpenBulkSelect);
        app.handle_action(Action::Backspace);
        app.handle_action(Action::Digit(1));
        app.handle_action(Action::Digit(5));

        let request = match app.handle_action(Action::Confirm) {
            Effect::Fetch(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        };
        assert_eq!(request.ticket.page, 1);

        let effect = app.apply_page_loaded(request.ticket, Ok(page(1, 100)));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.browser.selection.len(), 15);
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert_eq!(
            app.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_failed_fetch_raises_error_notification() {
        let mut app = mounted_app(100);
        let request = match app.handle_action(Action::NextPage) {
            Effect::Fetch(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        };

        app.apply_page_loaded(
            request.ticket,
            Err(FetchError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        );

        let last = app.notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
        assert!(last.message.contains("page 2"));
        assert!(!app.browser.page.loading);
        assert_eq!(app.browser.page.current_page, 0);
    }

    #[test]
    fn test_bulk_follow_up_failure_leaves_single_error() {
        let mut app = mounted_app(100);
        app.handle_action(Action::OpenBulkSelect);
        app.handle_action(Action::Backspace);
        app.handle_action(Action::Digit(1));
        app.handle_action(Action::Digit(5));
        let request = match app.handle_action(Action::Confirm) {
            Effect::Fetch(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        };
        let before = app.notifications.len();

        app.apply_page_loaded(
            request.ticket,
            Err(FetchError::Network("connection reset".to_string())),
        );

        assert_eq!(app.notifications.len(), before + 1);
        let last = app.notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
        assert!(last.message.contains("page 2"));
        assert!(last.message.contains("Selected 12 of 15 requested rows"));
        assert_eq!(app.browser.selection.len(), 12);
        assert_eq!(app.input_mode(), InputMode::Browse);
    }

    #[test]
    fn test_quit_from_any_mode() {
        let mut app = mounted_app(100);
        app.handle_action(Action::OpenBulkSelect);
        assert_eq!(app.handle_action(Action::Quit), Effect::Quit);
    }
}
