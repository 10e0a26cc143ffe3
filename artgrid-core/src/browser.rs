//! Browser state and its transitions.
//!
//! `BrowserState` is the one owner of page, selection and dialog state. Every
//! user action and every fetch completion goes through a method here, which
//! keeps the whole state machine testable without a terminal or a network.
//!
//! Fetches are not performed here. A transition that needs data returns a
//! `FetchRequest`; the caller runs it against an `ArtworkSource` and feeds the
//! result back through `complete_fetch` together with the request's ticket.

use crate::artwork::{Artwork, ArtworkPage};
use crate::dialog::{DialogState, Position};
use crate::error::FetchError;
use crate::paging::{PageRequest, PageState};
use crate::selection::SelectionSet;

/// Identifies one issued fetch. Only the most recent ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: usize,
}

/// A fetch the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub page_size: usize,
}

impl FetchRequest {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::for_index(self.ticket.page, self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was installed. `follow_up` continues a bulk selection.
    Applied {
        records: Vec<Artwork>,
        follow_up: Option<FetchRequest>,
    },
    /// The fetch failed; prior records stay in place.
    Failed { error: FetchError },
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

/// Result of confirming the bulk-select dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkStep {
    /// Selection is final and the dialog is closed.
    Finished { selected: usize },
    /// More rows are needed from the next page.
    Pending(FetchRequest),
    /// A fetch is in flight; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BulkProgress {
    remaining: usize,
    pages_issued: usize,
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    pub page: PageState,
    pub selection: SelectionSet,
    pub dialog: DialogState,
    /// Highlighted row on the current page.
    pub cursor: usize,
    /// Message of the last failed fetch, cleared by the next success.
    pub last_error: Option<String>,
    generation: u64,
    requested_page: usize,
    bulk: Option<BulkProgress>,
    max_extra_pages: usize,
}

impl BrowserState {
    /// `max_extra_pages` bounds how many pages one bulk selection may fetch
    /// beyond the current one.
    pub fn new(max_extra_pages: usize) -> Self {
        Self {
            page: PageState::new(),
            selection: SelectionSet::new(),
            dialog: DialogState::new(),
            cursor: 0,
            last_error: None,
            generation: 0,
            requested_page: 0,
            bulk: None,
            max_extra_pages,
        }
    }

    pub fn requested_page(&self) -> usize {
        self.requested_page
    }

    pub fn is_bulk_pending(&self) -> bool {
        self.bulk.is_some()
    }

    /// Initial load.
    pub fn mount(&mut self) -> FetchRequest {
        self.request_page(0)
    }

    /// Start loading a zero-based page. Supersedes any fetch in flight.
    pub fn request_page(&mut self, page: usize) -> FetchRequest {
        self.generation += 1;
        self.requested_page = page;
        self.page.loading = true;
        tracing::debug!(page, generation = self.generation, "page requested");
        FetchRequest {
            ticket: FetchTicket {
                generation: self.generation,
                page,
            },
            page_size: self.page.page_size,
        }
    }

    pub fn refresh(&mut self) -> FetchRequest {
        self.request_page(self.requested_page)
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        let target = self.requested_page + 1;
        if self.page.has_page(target) {
            Some(self.request_page(target))
        } else {
            None
        }
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        let target = self.requested_page.checked_sub(1)?;
        Some(self.request_page(target))
    }

    pub fn first_page(&mut self) -> Option<FetchRequest> {
        if self.requested_page == 0 {
            return None;
        }
        Some(self.request_page(0))
    }

    pub fn last_page(&mut self) -> Option<FetchRequest> {
        let last = self.page.last_page();
        if self.requested_page == last {
            return None;
        }
        Some(self.request_page(last))
    }

    /// Feed back the result of a fetch issued by this state.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ArtworkPage, FetchError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                page = ticket.page,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale page"
            );
            return FetchOutcome::Stale;
        }

        self.page.loading = false;

        match result {
            Ok(mut page) => {
                page.records.truncate(self.page.page_size);
                self.page.records = page.records.clone();
                self.page.total_records = page.total;
                self.page.current_page = ticket.page;
                self.last_error = None;
                self.clamp_cursor();
                let follow_up = self.continue_bulk(&page.records);
                FetchOutcome::Applied {
                    records: page.records,
                    follow_up,
                }
            }
            Err(error) => {
                self.requested_page = self.page.current_page;
                self.last_error = Some(error.to_string());
                if self.bulk.take().is_some() {
                    self.dialog.close();
                }
                FetchOutcome::Failed { error }
            }
        }
    }

    /// Mirror a selection reported by the table widget.
    pub fn set_selection(&mut self, records: Vec<Artwork>) {
        self.selection.replace(records);
    }

    /// Toggle one row of the current page. Returns whether it is now selected.
    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        let record = self.page.records.get(index)?;
        let mut next = self.selection.clone();
        let selected = next.toggle(record);
        self.set_selection(next.iter().cloned().collect());
        Some(selected)
    }

    pub fn toggle_cursor_row(&mut self) -> Option<bool> {
        self.toggle_row(self.cursor)
    }

    /// Header checkbox: select every row of the page, or deselect them all if
    /// they are already selected.
    pub fn toggle_page(&mut self) {
        let all_selected = !self.page.records.is_empty()
            && self
                .page
                .records
                .iter()
                .all(|r| self.selection.contains(r.id));
        let mut next = self.selection.clone();
        if all_selected {
            for record in &self.page.records {
                next.remove(record.id);
            }
        } else {
            next.extend(self.page.records.iter().cloned());
        }
        self.set_selection(next.iter().cloned().collect());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.page.records.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
    }

    pub fn cursor_record(&self) -> Option<&Artwork> {
        self.page.records.get(self.cursor)
    }

    pub fn open_dialog(&mut self, anchor: Position) {
        self.dialog.open(anchor);
    }

    /// Hide the dialog and abandon any bulk selection still fetching.
    pub fn close_dialog(&mut self) {
        self.dialog.close();
        self.bulk = None;
    }

    /// Select the first N rows, starting on the current page.
    pub fn confirm_bulk_select(&mut self) -> BulkStep {
        if self.page.loading {
            return BulkStep::Ignored;
        }

        let wanted = self.dialog.row_count().get() as usize;
        let take = wanted.min(self.page.records.len());
        self.selection.replace(self.page.records[..take].iter().cloned());
        let remaining = wanted - take;
        let next = self.page.current_page + 1;

        if remaining == 0 || self.max_extra_pages == 0 || !self.page.has_page(next) {
            return self.finish_bulk();
        }

        tracing::info!(wanted, remaining, next_page = next, "bulk select continues on next page");
        self.bulk = Some(BulkProgress {
            remaining,
            pages_issued: 1,
        });
        BulkStep::Pending(self.request_page(next))
    }

    fn continue_bulk(&mut self, records: &[Artwork]) -> Option<FetchRequest> {
        let mut progress = self.bulk.take()?;

        let take = progress.remaining.min(records.len());
        self.selection.extend(records[..take].iter().cloned());
        progress.remaining -= take;

        let next = self.page.current_page + 1;
        let page_was_full = records.len() >= self.page.page_size;
        if progress.remaining > 0
            && page_was_full
            && progress.pages_issued < self.max_extra_pages
            && self.page.has_page(next)
        {
            progress.pages_issued += 1;
            tracing::debug!(
                remaining = progress.remaining,
                next_page = next,
                "bulk select fetching another page"
            );
            self.bulk = Some(progress);
            return Some(self.request_page(next));
        }

        if progress.remaining > 0 {
            tracing::info!(
                short_by = progress.remaining,
                pages = progress.pages_issued,
                "bulk select stopped before reaching requested count"
            );
        }
        self.finish_bulk();
        None
    }

    fn finish_bulk(&mut self) -> BulkStep {
        self.bulk = None;
        self.dialog.close();
        BulkStep::Finished {
            selected: self.selection.len(),
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.page.records.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(1)
    }
}
