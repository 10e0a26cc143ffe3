//! ARTGRID Test Utilities
//!
//! Shared test infrastructure for the artgrid workspace:
//! - Fixtures for artworks and pages
//! - An in-memory `ArtworkSource` with failure injection
//! - A driver that settles a fetch and its follow-ups
//! - Proptest generators for raw API records

pub use artgrid_core::{
    Artwork, ArtworkId, ArtworkPage, ArtworkSource, BrowserState, BulkStep, FetchError,
    FetchOutcome, FetchRequest, PageRequest, RawArtwork, Year, PAGE_SIZE,
};

use async_trait::async_trait;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Mutex;

// ============================================================================
// FIXTURES
// ============================================================================

/// Artwork with every field populated from its id.
pub fn sample_artwork(id: u64) -> Artwork {
    RawArtwork {
        id,
        title: Some(format!("Artwork {}", id)),
        place_of_origin: Some("France".to_string()),
        artist_display: Some(format!("Artist {}", id)),
        inscriptions: None,
        date_start: Some(1800 + id as i64),
        date_end: Some(1810 + id as i64),
    }
    .normalize()
}

/// Zero-based page `index` of a collection with ids `1..=total`.
pub fn sample_page(index: usize, page_size: usize, total: u64) -> ArtworkPage {
    let start = (index * page_size) as u64;
    let end = start.saturating_add(page_size as u64).min(total);
    ArtworkPage {
        records: (start..end).map(|i| sample_artwork(i + 1)).collect(),
        total,
    }
}

/// A `BrowserState` with page `index` already installed.
pub fn loaded_state(index: usize, total: u64, max_extra_pages: usize) -> BrowserState {
    let mut state = BrowserState::new(max_extra_pages);
    let request = state.request_page(index);
    state.complete_fetch(request.ticket, Ok(sample_page(index, PAGE_SIZE, total)));
    state
}

// ============================================================================
// FAKE SOURCE
// ============================================================================

/// In-memory artworks API over ids `1..=total`.
#[derive(Debug, Default)]
pub struct FakeSource {
    total: u64,
    failing_pages: Mutex<HashSet<usize>>,
    calls: Mutex<Vec<PageRequest>>,
}

impl FakeSource {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            failing_pages: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every request for the one-based `page` fail.
    pub fn fail_page(self, page: usize) -> Self {
        self.failing_pages
            .lock()
            .expect("failing_pages lock poisoned")
            .insert(page);
        self
    }

    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

#[async_trait]
impl ArtworkSource for FakeSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(request);
        if self
            .failing_pages
            .lock()
            .expect("failing_pages lock poisoned")
            .contains(&request.page)
        {
            return Err(FetchError::Network(format!(
                "page {} unavailable",
                request.page
            )));
        }
        Ok(sample_page(request.index(), request.limit, self.total))
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// Run `request` and every follow-up it produces, one at a time, feeding each
/// result back into `state`. Returns the outcomes in order.
pub async fn settle<S: ArtworkSource + ?Sized>(
    state: &mut BrowserState,
    source: &S,
    request: FetchRequest,
) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::new();
    let mut next = Some(request);
    while let Some(request) = next.take() {
        let result = source.fetch_page(request.page_request()).await;
        let outcome = state.complete_fetch(request.ticket, result);
        if let FetchOutcome::Applied {
            follow_up: Some(follow_up),
            ..
        } = &outcome
        {
            next = Some(*follow_up);
        }
        outcomes.push(outcome);
    }
    outcomes
}

// ============================================================================
// GENERATORS
// ============================================================================

/// Raw record with any subset of fields missing or empty.
pub fn arb_raw_artwork() -> impl Strategy<Value = RawArtwork> {
    (
        1u64..1_000_000,
        proptest::option::of("[a-zA-Z ]{0,20}"),
        proptest::option::of("[a-zA-Z ]{0,20}"),
        proptest::option::of("[a-zA-Z ,]{0,30}"),
        proptest::option::of("[a-zA-Z ]{0,20}"),
        proptest::option::of(-3000i64..2100),
        proptest::option::of(-3000i64..2100),
    )
        .prop_map(
            |(id, title, place_of_origin, artist_display, inscriptions, date_start, date_end)| {
                RawArtwork {
                    id,
                    title,
                    place_of_origin,
                    artist_display,
                    inscriptions,
                    date_start,
                    date_end,
                }
            },
        )
}
