//! Runs page fetches off the event loop.

use crate::events::TuiEvent;
use artgrid_core::{ArtworkSource, FetchRequest};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Fetch `request` on a background task and post the result as
/// `TuiEvent::PageLoaded`. The task is not cancelled if the UI moves on; its
/// result is dropped by the generation check instead.
pub fn spawn_fetch(
    source: Arc<dyn ArtworkSource>,
    request: FetchRequest,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let page_request = request.page_request();
        tracing::debug!(
            page = page_request.page,
            limit = page_request.limit,
            generation = request.ticket.generation,
            "fetching artworks"
        );
        let started = Instant::now();
        let result = source.fetch_page(page_request).await;
        tracing::debug!(
            page = page_request.page,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetch settled"
        );
        let _ = sender
            .send(TuiEvent::PageLoaded {
                ticket: request.ticket,
                result,
            })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::BrowserState;
    use artgrid_test_utils::FakeSource;

    #[tokio::test]
    async fn test_spawned_fetch_posts_page_loaded() {
        let source = Arc::new(FakeSource::new(100));
        let (tx, mut rx) = mpsc::channel(4);
        let mut state = BrowserState::new(1);
        let request = state.request_page(3);

        spawn_fetch(source.clone(), request, tx);

        match rx.recv().await {
            Some(TuiEvent::PageLoaded { ticket, result }) => {
                assert_eq!(ticket, request.ticket);
                let page = result.unwrap();
                assert_eq!(page.records[0].id.get(), 37);
            }
            other => panic!("expected PageLoaded, got {:?}", other),
        }
        assert_eq!(source.calls()[0].page, 4);
    }
}
