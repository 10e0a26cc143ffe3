//! Seam to the external artworks API.

use crate::artwork::ArtworkPage;
use crate::error::FetchError;
use crate::paging::PageRequest;
use async_trait::async_trait;

/// Anything that can serve one page of artworks.
///
/// The REST client implements this in the TUI crate; tests use an in-memory
/// source.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError>;
}
