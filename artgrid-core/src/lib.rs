//! ARTGRID Core - Data Model and Browser State
//!
//! Pure data structures and transition functions for the artwork browser.
//! No I/O happens here: fetches are described as `FetchRequest` values and
//! executed by whoever owns an `ArtworkSource`.

pub mod artwork;
pub mod browser;
pub mod dialog;
pub mod error;
pub mod paging;
pub mod selection;
pub mod source;

pub use artwork::{
    Artwork, ArtworkId, ArtworkPage, ArtworksResponse, Pagination, RawArtwork, Year,
    PLACEHOLDER_ARTIST, PLACEHOLDER_INSCRIPTIONS, PLACEHOLDER_ORIGIN, PLACEHOLDER_TITLE,
    PLACEHOLDER_YEAR,
};
pub use browser::{BrowserState, BulkStep, FetchOutcome, FetchRequest, FetchTicket};
pub use dialog::{DialogState, Position, RowCount, DIALOG_OFFSET_ROWS, MAX_ROW_COUNT, MIN_ROW_COUNT};
pub use error::FetchError;
pub use paging::{PageRequest, PageState, PAGE_SIZE};
pub use selection::SelectionSet;
pub use source::ArtworkSource;
