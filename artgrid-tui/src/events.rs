//! Event types for the TUI event loop.

use artgrid_core::{ArtworkPage, FetchError, FetchTicket};
use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    PageLoaded {
        ticket: FetchTicket,
        result: Result<ArtworkPage, FetchError>,
    },
}
