//! Error types for artwork fetches

use thiserror::Error;

/// Failure of a single page fetch.
///
/// All variants are handled the same way by the browser: logged, surfaced to
/// the user, and the last good page stays on screen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}
