//! Reusable widget components.

pub mod detail;
pub mod paginator;

pub use detail::DetailPanel;
pub use paginator::Paginator;
