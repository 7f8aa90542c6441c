//! Error types raised by the maze core.

use thiserror::Error;

/// Rejection of a maze size handed straight to grid construction.
///
/// Requested sizes coming from the user go through
/// [`Dimensions::normalized`](crate::config::Dimensions::normalized) first, so this error only
/// surfaces when that step is skipped and raw values reach [`Grid::new`](crate::grid::Grid::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[expect(
    clippy::module_name_repetitions,
    reason = "`ConfigError` is the name the rest of the crate and its users know this error by."
)]
pub enum ConfigError {
    /// One of the sides is below the five-cell minimum.
    #[error("maze dimensions must be at least 5x5, got {height}x{width}")]
    TooSmall {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// One of the sides is above the largest supported size.
    #[error("maze dimensions must be at most 1001x1001, got {height}x{width}")]
    TooLarge {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// One of the sides is an even number of cells.
    #[error("maze dimensions must be odd numbers, got {height}x{width}")]
    EvenDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
}
