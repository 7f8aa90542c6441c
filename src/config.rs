//! Command-line configuration and maze size normalisation.

use std::path::PathBuf;

use clap::Parser;

use crate::grid::{MAX_SIDE, MIN_SIDE};

/// Number of rows used when no height is requested.
pub const DEFAULT_HEIGHT: usize = 15;

/// Number of columns used when no width is requested.
pub const DEFAULT_WIDTH: usize = 21;

/// Command-line arguments of the game.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Requested maze height; even values are rounded up and the result is kept within 5..=1001.
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,
    /// Requested maze width; even values are rounded up and the result is kept within 5..=1001.
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,
    /// Seed for the maze generator, for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,
    /// File the log is written to.
    #[arg(long, default_value = "labyrinth-walker.log")]
    pub log_file: PathBuf,
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Maze size requested on the command line, after normalisation.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::normalized(self.height, self.width)
    }
}

/// Size of a maze in cells.
///
/// Values built through [`Dimensions::normalized`] or [`Default`] are always valid grid sizes;
/// the fields are public so raw, unchecked sizes can still be handed to the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Dimensions {
    /// Turns requested sides into a valid maze size.
    ///
    /// Missing sides fall back to [`DEFAULT_HEIGHT`] and [`DEFAULT_WIDTH`]. Even values are rounded
    /// up to the next odd number, then the result is clamped to [`MIN_SIDE`]..=[`MAX_SIDE`].
    pub fn normalized(height: Option<i64>, width: Option<i64>) -> Self {
        Self {
            height: height.map_or(DEFAULT_HEIGHT, normalize_side),
            width: width.map_or(DEFAULT_WIDTH, normalize_side),
        }
    }

    /// Grows or shrinks the sides by the given number of cells, keeping the result valid.
    #[must_use]
    pub fn resized(self, height_step: i64, width_step: i64) -> Self {
        Self::normalized(
            Some(side_as_i64(self.height).saturating_add(height_step)),
            Some(side_as_i64(self.width).saturating_add(width_step)),
        )
    }
}

/// Rounds an even side up to odd and clamps the result to [`MIN_SIDE`]..=[`MAX_SIDE`].
fn normalize_side(requested: i64) -> usize {
    let odd = if requested % 2 == 0 {
        requested.saturating_add(1)
    } else {
        requested
    };

    usize::try_from(odd).map_or(MIN_SIDE, |side| side.clamp(MIN_SIDE, MAX_SIDE))
}

/// Widens a side for signed arithmetic, saturating on absurd sizes.
fn side_as_i64(side: usize) -> i64 {
    i64::try_from(side).unwrap_or(i64::MAX)
}
