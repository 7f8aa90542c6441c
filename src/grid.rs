//! Grid data and bounds checking.
//!
//! This module contains the [`Grid`] type holding the two-dimensional cell array a maze is carved
//! into, along with the [`Cell`] and [`Position`] types used to address and read it. The grid
//! itself carries no algorithmic logic; carving lives in [`maze`](crate::maze).

use std::fmt;

use crate::error::ConfigError;

/// Smallest side length a grid may have.
pub const MIN_SIDE: usize = 5;

/// Largest side length a grid may have.
///
/// Odd, so capping a normalised side keeps it odd.
pub const MAX_SIDE: usize = 1001;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Non-traversable cell.
    ///
    /// Every cell starts as a wall; during carving a wall also means "not yet visited".
    Wall,
    /// Traversable cell.
    Passage,
}

impl Cell {
    /// Character used for this cell in the plain-text rendering of a grid.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Passage => ' ',
        }
    }
}

/// One of the four orthogonal directions on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions, in the base order the carving walk shuffles from.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Row and column offset of a single step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Maps a unit step back to its direction.
    ///
    /// Anything other than one of the four orthogonal unit steps yields [`None`].
    pub const fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        match (d_row, d_col) {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }
}

/// Row and column of a cell, zero-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Builds a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular array of wall and passage cells.
///
/// The dimensions are validated once in [`Grid::new`] and never change afterwards, so every grid
/// in existence has odd sides of at least [`MIN_SIDE`] cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    height: usize,
    /// Number of columns.
    width: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of the given size with every cell set to [`Cell::Wall`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TooSmall`] if either side is below [`MIN_SIDE`].
    /// - [`ConfigError::TooLarge`] if either side is above [`MAX_SIDE`].
    /// - [`ConfigError::EvenDimension`] if either side is even.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(ConfigError::TooSmall { height, width });
        }
        if height > MAX_SIDE || width > MAX_SIDE {
            return Err(ConfigError::TooLarge { height, width });
        }
        if height % 2 == 0 || width % 2 == 0 {
            return Err(ConfigError::EvenDimension { height, width });
        }

        let len = height
            .checked_mul(width)
            .ok_or(ConfigError::TooLarge { height, width })?;

        Ok(Self {
            height,
            width,
            cells: vec![Cell::Wall; len],
        })
    }

    /// Number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Tells whether a signed coordinate pair falls inside the grid.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        usize::try_from(row).is_ok_and(|row| row < self.height)
            && usize::try_from(col).is_ok_and(|col| col < self.width)
    }

    /// Returns the position reached by stepping `d_row` rows and `d_col` columns from `from`.
    ///
    /// Yields [`None`] when the step leaves the grid.
    pub fn offset(&self, from: Position, d_row: isize, d_col: isize) -> Option<Position> {
        let row = from.row.checked_add_signed(d_row)?;
        let col = from.col.checked_add_signed(d_col)?;

        (row < self.height && col < self.width).then_some(Position::new(row, col))
    }

    /// Reads the state of a cell, or [`None`] if the position is out of bounds.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Returns the in-bounds neighbour of `from` in `direction`, `steps` cells away.
    pub fn step(&self, from: Position, direction: Direction, steps: isize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        self.offset(from, d_row * steps, d_col * steps)
    }

    /// Tells whether the cell at `position` exists and is a passage.
    pub fn is_passage(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Passage)
    }

    /// Turns a single cell into a passage.
    ///
    /// Positions outside the grid are ignored. Only the maze generator mutates a grid.
    pub(crate) fn set_passage(&mut self, position: Position) {
        if let Some(cell) = self
            .index(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = Cell::Passage;
        }
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Iterates over the positions of every passage cell in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_of(Cell::Passage)
    }

    /// Iterates over the positions of every wall cell in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_of(Cell::Wall)
    }

    /// Iterates over the positions holding `state`.
    fn positions_of(&self, state: Cell) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, cell)| *cell == state)
            .map(move |(index, _)| Position::new(index / width, index % width))
    }

    /// Maps a position to its row-major index, if it is in bounds.
    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.height && position.col < self.width)
            .then_some(position.row * self.width + position.col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_walls() {
        let grid = Grid::new(5, 7).expect("5x7 is a valid size");

        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.walls().count(), 35);
        assert_eq!(grid.passages().count(), 0);
    }

    #[test]
    fn test_new_rejects_even_height() {
        assert_eq!(
            Grid::new(6, 5),
            Err(ConfigError::EvenDimension {
                height: 6,
                width: 5
            })
        );
    }

    #[test]
    fn test_new_rejects_height_four() {
        assert!(Grid::new(4, 4).is_err(), "4x4 is below the minimum");
        assert!(matches!(
            Grid::new(4, 5),
            Err(ConfigError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_new_rejects_oversized_grid() {
        assert_eq!(
            Grid::new(usize::MAX, usize::MAX),
            Err(ConfigError::TooLarge {
                height: usize::MAX,
                width: usize::MAX
            })
        );
        assert!(matches!(
            Grid::new(MAX_SIDE + 2, 5),
            Err(ConfigError::TooLarge { .. })
        ));
        assert!(Grid::new(MAX_SIDE, MAX_SIDE).is_ok());
    }

    #[test]
    fn test_new_rejects_small_width() {
        assert_eq!(
            Grid::new(5, 3),
            Err(ConfigError::TooSmall {
                height: 5,
                width: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_even_width() {
        assert!(Grid::new(7, 8).is_err(), "even width must be rejected");
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(5, 7).expect("5x7 is a valid size");

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 6));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, 7));
    }

    #[test]
    fn test_offset_stays_inside() {
        let grid = Grid::new(5, 5).expect("5x5 is a valid size");
        let corner = Position::new(0, 0);

        assert_eq!(grid.offset(corner, -1, 0), None);
        assert_eq!(grid.offset(corner, 0, -1), None);
        assert_eq!(grid.offset(corner, 2, 1), Some(Position::new(2, 1)));
        assert_eq!(grid.offset(Position::new(4, 4), 0, 1), None);
    }

    #[test]
    fn test_direction_deltas_round_trip() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.delta();
            assert_eq!(Direction::from_delta(d_row, d_col), Some(direction));
        }

        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_step_skips_cells() {
        let grid = Grid::new(5, 5).expect("5x5 is a valid size");
        let start = Position::new(1, 1);

        assert_eq!(
            grid.step(start, Direction::Right, 2),
            Some(Position::new(1, 3))
        );
        assert_eq!(grid.step(start, Direction::Up, 2), None);
        assert_eq!(grid.step(start, Direction::Up, 1), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_set_passage_and_read_back() {
        let mut grid = Grid::new(5, 5).expect("5x5 is a valid size");
        let target = Position::new(1, 3);

        grid.set_passage(target);
        grid.set_passage(Position::new(9, 9));

        assert_eq!(grid.cell(target), Some(Cell::Passage));
        assert!(grid.is_passage(target));
        assert_eq!(grid.cell(Position::new(1, 2)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(5, 0)), None);
        assert_eq!(grid.passages().collect::<Vec<_>>(), vec![target]);
    }

    #[test]
    fn test_display_uses_hash_for_walls() {
        let mut grid = Grid::new(5, 5).expect("5x5 is a valid size");
        grid.set_passage(Position::new(1, 1));

        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines.get(1).copied(), Some("# ###"));
        assert_eq!(lines.first().copied(), Some("#####"));
    }
}
