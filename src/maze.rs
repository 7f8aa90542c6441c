//! Maze carving module.
//!
//! This module turns an all-wall [`Grid`] into a maze with a randomized depth-first backtracking
//! walk. Cells at odd row and odd column are the nodes of the walk, the cells between two
//! neighbouring nodes are its edges, and the carved passages form a spanning tree over the nodes.
//! Once the walk is done the entrance, the exit and the connector leading to the exit are opened
//! on the border.

use crate::{
    error::ConfigError,
    grid::{Cell, Direction, Grid, Position},
    random::RandomSource,
};

/// Node the carving walk always starts from.
pub const START: Position = Position::new(1, 1);

/// Entrance cell on the top border, directly above [`START`].
pub const ENTRANCE: Position = Position::new(0, 1);

/// Minimum number of wall (or out-of-bounds) neighbours a node needs to be carved into.
///
/// A node touching two or more passages would join separate carved regions and close a cycle.
const MIN_WALL_NEIGHBOURS: usize = 3;

/// Position of the exit cell in the bottom-right corner of a `height` by `width` grid.
pub const fn exit_for(height: usize, width: usize) -> Position {
    Position::new(height - 1, width - 1)
}

/// Pending work for one node of the carving walk.
///
/// The frontier stack holds one branch per node on the current path from [`START`], which stands
/// in for the call stack of a recursive walk.
#[derive(Debug)]
struct Branch {
    /// Node this branch carves from.
    node: Position,
    /// Directions in the shuffled order they are tried.
    directions: [Direction; 4],
    /// Index of the next direction to try.
    next: usize,
}

/// Randomized backtracking maze generator.
#[derive(Debug)]
#[expect(
    clippy::module_name_repetitions,
    reason = "`MazeGenerator` is the established name for the carving walk."
)]
pub struct MazeGenerator<S> {
    /// Source of the draws shuffling the direction order at every node.
    source: S,
}

impl<S: RandomSource> MazeGenerator<S> {
    /// Creates a generator drawing from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Builds and carves a new maze of the given raw size.
    ///
    /// The dimensions are taken as-is; see
    /// [`Dimensions::normalized`](crate::config::Dimensions::normalized) for turning arbitrary
    /// requests into a valid size.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] if the size is even or smaller than five cells on a side. Nothing is
    ///   carved and no draw is consumed in that case.
    pub fn generate(&mut self, height: usize, width: usize) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(height, width)?;

        self.carve(&mut grid);
        open_border(&mut grid);

        tracing::debug!(
            height,
            width,
            passages = grid.passages().count(),
            "carved maze"
        );

        Ok(grid)
    }

    /// Runs the backtracking walk from [`START`] over `grid`.
    ///
    /// Every node reachable under the carving rule is visited exactly once. The walk keeps an
    /// explicit frontier stack, so its memory grows with the length of the longest corridor
    /// rather than the native call stack.
    pub fn carve(&mut self, grid: &mut Grid) {
        grid.set_passage(START);
        let mut frontier = vec![Branch {
            node: START,
            directions: self.shuffled_directions(),
            next: 0,
        }];

        while let Some(branch) = frontier.last_mut() {
            let Some(direction) = branch.directions.get(branch.next).copied() else {
                let _ = frontier.pop();
                continue;
            };
            branch.next += 1;
            let node = branch.node;

            let Some(candidate) = grid.step(node, direction, 2) else {
                continue;
            };
            if !is_carvable(grid, candidate) {
                continue;
            }

            if let Some(edge) = grid.step(node, direction, 1) {
                grid.set_passage(edge);
            }
            grid.set_passage(candidate);

            frontier.push(Branch {
                node: candidate,
                directions: self.shuffled_directions(),
                next: 0,
            });
        }
    }

    /// Returns the four directions in a uniformly random order.
    ///
    /// Fisher-Yates: walking from the last slot down to the second, each slot is swapped with a
    /// slot drawn uniformly from those not yet fixed, itself included.
    fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        for idx in (1..directions.len()).rev() {
            let pick = self.source.below(idx + 1);
            directions.swap(idx, pick);
        }

        directions
    }
}

/// Builds and carves a maze of the given raw size with draws taken from `source`.
///
/// # Errors
///
/// - [`ConfigError`] if the size is even or smaller than five cells on a side.
pub fn generate<S: RandomSource>(
    height: usize,
    width: usize,
    source: &mut S,
) -> Result<Grid, ConfigError> {
    MazeGenerator::new(source).generate(height, width)
}

/// Tells whether `candidate` may be carved into.
///
/// It has to be an in-bounds wall with at least [`MIN_WALL_NEIGHBOURS`] of its four neighbours
/// being walls or outside the grid.
fn is_carvable(grid: &Grid, candidate: Position) -> bool {
    if grid.cell(candidate) != Some(Cell::Wall) {
        return false;
    }

    let walls = Direction::ALL
        .into_iter()
        .filter(|&direction| {
            grid.step(candidate, direction, 1)
                .and_then(|neighbour| grid.cell(neighbour))
                .map_or(true, |cell| cell == Cell::Wall)
        })
        .count();

    walls >= MIN_WALL_NEIGHBOURS
}

/// Opens the entrance, the exit and the connector between the exit and the interior.
///
/// Must run after the walk. Opened earlier, these cells would count as visited passages and change
/// which border nodes the walk considers carvable.
fn open_border(grid: &mut Grid) {
    let (height, width) = (grid.height(), grid.width());

    grid.set_passage(ENTRANCE);
    grid.set_passage(Position::new(height - 2, width - 1));
    grid.set_passage(exit_for(height, width));
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::random::{SeededSource, SequenceSource};

    /// Tells whether `position` lies strictly inside the border.
    fn is_interior(grid: &Grid, position: Position) -> bool {
        position.row > 0
            && position.col > 0
            && position.row < grid.height() - 1
            && position.col < grid.width() - 1
    }

    /// Collects every passage reachable from `from` with orthogonal passage-to-passage steps.
    fn reachable(grid: &Grid, from: Position) -> HashSet<Position> {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            for direction in Direction::ALL {
                if let Some(next) = grid.step(current, direction, 1) {
                    if grid.is_passage(next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        seen
    }

    /// Counts interior passage nodes (odd row and column) and edges (exactly one odd coordinate).
    fn nodes_and_edges(grid: &Grid) -> (usize, usize) {
        grid.passages()
            .filter(|&position| is_interior(grid, position))
            .fold((0, 0), |(nodes, edges), position| {
                match (position.row % 2 == 1, position.col % 2 == 1) {
                    (true, true) => (nodes + 1, edges),
                    (true, false) | (false, true) => (nodes, edges + 1),
                    (false, false) => (nodes, edges),
                }
            })
    }

    #[test]
    fn test_generate_rejects_invalid_sizes() {
        let mut source = SequenceSource::default();

        assert!(generate(4, 4, &mut source).is_err());
        assert!(matches!(
            generate(6, 5, &mut source),
            Err(ConfigError::EvenDimension { .. })
        ));
        assert!(matches!(
            generate(5, 3, &mut source),
            Err(ConfigError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_smallest_maze_with_fixed_draws() {
        // All-zero draws rotate the base order to down, left, up, right at every node.
        let mut source = SequenceSource::new(vec![0]);
        let grid = generate(5, 5, &mut source).expect("5x5 is a valid size");

        let expected = ["# ###", "# # #", "# # #", "#    ", "#### "].join("\n");
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_fixed_draws_backtrack_into_side_branches() {
        let mut source = SequenceSource::new(vec![0]);
        let grid = generate(7, 7, &mut source).expect("7x7 is a valid size");

        let expected = [
            "# #####", "# #   #", "# # # #", "# # # #", "# # # #", "#   #  ", "###### ",
        ]
        .join("\n");
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_mixed_draws_on_wide_maze() {
        let mut source = SequenceSource::new(vec![1, 2, 0]);
        let grid = generate(5, 7, &mut source).expect("5x7 is a valid size");

        let expected = ["# #####", "#     #", "##### #", "#      ", "###### "].join("\n");
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_all_nodes_are_carved() {
        let mut source = SeededSource::from_seed(7);
        let grid = generate(11, 15, &mut source).expect("11x15 is a valid size");

        for row in (1..grid.height()).step_by(2) {
            for col in (1..grid.width()).step_by(2) {
                assert!(
                    grid.is_passage(Position::new(row, col)),
                    "node ({row}, {col}) should be carved"
                );
            }
        }
    }

    #[test]
    fn test_even_even_interior_cells_stay_walls() {
        let mut source = SeededSource::from_seed(99);
        let grid = generate(9, 9, &mut source).expect("9x9 is a valid size");

        for position in grid.passages().filter(|&pos| is_interior(&grid, pos)) {
            assert!(
                position.row % 2 == 1 || position.col % 2 == 1,
                "{position} is neither a node nor an edge"
            );
        }
    }

    #[test]
    fn test_border_cells_are_opened() {
        let mut source = SeededSource::from_seed(3);
        let grid = generate(7, 9, &mut source).expect("7x9 is a valid size");

        assert!(grid.is_passage(ENTRANCE));
        assert!(grid.is_passage(Position::new(5, 8)));
        assert!(grid.is_passage(exit_for(7, 9)));
        assert_eq!(exit_for(7, 9), Position::new(6, 8));
    }

    #[test]
    fn test_shuffle_with_fixed_draws() {
        let mut generator = MazeGenerator::new(SequenceSource::new(vec![0]));

        assert_eq!(
            generator.shuffled_directions(),
            [
                Direction::Down,
                Direction::Left,
                Direction::Up,
                Direction::Right
            ]
        );

        let mut generator = MazeGenerator::new(SequenceSource::new(vec![3, 2, 1]));
        assert_eq!(generator.shuffled_directions(), Direction::ALL);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut generator = MazeGenerator::new(SeededSource::from_seed(11));
        let seen: HashSet<[Direction; 4]> = (0..2_000)
            .map(|_| generator.shuffled_directions())
            .collect();

        assert_eq!(seen.len(), 24, "all 4! orders should show up");
    }

    #[test]
    fn test_carvable_needs_three_walls() {
        let mut grid = Grid::new(7, 7).expect("7x7 is a valid size");
        let candidate = Position::new(3, 3);

        assert!(is_carvable(&grid, candidate));

        grid.set_passage(Position::new(2, 3));
        assert!(is_carvable(&grid, candidate), "one open side is allowed");

        grid.set_passage(Position::new(3, 2));
        assert!(!is_carvable(&grid, candidate), "two open sides close a cycle");

        grid.set_passage(candidate);
        assert!(!is_carvable(&grid, candidate), "passages are never carvable");
    }

    #[test]
    fn test_border_neighbours_count_as_walls() {
        let mut grid = Grid::new(5, 5).expect("5x5 is a valid size");
        let corner = Position::new(0, 0);

        grid.set_passage(Position::new(0, 1));
        assert!(is_carvable(&grid, corner));

        grid.set_passage(Position::new(1, 0));
        assert!(!is_carvable(&grid, corner));
    }

    proptest! {
        #[test]
        fn prop_maze_is_connected_spanning_tree(
            half_height in 2_usize..20,
            half_width in 2_usize..20,
            seed in any::<u64>(),
        ) {
            let (height, width) = (half_height * 2 + 1, half_width * 2 + 1);
            let mut source = SeededSource::from_seed(seed);
            let grid = generate(height, width, &mut source).expect("odd sizes of 5+ are valid");

            // PROPERTY: every passage is reachable from the start node.
            let connected = reachable(&grid, START);
            prop_assert_eq!(connected.len(), grid.passages().count());

            // PROPERTY: the interior is a tree, one more node than edges.
            let (nodes, edges) = nodes_and_edges(&grid);
            prop_assert_eq!(nodes, half_height * half_width);
            prop_assert_eq!(nodes, edges + 1);

            // PROPERTY: entrance and exit are always open.
            prop_assert!(grid.is_passage(ENTRANCE));
            prop_assert!(grid.is_passage(exit_for(height, width)));
        }

        #[test]
        fn prop_generation_is_deterministic(
            half_height in 2_usize..15,
            half_width in 2_usize..15,
            seed in any::<u64>(),
        ) {
            let (height, width) = (half_height * 2 + 1, half_width * 2 + 1);

            let first = generate(height, width, &mut SeededSource::from_seed(seed))
                .expect("odd sizes of 5+ are valid");
            let second = generate(height, width, &mut SeededSource::from_seed(seed))
                .expect("odd sizes of 5+ are valid");

            prop_assert_eq!(first, second);
        }
    }
}
