//! Actor position tracking and single-step move validation.

use crate::{
    grid::{Direction, Grid, Position},
    maze::{self, ENTRANCE},
};

/// Result of a single move request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the actor changed cell.
    pub moved: bool,
    /// Whether this move reached the goal. Reported once per navigation state.
    pub won: bool,
}

/// Position of the actor and of the goal it walks towards.
///
/// Both positions always name in-bounds passage cells of the grid the state was built for. The
/// state never mutates the grid; it only reads it to validate moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "`NavigationState` names what the type holds; a bare `State` would be ambiguous next to the session."
)]
pub struct NavigationState {
    /// Cell the actor stands on.
    position: Position,
    /// Cell the actor has to reach.
    goal: Position,
    /// Set once the goal has been reached; further moves are ignored.
    won: bool,
}

impl NavigationState {
    /// Starts a walk at `start` towards `goal`.
    ///
    /// Returns [`None`] when either cell is not a passage of `grid`.
    pub fn new(grid: &Grid, start: Position, goal: Position) -> Option<Self> {
        (grid.is_passage(start) && grid.is_passage(goal)).then_some(Self {
            position: start,
            goal,
            won: start == goal,
        })
    }

    /// Starts a walk from the entrance of a generated maze towards its exit.
    ///
    /// [`maze::generate`] always opens both cells, so the invariant holds for any grid it returns.
    pub const fn for_maze(grid: &Grid) -> Self {
        Self {
            position: ENTRANCE,
            goal: maze::exit_for(grid.height(), grid.width()),
            won: false,
        }
    }

    /// Cell the actor currently stands on.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Cell the actor has to reach.
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Whether the goal has been reached.
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// Moves the actor one cell in `direction` if the target is an in-bounds passage.
    ///
    /// Blocked moves are not errors: they leave the state untouched and report `moved: false`.
    /// Once the goal has been reached every move is blocked.
    pub fn step(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.won {
            return MoveOutcome::default();
        }

        let Some(target) = grid
            .step(self.position, direction, 1)
            .filter(|&target| grid.is_passage(target))
        else {
            return MoveOutcome::default();
        };

        self.position = target;
        self.won = target == self.goal;

        MoveOutcome {
            moved: true,
            won: self.won,
        }
    }
}
