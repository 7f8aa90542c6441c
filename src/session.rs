//! Game session composing a carved maze with the actor walking it.
//!
//! A [`GameSession`] owns everything one game needs: the carved [`Grid`], the
//! [`NavigationState`], the [`Dimensions`] it was built with and the random source used to carve
//! new mazes. Renderers read it through [`GameSession::current_state`] and input handlers drive it
//! through [`GameSession::move_actor`] and the regenerate methods.

use crate::{
    config::Dimensions,
    error::ConfigError,
    grid::{Direction, Grid, Position},
    maze,
    navigation::{MoveOutcome, NavigationState},
    random::RandomSource,
};

/// Read-only view of a session for renderers.
#[derive(Clone, Copy, Debug)]
#[expect(
    clippy::module_name_repetitions,
    reason = "`SessionView` reads better than a bare `View` at the call sites in the renderer."
)]
pub struct SessionView<'session> {
    /// The carved maze.
    pub grid: &'session Grid,
    /// Cell the player stands on.
    pub player: Position,
    /// Exit cell the player has to reach.
    pub goal: Position,
}

/// Receiver of the notification sent when the player reaches the exit.
pub trait WinObserver {
    /// Called exactly once per session, right after the winning move.
    fn on_won(&mut self, view: &SessionView<'_>);
}

impl WinObserver for () {
    fn on_won(&mut self, _view: &SessionView<'_>) {}
}

/// One maze and the player walking it.
#[derive(Debug)]
#[expect(
    clippy::module_name_repetitions,
    reason = "`GameSession` is the name the front end and its users know the session by."
)]
pub struct GameSession<S> {
    /// Size of the current maze.
    dimensions: Dimensions,
    /// The carved maze.
    grid: Grid,
    /// Player and exit positions.
    navigation: NavigationState,
    /// Draws used to carve every maze of this session.
    source: S,
}

impl<S: RandomSource> GameSession<S> {
    /// Starts a session on a freshly carved maze of the given size.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] if `dimensions` is not a valid grid size.
    pub fn new(dimensions: Dimensions, mut source: S) -> Result<Self, ConfigError> {
        let (grid, navigation) = build(dimensions, &mut source)?;

        Ok(Self {
            dimensions,
            grid,
            navigation,
            source,
        })
    }

    /// Size of the current maze.
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Snapshot of the maze and both positions for rendering.
    pub const fn current_state(&self) -> SessionView<'_> {
        SessionView {
            grid: &self.grid,
            player: self.navigation.position(),
            goal: self.navigation.goal(),
        }
    }

    /// Whether the player has reached the exit of the current maze.
    pub const fn has_won(&self) -> bool {
        self.navigation.has_won()
    }

    /// Moves the player one cell, notifying `observer` if the move reaches the exit.
    pub fn move_actor<O: WinObserver + ?Sized>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> MoveOutcome {
        let outcome = self.navigation.step(&self.grid, direction);

        if outcome.won {
            tracing::info!(
                height = self.dimensions.height,
                width = self.dimensions.width,
                "player reached the exit"
            );
            observer.on_won(&self.current_state());
        }

        outcome
    }

    /// Moves the player by a raw unit delta.
    ///
    /// Deltas other than the four orthogonal unit steps are ignored like a blocked move.
    pub fn move_by<O: WinObserver + ?Sized>(
        &mut self,
        d_row: isize,
        d_col: isize,
        observer: &mut O,
    ) -> MoveOutcome {
        Direction::from_delta(d_row, d_col).map_or_else(MoveOutcome::default, |direction| {
            self.move_actor(direction, observer)
        })
    }

    /// Replaces the maze with a new one of the same size.
    pub fn regenerate(&mut self) {
        let dimensions = self.dimensions;
        if let Err(err) = self.regenerate_with(dimensions) {
            // Unreachable: the current size already produced a maze.
            tracing::error!(%err, "failed to regenerate maze with the current size");
        }
    }

    /// Replaces the maze with a new one of the given size.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] if `dimensions` is not a valid grid size. The current maze and player
    ///   position are kept in that case.
    pub fn regenerate_with(&mut self, dimensions: Dimensions) -> Result<(), ConfigError> {
        let (grid, navigation) = build(dimensions, &mut self.source).inspect_err(|err| {
            tracing::warn!(%err, "rejected maze size");
        })?;

        self.dimensions = dimensions;
        self.grid = grid;
        self.navigation = navigation;

        tracing::info!(
            height = dimensions.height,
            width = dimensions.width,
            "generated new maze"
        );

        Ok(())
    }

    /// Replaces the maze with a new one of the given raw size, without normalising it.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] if the size is even or smaller than five cells on a side.
    pub fn try_regenerate(&mut self, height: usize, width: usize) -> Result<(), ConfigError> {
        self.regenerate_with(Dimensions { height, width })
    }
}

/// Carves a maze and places the player on its entrance, with the exit as goal.
fn build<S: RandomSource>(
    dimensions: Dimensions,
    source: &mut S,
) -> Result<(Grid, NavigationState), ConfigError> {
    let grid = maze::generate(dimensions.height, dimensions.width, source)?;
    let navigation = NavigationState::for_maze(&grid);

    Ok((grid, navigation))
}
