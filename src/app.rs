//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    config::{Cli, Dimensions},
    events,
    random::SeededSource,
    session::{GameSession, SessionView, WinObserver},
    types::{MainMenuItem, Screen},
    ui,
};

/// Win notification shown on top of the maze.
///
/// The session tells this observer about the winning move; the in-game screen then shows the
/// banner until the player presses a key, which starts a fresh maze.
#[derive(Debug, Default)]
pub(crate) struct WinBanner {
    /// Whether the banner is on screen.
    pub(crate) visible: bool,
}

impl WinObserver for WinBanner {
    fn on_won(&mut self, _view: &SessionView<'_>) {
        self.visible = true;
    }
}

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// The maze being played and the player walking it.
    pub(crate) session: GameSession<SeededSource>,
    /// Size being edited in the size menu.
    ///
    /// This field only turns into a maze when the player applies it from the size menu, so
    /// browsing sizes never throws away the maze in progress.
    pub(crate) pending_size: Dimensions,
    /// Number of successful moves in the current maze.
    pub(crate) moves: usize,
    /// Win banner fed by the session.
    pub(crate) banner: WinBanner,
    /// Last error worth showing to the player, if any.
    pub(crate) status: Option<String>,
}

impl App {
    /// Creates the application with a first maze of the given size.
    ///
    /// With a `seed` every maze of the run is reproducible; without one the seed is drawn at
    /// random. Either way it is written to the log.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`](crate::error::ConfigError) if `dimensions` is not a valid maze size.
    pub fn new(dimensions: Dimensions, seed: Option<u64>) -> Result<Self> {
        let source = seed.map_or_else(SeededSource::from_entropy, SeededSource::from_seed);
        tracing::info!(
            seed = source.seed(),
            height = dimensions.height,
            width = dimensions.width,
            "starting game"
        );

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            session: GameSession::new(dimensions, source)?,
            pending_size: dimensions,
            moves: 0,
            banner: WinBanner::default(),
            status: None,
        })
    }

    /// Creates the application from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`](crate::error::ConfigError) if the normalised size is not a valid maze
    ///   size.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(cli.dimensions(), cli.seed)
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Throws the current maze away and starts a new one of the same size.
    pub(crate) fn restart(&mut self) {
        self.session.regenerate();
        self.moves = 0;
        self.banner.visible = false;
        self.status = None;
    }

    /// Starts a new maze with the size edited in the size menu.
    ///
    /// A rejected size keeps the current maze and leaves a message in [`App::status`].
    pub(crate) fn apply_pending_size(&mut self) {
        match self.session.regenerate_with(self.pending_size) {
            Ok(()) => {
                self.moves = 0;
                self.banner.visible = false;
                self.status = None;
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}
