//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    OptionsMenu(OptionsMenuItem),
    /// Maze size editing screen.
    ///
    /// This variant represents the screen where the player picks a custom height and width for the
    /// next maze. It holds the field the cursor is on.
    SizeMenu(SizeField),
    /// In-game screen.
    ///
    /// This variant represents the screen where the maze is displayed and walked by the player.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

/// Options menu navigation choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// "Maze Size" option, leading to the size menu.
    Size,
    /// "Return" navigation option.
    Back,
}

/// Editable fields of the size menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SizeField {
    /// Number of rows of the next maze.
    Height,
    /// Number of columns of the next maze.
    Width,
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Options menu configuration.
    OptionsMenu(u8),
    /// Size menu configuration.
    SizeMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
            Self::SizeMenu(_) => "Maze Size",
        }
    }

    /// Returns the key hints shown at the bottom border of the menu.
    pub(crate) const fn hints(&self) -> &str {
        match self {
            Self::MainMenu(_) | Self::OptionsMenu(_) => "(j) down / (k) up / (l) select",
            Self::SizeMenu(_) => "(+/-) size (l) play (h) back",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) | Self::SizeMenu(value) => *value,
        }
    }
}
