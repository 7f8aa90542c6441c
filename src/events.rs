//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Direction,
    types::{MainMenuItem, OptionsMenuItem, Screen, SizeField},
    App,
};

/// Cells added or removed per key press in the size menu.
///
/// Sizes must stay odd, so they change two cells at a time.
const SIZE_STEP: i64 = 2;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press based on the current screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return;
    }

    match app.screen {
        Screen::InGame => handle_in_game_events(app, code),
        _ => match code {
            KeyCode::Char('j') => handle_j_events(app),
            KeyCode::Char('k') => handle_k_events(app),
            KeyCode::Char('l') => handle_l_events(app),
            KeyCode::Char('h') => handle_h_events(app),
            KeyCode::Char('+' | '=') => handle_resize_events(app, SIZE_STEP),
            KeyCode::Char('-') => handle_resize_events(app, -SIZE_STEP),
            _ => {}
        },
    }
}

/// Handles key presses while a maze is on screen.
///
/// Arrow keys and `w`/`a`/`s`/`d` move the player, `r` carves a new maze and `h` returns to the
/// main menu. While the win banner is up, any key dismisses it and starts a new maze.
pub(crate) fn handle_in_game_events(app: &mut App, code: KeyCode) {
    if app.banner.visible {
        app.restart();
        return;
    }

    let direction = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
        KeyCode::Char('r' | 'R') => {
            app.restart();
            return;
        }
        KeyCode::Char('h') => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
            return;
        }
        _ => return,
    };

    if app.session.move_actor(direction, &mut app.banner).moved {
        app.moves += 1;
    }
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The behavior
/// varies depending on the current screen.
pub(crate) const fn handle_j_events(app: &mut App) {
    app.screen = match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => Screen::MainMenu(MainMenuItem::Options),
        Screen::MainMenu(MainMenuItem::Options) => Screen::MainMenu(MainMenuItem::Quit),
        Screen::OptionsMenu(OptionsMenuItem::Size) => Screen::OptionsMenu(OptionsMenuItem::Back),
        Screen::SizeMenu(SizeField::Height) => Screen::SizeMenu(SizeField::Width),
        other => other,
    };
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus. Like the 'j'
/// handler, behavior varies by screen.
pub(crate) const fn handle_k_events(app: &mut App) {
    app.screen = match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => Screen::MainMenu(MainMenuItem::Options),
        Screen::MainMenu(MainMenuItem::Options) => Screen::MainMenu(MainMenuItem::StartGame),
        Screen::OptionsMenu(OptionsMenuItem::Back) => Screen::OptionsMenu(OptionsMenuItem::Size),
        Screen::SizeMenu(SizeField::Width) => Screen::SizeMenu(SizeField::Height),
        other => other,
    };
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. From the size menu it carves a maze of the edited size and
/// jumps straight into it.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.pending_size = app.session.dimensions();
            app.screen = Screen::SizeMenu(SizeField::Height);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu(_) => {
            app.apply_pending_size();
            if app.status.is_none() {
                app.screen = Screen::InGame;
            }
        }
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
pub(crate) const fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu(_) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        _ => {}
    }
}

/// Handles '+' and '-' key presses in the size menu.
///
/// The field under the cursor grows or shrinks by `step` cells; the result is normalised so it
/// always stays a valid maze size.
pub(crate) fn handle_resize_events(app: &mut App, step: i64) {
    if let Screen::SizeMenu(field) = app.screen {
        app.pending_size = match field {
            SizeField::Height => app.pending_size.resized(step, 0),
            SizeField::Width => app.pending_size.resized(0, step),
        };
    }
}
