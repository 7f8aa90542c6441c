//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    grid::{Grid, Position},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen, SizeField},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::OptionsMenu(item) => options_menu(frame, item),
        Screen::SizeMenu(field) => size_menu(app, frame, field),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the menus.
///
/// This function creates the common layout and block structure used by every menu. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the [`MenuType`] parameter. The box is exactly tall enough for its
/// entries plus the two borders, so no entry is lost on short terminals.
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let height = u16::from(menu.value()).saturating_add(2);
    let [space] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [_, layout, _] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(space);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hints())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Length(1); menu.value().into()]).split(inner_space)
}

/// Renders a list of menu entries, highlighting the one under the cursor.
fn menu_entries(frame: &mut Frame, layout: &[Rect], entries: &[(String, bool)]) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (area, (label, active)) in layout.iter().zip(entries) {
        let style = if *active {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(label.as_str()).centered().style(style), *area);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(3));

    menu_entries(
        frame,
        &inner_layout,
        &[
            ("Start Game".to_owned(), item == MainMenuItem::StartGame),
            ("Options".to_owned(), item == MainMenuItem::Options),
            ("Quit".to_owned(), item == MainMenuItem::Quit),
        ],
    );
}

/// Renders the options menu screen with configuration choices.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::OptionsMenu(2));

    menu_entries(
        frame,
        &inner_layout,
        &[
            ("Maze Size".to_owned(), item == OptionsMenuItem::Size),
            ("Return".to_owned(), item == OptionsMenuItem::Back),
        ],
    );
}

/// Renders the size menu with the height and width of the next maze.
///
/// A rejected size, if any, is shown under the two fields.
pub(crate) fn size_menu(app: &App, frame: &mut Frame, field: SizeField) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::SizeMenu(3));

    menu_entries(
        frame,
        &inner_layout,
        &[
            (
                format!("Height: {}", app.pending_size.height),
                field == SizeField::Height,
            ),
            (
                format!("Width: {}", app.pending_size.width),
                field == SizeField::Width,
            ),
        ],
    );

    if let (Some(status), Some(area)) = (&app.status, inner_layout.last()) {
        frame.render_widget(
            Line::styled(status.as_str(), Style::default().fg(Color::Red)).centered(),
            *area,
        );
    }
}

/// Renders the in-game screen with the maze, the player and the exit.
///
/// The maze is drawn with [`Canvas`] widgets for precise coordinate-based drawing: one layer for
/// the walls and one for the player and the exit. A tooltip with the key bindings sits at the
/// bottom, and the win banner is drawn over everything once the exit is reached.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let view = app.session.current_state();
    let maze_rows = u16::try_from(view.grid.height())?;
    let maze_columns = u16::try_from(view.grid.width())?;

    // Create overall layout: maze area + tooltip at bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let space = centered(maze_content_area, maze_columns, maze_rows)?;

    let wall_coords = to_canvas_coords(view.grid.walls(), view.grid)?;
    let player_coords = to_canvas_coords([view.player], view.grid)?;
    let goal_coords = to_canvas_coords([view.goal], view.grid)?;

    let x_bounds: [f64; 2] = [
        (-rounded_div::i32(space.width.into(), 2)).into(),
        (rounded_div::i32(space.width.into(), 2)).into(),
    ];
    let y_bounds: [f64; 2] = [
        (-rounded_div::i32(space.height.into(), 2)).into(),
        (rounded_div::i32(space.height.into(), 2)).into(),
    ];

    let maze = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Green,
            });
        });
    let actors = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &goal_coords,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &player_coords,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);
    frame.render_widget(actors, space);

    let title = app.status.as_ref().map_or_else(
        || {
            format!(
                "{}x{} / moves: {}",
                view.grid.height(),
                view.grid.width(),
                app.moves
            )
        },
        Clone::clone,
    );
    let tooltip_block = Block::bordered()
        .title(title)
        .title_bottom("(wasd/arrows) move / (r) new maze / (h) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP | Borders::BOTTOM);

    frame.render_widget(tooltip_block, tooltip_area);

    if app.banner.visible {
        win_banner(app, frame)?;
    }

    Ok(())
}

/// Renders the win banner centered over the maze.
///
/// # Errors
///
/// This function may return errors if the banner area cannot be computed.
pub(crate) fn win_banner(app: &App, frame: &mut Frame) -> Result<()> {
    let area = centered(frame.area(), 40, 4)?;
    let block = Block::bordered()
        .title("You escaped!")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .border_type(BorderType::Double);
    let text = Paragraph::new(vec![
        Line::raw(format!("Exit reached in {} moves.", app.moves)).centered(),
        Line::raw("Press any key for a new maze.").centered(),
    ])
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(text, area);

    Ok(())
}

/// Returns a `width` by `height` rectangle centered inside `area`.
///
/// # Errors
///
/// This function may return errors if the layout does not produce the middle slot.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(height),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered row from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(width),
        Constraint::Min(1),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered area from horizontal layout")
}

/// Transforms maze positions to canvas coordinates.
///
/// The canvas origin sits at the center of the maze with the y axis pointing up, so a cell at
/// `(row, col)` lands on `(col - (width - 1) / 2, (height - 1) / 2 - row)`.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn to_canvas_coords<I>(positions: I, grid: &Grid) -> Result<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = Position>,
{
    let rows_n = f64::from(u16::try_from(grid.height())?);
    let cols_n = f64::from(u16::try_from(grid.width())?);

    positions
        .into_iter()
        .map(|position| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.row)?);
            let screen_x = f64::from(u16::try_from(position.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
