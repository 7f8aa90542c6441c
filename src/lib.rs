//! A terminal game that carves random mazes and lets the player walk them to the exit.
//!
//! Mazes are carved by a randomized depth-first backtracking walk ([`maze`]) over a [`grid`] of
//! walls. A [`session`] ties a carved maze to the player's position ([`navigation`]) and is driven
//! by the terminal front end behind [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod config;
pub mod error;
mod events;
pub mod grid;
mod logging;
pub mod maze;
pub mod navigation;
pub mod random;
pub mod session;
mod types;
mod ui;

pub use app::App;
pub use logging::init_tracing;
