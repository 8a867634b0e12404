pub mod commands;
pub mod config;
pub mod formatting;
pub mod game;
pub mod roster;
pub mod tui;
