// The binary in main.rs is a thin terminal wrapper; everything it drives lives
// here so integration tests can exercise the controller without a terminal.

pub mod app;
pub mod config;
pub mod event;
pub mod generator;
pub mod input;
pub mod keyboard;
pub mod logging;
pub mod session;
pub mod ui;
