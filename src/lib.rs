pub mod game;
pub mod ui;
