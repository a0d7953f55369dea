pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod keys;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod snapshot_feed;
pub mod terminal_runtime;
pub mod ui;
