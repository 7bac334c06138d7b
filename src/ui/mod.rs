pub mod app;
pub mod components;
pub mod context;
pub mod handler;
pub mod input;
pub mod traits;
pub mod tui;
pub mod views;
