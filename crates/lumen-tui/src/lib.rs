//! lumen-tui - Terminal UI for Lumen
//!
//! Renders the controller form with ratatui and polls crossterm for input.
//! All state lives in `lumen-app`; this crate only draws it and converts
//! terminal events into messages.

pub mod event;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use event::poll;
pub use render::view;
pub use terminal::install_panic_hook;
