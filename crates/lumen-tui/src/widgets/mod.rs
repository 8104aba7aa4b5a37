//! TUI widgets

mod form;
mod mode_menu;
mod notices;
mod slider;
mod status_bar;

pub use form::ControllerForm;
pub use mode_menu::ModeMenu;
pub use notices::render_notices;
pub use slider::slider_line;
pub use status_bar::StatusBar;
