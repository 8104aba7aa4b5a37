//! Terminal restoration on panic
//!
//! Without this, a panic while the alternate screen is active leaves the
//! shell in raw mode and eats the panic message.

/// Chain a terminal-restoring hook in front of the default panic handler.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        default_hook(info);
    }));
}
