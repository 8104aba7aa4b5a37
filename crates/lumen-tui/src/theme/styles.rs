//! Semantic style builders

use lumen_app::ConnectionState;
use ratatui::style::{Modifier, Style};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Field styles ---
pub fn label_focused() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn label_unfocused() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn inline_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Submit button ---
pub fn submit_enabled(focused: bool) -> Style {
    let style = Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn submit_disabled(focused: bool) -> Style {
    let style = Style::default().fg(palette::TEXT_MUTED);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Indicator (icon, label style) for the link state in the status bar.
pub fn link_indicator(state: &ConnectionState) -> (&'static str, Style) {
    match state {
        ConnectionState::Connected => ("●", Style::default().fg(palette::STATUS_GREEN)),
        ConnectionState::Connecting => ("◌", Style::default().fg(palette::STATUS_YELLOW)),
        ConnectionState::Reconnecting { .. } => ("◌", Style::default().fg(palette::STATUS_YELLOW)),
        ConnectionState::Disconnected => ("○", Style::default().fg(palette::STATUS_RED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_indicator_colors() {
        let (icon, _) = link_indicator(&ConnectionState::Connected);
        assert_eq!(icon, "●");
        let (icon, _) = link_indicator(&ConnectionState::Reconnecting { attempt: 2 });
        assert_eq!(icon, "◌");
        let (icon, _) = link_indicator(&ConnectionState::Disconnected);
        assert_eq!(icon, "○");
    }
}
