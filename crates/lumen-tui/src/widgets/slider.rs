//! Horizontal slider rendering

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::{palette, styles};

/// Width of the slider bar, in cells.
const BAR_WIDTH: usize = 24;

/// Width reserved for the field label, so sliders line up.
const LABEL_WIDTH: usize = 11;

/// Build a one-line slider: padded label, filled/empty bar, current value.
pub fn slider_line(label: &str, value: String, ratio: f64, focused: bool) -> Line<'static> {
    let filled = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH - filled;

    let label_style = if focused {
        styles::label_focused()
    } else {
        styles::label_unfocused()
    };

    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(palette::SLIDER_FILLED),
        ),
        Span::styled(
            "░".repeat(empty),
            Style::default().fg(palette::SLIDER_EMPTY),
        ),
        Span::styled(format!("  {value}"), styles::text_primary()),
    ])
}
