//! Status bar widget
//!
//! Shows the broker link state, form readiness, and the key hints.

use lumen_app::state::AppState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::TEXT_MUTED));

        let (icon, style) = styles::link_indicator(&self.state.link);
        let mut segments = vec![
            Span::raw(" "),
            Span::styled(format!("{} {}", icon, self.state.link.label()), style),
        ];

        segments.push(separator.clone());
        if self.state.form.can_submit() {
            segments.push(Span::styled(
                "✓ ready",
                Style::default().fg(palette::STATUS_GREEN),
            ));
        } else {
            segments.push(Span::styled("… incomplete", styles::text_muted()));
        }

        segments.push(separator);
        segments.push(Span::styled(
            "Tab/↑↓ move  ←→ adjust  Enter select/submit  Esc quit",
            styles::text_secondary(),
        ));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments())).render(area, buf);
    }
}
