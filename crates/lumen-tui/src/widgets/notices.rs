//! Notice stack overlay
//!
//! Transient notices render in the top-right corner over the form, newest
//! at the bottom.

use lumen_app::state::AppState;
use lumen_core::NoticeLevel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::palette;

/// Width of the notice column.
const NOTICE_WIDTH: u16 = 44;

/// Render the active notices over `area`.
pub fn render_notices(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.notices.is_empty() {
        return;
    }

    let width = NOTICE_WIDTH.min(area.width);
    let height = (state.notices.len() as u16 + 2).min(area.height);
    let x = area.right().saturating_sub(width);
    let overlay = Rect::new(x, area.y, width, height);

    let lines: Vec<Line<'static>> = state
        .notices
        .iter()
        .map(|posted| {
            let (icon, color) = match posted.notice.level {
                NoticeLevel::Error => ("✗", palette::STATUS_RED),
                NoticeLevel::Info => ("ℹ", palette::STATUS_BLUE),
            };
            Line::from(Span::styled(
                format!("{icon} {}", posted.notice.text),
                Style::default().fg(color),
            ))
        })
        .collect();

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette::BORDER_DIM))
                    .style(Style::default().bg(palette::POPUP_BG)),
            )
            .wrap(ratatui::widgets::Wrap { trim: true }),
        overlay,
    );
}
