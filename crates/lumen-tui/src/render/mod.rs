//! The top-level view function

use lumen_app::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets;

/// Draw one frame from the current state. Reads everything, mutates
/// nothing.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    // Title line
    let title = Line::from(vec![
        Span::styled(
            " Lumen",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" — lighting controller", Style::default().fg(palette::TEXT_SECONDARY)),
    ]);
    frame.render_widget(ratatui::widgets::Paragraph::new(title), chunks[0]);

    // The form itself
    frame.render_widget(widgets::ControllerForm::new(state), chunks[1]);

    // Status bar
    frame.render_widget(widgets::StatusBar::new(state), chunks[2]);

    // Mode selector popup, over the form
    if let Some(menu) = &state.mode_menu {
        let popup = widgets::ModeMenu::popup_area(chunks[1]);
        frame.render_widget(widgets::ModeMenu::new(menu), popup);
    }

    // Notices on top of everything
    widgets::render_notices(frame, chunks[1], state);
}
