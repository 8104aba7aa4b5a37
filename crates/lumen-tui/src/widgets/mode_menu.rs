//! Mode selector popup

use lumen_app::state::ModeMenuState;
use lumen_core::Mode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::{palette, styles};

pub struct ModeMenu<'a> {
    menu: &'a ModeMenuState,
}

impl<'a> ModeMenu<'a> {
    pub fn new(menu: &'a ModeMenuState) -> Self {
        Self { menu }
    }

    /// The popup rect: centered horizontally, tall enough for the whole
    /// mode list when the terminal allows it.
    pub fn popup_area(area: Rect) -> Rect {
        let width = 30u16.min(area.width);
        let height = (Mode::ALL.len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for ModeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Mode ")
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        // Scroll the list window so the selection stays visible on short
        // terminals.
        let visible = inner.height as usize;
        let offset = self
            .menu
            .selected
            .saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line<'static>> = Mode::ALL
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, mode)| {
                let style = if index == self.menu.selected {
                    Style::default()
                        .fg(palette::ACCENT)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(format!(" {} ", mode.label()), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
