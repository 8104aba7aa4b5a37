//! The controller form widget
//!
//! Renders the whole form: power toggle, mode selector row, the
//! mode-dependent parameter sliders, the masked password field with its
//! inline validation error, and the submit button. Field visibility follows
//! the form state; focus follows `AppState::focus`.

use lumen_app::state::{AppState, Focus};
use lumen_core::types::{PULSE_MAX, SPEED_MAX};
use lumen_core::{check_password, Mode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::styles;
use crate::widgets::slider_line;

pub struct ControllerForm<'a> {
    state: &'a AppState,
}

impl<'a> ControllerForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn label_style(&self, field: Focus) -> Style {
        if self.state.focus == field {
            styles::label_focused()
        } else {
            styles::label_unfocused()
        }
    }

    fn power_row(&self) -> Line<'static> {
        let form = &self.state.form;
        let (on_mark, off_mark) = if form.power {
            ("(•) On ", "( ) Off")
        } else {
            ("( ) On ", "(•) Off")
        };
        Line::from(vec![
            Span::styled("Power      ", self.label_style(Focus::Power)),
            Span::styled(on_mark, styles::text_primary()),
            Span::raw("  "),
            Span::styled(off_mark, styles::text_primary()),
        ])
    }

    fn mode_row(&self) -> Line<'static> {
        let value: Span<'static> = match self.state.form.mode {
            Some(mode) => Span::styled(mode.label().to_string(), styles::text_primary()),
            None => Span::styled("— select a mode —", styles::text_muted()),
        };
        Line::from(vec![
            Span::styled("Mode       ", self.label_style(Focus::Mode)),
            value,
            Span::styled("  (Enter to choose)", styles::text_muted()),
        ])
    }

    fn color_rows(&self, lines: &mut Vec<Line<'static>>) {
        let color = self.state.form.color;
        lines.push(slider_line(
            "Red",
            color.r.to_string(),
            f64::from(color.r) / 255.0,
            self.state.focus == Focus::ColorR,
        ));
        lines.push(slider_line(
            "Green",
            color.g.to_string(),
            f64::from(color.g) / 255.0,
            self.state.focus == Focus::ColorG,
        ));
        lines.push(slider_line(
            "Blue",
            color.b.to_string(),
            f64::from(color.b) / 255.0,
            self.state.focus == Focus::ColorB,
        ));
        lines.push(slider_line(
            "Alpha",
            format!("{:.2}", color.a),
            f64::from(color.a),
            self.state.focus == Focus::ColorA,
        ));
        lines.push(Line::from(vec![
            Span::styled("Preview    ", styles::text_muted()),
            Span::styled(
                "██████",
                Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
            ),
        ]));
        lines.push(slider_line(
            "Pulse (s)",
            format!("{:.1}", self.state.form.pulse),
            self.state.form.pulse / PULSE_MAX,
            self.state.focus == Focus::Pulse,
        ));
    }

    fn param_rows(&self, mode: Mode, lines: &mut Vec<Line<'static>>) {
        if mode.uses_color() {
            self.color_rows(lines);
            return;
        }
        if mode.uses_speed() {
            lines.push(slider_line(
                "Speed",
                format!("{:.0}", self.state.form.speed),
                self.state.form.speed / SPEED_MAX,
                self.state.focus == Focus::Speed,
            ));
        }
        lines.push(slider_line(
            "Brightness",
            self.state.form.brightness.to_string(),
            f64::from(self.state.form.brightness) / 255.0,
            self.state.focus == Focus::Brightness,
        ));
    }

    fn password_rows(&self, lines: &mut Vec<Line<'static>>) {
        let form = &self.state.form;
        let focused = self.state.focus == Focus::Password;
        let mut masked = "•".repeat(form.password.chars().count());
        if focused {
            masked.push('_');
        }
        lines.push(Line::from(vec![
            Span::styled("Password   ", self.label_style(Focus::Password)),
            Span::styled(masked, styles::text_primary()),
        ]));

        // Inline validation error, shown once the user has started typing.
        if !form.password.is_empty() {
            if let Some(error) = check_password(&form.password).error {
                lines.push(Line::from(vec![
                    Span::raw("           "),
                    Span::styled(error.to_string(), styles::inline_error()),
                ]));
            }
        }
    }

    fn submit_row(&self) -> Line<'static> {
        let focused = self.state.focus == Focus::Submit;
        if self.state.form.can_submit() {
            Line::from(Span::styled("[ Submit ]", styles::submit_enabled(focused)))
        } else {
            Line::from(vec![
                Span::styled("[ Submit ]", styles::submit_disabled(focused)),
                Span::styled("  complete the form first", styles::text_muted()),
            ])
        }
    }
}

impl Widget for ControllerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Controller ")
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(self.power_row());

        if self.state.form.power {
            lines.push(Line::default());
            lines.push(self.mode_row());
        }

        if let Some(mode) = self.state.form.mode {
            lines.push(Line::default());
            self.param_rows(mode, &mut lines);
        }

        lines.push(Line::default());
        self.password_rows(&mut lines);
        lines.push(Line::default());
        lines.push(self.submit_row());

        Paragraph::new(lines).render(inner, buf);
    }
}
