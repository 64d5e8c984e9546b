use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::strokes::StrokeBuffer;
use crate::ui::theme::Theme;

/// The "Typed:" box shown in visual mode.
pub struct StrokePanel<'a> {
    strokes: &'a StrokeBuffer,
    theme: &'a Theme,
}

impl<'a> StrokePanel<'a> {
    pub fn new(strokes: &'a StrokeBuffer, theme: &'a Theme) -> Self {
        Self { strokes, theme }
    }
}

/// Newlines and tabs become visible markers so the panel stays one flowing line.
fn visible_text(strokes: &StrokeBuffer) -> String {
    strokes
        .text()
        .chars()
        .map(|ch| match ch {
            '\n' => '\u{21b5}',
            '\t' => '\u{2192}',
            _ => ch,
        })
        .collect()
}

impl Widget for StrokePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        let line = Line::from(vec![
            Span::styled(
                "Typed: ",
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(visible_text(self.strokes), Style::default().fg(colors.fg())),
        ]);

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
