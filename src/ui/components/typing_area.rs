use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::challenge::{Challenge, RenderState};
use crate::ui::theme::Theme;

pub struct TypingArea<'a> {
    challenge: &'a Challenge,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(challenge: &'a Challenge, theme: &'a Theme) -> Self {
        Self { challenge, theme }
    }
}

/// Display form of one target character.
struct RenderToken {
    display: String,
    state: RenderState,
    is_line_break: bool,
}

fn build_render_tokens(view: impl Iterator<Item = (char, RenderState)>) -> Vec<RenderToken> {
    view.map(|(ch, state)| match ch {
        '\n' => RenderToken {
            display: "\u{21b5}".to_string(), // ↵
            state,
            is_line_break: true,
        },
        '\t' => RenderToken {
            display: "\u{2192}".to_string(), // →
            state,
            is_line_break: false,
        },
        _ => RenderToken {
            display: ch.to_string(),
            state,
            is_line_break: false,
        },
    })
    .collect()
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let tokens = build_render_tokens(self.challenge.formatted_view());

        let mut lines: Vec<Vec<Span>> = vec![Vec::new()];
        for token in tokens {
            let style = match token.state {
                RenderState::Typed => Style::default().fg(colors.text_correct()),
                RenderState::Next => Style::default()
                    .fg(colors.text_cursor_fg())
                    .bg(colors.text_cursor_bg()),
                RenderState::Untyped => Style::default().fg(colors.text_pending()),
            };
            if let Some(line) = lines.last_mut() {
                line.push(Span::styled(token.display, style));
            }
            if token.is_line_break {
                lines.push(Vec::new());
            }
        }

        let ratatui_lines: Vec<Line> = lines.into_iter().map(Line::from).collect();

        let block = Block::bordered()
            .title(" Type this text ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(ratatui_lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
