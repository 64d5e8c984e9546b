use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};

use crate::session::challenge::Challenge;
use crate::ui::theme::Theme;

/// Horizontal bar of typed characters against the target length, with the
/// count drawn over the bar and the mistake tally in the title.
pub struct ChallengeProgress<'a> {
    challenge: &'a Challenge,
    theme: &'a Theme,
}

impl<'a> ChallengeProgress<'a> {
    pub fn new(challenge: &'a Challenge, theme: &'a Theme) -> Self {
        Self { challenge, theme }
    }

    fn caption(&self) -> String {
        format!(
            "{}/{} chars",
            self.challenge.cursor(),
            self.challenge.target().len()
        )
    }

    fn title(&self) -> String {
        match self.challenge.mistakes() {
            0 => " Progress ".to_string(),
            1 => " Progress | 1 mistake ".to_string(),
            n => format!(" Progress | {n} mistakes "),
        }
    }
}

/// Number of cells to fill; only a finished challenge fills the whole bar.
fn filled_cells(typed: usize, total: usize, width: u16) -> u16 {
    if total == 0 || typed >= total {
        return width;
    }
    (typed * width as usize / total) as u16
}

impl Widget for ChallengeProgress<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(self.title())
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let fill: Color = if self.challenge.is_complete() {
            colors.success()
        } else {
            colors.bar_filled()
        };
        let filled = filled_cells(
            self.challenge.cursor(),
            self.challenge.target().len(),
            inner.width,
        );
        let caption: Vec<char> = self.caption().chars().collect();
        let caption_start = inner.width.saturating_sub(caption.len() as u16) / 2;

        for offset in 0..inner.width {
            let style = if offset < filled {
                Style::default().fg(colors.bg()).bg(fill)
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            let cell = &mut buf[(inner.x + offset, inner.y)];
            cell.set_style(style);
            let glyph = offset
                .checked_sub(caption_start)
                .and_then(|idx| caption.get(idx as usize));
            if let Some(ch) = glyph {
                cell.set_char(*ch);
            }
        }
    }
}
