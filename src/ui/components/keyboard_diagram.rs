use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::keyboard::key_id::KeyId;
use crate::keyboard::layout::{KeyDef, KeyboardLayout};
use crate::keyboard::tracker::KeyPressTracker;
use crate::ui::theme::Theme;

pub struct KeyboardDiagram<'a> {
    pub layout: &'a KeyboardLayout,
    pub tracker: &'a KeyPressTracker,
    pub next_key: Option<KeyId>,
    pub theme: &'a Theme,
}

impl<'a> KeyboardDiagram<'a> {
    pub fn new(layout: &'a KeyboardLayout, tracker: &'a KeyPressTracker, theme: &'a Theme) -> Self {
        Self {
            layout,
            tracker,
            next_key: None,
            theme,
        }
    }

    /// Marks the key the typist should press next.
    pub fn next_key(mut self, next_key: Option<KeyId>) -> Self {
        self.next_key = next_key;
        self
    }

    fn key_style(&self, key: &KeyDef) -> Style {
        let colors = &self.theme.colors;
        if self.next_key.as_ref() == Some(&key.id) {
            Style::default()
                .fg(colors.key_active_fg())
                .bg(colors.key_next_bg())
                .add_modifier(Modifier::BOLD)
        } else if self.tracker.is_active(key.id.as_str()) {
            Style::default()
                .fg(colors.key_active_fg())
                .bg(colors.key_active_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.key_fg()).bg(colors.key_bg())
        }
    }
}

/// Label centered in a cell `width` wide.
fn key_cell(label: &str, width: u16) -> String {
    let width = width as usize;
    let len = label.chars().count();
    if len >= width {
        return label.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{label}{}", " ".repeat(left), " ".repeat(right))
}

impl Widget for KeyboardDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Keyboard ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let left = inner.x + inner.width.saturating_sub(self.layout.width()) / 2;

        for (row_idx, row) in self.layout.rows.iter().enumerate() {
            let y = inner.y + row_idx as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let mut x = left + row.offset;
            for key in &row.keys {
                if x + key.width > inner.x + inner.width {
                    break;
                }
                let cell = key_cell(&key.label(), key.width);
                buf.set_string(x, y, &cell, self.key_style(key));
                x += key.width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn find_cell(buf: &Buffer, y: u16, symbol: &str) -> u16 {
        (0..buf.area.width)
            .find(|&x| buf[(x, y)].symbol() == symbol)
            .unwrap()
    }

    fn render(diagram: KeyboardDiagram<'_>) -> Buffer {
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        diagram.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_key_cell_centers_label() {
        assert_eq!(key_cell("A", 3), " A ");
        assert_eq!(key_cell("Bksp", 6), " Bksp ");
        assert_eq!(key_cell("SPACE", 4), "SPAC");
    }

    #[test]
    fn test_rows_are_drawn() {
        let layout = KeyboardLayout::qwerty();
        let tracker = KeyPressTracker::new();
        let theme = Theme::default();
        let buf = render(KeyboardDiagram::new(&layout, &tracker, &theme));
        assert!(row_text(&buf, 1).contains(" Q  W  E "));
        assert!(row_text(&buf, 2).contains(" A  S  D "));
        assert!(row_text(&buf, 3).contains(" Z  X  C "));
        assert!(row_text(&buf, 4).contains("SPACE"));
    }

    #[test]
    fn test_active_and_next_keys_styled() {
        let layout = KeyboardLayout::qwerty();
        let mut tracker = KeyPressTracker::new();
        tracker.record(KeyId::new("Q"), Instant::now());
        let theme = Theme::default();
        let colors = &theme.colors;
        let buf = render(
            KeyboardDiagram::new(&layout, &tracker, &theme).next_key(Some(KeyId::new("W"))),
        );

        let q_x = find_cell(&buf, 1, "Q");
        let w_x = find_cell(&buf, 1, "W");
        let e_x = find_cell(&buf, 1, "E");
        assert_eq!(buf[(q_x, 1)].bg, colors.key_active_bg());
        assert_eq!(buf[(w_x, 1)].bg, colors.key_next_bg());
        assert_eq!(buf[(e_x, 1)].bg, colors.key_bg());
    }
}
