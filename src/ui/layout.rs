use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::keyboard::layout::KeyboardLayout;

/// Header, body and footer rows of the full screen.
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Height of the bordered keyboard diagram, one line per key row.
pub fn keyboard_height(layout: &KeyboardLayout) -> u16 {
    layout.rows.len() as u16 + 2
}

pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let chars = text.chars().count().max(1);
    chars.div_ceil(width)
}

/// A `width`-wide column centered horizontally in `area`, clamped to fit.
pub fn centered_column(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let left = area.x.saturating_add((area.width - width) / 2);
    Rect::new(left, area.y, width, area.height)
}
