pub mod components;
pub mod layout;
pub mod theme;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, Mode};
use crate::session::challenge::Challenge;
use components::challenge_progress::ChallengeProgress;
use components::keyboard_diagram::KeyboardDiagram;
use components::stroke_panel::StrokePanel;
use components::typing_area::TypingArea;
use layout::{AppLayout, centered_column, keyboard_height, wrapped_line_count};
use theme::Theme;

const TEXT_PANEL_WIDTH: u16 = 80;
const STROKE_PANEL_WIDTH: u16 = 54;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme, now: Instant) {
    let area = frame.area();
    let colors = &theme.colors;

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let app_layout = AppLayout::new(area);
    render_header(frame, app, theme, app_layout.header);

    match app.challenge() {
        Some(challenge) => render_practice(frame, app, challenge, theme, app_layout.main, now),
        None => render_visual(frame, app, theme, app_layout.main),
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [F1] Visual  [F2] Practice  [F3] New text  [Esc] Quit ",
        Style::default().fg(colors.text_pending()),
    )));
    frame.render_widget(footer, app_layout.footer);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let colors = &theme.colors;
    let info = match app.mode() {
        Mode::Visual => " Visual mode".to_string(),
        Mode::Practice => format!(" Practice mode | {}", app.difficulty),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " keyglow ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(info, Style::default().fg(colors.text_pending()).bg(colors.header_bg())),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_practice(
    frame: &mut Frame,
    app: &App,
    challenge: &Challenge,
    theme: &Theme,
    area: Rect,
    now: Instant,
) {
    let colors = &theme.colors;
    let column = centered_column(TEXT_PANEL_WIDTH, area);
    let text_lines = wrapped_line_count(&challenge.text(), column.width.saturating_sub(2) as usize);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_lines as u16 + 2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(keyboard_height(&app.layout)),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(TypingArea::new(challenge, theme), rows[0]);

    let stats = challenge.stats(now);
    let stats_color = if stats.completed {
        colors.success()
    } else {
        colors.accent()
    };
    let stats_line = Paragraph::new(Line::from(Span::styled(
        format!(" {stats}"),
        Style::default().fg(stats_color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(stats_line, rows[1]);

    frame.render_widget(ChallengeProgress::new(challenge, theme), rows[2]);

    let next_key = challenge.next_char().map(|ch| app.layout.key_for_char(ch));
    let keyboard = KeyboardDiagram::new(&app.layout, app.tracker(), theme).next_key(next_key);
    frame.render_widget(keyboard, rows[3]);
}

fn render_visual(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let column = centered_column(STROKE_PANEL_WIDTH.max(app.layout.width() + 2), area);
    let stroke_lines = wrapped_line_count(
        &format!("Typed: {}", app.strokes().text()),
        STROKE_PANEL_WIDTH.saturating_sub(2) as usize,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(keyboard_height(&app.layout)),
            Constraint::Length(1),
            Constraint::Length(stroke_lines as u16 + 2),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(KeyboardDiagram::new(&app.layout, app.tracker(), theme), rows[0]);
    frame.render_widget(
        StrokePanel::new(app.strokes(), theme),
        centered_column(STROKE_PANEL_WIDTH, rows[2]),
    );
}
