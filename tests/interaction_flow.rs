use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use keyglow::app::{App, Mode};
use keyglow::generator::corpus::{Corpus, Difficulty};
use keyglow::generator::selector::ChallengeSelector;
use keyglow::input::{self, Command};
use keyglow::keyboard::key_id::KeyId;
use keyglow::keyboard::tracker::{DECAY_WINDOW, KeyPressTracker};
use keyglow::session::challenge::{Challenge, KeyOutcome};
use keyglow::ui::{self, theme::Theme};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn app_with_text(text: &str, mode: Mode) -> App {
    let texts = vec![text.to_string()];
    let corpus = Corpus::new(texts.clone(), texts.clone(), texts).unwrap();
    App::new(
        ChallengeSelector::with_rng(corpus, SmallRng::seed_from_u64(11)),
        Difficulty::Medium,
        mode,
    )
}

/// Feeds raw terminal key codes through the same path the binary uses.
fn press(app: &mut App, code: KeyCode, now: Instant) {
    let event = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(command) = input::translate(event, &app.layout) {
        app.handle_command(command, now);
    }
}

fn type_str(app: &mut App, text: &str, start: Instant, step: Duration) -> Instant {
    let mut now = start;
    for ch in text.chars() {
        let code = match ch {
            '\n' => KeyCode::Enter,
            _ => KeyCode::Char(ch),
        };
        press(app, code, now);
        now += step;
    }
    now
}

#[test]
fn tracker_active_iff_recorded_within_window() {
    let t0 = Instant::now();
    let mut tracker = KeyPressTracker::new();
    let presses = [("A", 0), ("B", 120), ("C", 250), ("A", 400), ("SPACE", 520)];
    for (key, at) in presses {
        tracker.record(KeyId::new(key), t0 + ms(at));
    }

    let now = t0 + ms(700);
    tracker.sweep(now, DECAY_WINDOW);

    for key in ["A", "B", "C", "SPACE"] {
        let last = presses
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, at)| t0 + ms(*at))
            .max()
            .unwrap();
        let expected = now.duration_since(last) < DECAY_WINDOW;
        assert_eq!(tracker.is_active(key), expected, "key {key}");
    }
}

#[test]
fn challenge_cursor_is_monotonic_and_matches_completion() {
    let t0 = Instant::now();
    let mut challenge = Challenge::new("hello world").unwrap();
    let keys = "hxeelzlo wqorld!!";
    let mut last_cursor = 0;
    for (i, ch) in keys.chars().enumerate() {
        challenge.process_key(ch, t0 + ms(i as u64 * 50));
        assert!(challenge.cursor() >= last_cursor);
        assert_eq!(
            challenge.cursor() == challenge.target().len(),
            challenge.is_complete()
        );
        last_cursor = challenge.cursor();
    }
    assert!(challenge.is_complete());
}

#[test]
fn completed_challenge_ignores_further_keys() {
    let t0 = Instant::now();
    let mut challenge = Challenge::new("ok").unwrap();
    challenge.process_key('o', t0);
    challenge.process_key('k', t0 + ms(100));
    let before = (challenge.cursor(), challenge.mistakes(), challenge.is_complete());

    for i in 0..10 {
        assert_eq!(challenge.process_key('z', t0 + ms(200 + i)), KeyOutcome::Rejected);
    }
    assert_eq!(
        (challenge.cursor(), challenge.mistakes(), challenge.is_complete()),
        before
    );
}

#[test]
fn stats_follow_formulas() {
    let t0 = Instant::now();
    let mut challenge = Challenge::new("abcde").unwrap();
    challenge.process_key('a', t0);
    challenge.process_key('x', t0 + ms(1_000));
    challenge.process_key('b', t0 + ms(2_000));

    let stats = challenge.stats(t0 + ms(6_000));
    assert_eq!(stats.total_chars, 5);
    assert_eq!(stats.typed_chars, 2);
    assert_eq!(stats.mistakes, 1);
    assert_eq!(stats.accuracy, 50.0);
    // 2 chars = 0.4 words over 0.1 minutes
    assert!((stats.wpm - 4.0).abs() < 1e-9);
    assert!(!stats.completed);
}

#[test]
fn stats_before_first_key() {
    let challenge = Challenge::new("abc").unwrap();
    let stats = challenge.stats(Instant::now());
    assert_eq!(stats.accuracy, 100.0);
    assert_eq!(stats.wpm, 0.0);
    assert_eq!(stats.elapsed, Duration::ZERO);
}

#[test]
fn practice_session_end_to_end() {
    let t0 = Instant::now();
    let mut app = app_with_text("Hi there.", Mode::Practice);

    let now = type_str(&mut app, "Hi tx", t0, ms(100));
    let challenge = app.challenge().unwrap();
    assert_eq!(challenge.cursor(), 4);
    assert_eq!(challenge.mistakes(), 1);

    press(&mut app, KeyCode::Backspace, now);
    assert_eq!(app.challenge().unwrap().cursor(), 4);

    let end = type_str(&mut app, "here.", now + ms(100), ms(100));
    let challenge = app.challenge().unwrap();
    assert!(challenge.is_complete());
    assert_eq!(challenge.started_at(), Some(t0));
    assert_eq!(challenge.finished_at(), Some(end - ms(100)));

    let stats = challenge.stats(end + ms(5_000));
    assert_eq!(stats.to_string(), format!(
        "Completed! WPM: {:.1}, Accuracy: {:.1}%",
        stats.wpm, stats.accuracy
    ));
    assert!((stats.accuracy - 100.0 * 8.0 / 9.0).abs() < 1e-9);
}

#[test]
fn shifted_keys_light_their_base_key() {
    let t0 = Instant::now();
    let mut app = app_with_text("a", Mode::Visual);
    press(&mut app, KeyCode::Char('?'), t0);
    press(&mut app, KeyCode::Char('H'), t0);
    assert!(app.tracker().is_active("/"));
    assert!(app.tracker().is_active("H"));
    assert_eq!(app.strokes().text(), "?H");
}

#[test]
fn highlights_decay_across_ticks() {
    let t0 = Instant::now();
    let mut app = app_with_text("a", Mode::Visual);
    press(&mut app, KeyCode::Char('f'), t0);

    for tick in 1..=2 {
        app.on_tick(t0 + ms(tick * 100));
        assert!(app.tracker().is_active("F"), "tick {tick}");
    }
    app.on_tick(t0 + ms(300));
    assert!(!app.tracker().is_active("F"));
}

#[test]
fn steady_repeat_never_flickers() {
    let t0 = Instant::now();
    let mut app = app_with_text("a", Mode::Visual);
    // Key repeat every 50ms, ticks every 100ms.
    for step in 0..20u64 {
        let now = t0 + ms(step * 50);
        press(&mut app, KeyCode::Char('j'), now);
        if step % 2 == 1 {
            app.on_tick(now);
            assert!(app.tracker().is_active("J"));
        }
    }
}

#[test]
fn mode_switch_to_practice_always_fresh() {
    let t0 = Instant::now();
    let mut app = app_with_text("ab", Mode::Practice);
    type_str(&mut app, "ab", t0, ms(100));
    assert!(app.challenge().unwrap().is_complete());

    press(&mut app, KeyCode::F(1), t0 + ms(300));
    assert_eq!(app.mode(), Mode::Visual);
    assert!(app.challenge().is_none());

    press(&mut app, KeyCode::F(2), t0 + ms(400));
    let challenge = app.challenge().unwrap();
    assert_eq!(challenge.cursor(), 0);
    assert!(!challenge.is_complete());
}

#[test]
fn visual_mode_typing_leaves_no_challenge() {
    let t0 = Instant::now();
    let mut app = app_with_text("ab", Mode::Visual);
    type_str(&mut app, "ab", t0, ms(10));
    press(&mut app, KeyCode::F(3), t0 + ms(50));
    assert!(app.challenge().is_none());
    assert_eq!(app.strokes().text(), "ab");
}

#[test]
fn escape_requests_quit() {
    let layout = keyglow::keyboard::layout::KeyboardLayout::qwerty();
    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(input::translate(esc, &layout), Some(Command::Quit));

    let mut app = app_with_text("ab", Mode::Practice);
    press(&mut app, KeyCode::Esc, Instant::now());
    assert!(app.should_quit);
    assert_eq!(app.challenge().unwrap().mistakes(), 0);
}

#[test]
fn full_frame_renders_each_mode() {
    let theme = Theme::default();
    let t0 = Instant::now();
    let mut app = app_with_text("The quick brown fox.", Mode::Practice);
    type_str(&mut app, "The", t0, ms(100));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, &app, &theme, t0 + ms(1_000)))
        .unwrap();
    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Practice mode | medium"));
    assert!(screen.contains("The quick brown fox."));
    assert!(screen.contains("Progress: 3/20 chars"));
    assert!(screen.contains("[F3] New text"));

    app.switch_mode(Mode::Visual);
    terminal
        .draw(|frame| ui::render(frame, &app, &theme, t0 + ms(1_000)))
        .unwrap();
    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Visual mode"));
    assert!(screen.contains("Typed: The"));
    assert!(screen.contains("SPACE"));
}

fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
