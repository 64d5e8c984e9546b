use std::time::Instant;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::generator::corpus::Difficulty;
use crate::generator::selector::ChallengeSelector;
use crate::input::{Command, KeyInput};
use crate::keyboard::layout::KeyboardLayout;
use crate::keyboard::tracker::{DECAY_WINDOW, KeyPressTracker};
use crate::session::challenge::{Challenge, KeyOutcome};
use crate::session::strokes::StrokeBuffer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Visual,
    #[default]
    Practice,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Visual => "visual",
            Mode::Practice => "practice",
        }
    }
}

/// Practice is a layer on top of the always-on key highlighting: leaving it
/// drops the challenge entirely.
#[derive(Clone, Debug)]
enum Session {
    Visual,
    Practice(Challenge),
}

/// Owns all interaction state and applies one event at a time.
pub struct App {
    pub layout: KeyboardLayout,
    pub difficulty: Difficulty,
    pub should_quit: bool,
    tracker: KeyPressTracker,
    strokes: StrokeBuffer,
    session: Session,
    selector: ChallengeSelector,
}

impl App {
    pub fn new(selector: ChallengeSelector, difficulty: Difficulty, mode: Mode) -> Self {
        let mut app = Self {
            layout: KeyboardLayout::qwerty(),
            difficulty,
            should_quit: false,
            tracker: KeyPressTracker::new(),
            strokes: StrokeBuffer::default(),
            session: Session::Visual,
            selector,
        };
        app.switch_mode(mode);
        app
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::NewChallenge => self.new_challenge(),
            Command::Key(input) => self.handle_key(input, now),
        }
    }

    pub fn handle_key(&mut self, input: KeyInput, now: Instant) {
        self.tracker.record(input.id.clone(), now);

        if input.is_structural() {
            self.strokes.pop();
            return;
        }
        let Some(ch) = input.ch else {
            return;
        };
        self.strokes.push(ch);

        if let Session::Practice(challenge) = &mut self.session {
            let outcome = challenge.process_key(ch, now);
            if outcome == KeyOutcome::Rejected && !challenge.is_complete() {
                debug!(
                    key = %input.id,
                    expected = ?challenge.next_char(),
                    mistakes = challenge.mistakes(),
                    "rejected key"
                );
            }
            if outcome == KeyOutcome::Accepted && challenge.is_complete() {
                let stats = challenge.stats(now);
                info!(
                    wpm = stats.wpm,
                    accuracy = stats.accuracy,
                    mistakes = stats.mistakes,
                    "challenge completed"
                );
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.tracker.sweep(now, DECAY_WINDOW);
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode() == mode {
            return;
        }
        self.session = match mode {
            Mode::Visual => Session::Visual,
            Mode::Practice => match self.fresh_challenge() {
                Some(challenge) => Session::Practice(challenge),
                None => return,
            },
        };
        info!(mode = mode.as_str(), "switched mode");
    }

    /// Replaces the current challenge, finished or not. Ignored outside
    /// practice mode.
    pub fn new_challenge(&mut self) {
        if self.mode() != Mode::Practice {
            return;
        }
        if let Some(challenge) = self.fresh_challenge() {
            self.session = Session::Practice(challenge);
        }
    }

    /// `None` only when the corpus hands back unusable text; the caller keeps
    /// its current session.
    fn fresh_challenge(&mut self) -> Option<Challenge> {
        let text = self.selector.select_text(self.difficulty);
        match Challenge::new(&text) {
            Ok(challenge) => {
                info!(difficulty = %self.difficulty, chars = challenge.target().len(), "new challenge");
                Some(challenge)
            }
            Err(err) => {
                warn!(difficulty = %self.difficulty, %err, "could not start challenge");
                None
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self.session {
            Session::Visual => Mode::Visual,
            Session::Practice(_) => Mode::Practice,
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        match &self.session {
            Session::Practice(challenge) => Some(challenge),
            Session::Visual => None,
        }
    }

    pub fn tracker(&self) -> &KeyPressTracker {
        &self.tracker
    }

    pub fn strokes(&self) -> &StrokeBuffer {
        &self.strokes
    }
}
