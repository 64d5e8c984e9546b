use std::time::{Duration, Instant};

use thiserror::Error;

use crate::session::stats::ChallengeStats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("challenge text is empty")]
    EmptyText,
}

/// Lifecycle of a challenge. Timestamps live inside the variants so that a
/// started challenge always has a start time and a completed one always has
/// both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeState {
    NotStarted,
    InProgress {
        started_at: Instant,
    },
    Completed {
        started_at: Instant,
        finished_at: Instant,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Accepted,
    Rejected,
}

/// How a single target character should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Typed,
    Next,
    Untyped,
}

/// One typing exercise over a fixed target text.
///
/// The cursor only moves forward, one character per accepted key. A wrong
/// key bumps the mistake counter and leaves the cursor where it is, so the
/// typist must hit the right key before moving on.
#[derive(Clone, Debug)]
pub struct Challenge {
    target: Vec<char>,
    cursor: usize,
    mistakes: usize,
    state: ChallengeState,
}

impl Challenge {
    /// A blank text has nothing to type and could never reach completion.
    pub fn new(text: &str) -> Result<Self, ChallengeError> {
        if text.trim().is_empty() {
            return Err(ChallengeError::EmptyText);
        }
        Ok(Self {
            target: text.chars().collect(),
            cursor: 0,
            mistakes: 0,
            state: ChallengeState::NotStarted,
        })
    }

    pub fn process_key(&mut self, ch: char, now: Instant) -> KeyOutcome {
        let started_at = match self.state {
            ChallengeState::Completed { .. } => return KeyOutcome::Rejected,
            ChallengeState::NotStarted => now,
            ChallengeState::InProgress { started_at } => started_at,
        };
        self.state = ChallengeState::InProgress { started_at };

        if self.target.get(self.cursor) != Some(&ch) {
            self.mistakes += 1;
            return KeyOutcome::Rejected;
        }

        self.cursor += 1;
        if self.cursor == self.target.len() {
            self.state = ChallengeState::Completed {
                started_at,
                finished_at: now,
            };
        }
        KeyOutcome::Accepted
    }

    pub fn text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, ChallengeState::Completed { .. })
    }

    pub fn started_at(&self) -> Option<Instant> {
        match self.state {
            ChallengeState::NotStarted => None,
            ChallengeState::InProgress { started_at }
            | ChallengeState::Completed { started_at, .. } => Some(started_at),
        }
    }

    pub fn finished_at(&self) -> Option<Instant> {
        match self.state {
            ChallengeState::Completed { finished_at, .. } => Some(finished_at),
            _ => None,
        }
    }

    /// The character the typist has to enter next, if any.
    pub fn next_char(&self) -> Option<char> {
        if self.is_complete() {
            return None;
        }
        self.target.get(self.cursor).copied()
    }

    /// Time spent typing: frozen at completion, otherwise measured up to `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.state {
            ChallengeState::NotStarted => Duration::ZERO,
            ChallengeState::InProgress { started_at } => now.saturating_duration_since(started_at),
            ChallengeState::Completed {
                started_at,
                finished_at,
            } => finished_at.saturating_duration_since(started_at),
        }
    }

    pub fn stats(&self, now: Instant) -> ChallengeStats {
        ChallengeStats::new(
            self.target.len(),
            self.cursor,
            self.mistakes,
            self.elapsed(now),
            self.is_complete(),
        )
    }

    pub fn progress(&self) -> f64 {
        self.cursor as f64 / self.target.len() as f64
    }

    pub fn formatted_view(&self) -> impl Iterator<Item = (char, RenderState)> + '_ {
        self.target.iter().enumerate().map(|(idx, &ch)| {
            let state = if idx < self.cursor {
                RenderState::Typed
            } else if idx == self.cursor {
                RenderState::Next
            } else {
                RenderState::Untyped
            };
            (ch, state)
        })
    }
}
