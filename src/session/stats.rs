use std::fmt;
use std::time::Duration;

/// Point-in-time numbers for a challenge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChallengeStats {
    pub total_chars: usize,
    pub typed_chars: usize,
    pub mistakes: usize,
    pub accuracy: f64,
    pub wpm: f64,
    pub elapsed: Duration,
    pub completed: bool,
}

impl ChallengeStats {
    pub fn new(
        total_chars: usize,
        typed_chars: usize,
        mistakes: usize,
        elapsed: Duration,
        completed: bool,
    ) -> Self {
        Self {
            total_chars,
            typed_chars,
            mistakes,
            accuracy: accuracy(typed_chars, mistakes),
            wpm: words_per_minute(typed_chars, elapsed),
            elapsed,
            completed,
        }
    }
}

/// Percentage of typed characters not offset by a mistake. Not clamped: more
/// mistakes than typed characters gives a negative value.
pub fn accuracy(typed_chars: usize, mistakes: usize) -> f64 {
    if typed_chars == 0 {
        return 100.0;
    }
    100.0 * (typed_chars as f64 - mistakes as f64) / typed_chars as f64
}

/// Standard five-characters-per-word WPM.
pub fn words_per_minute(typed_chars: usize, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0.0;
    }
    (typed_chars as f64 / 5.0) / minutes
}

impl fmt::Display for ChallengeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(
                f,
                "Completed! WPM: {:.1}, Accuracy: {:.1}%",
                self.wpm, self.accuracy
            )
        } else {
            write!(
                f,
                "Progress: {}/{} chars, WPM: {:.1}, Accuracy: {:.1}%",
                self.typed_chars, self.total_chars, self.wpm, self.accuracy
            )
        }
    }
}
