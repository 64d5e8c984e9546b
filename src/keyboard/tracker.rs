use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::keyboard::key_id::KeyId;

/// How long a key stays highlighted after its last press.
pub const DECAY_WINDOW: Duration = Duration::from_millis(300);

/// Last-press time per key. Entries are only ever removed by [`sweep`], so a
/// key stays active between sweeps even if its window has already run out.
///
/// [`sweep`]: KeyPressTracker::sweep
#[derive(Clone, Debug, Default)]
pub struct KeyPressTracker {
    pressed: HashMap<KeyId, Instant>,
}

impl KeyPressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: KeyId, now: Instant) {
        self.pressed.insert(key, now);
    }

    /// Drops every key whose last press is `window` or more before `now`.
    pub fn sweep(&mut self, now: Instant, window: Duration) {
        self.pressed
            .retain(|_, pressed_at| now.saturating_duration_since(*pressed_at) < window);
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.pressed.contains_key(key)
    }

    pub fn last_pressed(&self, key: &str) -> Option<Instant> {
        self.pressed.get(key).copied()
    }

    pub fn active_keys(&self) -> impl Iterator<Item = &KeyId> {
        self.pressed.keys()
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}
