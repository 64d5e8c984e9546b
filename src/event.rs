use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

/// Ticks drive highlight decay. The decay window spans several ticks so a
/// held-down key does not flicker between repeats.
pub const TICK_RATE: Duration = Duration::from_millis(100);

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Single-threaded event source: waits on terminal input no longer than the
/// time left until the next tick is due.
pub struct EventHandler {
    tick_rate: Duration,
    next_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            next_tick: Instant::now() + tick_rate,
        }
    }

    pub fn next(&mut self) -> anyhow::Result<AppEvent> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick = now + self.tick_rate;
                return Ok(AppEvent::Tick);
            }

            if event::poll(self.next_tick - now)? {
                match event::read()? {
                    Event::Key(key) => return Ok(AppEvent::Key(key)),
                    Event::Resize(w, h) => return Ok(AppEvent::Resize(w, h)),
                    _ => {}
                }
            }
        }
    }
}
