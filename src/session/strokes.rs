use std::collections::VecDeque;

pub const MAX_STROKES: usize = 100;

/// The last few characters typed, oldest first. Shown in visual mode.
#[derive(Clone, Debug)]
pub struct StrokeBuffer {
    strokes: VecDeque<char>,
    capacity: usize,
}

impl StrokeBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            strokes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, ch: char) {
        if self.capacity == 0 {
            return;
        }
        if self.strokes.len() == self.capacity {
            self.strokes.pop_front();
        }
        self.strokes.push_back(ch);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.strokes.pop_back()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn text(&self) -> String {
        self.strokes.iter().collect()
    }
}

impl Default for StrokeBuffer {
    fn default() -> Self {
        Self::new(MAX_STROKES)
    }
}
