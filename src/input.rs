use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Mode;
use crate::keyboard::key_id::{self, KeyId};
use crate::keyboard::layout::KeyboardLayout;

/// A key press after normalization: which physical key it was, and the
/// character it types, if it types one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub id: KeyId,
    pub ch: Option<char>,
}

impl KeyInput {
    pub fn new(id: KeyId, ch: Option<char>) -> Self {
        Self { id, ch }
    }

    /// Shorthand for a printable key as the given layout would report it.
    pub fn typed(ch: char, layout: &KeyboardLayout) -> Self {
        Self::new(layout.key_for_char(ch), Some(ch))
    }

    pub fn backspace() -> Self {
        Self::new(KeyId::backspace(), None)
    }

    /// Keys that edit rather than type. They are never fed to a challenge.
    pub fn is_structural(&self) -> bool {
        self.id.as_str() == key_id::BACKSPACE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    SwitchMode(Mode),
    NewChallenge,
    Key(KeyInput),
}

/// Maps a terminal key event onto a controller command. Release events and
/// keys with nothing to show yield `None`.
pub fn translate(key: KeyEvent, layout: &KeyboardLayout) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::F(1) => Command::SwitchMode(Mode::Visual),
        KeyCode::F(2) => Command::SwitchMode(Mode::Practice),
        KeyCode::F(3) => Command::NewChallenge,
        KeyCode::Char(ch) if ctrl => Command::Key(KeyInput::new(layout.key_for_char(ch), None)),
        KeyCode::Char(ch) => Command::Key(KeyInput::typed(ch, layout)),
        KeyCode::Enter => Command::Key(KeyInput::new(KeyId::enter(), Some('\n'))),
        KeyCode::Tab => Command::Key(KeyInput::new(KeyId::tab(), Some('\t'))),
        KeyCode::BackTab => Command::Key(KeyInput::new(KeyId::tab(), None)),
        KeyCode::Backspace => Command::Key(KeyInput::backspace()),
        other => Command::Key(KeyInput::new(named_key(other)?, None)),
    };
    Some(command)
}

fn named_key(code: KeyCode) -> Option<KeyId> {
    let name = match code {
        KeyCode::Left => "LEFT".to_string(),
        KeyCode::Right => "RIGHT".to_string(),
        KeyCode::Up => "UP".to_string(),
        KeyCode::Down => "DOWN".to_string(),
        KeyCode::Home => "HOME".to_string(),
        KeyCode::End => "END".to_string(),
        KeyCode::PageUp => "PAGEUP".to_string(),
        KeyCode::PageDown => "PAGEDOWN".to_string(),
        KeyCode::Delete => "DELETE".to_string(),
        KeyCode::Insert => "INSERT".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };
    Some(KeyId::new(name))
}
