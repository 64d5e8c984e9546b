use std::borrow::Borrow;
use std::fmt;

/// Normalized label for one physical key: `"A"`..`"Z"`, punctuation glyphs
/// (`";"`, `"/"`, ...) and the named keys below.
///
/// Letters are always upper case so `a` and `A` light up the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(String);

pub const SPACE: &str = "SPACE";
pub const ENTER: &str = "ENTER";
pub const BACKSPACE: &str = "BACKSPACE";
pub const TAB: &str = "TAB";

impl KeyId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().to_uppercase())
    }

    pub fn space() -> Self {
        Self(SPACE.to_string())
    }

    pub fn enter() -> Self {
        Self(ENTER.to_string())
    }

    pub fn backspace() -> Self {
        Self(BACKSPACE.to_string())
    }

    pub fn tab() -> Self {
        Self(TAB.to_string())
    }

    /// Key id for a single character, without consulting a layout.
    /// Whitespace characters map to their named keys.
    pub fn from_char(ch: char) -> Self {
        match ch {
            ' ' => Self::space(),
            '\n' => Self::enter(),
            '\t' => Self::tab(),
            _ => Self(ch.to_uppercase().collect()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_named(&self) -> bool {
        self.0.chars().count() > 1
    }
}

impl Borrow<str> for KeyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short label drawn on the keyboard diagram for named keys.
/// Returns `None` for single-glyph keys, which are drawn as themselves.
pub fn key_short_label(id: &str) -> Option<&'static str> {
    match id {
        SPACE => Some("SPACE"),
        ENTER => Some("Enter"),
        BACKSPACE => Some("Bksp"),
        TAB => Some("Tab"),
        _ => None,
    }
}
