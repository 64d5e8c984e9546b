use crate::keyboard::key_id::{self, KeyId};

/// One physical key on the diagram.
#[derive(Clone, Debug)]
pub struct KeyDef {
    pub id: KeyId,
    pub base: char,
    pub shifted: Option<char>,
    /// Display width in cells, including the one-cell padding on each side.
    pub width: u16,
}

impl KeyDef {
    fn glyph(base: char, shifted: char) -> Self {
        Self {
            id: KeyId::from_char(base),
            base,
            shifted: Some(shifted),
            width: 3,
        }
    }

    fn named(id: KeyId, base: char, width: u16) -> Self {
        Self {
            id,
            base,
            shifted: None,
            width,
        }
    }

    pub fn label(&self) -> String {
        match key_id::key_short_label(self.id.as_str()) {
            Some(label) => label.to_string(),
            None => self.id.to_string(),
        }
    }

    pub fn produces(&self, ch: char) -> bool {
        self.base == ch || self.shifted == Some(ch)
    }
}

#[derive(Clone, Debug)]
pub struct KeyRow {
    /// Leading indent in cells.
    pub offset: u16,
    pub keys: Vec<KeyDef>,
}

/// The fixed QWERTY layout. Built once at startup and only ever read.
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    pub rows: Vec<KeyRow>,
}

pub const SPACE_BAR_WIDTH: u16 = 30;

fn letter(ch: char) -> KeyDef {
    KeyDef::glyph(ch, ch.to_ascii_uppercase())
}

impl KeyboardLayout {
    pub fn qwerty() -> Self {
        let mut top: Vec<KeyDef> = "qwertyuiop".chars().map(letter).collect();
        top.push(KeyDef::glyph('[', '{'));
        top.push(KeyDef::glyph(']', '}'));
        top.push(KeyDef::named(KeyId::backspace(), '\x08', 6));

        let mut home: Vec<KeyDef> = "asdfghjkl".chars().map(letter).collect();
        home.push(KeyDef::glyph(';', ':'));
        home.push(KeyDef::glyph('\'', '"'));
        home.push(KeyDef::named(KeyId::enter(), '\n', 7));

        let mut bottom: Vec<KeyDef> = "zxcvbnm".chars().map(letter).collect();
        bottom.push(KeyDef::glyph(',', '<'));
        bottom.push(KeyDef::glyph('.', '>'));
        bottom.push(KeyDef::glyph('/', '?'));

        let space = vec![KeyDef::named(KeyId::space(), ' ', SPACE_BAR_WIDTH)];

        Self {
            rows: vec![
                KeyRow {
                    offset: 0,
                    keys: top,
                },
                KeyRow {
                    offset: 2,
                    keys: home,
                },
                KeyRow {
                    offset: 4,
                    keys: bottom,
                },
                KeyRow {
                    offset: 6,
                    keys: space,
                },
            ],
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyDef> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }

    pub fn find_key(&self, ch: char) -> Option<&KeyDef> {
        self.keys().find(|key| key.produces(ch))
    }

    /// Id of the physical key that types `ch`. Characters the layout has no
    /// key for fall back to [`KeyId::from_char`].
    pub fn key_for_char(&self, ch: char) -> KeyId {
        self.find_key(ch)
            .map(|key| key.id.clone())
            .unwrap_or_else(|| KeyId::from_char(ch))
    }

    /// Cell width of the widest row, offsets included.
    pub fn width(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.offset + row.keys.iter().map(|k| k.width).sum::<u16>())
            .max()
            .unwrap_or(0)
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_rows() {
        let layout = KeyboardLayout::qwerty();
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(layout.rows[0].keys[0].id.as_str(), "Q");
        assert_eq!(layout.rows[1].offset, 2);
        assert_eq!(layout.rows[2].offset, 4);
        assert_eq!(layout.rows[3].keys[0].id.as_str(), key_id::SPACE);
    }

    #[test]
    fn test_key_ids_are_unique() {
        let layout = KeyboardLayout::qwerty();
        let mut ids: Vec<&str> = layout.keys().map(|k| k.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_shifted_glyph_maps_to_base_key() {
        let layout = KeyboardLayout::qwerty();
        assert_eq!(layout.key_for_char('?').as_str(), "/");
        assert_eq!(layout.key_for_char(':').as_str(), ";");
        assert_eq!(layout.key_for_char('"').as_str(), "'");
        assert_eq!(layout.key_for_char('T').as_str(), "T");
        assert_eq!(layout.key_for_char('t').as_str(), "T");
    }

    #[test]
    fn test_whitespace_keys() {
        let layout = KeyboardLayout::qwerty();
        assert_eq!(layout.key_for_char(' '), KeyId::space());
        assert_eq!(layout.key_for_char('\n'), KeyId::enter());
    }

    #[test]
    fn test_unknown_char_falls_back() {
        let layout = KeyboardLayout::qwerty();
        assert_eq!(layout.key_for_char('7').as_str(), "7");
        assert!(layout.find_key('7').is_none());
    }

    #[test]
    fn test_labels() {
        let layout = KeyboardLayout::qwerty();
        let bksp = layout.keys().find(|k| k.id == KeyId::backspace()).unwrap();
        assert_eq!(bksp.label(), "Bksp");
        assert_eq!(layout.find_key('a').unwrap().label(), "A");
    }
}
