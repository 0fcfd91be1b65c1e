//! Character table registry.
//!
//! Three fixed tables back the codec: the Japanese and international
//! single-byte sets, and a two-byte Simplified Chinese extension that only
//! the international locale consults. The tables are plain statics; the
//! reverse (char to code) maps are built on first use and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

mod data;

use crate::scanner::is_lead_byte;

/// Raw value that ends a string on decode and follows the last character on
/// encode when space remains.
pub const TERMINATOR: u8 = 0xFF;

/// Non-zero pad value used by the fixed-fill convention.
pub const FIXED_FILL_BYTE: u8 = 0x50;

/// Byte written for an apostrophe regardless of locale.
pub(crate) const APOSTROPHE_BYTE: u8 = 0xB4;

/// Number of keys addressable in the extended table (`0x0000..0x1F00`).
pub const EXTENDED_LEN: usize = 0x1F00;

/// Regional character set a save was written with.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese single-byte set. No two-byte sequences.
    Japanese,
    /// International single-byte set with the two-byte extension.
    #[default]
    International,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CharTable {
    Japanese,
    International,
    Extended,
}

impl CharTable {
    /// Single-byte table governing `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Japanese => CharTable::Japanese,
            Locale::International => CharTable::International,
        }
    }

    fn entries(self) -> &'static [Option<char>] {
        match self {
            CharTable::Japanese => &data::JAPANESE,
            CharTable::International => &data::INTERNATIONAL,
            CharTable::Extended => &data::EXTENDED,
        }
    }

    /// Character stored at `key`, or `None` for terminator and unassigned
    /// slots.
    ///
    /// Single-byte tables take a byte value. The extended table takes
    /// `lead << 8 | trail`; keys past its end are a caller bug and panic.
    pub fn lookup(self, key: u16) -> Option<char> {
        let entries = self.entries();
        debug_assert!(
            (key as usize) < entries.len(),
            "key {key:#06X} outside {self:?} table"
        );
        entries[key as usize]
    }

    /// First key holding `ch`, restricted to keys the decoder can reach.
    pub fn reverse(self, ch: char) -> Option<u16> {
        self.reverse_map().get(&ch).copied()
    }

    fn reverse_map(self) -> &'static HashMap<char, u16> {
        static JAPANESE: OnceLock<HashMap<char, u16>> = OnceLock::new();
        static INTERNATIONAL: OnceLock<HashMap<char, u16>> = OnceLock::new();
        static EXTENDED: OnceLock<HashMap<char, u16>> = OnceLock::new();

        let cell = match self {
            CharTable::Japanese => &JAPANESE,
            CharTable::International => &INTERNATIONAL,
            CharTable::Extended => &EXTENDED,
        };
        cell.get_or_init(|| build_reverse(self))
    }
}

fn build_reverse(table: CharTable) -> HashMap<char, u16> {
    let mut map = HashMap::new();
    for (key, entry) in table.entries().iter().enumerate() {
        let Some(ch) = *entry else { continue };
        let key = key as u16;
        if table == CharTable::Extended && !is_reachable_extended(key) {
            continue;
        }
        map.entry(ch).or_insert(key);
    }
    map
}

// A single byte is reachable only if the decoder won't read it as a lead
// byte; a two-byte key only if its high byte is one.
fn is_reachable_extended(key: u16) -> bool {
    let [hi, lo] = key.to_be_bytes();
    if hi == 0 {
        !is_lead_byte(lo, Locale::International)
    } else {
        is_lead_byte(hi, Locale::International)
    }
}

/// Encoded form of one character.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Code {
    Single(u8),
    Double(u8, u8),
}

impl Code {
    pub fn width(self) -> usize {
        match self {
            Code::Single(_) => 1,
            Code::Double(..) => 2,
        }
    }
}

/// Encoded form of `ch` under `locale`, or `None` if the set has no slot
/// for it.
pub fn encode_char(ch: char, locale: Locale) -> Option<Code> {
    if ch == '\'' || ch == '\u{2019}' {
        return Some(Code::Single(APOSTROPHE_BYTE));
    }

    match locale {
        Locale::Japanese => CharTable::Japanese
            .reverse(ch)
            .map(|key| Code::Single(key as u8)),
        Locale::International => {
            let key = CharTable::Extended.reverse(ch)?;
            let [hi, lo] = key.to_be_bytes();
            Some(if hi == 0 {
                Code::Single(lo)
            } else {
                Code::Double(hi, lo)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_has_a_slot() {
        for b in 0..=255u8 {
            let _ = CharTable::Japanese.lookup(b as u16);
            let _ = CharTable::International.lookup(b as u16);
        }
        assert_eq!(CharTable::Extended.entries().len(), EXTENDED_LEN);
    }

    #[test]
    fn terminator_has_no_character() {
        assert_eq!(CharTable::Japanese.lookup(TERMINATOR as u16), None);
        assert_eq!(CharTable::International.lookup(TERMINATOR as u16), None);
    }

    #[test]
    fn known_slots() {
        assert_eq!(CharTable::International.lookup(0xBB), Some('A'));
        assert_eq!(CharTable::International.lookup(0xD5), Some('a'));
        assert_eq!(CharTable::Japanese.lookup(0x01), Some('あ'));
        assert_eq!(CharTable::Extended.lookup(0x0100), Some('啊'));
        assert_eq!(CharTable::Extended.lookup(0x0A5F), Some('皮'));
    }

    #[test]
    fn reverse_prefers_first_slot() {
        // '0' sits at both 0xA1 and 0xEF.
        assert_eq!(CharTable::International.reverse('0'), Some(0xA1));
        assert_eq!(CharTable::International.reverse('í'), Some(0x1F));
    }

    #[test]
    fn encodes_single_and_double() {
        assert_eq!(
            encode_char('A', Locale::International),
            Some(Code::Single(0xBB))
        );
        assert_eq!(
            encode_char('皮', Locale::International),
            Some(Code::Double(0x0A, 0x5F))
        );
        assert_eq!(encode_char('皮', Locale::Japanese), None);
        assert_eq!(encode_char('あ', Locale::Japanese), Some(Code::Single(0x01)));
    }

    #[test]
    fn apostrophe_bypasses_tables() {
        assert_eq!(encode_char('\'', Locale::Japanese), Some(Code::Single(0xB4)));
        assert_eq!(
            encode_char('\u{2019}', Locale::International),
            Some(Code::Single(0xB4))
        );
    }

    #[test]
    fn lead_byte_slots_are_not_single_byte_codes() {
        // 'À' lives at 0x01 in the single-byte set, which the international
        // decoder reads as a lead byte.
        assert_eq!(encode_char('À', Locale::International), None);
        assert_eq!(
            encode_char('É', Locale::International),
            Some(Code::Single(0x06))
        );
    }

    #[test]
    fn reverse_maps_only_reachable_keys() {
        for (&ch, &key) in CharTable::Extended.reverse_map() {
            assert!(is_reachable_extended(key), "{ch} at {key:#06X}");
        }
    }
}
