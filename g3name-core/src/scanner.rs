//! Splits an encoded buffer into single-byte and two-byte units.
//!
//! The decoder and the decimal point fixup both walk buffers through
//! [`Units`], so they always agree on where a two-byte character starts.

use crate::tables::{CharTable, Locale};

/// True if `byte` opens a two-byte sequence under `locale`.
///
/// Only the international set has two-byte sequences. `0x06` and `0x1B`
/// sit inside the lead range but stay single-byte (`É` and `é`).
pub fn is_lead_byte(byte: u8, locale: Locale) -> bool {
    match locale {
        Locale::Japanese => false,
        Locale::International => matches!(byte, 0x01..=0x1E) && byte != 0x06 && byte != 0x1B,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Unit {
    Single(u8),
    /// `lead << 8 | trail`.
    Double(u16),
    /// Lead byte in the last position of the buffer.
    Dangling(u8),
}

impl Unit {
    pub fn width(self) -> usize {
        match self {
            Unit::Double(_) => 2,
            Unit::Single(_) | Unit::Dangling(_) => 1,
        }
    }

    /// Character this unit decodes to. `None` means decoding stops here.
    pub fn resolve(self, locale: Locale) -> Option<char> {
        match self {
            Unit::Single(b) => CharTable::for_locale(locale).lookup(b as u16),
            Unit::Double(key) => CharTable::Extended.lookup(key),
            Unit::Dangling(_) => None,
        }
    }
}

/// Iterator of `(offset, unit)` pairs over a buffer.
#[derive(Clone, Debug)]
pub struct Units<'a> {
    data: &'a [u8],
    pos: usize,
    locale: Locale,
}

impl<'a> Units<'a> {
    pub fn new(data: &'a [u8], locale: Locale) -> Self {
        Self {
            data,
            pos: 0,
            locale,
        }
    }
}

impl Iterator for Units<'_> {
    type Item = (usize, Unit);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        let byte = *self.data.get(offset)?;

        let unit = if is_lead_byte(byte, self.locale) {
            match self.data.get(offset + 1) {
                Some(&trail) => Unit::Double(u16::from_be_bytes([byte, trail])),
                None => Unit::Dangling(byte),
            }
        } else {
            Unit::Single(byte)
        };

        self.pos += unit.width();
        Some((offset, unit))
    }
}

/// Shorthand for [`Units::new`].
pub fn units(data: &[u8], locale: Locale) -> Units<'_> {
    Units::new(data, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_range() {
        let leads: Vec<u8> = (0..=255u8)
            .filter(|&b| is_lead_byte(b, Locale::International))
            .collect();
        assert_eq!(leads.len(), 28);
        assert!(!leads.contains(&0x00));
        assert!(!leads.contains(&0x06));
        assert!(!leads.contains(&0x1B));
        assert!(!leads.contains(&0x1F));
        assert!((0..=255u8).all(|b| !is_lead_byte(b, Locale::Japanese)));
    }

    #[test]
    fn pairs_lead_with_any_trail() {
        let data = [0xBB, 0x01, 0xF2, 0x0A, 0xFF, 0xFF];
        let got: Vec<_> = units(&data, Locale::International).collect();
        assert_eq!(
            got,
            vec![
                (0, Unit::Single(0xBB)),
                (1, Unit::Double(0x01F2)),
                (3, Unit::Double(0x0AFF)),
                (5, Unit::Single(0xFF)),
            ]
        );
    }

    #[test]
    fn japanese_is_all_single() {
        let data = [0x01, 0x02, 0xFF];
        assert!(units(&data, Locale::Japanese).all(|(_, u)| matches!(u, Unit::Single(_))));
    }

    #[test]
    fn trailing_lead_is_dangling() {
        let data = [0xBB, 0x0A];
        let got: Vec<_> = units(&data, Locale::International).collect();
        assert_eq!(got.last(), Some(&(1, Unit::Dangling(0x0A))));
        assert_eq!(Unit::Dangling(0x0A).resolve(Locale::International), None);
    }
}
