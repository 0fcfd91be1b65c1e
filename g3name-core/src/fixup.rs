//! Decimal point to period substitution applied to freshly written
//! default names.

use tracing::trace;

use crate::scanner::{units, Unit};
use crate::tables::Locale;

/// `(decimal point, period)` byte pair for `locale`.
///
/// The international set renders a decimal point with the raised dot `・`
/// (0xAF); names want the period `.` (0xAD). In the Japanese set `・` is
/// the katakana name separator, so there is nothing to remap.
pub fn decimal_point_pair(locale: Locale) -> Option<(u8, u8)> {
    match locale {
        Locale::International => Some((0xAF, 0xAD)),
        Locale::Japanese => None,
    }
}

/// Rewrite the decimal point byte to the period byte in `buffer`. Korean
/// saves are left alone.
///
/// Walks the same units as the decoder: the trail byte of a two-byte
/// character is never a candidate, and the walk ends where decoding would,
/// so trash bytes after the terminator stay untouched. Returns the number of
/// bytes rewritten.
pub fn fix_decimal_point(buffer: &mut [u8], locale: Locale, korean: bool) -> usize {
    if korean {
        return 0;
    }
    let Some((decimal_point, period)) = decimal_point_pair(locale) else {
        return 0;
    };

    let hits: Vec<usize> = units(buffer, locale)
        .take_while(|(_, unit)| unit.resolve(locale).is_some())
        .filter_map(|(offset, unit)| (unit == Unit::Single(decimal_point)).then_some(offset))
        .collect();

    for &offset in &hits {
        buffer[offset] = period;
    }
    if !hits.is_empty() {
        trace!(count = hits.len(), "decimal point remapped");
    }
    hits.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DECIMAL_POINT: u8 = 0xAF;
    const PERIOD: u8 = 0xAD;

    #[test]
    fn pair_is_punctuation_in_its_table() {
        use crate::tables::CharTable;
        let (from, to) = decimal_point_pair(Locale::International).unwrap();
        assert_eq!(CharTable::International.lookup(from as u16), Some('・'));
        assert_eq!(CharTable::International.lookup(to as u16), Some('.'));
        assert_eq!(decimal_point_pair(Locale::Japanese), None);
    }

    #[test]
    fn rewrites_isolated_byte() {
        let mut buf = [0xC7, 0xCC, 0xAF, 0xC7, 0xFF, 0x50];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, false), 1);
        assert_eq!(buf, [0xC7, 0xCC, 0xAD, 0xC7, 0xFF, 0x50]);
    }

    #[test]
    fn letters_are_never_touched() {
        // 'Ö' (0xF2) and 't' (0xE8) are ordinary letters in this set.
        let mut buf = [0xF2, 0xE8, 0xFF];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, false), 0);
        assert_eq!(buf, [0xF2, 0xE8, 0xFF]);
    }

    #[test]
    fn trail_byte_of_two_byte_character_is_kept() {
        // 0x01 0xAF is one character (key 0x01AF).
        let mut buf = [0x01, 0xAF, 0xFF, 0x50, 0x50];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, false), 0);
        assert_eq!(buf, [0x01, 0xAF, 0xFF, 0x50, 0x50]);
    }

    #[test]
    fn mixed_sequence() {
        let mut buf = [0x01, 0xAF, 0xAF, 0xFF];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, false), 1);
        assert_eq!(buf, [0x01, 0xAF, 0xAD, 0xFF]);
    }

    #[test]
    fn japanese_keeps_separator() {
        let mut buf = [0x01, 0xAF, 0x02, 0xFF];
        assert_eq!(fix_decimal_point(&mut buf, Locale::Japanese, false), 0);
        assert_eq!(buf, [0x01, 0xAF, 0x02, 0xFF]);
    }

    #[test]
    fn korean_is_skipped() {
        let mut buf = [0xAF, 0xFF];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, true), 0);
        assert_eq!(buf, [0xAF, 0xFF]);
    }

    #[test]
    fn stops_at_terminator() {
        let mut buf = [0xBB, 0xFF, 0xAF, 0xAF];
        assert_eq!(fix_decimal_point(&mut buf, Locale::International, false), 0);
        assert_eq!(buf, [0xBB, 0xFF, 0xAF, 0xAF]);
    }

    proptest! {
        #[test]
        fn only_decimal_points_change(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            let mut fixed = data.clone();
            fix_decimal_point(&mut fixed, Locale::International, false);
            for (before, after) in data.iter().zip(&fixed) {
                prop_assert!(before == after || (*before == DECIMAL_POINT && *after == PERIOD));
            }
        }

        #[test]
        fn unit_boundaries_survive(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            let mut fixed = data.clone();
            fix_decimal_point(&mut fixed, Locale::International, false);
            let before: Vec<usize> = units(&data, Locale::International).map(|(o, _)| o).collect();
            let after: Vec<usize> = units(&fixed, Locale::International).map(|(o, _)| o).collect();
            prop_assert_eq!(before, after);
        }
    }
}
