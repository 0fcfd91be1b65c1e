use tracing::warn;

use crate::scanner::{units, Unit};
use crate::tables::Locale;
use crate::{CodecError, Result};

/// Decode a fixed-width name buffer.
///
/// Stops at the first unit with no character: the terminator, an unassigned
/// slot, or a lead byte with nothing after it. A buffer with no stop is read
/// to the end.
pub fn decode(data: &[u8], locale: Locale) -> String {
    match decode_inner(data, locale) {
        Ok(text) => text,
        Err((offset, text)) => {
            warn!(offset, len = data.len(), "name buffer ends inside a two-byte sequence");
            text
        }
    }
}

/// Like [`decode`], but a lead byte in the last position is an error instead
/// of a stop. Use this on buffers that should have come out of the encoder.
pub fn decode_strict(data: &[u8], locale: Locale) -> Result<String> {
    decode_inner(data, locale).map_err(|(offset, _)| CodecError::DanglingLeadByte { offset })
}

/// Offset of the first trash byte: just past the unit that stops [`decode`].
/// Equals `data.len()` when nothing stops the read.
pub fn trash_offset(data: &[u8], locale: Locale) -> usize {
    units(data, locale)
        .find(|(_, unit)| unit.resolve(locale).is_none())
        .map_or(data.len(), |(offset, unit)| offset + unit.width())
}

fn decode_inner(data: &[u8], locale: Locale) -> std::result::Result<String, (usize, String)> {
    let mut out = String::with_capacity(data.len());
    for (offset, unit) in units(data, locale) {
        if let Unit::Dangling(_) = unit {
            return Err((offset, out));
        }
        match unit.resolve(locale) {
            Some(ch) => out.push(ch),
            None => break,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn terminator_only_is_empty() {
        assert_eq!(decode(&[0xFF], Locale::International), "");
        assert_eq!(decode(&[0xFF], Locale::Japanese), "");
    }

    #[test]
    fn one_char_then_terminator() {
        assert_eq!(decode(&[0xBB, 0xFF], Locale::International), "A");
        assert_eq!(decode(&[0x01, 0xFF], Locale::Japanese), "あ");
    }

    #[test]
    fn bytes_after_terminator_are_ignored() {
        let data = [0xBB, 0xBC, 0xFF, 0xBD, 0x50, 0x50];
        assert_eq!(decode(&data, Locale::International), "AB");
    }

    #[test]
    fn full_buffer_without_terminator() {
        let data = [0xBB, 0xBC, 0xBD];
        assert_eq!(decode(&data, Locale::International), "ABC");
    }

    #[test]
    fn two_byte_characters() {
        let data = [0x0A, 0x5F, 0x07, 0xB6, 0x0B, 0x12, 0xFF, 0x50];
        assert_eq!(decode(&data, Locale::International), "皮卡丘");
    }

    #[test]
    fn lead_byte_is_single_in_japanese() {
        let data = [0x0A, 0x5F, 0xFF];
        assert_eq!(decode(&data, Locale::Japanese), "こソ");
    }

    #[test]
    fn trail_byte_never_read_alone() {
        // 0x01 0xFF is one key; the 0xFF is not a terminator here. The key
        // has no character, so decoding stops after 'A'.
        let data = [0xBB, 0x01, 0xFF, 0xBC, 0xFF];
        assert_eq!(decode(&data, Locale::International), "A");

        // 0x01 0xBB is key 0x01BB, not 'A'.
        let data = [0x01, 0xBB, 0xFF];
        let text = decode(&data, Locale::International);
        assert_eq!(text.chars().count(), 1);
        assert_ne!(text, "A");
    }

    #[test]
    fn excluded_lead_values_are_single_byte() {
        let data = [0x06, 0x1B, 0x1F, 0xFF];
        assert_eq!(decode(&data, Locale::International), "Ééí");
    }

    #[test]
    fn dangling_lead_byte_stops() {
        let data = [0xBB, 0xBC, 0x0A];
        assert_eq!(decode(&data, Locale::International), "AB");
    }

    #[test]
    fn strict_rejects_dangling_lead_byte() {
        let data = [0xBB, 0xBC, 0x0A];
        assert!(matches!(
            decode_strict(&data, Locale::International),
            Err(CodecError::DanglingLeadByte { offset: 2 })
        ));
        assert_eq!(
            decode_strict(&[0xBB, 0xFF, 0x0A], Locale::International).unwrap(),
            "A"
        );
    }

    #[test]
    fn trash_starts_after_the_stopping_unit() {
        // 0x00 is a space, not a stop.
        assert_eq!(trash_offset(&[0xBB, 0x00, 0xBC, 0xFF, 0x50], Locale::International), 4);
        assert_eq!(trash_offset(&[0xBB, 0x01, 0xFF, 0xBC, 0xFF], Locale::International), 3);
        assert_eq!(trash_offset(&[0xBB, 0xBC, 0x0A], Locale::International), 3);
        assert_eq!(trash_offset(&[0xBB, 0xBC], Locale::International), 2);
        assert_eq!(trash_offset(&[0x01, 0xFF, 0x00], Locale::Japanese), 2);
    }

    proptest! {
        #[test]
        fn never_yields_more_chars_than_bytes(data in proptest::collection::vec(any::<u8>(), 0..32)) {
            for locale in [Locale::Japanese, Locale::International] {
                let text = decode(&data, locale);
                prop_assert!(text.chars().count() <= data.len());
            }
        }

        #[test]
        fn nothing_after_terminator_matters(
            head in proptest::collection::vec(0xA1u8..=0xEE, 0..8),
            tail in proptest::collection::vec(any::<u8>(), 0..8),
        ) {
            let mut data = head.clone();
            data.push(0xFF);
            let base = decode(&data, Locale::International);
            data.extend_from_slice(&tail);
            prop_assert_eq!(decode(&data, Locale::International), base);
        }
    }
}
