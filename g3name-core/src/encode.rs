use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tables::{encode_char, Code, Locale, FIXED_FILL_BYTE, TERMINATOR};

/// How the destination buffer is prepared before characters are written.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadOption {
    /// Leave the existing bytes alone.
    Keep,
    /// Zero the whole buffer.
    ClearZero,
    /// Fill with the fixed pad byte (`0x50`).
    Clear50,
    /// Fill with the terminator.
    #[default]
    ClearFF,
}

impl PadOption {
    fn apply(self, buffer: &mut [u8]) {
        match self {
            PadOption::Keep => {}
            PadOption::ClearZero => buffer.fill(0),
            PadOption::Clear50 => buffer.fill(FIXED_FILL_BYTE),
            PadOption::ClearFF => buffer.fill(TERMINATOR),
        }
    }
}

/// Why encoding stopped before the end of the capped input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Truncation {
    /// Character at `index` has no code in the active set.
    Unmappable { index: usize, ch: char },
    /// Character at `index` did not fit in the remaining bytes.
    BufferFull { index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EncodeOutcome {
    /// Bytes written, terminator included.
    pub len: usize,
    /// Characters placed.
    pub chars: usize,
    /// Characters cut by the character cap before encoding began.
    pub capped: usize,
    /// Where encoding stopped inside the capped input, if it did.
    pub truncation: Option<Truncation>,
}

impl EncodeOutcome {
    pub fn is_complete(&self) -> bool {
        self.capped == 0 && self.truncation.is_none()
    }
}

/// Encode `text` into `buffer`.
///
/// Characters past `max_chars` are dropped up front. Encoding stops silently
/// at the first character with no code or that does not fit; everything
/// before it is kept. The terminator follows the last character unless the
/// buffer is exactly full.
pub fn encode(
    buffer: &mut [u8],
    text: &str,
    max_chars: usize,
    locale: Locale,
    pad: PadOption,
) -> EncodeOutcome {
    let capped = text.chars().count().saturating_sub(max_chars);
    let mut truncation = None;

    pad.apply(buffer);

    let mut cursor = 0usize;
    let mut chars = 0usize;
    for (index, ch) in text.chars().take(max_chars).enumerate() {
        let Some(code) = encode_char(ch, locale) else {
            truncation = Some(Truncation::Unmappable { index, ch });
            break;
        };
        if cursor + code.width() > buffer.len() {
            truncation = Some(Truncation::BufferFull { index });
            break;
        }
        match code {
            Code::Single(b) => buffer[cursor] = b,
            Code::Double(hi, lo) => {
                buffer[cursor] = hi;
                buffer[cursor + 1] = lo;
            }
        }
        cursor += code.width();
        chars += 1;
    }

    let len = if cursor < buffer.len() {
        buffer[cursor] = TERMINATOR;
        cursor + 1
    } else {
        cursor
    };

    if capped > 0 || truncation.is_some() {
        debug!(capped, ?truncation, chars, len, "name truncated on encode");
    }

    EncodeOutcome {
        len,
        chars,
        capped,
        truncation,
    }
}

/// Encode into a fresh `len`-byte buffer.
pub fn encode_to_vec(
    text: &str,
    len: usize,
    max_chars: usize,
    locale: Locale,
    pad: PadOption,
) -> (Vec<u8>, EncodeOutcome) {
    let mut buffer = vec![TERMINATOR; len];
    let outcome = encode(&mut buffer, text, max_chars, locale, pad);
    (buffer, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use proptest::prelude::*;

    #[test]
    fn empty_string_fixed_fill() {
        let (buf, out) = encode_to_vec("", 11, 10, Locale::International, PadOption::Clear50);
        assert_eq!(buf[0], TERMINATOR);
        assert!(buf[1..].iter().all(|&b| b == FIXED_FILL_BYTE));
        assert_eq!(out.len, 1);
        assert_eq!(out.chars, 0);
        assert!(out.is_complete());
    }

    #[test]
    fn pad_options() {
        let mut buf = [0xAA; 6];
        encode(&mut buf, "AB", 5, Locale::International, PadOption::ClearZero);
        assert_eq!(buf, [0xBB, 0xBC, 0xFF, 0, 0, 0]);

        let mut buf = [0xAA; 6];
        encode(&mut buf, "AB", 5, Locale::International, PadOption::ClearFF);
        assert_eq!(buf, [0xBB, 0xBC, 0xFF, 0xFF, 0xFF, 0xFF]);

        let mut buf = [0xAA; 6];
        encode(&mut buf, "AB", 5, Locale::International, PadOption::Keep);
        assert_eq!(buf, [0xBB, 0xBC, 0xFF, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn two_byte_output() {
        let (buf, out) = encode_to_vec("皮卡丘", 11, 10, Locale::International, PadOption::Clear50);
        assert_eq!(
            buf,
            vec![0x0A, 0x5F, 0x07, 0xB6, 0x0B, 0x12, 0xFF, 0x50, 0x50, 0x50, 0x50]
        );
        assert_eq!(out.len, 7);
        assert_eq!(out.chars, 3);
    }

    #[test]
    fn max_length_is_a_hard_cap() {
        let (buf, out) = encode_to_vec("ABCDEFG", 6, 5, Locale::International, PadOption::ClearFF);
        assert_eq!(decode(&buf, Locale::International), "ABCDE");
        assert_eq!(out.capped, 2);
        assert_eq!(out.truncation, None);
        assert!(!out.is_complete());
        assert_eq!(out.len, 6);
    }

    #[test]
    fn cap_and_unmappable_are_both_reported() {
        let (buf, out) = encode_to_vec("AB#CDEFG", 11, 5, Locale::International, PadOption::ClearFF);
        assert_eq!(decode(&buf, Locale::International), "AB");
        assert_eq!(out.capped, 3);
        assert_eq!(
            out.truncation,
            Some(Truncation::Unmappable { index: 2, ch: '#' })
        );
        assert_eq!(out.chars, 2);
    }

    #[test]
    fn cap_and_full_buffer_are_both_reported() {
        let (_, out) = encode_to_vec("皮卡丘皮", 5, 3, Locale::International, PadOption::ClearFF);
        assert_eq!(out.capped, 1);
        assert_eq!(out.truncation, Some(Truncation::BufferFull { index: 2 }));
        assert_eq!(out.chars, 2);
        assert_eq!(out.len, 5);
    }

    #[test]
    fn unmappable_character_drops_the_rest() {
        let (buf, out) = encode_to_vec("AB#CD", 11, 10, Locale::International, PadOption::ClearFF);
        assert_eq!(decode(&buf, Locale::International), "AB");
        assert_eq!(
            out.truncation,
            Some(Truncation::Unmappable { index: 2, ch: '#' })
        );
        assert_eq!(out.len, 3);
        assert_eq!(out.chars, 2);
        assert_eq!(out.capped, 0);
    }

    #[test]
    fn han_characters_are_unmappable_in_japanese() {
        let (buf, out) = encode_to_vec("あ皮", 6, 5, Locale::Japanese, PadOption::ClearFF);
        assert_eq!(buf[..2], [0x01, 0xFF]);
        assert_eq!(
            out.truncation,
            Some(Truncation::Unmappable { index: 1, ch: '皮' })
        );
    }

    #[test]
    fn exactly_full_buffer_has_no_terminator() {
        let (buf, out) = encode_to_vec("ABCDEF", 6, 6, Locale::International, PadOption::ClearFF);
        assert_eq!(buf, vec![0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0]);
        assert_eq!(out.len, 6);
        assert!(out.is_complete());
    }

    #[test]
    fn two_byte_character_never_split() {
        // Five two-byte characters need ten bytes; the sixth would overrun.
        let (buf, out) = encode_to_vec(
            "皮卡丘皮卡丘",
            11,
            10,
            Locale::International,
            PadOption::ClearFF,
        );
        assert_eq!(out.truncation, Some(Truncation::BufferFull { index: 5 }));
        assert_eq!(out.chars, 5);
        assert_eq!(out.len, 11);
        assert_eq!(buf[10], TERMINATOR);
        assert_eq!(decode(&buf, Locale::International), "皮卡丘皮卡");
    }

    #[test]
    fn apostrophe_becomes_closing_quote() {
        let (buf, _) = encode_to_vec("A'B", 11, 10, Locale::International, PadOption::ClearFF);
        assert_eq!(buf[1], 0xB4);
        assert_eq!(decode(&buf, Locale::International), "A\u{2019}B");
    }

    fn international_char() -> impl Strategy<Value = char> {
        prop_oneof![
            prop::sample::select(vec!['A', 'z', '0', '9', '!', '?', ' ', 'É', 'é', 'í', '♂', '/']),
            prop::sample::select(vec!['皮', '卡', '丘', '啊', '阿', '沧', '鳌', '广', '鼾']),
        ]
    }

    proptest! {
        #[test]
        fn round_trips_international(chars in proptest::collection::vec(international_char(), 0..=5)) {
            let text: String = chars.into_iter().collect();
            let (buf, out) = encode_to_vec(&text, 11, 10, Locale::International, PadOption::Clear50);
            prop_assert!(out.is_complete());
            prop_assert_eq!(decode(&buf, Locale::International), text);
        }

        #[test]
        fn round_trips_japanese(keys in proptest::collection::vec(0x01u8..=0x50, 0..=5)) {
            let text: String = keys
                .iter()
                .map(|&k| crate::tables::CharTable::Japanese.lookup(k as u16).unwrap_or('あ'))
                .collect();
            let (buf, out) = encode_to_vec(&text, 6, 5, Locale::Japanese, PadOption::ClearZero);
            prop_assert!(out.is_complete());
            prop_assert_eq!(decode(&buf, Locale::Japanese), text);
        }

        #[test]
        fn never_writes_past_the_buffer(text in "\\PC{0,16}", len in 1usize..12) {
            let mut buf = vec![0u8; len];
            let out = encode(&mut buf, &text, 16, Locale::International, PadOption::Keep);
            prop_assert!(out.len <= len);
        }
    }
}
