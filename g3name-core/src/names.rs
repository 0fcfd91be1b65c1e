//! Nickname and trainer name buffers for one stored creature.
//!
//! The raw buffers are kept byte-for-byte, trash after the terminator
//! included. Edits re-encode with whatever pad convention the buffer already
//! uses so that untouched trailing bytes match what the game itself writes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::decode::{decode, trash_offset};
use crate::encode::{encode, EncodeOutcome, PadOption};
use crate::fixup::fix_decimal_point;
use crate::tables::{Locale, TERMINATOR};
use crate::{CodecError, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Japanese = 1,
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Spanish = 7,
    Korean = 8,
    ChineseS = 9,
    ChineseT = 10,
}

impl Language {
    pub fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            1 => Language::Japanese,
            2 => Language::English,
            3 => Language::French,
            4 => Language::Italian,
            5 => Language::German,
            7 => Language::Spanish,
            8 => Language::Korean,
            9 => Language::ChineseS,
            10 => Language::ChineseT,
            _ => return None,
        })
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn locale(self) -> Locale {
        match self {
            Language::Japanese => Locale::Japanese,
            _ => Locale::International,
        }
    }
}

/// Supplies the default (un-nicknamed) name for a species.
pub trait SpeciesNameProvider {
    fn species_name(&self, species: u16, language: Language, generation: u8) -> String;
}

impl<F> SpeciesNameProvider for F
where
    F: Fn(u16, Language, u8) -> String,
{
    fn species_name(&self, species: u16, language: Language, generation: u8) -> String {
        self(species, language, generation)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    Nickname,
    Trainer,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::Nickname => f.write_str("nickname"),
            NameField::Trainer => f.write_str("trainer name"),
        }
    }
}

/// Buffer sizes and character caps for one locale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NameLayout {
    pub nickname_len: usize,
    pub trainer_len: usize,
    pub max_nickname_chars: usize,
    pub max_trainer_chars: usize,
}

impl NameLayout {
    pub const JAPANESE: NameLayout = NameLayout {
        nickname_len: 6,
        trainer_len: 6,
        max_nickname_chars: 5,
        max_trainer_chars: 5,
    };

    pub const INTERNATIONAL: NameLayout = NameLayout {
        nickname_len: 11,
        trainer_len: 11,
        max_nickname_chars: 10,
        max_trainer_chars: 7,
    };

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Japanese => Self::JAPANESE,
            Locale::International => Self::INTERNATIONAL,
        }
    }

    fn len(&self, field: NameField) -> usize {
        match field {
            NameField::Nickname => self.nickname_len,
            NameField::Trainer => self.trainer_len,
        }
    }

    fn max_chars(&self, field: NameField) -> usize {
        match field {
            NameField::Nickname => self.max_nickname_chars,
            NameField::Trainer => self.max_trainer_chars,
        }
    }
}

/// Name buffers owned by one record.
///
/// The locale is fixed at construction; buffer lengths follow from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameBlock {
    locale: Locale,
    generation: u8,
    korean: bool,
    species: u16,
    nicknamed: bool,
    nickname: Box<[u8]>,
    trainer: Box<[u8]>,
}

impl NameBlock {
    /// Blank record with both buffers filled with the terminator.
    pub fn new(locale: Locale, generation: u8) -> Self {
        let layout = NameLayout::for_locale(locale);
        Self {
            locale,
            generation,
            korean: false,
            species: 0,
            nicknamed: false,
            nickname: vec![TERMINATOR; layout.nickname_len].into_boxed_slice(),
            trainer: vec![TERMINATOR; layout.trainer_len].into_boxed_slice(),
        }
    }

    /// Record over existing raw name bytes, copied verbatim.
    pub fn from_raw(locale: Locale, generation: u8, nickname: &[u8], trainer: &[u8]) -> Result<Self> {
        let layout = NameLayout::for_locale(locale);
        check_len(NameField::Nickname, layout.nickname_len, nickname)?;
        check_len(NameField::Trainer, layout.trainer_len, trainer)?;

        Ok(Self {
            locale,
            generation,
            korean: false,
            species: 0,
            nicknamed: false,
            nickname: nickname.into(),
            trainer: trainer.into(),
        })
    }

    pub fn with_korean(mut self, korean: bool) -> Self {
        self.korean = korean;
        self
    }

    pub fn with_species(mut self, species: u16) -> Self {
        self.species = species;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn generation(&self) -> u8 {
        self.generation
    }

    pub fn korean(&self) -> bool {
        self.korean
    }

    pub fn layout(&self) -> NameLayout {
        NameLayout::for_locale(self.locale)
    }

    pub fn species(&self) -> u16 {
        self.species
    }

    pub fn set_species(&mut self, species: u16) {
        self.species = species;
    }

    pub fn is_nicknamed(&self) -> bool {
        self.nicknamed
    }

    pub fn set_nicknamed(&mut self, nicknamed: bool) {
        self.nicknamed = nicknamed;
    }

    pub fn nickname_trash(&self) -> &[u8] {
        &self.nickname
    }

    pub fn nickname_trash_mut(&mut self) -> &mut [u8] {
        &mut self.nickname
    }

    pub fn trainer_trash(&self) -> &[u8] {
        &self.trainer
    }

    pub fn trainer_trash_mut(&mut self) -> &mut [u8] {
        &mut self.trainer
    }

    pub fn nickname(&self) -> String {
        decode(&self.nickname, self.locale)
    }

    pub fn trainer_name(&self) -> String {
        decode(&self.trainer, self.locale)
    }

    /// Returns `None` when the name is unchanged on a record that isn't
    /// nicknamed, in which case the buffer is not touched.
    pub fn set_nickname(&mut self, value: &str) -> Option<EncodeOutcome> {
        if !self.nicknamed && self.nickname() == value {
            debug!(value, "nickname unchanged");
            return None;
        }
        Some(self.write_keep_style(NameField::Nickname, value))
    }

    /// Returns `None` when the name is unchanged.
    pub fn set_trainer_name(&mut self, value: &str) -> Option<EncodeOutcome> {
        if self.trainer_name() == value {
            debug!(value, "trainer name unchanged");
            return None;
        }
        Some(self.write_keep_style(NameField::Trainer, value))
    }

    /// Replace the nickname with the species' default name in `language`
    /// and clear the nicknamed flag.
    pub fn set_not_nicknamed<P>(&mut self, language: Language, names: &P) -> EncodeOutcome
    where
        P: SpeciesNameProvider + ?Sized,
    {
        let name = names.species_name(self.species, language, self.generation);
        let max_chars = self.nickname.len();
        let outcome = encode(&mut self.nickname, &name, max_chars, self.locale, PadOption::Clear50);
        fix_decimal_point(&mut self.nickname, self.locale, self.korean);
        self.nicknamed = false;
        outcome
    }

    fn write_keep_style(&mut self, field: NameField, value: &str) -> EncodeOutcome {
        let layout = self.layout();
        let locale = self.locale;
        let buffer = match field {
            NameField::Nickname => &mut self.nickname,
            NameField::Trainer => &mut self.trainer,
        };
        debug_assert_eq!(buffer.len(), layout.len(field));

        // Only trash decides the style; 0x00 is also the space character.
        let trash = &buffer[trash_offset(buffer, locale)..];
        let pad = if trash.contains(&0) {
            PadOption::ClearZero
        } else {
            PadOption::Clear50
        };
        trace!(%field, ?pad, "re-encoding name");
        encode(buffer, value, layout.max_chars(field), locale, pad)
    }
}

fn check_len(field: NameField, expected: usize, raw: &[u8]) -> Result<()> {
    if raw.len() != expected {
        return Err(CodecError::BufferLength {
            field,
            expected,
            actual: raw.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_to_vec;
    use crate::tables::FIXED_FILL_BYTE;
    use proptest::prelude::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn species_names(species: u16, language: Language, _generation: u8) -> String {
        match (species, language) {
            (25, Language::Japanese) => "ピカチュウ".to_string(),
            (25, Language::ChineseS) => "皮卡丘".to_string(),
            (25, _) => "PIKACHU".to_string(),
            (122, _) => "MR・MIME".to_string(),
            _ => String::new(),
        }
    }

    #[test]
    fn fresh_buffers_are_terminator_filled() {
        let block = NameBlock::new(Locale::International, 3);
        assert_eq!(block.nickname_trash(), &[TERMINATOR; 11]);
        assert_eq!(block.trainer_trash(), &[TERMINATOR; 11]);
        assert_eq!(block.nickname(), "");

        let block = NameBlock::new(Locale::Japanese, 3);
        assert_eq!(block.nickname_trash().len(), 6);
        assert_eq!(block.trainer_trash().len(), 6);
    }

    #[test]
    fn from_raw_checks_lengths() {
        let err = NameBlock::from_raw(Locale::Japanese, 3, &[0xFF; 11], &[0xFF; 6]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::BufferLength {
                field: NameField::Nickname,
                expected: 6,
                actual: 11
            }
        ));
        assert!(NameBlock::from_raw(Locale::Japanese, 3, &[0xFF; 6], &[0xFF; 6]).is_ok());
    }

    #[test]
    fn reads_existing_names() {
        let mut nick = [0x50; 11];
        nick[..3].copy_from_slice(&[0xBB, 0xBC, 0xFF]);
        let mut ot = [0; 11];
        ot[..4].copy_from_slice(&[0x0A, 0x5F, 0xD5, 0xFF]);
        let block = NameBlock::from_raw(Locale::International, 3, &nick, &ot).unwrap();
        assert_eq!(block.nickname(), "AB");
        assert_eq!(block.trainer_name(), "皮a");
    }

    #[test]
    fn keeps_zero_padding() {
        let mut ot = [0u8; 11];
        ot[..4].copy_from_slice(&[0xBB, 0xBC, 0xBD, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &[0xFF; 11], &ot).unwrap();

        block.set_trainer_name("AZ").unwrap();
        assert_eq!(&block.trainer_trash()[..3], &[0xBB, 0xD4, 0xFF]);
        assert!(block.trainer_trash()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn keeps_fixed_fill_padding() {
        let mut ot = [FIXED_FILL_BYTE; 11];
        ot[..4].copy_from_slice(&[0xBB, 0xBC, 0xBD, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &[0xFF; 11], &ot).unwrap();

        block.set_trainer_name("AZ").unwrap();
        assert_eq!(&block.trainer_trash()[..3], &[0xBB, 0xD4, 0xFF]);
        assert!(block.trainer_trash()[3..].iter().all(|&b| b == FIXED_FILL_BYTE));
    }

    #[test]
    fn space_in_name_does_not_switch_padding() {
        let mut ot = [FIXED_FILL_BYTE; 11];
        ot[..4].copy_from_slice(&[0xBB, 0x00, 0xBC, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &[0xFF; 11], &ot).unwrap();
        assert_eq!(block.trainer_name(), "A B");

        block.set_trainer_name("XY").unwrap();
        assert_eq!(
            block.trainer_trash(),
            &[0xD2, 0xD3, 0xFF, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50]
        );
    }

    #[test]
    fn spaced_nickname_set_twice_is_stable() {
        let mut block = NameBlock::new(Locale::International, 3);
        block.set_nicknamed(true);
        block.set_nickname("MR MIME");
        let first = block.nickname_trash().to_vec();
        assert_eq!(&first[7..], &[0xFF, 0x50, 0x50, 0x50]);

        block.set_nickname("MR MIME");
        assert_eq!(block.nickname_trash(), &first[..]);
    }

    #[test]
    fn zero_trash_kept_behind_spaced_name() {
        let mut ot = [0u8; 11];
        ot[..2].copy_from_slice(&[0xBB, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &[0xFF; 11], &ot).unwrap();

        block.set_trainer_name("A B").unwrap();
        assert_eq!(&block.trainer_trash()[..4], &[0xBB, 0x00, 0xBC, 0xFF]);
        assert!(block.trainer_trash()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn terminator_filled_buffer_becomes_fixed_fill() {
        let mut block = NameBlock::new(Locale::International, 3);
        block.set_trainer_name("AB").unwrap();
        assert_eq!(
            block.trainer_trash(),
            &[0xBB, 0xBC, 0xFF, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50]
        );
    }

    #[test]
    fn unchanged_nickname_is_a_no_op() {
        let mut nick = [0xAA; 11];
        nick[..3].copy_from_slice(&[0xBB, 0xBC, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &nick, &[0xFF; 11]).unwrap();

        assert_eq!(block.set_nickname("AB"), None);
        assert_eq!(block.nickname_trash(), &nick);
    }

    #[test]
    fn nicknamed_record_rewrites_even_when_equal() {
        let mut nick = [0xAA; 11];
        nick[..3].copy_from_slice(&[0xBB, 0xBC, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &nick, &[0xFF; 11]).unwrap();
        block.set_nicknamed(true);

        assert!(block.set_nickname("AB").is_some());
        assert_eq!(&block.nickname_trash()[3..], &[0x50; 8]);
    }

    #[test]
    fn setting_twice_is_idempotent() {
        let mut block = NameBlock::new(Locale::International, 3);
        block.set_nicknamed(true);
        block.set_nickname("SPARKY");
        let first = block.nickname_trash().to_vec();
        block.set_nickname("SPARKY");
        assert_eq!(block.nickname_trash(), &first[..]);

        block.set_trainer_name("RED");
        let first = block.trainer_trash().to_vec();
        assert_eq!(block.set_trainer_name("RED"), None);
        assert_eq!(block.trainer_trash(), &first[..]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn guard_hits_are_logged_at_debug() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut nick = [FIXED_FILL_BYTE; 11];
        nick[..3].copy_from_slice(&[0xBB, 0xBC, 0xFF]);
        let mut block = NameBlock::from_raw(Locale::International, 3, &nick, &nick).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(block.set_nickname("AB"), None);
            assert_eq!(block.set_trainer_name("AB"), None);
        });

        let out = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("DEBUG"), "{out}");
        assert!(out.contains("nickname unchanged"), "{out}");
        assert!(out.contains("trainer name unchanged"), "{out}");
    }

    #[test]
    fn trainer_name_is_capped() {
        let mut block = NameBlock::new(Locale::International, 3);
        let out = block.set_trainer_name("ABCDEFGHIJ").unwrap();
        assert_eq!(out.capped, 3);
        assert_eq!(out.truncation, None);
        assert_eq!(block.trainer_name(), "ABCDEFG");
    }

    #[test]
    fn default_name_uses_fixed_fill_and_clears_flag() {
        let mut block = NameBlock::new(Locale::International, 3).with_species(25);
        block.set_nicknamed(true);
        block.set_nickname("SPARKY");

        let out = block.set_not_nicknamed(Language::English, &species_names);
        assert!(out.is_complete());
        assert!(!block.is_nicknamed());
        assert_eq!(block.nickname(), "PIKACHU");
        assert_eq!(&block.nickname_trash()[7..], &[0xFF, 0x50, 0x50, 0x50]);
    }

    #[test]
    fn default_name_two_byte() {
        let mut block = NameBlock::new(Locale::International, 3).with_species(25);
        block.set_not_nicknamed(Language::ChineseS, &species_names);
        assert_eq!(block.nickname(), "皮卡丘");
        assert_eq!(
            block.nickname_trash(),
            &[0x0A, 0x5F, 0x07, 0xB6, 0x0B, 0x12, 0xFF, 0x50, 0x50, 0x50, 0x50]
        );
    }

    #[test]
    fn default_name_remaps_decimal_point() {
        let mut block = NameBlock::new(Locale::International, 3).with_species(122);
        block.set_not_nicknamed(Language::English, &species_names);
        assert_eq!(block.nickname(), "MR.MIME");
        assert_eq!(block.nickname_trash()[2], 0xAD);

        let mut block = NameBlock::new(Locale::International, 3)
            .with_species(122)
            .with_korean(true);
        block.set_not_nicknamed(Language::Korean, &species_names);
        assert_eq!(block.nickname(), "MR・MIME");
    }

    #[test]
    fn default_name_letters_survive_fixup() {
        let mut block = NameBlock::new(Locale::International, 3).with_species(82);
        let provider = |_: u16, _: Language, _: u8| "MAGNETÖ".to_string();
        block.set_not_nicknamed(Language::German, &provider);
        assert_eq!(block.nickname(), "MAGNETÖ");
        assert_eq!(&block.nickname_trash()[5..8], &[0xCE, 0xF2, 0xFF]);
    }

    #[test]
    fn closure_provider() {
        let mut block = NameBlock::new(Locale::Japanese, 3).with_species(25);
        let provider = |_: u16, _: Language, _: u8| "ピカチュウ".to_string();
        block.set_not_nicknamed(Language::Japanese, &provider);
        assert_eq!(block.nickname(), "ピカチュウ");
        assert_eq!(block.nickname_trash(), &[0x9C, 0x56, 0x61, 0x85, 0x53, TERMINATOR]);
    }

    fn name_char() -> impl Strategy<Value = char> {
        prop::sample::select(vec![' ', 'A', 'R', 'z', '0', 'é', '♂', '皮', '丘'])
    }

    proptest! {
        #[test]
        fn edits_keep_trash_style(
            old in "[A-Z ]{0,5}",
            new in proptest::collection::vec(name_char(), 0..=7),
            zero_style in any::<bool>(),
        ) {
            let (style, pad) = if zero_style {
                (0u8, PadOption::ClearZero)
            } else {
                (FIXED_FILL_BYTE, PadOption::Clear50)
            };
            let new: String = new.into_iter().collect();
            let (raw, _) = encode_to_vec(&old, 11, 7, Locale::International, pad);

            let mut block = NameBlock::from_raw(Locale::International, 3, &raw, &raw).unwrap();
            block.set_nicknamed(true);
            block.set_nickname(&new);
            block.set_trainer_name(&new);

            for buffer in [block.nickname_trash(), block.trainer_trash()] {
                let trash = &buffer[trash_offset(buffer, Locale::International)..];
                prop_assert!(trash.iter().all(|&b| b == style), "{:02X?}", buffer);
            }

            let before = block.clone();
            block.set_nickname(&new);
            block.set_trainer_name(&new);
            prop_assert_eq!(block, before);
        }
    }

    #[test]
    fn language_ids() {
        assert_eq!(Language::from_id(9), Some(Language::ChineseS));
        assert_eq!(Language::from_id(6), None);
        assert_eq!(Language::Spanish.id(), 7);
        assert_eq!(Language::Japanese.locale(), Locale::Japanese);
        assert_eq!(Language::Korean.locale(), Locale::International);
    }
}
