use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod decode;
pub mod encode;
pub mod fixup;
pub mod names;
pub mod scanner;
pub mod tables;

pub use decode::{decode, decode_strict, trash_offset};
pub use encode::{encode, encode_to_vec, EncodeOutcome, PadOption, Truncation};
pub use fixup::fix_decimal_point;
pub use names::{Language, NameBlock, NameField, NameLayout, SpeciesNameProvider};
pub use tables::{CharTable, Code, Locale, FIXED_FILL_BYTE, TERMINATOR};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} buffer is {actual} bytes, expected {expected}")]
    BufferLength {
        field: NameField,
        expected: usize,
        actual: usize,
    },
    #[error("lead byte at offset {offset} has no trailing byte")]
    DanglingLeadByte { offset: usize },
    #[error("invalid hex byte '{token}'")]
    InvalidHex { token: String },
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec parameters shared by every call against one save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecSettings {
    pub locale: Locale,
    pub korean: bool,
    pub pad: PadOption,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            locale: Locale::International,
            korean: false,
            pad: PadOption::ClearFF,
        }
    }
}

impl CodecSettings {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|err| {
            CodecError::Config(format!("{}: {err}", path.display()))
        })
    }
}

/// Parse a hex dump such as `"BB D5 FF"` or `"0xbb,0xd5,0xff"` into bytes.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let t = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        // Unseparated runs like "BBD5FF" are read two digits at a time.
        if t.len() % 2 != 0 || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodecError::InvalidHex {
                token: token.to_string(),
            });
        }
        for pair in t.as_bytes().chunks(2) {
            let hi = (pair[0] as char).to_digit(16).unwrap_or(0) as u8;
            let lo = (pair[1] as char).to_digit(16).unwrap_or(0) as u8;
            out.push(hi << 4 | lo);
        }
    }
    Ok(out)
}

/// Format bytes as space separated upper-case hex.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_and_prefixed_hex() {
        assert_eq!(parse_hex("BB d5 FF").unwrap(), vec![0xBB, 0xD5, 0xFF]);
        assert_eq!(parse_hex("0xbb,0xD5").unwrap(), vec![0xBB, 0xD5]);
        assert_eq!(parse_hex("bbd5ff").unwrap(), vec![0xBB, 0xD5, 0xFF]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(
            parse_hex("BG"),
            Err(CodecError::InvalidHex { .. })
        ));
        assert!(matches!(
            parse_hex("ABC"),
            Err(CodecError::InvalidHex { .. })
        ));
    }

    #[test]
    fn formats_hex() {
        assert_eq!(format_hex(&[0x0A, 0xFF, 0x50]), "0A FF 50");
    }

    #[test]
    fn settings_fill_missing_fields_from_defaults() {
        let s: CodecSettings = serde_json::from_str(r#"{ "locale": "japanese" }"#).unwrap();
        assert_eq!(s.locale, Locale::Japanese);
        assert_eq!(s.pad, PadOption::ClearFF);
        assert!(!s.korean);
    }

    #[test]
    fn settings_reject_unknown_fields() {
        let err = serde_json::from_str::<CodecSettings>(r#"{ "generation": 0 }"#);
        assert!(err.is_err());
    }

    #[test]
    fn settings_file_errors_name_the_file() {
        let path = std::env::temp_dir().join(format!("g3name-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "pad": "sideways" }"#).unwrap();
        let err = CodecSettings::from_json_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        match err {
            CodecError::Config(msg) => assert!(msg.contains("g3name-settings-")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
