use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use g3name_core::{
    decode, decode_strict, encode_to_vec, fix_decimal_point, format_hex, parse_hex, CodecSettings,
    EncodeOutcome, Locale, PadOption, Result,
};

#[derive(Debug, Parser)]
#[command(name = "g3name", version, about = "Gen III save name codec")]
struct Args {
    /// JSON settings file. Flags given on the command line win.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    locale: Option<LocaleArg>,

    /// Treat the save as Korean (skips the decimal point fixup).
    #[arg(long, global = true)]
    korean: bool,

    /// Print a JSON report instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a hex dump of a name buffer.
    Decode {
        hex: String,
        /// Fail if the buffer ends inside a two-byte character.
        #[arg(long)]
        strict: bool,
    },
    /// Encode text into a fixed-size name buffer.
    Encode {
        text: String,
        #[arg(long, default_value_t = 11)]
        len: usize,
        /// Character cap; defaults to the buffer length.
        #[arg(long)]
        max_chars: Option<usize>,
        #[arg(long, value_enum)]
        pad: Option<PadArg>,
    },
    /// Apply the decimal point fixup to a hex dump.
    Fixup { hex: String },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LocaleArg {
    Japanese,
    International,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Japanese => Locale::Japanese,
            LocaleArg::International => Locale::International,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PadArg {
    Keep,
    Zero,
    Fill50,
    FillFf,
}

impl From<PadArg> for PadOption {
    fn from(arg: PadArg) -> Self {
        match arg {
            PadArg::Keep => PadOption::Keep,
            PadArg::Zero => PadOption::ClearZero,
            PadArg::Fill50 => PadOption::Clear50,
            PadArg::FillFf => PadOption::ClearFF,
        }
    }
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    locale: Locale,
    bytes: &'a str,
    text: String,
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    locale: Locale,
    text: &'a str,
    bytes: String,
    outcome: EncodeOutcome,
}

#[derive(Serialize)]
struct FixupReport {
    locale: Locale,
    korean: bool,
    rewritten: usize,
    bytes: String,
}

fn load_settings(args: &Args) -> Result<CodecSettings> {
    let mut settings = match &args.config {
        Some(path) => CodecSettings::from_json_file(path)?,
        None => CodecSettings::default(),
    };
    if let Some(locale) = args.locale {
        settings.locale = locale.into();
    }
    if args.korean {
        settings.korean = true;
    }
    Ok(settings)
}

fn print_report<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;
    tracing::debug!(?settings, "loaded settings");

    match &args.command {
        Command::Decode { hex, strict } => {
            let data = parse_hex(hex)?;
            let text = if *strict {
                decode_strict(&data, settings.locale)?
            } else {
                decode(&data, settings.locale)
            };
            if args.json {
                print_report(&DecodeReport {
                    locale: settings.locale,
                    bytes: hex,
                    text,
                })?;
            } else {
                println!("{text}");
            }
        }
        Command::Encode {
            text,
            len,
            max_chars,
            pad,
        } => {
            let pad = pad.map(PadOption::from).unwrap_or(settings.pad);
            let max_chars = max_chars.unwrap_or(*len);
            let (buf, outcome) = encode_to_vec(text, *len, max_chars, settings.locale, pad);
            if !outcome.is_complete() {
                tracing::warn!(
                    capped = outcome.capped,
                    truncation = ?outcome.truncation,
                    "input did not fit"
                );
            }
            if args.json {
                print_report(&EncodeReport {
                    locale: settings.locale,
                    text,
                    bytes: format_hex(&buf),
                    outcome,
                })?;
            } else {
                println!("{}", format_hex(&buf));
            }
        }
        Command::Fixup { hex } => {
            let mut data = parse_hex(hex)?;
            let rewritten = fix_decimal_point(&mut data, settings.locale, settings.korean);
            if args.json {
                print_report(&FixupReport {
                    locale: settings.locale,
                    korean: settings.korean,
                    rewritten,
                    bytes: format_hex(&data),
                })?;
            } else {
                println!("{}", format_hex(&data));
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
