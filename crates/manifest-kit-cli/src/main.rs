//! `manifest-kit`: decimal formatting and manifest inspection from the shell.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use manifest_kit_core::{
    format::{DEFAULT_TOTAL_PLACES, FormatOptions, Locale},
    manifest::{BlobOutputFormat, TransactionManifest},
    types::{Decimal, FixedDecimal, PreciseDecimal, RoundingMode, decimal::Precision},
    value::ManifestValue,
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "manifest-kit",
    version,
    about = "Decimal and transaction manifest tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a decimal for humans.
    Format {
        value: String,
        #[command(flatten)]
        locale: LocaleArg,
        #[arg(
            long,
            env = "MANIFEST_KIT_PLACES",
            default_value_t = DEFAULT_TOTAL_PLACES
        )]
        places: u32,
        #[arg(long)]
        no_grouping: bool,
        /// Print every digit instead of rounding to `places`.
        #[arg(long, conflicts_with = "engineering")]
        plain: bool,
        #[arg(long)]
        engineering: bool,
        /// Treat the value as a 36-place decimal.
        #[arg(long)]
        precise: bool,
    },
    /// Parse human-formatted text back to canonical decimal text.
    Parse {
        text: String,
        #[command(flatten)]
        locale: LocaleArg,
    },
    /// Round a decimal to a number of fractional places.
    Round {
        value: String,
        #[arg(long, default_value_t = 0)]
        places: u32,
        #[arg(long, value_enum, default_value_t = Mode::Half)]
        mode: Mode,
    },
    /// Apply one arithmetic operation.
    Calc {
        lhs: String,
        #[arg(value_enum)]
        op: Op,
        rhs: String,
    },
    /// Decode a JSON value node and print it in manifest notation.
    Decode {
        /// File to read; stdin when absent.
        path: Option<PathBuf>,
    },
    /// Render a JSON transaction manifest as manifest text.
    Render {
        /// File to read; stdin when absent.
        path: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Blobs::Count)]
        blobs: Blobs,
    },
}

#[derive(Args)]
struct LocaleArg {
    /// Locale identifier such as `en_US_POSIX`, `de_DE` or `fr`.
    #[arg(
        long = "locale",
        env = "MANIFEST_KIT_LOCALE",
        default_value = "en_US_POSIX"
    )]
    identifier: String,
}

impl LocaleArg {
    fn resolve(&self) -> Result<Locale> {
        Locale::from_identifier(&self.identifier)
            .ok_or_else(|| anyhow!("unknown locale '{}'", self.identifier))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Half,
    Floor,
    Ceil,
}

impl From<Mode> for RoundingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Half => Self::HalfAwayFromZero,
            Mode::Floor => Self::TowardZero,
            Mode::Ceil => Self::AwayFromZero,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Copy, ValueEnum)]
enum Blobs {
    Exclude,
    Count,
    Full,
    Hash,
}

impl From<Blobs> for BlobOutputFormat {
    fn from(blobs: Blobs) -> Self {
        match blobs {
            Blobs::Exclude => Self::Exclude,
            Blobs::Count => Self::ByteCountOnly,
            Blobs::Full => Self::Full,
            Blobs::Hash => Self::FullWithHash,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = run(Cli::parse().command)?;
    println!("{output}");

    Ok(())
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Format {
            value,
            locale,
            places,
            no_grouping,
            plain,
            engineering,
            precise,
        } => {
            let options = FormatOptions {
                locale: locale.resolve()?,
                total_places: places,
                use_grouping_separator: !no_grouping,
            };
            let text = if precise {
                let decimal: PreciseDecimal = parse_decimal(&value)?;
                format_decimal(&decimal, &options, plain, engineering)
            } else {
                let decimal: Decimal = parse_decimal(&value)?;
                format_decimal(&decimal, &options, plain, engineering)
            };

            Ok(text)
        }
        Command::Parse { text, locale } => {
            let locale = locale.resolve()?;
            let decimal = Decimal::parse_formatted(&text, &locale)
                .with_context(|| format!("cannot read '{text}' as a decimal"))?;

            Ok(decimal.to_string())
        }
        Command::Round {
            value,
            places,
            mode,
        } => {
            let decimal: Decimal = parse_decimal(&value)?;
            let rounded = decimal
                .checked_round(places, mode.into())
                .with_context(|| format!("cannot round {decimal} to {places} places"))?;

            Ok(rounded.to_string())
        }
        Command::Calc { lhs, op, rhs } => {
            let lhs: Decimal = parse_decimal(&lhs)?;
            let rhs: Decimal = parse_decimal(&rhs)?;
            let result = match op {
                Op::Add => lhs.checked_add(&rhs),
                Op::Sub => lhs.checked_sub(&rhs),
                Op::Mul => lhs.checked_mul(&rhs),
                Op::Div => lhs.checked_div(&rhs),
            }
            .context("arithmetic failed")?;

            Ok(result.to_string())
        }
        Command::Decode { path } => {
            let text = read_input(path.as_ref())?;
            let value: ManifestValue =
                serde_json::from_str(&text).context("input is not a manifest value node")?;
            tracing::debug!(kind = %value.kind(), "decoded value");

            Ok(value.to_string())
        }
        Command::Render { path, blobs } => {
            let text = read_input(path.as_ref())?;
            let manifest: TransactionManifest =
                serde_json::from_str(&text).context("input is not a transaction manifest")?;
            tracing::debug!(
                instructions = manifest.instructions().len(),
                blobs = manifest.blobs().len(),
                "decoded manifest"
            );

            Ok(manifest.render(blobs.into()))
        }
    }
}

fn parse_decimal<D>(text: &str) -> Result<D>
where
    D: std::str::FromStr,
    D::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<D>()
        .with_context(|| format!("'{text}' is not a decimal"))
}

fn format_decimal<P: Precision>(
    decimal: &FixedDecimal<P>,
    options: &FormatOptions,
    plain: bool,
    engineering: bool,
) -> String {
    if plain {
        decimal.formatted_plain(&options.locale, options.use_grouping_separator)
    } else if engineering {
        decimal.formatted_engineering_notation(&options.locale, options.total_places)
    } else {
        decimal.format_with(options)
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read stdin")?;

            Ok(text)
        }
    }
}
