use clap::{Args, Parser, Subcommand};
use daylimit_core::contracts::types::EntryInput;

/// Parses `AMOUNT:COMMENT[:DD.MM.YYYY]`. The date segment is only split off
/// when it is made of digits and dots; calendar validation happens when the
/// record is built.
pub fn parse_entry(value: &str) -> Result<EntryInput, String> {
    let Some((amount_text, rest)) = value.split_once(':') else {
        return Err("entry must use AMOUNT:COMMENT[:DD.MM.YYYY] format".to_string());
    };

    let amount = amount_text
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("entry amount `{amount_text}` is not a number"))?;
    if !amount.is_finite() {
        return Err(format!("entry amount `{amount_text}` must be finite"));
    }

    let (comment, date) = match rest.rsplit_once(':') {
        Some((comment, date)) if looks_like_date_segment(date) => (comment, Some(date)),
        _ => (rest, None),
    };

    Ok(EntryInput::new(amount, comment, date))
}

fn looks_like_date_segment(value: &str) -> bool {
    value.contains('.') && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

#[derive(Debug, Parser)]
#[command(
    name = "daylimit",
    version,
    about = "daily calorie and cash limit tracker",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Reference date to evaluate against (DD.MM.YYYY, defaults to today)
    #[arg(long)]
    pub today: Option<String>,
    /// Message language: en or ru (falls back to DAYLIMIT_LOCALE, then en)
    #[arg(long)]
    pub locale: Option<String>,
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run both calculators over bundled sample records
    Demo {
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Check today's calorie intake against a daily limit
    Calories {
        /// Daily calorie limit
        #[arg(long, allow_negative_numbers = true)]
        limit: f64,
        /// Record as AMOUNT:COMMENT[:DD.MM.YYYY]; repeat for more records
        #[arg(long = "entry", value_parser = parse_entry, allow_hyphen_values = true)]
        entries: Vec<EntryInput>,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Check today's cash spend against a daily limit
    Cash {
        /// Daily cash limit in roubles
        #[arg(long, allow_negative_numbers = true)]
        limit: f64,
        /// Currency to report the balance in: rub, usd, or eur
        #[arg(long, default_value = "rub")]
        currency: String,
        /// Record as AMOUNT:COMMENT[:DD.MM.YYYY]; repeat for more records
        #[arg(long = "entry", value_parser = parse_entry, allow_hyphen_values = true)]
        entries: Vec<EntryInput>,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// List supported currencies and their fixed rates
    Currencies {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
