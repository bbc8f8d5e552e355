use checkout_amounts::application::batch::run_batch;
use checkout_amounts::application::formatter::AmountFormatter;
use checkout_amounts::domain::currency::{CATALOGUE, CurrencyCode, CurrencyPosition};
use checkout_amounts::domain::separators::Separators;
use checkout_amounts::domain::settings::{StoreSettings, parse_separator};
use checkout_amounts::error::FormatError;
use checkout_amounts::infrastructure::settings_file::load_settings_file;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store settings JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store currency, overriding the settings file
    #[arg(long, global = true)]
    currency: Option<CurrencyCode>,

    /// Currency symbol position: before or after
    #[arg(long, global = true)]
    position: Option<CurrencyPosition>,

    /// Thousands separator; pass an empty string to disable grouping
    #[arg(long, global = true)]
    thousands_separator: Option<String>,

    /// Decimal separator
    #[arg(long, global = true)]
    decimal_separator: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a locale-formatted amount to a canonical one
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Format a canonical amount with the store separators
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Show the amount as a whole number
        #[arg(long)]
        no_decimals: bool,
    },
    /// Format an amount and add its currency symbol
    Price {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Add the currency symbol to an already formatted price
    Filter {
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Print the number of decimal places for a currency (default: the store's)
    Decimals {
        #[arg(value_name = "CURRENCY")]
        code: Option<CurrencyCode>,
    },
    /// List supported currencies
    Currencies,
    /// Sanitize a settings key
    Key { key: String },
    /// Extract a non-negative integer from a formatted value
    NotNegative {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format every row of a CSV file (header: amount[,currency]); "-" reads stdin
    Batch { input: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = resolve_settings(&cli).into_diagnostic()?;
    debug!(?settings, "Using store settings");
    let formatter = AmountFormatter::new(settings);

    match cli.command {
        Command::Sanitize { amount } => {
            println!("{}", formatter.sanitize_amount(&amount));
        }
        Command::Format { amount, no_decimals } => {
            println!("{}", formatter.format_amount(&amount, !no_decimals));
        }
        Command::Price { amount } => {
            println!("{}", formatter.display_price(&amount, None));
        }
        Command::Filter { price } => {
            println!("{}", formatter.currency_filter(&price, None));
        }
        Command::Decimals { code } => {
            println!("{}", formatter.decimal_count(code.as_ref()));
        }
        Command::Currencies => {
            for info in CATALOGUE {
                let code = CurrencyCode::new(info.code).into_diagnostic()?;
                println!(
                    "{}\t{}\t{}\t{}",
                    info.code,
                    info.name,
                    code.symbol(),
                    formatter.decimal_count(Some(&code))
                );
            }
        }
        Command::Key { key } => {
            println!("{}", formatter.sanitize_key(&key));
        }
        Command::NotNegative { value } => {
            println!("{}", formatter.number_not_negative(&value));
        }
        Command::Batch { input } => {
            let stdout = io::stdout();
            let result = if input.as_os_str() == "-" {
                run_batch(&formatter, io::stdin().lock(), stdout.lock())
            } else {
                let file = File::open(&input).into_diagnostic()?;
                run_batch(&formatter, file, stdout.lock())
            };
            let summary = result.into_diagnostic()?;
            debug!(?summary, "Batch complete");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_settings(cli: &Cli) -> checkout_amounts::Result<StoreSettings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_file(path)?,
        None => StoreSettings::default(),
    };

    if let Some(currency) = &cli.currency {
        settings.currency = currency.clone();
    }
    if let Some(position) = cli.position {
        settings.currency_position = position;
    }

    if cli.thousands_separator.is_some() || cli.decimal_separator.is_some() {
        let thousands = match &cli.thousands_separator {
            Some(value) => parse_separator(value, "--thousands-separator")?,
            None => settings.separators.thousands(),
        };
        let decimal = match &cli.decimal_separator {
            Some(value) => parse_separator(value, "--decimal-separator")?.ok_or_else(|| {
                FormatError::InvalidSeparators("--decimal-separator cannot be empty".to_string())
            })?,
            None => settings.separators.decimal(),
        };
        settings.separators = Separators::new(thousands, decimal)?;
    }

    Ok(settings)
}
