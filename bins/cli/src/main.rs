//! fxdesk command-line converter
//!
//! Thin front end over the conversion engine: parses arguments, fills gaps
//! from remembered preferences, prints results.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fxdesk_core::currency::{filter_labels, format_amount};
use fxdesk_core::input::ConversionForm;
use fxdesk_core::preferences::{
    PREF_FEE_PERCENTAGE, PREF_LAST_AMOUNT, PREF_LAST_CURRENCY, Preferences,
};
use fxdesk_core::{ConversionEngine, Direction, ExchangeRateTable};
use fxdesk_shared::config::PreferencesConfig;
use fxdesk_shared::{AppConfig, AppError, AppResult};
use fxdesk_store::JsonFilePreferenceStore;

#[derive(Parser, Debug)]
#[command(name = "fxdesk", version, about = "Convert between USD and foreign currencies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an amount between USD and a foreign currency
    Convert(ConvertArgs),
    /// List currencies and rates, optionally filtered by a search term
    List {
        /// Case-insensitive text to search for in currency labels
        query: Option<String>,
    },
    /// Show the remembered inputs
    Prefs,
}

#[derive(Args, Debug, Default)]
struct ConvertArgs {
    /// Amount to convert (defaults to the last amount used)
    amount: Option<String>,

    /// Currency label, e.g. "Saudi Arabia (SAR)" (defaults to the last one used)
    #[arg(long, short)]
    currency: Option<String>,

    /// Convert from the foreign currency to USD
    #[arg(long)]
    to_usd: bool,

    /// Fee percentage to deduct from the converted amount
    #[arg(long)]
    fee: Option<String>,

    /// Do not deduct a fee, even if configured
    #[arg(long, conflicts_with = "fee")]
    no_fee: bool,

    /// Print the full-precision result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1)))
        }
    }
}

fn run(command: Command, config: &AppConfig) -> AppResult<String> {
    let engine = ConversionEngine::with_builtin_rates();
    match command {
        Command::Convert(args) => convert(&engine, args, config),
        Command::List { query } => Ok(list(engine.table(), query.as_deref().unwrap_or(""))),
        Command::Prefs => show_preferences(config),
    }
}

fn convert(engine: &ConversionEngine, args: ConvertArgs, config: &AppConfig) -> AppResult<String> {
    let mut store = open_store(&config.preferences);
    let mut prefs = load_preferences(store.as_ref(), config)?;

    let currency = args
        .currency
        .or_else(|| prefs.restored_currency(engine.table()).map(str::to_string))
        .ok_or_else(|| AppError::Validation("Please select a valid currency.".to_string()))?;

    let form = ConversionForm {
        amount: args.amount.unwrap_or_else(|| prefs.last_amount.clone()),
        currency,
        direction: if args.to_usd {
            Direction::ForeignToUsd
        } else {
            Direction::UsdToForeign
        },
        apply_fee: !args.no_fee && (args.fee.is_some() || config.converter.apply_fee),
        fee: args.fee.unwrap_or_else(|| prefs.fee_percentage.clone()),
    };

    let request = form.to_request(engine.table())?;
    let result = engine.convert(&request)?;
    info!(currency = %form.currency, direction = ?form.direction, "conversion complete");

    if let Some(store) = store.as_mut() {
        prefs.remember(&form);
        if let Err(err) = prefs.save(store) {
            warn!(error = %err, "failed to save preferences");
        }
    }

    if args.json {
        serde_json::to_string_pretty(&result).map_err(|err| AppError::Internal(err.to_string()))
    } else {
        Ok(result.to_string())
    }
}

fn list(table: &ExchangeRateTable, query: &str) -> String {
    let rows: Vec<String> = filter_labels(table, query)
        .into_iter()
        .filter_map(|label| {
            table
                .rate(label)
                .map(|rate| format!("{label:<42} {:>12}", format_amount(rate)))
        })
        .collect();

    if rows.is_empty() {
        format!("No currencies match '{query}'")
    } else {
        rows.join("\n")
    }
}

fn show_preferences(config: &AppConfig) -> AppResult<String> {
    let store = open_store(&config.preferences);
    let prefs = load_preferences(store.as_ref(), config)?;
    Ok(format!(
        "{PREF_LAST_CURRENCY}: {}\n{PREF_LAST_AMOUNT}: {}\n{PREF_FEE_PERCENTAGE}: {}",
        prefs.last_currency.as_deref().unwrap_or("(none)"),
        prefs.last_amount,
        prefs.fee_percentage
    ))
}

fn open_store(config: &PreferencesConfig) -> Option<JsonFilePreferenceStore> {
    if !config.enabled {
        return None;
    }
    match JsonFilePreferenceStore::open(&config.path) {
        Ok(store) => Some(store),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable preference file");
            Some(JsonFilePreferenceStore::empty(&config.path))
        }
    }
}

fn load_preferences(
    store: Option<&JsonFilePreferenceStore>,
    config: &AppConfig,
) -> AppResult<Preferences> {
    let defaults = Preferences::with_defaults(
        config.converter.default_amount.clone(),
        config.converter.default_fee_percentage.clone(),
    );
    match store {
        Some(store) => Ok(Preferences::load(store, defaults)?),
        None => Ok(defaults),
    }
}
