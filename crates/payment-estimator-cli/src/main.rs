mod commands;
mod input;
mod logging;
mod output;
mod preferences;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use commands::calculate::CalculateArgs;
use commands::finance::FinanceArgs;
use commands::format::FormatArgs;
use commands::lease::LeaseArgs;
use commands::theme::ThemeArgs;
use payment_estimator_core::PaymentError;
use preferences::{JsonFileStore, ThemeSetting};

/// Vehicle lease and finance payment quotes
#[derive(Parser)]
#[command(
    name = "payest",
    version,
    about = "Vehicle lease and finance payment quotes",
    long_about = "Estimate the monthly payment and due-at-signing amount for a vehicle \
                  lease or retail loan. Fields accept free text such as \"$32,500\" or \
                  \"6.5%\"; anything unreadable counts as zero."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter (e.g. "debug"); defaults to RUST_LOG, then "warn"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Preferences file (defaults to $PAYEST_PREFS, then .payest-prefs.json)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// Use the dark theme when no theme has been saved
    #[arg(long, global = true)]
    prefer_dark: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a 36-month lease
    Lease(LeaseArgs),
    /// Quote a retail installment loan
    Finance(FinanceArgs),
    /// Quote from a tagged JSON request
    Calculate(CalculateArgs),
    /// Reformat a field value the way the form does on blur
    Format(FormatArgs),
    /// Show or change the saved display theme
    Theme(ThemeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref());

    let store = JsonFileStore::resolve(cli.prefs.as_deref());
    let mut theme = ThemeSetting::load(store, cli.prefer_dark);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Lease(args) => commands::lease::run_lease(args),
        Commands::Finance(args) => commands::finance::run_finance(args),
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Theme(args) => commands::theme::run_theme(args, &mut theme),
        Commands::Version => {
            println!("payest {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, theme.current());
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(exit_code(e.as_ref()));
        }
    }
}

/// 2 when the user can fix the failure by changing an input, 1 otherwise.
fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<PaymentError>() {
        Some(e) if e.is_validation() => 2,
        _ => 1,
    }
}
