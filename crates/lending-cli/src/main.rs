mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::account::{AccountArgs, PaymentsArgs};
use commands::products::{ProductQuoteArgs, ProductsArgs};
use commands::quote::{QuoteArgs, ScheduleArgs};

/// QuickFund consumer lending calculations
#[derive(Parser)]
#[command(
    name = "qfl",
    version,
    about = "QuickFund consumer lending calculations",
    long_about = "A CLI for QuickFund's lending math with decimal precision. \
                  Quotes fixed-rate loans, builds amortization schedules, lists \
                  the product catalog, and derives loan account state and \
                  payment history."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a fixed-rate loan (monthly payment, total payable, total interest)
    Quote(QuoteArgs),
    /// Build the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// List the loan product catalog
    Products(ProductsArgs),
    /// Quote against a product at its headline rate
    ProductQuote(ProductQuoteArgs),
    /// Derive account state for a funded loan
    Account(AccountArgs),
    /// List the scheduled payment history for a funded loan
    Payments(PaymentsArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Schedule(args) => commands::quote::run_schedule(args),
        Commands::Products(args) => commands::products::run_products(args),
        Commands::ProductQuote(args) => commands::products::run_product_quote(args),
        Commands::Account(args) => commands::account::run_account(args),
        Commands::Payments(args) => commands::account::run_payments(args),
        Commands::Version => {
            println!("qfl {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
