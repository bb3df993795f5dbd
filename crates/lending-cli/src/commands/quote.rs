use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::amortization::{self, LoanQuoteInput};

/// Arguments for a loan quote
#[derive(Args)]
pub struct QuoteArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate in percentage points (e.g. 9.99 for 9.99% APR)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub term: u32,
}

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate in percentage points (e.g. 9.99 for 9.99% APR)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub term: u32,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = LoanQuoteInput {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_months: args.term,
    };
    let result = amortization::quote(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = LoanQuoteInput {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_months: args.term,
    };
    let result = amortization::build_schedule(&input)?;
    Ok(serde_json::to_value(result)?)
}
