use clap::Args;
use serde_json::Value;

use lending_core::servicing::{self, LoanAccountInput};

use crate::input;

/// Arguments for deriving loan account state
#[derive(Args)]
pub struct AccountArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for listing payment history
#[derive(Args)]
pub struct PaymentsArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_account(args: AccountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let account_input: LoanAccountInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for account state".into());
    };
    let result = servicing::service_loan(&account_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payments(args: PaymentsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let account_input: LoanAccountInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for payment history".into());
    };
    let result = servicing::payment_history(&account_input)?;
    Ok(serde_json::to_value(result)?)
}
