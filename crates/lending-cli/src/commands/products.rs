use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lending_core::products::{find_product, product_quote, standard_products};
use lending_core::LoanType;

/// Arguments for listing the product catalog
#[derive(Args)]
pub struct ProductsArgs {
    /// Restrict to one product type (personal, business, consolidation)
    #[arg(long = "type", value_parser = parse_loan_type)]
    pub loan_type: Option<LoanType>,
}

/// Arguments for a product-bound quote
#[derive(Args)]
pub struct ProductQuoteArgs {
    /// Product type (personal, business, consolidation)
    #[arg(long, value_parser = parse_loan_type)]
    pub product: LoanType,

    /// Amount borrowed
    #[arg(long)]
    pub amount: Decimal,

    /// Term in months
    #[arg(long)]
    pub term: u32,
}

fn parse_loan_type(s: &str) -> Result<LoanType, String> {
    match s.to_ascii_lowercase().as_str() {
        "personal" => Ok(LoanType::Personal),
        "business" => Ok(LoanType::Business),
        "consolidation" => Ok(LoanType::Consolidation),
        other => Err(format!(
            "unknown product type '{other}' (expected personal, business, or consolidation)"
        )),
    }
}

pub fn run_products(args: ProductsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut catalog = standard_products();
    if let Some(loan_type) = args.loan_type {
        catalog.retain(|p| p.loan_type == loan_type);
    }
    Ok(serde_json::to_value(catalog)?)
}

pub fn run_product_quote(args: ProductQuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = standard_products();
    let product = find_product(&catalog, args.product)
        .ok_or_else(|| format!("no product in the catalog for type '{}'", args.product.as_str()))?;
    let result = product_quote(product, args.amount, args.term)?;
    Ok(serde_json::to_value(result)?)
}
