//! The loan product catalog and per-product quoting.
//!
//! Products carry the amount/term/rate ranges the front-end renders and
//! the headline APR used for estimates before underwriting. Quoting against
//! a product enforces its ranges, then delegates to the annuity math in
//! [`crate::amortization`].

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{quote, LoanQuote, LoanQuoteInput};
use crate::error::LendingError;
use crate::types::{LoanType, Money, Percent};
use crate::LendingResult;

/// A loan product as marketed: ranges, rates, and selling points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub loan_type: LoanType,
    pub min_amount: Money,
    pub max_amount: Money,
    pub min_term_months: u32,
    pub max_term_months: u32,
    /// Best advertised APR ("from X%").
    pub min_rate_pct: Percent,
    pub max_rate_pct: Percent,
    /// Representative APR quoted before underwriting.
    pub headline_rate_pct: Percent,
    pub features: Vec<String>,
}

/// A quote bound to a product: the applied rate plus the annuity output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuote {
    pub product_id: String,
    pub loan_type: LoanType,
    pub amount: Money,
    pub term_months: u32,
    pub rate_pct: Percent,
    #[serde(flatten)]
    pub quote: LoanQuote,
}

/// The catalog as currently marketed.
pub fn standard_products() -> Vec<LoanProduct> {
    vec![
        LoanProduct {
            id: "personal".into(),
            name: "Personal Loan".into(),
            description: "Funds for life's big moments, from home projects to unexpected expenses.".into(),
            loan_type: LoanType::Personal,
            min_amount: dec!(1000),
            max_amount: dec!(100000),
            min_term_months: 6,
            max_term_months: 84,
            min_rate_pct: dec!(5.99),
            max_rate_pct: dec!(24.99),
            headline_rate_pct: dec!(9.99),
            features: vec![
                "No origination fees or prepayment penalties".into(),
                "Fixed rate and payment for the full term".into(),
                "Funds as soon as the next business day".into(),
            ],
        },
        LoanProduct {
            id: "business".into(),
            name: "Business Loan".into(),
            description: "Working capital and growth funding for small businesses.".into(),
            loan_type: LoanType::Business,
            min_amount: dec!(1000),
            max_amount: dec!(250000),
            min_term_months: 6,
            max_term_months: 84,
            min_rate_pct: dec!(6.99),
            max_rate_pct: dec!(24.99),
            headline_rate_pct: dec!(10.49),
            features: vec![
                "Borrow up to $250,000".into(),
                "No collateral required under $100,000".into(),
                "Dedicated business support team".into(),
            ],
        },
        LoanProduct {
            id: "consolidation".into(),
            name: "Debt Consolidation".into(),
            description: "Roll multiple balances into one fixed monthly payment.".into(),
            loan_type: LoanType::Consolidation,
            min_amount: dec!(1000),
            max_amount: dec!(100000),
            min_term_months: 6,
            max_term_months: 84,
            min_rate_pct: dec!(5.99),
            max_rate_pct: dec!(19.99),
            headline_rate_pct: dec!(7.99),
            features: vec![
                "One payment instead of many".into(),
                "Direct payoff to existing creditors".into(),
                "Lower rates than typical credit cards".into(),
            ],
        },
    ]
}

/// Look up a product by its loan type.
pub fn find_product(products: &[LoanProduct], loan_type: LoanType) -> Option<&LoanProduct> {
    products.iter().find(|p| p.loan_type == loan_type)
}

/// Quote a loan against a product at its headline rate, enforcing the
/// product's amount and term ranges.
pub fn product_quote(
    product: &LoanProduct,
    amount: Money,
    term_months: u32,
) -> LendingResult<ProductQuote> {
    if amount < product.min_amount || amount > product.max_amount {
        return Err(LendingError::InvalidInput {
            field: "amount".into(),
            reason: format!(
                "{} amount must be between {} and {}",
                product.name, product.min_amount, product.max_amount
            ),
        });
    }
    if term_months < product.min_term_months || term_months > product.max_term_months {
        return Err(LendingError::InvalidInput {
            field: "term_months".into(),
            reason: format!(
                "{} term must be between {} and {} months",
                product.name, product.min_term_months, product.max_term_months
            ),
        });
    }

    let loan_quote = quote(&LoanQuoteInput {
        principal: amount,
        annual_rate_pct: product.headline_rate_pct,
        term_months,
    })?;

    Ok(ProductQuote {
        product_id: product.id.clone(),
        loan_type: product.loan_type,
        amount,
        term_months,
        rate_pct: product.headline_rate_pct,
        quote: loan_quote,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_has_three_products() {
        let products = standard_products();
        assert_eq!(products.len(), 3);
        assert!(find_product(&products, LoanType::Personal).is_some());
        assert!(find_product(&products, LoanType::Business).is_some());
        assert!(find_product(&products, LoanType::Consolidation).is_some());
    }

    #[test]
    fn test_catalog_ranges_are_coherent() {
        for p in standard_products() {
            assert!(p.min_amount > Decimal::ZERO);
            assert!(p.min_amount < p.max_amount);
            assert!(p.min_term_months >= 1);
            assert!(p.min_term_months < p.max_term_months);
            assert!(p.min_rate_pct <= p.headline_rate_pct);
            assert!(p.headline_rate_pct <= p.max_rate_pct);
        }
    }

    #[test]
    fn test_personal_quote_at_headline_rate() {
        let products = standard_products();
        let personal = find_product(&products, LoanType::Personal).unwrap();
        let pq = product_quote(personal, dec!(15000), 36).unwrap();

        assert_eq!(pq.rate_pct, dec!(9.99));
        assert!((pq.quote.monthly_payment - dec!(483.94)).abs() < dec!(0.01));
    }

    #[test]
    fn test_amount_outside_range_rejected() {
        let products = standard_products();
        let personal = find_product(&products, LoanType::Personal).unwrap();
        let err = product_quote(personal, dec!(500000), 36).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { ref field, .. } if field == "amount"));
    }

    #[test]
    fn test_term_outside_range_rejected() {
        let products = standard_products();
        let business = find_product(&products, LoanType::Business).unwrap();
        let err = product_quote(business, dec!(50000), 120).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { ref field, .. } if field == "term_months"));
    }

    #[test]
    fn test_business_accepts_larger_amounts() {
        let products = standard_products();
        let business = find_product(&products, LoanType::Business).unwrap();
        assert!(product_quote(business, dec!(250000), 60).is_ok());
    }
}
