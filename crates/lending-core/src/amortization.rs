//! Fixed-rate amortization: the annuity payment formula and the
//! per-installment balance run-off it implies.
//!
//! This is the math behind both the public rate-estimation calculator and
//! the account pages; every derived figure elsewhere in the crate traces
//! back to [`quote`] or [`build_schedule`]. All arithmetic uses
//! `rust_decimal::Decimal`; rounding to cents is a presentation concern of
//! the caller.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::types::{Money, Percent, Rate};
use crate::LendingResult;

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Input triple for a loan quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    /// Amount borrowed, before interest.
    pub principal: Money,
    /// Nominal annual rate in percentage points (9.99 = 9.99% APR).
    pub annual_rate_pct: Percent,
    /// Number of equal monthly installments.
    pub term_months: u32,
}

/// The fixed monthly installment and the totals it implies.
///
/// `total_payable` and `total_interest` are derived from the payment at
/// construction and never stored independently, so they cannot drift from
/// the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub monthly_payment: Money,
    pub total_payable: Money,
    pub total_interest: Money,
}

/// One month of the balance run-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based month number.
    pub period: u32,
    pub beginning_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub ending_balance: Money,
}

/// Convert a nominal annual percentage to the monthly decimal rate.
pub fn monthly_rate(annual_rate_pct: Percent) -> Rate {
    annual_rate_pct / PERCENT_DIVISOR / MONTHS_PER_YEAR
}

/// Quote a fixed-rate loan: monthly payment, total payable, total interest.
///
/// Uses the standard annuity formula
/// `P * r * (1+r)^n / ((1+r)^n - 1)`; a zero rate degenerates to
/// straight-line repayment `P / n`. Pure and stateless: identical inputs
/// always produce identical outputs.
pub fn quote(input: &LoanQuoteInput) -> LendingResult<LoanQuote> {
    validate_quote_input(input)?;

    let n = Decimal::from(input.term_months);
    let r = monthly_rate(input.annual_rate_pct);

    let monthly_payment = if r.is_zero() {
        input.principal / n
    } else {
        let growth = (Decimal::ONE + r).powd(n);
        let annuity_factor = growth - Decimal::ONE;
        if annuity_factor.is_zero() {
            return Err(LendingError::DivisionByZero {
                context: "annuity factor".into(),
            });
        }
        input.principal * r * growth / annuity_factor
    };

    let total_payable = monthly_payment * n;
    let total_interest = total_payable - input.principal;

    Ok(LoanQuote {
        monthly_payment,
        total_payable,
        total_interest,
    })
}

/// Month-by-month schedule splitting each installment into interest and
/// principal against the declining balance.
///
/// The closed-form payment carries sub-cent residue across the term; the
/// final installment absorbs it so the ending balance lands exactly on
/// zero.
pub fn build_schedule(input: &LoanQuoteInput) -> LendingResult<Vec<Installment>> {
    let loan_quote = quote(input)?;
    let r = monthly_rate(input.annual_rate_pct);
    let payment = loan_quote.monthly_payment;

    let mut schedule: Vec<Installment> = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;

    for period in 1..=input.term_months {
        let beginning_balance = balance;
        let interest = beginning_balance * r;

        // Non-final rows carry the closed-form payment bit-exactly; the
        // final row repays whatever balance remains.
        let (row_payment, principal) = if period == input.term_months {
            (interest + beginning_balance, beginning_balance)
        } else {
            (payment, payment - interest)
        };
        balance = beginning_balance - principal;

        schedule.push(Installment {
            period,
            beginning_balance,
            payment: row_payment,
            interest,
            principal,
            ending_balance: balance,
        });
    }

    Ok(schedule)
}

fn validate_quote_input(input: &LoanQuoteInput) -> LendingResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.term_months == 0 {
        return Err(LendingError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    Ok(())
}
