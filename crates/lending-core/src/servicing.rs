//! Loan servicing: the account-side view of a funded loan.
//!
//! Given a loan's origination terms, how many installments have been paid,
//! and an as-of date, derive what the account pages show: remaining
//! balance, repayment progress, next payment, lifecycle status, and the
//! full payment history. Everything is computed from the amortization
//! run-off rather than stored, so balances can never drift from the terms.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{build_schedule, LoanQuoteInput};
use crate::error::LendingError;
use crate::types::{
    with_metadata, ComputationOutput, LoanStatus, LoanType, Money, PaymentStatus, Percent,
};
use crate::LendingResult;

/// Origination terms plus repayment progress for a single loan account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAccountInput {
    pub loan_id: String,
    pub loan_type: LoanType,
    /// Amount funded at origination.
    pub principal: Money,
    /// Contract APR in percentage points.
    pub annual_rate_pct: Percent,
    pub term_months: u32,
    /// Funding date; installments fall due monthly thereafter.
    pub start_date: NaiveDate,
    /// Installments paid to date, in order, no partials.
    pub payments_made: u32,
    /// Date the account state is evaluated at.
    pub as_of: NaiveDate,
}

/// Derived account state for the dashboard and loan detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAccount {
    pub loan_id: String,
    pub loan_type: LoanType,
    pub status: LoanStatus,
    pub monthly_payment: Money,
    pub total_payable: Money,
    pub total_interest: Money,
    pub remaining_balance: Money,
    pub principal_paid: Money,
    /// Share of principal repaid, in percent (the progress bar).
    pub progress_pct: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<NaiveDate>,
    pub next_payment_amount: Money,
    pub payments_made: u32,
    pub payments_remaining: u32,
}

/// One scheduled installment with its settlement state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_id: String,
    pub loan_id: String,
    pub period: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

/// Derive the full account state for a loan.
pub fn service_loan(
    input: &LoanAccountInput,
) -> LendingResult<ComputationOutput<LoanAccount>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_account_input(input)?;

    let quote_input = LoanQuoteInput {
        principal: input.principal,
        annual_rate_pct: input.annual_rate_pct,
        term_months: input.term_months,
    };
    let schedule = build_schedule(&quote_input)?;
    let monthly_payment = schedule[0].payment;
    let total_payable: Money = schedule.iter().map(|p| p.payment).sum();
    let total_interest: Money = schedule.iter().map(|p| p.interest).sum();

    let remaining_balance = if input.payments_made == 0 {
        input.principal
    } else {
        schedule[input.payments_made as usize - 1].ending_balance
    };
    let principal_paid = input.principal - remaining_balance;
    let progress_pct = principal_paid / input.principal * dec!(100);

    let end_date = add_months(input.start_date, input.term_months)?;
    let fully_paid = input.payments_made >= input.term_months;

    let next_payment_date = if fully_paid {
        None
    } else {
        Some(add_months(input.start_date, input.payments_made + 1)?)
    };
    let next_payment_amount = if fully_paid {
        Decimal::ZERO
    } else {
        // Final installment can differ by sub-cent residue
        schedule[input.payments_made as usize].payment
    };

    let status = if fully_paid {
        LoanStatus::Closed
    } else if input.as_of < input.start_date {
        LoanStatus::Pending
    } else {
        LoanStatus::Active
    };

    let periods_due = periods_due_by(input, input.as_of)?;
    if periods_due > input.payments_made {
        warnings.push(format!(
            "Account is {} installment(s) in arrears as of {}",
            periods_due - input.payments_made,
            input.as_of
        ));
    }

    let account = LoanAccount {
        loan_id: input.loan_id.clone(),
        loan_type: input.loan_type,
        status,
        monthly_payment,
        total_payable,
        total_interest,
        remaining_balance,
        principal_paid,
        progress_pct,
        start_date: input.start_date,
        end_date,
        next_payment_date,
        next_payment_amount,
        payments_made: input.payments_made,
        payments_remaining: input.term_months - input.payments_made,
    };

    Ok(with_metadata(
        "Fixed-rate annuity amortization with monthly calendar run-off",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        account,
    ))
}

/// The full installment history: paid, pending, and overdue entries.
pub fn payment_history(input: &LoanAccountInput) -> LendingResult<Vec<ScheduledPayment>> {
    validate_account_input(input)?;

    let schedule = build_schedule(&LoanQuoteInput {
        principal: input.principal,
        annual_rate_pct: input.annual_rate_pct,
        term_months: input.term_months,
    })?;

    let mut history = Vec::with_capacity(schedule.len());
    for installment in &schedule {
        let due_date = add_months(input.start_date, installment.period)?;
        let (status, paid_date) = if installment.period <= input.payments_made {
            (PaymentStatus::Paid, Some(due_date))
        } else if due_date <= input.as_of {
            (PaymentStatus::Overdue, None)
        } else {
            (PaymentStatus::Pending, None)
        };

        history.push(ScheduledPayment {
            payment_id: format!("{}-{:03}", input.loan_id, installment.period),
            loan_id: input.loan_id.clone(),
            period: installment.period,
            due_date,
            amount: installment.payment,
            status,
            paid_date,
        });
    }

    Ok(history)
}

/// Calendar month addition, clamping at month end (Jan 31 + 1 month =
/// Feb 28/29).
fn add_months(date: NaiveDate, months: u32) -> LendingResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LendingError::DateError(format!("{date} + {months} months overflows")))
}

/// Number of installments that have fallen due on or before `as_of`.
fn periods_due_by(input: &LoanAccountInput, as_of: NaiveDate) -> LendingResult<u32> {
    let mut due = 0;
    for period in 1..=input.term_months {
        if add_months(input.start_date, period)? <= as_of {
            due = period;
        } else {
            break;
        }
    }
    Ok(due)
}

fn validate_account_input(input: &LoanAccountInput) -> LendingResult<()> {
    if input.loan_id.is_empty() {
        return Err(LendingError::InvalidInput {
            field: "loan_id".into(),
            reason: "Loan id must not be empty".into(),
        });
    }
    if input.payments_made > input.term_months {
        return Err(LendingError::InvalidInput {
            field: "payments_made".into(),
            reason: format!(
                "Payments made ({}) cannot exceed the term ({})",
                input.payments_made, input.term_months
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A mid-life personal loan: 24 of 36 payments made, current.
    fn seasoned_loan() -> LoanAccountInput {
        LoanAccountInput {
            loan_id: "LN-2024-001".into(),
            loan_type: LoanType::Personal,
            principal: dec!(15000),
            annual_rate_pct: dec!(9.99),
            term_months: 36,
            start_date: date(2024, 3, 15),
            payments_made: 24,
            as_of: date(2026, 3, 20),
        }
    }

    #[test]
    fn test_new_loan_owes_full_principal() {
        let mut input = seasoned_loan();
        input.payments_made = 0;
        input.as_of = date(2024, 3, 15);

        let account = service_loan(&input).unwrap().result;
        assert_eq!(account.remaining_balance, dec!(15000));
        assert_eq!(account.principal_paid, Decimal::ZERO);
        assert_eq!(account.progress_pct, Decimal::ZERO);
        assert_eq!(account.status, LoanStatus::Active);
        assert_eq!(account.next_payment_date, Some(date(2024, 4, 15)));
    }

    #[test]
    fn test_fully_paid_loan_is_closed() {
        let mut input = seasoned_loan();
        input.payments_made = 36;

        let account = service_loan(&input).unwrap().result;
        assert_eq!(account.remaining_balance, Decimal::ZERO);
        assert_eq!(account.status, LoanStatus::Closed);
        assert_eq!(account.next_payment_date, None);
        assert_eq!(account.next_payment_amount, Decimal::ZERO);
        assert_eq!(account.progress_pct, dec!(100));
        assert_eq!(account.payments_remaining, 0);
    }

    #[test]
    fn test_loan_before_funding_is_pending() {
        let mut input = seasoned_loan();
        input.payments_made = 0;
        input.as_of = date(2024, 2, 1);

        let account = service_loan(&input).unwrap().result;
        assert_eq!(account.status, LoanStatus::Pending);
    }

    #[test]
    fn test_balance_declines_with_payments() {
        let base = seasoned_loan();
        let early = service_loan(&LoanAccountInput {
            payments_made: 6,
            ..base.clone()
        })
        .unwrap()
        .result;
        let late = service_loan(&LoanAccountInput {
            payments_made: 30,
            ..base
        })
        .unwrap()
        .result;

        assert!(late.remaining_balance < early.remaining_balance);
        assert!(late.progress_pct > early.progress_pct);
    }

    #[test]
    fn test_end_date_and_next_payment() {
        let account = service_loan(&seasoned_loan()).unwrap().result;
        assert_eq!(account.end_date, date(2027, 3, 15));
        assert_eq!(account.next_payment_date, Some(date(2026, 4, 15)));
        assert!((account.next_payment_amount - dec!(483.94)).abs() < dec!(0.01));
    }

    #[test]
    fn test_month_end_dates_clamp() {
        let input = LoanAccountInput {
            loan_id: "LN-2025-031".into(),
            loan_type: LoanType::Consolidation,
            principal: dec!(9000),
            annual_rate_pct: dec!(7.99),
            term_months: 12,
            start_date: date(2025, 1, 31),
            payments_made: 0,
            as_of: date(2025, 1, 31),
        };

        let account = service_loan(&input).unwrap().result;
        assert_eq!(account.next_payment_date, Some(date(2025, 2, 28)));

        let history = payment_history(&input).unwrap();
        assert_eq!(history[1].due_date, date(2025, 3, 31));
    }

    #[test]
    fn test_arrears_produces_warning() {
        let mut input = seasoned_loan();
        // Two years in but only 20 payments made
        input.payments_made = 20;

        let output = service_loan(&input).unwrap();
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("4 installment(s) in arrears"));
    }

    #[test]
    fn test_current_loan_has_no_warnings() {
        let output = service_loan(&seasoned_loan()).unwrap();
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_payments_made_capped_by_term() {
        let mut input = seasoned_loan();
        input.payments_made = 37;
        let err = service_loan(&input).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { ref field, .. } if field == "payments_made"));
    }

    #[test]
    fn test_history_states_partition_the_term() {
        let input = seasoned_loan();
        let history = payment_history(&input).unwrap();
        assert_eq!(history.len(), 36);

        let paid = history.iter().filter(|p| p.status == PaymentStatus::Paid).count();
        let pending = history.iter().filter(|p| p.status == PaymentStatus::Pending).count();
        assert_eq!(paid, 24);
        assert_eq!(pending, 12);

        // Paid entries settle on their due date
        assert!(history[..24].iter().all(|p| p.paid_date == Some(p.due_date)));
        assert_eq!(history[0].payment_id, "LN-2024-001-001");
    }

    #[test]
    fn test_history_flags_overdue_installments() {
        let mut input = seasoned_loan();
        input.payments_made = 20;

        let history = payment_history(&input).unwrap();
        let overdue: Vec<_> = history
            .iter()
            .filter(|p| p.status == PaymentStatus::Overdue)
            .collect();
        // Periods 21..=24 fell due by as_of but are unpaid
        assert_eq!(overdue.len(), 4);
        assert!(overdue.iter().all(|p| p.paid_date.is_none()));
        assert_eq!(overdue[0].period, 21);
    }
}
