use chrono::NaiveDate;
use lending_core::servicing::{payment_history, service_loan, LoanAccountInput};
use lending_core::{LoanStatus, LoanType, PaymentStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A current business loan one year into a five-year term.
fn business_loan() -> LoanAccountInput {
    LoanAccountInput {
        loan_id: "LN-2025-014".into(),
        loan_type: LoanType::Business,
        principal: dec!(80000),
        annual_rate_pct: dec!(10.49),
        term_months: 60,
        start_date: date(2025, 8, 1),
        payments_made: 12,
        as_of: date(2026, 8, 28),
    }
}

#[test]
fn test_account_state_is_internally_consistent() {
    let output = service_loan(&business_loan()).unwrap();
    let account = &output.result;

    assert_eq!(account.status, LoanStatus::Active);
    assert_eq!(account.payments_made + account.payments_remaining, 60);
    assert_eq!(
        account.principal_paid + account.remaining_balance,
        dec!(80000)
    );
    assert!(account.progress_pct > Decimal::ZERO);
    assert!(account.progress_pct < dec!(100));
    assert_eq!(account.end_date, date(2030, 8, 1));

    // Envelope carries the methodology and assumptions like every model
    assert!(output.methodology.contains("annuity"));
    assert_eq!(output.assumptions["loan_id"], "LN-2025-014");
}

#[test]
fn test_early_payments_are_mostly_interest() {
    let input = business_loan();
    let history = payment_history(&input).unwrap();
    let output = service_loan(&input).unwrap().result;

    // After 12 of 60 payments, less than 20% of principal is repaid even
    // though 20% of the installments are behind us
    assert!(output.progress_pct < dec!(20));
    assert_eq!(
        history.iter().filter(|p| p.status == PaymentStatus::Paid).count(),
        12
    );
}

#[test]
fn test_history_amounts_sum_to_total_payable() {
    let input = business_loan();
    let account = service_loan(&input).unwrap().result;
    let history = payment_history(&input).unwrap();

    let total: Decimal = history.iter().map(|p| p.amount).sum();
    assert_eq!(total, account.total_payable);
}

#[test]
fn test_zero_rate_loan_services_cleanly() {
    let input = LoanAccountInput {
        loan_id: "LN-2025-099".into(),
        loan_type: LoanType::Personal,
        principal: dec!(12000),
        annual_rate_pct: dec!(0),
        term_months: 12,
        payments_made: 5,
        start_date: date(2025, 1, 10),
        as_of: date(2025, 6, 15),
    };

    let account = service_loan(&input).unwrap().result;
    assert_eq!(account.monthly_payment, dec!(1000));
    assert_eq!(account.total_interest, Decimal::ZERO);
    assert_eq!(account.remaining_balance, dec!(7000));
}
