use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_loan(input_json: String) -> NapiResult<String> {
    let input: lending_core::amortization::LoanQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lending_core::amortization::quote(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: lending_core::amortization::LoanQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lending_core::amortization::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[napi]
pub fn standard_products() -> NapiResult<String> {
    let catalog = lending_core::products::standard_products();
    serde_json::to_string(&catalog).map_err(to_napi_error)
}

#[napi]
pub fn product_quote(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct Request {
        loan_type: lending_core::LoanType,
        amount: rust_decimal::Decimal,
        term_months: u32,
    }

    let request: Request = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let catalog = lending_core::products::standard_products();
    let product = lending_core::products::find_product(&catalog, request.loan_type)
        .ok_or_else(|| napi::Error::from_reason("no product for the requested loan type"))?;
    let output =
        lending_core::products::product_quote(product, request.amount, request.term_months)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Servicing
// ---------------------------------------------------------------------------

#[napi]
pub fn service_loan(input_json: String) -> NapiResult<String> {
    let input: lending_core::servicing::LoanAccountInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lending_core::servicing::service_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn payment_history(input_json: String) -> NapiResult<String> {
    let input: lending_core::servicing::LoanAccountInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lending_core::servicing::payment_history(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
