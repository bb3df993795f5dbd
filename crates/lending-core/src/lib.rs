pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "products")]
pub mod products;

#[cfg(feature = "servicing")]
pub mod servicing;

pub use error::LendingError;
pub use types::*;

/// Standard result type for all lending operations
pub type LendingResult<T> = Result<T, LendingError>;
