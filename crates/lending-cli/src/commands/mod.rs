pub mod account;
pub mod products;
pub mod quote;
