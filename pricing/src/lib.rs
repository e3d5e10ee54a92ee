pub mod analytic;
pub mod common;
pub mod error;
pub mod european_option;
pub mod request;
pub mod simulation;

pub use error::PricingError;
pub use european_option::EuropeanOption;
