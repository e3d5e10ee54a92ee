pub mod models;

pub use models::DerivativeParameter;
