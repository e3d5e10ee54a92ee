mod error;
mod guards;
mod value;

pub use error::{FieldError, ViolationKind};
pub use guards::{FutureDate, RealNumber};
pub use value::FieldValue;
