use thiserror::Error;

/// Coarse classification of a [`FieldError`], for callers (e.g. a form
/// frontend) that render different failures differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The value has the wrong shape (e.g. text where a number is required).
    Type,
    /// The value is outside the configured bounds.
    Range,
    /// The date is not in the future, or does not parse.
    Temporal,
    /// The request names an unknown field or omits a required one.
    Request,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{field} must be a real number")]
    NotARealNumber { field: &'static str },
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: f64 },
    #[error("{field} cannot exceed {max}")]
    AboveMaximum { field: &'static str, max: f64 },
    #[error("{field} must be a future date")]
    NotAFutureDate { field: &'static str },
    #[error("{field} does not match the date format {format}")]
    InvalidDateFormat {
        field: &'static str,
        format: &'static str,
    },
    #[error("unknown field {name}")]
    UnknownField { name: String },
    #[error("missing required field {name}")]
    MissingField { name: &'static str },
}

impl FieldError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            FieldError::NotARealNumber { .. } => ViolationKind::Type,
            FieldError::BelowMinimum { .. } | FieldError::AboveMaximum { .. } => {
                ViolationKind::Range
            }
            FieldError::NotAFutureDate { .. } | FieldError::InvalidDateFormat { .. } => {
                ViolationKind::Temporal
            }
            FieldError::UnknownField { .. } | FieldError::MissingField { .. } => {
                ViolationKind::Request
            }
        }
    }

    /// Title for a user-facing error dialog; the message body is `Display`.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ViolationKind::Type => "Type Error",
            ViolationKind::Range | ViolationKind::Temporal => "Value Error",
            ViolationKind::Request => "Request Error",
        }
    }
}
