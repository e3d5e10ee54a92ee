use std::collections::HashMap;

use validation::{FieldError, FieldValue};

use crate::european_option::EuropeanOption;

/// The only keys a construction request may carry.
pub const FIELD_NAMES: [&str; 6] = [
    "price",
    "strike",
    "maturity",
    "volatility",
    "risk_free_rate",
    "dividend_yield",
];

/// Best-effort coercion of raw user input: anything that parses as a
/// number becomes one, everything else stays text (e.g. a date string)
/// for the guards to judge.
pub fn coerce_params(raw: &HashMap<String, String>) -> HashMap<String, FieldValue> {
    raw.iter()
        .map(|(key, value)| {
            let coerced = match value.parse::<f64>() {
                Ok(number) => FieldValue::Number(number),
                Err(_) => FieldValue::Text(value.clone()),
            };
            (key.clone(), coerced)
        })
        .collect()
}

impl EuropeanOption {
    /// Construction from a named-field request. `dividend_yield` is
    /// optional and defaults to 0; the other five fields are required.
    pub fn from_request(request: &HashMap<String, FieldValue>) -> Result<Self, FieldError> {
        for name in request.keys() {
            if !FIELD_NAMES.contains(&name.as_str()) {
                return Err(FieldError::UnknownField { name: name.clone() });
            }
        }
        let required = |name: &'static str| {
            request
                .get(name)
                .cloned()
                .ok_or(FieldError::MissingField { name })
        };
        let dividend_yield = request
            .get("dividend_yield")
            .cloned()
            .unwrap_or(FieldValue::Number(0.0));

        EuropeanOption::new(
            required("price")?,
            required("strike")?,
            required("volatility")?,
            required("risk_free_rate")?,
            required("maturity")?,
            dividend_yield,
        )
    }
}
