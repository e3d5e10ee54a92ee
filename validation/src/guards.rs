use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::FieldError;
use crate::value::FieldValue;

/// Guard for a real-valued field with optional inclusive bounds.
///
/// A guard is pure configuration: the owning entity calls [`validate`]
/// on every write (constructor or later reassignment) and, on success,
/// clears the cache slots declared in the sterilize set. Centralizing
/// both steps in one write path keeps derived values from going stale.
///
/// [`validate`]: RealNumber::validate
#[derive(Debug, Clone, Copy)]
pub struct RealNumber {
    property_name: &'static str,
    min_value: Option<f64>,
    max_value: Option<f64>,
    sterilize_attr: &'static [&'static str],
}

impl RealNumber {
    pub const fn new(property_name: &'static str) -> Self {
        Self {
            property_name,
            min_value: None,
            max_value: None,
            sterilize_attr: &[],
        }
    }

    pub const fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub const fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub const fn sterilize(mut self, attrs: &'static [&'static str]) -> Self {
        self.sterilize_attr = attrs;
        self
    }

    pub fn property_name(&self) -> &'static str {
        self.property_name
    }

    /// Cache slots the owning entity must clear after a successful write.
    pub fn sterilize_attr(&self) -> &'static [&'static str] {
        self.sterilize_attr
    }

    /// Accepts only [`FieldValue::Number`] within the configured bounds.
    /// Textual input is rejected as a type violation, never parsed.
    pub fn validate(&self, value: &FieldValue) -> Result<f64, FieldError> {
        let number = match value {
            FieldValue::Number(v) => *v,
            _ => {
                return Err(FieldError::NotARealNumber {
                    field: self.property_name,
                })
            }
        };
        // NaN would slip through both bound checks
        if number.is_nan() {
            return Err(FieldError::NotARealNumber {
                field: self.property_name,
            });
        }
        if let Some(min) = self.min_value {
            if number < min {
                return Err(FieldError::BelowMinimum {
                    field: self.property_name,
                    min,
                });
            }
        }
        if let Some(max) = self.max_value {
            if number > max {
                return Err(FieldError::AboveMaximum {
                    field: self.property_name,
                    max,
                });
            }
        }
        Ok(number)
    }
}

/// Guard for a calendar-date field that must lie strictly in the future.
///
/// Three input shapes are accepted and normalized to a plain date:
/// a date-time (compared against the current UTC date-time), a plain
/// date (compared against today's UTC date) and a text string parsed
/// with the configured format.
#[derive(Debug, Clone, Copy)]
pub struct FutureDate {
    property_name: &'static str,
    date_format: &'static str,
    sterilize_attr: &'static [&'static str],
}

impl FutureDate {
    pub const fn new(property_name: &'static str) -> Self {
        Self {
            property_name,
            date_format: "%Y-%m-%d",
            sterilize_attr: &[],
        }
    }

    pub const fn date_format(mut self, format: &'static str) -> Self {
        self.date_format = format;
        self
    }

    pub const fn sterilize(mut self, attrs: &'static [&'static str]) -> Self {
        self.sterilize_attr = attrs;
        self
    }

    pub fn property_name(&self) -> &'static str {
        self.property_name
    }

    pub fn sterilize_attr(&self) -> &'static [&'static str] {
        self.sterilize_attr
    }

    pub fn validate(&self, value: &FieldValue) -> Result<NaiveDate, FieldError> {
        let now = Utc::now().naive_utc();
        let not_a_future_date = FieldError::NotAFutureDate {
            field: self.property_name,
        };
        match value {
            FieldValue::DateTime(dt) => {
                if *dt > now {
                    Ok(dt.date())
                } else {
                    Err(not_a_future_date)
                }
            }
            FieldValue::Date(d) => {
                if *d > now.date() {
                    Ok(*d)
                } else {
                    Err(not_a_future_date)
                }
            }
            FieldValue::Text(s) => {
                let parsed = NaiveDate::parse_from_str(s, self.date_format).map_err(|_| {
                    FieldError::InvalidDateFormat {
                        field: self.property_name,
                        format: self.date_format,
                    }
                })?;
                // a parsed date stands for its midnight
                if parsed.and_time(NaiveTime::MIN) > now {
                    Ok(parsed)
                } else {
                    Err(not_a_future_date)
                }
            }
            FieldValue::Number(_) => Err(not_a_future_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const PRICE: RealNumber = RealNumber::new("price")
        .min_value(-10.0)
        .max_value(100.0)
        .sterilize(&["bs_price", "mc_price"]);

    const MATURITY: FutureDate = FutureDate::new("maturity").sterilize(&["bs_price"]);

    #[test]
    fn real_number_accepts_values_within_bounds() {
        assert_eq!(PRICE.validate(&FieldValue::Number(15.0)), Ok(15.0));
        assert_eq!(PRICE.validate(&FieldValue::Number(15.5)), Ok(15.5));
        assert_eq!(PRICE.validate(&FieldValue::Number(-10.0)), Ok(-10.0));
        assert_eq!(PRICE.validate(&FieldValue::Number(100.0)), Ok(100.0));
    }

    #[test]
    fn real_number_rejects_values_outside_bounds() {
        assert_eq!(
            PRICE.validate(&FieldValue::Number(-12.0)),
            Err(FieldError::BelowMinimum {
                field: "price",
                min: -10.0
            })
        );
        assert_eq!(
            PRICE.validate(&FieldValue::Number(101.0)),
            Err(FieldError::AboveMaximum {
                field: "price",
                max: 100.0
            })
        );
    }

    #[test]
    fn real_number_rejects_text_without_parsing() {
        // "10" would be in range as a number, but text is a type violation
        assert_eq!(
            PRICE.validate(&FieldValue::from("10")),
            Err(FieldError::NotARealNumber { field: "price" })
        );
    }

    #[test]
    fn real_number_rejects_nan() {
        assert_eq!(
            PRICE.validate(&FieldValue::Number(f64::NAN)),
            Err(FieldError::NotARealNumber { field: "price" })
        );
        // an unbounded guard rejects it too
        let rate = RealNumber::new("risk_free_rate");
        assert_eq!(
            rate.validate(&FieldValue::Number(f64::NAN)),
            Err(FieldError::NotARealNumber {
                field: "risk_free_rate"
            })
        );
    }

    #[test]
    fn real_number_unbounded_by_default() {
        let rate = RealNumber::new("risk_free_rate");
        assert_eq!(rate.validate(&FieldValue::Number(-0.5)), Ok(-0.5));
        assert_eq!(rate.validate(&FieldValue::Number(1.0e9)), Ok(1.0e9));
    }

    #[test]
    fn guard_declares_its_sterilize_set() {
        assert_eq!(PRICE.sterilize_attr(), &["bs_price", "mc_price"]);
        assert_eq!(PRICE.property_name(), "price");
        assert_eq!(MATURITY.sterilize_attr(), &["bs_price"]);
    }

    #[test]
    fn future_date_accepts_a_later_plain_date() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        assert_eq!(MATURITY.validate(&FieldValue::Date(tomorrow)), Ok(tomorrow));
    }

    #[test]
    fn future_date_rejects_today_and_earlier_plain_dates() {
        let today = Utc::now().date_naive();
        for date in [today, today - Duration::days(1)] {
            assert_eq!(
                MATURITY.validate(&FieldValue::Date(date)),
                Err(FieldError::NotAFutureDate { field: "maturity" })
            );
        }
    }

    #[test]
    fn future_date_normalizes_a_date_time_to_its_date() {
        let next_week = Utc::now().naive_utc() + Duration::days(7);
        assert_eq!(
            MATURITY.validate(&FieldValue::DateTime(next_week)),
            Ok(next_week.date())
        );

        let an_hour_ago = Utc::now().naive_utc() - Duration::hours(1);
        assert_eq!(
            MATURITY.validate(&FieldValue::DateTime(an_hour_ago)),
            Err(FieldError::NotAFutureDate { field: "maturity" })
        );
    }

    #[test]
    fn future_date_parses_text_with_the_configured_format() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let text = tomorrow.format("%Y-%m-%d").to_string();
        assert_eq!(MATURITY.validate(&FieldValue::Text(text)), Ok(tomorrow));

        let yesterday = Utc::now().date_naive() - Duration::days(1);
        let text = yesterday.format("%Y-%m-%d").to_string();
        assert_eq!(
            MATURITY.validate(&FieldValue::Text(text)),
            Err(FieldError::NotAFutureDate { field: "maturity" })
        );
    }

    #[test]
    fn future_date_rejects_unparsable_text() {
        assert_eq!(
            MATURITY.validate(&FieldValue::from("01.01.2050")),
            Err(FieldError::InvalidDateFormat {
                field: "maturity",
                format: "%Y-%m-%d"
            })
        );
    }

    #[test]
    fn future_date_rejects_a_number() {
        assert_eq!(
            MATURITY.validate(&FieldValue::Number(2050.0)),
            Err(FieldError::NotAFutureDate { field: "maturity" })
        );
    }

    #[test]
    fn custom_date_format() {
        let guard = FutureDate::new("maturity").date_format("%d/%m/%Y");
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let text = tomorrow.format("%d/%m/%Y").to_string();
        assert_eq!(guard.validate(&FieldValue::Text(text)), Ok(tomorrow));
        assert_eq!(
            guard.validate(&FieldValue::from("2050-01-01")),
            Err(FieldError::InvalidDateFormat {
                field: "maturity",
                format: "%d/%m/%Y"
            })
        );
    }
}
