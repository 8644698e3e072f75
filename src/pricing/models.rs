//! Domain types for rental pricing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Currency every amount in this engine is denominated in.
pub const CURRENCY: &str = "INR";

/// Optional per-day services offered with every rental.
///
/// Wire names match the checkbox values of the booking form
/// ("driver", "gps", "insurance"); anything else is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    Driver,
    Gps,
    Insurance,
}

impl AddOn {
    /// Every add-on, in the order the form lists them.
    pub const ALL: [AddOn; 3] = [AddOn::Driver, AddOn::Gps, AddOn::Insurance];

    /// Flat per-day rate, in whole rupees.
    pub fn rate_per_day(self) -> Decimal {
        match self {
            AddOn::Driver => dec!(1500),
            AddOn::Gps => dec!(500),
            AddOn::Insurance => dec!(500),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AddOn::Driver => "driver",
            AddOn::Gps => "gps",
            AddOn::Insurance => "insurance",
        }
    }
}

/// Pickup and dropoff dates as edited in the booking form.
///
/// Only periods with `dropoff` strictly after `pickup` can be priced;
/// everything else quotes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    pub pickup: NaiveDate,
    pub dropoff: NaiveDate,
}

impl RentalPeriod {
    pub fn new(pickup: NaiveDate, dropoff: NaiveDate) -> Self {
        Self { pickup, dropoff }
    }
}

/// Computed day count and total for a prospective booking.
///
/// Derived, never stored: recomputed whenever the vehicle, the dates or
/// the selected add-ons change. `days == 0` marks the not-yet-bookable
/// sentinel, always paired with a zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl BookingQuote {
    /// The sentinel quote for unparseable or non-positive rental periods.
    pub fn zero() -> Self {
        Self {
            days: 0,
            total: Decimal::ZERO,
        }
    }

    /// A quote can back a real booking only once it covers at least one day.
    pub fn is_bookable(&self) -> bool {
        self.days > 0
    }
}
