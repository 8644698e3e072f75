//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no catalog or network access.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::catalog::models::Vehicle;
use crate::pricing::models::{AddOn, BookingQuote, RentalPeriod};

/// Number of billable days in a rental period.
///
/// Billing counts whole calendar days from pickup to dropoff. A dropoff
/// on or before the pickup date yields 0, which downstream code treats
/// as "cannot be priced".
pub fn rental_days(period: &RentalPeriod) -> i64 {
    (period.dropoff - period.pickup).num_days().max(0)
}

/// Compute the quote for a vehicle, rental period and add-on selection.
///
/// Total is `days * daily_rate` plus `days * rate` for each selected
/// add-on. Duplicate selections charge once. Periods that do not cover
/// at least one day return the zero quote, and a negative daily rate
/// clamps to zero, so the result is never negative. Rates too large to
/// multiply out saturate at the `Decimal` ceiling instead of failing.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use drivenova_pricing::catalog::Vehicle;
/// use drivenova_pricing::pricing::{compute_quote, AddOn, RentalPeriod};
///
/// let suv = Vehicle::new("Everest LX", dec!(4500));
/// let period = RentalPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
/// );
/// let quote = compute_quote(&suv, &period, &[AddOn::Gps]);
/// assert_eq!(quote.days, 2);
/// assert_eq!(quote.total, dec!(10000));
/// ```
pub fn compute_quote(vehicle: &Vehicle, period: &RentalPeriod, add_ons: &[AddOn]) -> BookingQuote {
    let days = rental_days(period);
    if days == 0 {
        return BookingQuote::zero();
    }

    let day_count = Decimal::from(days);
    let daily_rate = vehicle.price_per_day.max(Decimal::ZERO);
    let mut total = daily_rate.saturating_mul(day_count);

    for add_on in AddOn::ALL {
        if add_ons.contains(&add_on) {
            total = total.saturating_add(add_on.rate_per_day().saturating_mul(day_count));
        }
    }

    BookingQuote { days, total }
}

/// Parse a raw date field from the booking form.
///
/// Accepts `YYYY-MM-DD` (the format date inputs submit) plus full
/// RFC 3339 timestamps, whose time component is discarded. Anything
/// else is `None`.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse both form fields into a rental period.
///
/// `None` when either field cannot be read as a date; callers degrade
/// that to the zero quote or reject, depending on the endpoint.
pub fn parse_rental_period(pickup: &str, dropoff: &str) -> Option<RentalPeriod> {
    Some(RentalPeriod::new(
        parse_booking_date(pickup)?,
        parse_booking_date(dropoff)?,
    ))
}

/// The one-day period the booking form opens with: pickup today,
/// dropoff tomorrow.
pub fn default_rental_period(today: NaiveDate) -> RentalPeriod {
    RentalPeriod::new(today, today.succ_opt().unwrap_or(today))
}

/// Format an amount the way the site renders totals: rupee sign plus
/// Indian-system digit grouping (`1234567` becomes `₹12,34,567`).
/// Fractional amounts keep two decimal places.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let body = match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{:0<2}", group_indian(int_part), frac_part)
        }
        None => group_indian(&text),
    };

    if negative {
        format!("-₹{}", body)
    } else {
        format!("₹{}", body)
    }
}

/// Indian digit grouping: last three digits together, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        pairs.push(back);
        rest = front;
    }
    pairs.push(rest);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}
