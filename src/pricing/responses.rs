//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::models::Vehicle;

use super::calculators::format_inr;
use super::models::{AddOn, BookingQuote, CURRENCY};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn inr(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// One priced add-on line of a quote
#[derive(Debug, Clone, Serialize)]
pub struct AddOnCharge {
    pub service: AddOn,
    pub per_day: MoneyResponse,
    pub amount: MoneyResponse,
}

/// Response for a computed quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    pub days: i64,
    pub base: MoneyResponse,
    pub add_ons: Vec<AddOnCharge>,
    pub total: MoneyResponse,
    /// Total as the site renders it, e.g. `₹12,500`.
    pub display: String,
    pub bookable: bool,
}

impl QuoteResponse {
    /// Assemble the response for a quote, with one line per selected
    /// add-on. Line amounts are zero whenever the quote itself is zero.
    pub fn build(vehicle: &Vehicle, quote: &BookingQuote, add_ons: &[AddOn]) -> Self {
        let day_count = Decimal::from(quote.days);
        let daily_rate = vehicle.price_per_day.max(Decimal::ZERO);

        let add_ons: Vec<AddOnCharge> = AddOn::ALL
            .into_iter()
            .filter(|add_on| add_ons.contains(add_on))
            .map(|add_on| AddOnCharge {
                service: add_on,
                per_day: MoneyResponse::inr(add_on.rate_per_day()),
                amount: MoneyResponse::inr(add_on.rate_per_day().saturating_mul(day_count)),
            })
            .collect();

        Self {
            car_model: if vehicle.name.is_empty() {
                None
            } else {
                Some(vehicle.name.clone())
            },
            days: quote.days,
            base: MoneyResponse::inr(daily_rate.saturating_mul(day_count)),
            add_ons,
            total: MoneyResponse::inr(quote.total),
            display: format_inr(quote.total),
            bookable: quote.is_bookable(),
        }
    }
}

/// Response for a verified booking payload
#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub valid: bool,
    pub days: i64,
    pub expected: MoneyResponse,
    pub submitted: MoneyResponse,
}

/// Initial dates for a fresh booking form, in date-input format
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
}
