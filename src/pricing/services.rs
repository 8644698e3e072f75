//! Pricing service functions with catalog access.
//!
//! These resolve vehicles against the cached catalog and wrap the pure
//! calculators for the HTTP layer. Only resolution can fail; the
//! calculators themselves never do.

use tracing::{debug, warn};

use crate::catalog::{self, models::Vehicle};
use crate::error::AppError;
use crate::AppState;

use super::calculators::{compute_quote, parse_rental_period};
use super::models::BookingQuote;
use super::requests::{BookingRequest, QuoteRequest};
use super::responses::{MoneyResponse, QuoteResponse, VerificationResponse};

/// Booking validation error types
#[derive(Debug, Clone)]
pub enum BookingError {
    MissingVehicle,
    UnknownVehicle { car_model: String },
    InvalidRentalPeriod { pickup: String, dropoff: String },
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::MissingVehicle => {
                write!(f, "Request carries neither a car model nor a daily rate")
            }
            BookingError::UnknownVehicle { car_model } => {
                write!(f, "No vehicle named '{}' in the catalog", car_model)
            }
            BookingError::InvalidRentalPeriod { pickup, dropoff } => {
                write!(f, "Rental period '{}' to '{}' cannot be priced", pickup, dropoff)
            }
        }
    }
}

impl std::error::Error for BookingError {}

/// Quote a prospective booking.
///
/// The daily rate comes from the request itself when `price_per_day` is
/// set, otherwise from the catalog entry named by `car_model`.
pub async fn quote(state: &AppState, request: &QuoteRequest) -> Result<QuoteResponse, AppError> {
    let vehicle = resolve_vehicle(state, request).await?;
    Ok(quote_for_vehicle(&vehicle, request))
}

/// Quote against an already-resolved vehicle.
///
/// Never fails: dates that cannot be read, or that cover no full day,
/// produce the zero quote, exactly as the booking form shows it.
pub fn quote_for_vehicle(vehicle: &Vehicle, request: &QuoteRequest) -> QuoteResponse {
    let quote = match parse_rental_period(&request.pickup_date, &request.dropoff_date) {
        Some(period) => compute_quote(vehicle, &period, &request.services),
        None => BookingQuote::zero(),
    };

    debug!(
        "Quote for '{}': {} days, total {}",
        vehicle.name, quote.days, quote.total
    );

    QuoteResponse::build(vehicle, &quote, &request.services)
}

/// Re-price a submitted booking payload and compare totals.
pub async fn verify(
    state: &AppState,
    booking: &BookingRequest,
) -> Result<VerificationResponse, AppError> {
    let vehicle = catalog::service::find_by_name(state, &booking.car_model)
        .await?
        .ok_or_else(|| BookingError::UnknownVehicle {
            car_model: booking.car_model.clone(),
        })?;

    Ok(evaluate_booking(&vehicle, booking)?)
}

/// Price a payload against a resolved vehicle and judge its total.
///
/// Unlike quoting, a payload that cannot be priced at all is rejected
/// rather than degraded, so a broken booking never reads as a valid
/// zero-rupee rental.
pub fn evaluate_booking(
    vehicle: &Vehicle,
    booking: &BookingRequest,
) -> Result<VerificationResponse, BookingError> {
    let period = parse_rental_period(&booking.pickup_date, &booking.dropoff_date)
        .ok_or_else(|| invalid_period(booking))?;

    let quote = compute_quote(vehicle, &period, &booking.services);
    if !quote.is_bookable() {
        return Err(invalid_period(booking));
    }

    let valid = quote.total == booking.total_amount;
    if !valid {
        warn!(
            "Booking total mismatch for '{}': expected {}, submitted {}",
            booking.car_model, quote.total, booking.total_amount
        );
    }

    Ok(VerificationResponse {
        valid,
        days: quote.days,
        expected: MoneyResponse::inr(quote.total),
        submitted: MoneyResponse::inr(booking.total_amount),
    })
}

/// Resolve the vehicle a quote request is about. An explicit rate wins;
/// otherwise the named model is looked up in the cached catalog.
async fn resolve_vehicle(state: &AppState, request: &QuoteRequest) -> Result<Vehicle, AppError> {
    if let Some(rate) = request.price_per_day {
        let name = request.car_model.clone().unwrap_or_default();
        return Ok(Vehicle::new(name, rate));
    }

    let model = match request.car_model.as_deref() {
        Some(model) => model,
        None => return Err(BookingError::MissingVehicle.into()),
    };

    let vehicle = catalog::service::find_by_name(state, model)
        .await?
        .ok_or_else(|| BookingError::UnknownVehicle {
            car_model: model.to_string(),
        })?;
    Ok(vehicle)
}

fn invalid_period(booking: &BookingRequest) -> BookingError {
    BookingError::InvalidRentalPeriod {
        pickup: booking.pickup_date.clone(),
        dropoff: booking.dropoff_date.clone(),
    }
}
