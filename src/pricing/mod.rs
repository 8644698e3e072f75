//! Pricing engine module for DriveNova bookings.
//!
//! Provides quote calculations for car rentals: billable days, add-on
//! services and totals. The site and the booking backend call this
//! module via HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute_quote, default_rental_period, format_inr, rental_days};
pub use models::{AddOn, BookingQuote, RentalPeriod, CURRENCY};
pub use routes::router;
pub use services::BookingError;
