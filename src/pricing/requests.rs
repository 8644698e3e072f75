//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::models::lenient_price;
use crate::pricing::models::AddOn;

/// Request to quote a prospective booking.
///
/// Dates arrive as the raw text of the form fields; unparseable values
/// quote to zero rather than erroring. An explicit `price_per_day`
/// overrides catalog resolution of `car_model`, so the endpoint works
/// even when the vehicle is not (yet) in the catalog.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default, deserialize_with = "lenient_price::deserialize_option")]
    pub price_per_day: Option<Decimal>,
    pub pickup_date: String,
    pub dropoff_date: String,
    #[serde(default)]
    pub services: Vec<AddOn>,
}

/// The full payload the booking form submits, as re-priced for
/// verification. Contact and location fields are carried but never
/// influence the total.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub car_model: String,
    pub pickup_date: String,
    pub dropoff_date: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    #[serde(default)]
    pub services: Vec<AddOn>,
    #[serde(default, deserialize_with = "lenient_price::deserialize")]
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== QuoteRequest tests ====================

    #[test]
    fn test_quote_request_full() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "car_model": "Everest LX",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-03",
                "services": ["driver", "gps"]
            }"#,
        )
        .unwrap();
        assert_eq!(request.car_model.as_deref(), Some("Everest LX"));
        assert!(request.price_per_day.is_none());
        assert_eq!(request.services, vec![AddOn::Driver, AddOn::Gps]);
    }

    #[test]
    fn test_quote_request_minimal() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{ "pickup_date": "", "dropoff_date": "" }"#,
        )
        .unwrap();
        assert!(request.car_model.is_none());
        assert!(request.price_per_day.is_none());
        assert!(request.services.is_empty());
    }

    #[test]
    fn test_quote_request_explicit_price() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "price_per_day": "4500",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02"
            }"#,
        )
        .unwrap();
        assert_eq!(request.price_per_day, Some(dec!(4500)));
    }

    #[test]
    fn test_quote_request_null_price_means_unset() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "price_per_day": null,
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02"
            }"#,
        )
        .unwrap();
        assert!(request.price_per_day.is_none());
    }

    #[test]
    fn test_quote_request_garbage_price_coerces_to_zero() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "price_per_day": "premium",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02"
            }"#,
        )
        .unwrap();
        assert_eq!(request.price_per_day, Some(Decimal::ZERO));
    }

    #[test]
    fn test_quote_request_unknown_service_rejected() {
        let result: Result<QuoteRequest, _> = serde_json::from_str(
            r#"{
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02",
                "services": ["valet"]
            }"#,
        );
        assert!(result.is_err());
    }

    // ==================== BookingRequest tests ====================

    #[test]
    fn test_booking_request_full_payload() {
        let booking: BookingRequest = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "+91 98765 43210",
                "car_model": "Everest LX",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-03",
                "pickup_location": "Airport T2",
                "dropoff_location": "City Centre",
                "services": ["insurance"],
                "total_amount": 10000
            }"#,
        )
        .unwrap();
        assert_eq!(booking.car_model, "Everest LX");
        assert_eq!(booking.total_amount, dec!(10000));
        assert_eq!(booking.services, vec![AddOn::Insurance]);
    }

    #[test]
    fn test_booking_request_defaults_contact_fields() {
        let booking: BookingRequest = serde_json::from_str(
            r#"{
                "car_model": "City Go",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02",
                "total_amount": "1800"
            }"#,
        )
        .unwrap();
        assert!(booking.name.is_empty());
        assert!(booking.pickup_location.is_empty());
        assert_eq!(booking.total_amount, dec!(1800));
    }

    #[test]
    fn test_booking_request_null_total_coerces_to_zero() {
        // JSON.stringify turns NaN totals into null
        let booking: BookingRequest = serde_json::from_str(
            r#"{
                "car_model": "City Go",
                "pickup_date": "2024-01-01",
                "dropoff_date": "2024-01-02",
                "total_amount": null
            }"#,
        )
        .unwrap();
        assert_eq!(booking.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_booking_request_requires_car_model() {
        let result: Result<BookingRequest, _> = serde_json::from_str(
            r#"{ "pickup_date": "2024-01-01", "dropoff_date": "2024-01-02" }"#,
        );
        assert!(result.is_err());
    }
}
