//! Vehicle records as served by the upstream catalog API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rentable vehicle from the catalog.
///
/// The upstream API is loose about optional fields, so everything except
/// the identity is defaulted and the price survives any JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_price::deserialize")]
    pub price_per_day: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Vehicle {
    /// A bare vehicle with just the fields pricing needs.
    pub fn new(name: impl Into<String>, price_per_day: Decimal) -> Self {
        Self {
            name: name.into(),
            price_per_day,
            category: None,
            image_url: None,
            features: Vec::new(),
        }
    }
}

/// Price fields that tolerate whatever the upstream serves.
///
/// Catalog entries have carried prices as numbers, numeric strings and
/// occasionally null. Unusable values coerce to zero instead of failing
/// the whole payload, and negative values clamp to zero so a broken
/// entry can never produce a negative quote.
pub mod lenient_price {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce(&value))
    }

    /// Variant for optional fields: null and absent mean "not given",
    /// any present value coerces like `deserialize`.
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(coerce(&value)))
    }

    fn coerce(value: &Value) -> Decimal {
        let amount = match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(|f| Decimal::try_from(f).ok())
                .unwrap_or(Decimal::ZERO),
            Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        };
        amount.max(Decimal::ZERO)
    }
}
