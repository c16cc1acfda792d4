//! Fare DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{DomainResult, Fare, FareOverrides, ResolvedFare};

/// Fare catalog entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FareResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    #[schema(value_type = String, example = "250.75")]
    pub price: Decimal,
    #[schema(value_type = String, example = "80.40")]
    pub cost: Decimal,
    pub capacity: i32,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Fare> for FareResponse {
    fn from(f: Fare) -> Self {
        Self {
            id: f.id,
            code: f.code,
            name: f.name,
            price: f.price,
            cost: f.cost,
            capacity: f.capacity,
            notes: f.notes,
            active: f.active,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFareRequest {
    #[validate(length(min = 1, max = 50, message = "fare code is required"))]
    pub code: String,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[schema(value_type = String, example = "250.75")]
    pub price: Decimal,
    #[schema(value_type = Option<String>)]
    pub cost: Option<Decimal>,
    #[validate(range(min = 0, message = "capacity must be non-negative"))]
    pub capacity: Option<i32>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFareRequest {
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub cost: Option<Decimal>,
    #[validate(range(min = 0, message = "capacity must be non-negative"))]
    pub capacity: Option<i32>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

/// A single override as sent by clients: a number, or a string such as
/// `"150"` or `"-20%"`. Numbers are read digit for digit, never through `f64`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OverrideInput {
    Number(Decimal),
    Text(String),
}

impl OverrideInput {
    fn into_text(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// Body of `PUT .../fares/{fare_id}`. Omitted fields fall back to the
/// fare's defaults.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct SetFareOverridesRequest {
    pub price: Option<OverrideInput>,
    pub cost: Option<OverrideInput>,
    pub capacity: Option<OverrideInput>,
}

impl SetFareOverridesRequest {
    pub fn into_overrides(self) -> DomainResult<FareOverrides> {
        let price = self.price.map(OverrideInput::into_text);
        let cost = self.cost.map(OverrideInput::into_text);
        let capacity = self.capacity.map(OverrideInput::into_text);
        FareOverrides::parse(price.as_deref(), cost.as_deref(), capacity.as_deref())
    }
}

/// Overrides echoed back in their text form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverridesDto {
    pub price: Option<String>,
    pub cost: Option<String>,
    pub capacity: Option<String>,
}

impl From<FareOverrides> for OverridesDto {
    fn from(o: FareOverrides) -> Self {
        Self {
            price: o.price.map(String::from),
            cost: o.cost.map(String::from),
            capacity: o.capacity.map(String::from),
        }
    }
}

/// A fare as priced for one flight or subfleet
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolvedFareResponse {
    pub fare_id: i32,
    pub code: String,
    pub name: String,
    #[schema(value_type = String, example = "300.90")]
    pub price: Decimal,
    #[schema(value_type = String, example = "64.32")]
    pub cost: Decimal,
    pub capacity: i32,
    pub overrides: OverridesDto,
}

impl From<ResolvedFare> for ResolvedFareResponse {
    fn from(r: ResolvedFare) -> Self {
        Self {
            fare_id: r.fare_id,
            code: r.code,
            name: r.name,
            price: r.price,
            cost: r.cost,
            capacity: r.capacity,
            overrides: r.overrides.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, OverrideValue};
    use rust_decimal_macros::dec;

    #[test]
    fn override_body_accepts_numbers_and_percent_strings() {
        let req: SetFareOverridesRequest =
            serde_json::from_str(r#"{"price": 50, "cost": "-20%", "capacity": "400"}"#).unwrap();
        let overrides = req.into_overrides().unwrap();
        assert_eq!(overrides.price, Some(OverrideValue::Absolute(dec!(50))));
        assert_eq!(overrides.cost, Some(OverrideValue::Percent(-20)));
        assert_eq!(overrides.capacity, Some(OverrideValue::Absolute(dec!(400))));
    }

    #[test]
    fn numeric_overrides_keep_every_digit() {
        let req: SetFareOverridesRequest = serde_json::from_str(
            r#"{"price": 1234567890.123456789012, "cost": 0.1}"#,
        )
        .unwrap();
        let overrides = req.into_overrides().unwrap();
        assert_eq!(
            overrides.price,
            Some(OverrideValue::Absolute(dec!(1234567890.123456789012)))
        );
        assert_eq!(overrides.cost, Some(OverrideValue::Absolute(dec!(0.1))));
    }

    #[test]
    fn empty_body_means_no_overrides() {
        let req: SetFareOverridesRequest = serde_json::from_str("{}").unwrap();
        assert!(req.into_overrides().unwrap().is_empty());
    }

    #[test]
    fn garbage_override_names_the_field() {
        let req: SetFareOverridesRequest =
            serde_json::from_str(r#"{"cost": "cheap"}"#).unwrap();
        match req.into_overrides() {
            Err(DomainError::InvalidOverride { field, .. }) => assert_eq!(field, "cost"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
