//! Fare domain entity and override resolution

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::support::errors::DomainError;
use crate::support::math::{apply_percent, parse_percent, round_capacity};

/// A reusable price/cost/capacity definition
#[derive(Debug, Clone, PartialEq)]
pub struct Fare {
    pub id: i32,
    /// Unique short code, e.g. "Y", "J", "F"
    pub code: String,
    pub name: String,
    /// Ticket price
    pub price: Decimal,
    /// Operating cost per seat
    pub cost: Decimal,
    /// Seats sold under this fare
    pub capacity: i32,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fare {
    /// Resolve this fare's values through an override set.
    ///
    /// Every field is computed from the fare's own default, so a flight
    /// override never stacks on top of a subfleet override.
    pub fn resolve(&self, overrides: &FareOverrides) -> DomainResult<ResolvedFare> {
        let price = resolve_field("price", self.price, overrides.price.as_ref())?;
        let cost = resolve_field("cost", self.cost, overrides.cost.as_ref())?;
        let capacity = match overrides.capacity.as_ref() {
            None => self.capacity,
            Some(value) => {
                let raw = value.apply("capacity", Decimal::from(self.capacity))?;
                round_capacity(raw).ok_or_else(|| {
                    DomainError::invalid_override(
                        "capacity",
                        format!("{} is out of range for a seat count", raw),
                    )
                })?
            }
        };

        Ok(ResolvedFare {
            fare_id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            price,
            cost,
            capacity,
            overrides: overrides.clone(),
        })
    }
}

fn resolve_field(
    field: &str,
    default: Decimal,
    value: Option<&OverrideValue>,
) -> DomainResult<Decimal> {
    value.map_or(Ok(default), |v| v.apply(field, default))
}

/// Override for a single fare field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOverride", into = "String")]
pub enum OverrideValue {
    /// Replace the default with this value
    Absolute(Decimal),
    /// Adjust the default by this many percent
    Percent(i32),
}

impl OverrideValue {
    /// Value of `field` after this override. Fails when a percentage
    /// pushes the result past what a `Decimal` can hold.
    pub fn apply(&self, field: &str, default: Decimal) -> DomainResult<Decimal> {
        match *self {
            Self::Absolute(value) => Ok(value),
            Self::Percent(percent) => apply_percent(default, percent).ok_or_else(|| {
                DomainError::invalid_override(
                    field,
                    format!("{} adjusted by {}% is out of range", default, percent),
                )
            }),
        }
    }

    fn check(&self, field: &str) -> DomainResult<()> {
        match *self {
            Self::Absolute(value) if value.is_sign_negative() && !value.is_zero() => Err(
                DomainError::invalid_override(field, format!("{} is negative", value)),
            ),
            Self::Percent(percent) if percent < -100 => Err(DomainError::invalid_override(
                field,
                format!("{}% would make the value negative", percent),
            )),
            _ => Ok(()),
        }
    }
}

impl FromStr for OverrideValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(percent) = parse_percent(s) {
            return Ok(Self::Percent(percent?));
        }
        Decimal::from_str(s.trim())
            .map(Self::Absolute)
            .map_err(|_| {
                DomainError::invalid_override(
                    "value",
                    format!("'{}' is neither a number nor a percentage", s),
                )
            })
    }
}

impl fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(value) => write!(f, "{}", value),
            Self::Percent(percent) => write!(f, "{}%", percent),
        }
    }
}

impl From<Decimal> for OverrideValue {
    fn from(value: Decimal) -> Self {
        Self::Absolute(value)
    }
}

impl From<i32> for OverrideValue {
    fn from(value: i32) -> Self {
        Self::Absolute(Decimal::from(value))
    }
}

impl From<OverrideValue> for String {
    fn from(value: OverrideValue) -> Self {
        value.to_string()
    }
}

/// Wire form of an override: a JSON number or a string like "20%".
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOverride {
    Text(String),
    Number(Decimal),
}

impl TryFrom<RawOverride> for OverrideValue {
    type Error = DomainError;

    fn try_from(raw: RawOverride) -> Result<Self, Self::Error> {
        match raw {
            RawOverride::Text(text) => text.parse(),
            RawOverride::Number(value) => Ok(Self::Absolute(value)),
        }
    }
}

/// Optional per-field overrides attached to a fare association
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<OverrideValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<OverrideValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<OverrideValue>,
}

impl FareOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn price(mut self, value: impl Into<OverrideValue>) -> Self {
        self.price = Some(value.into());
        self
    }

    pub fn cost(mut self, value: impl Into<OverrideValue>) -> Self {
        self.cost = Some(value.into());
        self
    }

    pub fn capacity(mut self, value: impl Into<OverrideValue>) -> Self {
        self.capacity = Some(value.into());
        self
    }

    /// Parse text overrides, as stored in the association tables.
    pub fn parse(
        price: Option<&str>,
        cost: Option<&str>,
        capacity: Option<&str>,
    ) -> DomainResult<Self> {
        let parse = |field: &str, text: Option<&str>| -> DomainResult<Option<OverrideValue>> {
            text.map(|t| {
                t.parse::<OverrideValue>().map_err(|e| match e {
                    DomainError::InvalidOverride { reason, .. } => {
                        DomainError::invalid_override(field, reason)
                    }
                    other => other,
                })
            })
            .transpose()
        };

        Ok(Self {
            price: parse("price", price)?,
            cost: parse("cost", cost)?,
            capacity: parse("capacity", capacity)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.cost.is_none() && self.capacity.is_none()
    }

    /// Reject overrides that could never resolve to a sane fare.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(price) = &self.price {
            price.check("price")?;
        }
        if let Some(cost) = &self.cost {
            cost.check("cost")?;
        }
        if let Some(capacity) = &self.capacity {
            capacity.check("capacity")?;
            if let OverrideValue::Absolute(seats) = capacity {
                if !seats.fract().is_zero() {
                    return Err(DomainError::invalid_override(
                        "capacity",
                        format!("{} is not a whole number of seats", seats),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// The owner side of a fare association
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FareOwner {
    Flight(String),
    Subfleet(i32),
}

impl FareOwner {
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Flight(_) => "Flight",
            Self::Subfleet(_) => "Subfleet",
        }
    }
}

impl fmt::Display for FareOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flight(id) => write!(f, "flight {}", id),
            Self::Subfleet(id) => write!(f, "subfleet {}", id),
        }
    }
}

/// A stored (owner, fare) link with its overrides
#[derive(Debug, Clone, PartialEq)]
pub struct FareAssignment {
    pub owner: FareOwner,
    pub fare_id: i32,
    pub overrides: FareOverrides,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fare as seen through one owner's overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFare {
    pub fare_id: i32,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub capacity: i32,
    /// The overrides that produced these values
    pub overrides: FareOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_fare() -> Fare {
        Fare {
            id: 1,
            code: "Y".to_string(),
            name: "Economy".to_string(),
            price: dec!(100.00),
            cost: dec!(40.00),
            capacity: 150,
            notes: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn no_overrides_returns_defaults() {
        let fare = sample_fare();
        let resolved = fare.resolve(&FareOverrides::none()).unwrap();
        assert_eq!(resolved.price, fare.price);
        assert_eq!(resolved.cost, fare.cost);
        assert_eq!(resolved.capacity, fare.capacity);
    }

    #[test]
    fn absolute_overrides_leave_other_fields_alone() {
        let fare = sample_fare();
        let overrides = FareOverrides::none().price(50).capacity(400);
        let resolved = fare.resolve(&overrides).unwrap();
        assert_eq!(resolved.price, dec!(50));
        assert_eq!(resolved.capacity, 400);
        assert_eq!(resolved.cost, dec!(40.00));
    }

    #[test]
    fn percent_and_absolute_mix_per_field() {
        let fare = sample_fare();
        let overrides = FareOverrides::none()
            .price(OverrideValue::Percent(20))
            .cost(dec!(12.50));
        let resolved = fare.resolve(&overrides).unwrap();
        assert_eq!(resolved.price, dec!(120));
        assert_eq!(resolved.cost, dec!(12.50));
        assert_eq!(resolved.capacity, 150);
    }

    #[test]
    fn capacity_percent_rounds_half_away_from_zero() {
        let mut fare = sample_fare();
        fare.capacity = 15;
        // 15 * 1.10 = 16.5
        let overrides = FareOverrides::none().capacity(OverrideValue::Percent(10));
        assert_eq!(fare.resolve(&overrides).unwrap().capacity, 17);

        // 15 * 0.97 = 14.55
        let overrides = FareOverrides::none().capacity(OverrideValue::Percent(-3));
        assert_eq!(fare.resolve(&overrides).unwrap().capacity, 15);
    }

    #[test]
    fn overflowing_percent_fails_on_the_right_field() {
        let mut fare = sample_fare();
        fare.cost = Decimal::MAX;
        let overrides = FareOverrides::none().cost(OverrideValue::Percent(200));
        match fare.resolve(&overrides).unwrap_err() {
            DomainError::InvalidOverride { field, .. } => assert_eq!(field, "cost"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_percent_and_absolute_text() {
        assert_eq!("20%".parse::<OverrideValue>().unwrap(), OverrideValue::Percent(20));
        assert_eq!("-20%".parse::<OverrideValue>().unwrap(), OverrideValue::Percent(-20));
        assert_eq!(
            "49.95".parse::<OverrideValue>().unwrap(),
            OverrideValue::Absolute(dec!(49.95))
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "twenty", "20 %%", "1.5%", "%"] {
            assert!(
                matches!(bad.parse::<OverrideValue>(), Err(DomainError::InvalidOverride { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_storage_text() {
        let overrides = FareOverrides::none()
            .price(OverrideValue::Percent(-20))
            .cost(dec!(12.5));
        let stored = FareOverrides::parse(
            overrides.price.map(String::from).as_deref(),
            overrides.cost.map(String::from).as_deref(),
            None,
        )
        .unwrap();
        assert_eq!(stored, overrides);
    }

    #[test]
    fn parse_reports_offending_field() {
        let err = FareOverrides::parse(None, Some("cheap"), None).unwrap_err();
        match err {
            DomainError::InvalidOverride { field, .. } => assert_eq!(field, "cost"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn deserializes_numbers_and_percent_strings() {
        let overrides: FareOverrides = serde_json::from_value(serde_json::json!({
            "price": "20%",
            "cost": 35,
            "capacity": "400"
        }))
        .unwrap();
        assert_eq!(overrides.price, Some(OverrideValue::Percent(20)));
        assert_eq!(overrides.cost, Some(OverrideValue::Absolute(dec!(35))));
        assert_eq!(overrides.capacity, Some(OverrideValue::Absolute(dec!(400))));
    }

    #[test]
    fn deserialize_rejects_malformed_percent() {
        let result: Result<FareOverrides, _> =
            serde_json::from_value(serde_json::json!({ "price": "lots%" }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(FareOverrides::none().price(-5).validate().is_err());
        assert!(FareOverrides::none()
            .cost(OverrideValue::Percent(-101))
            .validate()
            .is_err());
        assert!(FareOverrides::none().capacity(dec!(10.5)).validate().is_err());
        assert!(FareOverrides::none()
            .price(OverrideValue::Percent(-100))
            .capacity(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn owner_display() {
        assert_eq!(FareOwner::Subfleet(7).to_string(), "subfleet 7");
        assert_eq!(FareOwner::Flight("abc".into()).entity(), "Flight");
    }
}
