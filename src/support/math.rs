//! Percentage arithmetic for fare overrides

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::DomainError;

/// Parse a `<signed-integer>%` adjustment, e.g. `"20%"`, `"-20%"`, `"+5%"`.
///
/// Returns `None` when the text is not a percentage at all (no trailing `%`),
/// and an error when it ends in `%` but the number part is not an integer.
pub fn parse_percent(text: &str) -> Option<Result<i32, DomainError>> {
    let number = text.trim().strip_suffix('%')?;
    Some(number.trim().parse::<i32>().map_err(|_| {
        DomainError::invalid_override(
            "percent",
            format!("'{}' is not a whole-number percentage", text),
        )
    }))
}

/// `value + value * percent / 100`, or `None` when the result does not fit
/// in a `Decimal`.
pub fn apply_percent(value: Decimal, percent: i32) -> Option<Decimal> {
    value
        .checked_mul(Decimal::from(percent))?
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_add(value)
}

/// Add a percentage given in text form (`"20%"`) to `value`.
pub fn add_percent(value: Decimal, adjustment: &str) -> Result<Decimal, DomainError> {
    match parse_percent(adjustment) {
        Some(percent) => {
            let percent = percent?;
            apply_percent(value, percent).ok_or_else(|| {
                DomainError::invalid_override(
                    "percent",
                    format!("{} adjusted by {}% overflows", value, percent),
                )
            })
        }
        None => Err(DomainError::invalid_override(
            "percent",
            format!("'{}' has no trailing '%'", adjustment),
        )),
    }
}

/// Round to a whole seat count, halves away from zero.
pub fn round_capacity(value: Decimal) -> Option<i32> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
}
