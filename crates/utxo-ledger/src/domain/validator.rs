//! Transaction validator
//!
//! Pure check of a proposed amount against the selected total. Rules are
//! applied in a fixed order and the first failure wins.

use super::errors::ValidationError;
use super::value_objects::Amount;

/// Smallest change the sender must get back: 0.001.
pub const MINIMUM_CHANGE: Amount = Amount::from_units(100_000);

/// Validate `amount_text` against `total_selected` using [`MINIMUM_CHANGE`].
pub fn validate(total_selected: Amount, amount_text: &str) -> Result<Amount, ValidationError> {
    validate_with_minimum(total_selected, amount_text, MINIMUM_CHANGE)
}

/// Validate with an explicit minimum change threshold.
///
/// 1. text parses as a non-negative decimal
/// 2. amount > 0
/// 3. amount < total (equality leaves no change)
/// 4. total - amount >= minimum change
pub fn validate_with_minimum(
    total_selected: Amount,
    amount_text: &str,
    minimum_change: Amount,
) -> Result<Amount, ValidationError> {
    let amount: Amount = amount_text.parse()?;

    if amount.is_zero() {
        return Err(ValidationError::NonPositiveAmount);
    }

    if amount >= total_selected {
        return Err(ValidationError::InsufficientFunds {
            amount,
            available: total_selected,
        });
    }

    // amount < total, so this cannot underflow
    let change = total_selected
        .checked_sub(amount)
        .unwrap_or(Amount::ZERO);
    if change < minimum_change {
        return Err(ValidationError::BelowMinimumChange {
            change,
            minimum: minimum_change,
        });
    }

    Ok(amount)
}
