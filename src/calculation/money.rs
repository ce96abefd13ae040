//! Monetary rounding helpers.
//!
//! All reported amounts in the engine are integer rials. Fractional
//! intermediate values are carried as exact decimals and floored at
//! defined aggregation points through [`floor_rial`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};

/// Floors a decimal amount to integer rials.
///
/// # Returns
///
/// Returns the floored amount as `i64`, or `CalculationError` if the
/// value does not fit the representable rial range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::floor_rial;
/// use rust_decimal::Decimal;
///
/// assert_eq!(floor_rial(Decimal::new(4723169, 1)).unwrap(), 472_316);
/// ```
pub fn floor_rial(value: Decimal) -> EngineResult<i64> {
    value
        .floor()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} exceeds the representable rial range", value),
        })
}
