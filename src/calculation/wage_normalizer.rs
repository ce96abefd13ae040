//! Wage normalization.
//!
//! This module converts a declared wage in any [`WageMode`] into a
//! monthly base and an hourly wage. The returned values are exact
//! decimals; flooring happens at the engine's aggregation points, never
//! here, so downstream calculations (overtime in particular) keep full
//! precision.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::WageMode;

/// The result of normalizing a declared wage.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWage {
    /// The monthly base wage, exact.
    pub base_monthly: Decimal,
    /// The hourly wage, exact.
    pub hourly_wage: Decimal,
}

/// Normalizes a declared wage into monthly and hourly terms.
///
/// - `daily`: the monthly base is `base_wage * days`; the hourly wage is
///   the monthly base divided by the statutory monthly hours.
/// - `monthly`: the base is taken as-is; the hourly wage is the base
///   divided by the statutory monthly hours.
/// - `hourly`: the hourly wage is taken as-is; the monthly base is the
///   hourly wage multiplied by the statutory monthly hours.
///
/// # Arguments
///
/// * `mode` - How `base_wage` should be interpreted
/// * `base_wage` - The declared wage in `mode` units, in rials
/// * `days` - Worked days in the month (only used by daily mode)
/// * `work_hours_monthly` - Statutory monthly work hours
///
/// # Returns
///
/// Returns the normalized wage pair, or `InvalidConfiguration` if
/// `work_hours_monthly` is not positive.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_wage;
/// use payroll_engine::models::WageMode;
/// use rust_decimal::Decimal;
///
/// let normalized =
///     normalize_wage(WageMode::Hourly, 100_000, 0, Decimal::from(220)).unwrap();
/// assert_eq!(normalized.base_monthly, Decimal::from(22_000_000));
/// assert_eq!(normalized.hourly_wage, Decimal::from(100_000));
/// ```
pub fn normalize_wage(
    mode: WageMode,
    base_wage: i64,
    days: u32,
    work_hours_monthly: Decimal,
) -> EngineResult<NormalizedWage> {
    if work_hours_monthly <= Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            message: "workHoursMonthly must be positive".to_string(),
        });
    }

    let wage = Decimal::from(base_wage);

    let (base_monthly, hourly_wage) = match mode {
        WageMode::Daily => {
            let base_monthly = wage * Decimal::from(days);
            (base_monthly, base_monthly / work_hours_monthly)
        }
        WageMode::Monthly => (wage, wage / work_hours_monthly),
        WageMode::Hourly => (wage * work_hours_monthly, wage),
    };

    Ok(NormalizedWage {
        base_monthly,
        hourly_wage,
    })
}
