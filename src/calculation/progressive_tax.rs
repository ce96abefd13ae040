//! Progressive income tax calculation.
//!
//! This module applies a monthly exemption and an ordered list of
//! cumulative tax brackets to a taxable income. Bracket caps are
//! cumulative amounts above the exemption; an unbounded final bracket
//! absorbs whatever income remains.

use rust_decimal::Decimal;

use crate::config::{BracketCeiling, TaxBracket};
use crate::error::EngineResult;

use super::money::floor_rial;

/// Calculates progressive income tax on a monthly taxable income.
///
/// The exemption is subtracted first; what remains is walked through the
/// brackets in order. Each bracket taxes the slice between the previous
/// cap and its own cap at its marginal rate; the walk stops as soon as
/// the remaining income is exhausted. The accumulated tax is kept as an
/// exact decimal and floored once at the end.
///
/// Brackets are assumed structurally valid (strictly increasing caps,
/// unbounded bracket last); [`crate::config::PayrollConfig::validate`]
/// enforces this before any computation.
///
/// # Arguments
///
/// * `taxable_income` - The monthly income subject to tax, in rials
/// * `exemption_monthly` - The monthly tax-free threshold, in rials
/// * `brackets` - The ordered bracket schedule
///
/// # Returns
///
/// Returns the tax in integer rials, never negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_progressive_tax;
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::bundled_1404();
/// let tax = calculate_progressive_tax(
///     200_000_000,
///     config.tax.exemption_monthly,
///     &config.tax.brackets,
/// )
/// .unwrap();
/// assert_eq!(tax, 0);
/// ```
pub fn calculate_progressive_tax(
    taxable_income: i64,
    exemption_monthly: i64,
    brackets: &[TaxBracket],
) -> EngineResult<i64> {
    let taxed = taxable_income.saturating_sub(exemption_monthly);
    if taxed <= 0 {
        return Ok(0);
    }

    let mut remaining = Decimal::from(taxed);
    let mut previous_cap: i64 = 0;
    let mut total = Decimal::ZERO;

    for bracket in brackets {
        let width = match bracket.ceiling {
            BracketCeiling::Bounded(cap) => {
                let width = Decimal::from((cap - previous_cap).max(0));
                previous_cap = cap;
                width
            }
            BracketCeiling::Unbounded => remaining,
        };

        let used = remaining.min(width);
        total += used * bracket.rate;
        remaining -= used;

        if remaining <= Decimal::ZERO {
            break;
        }
    }

    Ok(floor_rial(total)?.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(cap: Option<i64>, rate: &str) -> TaxBracket {
        TaxBracket {
            ceiling: match cap {
                Some(cap) => BracketCeiling::Bounded(cap),
                None => BracketCeiling::Unbounded,
            },
            rate: dec(rate),
        }
    }

    fn default_schedule() -> (i64, Vec<TaxBracket>) {
        let config = PayrollConfig::bundled_1404();
        (config.tax.exemption_monthly, config.tax.brackets)
    }

    /// TAX-001: income at or below the exemption is untaxed
    #[test]
    fn test_income_below_exemption_is_untaxed() {
        let (exemption, brackets) = default_schedule();

        assert_eq!(
            calculate_progressive_tax(200_000_000, exemption, &brackets).unwrap(),
            0
        );
        assert_eq!(
            calculate_progressive_tax(exemption, exemption, &brackets).unwrap(),
            0
        );
    }

    /// TAX-002: negative taxable income is untaxed
    #[test]
    fn test_negative_income_is_untaxed() {
        let (exemption, brackets) = default_schedule();

        assert_eq!(
            calculate_progressive_tax(-1_000_000, exemption, &brackets).unwrap(),
            0
        );
    }

    /// TAX-003: income inside the first bracket uses its rate only
    #[test]
    fn test_income_within_first_bracket() {
        let (exemption, brackets) = default_schedule();

        // 30,000,000 above the exemption at 10%
        let tax = calculate_progressive_tax(270_000_000, exemption, &brackets).unwrap();
        assert_eq!(tax, 3_000_000);
    }

    /// TAX-004: income spanning several brackets accumulates marginal slices
    #[test]
    fn test_income_spanning_multiple_brackets() {
        let (exemption, brackets) = default_schedule();

        // 160,830,000 above the exemption:
        //   60,000,000 at 10% = 6,000,000
        //   20,000,000 at 15% = 3,000,000
        //   40,000,000 at 20% = 8,000,000
        //   40,830,000 at 25% = 10,207,500
        let tax = calculate_progressive_tax(400_830_000, exemption, &brackets).unwrap();
        assert_eq!(tax, 27_207_500);
    }

    /// TAX-005: the unbounded bracket absorbs the remainder
    #[test]
    fn test_unbounded_bracket_absorbs_remainder() {
        let (exemption, brackets) = default_schedule();

        // 500,000,000 above the exemption:
        //   60M*0.10 + 20M*0.15 + 40M*0.20 + 46,666,667*0.25 + 333,333,333*0.30
        // = 6,000,000 + 3,000,000 + 8,000,000 + 11,666,666.75 + 99,999,999.9
        // = 128,666,666.65 -> 128,666,666
        let tax = calculate_progressive_tax(740_000_000, exemption, &brackets).unwrap();
        assert_eq!(tax, 128_666_666);
    }

    /// TAX-006: two-bracket schedule with zero exemption
    #[test]
    fn test_two_bracket_schedule_with_zero_exemption() {
        let brackets = vec![bracket(Some(500_000), "0.10"), bracket(None, "0.20")];

        // 500,000 at 10% + 300,000 at 20% = 50,000 + 60,000
        let tax = calculate_progressive_tax(800_000, 0, &brackets).unwrap();
        assert_eq!(tax, 110_000);
    }

    /// TAX-007: empty schedule levies no tax
    #[test]
    fn test_empty_schedule_levies_no_tax() {
        let tax = calculate_progressive_tax(1_000_000_000, 0, &[]).unwrap();
        assert_eq!(tax, 0);
    }

    /// TAX-008: income beyond a fully bounded schedule is not taxed further
    #[test]
    fn test_bounded_schedule_caps_the_taxed_amount() {
        let brackets = vec![bracket(Some(500_000), "0.10")];

        let tax = calculate_progressive_tax(10_000_000, 0, &brackets).unwrap();
        assert_eq!(tax, 50_000);
    }

    /// TAX-009: the accumulated tax is floored once at the end
    #[test]
    fn test_tax_is_floored_once_at_the_end() {
        // Two slices each producing a 0.5 fraction: per-bracket flooring
        // would lose both halves, end flooring keeps their sum.
        let brackets = vec![bracket(Some(5), "0.30"), bracket(None, "0.30")];

        // 5 * 0.3 = 1.5, 5 * 0.3 = 1.5, total 3.0
        let tax = calculate_progressive_tax(10, 0, &brackets).unwrap();
        assert_eq!(tax, 3);
    }

    /// TAX-010: exact bracket boundary stops the walk early
    #[test]
    fn test_income_exactly_at_bracket_cap() {
        let (exemption, brackets) = default_schedule();

        // Exactly 60,000,000 above the exemption
        let tax = calculate_progressive_tax(300_000_000, exemption, &brackets).unwrap();
        assert_eq!(tax, 6_000_000);
    }

    #[test]
    fn test_monotonicity_across_boundary() {
        let (exemption, brackets) = default_schedule();

        let below = calculate_progressive_tax(299_999_999, exemption, &brackets).unwrap();
        let at = calculate_progressive_tax(300_000_000, exemption, &brackets).unwrap();
        let above = calculate_progressive_tax(300_000_001, exemption, &brackets).unwrap();

        assert!(below <= at);
        assert!(at <= above);
    }
}
