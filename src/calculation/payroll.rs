//! Monthly payroll computation.
//!
//! This module orchestrates the full payroll pipeline: wage
//! normalization, allowances, overtime, severance, insurance
//! contributions, progressive tax, and the final net pay and employer
//! cost figures.
//!
//! Amounts are floored to integer rials at each aggregation step.
//! Overtime is the one place where an unfloored intermediate matters: it
//! is computed from the exact hourly wage and floored once, so a
//! fractional hourly rate is not truncated before the multiplication.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AllowanceBreakdown, InsuranceBreakdown, PayrollInput, PayrollResult};

use super::money::floor_rial;
use super::progressive_tax::calculate_progressive_tax;
use super::wage_normalizer::normalize_wage;

/// Computes a full monthly payroll breakdown.
///
/// The computation is pure: it reads `config` and `input` and produces a
/// [`PayrollResult`] without touching any shared state, so it is safe to
/// call concurrently with the same or different arguments.
///
/// # Arguments
///
/// * `config` - The payroll configuration to apply
/// * `input` - The worker's payroll request
///
/// # Returns
///
/// Returns the payroll breakdown, or an error if:
/// - The configuration fails validation (`InvalidConfiguration`)
/// - The input fails validation (`InvalidInput`)
/// - An amount exceeds the representable rial range (`CalculationError`)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{PayrollInput, WageMode};
///
/// let config = PayrollConfig::bundled_1404();
/// let input: PayrollInput = serde_json::from_str(
///     r#"{ "mode": "monthly", "baseWage": 400000000 }"#,
/// )
/// .unwrap();
///
/// let result = compute_payroll(&config, &input).unwrap();
/// assert_eq!(result.base_monthly, 400_000_000);
/// ```
pub fn compute_payroll(
    config: &PayrollConfig,
    input: &PayrollInput,
) -> EngineResult<PayrollResult> {
    config.validate()?;
    input.validate()?;

    let normalized = normalize_wage(
        input.mode,
        input.base_wage,
        input.days,
        config.work_hours_monthly,
    )?;
    let base_monthly = floor_rial(normalized.base_monthly)?;
    let hourly_wage = floor_rial(normalized.hourly_wage)?;

    let housing = if input.include_housing {
        config.allowances.housing
    } else {
        0
    };
    let food = if input.include_food {
        config.allowances.food
    } else {
        0
    };
    let child = if input.include_child_allowance && input.married {
        floor_rial(
            Decimal::from(config.allowances.child_per_kid) * Decimal::from(input.child_count),
        )?
    } else {
        0
    };

    // Overtime uses the exact hourly wage, floored after the product.
    let overtime = floor_rial(
        normalized.hourly_wage * input.hours_overtime * input.overtime_factor,
    )?;

    let severance = if input.include_severance {
        input.severance_monthly
    } else {
        0
    };

    let gross_d = Decimal::from(base_monthly)
        + Decimal::from(housing)
        + Decimal::from(food)
        + Decimal::from(child)
        + Decimal::from(overtime)
        + Decimal::from(severance);
    let gross = floor_rial(gross_d)?;

    // Severance is not insurable; disabling insurance zeroes the base
    // itself, which zeroes the contributions with it.
    let insurance_base_d = if input.include_insurance {
        gross_d - Decimal::from(severance)
    } else {
        Decimal::ZERO
    };
    let insurance_base = floor_rial(insurance_base_d)?;

    let worker = floor_rial(insurance_base_d * config.insurance.worker)?;
    let employer = floor_rial(insurance_base_d * config.insurance.employer)?;
    let unemployment = floor_rial(insurance_base_d * config.insurance.unemployment)?;
    let insurance_total = floor_rial(
        Decimal::from(worker) + Decimal::from(employer) + Decimal::from(unemployment),
    )?;

    let taxable_income = if input.include_tax {
        floor_rial(gross_d - Decimal::from(worker))?.max(0)
    } else {
        0
    };
    let tax = if input.include_tax {
        calculate_progressive_tax(
            taxable_income,
            config.tax.exemption_monthly,
            &config.tax.brackets,
        )?
    } else {
        0
    };

    let net_pay = floor_rial(gross_d - Decimal::from(worker) - Decimal::from(tax))?;
    let employer_cost =
        floor_rial(gross_d + Decimal::from(employer) + Decimal::from(unemployment))?;

    Ok(PayrollResult {
        hourly_wage,
        base_monthly,
        allowances_included: AllowanceBreakdown {
            housing,
            food,
            child,
        },
        overtime,
        severance_monthly: severance,
        gross_before_deductions: gross,
        insurance_base,
        insurance: InsuranceBreakdown {
            worker,
            employer,
            unemployment,
            total: insurance_total,
        },
        taxable_income,
        tax,
        net_pay,
        employer_cost,
    })
}
