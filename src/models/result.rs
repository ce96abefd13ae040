//! Payroll result model.
//!
//! This module defines the PayrollResult struct and its nested
//! breakdowns, the final output of a payroll computation. All amounts
//! are integer rials, floored at the aggregation points where they were
//! produced.

use serde::{Deserialize, Serialize};

/// Monthly allowance amounts actually included in the gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceBreakdown {
    /// Housing allowance included (0 when toggled off).
    pub housing: i64,
    /// Food allowance included (0 when toggled off).
    pub food: i64,
    /// Child allowance included (0 when unmarried or toggled off).
    pub child: i64,
}

/// Insurance contribution amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceBreakdown {
    /// Worker contribution, deducted from the worker's pay.
    pub worker: i64,
    /// Employer contribution, paid on top of gross.
    pub employer: i64,
    /// Unemployment insurance, paid by the employer.
    pub unemployment: i64,
    /// Sum of the three contributions.
    pub total: i64,
}

/// The complete result of a monthly payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    /// The worker's hourly wage, floored for reporting.
    pub hourly_wage: i64,
    /// The normalized monthly base wage.
    pub base_monthly: i64,
    /// Allowance amounts included in gross pay.
    pub allowances_included: AllowanceBreakdown,
    /// Overtime pay.
    pub overtime: i64,
    /// Severance accrual included in gross pay.
    pub severance_monthly: i64,
    /// Gross pay before any deduction.
    pub gross_before_deductions: i64,
    /// The base amount insurance rates are applied to: gross minus
    /// severance, or 0 when insurance is not included.
    pub insurance_base: i64,
    /// Insurance contributions.
    pub insurance: InsuranceBreakdown,
    /// Income subject to tax, clamped to zero when negative.
    pub taxable_income: i64,
    /// Progressive income tax.
    pub tax: i64,
    /// What the worker takes home.
    pub net_pay: i64,
    /// What the employer pays in total.
    pub employer_cost: i64,
}
