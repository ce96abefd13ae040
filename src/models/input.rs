//! Payroll input model and related types.
//!
//! This module defines the PayrollInput struct and WageMode enum for
//! describing a single worker's monthly payroll request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How the declared base wage should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WageMode {
    /// The base wage is a daily rate, multiplied by worked days.
    Daily,
    /// The base wage is already a monthly amount.
    Monthly,
    /// The base wage is an hourly rate, scaled by statutory monthly hours.
    Hourly,
}

/// A single worker's payroll computation request.
///
/// All monetary fields are integer rials. Toggle fields control which
/// allowances and deductions participate in the computation; their
/// defaults mirror a standard full payroll (everything on except
/// severance accrual).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    /// How `base_wage` should be interpreted.
    pub mode: WageMode,
    /// The declared wage in `mode` units.
    pub base_wage: i64,
    /// Worked days in the month (used by daily mode).
    #[serde(default)]
    pub days: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub hours_overtime: Decimal,
    /// Overtime pay multiplier.
    #[serde(default = "default_overtime_factor")]
    pub overtime_factor: Decimal,
    /// Marital status; child allowance requires `married`.
    #[serde(default)]
    pub married: bool,
    /// Number of children.
    #[serde(default)]
    pub child_count: u32,
    /// Whether the housing allowance is included.
    #[serde(default = "default_true")]
    pub include_housing: bool,
    /// Whether the food allowance is included.
    #[serde(default = "default_true")]
    pub include_food: bool,
    /// Whether the child allowance is included.
    #[serde(default = "default_true")]
    pub include_child_allowance: bool,
    /// Whether insurance contributions are applied.
    #[serde(default = "default_true")]
    pub include_insurance: bool,
    /// Whether income tax is applied.
    #[serde(default = "default_true")]
    pub include_tax: bool,
    /// Whether the monthly severance accrual is included.
    #[serde(default)]
    pub include_severance: bool,
    /// Monthly severance accrual amount.
    #[serde(default)]
    pub severance_monthly: i64,
}

fn default_true() -> bool {
    true
}

fn default_overtime_factor() -> Decimal {
    Decimal::ONE
}

impl PayrollInput {
    /// Validates the input fields.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the input is usable, or `InvalidInput` naming
    /// the offending field if any monetary amount, hour count, or factor
    /// is negative. Zero worked days in daily mode is accepted and
    /// yields a zero base wage.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_wage < 0 {
            return Err(EngineError::InvalidInput {
                field: "baseWage".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.hours_overtime < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "hoursOvertime".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.overtime_factor < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "overtimeFactor".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.severance_monthly < 0 {
            return Err(EngineError::InvalidInput {
                field: "severanceMonthly".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
