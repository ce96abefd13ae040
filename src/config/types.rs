//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML or JSON configuration files. All wire field
//! names are camelCase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Social-security contribution rates as fractions of the insurance base.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRates {
    /// Worker contribution rate (deducted from the worker's pay).
    pub worker: Decimal,
    /// Employer contribution rate (paid on top of gross).
    pub employer: Decimal,
    /// Unemployment insurance rate (paid by the employer).
    pub unemployment: Decimal,
}

/// Fixed monthly allowance amounts in rials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceRates {
    /// Monthly housing allowance.
    pub housing: i64,
    /// Monthly food allowance.
    pub food: i64,
    /// Monthly allowance per eligible child.
    pub child_per_kid: i64,
}

/// Upper boundary of a tax bracket.
///
/// Bracket caps are cumulative amounts above the monthly exemption. The
/// final bracket of a schedule is usually `Unbounded` and absorbs all
/// remaining taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketCeiling {
    /// The bracket covers taxable income up to this cumulative cap.
    Bounded(i64),
    /// The bracket covers all remaining taxable income.
    Unbounded,
}

/// A single progressive tax bracket.
///
/// On the wire a bracket is `{ "upTo": <rials> | null, "rate": <fraction> }`;
/// a `null` or omitted `upTo` marks the unbounded final bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "TaxBracketWire", into = "TaxBracketWire")]
pub struct TaxBracket {
    /// The cumulative upper boundary of this bracket.
    pub ceiling: BracketCeiling,
    /// The marginal rate applied within this bracket.
    pub rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxBracketWire {
    #[serde(default)]
    up_to: Option<i64>,
    rate: Decimal,
}

impl From<TaxBracketWire> for TaxBracket {
    fn from(wire: TaxBracketWire) -> Self {
        TaxBracket {
            ceiling: match wire.up_to {
                Some(cap) => BracketCeiling::Bounded(cap),
                None => BracketCeiling::Unbounded,
            },
            rate: wire.rate,
        }
    }
}

impl From<TaxBracket> for TaxBracketWire {
    fn from(bracket: TaxBracket) -> Self {
        TaxBracketWire {
            up_to: match bracket.ceiling {
                BracketCeiling::Bounded(cap) => Some(cap),
                BracketCeiling::Unbounded => None,
            },
            rate: bracket.rate,
        }
    }
}

/// Income tax configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfig {
    /// Monthly tax-free threshold in rials.
    pub exemption_monthly: i64,
    /// Ordered progressive brackets applied above the exemption.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll configuration for a payroll year.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::bundled_1404();
/// assert_eq!(config.year, 1404);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollConfig {
    /// The payroll year this configuration applies to.
    pub year: u16,
    /// Statutory monthly work hours used for wage normalization.
    pub work_hours_monthly: Decimal,
    /// Social-security contribution rates.
    pub insurance: InsuranceRates,
    /// Fixed monthly allowance amounts.
    pub allowances: AllowanceRates,
    /// Income tax schedule.
    pub tax: TaxConfig,
}

impl PayrollConfig {
    /// Returns the bundled configuration for payroll year 1404.
    ///
    /// Used as the fallback when no configuration file can be loaded.
    pub fn bundled_1404() -> Self {
        PayrollConfig {
            year: 1404,
            work_hours_monthly: Decimal::from(220),
            insurance: InsuranceRates {
                worker: Decimal::new(7, 2),
                employer: Decimal::new(20, 2),
                unemployment: Decimal::new(3, 2),
            },
            allowances: AllowanceRates {
                housing: 9_000_000,
                food: 22_000_000,
                child_per_kid: 5_000_000,
            },
            tax: TaxConfig {
                exemption_monthly: 240_000_000,
                brackets: vec![
                    TaxBracket {
                        ceiling: BracketCeiling::Bounded(60_000_000),
                        rate: Decimal::new(10, 2),
                    },
                    TaxBracket {
                        ceiling: BracketCeiling::Bounded(80_000_000),
                        rate: Decimal::new(15, 2),
                    },
                    TaxBracket {
                        ceiling: BracketCeiling::Bounded(120_000_000),
                        rate: Decimal::new(20, 2),
                    },
                    TaxBracket {
                        ceiling: BracketCeiling::Bounded(166_666_667),
                        rate: Decimal::new(25, 2),
                    },
                    TaxBracket {
                        ceiling: BracketCeiling::Unbounded,
                        rate: Decimal::new(30, 2),
                    },
                ],
            },
        }
    }

    /// Validates the structural integrity of the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the configuration is usable, or
    /// `InvalidConfiguration` if:
    /// - `workHoursMonthly` is not positive
    /// - any insurance rate, allowance amount, exemption, or bracket rate
    ///   is negative
    /// - bracket caps are not strictly increasing
    /// - an unbounded bracket appears anywhere but last
    ///
    /// An empty bracket list is valid; income above the exemption is then
    /// simply untaxed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.work_hours_monthly <= Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: "workHoursMonthly must be positive".to_string(),
            });
        }

        let rates = [
            ("insurance.worker", self.insurance.worker),
            ("insurance.employer", self.insurance.employer),
            ("insurance.unemployment", self.insurance.unemployment),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("{} rate cannot be negative", name),
                });
            }
        }

        let amounts = [
            ("allowances.housing", self.allowances.housing),
            ("allowances.food", self.allowances.food),
            ("allowances.childPerKid", self.allowances.child_per_kid),
            ("tax.exemptionMonthly", self.tax.exemption_monthly),
        ];
        for (name, amount) in amounts {
            if amount < 0 {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("{} cannot be negative", name),
                });
            }
        }

        let mut previous_cap: i64 = 0;
        let last_index = self.tax.brackets.len().saturating_sub(1);
        for (index, bracket) in self.tax.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("tax.brackets[{}] rate cannot be negative", index),
                });
            }
            match bracket.ceiling {
                BracketCeiling::Bounded(cap) => {
                    if cap <= previous_cap {
                        return Err(EngineError::InvalidConfiguration {
                            message: format!(
                                "tax.brackets[{}] cap {} must exceed previous cap {}",
                                index, cap, previous_cap
                            ),
                        });
                    }
                    previous_cap = cap;
                }
                BracketCeiling::Unbounded => {
                    if index != last_index {
                        return Err(EngineError::InvalidConfiguration {
                            message: format!(
                                "tax.brackets[{}] is unbounded but not the last bracket",
                                index
                            ),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
