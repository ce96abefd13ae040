//! Core data models for the payroll engine.
//!
//! This module contains the input and result types used throughout the
//! engine.

mod input;
mod result;

pub use input::{PayrollInput, WageMode};
pub use result::{AllowanceBreakdown, InsuranceBreakdown, PayrollResult};
