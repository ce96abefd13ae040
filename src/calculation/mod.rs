//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for determining pay,
//! including wage normalization across declaration modes, progressive
//! income tax over cumulative brackets, monetary flooring, and the full
//! monthly payroll computation.

mod money;
mod payroll;
mod progressive_tax;
mod wage_normalizer;

pub use money::floor_rial;
pub use payroll::compute_payroll;
pub use progressive_tax::calculate_progressive_tax;
pub use wage_normalizer::{NormalizedWage, normalize_wage};
