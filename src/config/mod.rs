//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configurations from
//! YAML or JSON files, including work hours, insurance rates, allowance
//! amounts, and the progressive tax schedule.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll-1404.yaml").unwrap();
//! println!("Loaded payroll year: {}", loader.config().year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, BracketCeiling, InsuranceRates, PayrollConfig, TaxBracket, TaxConfig,
};
