//! Payroll Computation Engine
//!
//! This crate provides functionality for computing monthly payroll
//! breakdowns under Iranian wage, insurance, and progressive income tax
//! rules (payroll year 1404), from a declared wage in daily, monthly, or
//! hourly terms.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
