//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for computing monthly
//! payroll breakdowns.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, PayrollReport};
pub use state::AppState;
