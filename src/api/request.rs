//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::config::PayrollConfig;
use crate::models::PayrollInput;

/// Request body for the `/calculate` endpoint.
///
/// Contains the worker's payroll input and, optionally, a full
/// configuration override. When `config` is omitted the server's loaded
/// configuration is used; a supplied override applies to this request
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The payroll input for the worker.
    pub input: PayrollInput,
    /// Optional configuration override for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PayrollConfig>,
}
