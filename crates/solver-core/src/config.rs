//! Solver Configuration

use crate::error::{Result, SolveError};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/solve";

/// Multipart field carrying the image bytes
pub const DEFAULT_FIELD_NAME: &str = "image";

/// Solver service configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Full URL of the solve endpoint
    pub endpoint: String,

    /// Multipart field name for the uploaded image
    pub field_name: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
        }
    }
}

impl SolverConfig {
    /// Build from `SOLVER_ENDPOINT` captured at compile time.
    ///
    /// A WASM bundle has no process environment, so the value is baked in
    /// by the build (`SOLVER_ENDPOINT=... trunk build`).
    pub fn from_build_env() -> Self {
        Self::with_endpoint_override(option_env!("SOLVER_ENDPOINT"))
    }

    fn with_endpoint_override(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Self {
                endpoint: endpoint.into(),
                ..Default::default()
            },
            None => Self::default(),
        }
    }

    /// Point at a different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Reject configurations that can never produce a request
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SolveError::Config("endpoint is empty".into()));
        }
        if self.field_name.trim().is_empty() {
            return Err(SolveError::Config("multipart field name is empty".into()));
        }
        Ok(())
    }
}
