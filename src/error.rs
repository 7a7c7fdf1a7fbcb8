//! Engine error types
//!
//! A request either evaluates completely or fails with one of these variants.
//! Bad caller input and bad rate-table data are kept apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Region identifier not present in the tax-zone table
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Industry identifier not present in the sector table
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    /// Caller-supplied value rejected before computation
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Break-even division against a sector with no margin
    #[error("Margin ratio {margin_ratio} leaves no gross margin, break-even is undefined")]
    ZeroMarginRatio { margin_ratio: f64 },

    /// Loaded rate table holds a value outside its allowed range
    #[error("Invalid rate table {table}: {reason}")]
    InvalidRateTable { table: &'static str, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_table(table: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidRateTable {
            table,
            reason: reason.into(),
        }
    }

    /// True when the failure comes from the request rather than the rate tables
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownRegion(_)
                | EngineError::UnknownIndustry(_)
                | EngineError::InvalidInput { .. }
        )
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
