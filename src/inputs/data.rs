//! Request data structures: the raw form values and the validated engine input

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::rates::{Industry, Region};

fn default_region() -> String {
    Region::Eu.key().to_string()
}

fn default_industry() -> String {
    Industry::Retail.key().to_string()
}

/// A request as submitted by the caller
///
/// Keys are free text and numbers are unchecked. `investment` may be absent,
/// in which case it counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Region key (eu, us, asia, latam, afr)
    #[serde(default = "default_region")]
    pub region: String,

    /// Industry key (retail, services, industry)
    #[serde(default = "default_industry")]
    pub industry: String,

    /// Initial investment in fixed assets
    #[serde(default)]
    pub investment: Option<f64>,

    /// Owner monthly net salary
    pub owner_salary: f64,

    /// Monthly rent and utilities as quoted
    pub rent: f64,

    /// Number of employees
    pub employee_count: i64,

    /// Average employee monthly net salary
    pub employee_salary: f64,
}

impl Default for EvaluationRequest {
    /// Starting values of the simulator form
    fn default() -> Self {
        Self {
            region: default_region(),
            industry: default_industry(),
            investment: Some(20_000.0),
            owner_salary: 2_000.0,
            rent: 3_000.0,
            employee_count: 1,
            employee_salary: 2_000.0,
        }
    }
}

impl EvaluationRequest {
    /// Resolve keys and check every number, producing an engine input
    pub fn validate(&self) -> Result<EngineInput> {
        let region: Region = self.region.parse()?;
        let industry: Industry = self.industry.parse()?;

        if self.employee_count < 0 {
            return Err(EngineError::invalid_input(
                "employee_count",
                format!("must not be negative (got {})", self.employee_count),
            ));
        }
        let employee_count = u32::try_from(self.employee_count).map_err(|_| {
            EngineError::invalid_input(
                "employee_count",
                format!("too large (got {})", self.employee_count),
            )
        })?;

        let input = EngineInput {
            region,
            industry,
            investment: self.investment.unwrap_or(0.0),
            owner_salary: self.owner_salary,
            rent: self.rent,
            employee_count,
            employee_salary: self.employee_salary,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Validated engine input with resolved table keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    pub region: Region,
    pub industry: Industry,

    /// Initial investment, amortized straight-line
    pub investment: f64,

    /// Owner monthly net salary
    pub owner_salary: f64,

    /// Monthly rent and utilities as quoted
    pub rent: f64,

    pub employee_count: u32,

    /// Average employee monthly net salary
    pub employee_salary: f64,
}

impl EngineInput {
    /// Check the numeric fields the engine relies on
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("investment", self.investment),
            ("owner_salary", self.owner_salary),
            ("rent", self.rent),
            ("employee_salary", self.employee_salary),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must be a finite number (got {})", value),
                ));
            }
            // Negative amounts would turn fixed costs and break-even negative
            if value < 0.0 {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative (got {})", value),
                ));
            }
        }

        Ok(())
    }
}
