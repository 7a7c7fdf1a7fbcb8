//! Feasibility Engine - financial feasibility projections for small businesses
//!
//! This library provides:
//! - Sector and regional tax rate tables (built-in or loaded from CSV)
//! - Fixed cost and break-even turnover calculation
//! - Three-year net profit and cash projections under growth scenarios
//! - A baseline income statement and its CSV export

pub mod error;
pub mod rates;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use rates::{Industry, RateTables, Region, SectorProfile, TaxZone};
pub use inputs::{EngineInput, EvaluationRequest};
pub use projection::{EngineConfig, Evaluation, FinancialEngine, ScenarioResult, StatementRow};
pub use scenario::{GrowthScenario, ScenarioRunner};

/// Evaluate one request against the standard tables and scenario set
///
/// A missing `investment` counts as zero.
pub fn evaluate(
    region: &str,
    industry: &str,
    investment: Option<f64>,
    owner_salary: f64,
    rent: f64,
    employee_count: i64,
    employee_salary: f64,
) -> Result<Evaluation> {
    let request = EvaluationRequest {
        region: region.to_string(),
        industry: industry.to_string(),
        investment,
        owner_salary,
        rent,
        employee_count,
        employee_salary,
    };
    FinancialEngine::standard().evaluate(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_contract() {
        let result =
            evaluate("us", "retail", Some(20_000.0), 2_000.0, 3_000.0, 1, 2_000.0).unwrap();
        assert!((result.break_even_turnover - 268_000.0).abs() < 1e-6);
        assert_eq!(result.corporate_tax_rate, 0.21);
        assert_eq!(result.scenarios.len(), 3);
        assert_eq!(result.statement.len(), 3);
    }

    #[test]
    fn test_evaluate_rejects_bad_keys() {
        let err = evaluate("moon", "retail", None, 2_000.0, 3_000.0, 0, 0.0).unwrap_err();
        assert!(err.is_input_error());
    }
}
