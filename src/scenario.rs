//! Growth scenarios and a runner for batch evaluations
//!
//! The runner holds the rate tables once and evaluates many requests or many
//! scenario configurations against them.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::inputs::EvaluationRequest;
use crate::projection::{EngineConfig, Evaluation, FinancialEngine};
use crate::rates::RateTables;

/// Name of the flat-turnover scenario
pub const STAGNATION: &str = "Stagnation";

/// Name of the +5% scenario
pub const GROWTH: &str = "Growth (+5%)";

/// Name of the -5% scenario
pub const RECESSION: &str = "Recession (-5%)";

/// A named year-over-year turnover multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthScenario {
    pub name: String,
    pub growth_rate: f64,
}

impl GrowthScenario {
    pub fn new(name: impl Into<String>, growth_rate: f64) -> Self {
        Self {
            name: name.into(),
            growth_rate,
        }
    }

    /// Stagnation, Growth (+5%) and Recession (-5%), in that order
    pub fn standard_set() -> Vec<GrowthScenario> {
        vec![
            GrowthScenario::new(STAGNATION, 1.0),
            GrowthScenario::new(GROWTH, 1.05),
            GrowthScenario::new(RECESSION, 0.95),
        ]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            return Err(EngineError::invalid_input(
                "growth_rate",
                format!(
                    "scenario '{}' needs a finite, non-negative rate (got {})",
                    self.name, self.growth_rate
                ),
            ));
        }
        Ok(())
    }
}

/// Pre-loaded runner for batch evaluations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&requests, EngineConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    tables: RateTables,
}

impl ScenarioRunner {
    /// Create runner with the standard in-memory tables
    pub fn new() -> Self {
        Self {
            tables: RateTables::standard().clone(),
        }
    }

    /// Create runner by loading tables from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            tables: RateTables::from_csv()?,
        })
    }

    /// Create runner from a specific rates directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            tables: RateTables::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: RateTables) -> Self {
        Self { tables }
    }

    /// Evaluate a single request with the given config
    pub fn run(&self, request: &EvaluationRequest, config: EngineConfig) -> Result<Evaluation> {
        FinancialEngine::new(self.tables.clone(), config).evaluate(request)
    }

    /// Evaluate many requests in parallel with the same config
    ///
    /// Results keep request order; a failing request does not affect the others.
    pub fn run_batch(
        &self,
        requests: &[EvaluationRequest],
        config: EngineConfig,
    ) -> Vec<Result<Evaluation>> {
        let engine = FinancialEngine::new(self.tables.clone(), config);
        requests.par_iter().map(|request| engine.evaluate(request)).collect()
    }

    /// Evaluate one request under several configurations
    pub fn run_scenarios(
        &self,
        request: &EvaluationRequest,
        configs: &[EngineConfig],
    ) -> Vec<Result<Evaluation>> {
        configs
            .iter()
            .map(|config| self.run(request, config.clone()))
            .collect()
    }

    /// Get reference to the tables for inspection
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{Industry, Region};

    #[test]
    fn test_standard_set_order() {
        let set = GrowthScenario::standard_set();
        let names: Vec<_> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![STAGNATION, GROWTH, RECESSION]);
        assert_eq!(set[1].growth_rate, 1.05);
        assert_eq!(set[2].growth_rate, 0.95);
    }

    #[test]
    fn test_invalid_growth_rate() {
        assert!(GrowthScenario::new("Collapse", -0.5).validate().is_err());
        assert!(GrowthScenario::new("Boom", f64::INFINITY).validate().is_err());
        assert!(GrowthScenario::new("Flat", 1.0).validate().is_ok());
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();

        let requests: Vec<_> = [0.0, 20_000.0, 50_000.0]
            .iter()
            .map(|&investment| EvaluationRequest {
                region: "us".into(),
                industry: "retail".into(),
                investment: Some(investment),
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&requests, EngineConfig::default());
        assert_eq!(results.len(), 3);

        // More investment means more amortization and a higher break-even
        let break_evens: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().break_even_turnover)
            .collect();
        assert!(break_evens[0] < break_evens[1]);
        assert!(break_evens[1] < break_evens[2]);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let runner = ScenarioRunner::new();
        let requests = vec![
            EvaluationRequest::default(),
            EvaluationRequest {
                region: "mars".into(),
                ..Default::default()
            },
            EvaluationRequest::default(),
        ];

        let results = runner.run_batch(&requests, EngineConfig::default());
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(EngineError::UnknownRegion(_))));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_run_scenarios_with_custom_sets() {
        let runner = ScenarioRunner::new();
        let request = EvaluationRequest::default();
        let configs = vec![
            EngineConfig::default(),
            EngineConfig {
                scenarios: vec![GrowthScenario::new("Boom (+20%)", 1.20)],
            },
        ];

        let results = runner.run_scenarios(&request, &configs);
        assert_eq!(results[0].as_ref().unwrap().scenarios.len(), 3);

        let boom = results[1].as_ref().unwrap();
        let stagnation = &results[0].as_ref().unwrap().scenarios[0];
        assert_eq!(boom.scenarios.len(), 1);
        assert!(boom.scenarios[0].final_cash() > stagnation.final_cash());
    }

    #[test]
    fn test_runner_with_custom_tables() {
        // Halve the US corporate tax rate
        let zones = Region::ALL.map(|region| {
            let mut zone = RateTables::standard().tax_zone(region).unwrap().clone();
            if region == Region::Us {
                zone.corporate_tax_rate = 0.105;
            }
            (region, zone)
        });
        let sectors = Industry::ALL.map(|industry| {
            let profile = RateTables::standard().sector(industry).unwrap().clone();
            (industry, profile)
        });
        let runner = ScenarioRunner::with_tables(RateTables::new(sectors, zones).unwrap());

        let request = EvaluationRequest {
            region: "us".into(),
            ..Default::default()
        };
        let result = runner.run(&request, EngineConfig::default()).unwrap();
        assert_eq!(result.corporate_tax_rate, 0.105);
        let zone = runner.tables().tax_zone(Region::Us).unwrap();
        assert_eq!(zone.corporate_tax_rate, 0.105);
    }
}
