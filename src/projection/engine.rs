//! Core financial engine: break-even, scenario projections and the baseline statement

use super::costs::{compute_break_even, compute_fixed_costs, corporate_tax, FixedCostBreakdown};
use super::results::{Evaluation, ScenarioResult, StatementRow};
use super::PROJECTION_YEARS;
use crate::error::{EngineError, Result};
use crate::inputs::{EngineInput, EvaluationRequest};
use crate::rates::RateTables;
use crate::scenario::GrowthScenario;

/// Configuration for an evaluation run
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Growth scenarios to project, in output order
    pub scenarios: Vec<GrowthScenario>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scenarios: GrowthScenario::standard_set(),
        }
    }
}

/// Values resolved once per request and shared by every projection path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Year-1 turnover (the break-even turnover)
    pub base_turnover: f64,
    pub margin_ratio: f64,
    pub corporate_tax_rate: f64,
    pub investment: f64,
    pub costs: FixedCostBreakdown,
}

/// Project net profit and cumulative cash for one growth scenario
///
/// Turnover compounds by the growth rate from year 2 onwards.
pub fn project_scenario(params: &ProjectionParams, scenario: &GrowthScenario) -> ScenarioResult {
    let mut result = ScenarioResult::new(scenario.name.clone(), scenario.growth_rate);

    let mut turnover = params.base_turnover;
    let mut cumulative_cash = -params.investment;

    for year in 1..=PROJECTION_YEARS {
        if year > 1 {
            turnover *= scenario.growth_rate;
        }

        let gross_margin = turnover * params.margin_ratio;
        let ebit = gross_margin - params.costs.yearly_fixed_costs;
        let tax = corporate_tax(ebit, params.corporate_tax_rate);
        let net_profit = ebit - tax;

        // Amortization is a non-cash charge
        cumulative_cash += net_profit + params.costs.annual_amortization;

        result.add_year(turnover, net_profit, cumulative_cash);
    }

    result
}

/// Build the detailed income statement for the baseline
///
/// Turnover stays at the base value every year; no growth is applied here.
pub fn build_statement_table(params: &ProjectionParams) -> Vec<StatementRow> {
    let mut rows = Vec::with_capacity(PROJECTION_YEARS as usize);

    let turnover = params.base_turnover;
    let amortization = params.costs.annual_amortization;
    let mut cash_position = -params.investment;
    let mut net_fixed_assets = params.investment;

    for year in 1..=PROJECTION_YEARS {
        let cogs = turnover * (1.0 - params.margin_ratio);
        let gross_margin = turnover * params.margin_ratio;
        let personnel = params.costs.annual_personnel();
        let rent_charges = params.costs.annual_rent();

        let ebitda = gross_margin - personnel - rent_charges;
        let ebit = ebitda - amortization;
        let tax = corporate_tax(ebit, params.corporate_tax_rate);
        let net_profit = ebit - tax;

        cash_position += net_profit + amortization;
        net_fixed_assets = (net_fixed_assets - amortization).max(0.0);

        rows.push(StatementRow {
            year,
            turnover,
            cogs: -cogs,
            gross_margin,
            personnel: -personnel,
            rent_charges: -rent_charges,
            ebitda,
            amortization: -amortization,
            ebit,
            tax: -tax,
            net_profit,
            cash_position,
            net_fixed_assets,
        });
    }

    rows
}

/// Main financial engine
///
/// Holds only immutable tables and configuration, so a single engine can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct FinancialEngine {
    tables: RateTables,
    config: EngineConfig,
}

impl FinancialEngine {
    /// Create a new engine with given tables and config
    pub fn new(tables: RateTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Engine over the standard tables and the standard scenario set
    pub fn standard() -> Self {
        Self::new(RateTables::standard().clone(), EngineConfig::default())
    }

    /// Validate a raw request and evaluate it
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation> {
        let input = request.validate()?;
        self.evaluate_input(&input)
    }

    /// Evaluate an already-resolved input
    ///
    /// Every check runs before any projection, so a failure never leaves a
    /// partial result behind.
    pub fn evaluate_input(&self, input: &EngineInput) -> Result<Evaluation> {
        input.validate()?;
        for scenario in &self.config.scenarios {
            scenario.validate()?;
        }

        let sector = self.tables.sector(input.industry)?;
        let zone = self.tables.tax_zone(input.region)?;

        let costs = compute_fixed_costs(input, zone);
        check_finite("yearly_fixed_costs", costs.yearly_fixed_costs)?;
        let break_even_turnover =
            compute_break_even(costs.yearly_fixed_costs, sector.margin_ratio)?;
        check_finite("break_even_turnover", break_even_turnover)?;

        log::debug!(
            "Evaluating {}/{}: fixed costs {:.2}, break-even {:.2}",
            input.region,
            input.industry,
            costs.yearly_fixed_costs,
            break_even_turnover
        );

        let params = ProjectionParams {
            base_turnover: break_even_turnover,
            margin_ratio: sector.margin_ratio,
            corporate_tax_rate: zone.corporate_tax_rate,
            investment: input.investment,
            costs,
        };

        let scenarios: Vec<ScenarioResult> = self
            .config
            .scenarios
            .iter()
            .map(|scenario| project_scenario(&params, scenario))
            .collect();

        // Growth can push a huge but finite base turnover past f64::MAX
        for scenario in &scenarios {
            for &turnover in &scenario.turnover_by_year {
                check_finite("break_even_turnover", turnover)?;
            }
        }

        for scenario in scenarios.iter().filter(|s| s.final_cash() < 0.0) {
            log::debug!(
                "Scenario '{}' ends year {} with negative cash {:.2}",
                scenario.name,
                PROJECTION_YEARS,
                scenario.final_cash()
            );
        }

        Ok(Evaluation {
            input: input.clone(),
            break_even_turnover,
            corporate_tax_rate: zone.corporate_tax_rate,
            fixed_costs: costs,
            scenarios,
            statement: build_statement_table(&params),
        })
    }
}

/// Amounts derived from valid inputs can still overflow to infinity
fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid_input(
            field,
            format!("amounts are too large to evaluate (got {})", value),
        ))
    }
}
