//! Financial engine: fixed costs, break-even, growth scenarios and the baseline statement

mod costs;
mod engine;
mod results;

pub use costs::{compute_break_even, compute_fixed_costs, corporate_tax, FixedCostBreakdown};
pub use engine::{
    build_statement_table, project_scenario, EngineConfig, FinancialEngine, ProjectionParams,
};
pub use results::{Evaluation, EvaluationSummary, ScenarioResult, StatementRow};

/// Loading applied to quoted rent to cover utilities and incidentals
pub const RENT_LOADING: f64 = 1.2;

/// Straight-line amortization horizon of the initial investment, in years
pub const AMORTIZATION_YEARS: f64 = 5.0;

/// Number of simulated fiscal years
pub const PROJECTION_YEARS: u32 = 3;
