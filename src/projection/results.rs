//! Output structures for an evaluation

use serde::{Deserialize, Serialize};

use super::FixedCostBreakdown;
use crate::inputs::EngineInput;

/// Three-year projection under one growth assumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,

    /// Year-over-year turnover multiplier, applied from year 2
    pub growth_rate: f64,

    pub turnover_by_year: Vec<f64>,
    pub net_profit_by_year: Vec<f64>,
    pub cumulative_cash_by_year: Vec<f64>,
}

impl ScenarioResult {
    pub fn new(name: impl Into<String>, growth_rate: f64) -> Self {
        Self {
            name: name.into(),
            growth_rate,
            turnover_by_year: Vec::new(),
            net_profit_by_year: Vec::new(),
            cumulative_cash_by_year: Vec::new(),
        }
    }

    /// Record one simulated year
    pub fn add_year(&mut self, turnover: f64, net_profit: f64, cumulative_cash: f64) {
        self.turnover_by_year.push(turnover);
        self.net_profit_by_year.push(net_profit);
        self.cumulative_cash_by_year.push(cumulative_cash);
    }

    /// Cash position at the end of the last simulated year
    pub fn final_cash(&self) -> f64 {
        self.cumulative_cash_by_year.last().copied().unwrap_or(0.0)
    }

    /// First year (1-indexed) whose cumulative cash is no longer negative
    pub fn payback_year(&self) -> Option<u32> {
        self.cumulative_cash_by_year
            .iter()
            .position(|&cash| cash >= 0.0)
            .map(|idx| idx as u32 + 1)
    }
}

/// One fiscal year of the baseline income statement
///
/// Costs are negative, income positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Fiscal year (1-indexed)
    pub year: u32,

    pub turnover: f64,
    pub cogs: f64,
    pub gross_margin: f64,
    pub personnel: f64,
    pub rent_charges: f64,
    pub ebitda: f64,
    pub amortization: f64,
    pub ebit: f64,
    pub tax: f64,
    pub net_profit: f64,

    /// Cumulative cash, starting from minus the investment
    pub cash_position: f64,

    /// Remaining book value of the investment
    pub net_fixed_assets: f64,
}

impl StatementRow {
    /// Metric names in statement order
    pub const METRICS: [&'static str; 12] = [
        "Turnover",
        "COGS",
        "Gross Margin",
        "Personnel",
        "Rent/Charges",
        "EBITDA",
        "Amortization",
        "EBIT",
        "Tax",
        "Net Profit",
        "Cash Position",
        "Net Assets",
    ];

    /// Column label, e.g. "Year 1"
    pub fn year_label(&self) -> String {
        format!("Year {}", self.year)
    }

    /// Values in the same order as `METRICS`
    pub fn metric_values(&self) -> [f64; 12] {
        [
            self.turnover,
            self.cogs,
            self.gross_margin,
            self.personnel,
            self.rent_charges,
            self.ebitda,
            self.amortization,
            self.ebit,
            self.tax,
            self.net_profit,
            self.cash_position,
            self.net_fixed_assets,
        ]
    }
}

/// Complete result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The validated input this result was computed from
    pub input: EngineInput,

    pub break_even_turnover: f64,

    /// Corporate tax rate of the request's zone
    pub corporate_tax_rate: f64,

    pub fixed_costs: FixedCostBreakdown,

    /// One entry per configured growth scenario, in configuration order
    pub scenarios: Vec<ScenarioResult>,

    /// Baseline income statement, one row per year
    pub statement: Vec<StatementRow>,
}

impl Evaluation {
    /// Find a scenario by name
    pub fn scenario(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Get summary statistics
    pub fn summary(&self) -> EvaluationSummary {
        let best = self
            .scenarios
            .iter()
            .max_by(|a, b| a.final_cash().total_cmp(&b.final_cash()));
        let worst = self
            .scenarios
            .iter()
            .min_by(|a, b| a.final_cash().total_cmp(&b.final_cash()));

        EvaluationSummary {
            break_even_turnover: self.break_even_turnover,
            monthly_break_even_turnover: self.break_even_turnover / 12.0,
            yearly_fixed_costs: self.fixed_costs.yearly_fixed_costs,
            statement_net_profit: self.statement.iter().map(|r| r.net_profit).sum(),
            best_scenario: best.map(|s| s.name.clone()),
            best_final_cash: best.map(|s| s.final_cash()).unwrap_or(0.0),
            worst_scenario: worst.map(|s| s.name.clone()),
            worst_final_cash: worst.map(|s| s.final_cash()).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for an evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub break_even_turnover: f64,
    pub monthly_break_even_turnover: f64,
    pub yearly_fixed_costs: f64,
    /// Net profit summed over the statement years
    pub statement_net_profit: f64,
    pub best_scenario: Option<String>,
    pub best_final_cash: f64,
    pub worst_scenario: Option<String>,
    pub worst_final_cash: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_accumulates_years() {
        let mut result = ScenarioResult::new("Stagnation", 1.0);
        result.add_year(100.0, -10.0, -110.0);
        result.add_year(100.0, 5.0, -50.0);
        result.add_year(100.0, 5.0, 20.0);

        assert_eq!(result.net_profit_by_year, vec![-10.0, 5.0, 5.0]);
        assert_eq!(result.final_cash(), 20.0);
        assert_eq!(result.payback_year(), Some(3));
    }

    #[test]
    fn test_no_payback_while_cash_negative() {
        let mut result = ScenarioResult::new("Recession (-5%)", 0.95);
        result.add_year(100.0, -10.0, -110.0);
        assert_eq!(result.payback_year(), None);
        assert_eq!(ScenarioResult::new("empty", 1.0).final_cash(), 0.0);
    }

    #[test]
    fn test_metric_values_follow_metric_order() {
        let row = StatementRow {
            year: 2,
            turnover: 1.0,
            cogs: 2.0,
            gross_margin: 3.0,
            personnel: 4.0,
            rent_charges: 5.0,
            ebitda: 6.0,
            amortization: 7.0,
            ebit: 8.0,
            tax: 9.0,
            net_profit: 10.0,
            cash_position: 11.0,
            net_fixed_assets: 12.0,
        };
        let values = row.metric_values();
        assert_eq!(values.len(), StatementRow::METRICS.len());
        assert_eq!(values[0], 1.0);
        assert_eq!(values[11], 12.0);
        assert_eq!(row.year_label(), "Year 2");
    }
}
