//! Fixed cost structure and break-even turnover

use serde::{Deserialize, Serialize};

use super::{AMORTIZATION_YEARS, RENT_LOADING};
use crate::error::{EngineError, Result};
use crate::inputs::EngineInput;
use crate::rates::TaxZone;

/// Fixed costs of the business, monthly and annualised
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCostBreakdown {
    /// Owner and staff salaries including employer burden
    pub monthly_salary_cost: f64,

    /// Rent with the utilities loading applied
    pub monthly_rent: f64,

    /// Straight-line write-down of the investment
    pub annual_amortization: f64,

    /// (salaries + rent) * 12 + amortization
    pub yearly_fixed_costs: f64,
}

impl FixedCostBreakdown {
    /// Personnel cost over a year
    pub fn annual_personnel(&self) -> f64 {
        self.monthly_salary_cost * 12.0
    }

    /// Rent and charges over a year
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }
}

/// Compute the fixed cost breakdown for a request
///
/// Sector economics do not enter fixed costs; only the zone's salary burden does.
pub fn compute_fixed_costs(input: &EngineInput, zone: &TaxZone) -> FixedCostBreakdown {
    let salary_multiplier = zone.salary_multiplier();

    let annual_amortization = input.investment / AMORTIZATION_YEARS;
    let monthly_salary_cost = input.owner_salary * salary_multiplier
        + input.employee_count as f64 * input.employee_salary * salary_multiplier;
    let monthly_rent = input.rent * RENT_LOADING;
    let yearly_fixed_costs = (monthly_salary_cost + monthly_rent) * 12.0 + annual_amortization;

    FixedCostBreakdown {
        monthly_salary_cost,
        monthly_rent,
        annual_amortization,
        yearly_fixed_costs,
    }
}

/// Annual turnover at which gross margin exactly covers fixed costs
pub fn compute_break_even(yearly_fixed_costs: f64, margin_ratio: f64) -> Result<f64> {
    if !margin_ratio.is_finite() || margin_ratio <= 0.0 {
        return Err(EngineError::ZeroMarginRatio { margin_ratio });
    }
    Ok(yearly_fixed_costs / margin_ratio)
}

/// Corporate tax on pre-tax profit; losses owe nothing and carry nothing back
pub fn corporate_tax(ebit: f64, corporate_tax_rate: f64) -> f64 {
    if ebit > 0.0 {
        ebit * corporate_tax_rate
    } else {
        0.0
    }
}
