//! Sector economics: margin and stock-need ratios by industry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Industry key of the sector table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    /// Store-front retail
    Retail,
    /// Consulting and other services
    Services,
    /// Manufacturing
    Industry,
}

impl Industry {
    /// Every industry, in picker order
    pub const ALL: [Industry; 3] = [Industry::Retail, Industry::Services, Industry::Industry];

    /// Table key as used in requests and CSV files
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Retail => "retail",
            Industry::Services => "services",
            Industry::Industry => "industry",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Industry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Industry::ALL
            .into_iter()
            .find(|industry| industry.key() == key)
            .ok_or_else(|| EngineError::UnknownIndustry(s.to_string()))
    }
}

/// Economics of one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorProfile {
    /// Fraction of turnover kept after cost of goods sold
    pub margin_ratio: f64,

    /// Stock requirement as a fraction of turnover (not used by the projections)
    pub stock_need_ratio: f64,

    /// Human-readable name
    pub label: String,
}

impl SectorProfile {
    pub fn new(margin_ratio: f64, stock_need_ratio: f64, label: impl Into<String>) -> Self {
        Self {
            margin_ratio,
            stock_need_ratio,
            label: label.into(),
        }
    }
}

/// Standard sector profiles
pub(crate) fn standard_sectors() -> Vec<(Industry, SectorProfile)> {
    vec![
        (Industry::Retail, SectorProfile::new(0.40, 0.15, "Retail (Store)")),
        (Industry::Services, SectorProfile::new(0.95, 0.0, "Services (Consulting)")),
        (Industry::Industry, SectorProfile::new(0.50, 0.20, "Industry (Manufacturing)")),
    ]
}
