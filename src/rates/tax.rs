//! Regional tax zones: employer salary burden and corporate income tax
//!
//! Statutory rates follow the OECD Corporate Tax Statistics 2025 and
//! Taxing Wages 2025 publications, rounded to a representative value per zone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Region key of the tax-zone table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Us,
    Asia,
    Latam,
    Afr,
}

impl Region {
    /// Every region, in picker order
    pub const ALL: [Region; 5] = [Region::Eu, Region::Us, Region::Asia, Region::Latam, Region::Afr];

    /// Table key as used in requests and CSV files
    pub fn key(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Us => "us",
            Region::Asia => "asia",
            Region::Latam => "latam",
            Region::Afr => "afr",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.key() == key)
            .ok_or_else(|| EngineError::UnknownRegion(s.to_string()))
    }
}

/// Tax rates of one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxZone {
    /// Employer burden added on top of net salary
    pub salary_tax_rate: f64,

    /// Tax owed on positive pre-tax profit
    pub corporate_tax_rate: f64,

    /// Human-readable name
    pub label: String,
}

impl TaxZone {
    pub fn new(salary_tax_rate: f64, corporate_tax_rate: f64, label: impl Into<String>) -> Self {
        Self {
            salary_tax_rate,
            corporate_tax_rate,
            label: label.into(),
        }
    }

    /// Factor turning a net salary into its total employer cost
    pub fn salary_multiplier(&self) -> f64 {
        1.0 + self.salary_tax_rate
    }
}

/// Standard tax zones
pub(crate) fn standard_zones() -> Vec<(Region, TaxZone)> {
    vec![
        (Region::Eu, TaxZone::new(0.85, 0.25, "Europe (France/Germany/Italy)")),
        (Region::Us, TaxZone::new(0.25, 0.21, "North America (USA/Canada)")),
        (Region::Asia, TaxZone::new(0.20, 0.17, "Asia (SG/HK/Japan)")),
        (Region::Latam, TaxZone::new(0.60, 0.34, "South America (Brazil)")),
        (Region::Afr, TaxZone::new(0.15, 0.30, "Africa (Nigeria/SA)")),
    ]
}
