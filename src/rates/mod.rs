//! Reference rate tables: sector economics and regional tax zones

mod sector;
mod tax;
pub mod loader;

pub use sector::{Industry, SectorProfile};
pub use tax::{Region, TaxZone};

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{EngineError, Result};

/// Container for both lookup tables
///
/// Tables are validated on construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RateTables {
    sectors: HashMap<Industry, SectorProfile>,
    zones: HashMap<Region, TaxZone>,
}

impl RateTables {
    /// Build tables from explicit entries, validating every rate
    pub fn new(
        sectors: impl IntoIterator<Item = (Industry, SectorProfile)>,
        zones: impl IntoIterator<Item = (Region, TaxZone)>,
    ) -> Result<Self> {
        let mut tables = Self {
            sectors: HashMap::new(),
            zones: HashMap::new(),
        };
        for (industry, profile) in sectors {
            if tables.sectors.insert(industry, profile).is_some() {
                return Err(EngineError::invalid_table(
                    "sectors",
                    format!("duplicate industry '{}'", industry),
                ));
            }
        }
        for (region, zone) in zones {
            if tables.zones.insert(region, zone).is_some() {
                return Err(EngineError::invalid_table(
                    "tax_zones",
                    format!("duplicate region '{}'", region),
                ));
            }
        }
        tables.validate()?;
        Ok(tables)
    }

    /// Process-wide standard tables, built once on first use
    pub fn standard() -> &'static RateTables {
        static STANDARD: OnceLock<RateTables> = OnceLock::new();
        STANDARD.get_or_init(|| RateTables {
            sectors: sector::standard_sectors().into_iter().collect(),
            zones: tax::standard_zones().into_iter().collect(),
        })
    }

    /// Load tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(dir: &Path) -> Result<Self> {
        let sectors = loader::load_sectors(dir)?;
        let zones = loader::load_tax_zones(dir)?;
        log::info!(
            "Loaded {} sector profiles and {} tax zones from {}",
            sectors.len(),
            zones.len(),
            dir.display()
        );
        Self::new(sectors, zones)
    }

    /// Look up the sector profile for an industry
    pub fn sector(&self, industry: Industry) -> Result<&SectorProfile> {
        self.sectors
            .get(&industry)
            .ok_or_else(|| EngineError::UnknownIndustry(industry.to_string()))
    }

    /// Look up the tax zone for a region
    pub fn tax_zone(&self, region: Region) -> Result<&TaxZone> {
        self.zones
            .get(&region)
            .ok_or_else(|| EngineError::UnknownRegion(region.to_string()))
    }

    /// (key, label) pairs for every industry, in picker order
    pub fn industry_options(&self) -> Vec<(Industry, &str)> {
        Industry::ALL
            .iter()
            .filter_map(|&industry| {
                self.sectors
                    .get(&industry)
                    .map(|s| (industry, s.label.as_str()))
            })
            .collect()
    }

    /// (key, label) pairs for every region, in picker order
    pub fn region_options(&self) -> Vec<(Region, &str)> {
        Region::ALL
            .iter()
            .filter_map(|&region| self.zones.get(&region).map(|z| (region, z.label.as_str())))
            .collect()
    }

    /// Every key present and every rate a fraction in [0, 1]
    fn validate(&self) -> Result<()> {
        for industry in Industry::ALL {
            let sector = self.sectors.get(&industry).ok_or_else(|| {
                EngineError::invalid_table("sectors", format!("missing industry '{}'", industry))
            })?;
            check_fraction("sectors", industry.key(), "margin", sector.margin_ratio)?;
            check_fraction("sectors", industry.key(), "stock_need", sector.stock_need_ratio)?;
        }

        for region in Region::ALL {
            let zone = self.zones.get(&region).ok_or_else(|| {
                EngineError::invalid_table("tax_zones", format!("missing region '{}'", region))
            })?;
            check_fraction("tax_zones", region.key(), "salary_tax", zone.salary_tax_rate)?;
            check_fraction("tax_zones", region.key(), "corp_tax", zone.corporate_tax_rate)?;
        }

        Ok(())
    }
}

/// Comma-separated keys of a picker option list, e.g. "eu, us, asia"
pub fn option_keys<K: fmt::Display>(options: &[(K, &str)]) -> String {
    options
        .iter()
        .map(|(key, _)| key.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_fraction(table: &'static str, key: &str, column: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::invalid_table(
            table,
            format!("{} for '{}' must be in [0, 1], got {}", column, key, value),
        ))
    }
}
