//! CSV-based rate table loader
//!
//! Loads sector and tax-zone tables from CSV files in data/rates/

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{Industry, Region, SectorProfile, TaxZone};
use crate::error::{EngineError, Result};

/// Default path to rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Sector table file name
pub const SECTORS_FILE: &str = "sectors.csv";

/// Tax-zone table file name
pub const TAX_ZONES_FILE: &str = "tax_zones.csv";

/// Raw row of sectors.csv
#[derive(Debug, Deserialize)]
struct SectorRow {
    industry: String,
    margin: f64,
    stock_need: f64,
    label: String,
}

/// Raw row of tax_zones.csv
#[derive(Debug, Deserialize)]
struct TaxZoneRow {
    region: String,
    salary_tax: f64,
    corp_tax: f64,
    label: String,
}

/// Load sector profiles from any reader
/// Unknown industry keys are table defects and are rejected rather than skipped
pub fn load_sectors_from_reader<R: Read>(reader: R) -> Result<Vec<(Industry, SectorProfile)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sectors = Vec::new();

    for result in csv_reader.deserialize() {
        let row: SectorRow = result?;
        let industry: Industry = row.industry.parse().map_err(|_| {
            EngineError::invalid_table("sectors", format!("unknown industry '{}'", row.industry))
        })?;
        let profile = SectorProfile::new(row.margin, row.stock_need, row.label);
        sectors.push((industry, profile));
    }

    Ok(sectors)
}

/// Load tax zones from any reader
pub fn load_tax_zones_from_reader<R: Read>(reader: R) -> Result<Vec<(Region, TaxZone)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut zones = Vec::new();

    for result in csv_reader.deserialize() {
        let row: TaxZoneRow = result?;
        let region: Region = row.region.parse().map_err(|_| {
            EngineError::invalid_table("tax_zones", format!("unknown region '{}'", row.region))
        })?;
        zones.push((region, TaxZone::new(row.salary_tax, row.corp_tax, row.label)));
    }

    Ok(zones)
}

/// Load sector profiles from `<dir>/sectors.csv`
pub fn load_sectors(dir: &Path) -> Result<Vec<(Industry, SectorProfile)>> {
    let file = File::open(dir.join(SECTORS_FILE))?;
    load_sectors_from_reader(file)
}

/// Load tax zones from `<dir>/tax_zones.csv`
pub fn load_tax_zones(dir: &Path) -> Result<Vec<(Region, TaxZone)>> {
    let file = File::open(dir.join(TAX_ZONES_FILE))?;
    load_tax_zones_from_reader(file)
}
