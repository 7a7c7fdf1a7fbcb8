//! Load evaluation requests from CSV
//!
//! Columns: region,industry,investment,owner_salary,rent,employee_count,employee_salary.
//! An empty investment cell is read as "not provided".

use std::io::Read;
use std::path::Path;

use csv::Reader;

use super::EvaluationRequest;
use crate::error::Result;

/// Default location of the sample request file
pub const DEFAULT_REQUESTS_PATH: &str = "data/requests.csv";

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<EvaluationRequest>> {
    let reader = Reader::from_path(path)?;
    collect_requests(reader)
}

/// Load requests from any reader (e.g., string buffer, network stream)
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<EvaluationRequest>> {
    collect_requests(Reader::from_reader(reader))
}

fn collect_requests<R: Read>(mut reader: Reader<R>) -> Result<Vec<EvaluationRequest>> {
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let request: EvaluationRequest = result?;
        requests.push(request);
    }

    log::info!("Loaded {} evaluation requests", requests.len());
    Ok(requests)
}
