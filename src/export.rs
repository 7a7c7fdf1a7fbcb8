//! Presentation helpers: currency formatting and the transposed statement export
//!
//! The export is a transient render: one row per metric, one column per year,
//! cells formatted as currency.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::StatementRow;

/// Currency symbol used by the simulator
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Format an amount with thousands separators and no decimals, e.g. `€268,000`
///
/// The sign follows the symbol: `€-1,234`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", symbol, sign, grouped)
}

/// Format a fraction as a percentage with one decimal, e.g. `21.0%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Transpose statement rows into a grid of formatted cells
///
/// The first row is the header (`Metric`, `Year 1`, ...); each following row
/// is one metric.
pub fn statement_grid(rows: &[StatementRow], symbol: &str) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(StatementRow::METRICS.len() + 1);

    let mut header = vec!["Metric".to_string()];
    header.extend(rows.iter().map(|r| r.year_label()));
    grid.push(header);

    let values: Vec<[f64; 12]> = rows.iter().map(|r| r.metric_values()).collect();
    for (idx, metric) in StatementRow::METRICS.iter().enumerate() {
        let mut line = vec![metric.to_string()];
        line.extend(values.iter().map(|v| format_currency(v[idx], symbol)));
        grid.push(line);
    }

    grid
}

/// Write the transposed statement as CSV to any writer
pub fn write_statement_csv<W: Write>(writer: W, rows: &[StatementRow], symbol: &str) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for line in statement_grid(rows, symbol) {
        csv_writer.write_record(&line)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the transposed statement as CSV to a file
pub fn write_statement_csv_path<P: AsRef<Path>>(
    path: P,
    rows: &[StatementRow],
    symbol: &str,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_statement_csv(file, rows, symbol)?;
    log::info!("Statement written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::EvaluationRequest;
    use crate::projection::FinancialEngine;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(268_000.0, "€"), "€268,000");
        assert_eq!(format_currency(999.0, "€"), "€999");
        assert_eq!(format_currency(1_000.0, "$"), "$1,000");
        assert_eq!(format_currency(1_234_567.4, "€"), "€1,234,567");
        assert_eq!(format_currency(-160_800.0, "€"), "€-160,800");
        assert_eq!(format_currency(0.0, "€"), "€0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.21), "21.0%");
        assert_eq!(format_percent(0.25), "25.0%");
        assert_eq!(format_percent(0.17), "17.0%");
    }

    #[test]
    fn test_statement_csv_layout() {
        let request = EvaluationRequest {
            region: "us".into(),
            industry: "retail".into(),
            ..Default::default()
        };
        let result = FinancialEngine::standard().evaluate(&request).unwrap();

        let mut buffer = Vec::new();
        write_statement_csv(&mut buffer, &result.statement, DEFAULT_CURRENCY_SYMBOL).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Metric,Year 1,Year 2,Year 3");
        // Thousands separators force quoting
        assert_eq!(lines[1], "Turnover,\"€268,000\",\"€268,000\",\"€268,000\"");
        assert!(lines[12].starts_with("Net Assets,"));
    }

    #[test]
    fn test_grid_has_one_row_per_metric() {
        let result = FinancialEngine::standard().evaluate(&EvaluationRequest::default()).unwrap();
        let grid = statement_grid(&result.statement, "€");

        assert_eq!(grid.len(), StatementRow::METRICS.len() + 1);
        assert!(grid.iter().all(|line| line.len() == 4));
        assert_eq!(grid[9][0], "Tax");
    }
}
