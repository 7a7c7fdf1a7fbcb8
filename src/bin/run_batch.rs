//! Evaluate a file of business plans in parallel
//!
//! Outputs one summary row per request; failed requests are reported, not fatal

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use feasibility_engine::inputs::{load_requests, loader::DEFAULT_REQUESTS_PATH};
use feasibility_engine::{EngineConfig, GrowthScenario, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(about = "Evaluate many feasibility requests from a CSV file")]
struct Args {
    /// Request file (region,industry,investment,owner_salary,rent,employee_count,employee_salary)
    #[arg(long, default_value = DEFAULT_REQUESTS_PATH)]
    input: PathBuf,

    /// Summary output file
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Load rate tables from this directory instead of the built-in tables
    #[arg(long)]
    rates_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading requests from {}...", args.input.display());
    let requests = load_requests(&args.input)
        .with_context(|| format!("Failed to load requests from {}", args.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let runner = match &args.rates_dir {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("Failed to load rate tables from {}", dir.display()))?,
        None => ScenarioRunner::new(),
    };

    let scenarios = GrowthScenario::standard_set();
    let config = EngineConfig {
        scenarios: scenarios.clone(),
    };

    let eval_start = Instant::now();
    let results = runner.run_batch(&requests, config);
    println!("Evaluations complete in {:?}", eval_start.elapsed());

    let mut header = vec![
        "Row".to_string(),
        "Region".to_string(),
        "Industry".to_string(),
        "BreakEvenTurnover".to_string(),
        "MonthlyBreakEven".to_string(),
        "CorpTaxRate".to_string(),
        "YearlyFixedCosts".to_string(),
    ];
    for scenario in &scenarios {
        header.push(format!("{} Y3 NetProfit", scenario.name));
        header.push(format!("{} Y3 Cash", scenario.name));
    }
    header.push("BestScenario".to_string());
    header.push("WorstScenario".to_string());
    header.push("Error".to_string());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writer.write_record(&header)?;

    let mut failures = 0;
    let mut cash_negative = 0;
    for (idx, (request, result)) in requests.iter().zip(&results).enumerate() {
        let mut record = vec![
            (idx + 1).to_string(),
            request.region.clone(),
            request.industry.clone(),
        ];
        match result {
            Ok(evaluation) => {
                let summary = evaluation.summary();
                record.push(format!("{:.2}", summary.break_even_turnover));
                record.push(format!("{:.2}", summary.monthly_break_even_turnover));
                record.push(format!("{:.4}", evaluation.corporate_tax_rate));
                record.push(format!("{:.2}", summary.yearly_fixed_costs));
                for scenario in &evaluation.scenarios {
                    let profit = scenario.net_profit_by_year.last().copied().unwrap_or(0.0);
                    record.push(format!("{:.2}", profit));
                    record.push(format!("{:.2}", scenario.final_cash()));
                }
                record.push(summary.best_scenario.unwrap_or_default());
                record.push(summary.worst_scenario.unwrap_or_default());
                record.push(String::new());
                if summary.worst_final_cash < 0.0 {
                    cash_negative += 1;
                }
            }
            Err(err) => {
                failures += 1;
                log::warn!("Row {} failed: {}", idx + 1, err);
                record.resize(header.len() - 1, String::new());
                record.push(err.to_string());
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Requests:  {}", requests.len());
    println!("  Succeeded: {}", requests.len() - failures);
    println!("  Failed:    {}", failures);
    println!("  Negative cash in worst scenario: {}", cash_negative);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
