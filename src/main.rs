//! Feasibility CLI
//!
//! Evaluates one business plan and prints break-even, scenarios and the baseline statement

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use feasibility_engine::export::{self, DEFAULT_CURRENCY_SYMBOL};
use feasibility_engine::rates::option_keys;
use feasibility_engine::{EngineConfig, EngineError, EvaluationRequest, RateTables, ScenarioRunner};

/// Small-business financial feasibility simulator
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Region key (see --list for the keys of the loaded tables)
    #[arg(long, default_value = "eu")]
    region: String,

    /// Industry key (see --list for the keys of the loaded tables)
    #[arg(long, default_value = "retail")]
    industry: String,

    /// Initial investment in fixed assets (amortized over 5 years)
    #[arg(long, default_value_t = 20_000.0)]
    investment: f64,

    /// Owner monthly net salary
    #[arg(long, default_value_t = 2_000.0)]
    owner_salary: f64,

    /// Monthly rent and utilities
    #[arg(long, default_value_t = 3_000.0)]
    rent: f64,

    /// Number of employees
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    employees: i64,

    /// Average employee monthly net salary
    #[arg(long, default_value_t = 2_000.0)]
    employee_salary: f64,

    /// Load sectors.csv and tax_zones.csv from this directory
    #[arg(long)]
    rates_dir: Option<PathBuf>,

    /// Where to write the statement CSV
    #[arg(long, default_value = "financial_plan.csv")]
    csv: PathBuf,

    /// Currency symbol for formatted output
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency: String,

    /// Print the full evaluation as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// List region and industry keys with their labels, then exit
    #[arg(long)]
    list: bool,
}

fn print_options(tables: &RateTables) {
    println!("Regions:");
    for (region, label) in tables.region_options() {
        println!("  {:<10} {}", region.key(), label);
    }
    println!("Industries:");
    for (industry, label) in tables.industry_options() {
        println!("  {:<10} {}", industry.key(), label);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tables = match &args.rates_dir {
        Some(dir) => RateTables::from_csv_path(dir)
            .with_context(|| format!("Failed to load rate tables from {}", dir.display()))?,
        None => RateTables::standard().clone(),
    };
    let runner = ScenarioRunner::with_tables(tables);

    if args.list {
        print_options(runner.tables());
        return Ok(());
    }

    let request = EvaluationRequest {
        region: args.region.clone(),
        industry: args.industry.clone(),
        investment: Some(args.investment),
        owner_salary: args.owner_salary,
        rent: args.rent,
        employee_count: args.employees,
        employee_salary: args.employee_salary,
    };

    let result = runner
        .run(&request, EngineConfig::default())
        .map_err(|err| {
            let hint = match err {
                EngineError::UnknownRegion(_) => {
                    format!(" (regions: {})", option_keys(&runner.tables().region_options()))
                }
                EngineError::UnknownIndustry(_) => {
                    format!(" (industries: {})", option_keys(&runner.tables().industry_options()))
                }
                _ => String::new(),
            };
            anyhow::Error::new(err).context(format!("Evaluation failed{}", hint))
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let symbol = args.currency.as_str();
    let sector = runner.tables().sector(result.input.industry)?;
    let zone = runner.tables().tax_zone(result.input.region)?;
    let summary = result.summary();

    println!("Financial Feasibility Simulator");
    println!("===============================\n");
    println!("  Region:   {}", zone.label);
    println!("  Industry: {}", sector.label);
    println!();
    println!(
        "  Break-Even Turnover: {} ({} per month)",
        export::format_currency(summary.break_even_turnover, symbol),
        export::format_currency(summary.monthly_break_even_turnover, symbol)
    );
    println!("  Corporate Tax Rate:  {}", export::format_percent(result.corporate_tax_rate));
    println!();

    // Scenarios
    println!(
        "{:<18} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Scenario", "Profit Y1", "Profit Y2", "Profit Y3", "Cash Y1", "Cash Y2", "Cash Y3"
    );
    println!("{}", "-".repeat(108));
    for scenario in &result.scenarios {
        print!("{:<18}", scenario.name);
        let values = scenario
            .net_profit_by_year
            .iter()
            .chain(&scenario.cumulative_cash_by_year);
        for value in values {
            print!(" {:>14}", export::format_currency(*value, symbol));
        }
        println!();
    }

    // Baseline statement
    println!("\nFinancial Statements (Base Scenario)");
    for line in export::statement_grid(&result.statement, symbol) {
        print!("{:<14}", line[0]);
        for cell in &line[1..] {
            print!(" {:>14}", cell);
        }
        println!();
    }

    export::write_statement_csv_path(&args.csv, &result.statement, symbol)
        .with_context(|| format!("Failed to write {}", args.csv.display()))?;
    println!("\nStatement written to: {}", args.csv.display());

    Ok(())
}
