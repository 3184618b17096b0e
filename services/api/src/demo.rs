use crate::infra::{format_amount, parse_amount};
use chrono::Local;
use clap::Args;
use dbr_advisor::calculators::{
    evaluate_csv, write_report, AmortizationSolver, DbrPolicy, EligibilityCalculator,
    EligibilityResult, FinancingResult, CLASSIFICATION_CEILING,
};
use dbr_advisor::config::AppConfig;
use dbr_advisor::error::AppError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Monthly salary (thousands separators allowed)
    #[arg(long, value_parser = parse_amount)]
    pub(crate) salary: f64,
    /// Current monthly installments (defaults to 0)
    #[arg(long, value_parser = parse_amount)]
    pub(crate) obligations: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct FinancingArgs {
    /// Requested principal
    #[arg(long, value_parser = parse_amount)]
    pub(crate) principal: f64,
    /// Term in years
    #[arg(long)]
    pub(crate) years: f64,
    /// Annual flat profit rate in percent, e.g. 3.5
    #[arg(long)]
    pub(crate) rate: f64,
    /// Monthly salary
    #[arg(long, value_parser = parse_amount)]
    pub(crate) salary: f64,
    /// Current monthly installments (defaults to 0)
    #[arg(long, value_parser = parse_amount)]
    pub(crate) obligations: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with `salary,obligations` columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write the report here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let calculator = EligibilityCalculator::new();
    let obligations = args.obligations.unwrap_or(0.0);

    match calculator.evaluate(args.salary, obligations) {
        Some(result) => render_eligibility(&result),
        None => println!("Enter a positive monthly salary to see your debt-burden ratio."),
    }
    Ok(())
}

pub(crate) fn run_financing(args: FinancingArgs) -> Result<(), AppError> {
    let policy = AppConfig::load()?.policy;
    let solver = AmortizationSolver::new(policy);
    let result = solver.evaluate(
        args.principal,
        args.years,
        args.rate,
        args.salary,
        args.obligations.unwrap_or(0.0),
    )?;

    render_financing(args.principal, args.years, args.rate, &result, &policy);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let calculator = EligibilityCalculator::new();
    let reader = BufReader::new(File::open(&args.input)?);
    let rows = evaluate_csv(&calculator, reader)?;

    match args.output {
        Some(path) => {
            write_report(&rows, BufWriter::new(File::create(&path)?))?;
            println!("Wrote {} evaluated row(s) to {}", rows.len(), path.display());
        }
        None => write_report(&rows, io::stdout().lock())?,
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let policy = DbrPolicy::default();
    let calculator = EligibilityCalculator::new();
    let solver = AmortizationSolver::new(policy);

    println!(
        "DBR advisory demo ({})",
        Local::now().date_naive().format("%Y-%m-%d")
    );

    for (salary, obligations) in [
        (0.0, 500.0),
        (10_000.0, 2_000.0),
        (10_000.0, 8_000.0),
        (5_000.0, 6_000.0),
    ] {
        println!(
            "\nSalary {} | obligations {}",
            format_amount(salary),
            format_amount(obligations)
        );
        match calculator.evaluate(salary, obligations) {
            Some(result) => render_eligibility(&result),
            None => println!("- no result: salary must be positive"),
        }
    }

    println!("\nFinancing quote: 100,000 over 5 years at 3.5% flat");
    let result = solver.evaluate(100_000.0, 5.0, 3.5, 10_000.0, 0.0)?;
    render_financing(100_000.0, 5.0, 3.5, &result, &policy);

    println!("\nSame quote with 2,000 of existing installments");
    let result = solver.evaluate(100_000.0, 5.0, 3.5, 10_000.0, 2_000.0)?;
    render_financing(100_000.0, 5.0, 3.5, &result, &policy);

    Ok(())
}

fn render_eligibility(result: &EligibilityResult) {
    let tier = result.tier;
    println!(
        "- DBR {:.1}% ({}) | gauge {:.0}% {}",
        result.actual_dbr_percent,
        tier.headline(),
        result.visual_dbr_percent,
        tier.gauge_color()
    );
    println!(
        "- Max installment at {:.0}%: {} | remaining capacity: {} | salary left: {}",
        CLASSIFICATION_CEILING * 100.0,
        format_amount(result.max_allowed_installment),
        format_amount(result.available_capacity),
        format_amount(result.remaining_salary)
    );
    if tier.exceeds_new_financing_ceiling() {
        println!("- New financing: above the ceiling for new lending");
    }
    println!("- Advice: {}", tier.advice());
}

fn render_financing(
    principal: f64,
    years: f64,
    rate: f64,
    result: &FinancingResult,
    policy: &DbrPolicy,
) {
    println!(
        "- Principal {} over {} months at {:.2}% flat",
        format_amount(principal),
        result.term_months,
        rate
    );
    println!(
        "- Monthly payment {:.2} | total profit {:.2} | total due {:.2}",
        result.monthly_payment, result.total_profit, result.total_due
    );
    println!(
        "- Capacity under {:.0}% ceiling: {} | {}",
        policy.new_financing_ceiling * 100.0,
        format_amount(result.remaining_capacity),
        if result.is_eligible {
            "eligible"
        } else {
            "exceeds capacity"
        }
    );
    println!(
        "- Maximum financeable at these terms ({} years): {}",
        years,
        format_amount(result.max_financeable_principal)
    );
}
