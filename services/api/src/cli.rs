use crate::demo::{
    run_batch, run_demo, run_eligibility, run_financing, BatchArgs, EligibilityArgs,
    FinancingArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dbr_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DBR Advisor",
    about = "Debt-burden and financing calculators from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a salary/obligations pair and show the remaining capacity
    Eligibility(EligibilityArgs),
    /// Quote a flat-rate financing product and the maximum financeable amount
    Financing(FinancingArgs),
    /// Evaluate a CSV of salary/obligations rows
    Batch(BatchArgs),
    /// Walk through the reference advisory scenarios
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Financing(args) => run_financing(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo => run_demo(),
    }
}
