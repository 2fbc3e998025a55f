use crate::evaluate::{run_evaluate, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_screening::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Screening",
    about = "Evaluate job applications from the command line or over HTTP",
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
    /// Evaluate a single application read from a JSON file
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) validator: ValidatorArgs,
}

/// Fixed answers for the stand-in identity validator.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ValidatorArgs {
    /// Country the validator reports for every applicant (defaults to the home country)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Identity number the validator accepts; repeat for several
    #[arg(long = "valid-identity")]
    pub(crate) valid_identities: Vec<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}
