use crate::cli::ValidatorArgs;
use crate::infra::StaticValidatorSource;
use chrono::{DateTime, Utc};
use clap::Args;
use job_screening::config::AppConfig;
use job_screening::error::AppError;
use job_screening::screening::{EvaluationView, JobApplication, ScreeningService};
use job_screening::telemetry::{self, LogSink};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to the application JSON document
    #[arg(long)]
    pub(crate) application: PathBuf,
    #[command(flatten)]
    pub(crate) validator: ValidatorArgs,
}

#[derive(Debug, Serialize)]
struct EvaluationReport {
    evaluated_at: DateTime<Utc>,
    home_country: String,
    #[serde(flatten)]
    evaluation: EvaluationView,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let raw = fs::read_to_string(&args.application)?;
    let application: JobApplication = serde_json::from_str(&raw)?;

    let validators = Arc::new(StaticValidatorSource::from_args(
        &args.validator,
        &config.screening,
    ));
    let service = ScreeningService::new(validators, config.screening.clone());
    let outcome = service.evaluate(&application)?;

    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        home_country: config.screening.home_country,
        evaluation: EvaluationView::from(&outcome),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
