use std::sync::Arc;

use serde::Serialize;

use super::domain::{ApplicationResult, JobApplication};
use super::evaluation::{
    ApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluationError, EvaluationOutcome,
};
use super::identity::{IdentityValidator, ValidationMode, ValidatorError};

/// Supplies a fresh validator for every evaluation, so no two evaluations
/// share mutable validator state.
pub trait ValidatorSource: Send + Sync {
    type Validator: IdentityValidator;

    fn acquire(&self) -> Result<Self::Validator, ValidatorError>;
}

/// Service composing the evaluator with a validator source for hosted use.
pub struct ScreeningService<S> {
    evaluator: Arc<ApplicationEvaluator>,
    validators: Arc<S>,
}

impl<S> ScreeningService<S>
where
    S: ValidatorSource + 'static,
{
    pub fn new(validators: Arc<S>, config: EvaluationConfig) -> Self {
        Self {
            evaluator: Arc::new(ApplicationEvaluator::new(config)),
            validators,
        }
    }

    pub fn evaluator(&self) -> &ApplicationEvaluator {
        &self.evaluator
    }

    /// Evaluate a single application against a newly acquired validator.
    pub fn evaluate(
        &self,
        application: &JobApplication,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let mut validator = self.validators.acquire()?;
        self.evaluator.assess(application, &mut validator)
    }
}

/// Serializable representation of an evaluation for API and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    pub result: ApplicationResult,
    pub rule: DecisionRule,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_rate: Option<u32>,
}

impl From<&EvaluationOutcome> for EvaluationView {
    fn from(outcome: &EvaluationOutcome) -> Self {
        Self {
            result: outcome.result,
            rule: outcome.rule,
            summary: outcome.summary(),
            validation_mode: outcome.validation_mode,
            similarity_rate: outcome.similarity_rate,
        }
    }
}
