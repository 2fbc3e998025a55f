mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, SimilarityArithmetic, UnknownSimilarityArithmetic};
pub use policy::DecisionRule;

use super::domain::{ApplicationResult, JobApplication};
use super::identity::{IdentityValidator, ValidationMode, ValidatorError};
use policy::decide_from_stack;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Stateless evaluator that applies the screening policy to one application.
#[derive(Debug, Clone, Default)]
pub struct ApplicationEvaluator {
    config: EvaluationConfig,
}

impl ApplicationEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Route an application to its outcome.
    pub fn evaluate<V>(
        &self,
        application: &JobApplication,
        validator: &mut V,
    ) -> Result<ApplicationResult, EvaluationError>
    where
        V: IdentityValidator + ?Sized,
    {
        self.assess(application, validator)
            .map(|outcome| outcome.result)
    }

    /// Route an application and keep the trail of which rule decided it.
    ///
    /// Rules run in a fixed order and the first match wins. The validator is
    /// left untouched for under-age applicants; otherwise its validation mode
    /// is written before the country lookup. Identity validity is only
    /// queried for applicants in the home country.
    pub fn assess<V>(
        &self,
        application: &JobApplication,
        validator: &mut V,
    ) -> Result<EvaluationOutcome, EvaluationError>
    where
        V: IdentityValidator + ?Sized,
    {
        let applicant = application
            .applicant
            .as_ref()
            .ok_or(EvaluationError::MissingApplicant)?;

        if applicant.age < self.config.minimum_age {
            debug!(age = applicant.age, "applicant below minimum age");
            return Ok(self.conclude(DecisionRule::UnderMinimumAge, None, None));
        }

        let mode = if applicant.age > self.config.detailed_validation_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        };
        validator.set_validation_mode(mode);

        let country = validator.country_provider().country_data()?.country;
        if country != self.config.home_country {
            debug!(%country, "applicant outside home country");
            return Ok(self.conclude(DecisionRule::OutsideHomeCountry, Some(mode), None));
        }

        if !validator.is_valid(&applicant.identity_number)? {
            debug!("identity validation failed");
            return Ok(self.conclude(DecisionRule::InvalidIdentity, Some(mode), None));
        }

        let signals = rules::score_stack(&application.tech_stack_list, &self.config);
        debug!(
            matched = signals.matched_count,
            similarity_rate = signals.similarity_rate,
            "scored tech stack"
        );

        let rule = decide_from_stack(&signals, application.years_of_experience, &self.config);
        Ok(self.conclude(rule, Some(mode), Some(signals.similarity_rate)))
    }

    fn conclude(
        &self,
        rule: DecisionRule,
        validation_mode: Option<ValidationMode>,
        similarity_rate: Option<u32>,
    ) -> EvaluationOutcome {
        let outcome = EvaluationOutcome {
            result: rule.result(),
            rule,
            validation_mode,
            similarity_rate,
        };
        info!(
            result = outcome.result.label(),
            rule = outcome.rule.label(),
            "application evaluated"
        );
        outcome
    }
}

/// Evaluation output describing the result and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub result: ApplicationResult,
    pub rule: DecisionRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_rate: Option<u32>,
}

impl EvaluationOutcome {
    pub fn summary(&self) -> String {
        match self.rule {
            DecisionRule::UnderMinimumAge => "rejected: applicant below minimum age".to_string(),
            DecisionRule::OutsideHomeCountry => {
                "transferred to CTO: applicant outside home country".to_string()
            }
            DecisionRule::InvalidIdentity => {
                "transferred to HR: identity number failed validation".to_string()
            }
            DecisionRule::InsufficientTechStack => format!(
                "rejected: tech stack similarity {}% below threshold",
                self.similarity_rate.unwrap_or_default()
            ),
            DecisionRule::SeniorStackMatch => format!(
                "accepted: tech stack similarity {}% with senior experience",
                self.similarity_rate.unwrap_or_default()
            ),
            DecisionRule::DefaultAcceptance => format!(
                "accepted: tech stack similarity {}%",
                self.similarity_rate.unwrap_or_default()
            ),
        }
    }
}

/// Error raised while evaluating an application.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("application has no applicant")]
    MissingApplicant,
    #[error(transparent)]
    Validator(#[from] ValidatorError),
}
