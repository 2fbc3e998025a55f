use crate::cli::ValidatorArgs;
use job_screening::screening::{
    CountryData, CountryProvider, EvaluationConfig, IdentityValidator, ValidationMode,
    ValidatorError, ValidatorSource,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fixed-response validator used until a real identity registry is wired in.
/// Reports one country for everybody and accepts an allow-list of numbers.
#[derive(Debug, Clone)]
pub(crate) struct StaticIdentityValidator {
    country: String,
    accepted: Arc<BTreeSet<String>>,
    mode: ValidationMode,
}

impl CountryProvider for StaticIdentityValidator {
    fn country_data(&self) -> Result<CountryData, ValidatorError> {
        Ok(CountryData::new(self.country.clone()))
    }
}

impl IdentityValidator for StaticIdentityValidator {
    fn is_valid(&self, identity_number: &str) -> Result<bool, ValidatorError> {
        let valid = self.accepted.contains(identity_number.trim());
        debug!(mode = ?self.mode, valid, "static identity check");
        Ok(valid)
    }

    fn country_provider(&self) -> &dyn CountryProvider {
        self
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}

/// Hands out a fresh [`StaticIdentityValidator`] per evaluation.
#[derive(Debug, Clone)]
pub(crate) struct StaticValidatorSource {
    country: String,
    accepted: Arc<BTreeSet<String>>,
}

impl StaticValidatorSource {
    pub(crate) fn from_args(args: &ValidatorArgs, config: &EvaluationConfig) -> Self {
        let country = args
            .country
            .clone()
            .unwrap_or_else(|| config.home_country.clone());
        let accepted = args
            .valid_identities
            .iter()
            .map(|number| number.trim().to_string())
            .filter(|number| !number.is_empty())
            .collect();

        Self {
            country,
            accepted: Arc::new(accepted),
        }
    }
}

impl ValidatorSource for StaticValidatorSource {
    type Validator = StaticIdentityValidator;

    fn acquire(&self) -> Result<Self::Validator, ValidatorError> {
        Ok(StaticIdentityValidator {
            country: self.country.clone(),
            accepted: Arc::clone(&self.accepted),
            mode: ValidationMode::default(),
        })
    }
}
