use serde::{Deserialize, Serialize};

/// Depth of the identity check requested from the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

/// Location data resolved for the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryData {
    pub country: String,
}

impl CountryData {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

/// Read-only country lookup exposed by an identity validator.
pub trait CountryProvider {
    fn country_data(&self) -> Result<CountryData, ValidatorError>;
}

/// External identity-validation integration.
///
/// The evaluator writes [`ValidationMode`] before it reads country data, so
/// implementations can pick their check depth from it. Callers hand each
/// evaluation an exclusively borrowed instance.
pub trait IdentityValidator {
    fn is_valid(&self, identity_number: &str) -> Result<bool, ValidatorError>;
    fn country_provider(&self) -> &dyn CountryProvider;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

/// Failure reported by a validator integration.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("identity validator unavailable: {0}")]
    Unavailable(String),
    #[error("identity validator timed out after {millis}ms")]
    Timeout { millis: u64 },
    #[error("country lookup failed: {0}")]
    CountryLookup(String),
}
