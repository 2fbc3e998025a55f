use std::cell::RefCell;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{Applicant, JobApplication};
use crate::screening::evaluation::{ApplicationEvaluator, EvaluationConfig};
use crate::screening::identity::{
    CountryData, CountryProvider, IdentityValidator, ValidationMode, ValidatorError,
};
use crate::screening::service::ValidatorSource;

/// Collaborator interaction captured by [`RecordingValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ValidatorCall {
    SetMode(ValidationMode),
    CountryLookup,
    IsValid(String),
}

/// Validator double returning fixed answers and recording every interaction.
pub(super) struct RecordingValidator {
    country: String,
    identity_valid: bool,
    mode: ValidationMode,
    calls: RefCell<Vec<ValidatorCall>>,
}

impl RecordingValidator {
    pub(super) fn new(country: &str, identity_valid: bool) -> Self {
        Self {
            country: country.to_string(),
            identity_valid,
            mode: ValidationMode::Quick,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<ValidatorCall> {
        self.calls.borrow().clone()
    }

    pub(super) fn is_valid_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ValidatorCall::IsValid(_)))
            .count()
    }

    pub(super) fn country_lookups(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ValidatorCall::CountryLookup))
            .count()
    }
}

impl CountryProvider for RecordingValidator {
    fn country_data(&self) -> Result<CountryData, ValidatorError> {
        self.calls.borrow_mut().push(ValidatorCall::CountryLookup);
        Ok(CountryData::new(self.country.clone()))
    }
}

impl IdentityValidator for RecordingValidator {
    fn is_valid(&self, identity_number: &str) -> Result<bool, ValidatorError> {
        self.calls
            .borrow_mut()
            .push(ValidatorCall::IsValid(identity_number.to_string()));
        Ok(self.identity_valid)
    }

    fn country_provider(&self) -> &dyn CountryProvider {
        self
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.calls.get_mut().push(ValidatorCall::SetMode(mode));
        self.mode = mode;
    }
}

/// Validator whose upstream is down; every lookup fails.
pub(super) struct UnavailableValidator {
    mode: ValidationMode,
}

impl UnavailableValidator {
    pub(super) fn new() -> Self {
        Self {
            mode: ValidationMode::Quick,
        }
    }
}

impl CountryProvider for UnavailableValidator {
    fn country_data(&self) -> Result<CountryData, ValidatorError> {
        Err(ValidatorError::Unavailable("registry offline".to_string()))
    }
}

impl IdentityValidator for UnavailableValidator {
    fn is_valid(&self, _identity_number: &str) -> Result<bool, ValidatorError> {
        Err(ValidatorError::Unavailable("registry offline".to_string()))
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

/// Source handing out recording validators with a fixed country and verdict.
pub(super) struct FixedSource {
    pub(super) country: &'static str,
    pub(super) identity_valid: bool,
}

impl ValidatorSource for FixedSource {
    type Validator = RecordingValidator;

    fn acquire(&self) -> Result<Self::Validator, ValidatorError> {
        Ok(RecordingValidator::new(self.country, self.identity_valid))
    }
}

pub(super) struct OfflineSource;

impl ValidatorSource for OfflineSource {
    type Validator = UnavailableValidator;

    fn acquire(&self) -> Result<Self::Validator, ValidatorError> {
        Err(ValidatorError::Timeout { millis: 500 })
    }
}

pub(super) fn canonical_stack() -> Vec<String> {
    EvaluationConfig::default().tech_stack
}

pub(super) fn evaluator() -> ApplicationEvaluator {
    ApplicationEvaluator::new(EvaluationConfig::default())
}

pub(super) fn application(age: i32) -> JobApplication {
    JobApplication::for_applicant(Applicant::new(age, "12345678901"))
}

pub(super) fn senior_application() -> JobApplication {
    application(19)
        .with_tech_stack(canonical_stack())
        .with_years_of_experience(16)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
