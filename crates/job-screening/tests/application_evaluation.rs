//! Integration scenarios for job application screening.
//!
//! Everything goes through the public evaluator API with a hand-written validator
//! double, so the observable collaborator contract (which calls happen, in which
//! order, and what mode is left behind) is pinned down from the outside.

mod common {
    use std::cell::Cell;

    use job_screening::screening::{
        Applicant, CountryData, CountryProvider, IdentityValidator, JobApplication,
        ValidationMode, ValidatorError,
    };

    pub(super) struct StubValidator {
        pub(super) country: String,
        pub(super) identity_valid: bool,
        pub(super) mode: ValidationMode,
        pub(super) mode_at_lookup: Cell<Option<ValidationMode>>,
        pub(super) is_valid_calls: Cell<usize>,
    }

    impl StubValidator {
        pub(super) fn new(country: &str, identity_valid: bool) -> Self {
            Self {
                country: country.to_string(),
                identity_valid,
                mode: ValidationMode::Quick,
                mode_at_lookup: Cell::new(None),
                is_valid_calls: Cell::new(0),
            }
        }
    }

    impl CountryProvider for StubValidator {
        fn country_data(&self) -> Result<CountryData, ValidatorError> {
            self.mode_at_lookup.set(Some(self.mode));
            Ok(CountryData::new(self.country.clone()))
        }
    }

    impl IdentityValidator for StubValidator {
        fn is_valid(&self, _identity_number: &str) -> Result<bool, ValidatorError> {
            self.is_valid_calls.set(self.is_valid_calls.get() + 1);
            Ok(self.identity_valid)
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

    pub(super) fn application(age: i32) -> JobApplication {
        JobApplication::for_applicant(Applicant::new(age, ""))
    }
}

use common::*;
use job_screening::screening::{
    ApplicationEvaluator, ApplicationResult, EvaluationConfig, EvaluationError, JobApplication,
    ValidationMode,
};

fn evaluator() -> ApplicationEvaluator {
    ApplicationEvaluator::new(EvaluationConfig::default())
}

#[test]
fn underage_applicant_is_auto_rejected() {
    let mut validator = StubValidator::new("TURKEY", true);

    let result = evaluator()
        .evaluate(&application(17), &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::AutoRejected);
    assert_eq!(validator.is_valid_calls.get(), 0);
}

#[test]
fn young_applicant_never_reaches_identity_validation() {
    let mut validator = StubValidator::new("TURKEY", true);

    evaluator()
        .evaluate(&application(15), &mut validator)
        .expect("evaluates");

    assert_eq!(validator.is_valid_calls.get(), 0);
    assert_eq!(validator.mode_at_lookup.get(), None);
}

#[test]
fn blank_tech_stack_is_auto_rejected() {
    let mut validator = StubValidator::new("TURKEY", true);
    let application = application(19).with_tech_stack([""]);

    let result = evaluator()
        .evaluate(&application, &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::AutoRejected);
}

#[test]
fn matching_stack_and_long_experience_is_auto_accepted() {
    let mut validator = StubValidator::new("TURKEY", true);
    let application = application(19)
        .with_tech_stack(["C#", "RabbitMQ", "Microservice", "VisualStudio"])
        .with_years_of_experience(16);

    let result = evaluator()
        .evaluate(&application, &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::AutoAccepted);
}

#[test]
fn invalid_identity_is_transferred_to_hr() {
    let mut validator = StubValidator::new("TURKEY", false);

    let result = evaluator()
        .evaluate(&application(19), &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::TransferredToHR);
}

#[test]
fn applicant_abroad_is_transferred_to_cto() {
    let mut validator = StubValidator::new("SPAIN", true);

    let result = evaluator()
        .evaluate(&application(19), &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::TransferredToCTO);
    assert_eq!(validator.is_valid_calls.get(), 0);
}

#[test]
fn applicant_over_fifty_is_validated_in_detail() {
    let mut validator = StubValidator::new("SPAIN", true);

    let result = evaluator()
        .evaluate(&application(51), &mut validator)
        .expect("evaluates");

    assert_eq!(result, ApplicationResult::TransferredToCTO);
    assert_eq!(validator.mode, ValidationMode::Detailed);
    assert_eq!(
        validator.mode_at_lookup.get(),
        Some(ValidationMode::Detailed)
    );
}

#[test]
fn missing_applicant_is_rejected_as_invalid_argument() {
    let mut validator = StubValidator::new("TURKEY", true);

    let result = evaluator().evaluate(&JobApplication::default(), &mut validator);

    assert!(matches!(result, Err(EvaluationError::MissingApplicant)));
}

#[test]
fn default_application_validates_identity_exactly_once() {
    let mut validator = StubValidator::new("TURKEY", true);

    evaluator()
        .evaluate(&application(19), &mut validator)
        .expect("evaluates");

    assert_eq!(validator.is_valid_calls.get(), 1);
}

#[test]
fn applications_deserialize_with_defaults() {
    let application: JobApplication =
        serde_json::from_str(r#"{ "applicant": { "age": 30 } }"#).expect("valid json");

    assert_eq!(application.years_of_experience, 0);
    assert!(application.tech_stack_list.is_empty());
    assert_eq!(
        application.applicant.map(|applicant| applicant.identity_number),
        Some(String::new())
    );
}
