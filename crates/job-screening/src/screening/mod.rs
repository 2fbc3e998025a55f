//! Job application screening.
//!
//! An [`ApplicationEvaluator`] walks a fixed sequence of guard clauses (age,
//! home country, identity, tech-stack similarity) and settles on one
//! [`ApplicationResult`]. Identity and country data come from an
//! [`IdentityValidator`] supplied by the caller; the evaluator writes the
//! requested [`ValidationMode`] onto it before querying anything.

pub mod domain;
pub mod evaluation;
pub mod identity;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicationResult, JobApplication};
pub use evaluation::{
    ApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluationError, EvaluationOutcome,
    SimilarityArithmetic,
};
pub use identity::{CountryData, CountryProvider, IdentityValidator, ValidationMode, ValidatorError};
pub use router::screening_router;
pub use service::{EvaluationView, ScreeningService, ValidatorSource};
