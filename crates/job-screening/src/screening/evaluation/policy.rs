use super::super::domain::ApplicationResult;
use super::config::EvaluationConfig;
use super::rules::StackSignals;
use serde::{Deserialize, Serialize};

/// Rule that produced an evaluation result, kept for audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    UnderMinimumAge,
    OutsideHomeCountry,
    InvalidIdentity,
    InsufficientTechStack,
    SeniorStackMatch,
    /// Valid identity and enough stack overlap, but not the senior profile.
    DefaultAcceptance,
}

impl DecisionRule {
    pub fn result(&self) -> ApplicationResult {
        match self {
            DecisionRule::UnderMinimumAge | DecisionRule::InsufficientTechStack => {
                ApplicationResult::AutoRejected
            }
            DecisionRule::OutsideHomeCountry => ApplicationResult::TransferredToCTO,
            DecisionRule::InvalidIdentity => ApplicationResult::TransferredToHR,
            DecisionRule::SeniorStackMatch | DecisionRule::DefaultAcceptance => {
                ApplicationResult::AutoAccepted
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DecisionRule::UnderMinimumAge => "under_minimum_age",
            DecisionRule::OutsideHomeCountry => "outside_home_country",
            DecisionRule::InvalidIdentity => "invalid_identity",
            DecisionRule::InsufficientTechStack => "insufficient_tech_stack",
            DecisionRule::SeniorStackMatch => "senior_stack_match",
            DecisionRule::DefaultAcceptance => "default_acceptance",
        }
    }
}

pub(crate) fn decide_from_stack(
    signals: &StackSignals,
    years_of_experience: i32,
    config: &EvaluationConfig,
) -> DecisionRule {
    if signals.similarity_rate < config.minimum_similarity_rate {
        return DecisionRule::InsufficientTechStack;
    }

    if signals.similarity_rate > config.auto_accept_similarity_rate
        && years_of_experience > config.auto_accept_years_of_experience
    {
        return DecisionRule::SeniorStackMatch;
    }

    DecisionRule::DefaultAcceptance
}
