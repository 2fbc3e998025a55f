use super::config::{EvaluationConfig, SimilarityArithmetic};

/// Tech-stack signals collected for the final policy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StackSignals {
    pub matched_count: usize,
    pub similarity_rate: u32,
}

/// Counts applicant entries that appear in the canonical stack, ignoring case.
/// Duplicate entries count once per occurrence.
pub(crate) fn matched_count(applicant_stack: &[String], canonical: &[String]) -> usize {
    applicant_stack
        .iter()
        .filter(|entry| {
            canonical
                .iter()
                .any(|known| known.to_lowercase() == entry.to_lowercase())
        })
        .count()
}

pub(crate) fn similarity_rate(
    matched: usize,
    canonical_size: usize,
    arithmetic: SimilarityArithmetic,
) -> u32 {
    if canonical_size == 0 {
        return 0;
    }

    let rate = match arithmetic {
        SimilarityArithmetic::Truncating => (matched / canonical_size) * 100,
        SimilarityArithmetic::Percentage => matched * 100 / canonical_size,
    };

    u32::try_from(rate).unwrap_or(u32::MAX)
}

pub(crate) fn score_stack(applicant_stack: &[String], config: &EvaluationConfig) -> StackSignals {
    let matched_count = matched_count(applicant_stack, &config.tech_stack);
    let similarity_rate = similarity_rate(
        matched_count,
        config.tech_stack.len(),
        config.similarity_arithmetic,
    );

    StackSignals {
        matched_count,
        similarity_rate,
    }
}
