use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screening thresholds and the canonical stack applicants are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub minimum_age: i32,
    pub detailed_validation_age: i32,
    pub home_country: String,
    pub auto_accept_years_of_experience: i32,
    pub minimum_similarity_rate: u32,
    pub auto_accept_similarity_rate: u32,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub similarity_arithmetic: SimilarityArithmetic,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            detailed_validation_age: 50,
            home_country: "TURKEY".to_string(),
            auto_accept_years_of_experience: 15,
            minimum_similarity_rate: 25,
            auto_accept_similarity_rate: 75,
            tech_stack: ["C#", "RabbitMQ", "Microservice", "VisualStudio"]
                .into_iter()
                .map(String::from)
                .collect(),
            similarity_arithmetic: SimilarityArithmetic::default(),
        }
    }
}

/// How the matched count is turned into a percentage.
///
/// `Truncating` divides before scaling, so anything short of a full match
/// scores 0. It is the default to stay compatible with existing decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityArithmetic {
    #[default]
    Truncating,
    Percentage,
}

impl FromStr for SimilarityArithmetic {
    type Err = UnknownSimilarityArithmetic;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truncating" | "reference" => Ok(Self::Truncating),
            "percentage" | "percent" => Ok(Self::Percentage),
            _ => Err(UnknownSimilarityArithmetic(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSimilarityArithmetic(pub String);

impl fmt::Display for UnknownSimilarityArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown similarity arithmetic '{}': expected truncating or percentage",
            self.0
        )
    }
}

impl std::error::Error for UnknownSimilarityArithmetic {}
