use serde::{Deserialize, Serialize};

/// Person applying for the position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: i32,
    #[serde(default)]
    pub identity_number: String,
}

impl Applicant {
    pub fn new(age: i32, identity_number: impl Into<String>) -> Self {
        Self {
            age,
            identity_number: identity_number.into(),
        }
    }
}

/// Application form as received from intake. Every field except the applicant
/// falls back to its empty value when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    #[serde(default)]
    pub tech_stack_list: Vec<String>,
    #[serde(default)]
    pub years_of_experience: i32,
}

impl JobApplication {
    pub fn for_applicant(applicant: Applicant) -> Self {
        Self {
            applicant: Some(applicant),
            ..Self::default()
        }
    }

    pub fn with_tech_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack_list = stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years_of_experience(mut self, years: i32) -> Self {
        self.years_of_experience = years;
        self
    }
}

/// Terminal routing decision for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationResult {
    AutoRejected,
    #[serde(rename = "transferred_to_hr")]
    TransferredToHR,
    /// Reserved for a lead-review band; no rule routes here yet.
    TransferredToLead,
    #[serde(rename = "transferred_to_cto")]
    TransferredToCTO,
    AutoAccepted,
}

impl ApplicationResult {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationResult::AutoRejected => "auto_rejected",
            ApplicationResult::TransferredToHR => "transferred_to_hr",
            ApplicationResult::TransferredToLead => "transferred_to_lead",
            ApplicationResult::TransferredToCTO => "transferred_to_cto",
            ApplicationResult::AutoAccepted => "auto_accepted",
        }
    }
}
