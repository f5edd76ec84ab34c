use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the tiered search produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoLoanReason {
    /// The applicant sits in the zero-modifier band.
    UninsurableSegment,
    /// Every candidate offer failed the acceptability test.
    ExhaustedAttempts,
}

impl fmt::Display for NoLoanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoLoanReason::UninsurableSegment => write!(f, "No valid loan found!"),
            NoLoanReason::ExhaustedAttempts => write!(f, "No valid loan found after all attempts"),
        }
    }
}

/// Failure taxonomy of a loan evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidPersonalCode,
    #[error("Invalid loan amount!")]
    InvalidLoanAmount,
    #[error("Invalid loan period!")]
    InvalidLoanPeriod,
    #[error("Invalid age")]
    InvalidAge,
    #[error("{0}")]
    NoValidLoan(NoLoanReason),
    #[error("Invalid segment value: {0}")]
    InvalidSegmentValue(String),
}

impl DecisionError {
    /// True for the three request validation failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DecisionError::InvalidPersonalCode
                | DecisionError::InvalidLoanAmount
                | DecisionError::InvalidLoanPeriod
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DecisionError::InvalidPersonalCode => "invalid_personal_code",
            DecisionError::InvalidLoanAmount => "invalid_loan_amount",
            DecisionError::InvalidLoanPeriod => "invalid_loan_period",
            DecisionError::InvalidAge => "invalid_age",
            DecisionError::NoValidLoan(_) => "no_valid_loan",
            DecisionError::InvalidSegmentValue(_) => "invalid_segment_value",
        }
    }
}

/// Amount and term the engine is willing to lend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub amount: i64,
    pub period_months: i64,
}

/// Result of a single evaluation: an offer or the rule that blocked one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved(LoanOffer),
    Rejected(DecisionError),
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved(_))
    }

    pub fn offer(&self) -> Option<LoanOffer> {
        match self {
            Decision::Approved(offer) => Some(*offer),
            Decision::Rejected(_) => None,
        }
    }

    pub fn loan_amount(&self) -> Option<i64> {
        self.offer().map(|offer| offer.amount)
    }

    pub fn loan_period(&self) -> Option<i64> {
        self.offer().map(|offer| offer.period_months)
    }

    pub fn error(&self) -> Option<&DecisionError> {
        match self {
            Decision::Approved(_) => None,
            Decision::Rejected(error) => Some(error),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved(offer) => format!(
                "approved {} for {} months",
                offer.amount, offer.period_months
            ),
            Decision::Rejected(error) => format!("rejected: {error}"),
        }
    }

    pub fn view(&self) -> DecisionView {
        DecisionView {
            loan_amount: self.loan_amount(),
            loan_period: self.loan_period(),
            error_message: self.error_message(),
        }
    }
}

/// Wire shape of a decision: either both loan fields or the error message are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    pub loan_amount: Option<i64>,
    pub loan_period: Option<i64>,
    pub error_message: Option<String>,
}

impl From<&Decision> for DecisionView {
    fn from(decision: &Decision) -> Self {
        decision.view()
    }
}
