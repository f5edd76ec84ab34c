//! Consumer loan decisions.
//!
//! A request passes input validation, the age window, and risk segmentation before the
//! tiered search looks for the most favorable (amount, period) pair whose credit score
//! reaches [`LOWEST_CREDIT_SCORE`]. Evaluation is a pure function of the request, the
//! evaluation date, and the static program configuration.

pub mod age;
pub mod engine;
pub mod identity;
pub mod outcome;
pub mod program;
pub mod router;
pub mod scoring;
pub mod segment;

#[cfg(test)]
mod tests;

pub use age::{age_on, AgePolicy};
pub use engine::{find_offer, DecisionEngine, LoanRequest};
pub use identity::{parse_birth_date, IdentityCodeValidator, StructuralCodeValidator};
pub use outcome::{Decision, DecisionError, DecisionView, LoanOffer, NoLoanReason};
pub use program::{LifespanTable, LoanLimit, LOWEST_CREDIT_SCORE};
pub use router::{decision_router, LoanDecisionPayload};
pub use scoring::{credit_score, Candidate};
pub use segment::{credit_modifier, RiskSegment};
