use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::age::AgePolicy;
use super::identity::{IdentityCodeValidator, StructuralCodeValidator};
use super::outcome::{Decision, DecisionError, LoanOffer, NoLoanReason};
use super::program::{LifespanTable, LoanLimit};
use super::scoring::{highest_amount, is_acceptable, shortest_period, Candidate};
use super::segment::credit_modifier;

/// Applicant input for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub personal_code: String,
    pub amount: i64,
    pub period_months: i64,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, amount: i64, period_months: i64) -> Self {
        Self {
            personal_code: personal_code.into(),
            amount,
            period_months,
        }
    }
}

/// Search tiers, tried in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    LargestAmountForPeriod,
    RequestedAmountLongerPeriod,
    LargestAmountFallback,
}

/// Stateless evaluator combining input validation, age policy, segmentation and the
/// tiered offer search.
#[derive(Debug, Clone)]
pub struct DecisionEngine<V = StructuralCodeValidator> {
    validator: V,
    age_policy: AgePolicy,
}

impl DecisionEngine<StructuralCodeValidator> {
    /// Engine with the structural validator and the lifespan of `country`.
    pub fn for_country(country: Option<&str>) -> Self {
        Self::new(
            StructuralCodeValidator,
            AgePolicy::for_country(country, &LifespanTable::default()),
        )
    }
}

impl Default for DecisionEngine<StructuralCodeValidator> {
    fn default() -> Self {
        Self::for_country(None)
    }
}

impl<V> DecisionEngine<V>
where
    V: IdentityCodeValidator,
{
    pub fn new(validator: V, age_policy: AgePolicy) -> Self {
        Self {
            validator,
            age_policy,
        }
    }

    pub fn age_policy(&self) -> &AgePolicy {
        &self.age_policy
    }

    /// Checks the personal code, then the amount, then the period.
    pub fn validate(&self, request: &LoanRequest) -> Result<(), DecisionError> {
        if !self.validator.is_valid(&request.personal_code) {
            return Err(DecisionError::InvalidPersonalCode);
        }
        if !LoanLimit::amount_in_range(request.amount) {
            return Err(DecisionError::InvalidLoanAmount);
        }
        if !LoanLimit::period_in_range(request.period_months) {
            return Err(DecisionError::InvalidLoanPeriod);
        }
        Ok(())
    }

    /// Evaluates `request` as of the given date.
    ///
    /// Validation and business failures come back as [`Decision::Rejected`]. Only
    /// [`DecisionError::InvalidSegmentValue`] is returned as `Err`, since it means the
    /// validator accepted a code it should not have.
    pub fn evaluate(
        &self,
        request: &LoanRequest,
        as_of: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        if let Err(error) = self.validate(request) {
            debug!(kind = error.kind(), "loan request failed validation");
            return Ok(Decision::Rejected(error));
        }

        let decision = match self.decide(request, as_of) {
            Ok(offer) => Decision::Approved(offer),
            Err(error @ DecisionError::InvalidSegmentValue(_)) => {
                warn!(%error, "validator accepted a code without a numeric sequence");
                return Err(error);
            }
            Err(error) => Decision::Rejected(error),
        };

        info!(
            requested_amount = request.amount,
            requested_period = request.period_months,
            outcome = %decision.summary(),
            "loan decision made"
        );
        Ok(decision)
    }

    fn decide(
        &self,
        request: &LoanRequest,
        as_of: NaiveDate,
    ) -> Result<LoanOffer, DecisionError> {
        if !self.age_policy.is_eligible(&request.personal_code, as_of) {
            return Err(DecisionError::InvalidAge);
        }

        let modifier = credit_modifier(&request.personal_code)?;
        if modifier == 0 {
            return Err(DecisionError::NoValidLoan(NoLoanReason::UninsurableSegment));
        }

        find_offer(modifier, request.amount, request.period_months)
            .ok_or(DecisionError::NoValidLoan(NoLoanReason::ExhaustedAttempts))
    }
}

/// Runs the three search tiers for a validated request and a non-zero modifier.
pub fn find_offer(
    credit_modifier: u32,
    requested_amount: i64,
    requested_period: i64,
) -> Option<LoanOffer> {
    let largest = Candidate::new(
        highest_amount(credit_modifier, requested_period),
        requested_period,
    );

    let tier = Tier::LargestAmountForPeriod;
    if is_acceptable(credit_modifier, &largest) && largest.amount >= requested_amount {
        debug!(?tier, amount = largest.amount, "tier accepted");
        return Some(LoanOffer {
            amount: largest
                .amount
                .max(requested_amount)
                .min(LoanLimit::MAXIMUM.amount),
            period_months: requested_period,
        });
    }
    debug!(?tier, amount = largest.amount, "tier rejected");

    let tier = Tier::RequestedAmountLongerPeriod;
    if let Some(period) = shortest_period(credit_modifier, requested_amount) {
        let stretched = Candidate::new(requested_amount, period);
        if is_acceptable(credit_modifier, &stretched) {
            debug!(?tier, period, "tier accepted");
            return Some(LoanOffer {
                amount: requested_amount.min(LoanLimit::MAXIMUM.amount),
                period_months: period,
            });
        }
        debug!(?tier, period, "tier rejected");
    }

    let tier = Tier::LargestAmountFallback;
    if is_acceptable(credit_modifier, &largest) {
        debug!(?tier, amount = largest.amount, "tier accepted");
        return Some(LoanOffer {
            amount: largest.amount.min(LoanLimit::MAXIMUM.amount),
            period_months: requested_period,
        });
    }
    debug!(?tier, amount = largest.amount, "tier rejected");

    None
}
