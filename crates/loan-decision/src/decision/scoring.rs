use super::program::{LoanLimit, LOWEST_CREDIT_SCORE};

/// Absorbs binary rounding of the score so exact-threshold offers are not lost.
/// Integer inputs below the threshold fall short of it by far more than this.
const SCORE_TOLERANCE: f64 = 1e-9;

/// An (amount, period) pair tried during the tiered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub amount: i64,
    pub period_months: i64,
}

impl Candidate {
    pub fn new(amount: i64, period_months: i64) -> Self {
        Self {
            amount,
            period_months,
        }
    }
}

/// `(modifier / amount) * period / 10`, evaluated in floating point.
pub fn credit_score(credit_modifier: u32, amount: i64, period_months: i64) -> f64 {
    if amount <= 0 {
        return 0.0;
    }
    ((credit_modifier as f64 / amount as f64) * period_months as f64) / 10.0
}

pub fn is_acceptable(credit_modifier: u32, candidate: &Candidate) -> bool {
    if candidate.period_months > LoanLimit::MAXIMUM.period_months || candidate.amount <= 0 {
        return false;
    }
    let score = credit_score(credit_modifier, candidate.amount, candidate.period_months);
    score >= LOWEST_CREDIT_SCORE - SCORE_TOLERANCE
}

/// Largest amount reaching the lowest score over `period_months`, rounded down.
pub fn highest_amount(credit_modifier: u32, period_months: i64) -> i64 {
    let amount = (credit_modifier as f64 * period_months as f64) / (LOWEST_CREDIT_SCORE * 10.0);
    amount.floor() as i64
}

/// Shortest period over which `amount` reaches the lowest score, rounded up.
/// `None` when the modifier is zero and no period suffices.
pub fn shortest_period(credit_modifier: u32, amount: i64) -> Option<i64> {
    if credit_modifier == 0 {
        return None;
    }
    let period = (LOWEST_CREDIT_SCORE * 10.0 * amount as f64) / credit_modifier as f64;
    Some(period.ceil() as i64)
}
