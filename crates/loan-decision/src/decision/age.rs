use chrono::{Datelike, NaiveDate};

use super::identity::parse_birth_date;
use super::program::{LifespanTable, LoanLimit};

const MINIMUM_AGE: i32 = 18;

/// Lending window derived from the expected lifespan and the longest loan term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    expected_lifespan: u32,
}

impl AgePolicy {
    pub fn new(expected_lifespan: u32) -> Self {
        Self { expected_lifespan }
    }

    pub fn for_country(country: Option<&str>, lifespans: &LifespanTable) -> Self {
        Self::new(lifespans.expected_lifespan(country))
    }

    pub fn expected_lifespan(&self) -> u32 {
        self.expected_lifespan
    }

    pub fn minimum_age(&self) -> i32 {
        MINIMUM_AGE
    }

    /// Oldest age at which the longest loan still ends within the expected lifespan.
    pub fn maximum_age(&self) -> i32 {
        self.expected_lifespan as i32 - LoanLimit::maximum_period_years() as i32
    }

    pub fn is_eligible_age(&self, age: i32) -> bool {
        age >= MINIMUM_AGE && age <= self.maximum_age()
    }

    /// Malformed codes are never eligible.
    pub fn is_eligible(&self, personal_code: &str, as_of: NaiveDate) -> bool {
        parse_birth_date(personal_code)
            .map(|birth| self.is_eligible_age(age_on(birth, as_of)))
            .unwrap_or(false)
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self::for_country(None, &LifespanTable::default())
    }
}

/// Completed years between `birth` and `as_of`; negative when born after `as_of`.
pub fn age_on(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
