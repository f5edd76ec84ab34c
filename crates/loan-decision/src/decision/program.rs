use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest credit score at which an offer is still acceptable.
pub const LOWEST_CREDIT_SCORE: f64 = 0.1;

const DEFAULT_EXPECTED_LIFESPAN: u32 = 75;

/// One corner of the loan program: an amount bound paired with a period bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLimit {
    pub amount: i64,
    pub period_months: i64,
}

impl LoanLimit {
    pub const MINIMUM: LoanLimit = LoanLimit {
        amount: 2000,
        period_months: 12,
    };

    pub const MAXIMUM: LoanLimit = LoanLimit {
        amount: 10000,
        period_months: 60,
    };

    pub fn amount_in_range(amount: i64) -> bool {
        (Self::MINIMUM.amount..=Self::MAXIMUM.amount).contains(&amount)
    }

    pub fn period_in_range(period_months: i64) -> bool {
        (Self::MINIMUM.period_months..=Self::MAXIMUM.period_months).contains(&period_months)
    }

    /// Longest loan term expressed in whole years.
    pub const fn maximum_period_years() -> i64 {
        Self::MAXIMUM.period_months / 12
    }
}

/// Expected lifespan per country, with a fallback for countries not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifespanTable {
    by_country: BTreeMap<String, u32>,
    default_years: u32,
}

impl LifespanTable {
    pub fn new(default_years: u32) -> Self {
        Self {
            by_country: BTreeMap::new(),
            default_years,
        }
    }

    pub fn with_country(mut self, country: &str, years: u32) -> Self {
        self.by_country
            .insert(country.trim().to_ascii_uppercase(), years);
        self
    }

    pub fn default_years(&self) -> u32 {
        self.default_years
    }

    pub fn expected_lifespan(&self, country: Option<&str>) -> u32 {
        country
            .map(|code| code.trim().to_ascii_uppercase())
            .and_then(|code| self.by_country.get(&code).copied())
            .unwrap_or(self.default_years)
    }
}

impl Default for LifespanTable {
    fn default() -> Self {
        Self::new(DEFAULT_EXPECTED_LIFESPAN)
            .with_country("EE", 78)
            .with_country("LV", 75)
            .with_country("LT", 76)
    }
}
