use serde::{Deserialize, Serialize};

use super::identity::sequence_suffix;
use super::outcome::DecisionError;

/// Credit risk band derived from the sequence digits of a personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskSegment {
    Debtor,
    Segment1,
    Segment2,
    Segment3,
}

impl RiskSegment {
    pub const ALL: [RiskSegment; 4] = [
        RiskSegment::Debtor,
        RiskSegment::Segment1,
        RiskSegment::Segment2,
        RiskSegment::Segment3,
    ];

    /// Inclusive sequence range covered by this band.
    pub const fn bounds(self) -> (u16, u16) {
        match self {
            RiskSegment::Debtor => (0, 2499),
            RiskSegment::Segment1 => (2500, 4999),
            RiskSegment::Segment2 => (5000, 7499),
            RiskSegment::Segment3 => (7500, 9999),
        }
    }

    /// Zero means no loan can ever be offered.
    pub const fn credit_modifier(self) -> u32 {
        match self {
            RiskSegment::Debtor => 0,
            RiskSegment::Segment1 => 100,
            RiskSegment::Segment2 => 300,
            RiskSegment::Segment3 => 1000,
        }
    }

    pub fn from_sequence(sequence: u16) -> Option<RiskSegment> {
        Self::ALL.into_iter().find(|segment| {
            let (min, max) = segment.bounds();
            (min..=max).contains(&sequence)
        })
    }

    pub fn from_code(personal_code: &str) -> Result<RiskSegment, DecisionError> {
        let suffix = sequence_suffix(personal_code)
            .ok_or_else(|| DecisionError::InvalidSegmentValue(personal_code.to_string()))?;

        if !suffix.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(DecisionError::InvalidSegmentValue(suffix.to_string()));
        }

        suffix
            .parse::<u16>()
            .ok()
            .and_then(Self::from_sequence)
            .ok_or_else(|| DecisionError::InvalidSegmentValue(suffix.to_string()))
    }
}

/// Credit modifier for an already validated personal code.
pub fn credit_modifier(personal_code: &str) -> Result<u32, DecisionError> {
    RiskSegment::from_code(personal_code).map(RiskSegment::credit_modifier)
}
