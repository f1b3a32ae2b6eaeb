//! Threshold table shared by style mapping and pattern selection.
//!
//! Every cut point used to classify a vector lives here so the two call
//! sites cannot drift apart. Comparisons are strict: a value sitting exactly
//! on a threshold falls into the middle band.

use serde::{Deserialize, Serialize};

/// Above this a dimension reads as "high".
pub const HIGH: f64 = 0.7;
/// Below this a dimension reads as "low".
pub const LOW: f64 = 0.3;
/// Discipline above this selects the Professor/Scientist archetype.
pub const ARCHETYPE_SPLIT: f64 = 0.5;

/// Novelty above this adds mind-reading and presupposition.
pub const NOVELTY_PATTERN_TRIGGER: f64 = 0.6;
/// Reactivity above this adds embedded commands and double binds.
pub const REACTIVITY_PATTERN_TRIGGER: f64 = 0.5;
/// Discipline above this adds tag questions and conversational postulates.
pub const DISCIPLINE_PATTERN_TRIGGER: f64 = 0.6;
/// Structure below this adds selectional-restriction violations and
/// phonological ambiguity.
pub const STRUCTURE_PATTERN_TRIGGER: f64 = 0.4;

/// Three-way reading of a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Mid,
    High,
}

/// Classify a value against [`HIGH`] and [`LOW`].
pub fn band(value: f64) -> Band {
    if value > HIGH {
        Band::High
    } else if value < LOW {
        Band::Low
    } else {
        Band::Mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_are_mid() {
        assert_eq!(band(HIGH), Band::Mid);
        assert_eq!(band(LOW), Band::Mid);
        assert_eq!(band(0.71), Band::High);
        assert_eq!(band(0.29), Band::Low);
        assert_eq!(band(0.5), Band::Mid);
    }
}
