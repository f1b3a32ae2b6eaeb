//! Personality vector: the 4D profile and its arithmetic.
//!
//! All operations are pure. Out-of-range input is never rejected: it is
//! clamped into `[0, 1]`, and non-finite components are repaired
//! (NaN → 0, +∞ → 1, −∞ → 0) so a malformed inference result degrades into
//! a usable profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral prior for every dimension before any profiling has happened.
pub const NEUTRAL: f64 = 0.5;

fn neutral() -> f64 {
    NEUTRAL
}

// ============================================================================
// Dimensions
// ============================================================================

/// The four axes of a [`PersonalityVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Logical density, focus, commitment to a line of reasoning.
    Discipline,
    /// Metaphorical complexity, creative openness.
    Novelty,
    /// Emotional intensity, responsiveness.
    Reactivity,
    /// Organizational rigor of information presentation.
    Structure,
}

impl Dimension {
    /// All four dimensions in canonical order.
    pub const ALL: [Dimension; 4] = [
        Self::Discipline,
        Self::Novelty,
        Self::Reactivity,
        Self::Structure,
    ];

    /// Field name as it appears in records and payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discipline => "discipline",
            Self::Novelty => "novelty",
            Self::Reactivity => "reactivity",
            Self::Structure => "structure",
        }
    }

    /// Single-letter key used in compact profile summaries.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Discipline => "D",
            Self::Novelty => "N",
            Self::Reactivity => "R",
            Self::Structure => "S",
        }
    }
}

// ============================================================================
// PersonalityVector
// ============================================================================

/// A user's inferred communication profile. Each field lives in `[0, 1]`
/// once it has passed through [`clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityVector {
    #[serde(default = "neutral")]
    pub discipline: f64,
    #[serde(default = "neutral")]
    pub novelty: f64,
    #[serde(default = "neutral")]
    pub reactivity: f64,
    #[serde(default = "neutral")]
    pub structure: f64,
}

impl PersonalityVector {
    /// The initial profile: every dimension at [`NEUTRAL`].
    pub const INITIAL: PersonalityVector = PersonalityVector {
        discipline: NEUTRAL,
        novelty: NEUTRAL,
        reactivity: NEUTRAL,
        structure: NEUTRAL,
    };

    /// Build a vector as given; no clamping.
    pub fn new(discipline: f64, novelty: f64, reactivity: f64, structure: f64) -> Self {
        Self {
            discipline,
            novelty,
            reactivity,
            structure,
        }
    }

    /// Same value on every axis.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Discipline => self.discipline,
            Dimension::Novelty => self.novelty,
            Dimension::Reactivity => self.reactivity,
            Dimension::Structure => self.structure,
        }
    }

    /// Components in [`Dimension::ALL`] order.
    pub fn components(&self) -> [f64; 4] {
        [self.discipline, self.novelty, self.reactivity, self.structure]
    }

    /// Euclidean distance to `other`. See [`distance`].
    pub fn distance(&self, other: &PersonalityVector) -> f64 {
        distance(self, other)
    }

    /// Copy with every component clamped. See [`clamp`].
    pub fn clamped(&self) -> Self {
        clamp(self)
    }

    /// True when every component is finite and inside `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.components()
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
    }
}

impl Default for PersonalityVector {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for PersonalityVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "D={:.2} N={:.2} R={:.2} S={:.2}",
            self.discipline, self.novelty, self.reactivity, self.structure
        )
    }
}

/// Euclidean distance over the four dimensions. Range `[0, 2]` for
/// normalized inputs; symmetric; zero iff the vectors are equal.
pub fn distance(a: &PersonalityVector, b: &PersonalityVector) -> f64 {
    a.components()
        .iter()
        .zip(b.components().iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Clamp every component into `[0, 1]`. Idempotent.
pub fn clamp(v: &PersonalityVector) -> PersonalityVector {
    PersonalityVector {
        discipline: clamp_unit(v.discipline),
        novelty: clamp_unit(v.novelty),
        reactivity: clamp_unit(v.reactivity),
        structure: clamp_unit(v.structure),
    }
}

/// Clamp a scalar into `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("Non-finite component (NaN) replaced with 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        if value.is_infinite() {
            log::warn!("Non-finite component ({}) clamped", value);
        } else {
            log::debug!("Out-of-range component {} clamped", value);
        }
    }
    value.clamp(0.0, 1.0)
}

// ============================================================================
// VectorRecord
// ============================================================================

/// A vector plus the number of completed recalibration cycles.
///
/// Owned by the storage collaborator; the engine only receives and returns
/// it. Missing fields decode to the neutral prior and a zero count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorRecord {
    #[serde(flatten)]
    pub vector: PersonalityVector,
    #[serde(default)]
    pub turn_count: u32,
}

impl VectorRecord {
    /// First-contact record: neutral vector, no cycles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vector(vector: PersonalityVector, turn_count: u32) -> Self {
        Self { vector, turn_count }
    }

    /// True until the first recalibration has been committed.
    pub fn is_unprofiled(&self) -> bool {
        self.turn_count == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
