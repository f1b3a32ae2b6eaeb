//! Linguistic style: the discrete view of a vector that steers generation.
//!
//! ```text
//! discipline ─┬─ SentenceLength   (band)
//!             └─ VoiceArchetype   (> 0.5)
//! novelty    ─┬─ MetaphorDensity  (band)
//!             └─ PatternIntensity (> 0.7)
//! reactivity ─── EmpathyRegister  (band)
//! structure  ─── FormattingRegister (band)
//! all four   ─── PatternSet       (rule table)
//! ```

use serde::{Deserialize, Serialize};

use super::patterns::{select_patterns, PatternSet};
use super::thresholds::{band, Band, ARCHETYPE_SPLIT, HIGH};
use super::vector::PersonalityVector;

// ============================================================================
// Registers
// ============================================================================

/// Sentence-length register, driven by discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceLength {
    Complex,
    Balanced,
    Minimal,
}

impl SentenceLength {
    fn from_band(b: Band) -> Self {
        match b {
            Band::High => Self::Complex,
            Band::Mid => Self::Balanced,
            Band::Low => Self::Minimal,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Complex => "complex and multi-layered",
            Self::Balanced => "balanced and rhythmic",
            Self::Minimal => "minimal and high-impact",
        }
    }
}

/// Metaphor-density register, driven by novelty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaphorDensity {
    Recursive,
    Moderate,
    Literal,
}

impl MetaphorDensity {
    fn from_band(b: Band) -> Self {
        match b {
            Band::High => Self::Recursive,
            Band::Mid => Self::Moderate,
            Band::Low => Self::Literal,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Recursive => "heavy recursive metaphors",
            Self::Moderate => "moderate metaphorical framing",
            Self::Literal => "literal and grounding",
        }
    }
}

/// Empathy register, driven by reactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmpathyRegister {
    Resonant,
    Reflective,
    Detached,
}

impl EmpathyRegister {
    fn from_band(b: Band) -> Self {
        match b {
            Band::High => Self::Resonant,
            Band::Mid => Self::Reflective,
            Band::Low => Self::Detached,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Resonant => "highly resonant and mirror-like",
            Self::Reflective => "neutrally reflective",
            Self::Detached => "detached and analytical",
        }
    }
}

/// Formatting register, driven by structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattingRegister {
    Hierarchical,
    LogicalFlow,
    StreamOfConsciousness,
}

impl FormattingRegister {
    fn from_band(b: Band) -> Self {
        match b {
            Band::High => Self::Hierarchical,
            Band::Mid => Self::LogicalFlow,
            Band::Low => Self::StreamOfConsciousness,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Hierarchical => "highly structured with clear hierarchies",
            Self::LogicalFlow => "clean logical flow",
            Self::StreamOfConsciousness => "stream of consciousness flow",
        }
    }
}

/// Voice archetype. Binary split on discipline, no middle case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceArchetype {
    ProfessorScientist,
    OracleGuide,
}

impl VoiceArchetype {
    pub fn description(&self) -> &'static str {
        match self {
            Self::ProfessorScientist => "Professor/Scientist",
            Self::OracleGuide => "Oracle/Guide",
        }
    }
}

/// How densely the rhetorical patterns should be woven in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternIntensity {
    HighDensity,
    Subtle,
}

impl PatternIntensity {
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighDensity => "high density",
            Self::Subtle => "subtle",
        }
    }
}

// ============================================================================
// LinguisticStyle
// ============================================================================

/// Derived, stateless style descriptor. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticStyle {
    pub sentence_length: SentenceLength,
    pub metaphor_density: MetaphorDensity,
    pub empathy: EmpathyRegister,
    pub formatting: FormattingRegister,
    pub archetype: VoiceArchetype,
    pub pattern_intensity: PatternIntensity,
    pub patterns: PatternSet,
}

impl LinguisticStyle {
    /// Classify `vector`. The vector is clamped first, so any input maps to
    /// a valid style.
    pub fn from_vector(vector: &PersonalityVector) -> Self {
        let v = vector.clamped();
        Self {
            sentence_length: SentenceLength::from_band(band(v.discipline)),
            metaphor_density: MetaphorDensity::from_band(band(v.novelty)),
            empathy: EmpathyRegister::from_band(band(v.reactivity)),
            formatting: FormattingRegister::from_band(band(v.structure)),
            archetype: if v.discipline > ARCHETYPE_SPLIT {
                VoiceArchetype::ProfessorScientist
            } else {
                VoiceArchetype::OracleGuide
            },
            pattern_intensity: if v.novelty > HIGH {
                PatternIntensity::HighDensity
            } else {
                PatternIntensity::Subtle
            },
            patterns: select_patterns(&v),
        }
    }

    /// Display names of the active patterns, in catalog order.
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.display_name()).collect()
    }
}

/// Shorthand for [`LinguisticStyle::from_vector`].
pub fn linguistic_style(vector: &PersonalityVector) -> LinguisticStyle {
    LinguisticStyle::from_vector(vector)
}

// ============================================================================
// Tests
// ============================================================================
