//! Cognitive vector engine: personality-adaptive prompting.
//!
//! A 4D personality vector drives a discrete linguistic style, a set of
//! rhetorical patterns, and the system prompt for every reply. Every few
//! user turns the orchestrator asks an external model for a fresh vector;
//! this module clamps it, measures how far it moved, and emits a shadow
//! telemetry record.
//!
//! # Architecture
//!
//! ```text
//! PersonalityVector (discipline, novelty, reactivity, structure)
//!   ↓  thresholds::band / pattern rule table
//! LinguisticStyle { registers…, PatternSet }
//!   ↓  fixed template
//! system prompt String
//!
//! RawCalibration (model output)
//!   ↓  clamp + distance
//! Recalibration { VectorRecord, ShadowTelemetry }
//! ```
//!
//! Nothing here holds state, performs I/O, or schedules work; every entry
//! point is a pure function of its arguments and safe to call concurrently.

pub mod patterns;
pub mod prompt;
pub mod recalibration;
pub mod style;
pub mod telemetry;
pub mod thresholds;
pub mod vector;

// Re-exports
pub use patterns::{select_patterns, PatternRule, PatternSet, RhetoricalPattern, PATTERN_RULES};
pub use prompt::{
    compose, compose_breakthrough_prompt, compose_recalibration_prompt, compose_with,
    BREAKTHROUGH_SYSTEM_PROMPT,
};
pub use recalibration::{recalibrate, RawCalibration, Recalibration};
pub use style::{
    linguistic_style, EmpathyRegister, FormattingRegister, LinguisticStyle, MetaphorDensity,
    PatternIntensity, SentenceLength, VoiceArchetype,
};
pub use telemetry::{cognitive_load, synthesize, ShadowTelemetry, TelemetryOverrides};
pub use vector::{clamp, distance, Dimension, PersonalityVector, VectorRecord};
