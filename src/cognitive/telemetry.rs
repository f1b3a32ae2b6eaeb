//! Shadow telemetry: one immutable record per recalibration.
//!
//! `vectorDistance` is always the geometric distance between the new and
//! prior vectors. `mindsetDrift` and `cognitiveLoad` prefer an externally
//! estimated value when the orchestrator has one, and otherwise fall back to
//! the distance and to the [`cognitive_load`] heuristic respectively.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{select_patterns, PatternSet};
use super::vector::{clamp_unit, distance, PersonalityVector};
use crate::conversation::{latest_user_message, ChatMessage};

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// ============================================================================
// Record
// ============================================================================

/// Diagnostic snapshot of a recalibration transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowTelemetry {
    /// Processing difficulty of the user's latest message, `[0, 1]`.
    pub cognitive_load: f64,
    /// Perspective shift since the prior reading, `[0, 1]`.
    pub mindset_drift: f64,
    /// Patterns selected for the new vector.
    pub active_patterns: PatternSet,
    /// Euclidean distance between new and prior vectors, `[0, 2]`.
    pub vector_distance: f64,
    /// Turn count after this recalibration.
    pub turn_index: u32,
    /// Wall-clock time of synthesis, millisecond resolution on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Externally estimated scalars, typically returned by the inference call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryOverrides {
    #[serde(default)]
    pub cognitive_load: Option<f64>,
    #[serde(default)]
    pub mindset_drift: Option<f64>,
}

impl TelemetryOverrides {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Use `value` when it is present and finite; clamp it into `[0, 1]`.
fn resolve_override(name: &str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => Some(clamp_unit(v)),
        Some(v) => {
            log::warn!("Discarding non-finite {} override: {}", name, v);
            None
        }
        None => None,
    }
}

// ============================================================================
// Synthesis
// ============================================================================

/// Build the telemetry record for a transition from `prior` to `new`,
/// stamped with the current time.
pub fn synthesize(
    new: &PersonalityVector,
    prior: &PersonalityVector,
    recent_messages: &[ChatMessage],
    turn_index: u32,
    overrides: TelemetryOverrides,
) -> ShadowTelemetry {
    synthesize_at(new, prior, recent_messages, turn_index, overrides, Utc::now())
}

/// [`synthesize`] with an explicit timestamp.
pub fn synthesize_at(
    new: &PersonalityVector,
    prior: &PersonalityVector,
    recent_messages: &[ChatMessage],
    turn_index: u32,
    overrides: TelemetryOverrides,
    timestamp: DateTime<Utc>,
) -> ShadowTelemetry {
    let new = new.clamped();
    let prior = prior.clamped();
    let vector_distance = distance(&new, &prior);

    let mindset_drift = resolve_override("mindset_drift", overrides.mindset_drift)
        .unwrap_or_else(|| clamp_unit(vector_distance));
    let cognitive_load = resolve_override("cognitive_load", overrides.cognitive_load)
        .unwrap_or_else(|| cognitive_load(recent_messages));

    ShadowTelemetry {
        cognitive_load,
        mindset_drift,
        active_patterns: select_patterns(&new),
        vector_distance,
        turn_index,
        timestamp,
    }
}

// ============================================================================
// Cognitive load heuristic
// ============================================================================

/// Approximate processing difficulty of the most recent user message.
///
/// Returns 0 when there is no user-authored turn. This is a hand-tuned
/// heuristic, not a learned model; replace freely.
pub fn cognitive_load(messages: &[ChatMessage]) -> f64 {
    latest_user_message(messages).map_or(0.0, cognitive_load_of)
}

/// Score a single text: `0.4·(L/8) + 0.3·(w/50) + 0.3·(1/s)` clamped to
/// `[0, 1]`, where `w` is the word count, `L` the mean non-whitespace
/// characters per word and `s` the sentence count (at least 1).
///
/// Text with no words scores 0.
pub fn cognitive_load_of(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }
    let chars = text.chars().filter(|c| !c.is_whitespace()).count();
    let mean_word_len = chars as f64 / words as f64;
    let sentences = SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);

    let score = 0.4 * (mean_word_len / 8.0)
        + 0.3 * (words as f64 / 50.0)
        + 0.3 * (1.0 / sentences as f64);
    score.clamp(0.0, 1.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognitive::patterns::RhetoricalPattern;
    use crate::conversation::Role;
    use chrono::TimeZone;

    const EPS: f64 = 1e-9;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_identical_vectors_zero_distance_and_drift() {
        let v = PersonalityVector::INITIAL;
        let t = synthesize(&v, &v, &[], 1, TelemetryOverrides::none());
        assert_eq!(t.vector_distance, 0.0);
        assert_eq!(t.mindset_drift, 0.0);
        assert_eq!(t.cognitive_load, 0.0);
        assert_eq!(t.turn_index, 1);
    }

    #[test]
    fn test_uniform_shift_distance() {
        let t = synthesize_at(
            &PersonalityVector::uniform(0.8),
            &PersonalityVector::uniform(0.2),
            &[],
            2,
            TelemetryOverrides::none(),
            at(),
        );
        assert!((t.vector_distance - 1.2).abs() < EPS);
        // Drift falls back to the distance, clamped into [0, 1].
        assert_eq!(t.mindset_drift, 1.0);
        assert!(t.active_patterns.contains(&RhetoricalPattern::DoubleBind));
    }

    #[test]
    fn test_drift_defaults_to_distance_below_one() {
        let prior = PersonalityVector::INITIAL;
        let new = PersonalityVector { novelty: 0.8, ..prior };
        let t = synthesize_at(&new, &prior, &[], 1, TelemetryOverrides::none(), at());
        assert!((t.mindset_drift - t.vector_distance).abs() < EPS);
        assert!((t.vector_distance - 0.3).abs() < EPS);
    }

    #[test]
    fn test_overrides_win_and_are_clamped() {
        let v = PersonalityVector::INITIAL;
        let overrides = TelemetryOverrides {
            cognitive_load: Some(1.7),
            mindset_drift: Some(0.42),
        };
        let t = synthesize_at(&v, &v, &[ChatMessage::user("hello there")], 3, overrides, at());
        assert_eq!(t.cognitive_load, 1.0);
        assert_eq!(t.mindset_drift, 0.42);
        // Distance is always computed, regardless of overrides.
        assert_eq!(t.vector_distance, 0.0);
    }

    #[test]
    fn test_non_finite_override_falls_back() {
        let prior = PersonalityVector::INITIAL;
        let new = PersonalityVector { structure: 0.9, ..prior };
        let overrides = TelemetryOverrides {
            cognitive_load: Some(f64::NAN),
            mindset_drift: Some(f64::INFINITY),
        };
        let t = synthesize_at(&new, &prior, &[], 1, overrides, at());
        assert!((t.mindset_drift - 0.4).abs() < EPS);
        assert_eq!(t.cognitive_load, 0.0);
    }

    #[test]
    fn test_inputs_are_clamped_before_distance() {
        let t = synthesize_at(
            &PersonalityVector::uniform(5.0),
            &PersonalityVector::uniform(1.0),
            &[],
            1,
            TelemetryOverrides::none(),
            at(),
        );
        assert_eq!(t.vector_distance, 0.0);
    }

    #[test]
    fn test_load_empty_history_is_zero() {
        assert_eq!(cognitive_load(&[]), 0.0);
        assert_eq!(cognitive_load(&[ChatMessage::assistant("long reply text.")]), 0.0);
    }

    #[test]
    fn test_load_uses_latest_user_message_only() {
        let msgs = vec![
            ChatMessage::user("I wonder."),
            ChatMessage::assistant("Tell me more about that wondering, please."),
        ];
        // w=2, L=8/2=4, s=1 → 0.2 + 0.012 + 0.3
        assert!((cognitive_load(&msgs) - 0.512).abs() < EPS);
    }

    #[test]
    fn test_load_counts_sentences() {
        // w=4, chars=11 → L=2.75, s=2 → 0.1375 + 0.024 + 0.15
        let got = cognitive_load_of("I am. You are!");
        assert!((got - 0.3115).abs() < EPS, "got {}", got);
    }

    #[test]
    fn test_load_whitespace_only_segments_ignored() {
        // Trailing whitespace after the break is not a sentence.
        assert!((cognitive_load_of("Hi. ") - cognitive_load_of("Hi.")).abs() < EPS);
    }

    #[test]
    fn test_load_blank_message_is_zero() {
        assert_eq!(cognitive_load_of("   \n\t"), 0.0);
        assert_eq!(cognitive_load(&[ChatMessage::new(Role::User, "")]), 0.0);
    }

    #[test]
    fn test_load_is_clamped() {
        let dense = "Incomprehensibilities ".repeat(80);
        assert_eq!(cognitive_load_of(&dense), 1.0);
    }

    #[test]
    fn test_timestamp_serializes_as_millis() {
        let v = PersonalityVector::INITIAL;
        let t = synthesize_at(&v, &v, &[], 7, TelemetryOverrides::none(), at());
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_123_i64);
        assert_eq!(json["turnIndex"], 7);
        assert_eq!(
            json["activePatterns"],
            serde_json::json!(["presupposition", "conversational-postulate"])
        );

        let back: ShadowTelemetry = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
