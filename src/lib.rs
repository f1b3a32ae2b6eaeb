//! # MindFlow Engine
//!
//! The cognitive core of the MindFlow companion: it maintains a per-user
//! personality vector, derives a linguistic style and system prompt from it,
//! and summarizes each recalibration as shadow telemetry.
//!
//! The crate never touches a network, a display, or a datastore. Callers
//! supply the vector record and conversation slice, forward the generated
//! prompts to their text-generation backend, and persist what comes back.

pub mod cognitive;
pub mod config;
pub mod conversation;
pub mod error;

pub use cognitive::{
    compose, recalibrate, synthesize, LinguisticStyle, PersonalityVector, RawCalibration,
    Recalibration, RhetoricalPattern, ShadowTelemetry, TelemetryOverrides, VectorRecord,
};
pub use config::EngineConfig;
pub use conversation::{ChatMessage, Role};
pub use error::EngineError;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    /// One full cycle as an orchestrator would drive it.
    #[test]
    fn test_end_to_end_cycle() {
        let config = EngineConfig::default();
        let record = VectorRecord::new();
        let mut history = vec![
            ChatMessage::user("I keep circling the same thought."),
            ChatMessage::assistant("What do you notice about the circling?"),
            ChatMessage::user("It feels heavy. Like fog."),
        ];

        let first_prompt = compose(&record.vector);
        assert!(first_prompt.contains("Presuppositions"));

        let request = cognitive::compose_recalibration_prompt(&record, &history, &config);
        assert!(request.contains("USER: It feels heavy. Like fog."));

        let model_reply = r#"```json
{"discipline":0.35,"novelty":0.82,"reactivity":0.74,"structure":0.22,"mindsetDrift":0.3}
```"#;
        let raw = RawCalibration::from_json(model_reply).unwrap();
        let out = recalibrate(&record, &raw, &history);

        assert_eq!(out.record.turn_count, 1);
        assert_eq!(out.telemetry.turn_index, out.record.turn_count);
        assert_eq!(out.telemetry.mindset_drift, 0.3);
        assert!(out.telemetry.cognitive_load > 0.0);
        assert!(out
            .telemetry
            .active_patterns
            .contains(&RhetoricalPattern::PhonologicalAmbiguity));

        let next_prompt = compose(&out.record.vector);
        assert_ne!(first_prompt, next_prompt);
        assert!(next_prompt.contains("heavy recursive metaphors"));
        assert!(next_prompt.contains("stream of consciousness flow"));

        history.push(ChatMessage::assistant("Fog can lift."));
        assert_eq!(conversation::user_turn_count(&history), 2);
    }
}
