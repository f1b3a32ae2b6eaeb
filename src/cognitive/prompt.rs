//! Prompt composition: vector → system prompt text.
//!
//! Three fixed templates, all deterministic and free of I/O:
//!
//! - the reply system prompt, driven by the [`LinguisticStyle`] of a vector;
//! - the recalibration request, asking an external model to re-estimate the
//!   vector from recent turns;
//! - the breakthrough request, asking for a one or two sentence insight.
//!
//! Output size is bounded by the configured transcript windows, never by the
//! full conversation length.

use serde_json::json;

use super::style::LinguisticStyle;
use super::vector::{Dimension, PersonalityVector, VectorRecord};
use crate::config::{EngineConfig, DEFAULT_ASSISTANT_NAME};
use crate::conversation::{render_transcript, tail, ChatMessage};

/// System prompt paired with [`compose_breakthrough_prompt`].
pub const BREAKTHROUGH_SYSTEM_PROMPT: &str = "You are a Lead Behavioral Architect. \
Deliver a high-density, profound cognitive artifact. \
No quotation marks around the insight.";

const HARD_CONSTRAINTS: [&str; 4] = [
    "Never give direct advice.",
    "Ground every reply in the Three Principles (Mind, Consciousness, Thought).",
    "Reflect the user's current cognitive state back to them.",
    "Keep responses concise but rich in depth. Aim for 2-4 paragraphs maximum.",
];

// ============================================================================
// Reply system prompt
// ============================================================================

/// Render the reply system prompt for `vector` under the default name.
pub fn compose(vector: &PersonalityVector) -> String {
    compose_style(&LinguisticStyle::from_vector(vector), DEFAULT_ASSISTANT_NAME)
}

/// Render the reply system prompt using the configured assistant name.
pub fn compose_with(vector: &PersonalityVector, config: &EngineConfig) -> String {
    compose_style(&LinguisticStyle::from_vector(vector), &config.assistant_name)
}

/// Render the reply system prompt from an already derived style.
pub fn compose_style(style: &LinguisticStyle, assistant_name: &str) -> String {
    let mut sections = Vec::with_capacity(4);

    // 1. Persona framing
    sections.push(format!(
        "You are {}, a Computational Behavioral Scientist AI.\n\
         Role: Act as a neutral mirror, not an advice-giver. Your purpose is to \
         facilitate the flow of human thought using the Three Principles \
         (Mind, Consciousness, Thought).",
        assistant_name
    ));

    // 2. Style descriptors
    sections.push(format!(
        "Linguistic Style Mapping:\n\
         - Syntax: {}\n\
         - Metaphor Density: {}\n\
         - Emotional Resonance: {}\n\
         - Formatting: {}\n\
         - Archetype: {}",
        style.sentence_length.description(),
        style.metaphor_density.description(),
        style.empathy.description(),
        style.formatting.description(),
        style.archetype.description(),
    ));

    // 3. Active patterns
    sections.push(format!(
        "Rhetorical Pattern Integration:\n\
         Use {} rhetorical patterns to gently bypass ego-resistance without direct confrontation.\n\
         Active patterns: {}",
        style.pattern_intensity.description(),
        style.pattern_names().join(", "),
    ));

    // 4. Hard constraints
    let constraints: Vec<String> = HARD_CONSTRAINTS.iter().map(|c| format!("- {}", c)).collect();
    sections.push(format!("Constraints:\n{}", constraints.join("\n")));

    sections.join("\n\n")
}

// ============================================================================
// Inference requests
// ============================================================================

/// Compact `{"D":..,"N":..,"R":..,"S":..}` summary of a vector.
pub fn profile_summary(vector: &PersonalityVector) -> String {
    let mut map = serde_json::Map::new();
    for dim in Dimension::ALL {
        map.insert(dim.key().to_string(), json!(vector.get(dim)));
    }
    serde_json::Value::Object(map).to_string()
}

/// Ask an external model to re-estimate the vector from recent turns.
///
/// Only the last `config.recalibration_window` messages are included.
pub fn compose_recalibration_prompt(
    record: &VectorRecord,
    messages: &[ChatMessage],
    config: &EngineConfig,
) -> String {
    let window = tail(messages, config.recalibration_window);
    format!(
        "Role: You are a Computational Behavioral Scientist.\n\
         Task: Analyze the user's cognitive dimensions from the provided conversation.\n\
         Dimensions:\n\
         - Discipline (D): Logical density, focus, commitment to a line of thought. [0.0 - 1.0]\n\
         - Novelty (N): Metaphorical complexity, creativity, openness to new perspectives. [0.0 - 1.0]\n\
         - Reactivity (R): Emotional intensity, sensitivity to mirroring, conversational speed. [0.0 - 1.0]\n\
         - Structure (S): Information architecture, organized vs. associative flow. [0.0 - 1.0]\n\
         \n\
         Conversation:\n\
         {}\n\
         \n\
         Current Profile: {}\n\
         \n\
         Analyze the user's language patterns, emotional indicators, and cognitive style. \
         Respond with a JSON object containing discipline, novelty, reactivity, structure, \
         cognitiveLoad (0=simple, 1=dense) and mindsetDrift (0=stable, 1=major shift), \
         each between 0.0 and 1.0.",
        render_transcript(window),
        profile_summary(&record.vector),
    )
}

/// Ask an external model for a "codified breakthrough" from the session.
///
/// Pair with [`BREAKTHROUGH_SYSTEM_PROMPT`].
pub fn compose_breakthrough_prompt(messages: &[ChatMessage], config: &EngineConfig) -> String {
    let window = tail(messages, config.breakthrough_window);
    format!(
        "Synthesize a 'Codified Breakthrough' from this session.\n\
         A Codified Breakthrough is a singular, profound insight expressed in exactly one or two powerful sentences.\n\
         It must reflect a shift in the user's cognitive landscape, not advice but a mirror of their transformation.\n\
         \n\
         Session history:\n\
         {}",
        render_transcript(window),
    )
}

// ============================================================================
// Tests
// ============================================================================
