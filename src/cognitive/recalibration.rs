//! Recalibration: turning an inference result into the next record.
//!
//! ```text
//! model text ──from_json──▶ RawCalibration ─┬─ vector()    ─clamp─▶ new VectorRecord
//!                                           └─ overrides() ───────▶ ShadowTelemetry
//! ```
//!
//! The transition is pure. The storage collaborator must write the returned
//! record and telemetry together for the same `turnIndex`.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::telemetry::{synthesize_at, ShadowTelemetry, TelemetryOverrides};
use super::vector::{Dimension, PersonalityVector, VectorRecord};
use crate::conversation::ChatMessage;
use crate::error::EngineError;

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").unwrap());
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

// ============================================================================
// Raw calibration payload
// ============================================================================

/// Candidate values returned by the external inference call.
///
/// Nothing here is trusted: dimensions are clamped by [`recalibrate`] and
/// the scalars go through the telemetry override rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalibration {
    pub discipline: f64,
    pub novelty: f64,
    pub reactivity: f64,
    pub structure: f64,
    #[serde(default)]
    pub cognitive_load: Option<f64>,
    #[serde(default)]
    pub mindset_drift: Option<f64>,
}

impl RawCalibration {
    /// Parse model output. Accepts a bare JSON object, a fenced ```json
    /// block, or prose with one `{...}` span in it.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let value = parse_object(text)?;
        Self::from_value(&value)
    }

    /// Read the payload out of an already parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, EngineError> {
        let obj = value.as_object().ok_or_else(|| {
            EngineError::Validation("calibration payload is not a JSON object".into())
        })?;

        let dim = |d: Dimension| -> Result<f64, EngineError> {
            obj.get(d.name())
                .and_then(Value::as_f64)
                .ok_or_else(|| EngineError::MissingField(d.name().to_string()))
        };
        let scalar = |key: &str| obj.get(key).and_then(Value::as_f64);

        Ok(Self {
            discipline: dim(Dimension::Discipline)?,
            novelty: dim(Dimension::Novelty)?,
            reactivity: dim(Dimension::Reactivity)?,
            structure: dim(Dimension::Structure)?,
            cognitive_load: scalar("cognitiveLoad"),
            mindset_drift: scalar("mindsetDrift"),
        })
    }

    /// The candidate vector, unclamped.
    pub fn vector(&self) -> PersonalityVector {
        PersonalityVector::new(self.discipline, self.novelty, self.reactivity, self.structure)
    }

    pub fn overrides(&self) -> TelemetryOverrides {
        TelemetryOverrides {
            cognitive_load: self.cognitive_load,
            mindset_drift: self.mindset_drift,
        }
    }
}

/// Find a JSON object in free-form model output.
fn parse_object(text: &str) -> Result<Value, EngineError> {
    let direct_err = match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let fenced = FENCED_BLOCK
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim());
    let spans = JSON_OBJECT.find_iter(text).map(|m| m.as_str());

    for candidate in fenced.chain(spans) {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            log::debug!("Calibration payload extracted from surrounding text");
            return Ok(value);
        }
    }

    Err(direct_err.into())
}

// ============================================================================
// Transition
// ============================================================================

/// Result of one recalibration: both halves are written together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recalibration {
    pub record: VectorRecord,
    pub telemetry: ShadowTelemetry,
}

/// Apply `raw` to `current`, stamped with the current time.
pub fn recalibrate(
    current: &VectorRecord,
    raw: &RawCalibration,
    messages: &[ChatMessage],
) -> Recalibration {
    recalibrate_at(current, raw, messages, Utc::now())
}

/// [`recalibrate`] with an explicit timestamp.
pub fn recalibrate_at(
    current: &VectorRecord,
    raw: &RawCalibration,
    messages: &[ChatMessage],
    timestamp: DateTime<Utc>,
) -> Recalibration {
    let vector = raw.vector().clamped();
    let turn_count = current.turn_count.saturating_add(1);

    let telemetry = synthesize_at(
        &vector,
        &current.vector,
        messages,
        turn_count,
        raw.overrides(),
        timestamp,
    );

    log::debug!(
        "Recalibrated to {} at turn {} (distance={:.3})",
        vector,
        turn_count,
        telemetry.vector_distance
    );

    Recalibration {
        record: VectorRecord::with_vector(vector, turn_count),
        telemetry,
    }
}

// ============================================================================
// Tests
// ============================================================================
