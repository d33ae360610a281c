//! JSON seam between the core and whatever transport delivers payloads.
//! Malformed input is rejected here, before any evaluation runs.

use crate::error::InputError;
use crate::persona::PersonaInput;
use crate::trace::TraceStep;

/// Parses a JSON array of trace steps. Non-numeric durations, unknown
/// categories, and shape mismatches are reported as [`InputError`]
/// without partial results.
pub fn steps_from_json(payload: &str) -> Result<Vec<TraceStep>, InputError> {
    serde_json::from_str(payload).map_err(InputError::InvalidSteps)
}

/// Parses a persona descriptor: either a JSON string (preset id/key) or a
/// JSON object (partial or full config).
pub fn persona_input_from_json(payload: &str) -> Result<PersonaInput, InputError> {
    serde_json::from_str(payload).map_err(InputError::InvalidPersona)
}
