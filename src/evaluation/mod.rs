mod rules;
mod score;

pub use score::Grade;

use crate::persona::PersonaConfig;
use crate::trace::{Complexity, TimeCategory, TraceStep};
use serde::{Deserialize, Serialize};

/// Per-step line of the evaluation breakdown. Millisecond fields are rounded
/// to the nearest integer for display; the rule string records the formula
/// that was actually applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepBreakdown {
    pub step: String,
    pub category: TimeCategory,
    pub complexity: Complexity,
    pub original_ms: i64,
    pub think_time_ms: i64,
    pub base_perceived_ms: i64,
    pub final_pain_ms: i64,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

/// Sequence-level statistics; serializes under the `complexity` key of the
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceStats {
    /// Steps that count toward perception (everything except instrumentation).
    pub valid_steps: usize,
    /// Total time the persona should tolerate for the whole sequence.
    pub expected_time_ms: f64,
    pub total_steps: usize,
    /// Diagnostic steps whose description mentions an error.
    pub breakpoints: usize,
}

/// Aggregate + per-step output of an evaluation. Pure derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Sum of raw step durations, all categories, unweighted.
    pub total_physical_time: f64,
    /// Sum of base perceived durations, before pain multipliers.
    pub total_base_perceived_time: f64,
    /// Sum of the rounded per-step pain scores.
    pub total_pain_score: i64,
    pub persona_factor: f64,
    pub expectation_bias: f64,
    pub complexity: SequenceStats,
    pub score: Grade,
    pub breakdown: Vec<StepBreakdown>,
}

/// Evaluates an ordered trace against a persona. Pure and deterministic:
/// repeated calls with the same inputs produce identical results.
pub fn evaluate(steps: &[TraceStep], persona: &PersonaConfig) -> EvaluationResult {
    let mut total_physical_time = 0.0;
    let mut total_base_perceived_time = 0.0;
    let mut expected_time_ms = 0.0;
    let mut valid_steps = 0;
    let mut breakpoints = 0;
    let mut breakdown = Vec::with_capacity(steps.len());

    for step in steps {
        let (entry, signals) = rules::transform_step(step, persona);

        total_physical_time += step.duration_ms;
        total_base_perceived_time += signals.base_perceived_ms;
        if let Some(expected) = signals.expected_ms {
            expected_time_ms += expected;
            valid_steps += 1;
        }
        if signals.is_breakpoint {
            breakpoints += 1;
        }

        breakdown.push(entry);
    }

    let total_pain_score: i64 = breakdown.iter().map(|entry| entry.final_pain_ms).sum();

    EvaluationResult {
        total_physical_time,
        total_base_perceived_time,
        total_pain_score,
        persona_factor: persona.persona_factor,
        expectation_bias: persona.expectation_bias,
        complexity: SequenceStats {
            valid_steps,
            expected_time_ms,
            total_steps: steps.len(),
            breakpoints,
        },
        score: Grade::classify(total_pain_score, expected_time_ms),
        breakdown,
    }
}
